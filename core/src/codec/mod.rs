//! Text codecs for the sensor input stream and the chosen-sensor file.

pub mod reader;
pub mod writer;

pub use reader::{parse_coordinates, parse_input, parse_str, read_input_file};
pub use writer::{write_chosen, write_points};
