pub mod point;

pub use point::{distance, Point};
