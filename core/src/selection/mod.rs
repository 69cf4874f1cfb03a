pub mod sort;
pub mod subset;
pub mod trace;

pub use sort::sort_by_x;
pub use subset::{find_largest_subset, Selection, SubsetFinder};
pub use trace::{ScanEvent, ScanObserver, ScanTrace};
