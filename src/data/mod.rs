pub mod dataset;
pub mod reader;

pub use dataset::Dataset;
pub use reader::{load_data, read_trips};
