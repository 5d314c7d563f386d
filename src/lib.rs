pub mod config;
pub mod console;
pub mod data;
pub mod error;
pub mod models;
pub mod session;
pub mod stats;

pub use config::Config;
pub use error::{ExploreError, Result};
