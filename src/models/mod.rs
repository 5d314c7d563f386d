pub mod filter;
pub mod trip;

pub use filter::{FilterSelection, TimeFilter};
pub use trip::{RawTrip, TripRecord};
