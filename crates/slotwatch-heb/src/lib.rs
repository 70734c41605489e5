pub mod client;
pub mod error;
pub mod types;

pub use client::HebClient;
pub use error::HebError;
pub use types::{Store, Timeslot};
