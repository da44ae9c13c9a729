//! Wall-clock times and teaching days.

mod error;
mod time_of_day;
mod weekday;

pub use error::TimeError;
pub use time_of_day::{TimeOfDay, SECONDS_PER_DAY};
pub use weekday::Weekday;
