pub mod components;
pub mod config;
pub mod error;
pub mod startup;
pub mod utils;

pub use components::event::{CalendarEvent, DateInput};
pub use components::holidays::{get_holidays, HolidayFetcher};
pub use components::weekend::is_weekend;
pub use error::{CalResult, Error};
