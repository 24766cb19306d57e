//! Calendar helpers. Each component stands on its own; nothing here shares
//! state or depends on another component.

pub mod event;
pub mod holidays;
pub mod weekend;

pub use event::CalendarEvent;
pub use holidays::{get_holidays, HolidayFetcher};
pub use weekend::{is_weekend, is_weekend_at};
