mod date;
pub mod models;

pub use date::DateInput;
pub use models::CalendarEvent;
