use crate::utils::time::{is_weekend_day, Clock, SystemClock};

/// Check whether today, per the system clock, is a Saturday or Sunday
pub fn is_weekend() -> bool {
    is_weekend_at(&SystemClock)
}

/// Check whether the clock's current date is a Saturday or Sunday
pub fn is_weekend_at<C: Clock + ?Sized>(clock: &C) -> bool {
    is_weekend_day(clock.today())
}
