pub mod aggregate;
pub mod calendar;
pub mod duration;
