pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_money;
pub use time::format_hours;
