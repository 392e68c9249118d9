pub mod calculator;
pub mod state;
pub mod worklog;

pub use state::AppState;
pub use worklog::Worklog;
