// ValueBid marketplace utilities and search proxy

pub mod cli;
pub mod config;
pub mod countdown;
pub mod error;
pub mod log;
pub mod pagination;
pub mod proxy;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use countdown::{TERMINAL_LABEL, TimeLeft, Ticker, format_time_left};
pub use error::{Result, ValueBidError};
pub use pagination::{PageMarker, build_page_window};
