//! Listing output
//!
//! - `config` - color mode selection
//! - `counts` - directory/file tallies and the summary line
//! - `listing` - the indented listing itself

mod config;
mod counts;
mod listing;

pub use config::{ColorEnv, ColorMode, OutputConfig, should_use_color};
pub use counts::TreeCounts;
pub use listing::ListingFormatter;
