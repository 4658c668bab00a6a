//! Directory tree walking and entry filtering
//!
//! - `TreeWalker`: collects every entry below a root, post-order
//! - `EntryFilter`: the hidden/depth/dirs-only/exclude/include predicates
//! - `ListingConfig`: the resolved options shared with the formatter

mod config;
mod entry;
mod filter;
mod pattern;
mod walker;

pub use config::ListingConfig;
pub use entry::{Entry, mode_bits, permission_string};
pub use filter::{EntryFilter, Rejection};
pub use pattern::NamePattern;
pub use walker::TreeWalker;
