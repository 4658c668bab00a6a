//! Twig - an indented directory listing with optional sizes, permissions and filters

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::WalkError;
pub use output::{ColorMode, ListingFormatter, OutputConfig, TreeCounts};
pub use tree::{Entry, EntryFilter, ListingConfig, NamePattern, TreeWalker};
