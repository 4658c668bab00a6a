//! Entry filtering for listings

use super::config::ListingConfig;
use super::entry::Entry;
use super::pattern::NamePattern;

/// Why an entry was left out of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Hidden,
    NotADirectory,
    TooDeep,
    Excluded,
    NotIncluded,
}

/// The five listing predicates, compiled once from a `ListingConfig`.
///
/// All predicates must pass for an entry to be shown. Directories are
/// filtered by the include pattern exactly like files.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    show_hidden: bool,
    dirs_only: bool,
    max_depth: Option<usize>,
    exclude: Option<NamePattern>,
    include: Option<NamePattern>,
}

impl EntryFilter {
    pub fn new(config: &ListingConfig) -> Self {
        Self {
            show_hidden: config.show_hidden,
            dirs_only: config.dirs_only,
            max_depth: config.max_depth,
            exclude: config.exclude_pattern.as_deref().map(NamePattern::new),
            include: config.include_pattern.as_deref().map(NamePattern::new),
        }
    }

    /// Check the predicates in order and report the first one that fails.
    pub fn rejection(&self, entry: &Entry) -> Option<Rejection> {
        if !self.show_hidden && entry.is_hidden() {
            return Some(Rejection::Hidden);
        }
        if self.dirs_only && !entry.is_dir {
            return Some(Rejection::NotADirectory);
        }
        if self.max_depth.is_some_and(|max| entry.depth > max) {
            return Some(Rejection::TooDeep);
        }
        if self.exclude.as_ref().is_some_and(|p| p.is_match(&entry.name)) {
            return Some(Rejection::Excluded);
        }
        if self.include.as_ref().is_some_and(|p| !p.is_match(&entry.name)) {
            return Some(Rejection::NotIncluded);
        }
        None
    }

    pub fn is_included(&self, entry: &Entry) -> bool {
        self.rejection(entry).is_none()
    }
}
