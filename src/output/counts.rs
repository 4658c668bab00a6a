//! Directory and file tallies for the summary line

use std::fmt;

use crate::tree::Entry;

/// Number of directories and files actually shown in a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCounts {
    pub directories: usize,
    pub files: usize,
}

impl TreeCounts {
    pub fn new(directories: usize, files: usize) -> Self {
        Self { directories, files }
    }

    /// Count one rendered entry.
    pub fn record(&mut self, entry: &Entry) {
        if entry.is_dir {
            self.directories += 1;
        } else {
            self.files += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.directories + self.files
    }
}

fn pluralize(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}

/// `N directories, M files`, with the singular form for a count of one.
impl fmt::Display for TreeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            pluralize(self.directories, "directory", "directories"),
            pluralize(self.files, "file", "files")
        )
    }
}
