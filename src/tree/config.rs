//! Configuration types for listing a tree

/// Options controlling which entries are listed and how each line looks.
///
/// Built once by the command line front end and handed by reference to the
/// formatter; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingConfig {
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    /// Skip entries deeper than this (1 = direct children of the root only)
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Hide entries whose name matches this pattern
    pub exclude_pattern: Option<String>,
    /// Hide entries whose name does not match this pattern
    pub include_pattern: Option<String>,
    pub full_path: bool,
    pub quote_names: bool,
    pub show_size: bool,
    pub show_permissions: bool,
}

impl ListingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_dirs_only(mut self, dirs_only: bool) -> Self {
        self.dirs_only = dirs_only;
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_pattern = Some(pattern.into());
        self
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.include_pattern = Some(pattern.into());
        self
    }

    pub fn with_full_path(mut self, full_path: bool) -> Self {
        self.full_path = full_path;
        self
    }

    pub fn with_quotes(mut self, quote: bool) -> Self {
        self.quote_names = quote;
        self
    }

    pub fn with_size(mut self, show: bool) -> Self {
        self.show_size = show;
        self
    }

    pub fn with_permissions(mut self, show: bool) -> Self {
        self.show_permissions = show;
        self
    }
}
