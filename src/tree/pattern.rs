//! Name patterns for the include and exclude filters

use glob::Pattern;
use regex::Regex;

/// A compiled include/exclude pattern, matched against an entry's bare name.
///
/// The raw text is tried as an unanchored regular expression first, so a
/// plain word matches any name containing it. Text that is not a valid regex
/// (`*.txt`, for instance) is tried as a shell glob, which must match the whole
/// name. Text that is neither matches nothing.
#[derive(Debug, Clone)]
pub enum NamePattern {
    Regex(Regex),
    Glob(Pattern),
    Malformed(String),
}

impl NamePattern {
    pub fn new(raw: &str) -> Self {
        if let Ok(re) = Regex::new(raw) {
            return NamePattern::Regex(re);
        }
        if let Ok(glob) = Pattern::new(raw) {
            return NamePattern::Glob(glob);
        }
        log::warn!("pattern '{}' is neither a regex nor a glob; it matches nothing", raw);
        NamePattern::Malformed(raw.to_string())
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NamePattern::Regex(re) => re.is_match(name),
            NamePattern::Glob(glob) => glob.matches(name),
            NamePattern::Malformed(_) => false,
        }
    }

    #[cfg(test)]
    pub fn is_malformed(&self) -> bool {
        matches!(self, NamePattern::Malformed(_))
    }

    /// The pattern text as given.
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        match self {
            NamePattern::Regex(re) => re.as_str(),
            NamePattern::Glob(glob) => glob.as_str(),
            NamePattern::Malformed(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_matches_substring() {
        let p = NamePattern::new("txt");
        assert!(matches!(p, NamePattern::Regex(_)));
        assert!(p.is_match("a.txt"));
        assert!(p.is_match("txt_notes"));
        assert!(!p.is_match("main.rs"));
    }

    #[test]
    fn test_regex_syntax() {
        let p = NamePattern::new(r"^c\.(txt|md)$");
        assert!(p.is_match("c.txt"));
        assert!(p.is_match("c.md"));
        assert!(!p.is_match("ac.txt"));
        assert!(!p.is_match("c.txt.bak"));
    }

    #[test]
    fn test_glob_fallback() {
        // A leading `*` is not a valid regex, so this is a glob
        let p = NamePattern::new("*.txt");
        assert!(matches!(p, NamePattern::Glob(_)));
        assert!(p.is_match("a.txt"));
        assert!(!p.is_match("a.txt.bak"));
        assert!(!p.is_match("main.rs"));

        let p = NamePattern::new("*test?.rs");
        assert!(p.is_match("my_test1.rs"));
        assert!(!p.is_match("my_test12.rs"));
    }

    #[test]
    fn test_valid_regex_wins_over_glob_reading() {
        // `_*` is "zero or more underscores" here, not a wildcard
        let p = NamePattern::new("node_*");
        assert!(matches!(p, NamePattern::Regex(_)));
        assert!(p.is_match("nodes.txt"));

        let p = NamePattern::new("test_*.rs");
        assert!(!p.is_match("test_foo.rs"));
    }

    #[test]
    fn test_malformed_matches_nothing() {
        // Unbalanced bracket: invalid as both regex and glob
        let p = NamePattern::new("[abc");
        assert!(p.is_malformed());
        assert!(!p.is_match("a"));
        assert!(!p.is_match("[abc"));
        assert!(!p.is_match(""));
        assert_eq!(p.as_str(), "[abc");
    }

    #[test]
    fn test_as_str_keeps_source() {
        assert_eq!(NamePattern::new("src").as_str(), "src");
        assert_eq!(NamePattern::new("*.rs").as_str(), "*.rs");
    }
}
