//! Listing formatter
//!
//! Turns the walker's entries into indented lines followed by a summary.
//! Entries are consumed back to front: the walker pushes each directory after
//! its subtree, so reversing puts every directory directly above its contents.

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{Entry, EntryFilter, ListingConfig};

use super::counts::TreeCounts;

const INDENT_UNIT: &str = "  ";
const DIR_MARKER: &str = "+- ";
const FILE_MARKER: &str = "-- ";

/// Formatter for the indented listing and its summary line.
pub struct ListingFormatter<'a> {
    config: &'a ListingConfig,
    filter: EntryFilter,
}

impl<'a> ListingFormatter<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self {
            config,
            filter: EntryFilter::new(config),
        }
    }

    /// Entries that survive every filter, in display order.
    pub fn visible<'e>(&'e self, entries: &'e [Entry]) -> impl Iterator<Item = &'e Entry> + 'e {
        entries.iter().rev().filter(move |entry| {
            match self.filter.rejection(entry) {
                Some(reason) => {
                    log::trace!("skipping {} ({:?})", entry.path.display(), reason);
                    false
                }
                None => true,
            }
        })
    }

    /// Leading whitespace for an entry at `depth`.
    pub fn indent(depth: usize) -> String {
        INDENT_UNIT.repeat(depth)
    }

    /// Name as displayed: full path or bare name, optionally quoted.
    pub fn display_name(&self, entry: &Entry) -> String {
        let name = if self.config.full_path {
            entry.path.to_string_lossy().to_string()
        } else {
            entry.name.clone()
        };

        if self.config.quote_names {
            format!("\"{}\"", name)
        } else {
            name
        }
    }

    /// Marker, name and any `[size]` / `[permissions]` annotations.
    pub fn line_body(&self, entry: &Entry) -> String {
        let marker = if entry.is_dir { DIR_MARKER } else { FILE_MARKER };
        let mut line = format!("{}{}", marker, self.display_name(entry));

        if self.config.show_size {
            line.push_str(&format!(" [{}]", entry.size_bytes));
        }
        if self.config.show_permissions {
            line.push_str(&format!(" [{}]", entry.permissions));
        }
        line
    }

    /// Complete undecorated line for an entry, without the newline.
    pub fn format_line(&self, entry: &Entry) -> String {
        format!("{}{}", Self::indent(entry.depth), self.line_body(entry))
    }

    /// Write the listing and summary, coloring directory lines through `out`.
    ///
    /// Whether any color actually appears is up to the writer: a
    /// `termcolor::NoColor` or a `ColorChoice::Never` stream drops the specs.
    pub fn render<W: WriteColor>(
        &self,
        entries: &[Entry],
        out: &mut W,
    ) -> io::Result<TreeCounts> {
        let mut counts = TreeCounts::default();

        for entry in self.visible(entries) {
            counts.record(entry);

            write!(out, "{}", Self::indent(entry.depth))?;
            if entry.is_dir {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", self.line_body(entry))?;
                out.reset()?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", self.line_body(entry))?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", counts)?;
        out.flush()?;
        Ok(counts)
    }

    /// Plain-text listing and summary.
    pub fn format(&self, entries: &[Entry]) -> (String, TreeCounts) {
        let mut output = String::new();
        let mut counts = TreeCounts::default();

        for entry in self.visible(entries) {
            counts.record(entry);
            output.push_str(&self.format_line(entry));
            output.push('\n');
        }

        output.push_str(&format!("\n{}\n", counts));
        (output, counts)
    }
}
