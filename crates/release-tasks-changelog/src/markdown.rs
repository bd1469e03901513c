//! Markdown changelog reading
//!
//! A markdown changelog is a list of entries, each introduced by a `##`
//! heading. Only the list lines of the most recent entry are of interest
//! here; everything else is dropped.

use serde::{Deserialize, Serialize};

/// Prefix that starts every entry heading
pub const HEADING_MARKER: &str = "##";

/// One list line taken from a markdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryItem {
    /// Unindented item; holds the text after the bullet, untouched
    Item(String),
    /// Indented item; holds the trimmed text after the bullet
    SubItem(String),
}

impl EntryItem {
    /// Classify a single markdown line.
    ///
    /// Any bullet (`*`, `-`, `+`) or leading digit at column zero is an item.
    /// A line starting with a space is a nested item regardless of depth, so
    /// third-level lists flatten into the second level. Whitespace-only lines
    /// count as blank.
    pub fn classify(line: &str) -> Option<Self> {
        let first = line.chars().next()?;
        match first {
            '*' | '-' | '+' | '0'..='9' => Some(Self::Item(line[first.len_utf8()..].to_string())),
            ' ' => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let mut chars = trimmed.chars();
                chars.next();
                Some(Self::SubItem(chars.as_str().trim_matches('.').to_string()))
            }
            _ => None,
        }
    }

    /// Render as a Debian changelog body line
    pub fn to_debian_line(&self) -> String {
        match self {
            Self::Item(text) => format!("  *{}", text),
            Self::SubItem(text) => format!("    *{}", text),
        }
    }

    /// Whether this is a nested item
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::SubItem(_))
    }
}

/// Collect the items of the most recent entry.
///
/// The first line is taken to be the entry's own heading and is skipped.
/// Reading stops at the next heading, or runs to the end when there is none.
pub fn latest_entry_items<'a, I>(lines: I) -> Vec<EntryItem>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .skip(1)
        .take_while(|line| !line.starts_with(HEADING_MARKER))
        .filter_map(EntryItem::classify)
        .collect()
}
