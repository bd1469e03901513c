//! Debian changelog stanzas

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::markdown::EntryItem;

/// Distribution used for release builds when none is given
pub const RELEASED_STABILITY: &str = "unstable";

/// Distribution used for non-release builds when none is given
pub const UNRELEASED_STABILITY: &str = "UNRELEASED";

/// Urgency used when none is given
pub const DEFAULT_URGENCY: &str = "low";

/// Maintainer used when no author is given
pub const ANONYMOUS_AUTHOR: &str = "Annonymous <annonymous@example.com>";

/// RFC 2822 layout required for the trailer date
const DEBIAN_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// A single versioned stanza of a Debian changelog
#[derive(Debug, Clone)]
pub struct DebianStanza {
    /// Source package name
    pub product: String,
    /// Version string, copied verbatim
    pub version: String,
    /// Target distribution
    pub stability: String,
    /// Upload urgency
    pub urgency: String,
    /// Maintainer name and e-mail
    pub author: String,
    /// Timestamp for the trailer line
    pub date: DateTime<FixedOffset>,
    /// Body items in markdown order
    pub items: Vec<EntryItem>,
}

impl DebianStanza {
    /// Header line, e.g. `bloom (4.1) stable; urgency=medium`
    pub fn header(&self) -> String {
        format!(
            "{} ({}) {}; urgency={}",
            self.product, self.version, self.stability, self.urgency
        )
    }

    /// Trailer line with the two spaces Debian expects before the date
    pub fn trailer(&self) -> String {
        format!(" -- {}  {}", self.author, format_debian_date(&self.date))
    }

    /// All lines of the stanza, including the trailing blank line
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.items.len() + 5);
        lines.push(self.header());
        lines.push(String::new());
        lines.extend(self.items.iter().map(EntryItem::to_debian_line));
        lines.push(String::new());
        lines.push(self.trailer());
        lines.push(String::new());
        lines
    }
}

/// Format a timestamp the way `dpkg-parsechangelog` expects it
pub fn format_debian_date(date: &DateTime<FixedOffset>) -> String {
    date.format(DEBIAN_DATE_FORMAT).to_string()
}

/// Sibling path used to keep the previous changelog, with its extension
/// replaced by `old`
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("old")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_date() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2013, 7, 5, 14, 57, 59)
            .unwrap()
    }

    fn sample_stanza(items: Vec<EntryItem>) -> DebianStanza {
        DebianStanza {
            product: "bloom".to_string(),
            version: "4.1".to_string(),
            stability: "stable".to_string(),
            urgency: "medium".to_string(),
            author: "Stephen McConnel <stephen_mcconnel@example.com>".to_string(),
            date: sample_date(),
            items,
        }
    }

    #[test]
    fn test_header() {
        let stanza = sample_stanza(vec![]);
        assert_eq!(stanza.header(), "bloom (4.1) stable; urgency=medium");
    }

    #[test]
    fn test_debian_date_is_zero_padded() {
        assert_eq!(
            format_debian_date(&sample_date()),
            "Fri, 05 Jul 2013 14:57:59 -0500"
        );
    }

    #[test]
    fn test_trailer() {
        let stanza = sample_stanza(vec![]);
        assert_eq!(
            stanza.trailer(),
            " -- Stephen McConnel <stephen_mcconnel@example.com>  Fri, 05 Jul 2013 14:57:59 -0500"
        );
    }

    #[test]
    fn test_stanza_layout() {
        let stanza = sample_stanza(vec![
            EntryItem::Item(" top".to_string()),
            EntryItem::SubItem(" nested".to_string()),
        ]);
        let lines = stanza.to_lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  * top");
        assert_eq!(lines[3], "    * nested");
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with(" -- "));
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("debian/changelog")),
            PathBuf::from("debian/changelog.old")
        );
        assert_eq!(backup_path(Path::new("notes.txt")), PathBuf::from("notes.old"));
    }
}
