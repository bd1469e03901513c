//! Version stamping of the markdown changelog heading
//!
//! During development the first line of the changelog is a placeholder such
//! as `## DEV_VERSION_NUMBER: DEV_RELEASE_DATE`. A release build replaces it
//! with `## <version> <dd/Mon/yyyy>`.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use release_tasks_core::{ChangelogError, Result};
use serde::Serialize;
use tracing::{info, instrument};

use crate::fs::{join_lines, read_lines, write_atomic};

const STAMP_DATE_FORMAT: &str = "%d/%b/%Y";

/// Inputs for stamping a changelog heading
#[derive(Debug, Clone)]
pub struct StampOptions {
    /// Markdown changelog to stamp
    pub changelog_file: PathBuf,
    /// Version to write into the heading
    pub version_number: String,
    /// Whether stamping was requested at all
    pub stamp_changelog_file: bool,
    /// Whether this is a release build
    pub release: bool,
}

impl StampOptions {
    /// Create options for a release build
    pub fn new(
        changelog_file: impl Into<PathBuf>,
        version_number: impl Into<String>,
        stamp_changelog_file: bool,
    ) -> Self {
        Self {
            changelog_file: changelog_file.into(),
            version_number: version_number.into(),
            stamp_changelog_file,
            release: true,
        }
    }

    /// Mark the build as a release or not
    pub fn with_release(mut self, release: bool) -> Self {
        self.release = release;
        self
    }
}

/// Result of a stamp request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum StampOutcome {
    /// The heading was rewritten
    Stamped { heading: String },
    /// Stamping was not requested
    NotRequested,
    /// Not a release build
    NotRelease,
}

/// Heading written for a version on a given day
pub fn stamped_heading(version: &str, day: NaiveDate) -> String {
    format!("## {} {}", version, day.format(STAMP_DATE_FORMAT))
}

/// Stamp the heading with today's date
pub fn stamp_changelog(options: &StampOptions) -> Result<StampOutcome> {
    stamp_changelog_on(options, Local::now().date_naive())
}

/// Stamp the heading with a given date. The file is not touched unless both
/// `stamp_changelog_file` and `release` are set.
#[instrument(skip(options), fields(changelog = %options.changelog_file.display(), version = %options.version_number))]
pub fn stamp_changelog_on(options: &StampOptions, day: NaiveDate) -> Result<StampOutcome> {
    if !options.stamp_changelog_file {
        info!("stamping not requested, changelog left as is");
        return Ok(StampOutcome::NotRequested);
    }
    if !options.release {
        info!("not a release build, changelog left as is");
        return Ok(StampOutcome::NotRelease);
    }
    if options.version_number.is_empty() {
        return Err(ChangelogError::MissingInput("version_number").into());
    }
    if !options.changelog_file.exists() {
        return Err(ChangelogError::FileNotFound(options.changelog_file.clone()).into());
    }

    let mut lines = read_lines(&options.changelog_file).map_err(ChangelogError::Io)?;
    let heading = stamped_heading(&options.version_number, day);
    match lines.first_mut() {
        Some(first) => *first = heading.clone(),
        None => lines.push(heading.clone()),
    }

    write_atomic(&options.changelog_file, &join_lines(&lines)).map_err(|source| {
        ChangelogError::WriteFailed {
            path: options.changelog_file.clone(),
            source,
        }
    })?;

    info!(%heading, "changelog heading stamped");
    Ok(StampOutcome::Stamped { heading })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempFiles;

    const DEV_HEADING: &str = "## DEV_VERSION_NUMBER: DEV_RELEASE_DATE";

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 9, 4).unwrap()
    }

    #[test]
    fn test_stamped_heading_format() {
        assert_eq!(stamped_heading("2.3.10", day()), "## 2.3.10 04/Sep/2014");
    }

    #[test]
    fn test_stamp_markdown_works() {
        let files = TempFiles::new(&["Test.md"]);
        files.write_lines(0, &[DEV_HEADING, "*with some random content", "*does some things"]);

        let today = Local::now().date_naive();
        let options = StampOptions::new(files.path(0), "2.3.10", true);
        let outcome = stamp_changelog_on(&options, today).unwrap();

        let contents = files.read_lines(0);
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0], stamped_heading("2.3.10", today));
        assert_eq!(contents[1], "*with some random content");
        assert!(matches!(outcome, StampOutcome::Stamped { .. }));
    }

    #[test]
    fn test_stamp_with_fixed_day() {
        let files = TempFiles::new(&["Test.md"]);
        files.write_lines(0, &[DEV_HEADING, "* item"]);

        let options = StampOptions::new(files.path(0), "1.0", true);
        let outcome = stamp_changelog_on(&options, day()).unwrap();

        assert_eq!(
            outcome,
            StampOutcome::Stamped {
                heading: "## 1.0 04/Sep/2014".to_string()
            }
        );
        assert_eq!(files.read(0), "## 1.0 04/Sep/2014\n* item\n");
    }

    #[test]
    fn test_stamp_does_nothing_when_told() {
        let files = TempFiles::new(&["Test.md"]);
        // no trailing newline, so any rewrite would show
        let original = format!("{DEV_HEADING}\r\n*with some random content\n*does some things");
        files.write(0, &original);

        let options = StampOptions::new(files.path(0), "2.3.10", false);
        assert_eq!(stamp_changelog(&options).unwrap(), StampOutcome::NotRequested);
        assert_eq!(files.read(0), original);
    }

    #[test]
    fn test_stamp_skipped_for_non_release() {
        let files = TempFiles::new(&["Test.md"]);
        files.write_lines(0, &[DEV_HEADING]);

        let options = StampOptions::new(files.path(0), "2.3.10", true).with_release(false);
        assert_eq!(stamp_changelog(&options).unwrap(), StampOutcome::NotRelease);
        assert_eq!(files.read_lines(0), vec![DEV_HEADING]);
    }

    #[test]
    fn test_stamp_empty_file() {
        let files = TempFiles::new(&["Test.md"]);
        files.write(0, "");

        let options = StampOptions::new(files.path(0), "0.1", true);
        stamp_changelog_on(&options, day()).unwrap();
        assert_eq!(files.read(0), "## 0.1 04/Sep/2014\n");
    }

    #[test]
    fn test_stamp_missing_file_is_an_error() {
        let files = TempFiles::new(&["Test.md"]);
        let options = StampOptions::new(files.path(0), "0.1", true);
        assert!(stamp_changelog(&options).is_err());
    }
}
