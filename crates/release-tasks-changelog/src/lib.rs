//! Release Tasks Changelog - changelog maintenance for release builds
//!
//! This crate converts a markdown changelog into the other artifacts a
//! release needs: a new Debian changelog stanza, a stamped version heading,
//! and an HTML rendering of the release notes.

pub mod debian;
pub mod entry;
mod fs;
pub mod markdown;
pub mod release_notes;
pub mod renderer;
pub mod stamp;

#[cfg(test)]
pub(crate) mod test_support;

pub use debian::{backup_path, DebianStanza};
pub use entry::{create_changelog_entry, ChangelogEntryOptions, EntryReport};
pub use markdown::{latest_entry_items, EntryItem};
pub use release_notes::{
    default_html_path, ReleaseNotesOptions, ReleaseNotesOutcome, ReleaseNotesWriter,
};
pub use renderer::{MarkdownRenderer, PulldownRenderer, RendererRegistry};
pub use stamp::{stamp_changelog, StampOptions, StampOutcome};
