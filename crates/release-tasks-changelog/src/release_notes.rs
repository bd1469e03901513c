//! Release notes HTML generation
//!
//! The markdown changelog is rendered to HTML and either written as a
//! minimal standalone page, or spliced into an existing page in place of the
//! children of the element whose `class` is the marker class.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use release_tasks_core::config::DEFAULT_MARKER_CLASS;
use release_tasks_core::{ReleaseNotesError, Result};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::renderer::{MarkdownRenderer, PulldownRenderer};

/// Inputs for release notes generation
#[derive(Debug, Clone)]
pub struct ReleaseNotesOptions {
    /// Markdown changelog to render
    pub changelog_file: PathBuf,
    /// HTML page to create or update
    pub html_file: PathBuf,
    /// Class of the element receiving the notes
    pub marker_class: String,
}

impl ReleaseNotesOptions {
    /// Create options; without an HTML path the page sits next to the
    /// changelog with an `htm` extension
    pub fn new(changelog_file: impl Into<PathBuf>, html_file: Option<PathBuf>) -> Self {
        let changelog_file = changelog_file.into();
        let html_file = html_file.unwrap_or_else(|| default_html_path(&changelog_file));
        Self {
            changelog_file,
            html_file,
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
        }
    }

    /// Use a different marker class
    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }
}

/// HTML path used when none is configured
pub fn default_html_path(changelog_file: &Path) -> PathBuf {
    changelog_file.with_extension("htm")
}

/// What happened to the HTML page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseNotesOutcome {
    /// A new page was written
    Created,
    /// The marked element of an existing page was replaced
    Updated,
    /// The existing page has no marked element and was left alone
    MarkerNotFound,
}

/// Writes rendered release notes into HTML pages
pub struct ReleaseNotesWriter {
    renderer: Arc<dyn MarkdownRenderer>,
}

impl ReleaseNotesWriter {
    /// Create a writer with the default CommonMark renderer
    pub fn new() -> Self {
        Self {
            renderer: Arc::new(PulldownRenderer::default()),
        }
    }

    /// Use a custom renderer
    pub fn with_renderer(renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self { renderer }
    }

    /// Render the changelog and create or update the HTML page
    #[instrument(skip(self, options), fields(changelog = %options.changelog_file.display(), html = %options.html_file.display()))]
    pub fn write(&self, options: &ReleaseNotesOptions) -> Result<ReleaseNotesOutcome> {
        if !options.changelog_file.exists() {
            return Err(ReleaseNotesError::MarkdownNotFound(options.changelog_file.clone()).into());
        }

        let markdown =
            std::fs::read_to_string(&options.changelog_file).map_err(ReleaseNotesError::Io)?;
        let fragment = self.renderer.render(&markdown);

        if !options.html_file.exists() {
            let page = standalone_page(&fragment, &options.marker_class);
            std::fs::write(&options.html_file, page).map_err(ReleaseNotesError::Io)?;
            info!(renderer = self.renderer.name(), "release notes page created");
            return Ok(ReleaseNotesOutcome::Created);
        }

        let document =
            std::fs::read_to_string(&options.html_file).map_err(ReleaseNotesError::Io)?;
        match replace_marked_content(&document, &options.marker_class, &fragment)
            .map_err(|message| ReleaseNotesError::InvalidDocument {
                path: options.html_file.clone(),
                message,
            })? {
            Some(updated) => {
                std::fs::write(&options.html_file, updated).map_err(ReleaseNotesError::Io)?;
                info!(renderer = self.renderer.name(), "release notes page updated");
                Ok(ReleaseNotesOutcome::Updated)
            }
            None => {
                warn!(
                    class = %options.marker_class,
                    "no marked element in existing page, leaving it unchanged"
                );
                Ok(ReleaseNotesOutcome::MarkerNotFound)
            }
        }
    }
}

impl Default for ReleaseNotesWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal page holding only the marked element
pub fn standalone_page(fragment: &str, marker_class: &str) -> String {
    format!("<html><div class='{marker_class}'>{fragment}</div></html>")
}

/// Replace the children of the first element whose class equals `marker`
/// with the nodes of `fragment`.
///
/// Returns `Ok(None)` when no element is marked. Everything outside the
/// marked element is copied through unchanged.
pub fn replace_marked_content(
    document: &str,
    marker: &str,
    fragment: &str,
) -> std::result::Result<Option<String>, String> {
    let replacement = parse_fragment(fragment).map_err(|e| e.to_string())?;

    let mut reader = Reader::from_str(document);
    let mut writer = Writer::new(Vec::with_capacity(document.len() + fragment.len()));
    let mut replaced = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("at byte {}: {}", reader.error_position(), e))?;
        match event {
            Event::Eof => break,
            Event::Start(start) if !replaced && has_class(&start, marker)? => {
                reader
                    .read_to_end(start.name())
                    .map_err(|e| format!("unclosed <{}>: {}", element_name(&start), e))?;
                write_marked(&mut writer, start, &replacement)?;
                replaced = true;
            }
            Event::Empty(start) if !replaced && has_class(&start, marker)? => {
                write_marked(&mut writer, start, &replacement)?;
                replaced = true;
            }
            other => writer.write_event(other).map_err(|e| e.to_string())?,
        }
    }

    if !replaced {
        return Ok(None);
    }
    debug!(nodes = replacement.len(), "marked element replaced");
    String::from_utf8(writer.into_inner())
        .map(Some)
        .map_err(|e| e.to_string())
}

fn write_marked(
    writer: &mut Writer<Vec<u8>>,
    start: BytesStart<'_>,
    children: &[Event<'static>],
) -> std::result::Result<(), String> {
    let end = start.to_end().into_owned();
    writer
        .write_event(Event::Start(start))
        .map_err(|e| e.to_string())?;
    for child in children {
        writer
            .write_event(child.borrow())
            .map_err(|e| e.to_string())?;
    }
    writer
        .write_event(Event::End(end))
        .map_err(|e| e.to_string())
}

fn has_class(start: &BytesStart<'_>, marker: &str) -> std::result::Result<bool, String> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| format!("bad attribute in <{}>: {}", element_name(start), e))?;
        if attr.key.as_ref() == b"class" {
            return Ok(attr.value.as_ref() == marker.as_bytes());
        }
    }
    Ok(false)
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Parse the rendered HTML as the children of a wrapper element
fn parse_fragment(fragment: &str) -> std::result::Result<Vec<Event<'static>>, ReleaseNotesError> {
    let wrapped = format!("<div>{fragment}</div>");
    let mut reader = Reader::from_str(&wrapped);
    let mut events = Vec::new();
    let mut depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ReleaseNotesError::MalformedFragment(e.to_string()))?;
        match event {
            Event::Eof => break,
            Event::Start(_) => {
                depth += 1;
                if depth > 1 {
                    events.push(event.into_owned());
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth > 0 {
                    events.push(event.into_owned());
                }
            }
            other => events.push(other.into_owned()),
        }
    }

    Ok(events)
}
