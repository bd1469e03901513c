//! Markdown to HTML rendering

mod pulldown;
mod registry;

pub use pulldown::PulldownRenderer;
pub use registry::RendererRegistry;

/// Trait for markdown renderers
pub trait MarkdownRenderer: Send + Sync {
    /// Render markdown text to an HTML fragment
    fn render(&self, markdown: &str) -> String;

    /// Name used to select this renderer from configuration
    fn name(&self) -> &'static str;
}
