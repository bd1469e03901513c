//! Renderer registry

use std::sync::Arc;

use super::MarkdownRenderer;
use super::PulldownRenderer;

/// Registry of available markdown renderers
pub struct RendererRegistry {
    renderers: Vec<Arc<dyn MarkdownRenderer>>,
}

impl RendererRegistry {
    /// Create a new registry with all built-in renderers
    pub fn new() -> Self {
        Self {
            renderers: vec![
                Arc::new(PulldownRenderer::commonmark()),
                Arc::new(PulldownRenderer::github()),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Register a renderer
    pub fn register<R: MarkdownRenderer + 'static>(&mut self, renderer: R) {
        self.renderers.push(Arc::new(renderer));
    }

    /// Get renderer by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn MarkdownRenderer>> {
        self.renderers.iter().find(|r| r.name() == name).cloned()
    }

    /// Get all registered renderers
    pub fn all(&self) -> &[Arc<dyn MarkdownRenderer>] {
        &self.renderers
    }

    /// Get all renderer names
    pub fn names(&self) -> Vec<&'static str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl MarkdownRenderer for Upper {
        fn render(&self, markdown: &str) -> String {
            format!("<p>{}</p>", markdown.to_uppercase())
        }

        fn name(&self) -> &'static str {
            "upper"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = RendererRegistry::new();
        assert_eq!(registry.all().len(), 2);
        assert_eq!(registry.names(), vec!["commonmark", "gfm"]);
    }

    #[test]
    fn test_get_by_name() {
        let registry = RendererRegistry::new();
        assert!(registry.get("gfm").is_some());
        assert!(registry.get("asciidoc").is_none());
    }

    #[test]
    fn test_register_custom() {
        let mut registry = RendererRegistry::empty();
        assert!(registry.all().is_empty());
        registry.register(Upper);
        let renderer = registry.get("upper").unwrap();
        assert_eq!(renderer.render("hi"), "<p>HI</p>");
    }
}
