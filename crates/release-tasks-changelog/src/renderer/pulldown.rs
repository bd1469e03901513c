//! pulldown-cmark backed renderer

use pulldown_cmark::{html, Options, Parser};
use tracing::{debug, instrument};

use super::MarkdownRenderer;

/// Renderer using pulldown-cmark, in plain CommonMark or GitHub flavor
pub struct PulldownRenderer {
    name: &'static str,
    options: Options,
}

impl PulldownRenderer {
    /// Strict CommonMark
    pub fn commonmark() -> Self {
        Self {
            name: "commonmark",
            options: Options::empty(),
        }
    }

    /// CommonMark plus tables, strikethrough and task lists
    pub fn github() -> Self {
        Self {
            name: "gfm",
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::commonmark()
    }
}

impl MarkdownRenderer for PulldownRenderer {
    #[instrument(skip(self, markdown), fields(renderer = self.name, input_len = markdown.len()))]
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        debug!(output_len = output.len(), "markdown rendered");
        output
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
