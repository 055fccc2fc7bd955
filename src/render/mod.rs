//! Body rendering.
//!
//! The repository only relies on the [`BodyRenderer`] contract: `render`
//! turns one body into its displayable form, and `reset_state` is called
//! between documents so nothing a renderer tracks (footnote counters,
//! generated ids) carries over from one document to the next.

use pulldown_cmark::{html, Options, Parser};

pub trait BodyRenderer {
    fn render(&mut self, body: &str) -> String;

    fn reset_state(&mut self);
}

/// Markdown to HTML with tables, footnotes, definition lists,
/// strikethrough and task lists.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::with_options(
            Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_DEFINITION_LIST
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        )
    }
}

impl MarkdownRenderer {
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }
}

impl BodyRenderer for MarkdownRenderer {
    fn render(&mut self, body: &str) -> String {
        let parser = Parser::new_ext(body, self.options);

        // HTML is usually a bit longer than its source
        let mut out = String::with_capacity(body.len() + body.len() / 2);
        html::push_html(&mut out, parser);
        out
    }

    // pulldown-cmark is stateless per parse; footnote numbering restarts
    // with every body.
    fn reset_state(&mut self) {}
}
