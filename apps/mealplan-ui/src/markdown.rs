//! Markdown Rendering
//!
//! Recipe descriptions are Markdown; pulldown-cmark converts them to
//! HTML for display.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render a Markdown description to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_emphasis() {
        let html = render_markdown("A **hearty** stew with *fresh* thyme.");
        assert!(html.contains("<strong>hearty</strong>"));
        assert!(html.contains("<em>fresh</em>"));
        assert!(!html.contains("**"));
    }

    #[test]
    fn test_render_list() {
        let html = render_markdown("Serve with:\n\n- bread\n- butter");
        assert!(html.contains("<li>bread</li>"));
    }
}
