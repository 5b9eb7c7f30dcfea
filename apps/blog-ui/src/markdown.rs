//! Markdown Rendering
//!
//! Post bodies are Markdown; pulldown-cmark converts them to HTML for
//! display.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render a Markdown body to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Render for inline use (strips the outer <p> tags)
pub fn render_markdown_inline(text: &str) -> String {
    let html = render_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// First lines of a post body, plain enough for card excerpts
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join(" ");
    let trimmed = flat.trim();

    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading_and_list() {
        let html = render_markdown("# Title\n\n- one\n- two");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(render_markdown_inline("hello *world*"), "hello <em>world</em>");
    }

    #[test]
    fn test_excerpt_skips_headings_and_truncates() {
        let text = "# Big title\nFirst paragraph that goes on for a while.";
        let excerpt = excerpt(text, 15);
        assert_eq!(excerpt, "First paragraph…");
    }
}
