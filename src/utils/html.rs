use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

/// Render backend-supplied HTML markup to Vec<Line> for ratatui.
/// Supports headings, paragraphs, <br>, ordered/unordered lists, and the
/// inline tags <b>/<strong>, <i>/<em>, <code>. Unknown tags are stripped,
/// their text kept. Basic entities are decoded.
///
/// The markup is trusted as-is: there is no sanitization or escaping here.
/// The backend owns that boundary; a compromised backend can draw arbitrary
/// text in the manual panel.
pub fn render_html(content: &str) -> Vec<Line<'static>> {
    let tag_re = Regex::new(r"(?s)<[^>]*>").unwrap();

    let mut renderer = HtmlRenderer::default();
    let mut last = 0;

    for m in tag_re.find_iter(content) {
        renderer.push_text(&content[last..m.start()]);
        renderer.handle_tag(m.as_str());
        last = m.end();
    }
    renderer.push_text(&content[last..]);
    renderer.flush_line();

    renderer.lines
}

#[derive(Default)]
struct HtmlRenderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    code: usize,
    heading: bool,
    /// Open list nesting; Some(counter) for <ol>, None for <ul>.
    lists: Vec<Option<usize>>,
}

impl HtmlRenderer {
    fn current_style(&self) -> Style {
        let mut style = Style::default();
        if self.heading {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.code > 0 {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }

    fn push_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = decode_entities(raw);
        let collapsed = collapse_whitespace(&decoded);
        if collapsed.is_empty() {
            return;
        }
        // Drop leading whitespace at the start of a line.
        if self.spans.is_empty() && collapsed.trim().is_empty() {
            return;
        }
        self.spans
            .push(Span::styled(collapsed, self.current_style()));
    }

    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            let spans = std::mem::take(&mut self.spans);
            self.lines.push(Line::from(spans));
        }
    }

    fn blank_line(&mut self) {
        self.flush_line();
        if !matches!(self.lines.last(), Some(l) if l.spans.is_empty()) {
            self.lines.push(Line::from(""));
        }
    }

    fn handle_tag(&mut self, tag: &str) {
        let inner = tag.trim_start_matches('<').trim_end_matches('>').trim();
        let closing = inner.starts_with('/');
        let name: String = inner
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match name.as_str() {
            "b" | "strong" => {
                if closing {
                    self.bold = self.bold.saturating_sub(1);
                } else {
                    self.bold += 1;
                }
            }
            "i" | "em" => {
                if closing {
                    self.italic = self.italic.saturating_sub(1);
                } else {
                    self.italic += 1;
                }
            }
            "code" | "pre" => {
                if closing {
                    self.code = self.code.saturating_sub(1);
                } else {
                    self.code += 1;
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush_line();
                self.heading = !closing;
            }
            "p" => {
                if closing {
                    self.blank_line();
                } else {
                    self.flush_line();
                }
            }
            "br" => self.flush_line(),
            "ul" => {
                if closing {
                    self.lists.pop();
                    self.blank_line();
                } else {
                    self.flush_line();
                    self.lists.push(None);
                }
            }
            "ol" => {
                if closing {
                    self.lists.pop();
                    self.blank_line();
                } else {
                    self.flush_line();
                    self.lists.push(Some(0));
                }
            }
            "li" => {
                self.flush_line();
                if !closing {
                    let prefix = match self.lists.last_mut() {
                        Some(Some(counter)) => {
                            *counter += 1;
                            format!("  {}. ", counter)
                        }
                        _ => "  • ".to_string(),
                    };
                    self.spans.push(Span::from(prefix));
                }
            }
            "div" | "section" | "table" | "tr" => self.flush_line(),
            // Anything else is stripped, its text flows through.
            _ => {}
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_ws = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_plain_text_passes_through() {
        let result = render_html("Hello world");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_string(), "Hello world");
    }

    #[test]
    fn test_heading_is_bold_underlined() {
        let result = render_html("<h2>Safety First</h2>");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_string(), "Safety First");
        assert!(result[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD | Modifier::UNDERLINED));
    }

    #[test]
    fn test_paragraphs_are_separated() {
        let result = render_html("<p>First</p><p>Second</p>");
        let text = joined(&result);
        assert!(text.contains("First"));
        assert!(text.contains("Second"));
        // Blank line between paragraphs.
        assert!(result.iter().any(|l| l.to_string().is_empty()));
    }

    #[test]
    fn test_bold_inline() {
        let result = render_html("Always <b>lock out</b> the machine");
        let line = &result[0];
        assert!(line.spans.len() >= 3);
        let bold_span = line
            .spans
            .iter()
            .find(|s| s.content == "lock out")
            .expect("bold segment present");
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_italic_and_code() {
        let result = render_html("<em>note</em> run <code>make check</code>");
        let line = &result[0];
        assert!(line.spans[0].style.add_modifier.contains(Modifier::ITALIC));
        let code_span = line
            .spans
            .iter()
            .find(|s| s.content == "make check")
            .unwrap();
        assert!(code_span.style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_unordered_list_bullets() {
        let result = render_html("<ul><li>Helmet</li><li>Gloves</li></ul>");
        let text = joined(&result);
        assert!(text.contains("• Helmet"));
        assert!(text.contains("• Gloves"));
    }

    #[test]
    fn test_ordered_list_numbering() {
        let result = render_html("<ol><li>Stop</li><li>Check</li><li>Go</li></ol>");
        let text = joined(&result);
        assert!(text.contains("1. Stop"));
        assert!(text.contains("2. Check"));
        assert!(text.contains("3. Go"));
    }

    #[test]
    fn test_br_breaks_line() {
        let result = render_html("line one<br/>line two");
        assert!(result.len() >= 2);
        assert_eq!(result[0].to_string(), "line one");
        assert_eq!(result[1].to_string(), "line two");
    }

    #[test]
    fn test_unknown_tags_stripped_text_kept() {
        let result = render_html(r#"<span class="x">kept</span>"#);
        assert_eq!(joined(&result), "kept");
    }

    #[test]
    fn test_entities_decoded() {
        let result = render_html("a &amp; b &lt;c&gt; &quot;d&quot;");
        assert_eq!(result[0].to_string(), "a & b <c> \"d\"");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let result = render_html("<p>too   much\n   space</p>");
        assert_eq!(result[0].to_string(), "too much space");
    }

    #[test]
    fn test_markup_is_not_escaped() {
        // Trusted input flows through untouched, tags and all.
        let result = render_html("<p>look <b>here</b></p>");
        let text = joined(&result);
        assert!(!text.contains('<'));
        assert!(text.contains("look"));
        assert!(text.contains("here"));
    }

    #[test]
    fn test_full_manual_fragment() {
        let manual = "<h1>Forklift Manual</h1>\
                      <p>Operators must be <strong>certified</strong>.</p>\
                      <ul><li>Inspect daily</li><li>Report damage</li></ul>";
        let result = render_html(manual);
        let text = joined(&result);
        assert!(text.contains("Forklift Manual"));
        assert!(text.contains("certified"));
        assert!(text.contains("• Inspect daily"));
    }
}
