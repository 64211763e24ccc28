//! HTML generation from annotated text

use std::collections::BTreeMap;

use tracing::debug;

use crate::annotator::{AnnotatedText, Category, Segment, Segments};
use crate::stylesheet::{Stylesheet, LINE, LINE_NUMBER, LISTING};

use super::HtmlConfig;

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render segments as spans, keeping the output balanced
///
/// A close without a matching open is dropped; spans still open at the
/// end are closed.
fn render_segments(segments: Segments<'_>, stylesheet: &Stylesheet) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(&escape_html(text)),
            Segment::Open(category) => {
                out.push_str(&format!(
                    r#"<span class="{}">"#,
                    escape_html(&stylesheet.category_class(category))
                ));
                depth += 1;
            }
            Segment::Close => {
                if depth > 0 {
                    out.push_str("</span>");
                    depth -= 1;
                }
            }
        }
    }
    for _ in 0..depth {
        out.push_str("</span>");
    }

    out
}

/// Build an HTML listing incrementally
pub struct HtmlBuilder<'s> {
    config: HtmlConfig,
    stylesheet: &'s Stylesheet,
    lines: Vec<String>,
}

impl<'s> HtmlBuilder<'s> {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig, stylesheet: &'s Stylesheet) -> Self {
        Self {
            config,
            stylesheet,
            lines: vec![],
        }
    }

    fn class(&self, token: &str) -> String {
        escape_html(&self.stylesheet.class_or_default(token))
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add one line of the listing
    pub fn add_line(&mut self, number: usize, segments: Segments<'_>) {
        let number_cell = if self.config.line_numbers {
            format!(r#"<span class="{}">{}</span>"#, self.class(LINE_NUMBER), number)
        } else {
            String::new()
        };

        self.lines.push(format!(
            r#"<div class="{}">{}<code>{}</code></div>"#,
            self.class(LINE),
            number_cell,
            render_segments(segments, self.stylesheet)
        ));
    }

    /// CSS rules coloring every class the stylesheet assigns a color to
    fn css(&self) -> String {
        let mut rules: BTreeMap<String, String> = BTreeMap::new();
        let tokens = Category::ALL
            .iter()
            .map(|c| c.tag())
            .chain(std::iter::once(LINE_NUMBER));

        for token in tokens {
            let Some(color) = self.stylesheet.color_or_default(token) else {
                continue;
            };
            let class = self.stylesheet.class_or_default(token);
            if let Some(selector) = class.split_whitespace().next() {
                rules.entry(selector.to_string()).or_insert(color);
            }
        }

        let mut css = String::new();
        let background = self.stylesheet.color_or_default("background");
        let foreground = self.stylesheet.color_or_default("foreground");
        if background.is_some() || foreground.is_some() {
            css.push_str("  body {");
            if let Some(bg) = background {
                css.push_str(&format!(" background: {};", bg));
            }
            if let Some(fg) = foreground {
                css.push_str(&format!(" color: {};", fg));
            }
            css.push_str(" }\n");
        }
        for (selector, color) in rules {
            css.push_str(&format!("  .{} {{ color: {}; }}\n", selector, color));
        }
        css
    }

    /// Finish and return the HTML
    pub fn build(self) -> String {
        let nl = self.newline();
        let listing = format!(
            r#"<pre class="{}">{nl}{}{nl}</pre>"#,
            self.class(LISTING),
            self.lines.join(nl),
        );

        if !self.config.standalone {
            return listing;
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape_html(&self.config.title),
            self.css(),
            listing
        )
    }
}

/// Render annotated text as a line-numbered HTML listing
pub fn render_html(
    annotated: &AnnotatedText,
    stylesheet: &Stylesheet,
    config: &HtmlConfig,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone(), stylesheet);
    for (index, line) in annotated.lines().enumerate() {
        builder.add_line(index + 1, line);
    }
    debug!(lines = builder.lines.len(), standalone = config.standalone, "rendered listing");
    builder.build()
}

/// Render annotated text as bare spans, without the listing wrapper
pub fn render_inline(annotated: &AnnotatedText, stylesheet: &Stylesheet) -> String {
    render_segments(annotated.segments(), stylesheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::annotate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_inline_print_call() {
        let html = render_inline(&annotate("print(x.y)"), &Stylesheet::default());
        assert_eq!(
            html,
            concat!(
                r#"<span class="text-purple-400">print</span>("#,
                r#"<span class="text-yellow-300">x<span class="text-gray-400">.</span>y</span>)"#
            )
        );
    }

    #[test]
    fn test_inline_escapes_user_text() {
        let html = render_inline(&annotate("<script>"), &Stylesheet::default());
        assert_eq!(html, "&lt;script&gt;");
    }

    #[test]
    fn test_listing_line_numbers() {
        let html = render_html(&annotate("a\nb"), &Stylesheet::default(), &HtmlConfig::default());
        assert!(html.starts_with(r#"<pre class="text-sm font-mono whitespace-pre-wrap leading-relaxed">"#));
        assert!(html.contains(
            r#"<div class="flex"><span class="text-gray-600 w-8 text-right pr-4 select-none">1</span><code>a</code></div>"#
        ));
        assert!(html.contains(r#">2</span><code>b</code></div>"#));
        assert!(html.ends_with("</pre>"));
    }

    #[test]
    fn test_listing_without_line_numbers() {
        let config = HtmlConfig::new().with_line_numbers(false).with_pretty_print(false);
        let html = render_html(&annotate("a"), &Stylesheet::default(), &config);
        assert_eq!(
            html,
            r#"<pre class="text-sm font-mono whitespace-pre-wrap leading-relaxed"><div class="flex"><code>a</code></div></pre>"#
        );
    }

    #[test]
    fn test_spans_balanced_per_line() {
        let text = "response = notte.agents.run(\n    task=\"a(b\",\n    model=\"c)\"\n)";
        let html = render_html(&annotate(text), &Stylesheet::default(), &HtmlConfig::default());
        for line in html.lines().filter(|l| l.starts_with("<div")) {
            assert_eq!(line.matches("<span").count(), line.matches("</span>").count(), "{line}");
        }
    }

    #[test]
    fn test_standalone_document() {
        let config = HtmlConfig::new().with_standalone(true).with_title("Demo <1>");
        let html = render_html(&annotate("print(x)"), &Stylesheet::default(), &config);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Demo &lt;1&gt;</title>"));
        assert!(html.contains("body { background: #121212; color: #d1d5db; }"));
        assert!(html.contains(".text-pink-400 { color: #f472b6; }"));
        assert!(html.contains(".text-gray-600 { color: #4b5563; }"));
        assert_eq!(html.matches(".text-pink-400 {").count(), 1);
    }

    #[test]
    fn test_custom_stylesheet_classes() {
        let stylesheet = Stylesheet::from_str("[classes]\nidentifier = \"id\"\n").expect("Should parse");
        let html = render_inline(&annotate("print"), &stylesheet);
        assert_eq!(html, r#"<span class="id">print</span>"#);
    }
}
