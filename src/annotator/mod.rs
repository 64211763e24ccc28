//! Syntax annotation for composed snippets
//!
//! The annotator runs a fixed, ordered list of regex passes over the text.
//! Each pass wraps what it finds in category markers. The result is an
//! [`AnnotatedText`] that renderers walk segment by segment.
//!
//! # Example
//!
//! ```rust
//! use notte_snippet::annotator::{annotate, Category};
//!
//! let annotated = annotate("print(response.answer)");
//! assert_eq!(annotated.plain(), "print(response.answer)");
//! assert!(annotated
//!     .spans()
//!     .iter()
//!     .any(|s| s.category == Category::Arguments && s.text == "response.answer"));
//! ```

mod marker;
mod rules;

use std::borrow::Cow;
use std::fmt;

use tracing::{instrument, trace};

pub use marker::{Category, Segment, Segments};
pub use rules::{rules, AnnotationRule};

/// Text with category markers inserted by [`annotate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedText {
    marked: String,
}

/// A marked span and the plain text it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSpan {
    pub category: Category,
    pub text: String,
}

impl AnnotatedText {
    /// Walk the whole text as segments
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.marked)
    }

    /// Walk the text line by line
    ///
    /// No pass matches across a newline, so every span opens and closes on
    /// the same line.
    pub fn lines(&self) -> impl Iterator<Item = Segments<'_>> {
        self.marked.split('\n').map(Segments::new)
    }

    /// The text with all markers removed
    pub fn plain(&self) -> String {
        self.segments()
            .filter_map(|segment| match segment {
                Segment::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Every span in opening order, with the plain text it covers
    pub fn spans(&self) -> Vec<AnnotatedSpan> {
        let mut spans = Vec::new();
        let mut open: Vec<(usize, usize)> = Vec::new();
        let mut plain = String::new();

        for segment in self.segments() {
            match segment {
                Segment::Text(text) => plain.push_str(text),
                Segment::Open(category) => {
                    spans.push(AnnotatedSpan {
                        category,
                        text: String::new(),
                    });
                    open.push((spans.len() - 1, plain.len()));
                }
                Segment::Close => {
                    if let Some((index, start)) = open.pop() {
                        spans[index].text = plain[start..].to_string();
                    }
                }
            }
        }
        for (index, start) in open {
            spans[index].text = plain[start..].to_string();
        }

        spans
    }

    /// Render with generic `<tag>…</tag>` markup
    ///
    /// Text is not escaped. Unmatched closes are dropped and spans left
    /// open are closed at the end.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.marked.len());
        let mut stack: Vec<Category> = Vec::new();

        for segment in self.segments() {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Open(category) => {
                    out.push_str(&format!("<{}>", category));
                    stack.push(category);
                }
                Segment::Close => {
                    if let Some(category) = stack.pop() {
                        out.push_str(&format!("</{}>", category));
                    }
                }
            }
        }
        while let Some(category) = stack.pop() {
            out.push_str(&format!("</{}>", category));
        }

        out
    }
}

impl fmt::Display for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// Run every annotation pass over `text`, in order
///
/// Total over all inputs: a pass that finds nothing leaves the text as is.
/// Marker code points already present in the input are replaced with
/// U+FFFD first.
#[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn annotate(text: &str) -> AnnotatedText {
    let mut marked = marker::sanitize(text);

    for rule in rules() {
        let next = match rule.apply(&marked) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        trace!(rule = rule.name(), "pass matched");
        marked = next;
    }

    AnnotatedText { marked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(category: Category, text: &str) -> AnnotatedSpan {
        AnnotatedSpan {
            category,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_print_call() {
        let annotated = annotate("print(response.answer)");
        assert_eq!(
            annotated.spans(),
            vec![
                span(Category::Identifier, "print"),
                span(Category::Arguments, "response.answer"),
                span(Category::Identifier, "response"),
                span(Category::Punctuation, "."),
            ]
        );
    }

    #[test]
    fn test_print_call_markup() {
        let annotated = annotate("print(response.answer)");
        assert_eq!(
            annotated.to_markup(),
            "<identifier>print</identifier>(<arguments><identifier>response</identifier>\
             <punctuation>.</punctuation>answer</arguments>)"
        );
    }

    #[test]
    fn test_client_line() {
        let annotated = annotate(r#"notte = NotteClient(api_key="sk-1")"#);
        assert_eq!(
            annotated.to_markup(),
            "notte <operator>=</operator> <identifier>NotteClient</identifier>(<arguments>\
             <parameter>api_key</parameter>=<string>\"sk-1\"</string></arguments>)"
        );
    }

    #[test]
    fn test_import_line() {
        let annotated = annotate("from notte_sdk import NotteClient");
        assert_eq!(
            annotated.to_markup(),
            "<keyword>from</keyword> <identifier>notte_sdk</identifier> import \
             <identifier>NotteClient</identifier>"
        );
    }

    #[test]
    fn test_plain_roundtrip() {
        let text = "response = notte.agents.run(\n    task=\"a.b\",\n    model=\"m\"\n)";
        assert_eq!(annotate(text).plain(), text);
    }

    #[test]
    fn test_deterministic() {
        let text = "notte = NotteClient(api_key=\"k\")";
        assert_eq!(annotate(text), annotate(text));
    }

    #[test]
    fn test_empty_input() {
        let annotated = annotate("");
        assert_eq!(annotated.plain(), "");
        assert!(annotated.spans().is_empty());
    }

    #[test]
    fn test_forged_markers_are_neutralised() {
        let annotated = annotate("\u{E000}string\u{E001}x\u{E002}");
        assert!(annotated.spans().is_empty());
        assert_eq!(annotated.plain(), "\u{FFFD}string\u{FFFD}x\u{FFFD}");
    }

    #[test]
    fn test_unbalanced_quote_is_total() {
        let annotated = annotate(r#"run(    task="say "hi"")"#);
        assert_eq!(annotated.plain(), r#"run(    task="say "hi"")"#);
    }

    #[test]
    fn test_lines_split() {
        let annotated = annotate("a.b\nc");
        assert_eq!(annotated.lines().count(), 2);
    }

    #[test]
    fn test_rule_patterns_exposed() {
        let first = rules().first().expect("rules are not empty");
        assert_eq!(first.pattern(), r"(?m)^(from|import)(?-u:\b)");
    }

    #[test]
    fn test_accented_prefix_keeps_boundary() {
        let spans = annotate("éprint(x)").spans();
        assert!(spans.contains(&span(Category::Identifier, "print")));
        assert!(spans.contains(&span(Category::Arguments, "x")));
    }
}
