//! In-band markers used while annotating
//!
//! A marker opens with `OPEN`, the category tag and `TAG_END`, and closes
//! with `CLOSE`. All three are private-use code points, so no annotation
//! pattern can match them and later passes only ever see the source text.

use std::fmt;

pub(crate) const OPEN: char = '\u{E000}';
pub(crate) const TAG_END: char = '\u{E001}';
pub(crate) const CLOSE: char = '\u{E002}';

/// Category carried by a marker, selecting how the span is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `from` / `import`
    Keyword,
    /// Known names such as the client type and `print`
    Identifier,
    /// Keyword-argument names
    Parameter,
    /// The assignment `=`
    Operator,
    /// Double-quoted string literals
    String,
    /// Contents of a call's parentheses
    Arguments,
    /// Attribute-access dots
    Punctuation,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Keyword,
        Category::Identifier,
        Category::Parameter,
        Category::Operator,
        Category::String,
        Category::Arguments,
        Category::Punctuation,
    ];

    /// Tag name used in markers and stylesheets
    pub fn tag(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Identifier => "identifier",
            Category::Parameter => "parameter",
            Category::Operator => "operator",
            Category::String => "string",
            Category::Arguments => "arguments",
            Category::Punctuation => "punctuation",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// The opening marker for this category
    pub(crate) fn open_marker(self) -> String {
        format!("{}{}{}", OPEN, self.tag(), TAG_END)
    }

    /// Wrap `inner` (which may hold regex replacement references) in markers
    pub(crate) fn wrap(self, inner: &str) -> String {
        format!("{}{}{}", self.open_marker(), inner, CLOSE)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Replace marker code points so that input text cannot forge markers
pub(crate) fn sanitize(text: &str) -> String {
    text.replace([OPEN, TAG_END, CLOSE], "\u{FFFD}")
}

/// A piece of annotated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Open(Category),
    Close,
}

/// Iterator over the segments of marked text
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(marked: &'a str) -> Self {
        Self { rest: marked }
    }

    fn take_text(&mut self, len: usize) -> Segment<'a> {
        let (text, rest) = self.rest.split_at(len);
        self.rest = rest;
        Segment::Text(text)
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;

        if first == CLOSE {
            self.rest = &self.rest[CLOSE.len_utf8()..];
            return Some(Segment::Close);
        }

        if first == OPEN {
            let after_open = &self.rest[OPEN.len_utf8()..];
            if let Some(end) = after_open.find(TAG_END) {
                if let Some(category) = Category::from_tag(&after_open[..end]) {
                    self.rest = &after_open[end + TAG_END.len_utf8()..];
                    return Some(Segment::Open(category));
                }
            }
            // Malformed marker: pass the code point through as text
            return Some(self.take_text(OPEN.len_utf8()));
        }

        let len = self
            .rest
            .find([OPEN, CLOSE])
            .unwrap_or(self.rest.len());
        Some(self.take_text(len))
    }
}
