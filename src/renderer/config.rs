//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to prefix each line with its number
    pub line_numbers: bool,

    /// Whether to wrap the listing in a complete HTML document
    pub standalone: bool,

    /// Whether to put each listing line on its own output line
    pub pretty_print: bool,

    /// Document title used in standalone mode
    pub title: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            standalone: false,
            pretty_print: true,
            title: "Python SDK".to_string(),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether lines are numbered
    pub fn with_line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    /// Set whether output is a standalone document
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
