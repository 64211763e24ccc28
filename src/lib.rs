//! Notte Snippet - SDK example generator for the agent builder
//!
//! This library composes a Python example from builder form values,
//! annotates it for syntax coloring, and renders it as an HTML listing.
//!
//! # Example
//!
//! ```rust
//! use notte_snippet::{render, FormFields};
//!
//! let html = render(&FormFields::new("sk-1", "Find jobs"));
//! assert!(html.contains("<pre"));
//! assert!(html.contains("Find jobs"));
//! ```

pub mod annotator;
pub mod composer;
pub mod error;
pub mod renderer;
pub mod stylesheet;

pub use annotator::{annotate, AnnotatedText, Category};
pub use composer::{compose, FieldsOverlay, FormFields};
pub use error::FieldsError;
pub use renderer::{render_html, render_inline, HtmlConfig};

// Re-export Stylesheet for public API
pub use stylesheet::{Stylesheet, StylesheetError};

/// What the render pipeline produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The composed Python code, unannotated
    Plain,
    /// Annotated spans without the listing wrapper
    Inline,
    /// Line-numbered HTML listing
    #[default]
    Html,
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Output produced by the pipeline
    pub format: OutputFormat,
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Stylesheet for class and color resolution
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render form values to an HTML listing with default configuration
pub fn render(fields: &FormFields) -> String {
    render_with_config(fields, &RenderConfig::default())
}

/// Render form values with custom configuration
///
/// # Example
///
/// ```rust
/// use notte_snippet::{render_with_config, FormFields, HtmlConfig, RenderConfig};
///
/// let config = RenderConfig::new().with_html(HtmlConfig::new().with_standalone(true));
/// let html = render_with_config(&FormFields::initial(), &config);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_with_config(fields: &FormFields, config: &RenderConfig) -> String {
    if let Some(model) = fields.model() {
        if composer::find_model(model).is_none() {
            tracing::warn!(model, "model is not in the builder's catalog");
        }
    }

    let code = compose(fields);
    match config.format {
        OutputFormat::Plain => code,
        OutputFormat::Inline => render_inline(&annotate(&code), &config.stylesheet),
        OutputFormat::Html => render_html(&annotate(&code), &config.stylesheet, &config.html),
    }
}
