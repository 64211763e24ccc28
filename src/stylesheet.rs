//! Stylesheet system for snippet coloring
//!
//! Maps marker categories and listing parts to CSS classes, and optionally
//! to concrete colors used when emitting a standalone page. The default
//! palette matches the builder page's dark code panel.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

use crate::annotator::Category;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Listing parts that take a class besides the marker categories
pub const LISTING: &str = "listing";
pub const LINE: &str = "line";
pub const LINE_NUMBER: &str = "line-number";

/// A stylesheet mapping tokens to CSS classes and colors
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Class mappings: token name -> CSS class list
    pub classes: HashMap<String, String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    classes: HashMap<String, String>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - the builder page's code panel
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "builder"
description = "Dark code panel of the agent builder page"

[classes]
keyword = "text-pink-400"
identifier = "text-purple-400"
parameter = "text-sky-300"
operator = "text-pink-400"
string = "text-emerald-300"
arguments = "text-yellow-300"
punctuation = "text-gray-400"

listing = "text-sm font-mono whitespace-pre-wrap leading-relaxed"
line = "flex"
line-number = "text-gray-600 w-8 text-right pr-4 select-none"

[colors]
keyword = "#f472b6"
identifier = "#c084fc"
parameter = "#7dd3fc"
operator = "#f472b6"
string = "#6ee7b7"
arguments = "#fde047"
punctuation = "#9ca3af"
line-number = "#4b5563"

background = "#121212"
foreground = "#d1d5db"
"##;

static DEFAULT_STYLESHEET: LazyLock<Stylesheet> = LazyLock::new(|| {
    Stylesheet::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
});

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            classes: parsed.classes,
            colors: parsed.colors,
        })
    }

    /// Look up the class list for a token in this stylesheet only
    pub fn resolve_class(&self, token: &str) -> Option<&str> {
        self.classes.get(token).map(|s| s.as_str())
    }

    /// Look up the color for a token in this stylesheet only
    pub fn resolve_color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve the class list for a token with fallback
    ///
    /// Fallback order:
    /// 1. This stylesheet
    /// 2. The default palette
    /// 3. The token name itself
    pub fn class_or_default(&self, token: &str) -> String {
        if let Some(class) = self.resolve_class(token) {
            return class.to_string();
        }

        if let Some(class) = DEFAULT_STYLESHEET.resolve_class(token) {
            return class.to_string();
        }

        token.to_string()
    }

    /// Class list for a marker category
    pub fn category_class(&self, category: Category) -> String {
        self.class_or_default(category.tag())
    }

    /// Resolve a color with fallback to the default palette
    pub fn color_or_default(&self, token: &str) -> Option<String> {
        self.resolve_color(token)
            .map(str::to_string)
            .or_else(|| DEFAULT_STYLESHEET.resolve_color(token).map(str::to_string))
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        DEFAULT_STYLESHEET.clone()
    }
}
