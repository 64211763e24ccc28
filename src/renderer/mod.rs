//! HTML renderer for annotated snippets
//!
//! This module takes an AnnotatedText and produces markup for the
//! read-only, line-numbered code panel, with classes from a stylesheet.

pub mod config;
pub mod html;

pub use config::HtmlConfig;
pub use html::{escape_html, render_html, render_inline};
