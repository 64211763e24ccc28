//! Error types for loading form fields

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum FieldsError {
    #[error("Failed to read fields file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse fields TOML in '{filename}': {error}")]
    Toml {
        filename: String,
        text: String,
        #[source]
        error: toml::de::Error,
    },
}

impl FieldsError {
    /// Byte range of the offending TOML, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            FieldsError::Toml { error, .. } => error.span(),
            FieldsError::Io { .. } => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn report(&self) -> String {
        let (filename, text, error, span) = match (self, self.span()) {
            (
                FieldsError::Toml {
                    filename,
                    text,
                    error,
                },
                Some(span),
            ) => (filename.as_str(), text.as_str(), error, span),
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid fields file")
            .with_label(
                Label::new((filename, span))
                    .with_message(error.message().trim())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(text)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
