//! Document rendering.
//!
//! A [`Document`](crate::projector::Document) can be rendered as HTML
//! (the info-display markup, or a standalone page), as plain text for the
//! terminal, or as JSON.

mod html;
mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use html::{escape, HtmlRenderer};
pub use text::TextRenderer;

use crate::error::Result;
use crate::projector::Document;

/// Output format for rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Terminal text
    #[default]
    Text,
    /// HTML fragment
    Html,
    /// JSON document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render `document` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_document(
    document: &Document,
    format: OutputFormat,
    html: &HtmlRenderer,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextRenderer::new().render(document)),
        OutputFormat::Html => Ok(html.render_document(document)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
    }
}
