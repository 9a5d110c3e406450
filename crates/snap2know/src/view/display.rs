//! The info display: shows projected documents.

use tracing::debug;

use super::ViewComponent;
use crate::projector::{project_resolution, Document};
use crate::render::{escape, HtmlRenderer};
use crate::resolver::Resolution;

/// Displays a projected document, or a placeholder when empty.
#[derive(Debug, Clone)]
pub struct InfoDisplay {
    placeholder: String,
    document: Option<Document>,
}

impl InfoDisplay {
    /// Create a display showing `placeholder` until content arrives.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            document: None,
        }
    }

    /// The current document, if any content is shown.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// The placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Expand categories whose title is exactly `title`; returns the match count.
    pub fn expand_category(&mut self, title: &str) -> usize {
        let matched = self
            .document
            .as_mut()
            .map_or(0, |doc| doc.expand_category(title));
        debug!(title, matched, "Expand category");
        matched
    }

    /// Flip categories whose title is exactly `title`; returns the match count.
    pub fn toggle_category(&mut self, title: &str) -> usize {
        let matched = self
            .document
            .as_mut()
            .map_or(0, |doc| doc.toggle_category(title));
        debug!(title, matched, "Toggle category");
        matched
    }
}

impl ViewComponent for InfoDisplay {
    type Content = Resolution;

    fn name(&self) -> &'static str {
        "info-display"
    }

    fn render(&self, html: &HtmlRenderer) -> String {
        let inner = match &self.document {
            Some(document) => html.render_document(document),
            None => format!("<h2>{}</h2>", escape(&self.placeholder)),
        };
        format!("<div class=\"info-display\">{inner}</div>")
    }

    fn update_content(&mut self, content: Resolution) {
        self.document = Some(project_resolution(&content));
    }

    fn clear(&mut self) {
        self.document = None;
    }
}
