//! Simulated camera view.

use super::ViewComponent;
use crate::render::{escape, HtmlRenderer};

/// Shows which equipment the (simulated) camera recognized.
#[derive(Debug, Clone, Default)]
pub struct CameraView {
    recognized: Option<String>,
}

impl CameraView {
    /// Create a view with nothing recognized.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for the recognized equipment, `None` when empty.
    #[must_use]
    pub fn label(&self) -> &str {
        self.recognized.as_deref().unwrap_or("None")
    }
}

impl ViewComponent for CameraView {
    type Content = Option<String>;

    fn name(&self) -> &'static str {
        "camera-view"
    }

    fn render(&self, _html: &HtmlRenderer) -> String {
        format!(
            "<div class=\"camera-view\"><p>Camera view simulated. Equipment recognized: <strong id=\"equipment-id\">{}</strong></p></div>",
            escape(self.label())
        )
    }

    fn update_content(&mut self, content: Option<String>) {
        self.recognized = content.filter(|id| !id.is_empty());
    }

    fn clear(&mut self) {
        self.recognized = None;
    }
}
