//! Simulated voice input.

use super::ViewComponent;
use crate::render::{escape, HtmlRenderer};

/// Text box standing in for speech capture, with a record button.
#[derive(Debug, Clone, Default)]
pub struct VoiceInput {
    text: String,
}

impl VoiceInput {
    /// Create an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending command text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the pending command and clear the input, as pressing "Record" does.
    pub fn submit(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

impl ViewComponent for VoiceInput {
    type Content = String;

    fn name(&self) -> &'static str {
        "voice-input"
    }

    fn render(&self, _html: &HtmlRenderer) -> String {
        format!(
            "<div class=\"voice-input\"><input type=\"text\" placeholder=\"Enter voice command...\" value=\"{}\"><button>Record</button></div>",
            escape(&self.text)
        )
    }

    fn update_content(&mut self, content: String) {
        self.text = content;
    }

    fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears() {
        let mut input = VoiceInput::new();
        input.update_content("show maintenance".to_string());
        assert_eq!(input.submit(), "show maintenance");
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_render_escapes_value() {
        let mut input = VoiceInput::new();
        input.update_content("say \"hi\"".to_string());
        assert!(input
            .render(&HtmlRenderer::default())
            .contains("value=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn test_clear() {
        let mut input = VoiceInput::new();
        input.update_content("start".to_string());
        input.clear();
        assert!(input.text().is_empty());
    }
}
