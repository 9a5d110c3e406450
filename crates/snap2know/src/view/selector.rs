//! The equipment picker.

use std::fmt::Write;

use super::ViewComponent;
use crate::dataset::CatalogEntry;
use crate::render::{escape, HtmlRenderer};

/// Label of the disabled first option.
const PROMPT: &str = "Select an equipment";

/// Drop-down of available equipment plus the fetch button it enables.
#[derive(Debug, Clone)]
pub struct EquipmentSelector {
    options: Vec<CatalogEntry>,
    selected: Option<String>,
}

impl EquipmentSelector {
    /// Create a selector offering `options` in the given order.
    #[must_use]
    pub fn new(options: Vec<CatalogEntry>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// The offered equipment.
    #[must_use]
    pub fn options(&self) -> &[CatalogEntry] {
        &self.options
    }

    /// The selected equipment id.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the fetch button is enabled.
    #[must_use]
    pub fn fetch_enabled(&self) -> bool {
        self.selected.is_some()
    }
}

impl ViewComponent for EquipmentSelector {
    type Content = Option<String>;

    fn name(&self) -> &'static str {
        "equipment-selector"
    }

    fn render(&self, _html: &HtmlRenderer) -> String {
        let mut out = String::from(
            "<div class=\"equipment-selector\"><label for=\"equipment\">Select Equipment:</label><select id=\"equipment\">",
        );
        let prompt_selected = if self.selected.is_none() { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"\" disabled{prompt_selected}>{PROMPT}</option>"
        );
        for option in &self.options {
            let selected = if self.selected.as_deref() == Some(option.id.as_str()) {
                " selected"
            } else {
                ""
            };
            let _ = write!(
                out,
                "<option value=\"{}\"{selected}>{}</option>",
                escape(&option.id),
                escape(&option.name)
            );
        }
        out.push_str("</select></div>");

        let disabled = if self.fetch_enabled() { "" } else { " disabled" };
        let _ = write!(out, "<button id=\"fetch-button\"{disabled}>Fetch</button>");
        out
    }

    fn update_content(&mut self, content: Option<String>) {
        self.selected = content.filter(|id| !id.is_empty());
    }

    fn clear(&mut self) {
        self.selected = None;
    }
}
