//! The application controller.
//!
//! [`App`] owns the view state (the selected equipment and every view
//! component) and reacts to explicit [`UiEvent`]s. Work that must happen
//! after a delay is handed back to the caller as [`Scheduled`] actions, so
//! the controller itself never blocks or sleeps.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::DisplayConfig;
use crate::dataset::{EquipmentRecord, EquipmentSource};
use crate::error::{Error, Result};
use crate::render::HtmlRenderer;
use crate::resolver::{resolve_selected, DataSubset};
use crate::view::{CameraView, EquipmentSelector, InfoDisplay, ViewComponent, VoiceInput};

/// Page title and header text.
const APP_TITLE: &str = "Snap2Know";

/// A user action delivered to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The equipment picker changed; `None` (or an empty id) clears the selection.
    EquipmentSelected(Option<String>),
    /// The fetch button was pressed.
    FetchRequested,
    /// A typed or spoken command was submitted.
    CommandSubmitted(String),
    /// A category header was clicked.
    CategoryToggled(String),
}

/// Work the controller wants done later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Expand categories with this exact title.
    ExpandCategory(String),
}

/// A deferred action and how long to wait before applying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    /// Wait before applying.
    pub delay: Duration,
    /// What to apply.
    pub action: DeferredAction,
}

/// The application: dataset, view state and components.
#[derive(Debug)]
pub struct App<S: EquipmentSource> {
    source: S,
    display_config: DisplayConfig,
    html: HtmlRenderer,
    selected: Option<String>,
    selector: EquipmentSelector,
    camera: CameraView,
    voice: VoiceInput,
    display: InfoDisplay,
}

impl<S: EquipmentSource> App<S> {
    /// Create the application over `source`.
    #[must_use]
    pub fn new(source: S, display_config: DisplayConfig) -> Self {
        let selector = EquipmentSelector::new(source.catalog());
        let display = InfoDisplay::new(display_config.placeholder.clone());
        let html = HtmlRenderer::new(display_config.video_embed_base.clone());
        Self {
            source,
            display_config,
            html,
            selected: None,
            selector,
            camera: CameraView::new(),
            voice: VoiceInput::new(),
            display,
        }
    }

    /// The dataset.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The selected equipment id.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected equipment record.
    #[must_use]
    pub fn selected_record(&self) -> Option<&EquipmentRecord> {
        self.selected.as_deref().and_then(|id| self.source.get(id))
    }

    /// The info display.
    #[must_use]
    pub fn display(&self) -> &InfoDisplay {
        &self.display
    }

    /// The equipment selector.
    #[must_use]
    pub fn selector(&self) -> &EquipmentSelector {
        &self.selector
    }

    /// The camera view.
    #[must_use]
    pub fn camera(&self) -> &CameraView {
        &self.camera
    }

    /// The voice input.
    pub fn voice_mut(&mut self) -> &mut VoiceInput {
        &mut self.voice
    }

    /// The HTML renderer configured for this app.
    #[must_use]
    pub fn html(&self) -> &HtmlRenderer {
        &self.html
    }

    /// Handle one user event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEquipment`] when a selection names an id that is
    /// not in the dataset; the view state is left unchanged in that case.
    pub fn handle(&mut self, event: UiEvent) -> Result<Vec<Scheduled>> {
        debug!(?event, "Handling UI event");
        match event {
            UiEvent::EquipmentSelected(id) => {
                self.select(id)?;
                Ok(Vec::new())
            }
            UiEvent::FetchRequested => Ok(self.fetch()),
            UiEvent::CommandSubmitted(command) => {
                self.command(&command);
                Ok(Vec::new())
            }
            UiEvent::CategoryToggled(title) => {
                self.display.toggle_category(&title);
                Ok(Vec::new())
            }
        }
    }

    /// Submit whatever is in the voice input as a command.
    pub fn record(&mut self) {
        let command = self.voice.submit();
        self.command(&command);
    }

    /// Apply a deferred action.
    pub fn apply(&mut self, action: &DeferredAction) {
        match action {
            DeferredAction::ExpandCategory(title) => {
                self.display.expand_category(title);
                debug!(component = self.display.name(), ?action, "Deferred action applied");
            }
        }
    }

    /// Render the whole application shell as a standalone HTML page.
    #[must_use]
    pub fn render_page(&self) -> String {
        let body = format!(
            "<div class=\"app-container\"><header class=\"header\"><h1>{APP_TITLE}</h1></header><main class=\"main-content\">{}{}{}{}</main><footer class=\"footer\"><p>&copy; 2024 Snap2Know Inc.</p></footer></div>",
            self.selector.render(&self.html),
            self.camera.render(&self.html),
            self.voice.render(&self.html),
            self.display.render(&self.html),
        );
        self.html.page(APP_TITLE, &body)
    }

    fn select(&mut self, id: Option<String>) -> Result<()> {
        let id = id.filter(|id| !id.is_empty());
        if let Some(id) = &id {
            if !self.source.contains(id) {
                warn!(equipment = %id, "Selected equipment not in dataset");
                return Err(Error::unknown_equipment(id.clone()));
            }
        }

        info!(equipment = ?id, "Equipment selected");
        self.selector.update_content(id.clone());
        self.camera.update_content(id.clone());
        if id.is_none() {
            self.display.clear();
        }
        self.selected = id;
        Ok(())
    }

    fn fetch(&mut self) -> Vec<Scheduled> {
        let Some(record) = self.selected_record() else {
            debug!("Fetch ignored without a selection");
            return Vec::new();
        };

        let subset = DataSubset::from(record);
        self.display.update_content(Ok(subset));

        self.display_config
            .auto_expand()
            .map(|title| Scheduled {
                delay: self.display_config.auto_expand_delay(),
                action: DeferredAction::ExpandCategory(title.to_string()),
            })
            .into_iter()
            .collect()
    }

    fn command(&mut self, command: &str) {
        let resolution = resolve_selected(self.selected_record(), command);
        if let Err(err) = &resolution {
            debug!(command, %err, "Command not resolved");
        }
        self.display.update_content(resolution);
    }
}
