//! View components.
//!
//! Each piece of the screen implements [`ViewComponent`]: it renders itself,
//! accepts new content and can be reset. Components hold only their own
//! presentation state; the [`App`](crate::controller::App) controller decides
//! what they show and wires user events between them.

mod camera;
mod display;
mod selector;
mod voice;

pub use camera::CameraView;
pub use display::InfoDisplay;
pub use selector::EquipmentSelector;
pub use voice::VoiceInput;

use crate::render::HtmlRenderer;

/// A renderable piece of the user interface.
pub trait ViewComponent: std::fmt::Debug {
    /// What [`update_content`](Self::update_content) accepts.
    type Content;

    /// Name of this component (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Render the component as HTML.
    fn render(&self, html: &HtmlRenderer) -> String;

    /// Replace the displayed content.
    fn update_content(&mut self, content: Self::Content);

    /// Reset to the initial state.
    fn clear(&mut self);
}
