//! `snap2know` - Equipment reference lookup driven by free-text commands
//!
//! This library resolves typed or spoken commands against a static equipment
//! dataset and projects the matching data into collapsible display documents.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod projector;
pub mod render;
pub mod resolver;
pub mod session;
pub mod view;

pub use config::Config;
pub use controller::{App, UiEvent};
pub use dataset::{EquipmentRecord, EquipmentSource, KnowledgeBase};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use projector::{project, Document};
pub use resolver::{resolve, DataSubset, LookupError};
