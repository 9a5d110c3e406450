//! The equipment dataset.
//!
//! The dataset is loaded once at startup and only read afterwards. It is
//! reached through the [`EquipmentSource`] trait so the resolver and the
//! controller never depend on where the records came from.
//!
//! # Example
//!
//! ```
//! use snap2know::dataset::{EquipmentSource, KnowledgeBase};
//!
//! let kb = KnowledgeBase::builtin().unwrap();
//! let press = kb.get("HHP-450").unwrap();
//! assert!(press.name.contains("Hydraulic Press"));
//! ```

mod model;
mod source;

pub use model::{
    Application, Checklist, EquipmentRecord, Maintenance, MaintenanceHistory, MaintenanceRecord,
    PartsList, QuickStartGuide, Schedule, Symptom, Troubleshoot, Video,
};
pub use source::{CatalogEntry, EquipmentSource, KnowledgeBase};
