//! Equipment record types.
//!
//! Field names follow the on-disk JSON dataset format. Every sub-category is
//! optional; a missing field is simply not displayed.

use serde::{Deserialize, Serialize};

/// One entry in the dataset describing a machine and its documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// Human-readable display name.
    pub name: String,

    /// Operating information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,

    /// Servicing information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<Maintenance>,

    /// Fault diagnosis information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub troubleshoot: Option<Troubleshoot>,
}

impl EquipmentRecord {
    /// Check whether the record carries no section at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.application.is_none() && self.maintenance.is_none() && self.troubleshoot.is_none()
    }
}

/// The `application` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Safety rules for operating the equipment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<Checklist>,

    /// Checks to perform before operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_checklist: Option<Checklist>,

    /// Step-by-step startup instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_start_guide: Option<QuickStartGuide>,

    /// Instructional videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructional_videos: Option<Vec<Video>>,
}

/// The `maintenance` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintenance {
    /// Safety rules for servicing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<Checklist>,

    /// Recurring maintenance tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,

    /// Common replacement parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<PartsList>,

    /// Past maintenance work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_history: Option<MaintenanceHistory>,
}

/// The `troubleshoot` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Troubleshoot {
    /// Safety rules for troubleshooting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<Checklist>,

    /// Known symptoms and their likely causes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<Symptom>>,
}

/// A titled list of points; used for safety rules and readiness checklists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Heading.
    pub title: String,
    /// Points in display order.
    #[serde(default)]
    pub points: Vec<String>,
}

/// A titled sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStartGuide {
    /// Heading.
    pub title: String,
    /// Steps in execution order.
    #[serde(default)]
    pub steps: Vec<String>,
}

/// An instructional video reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Video title.
    pub title: String,
    /// Opaque identifier resolved by the embedding player.
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// A titled list of maintenance tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Heading.
    pub title: String,
    /// Tasks in display order.
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// A titled list of replacement parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsList {
    /// Heading.
    pub title: String,
    /// Parts in display order.
    #[serde(default)]
    pub list: Vec<String>,
}

/// A titled log of maintenance work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceHistory {
    /// Heading.
    pub title: String,
    /// Records in display order.
    #[serde(default)]
    pub records: Vec<MaintenanceRecord>,
}

/// One line of maintenance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Date as stored in the dataset; not interpreted.
    pub date: String,
    /// What was done.
    pub description: String,
    /// Who did it.
    pub technician: String,
}

/// A troubleshooting symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Stored label, matched exactly by symptom filters.
    pub symptom: String,
    /// Likely causes in display order.
    #[serde(default)]
    pub causes: Vec<String>,
}
