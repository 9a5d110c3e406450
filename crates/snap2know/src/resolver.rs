//! Command resolution.
//!
//! Maps a free-text command (typed or spoken) to the part of an equipment
//! record it asks for. Matching is case-insensitive substring containment,
//! checked in a fixed priority order; the first rule that matches wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dataset::{Application, EquipmentRecord, Maintenance, Troubleshoot};

/// Phrase that narrows troubleshooting output to a single symptom.
const ERROR_CODE_12_PHRASE: &str = "error code 12";

/// Stored symptom label selected by [`ERROR_CODE_12_PHRASE`].
const ERROR_CODE_12_LABEL: &str = "Error Code 12";

/// A lookup failure shown to the user instead of content.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LookupError {
    /// A command arrived while nothing was selected.
    #[error("Please select an equipment first.")]
    NoEquipmentSelected,

    /// No rule matched the command; carries the command as entered.
    #[error("Command \"{0}\" not understood.")]
    CommandNotUnderstood(String),
}

/// A partial equipment record holding only the sections a command asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSubset {
    /// Application section, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,

    /// Maintenance section, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<Maintenance>,

    /// Troubleshoot section, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub troubleshoot: Option<Troubleshoot>,
}

impl From<&EquipmentRecord> for DataSubset {
    fn from(record: &EquipmentRecord) -> Self {
        Self {
            application: record.application.clone(),
            maintenance: record.maintenance.clone(),
            troubleshoot: record.troubleshoot.clone(),
        }
    }
}

/// Outcome of resolving a command: content to show or a message explaining why not.
pub type Resolution = std::result::Result<DataSubset, LookupError>;

/// What a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "start" or "application".
    Application,
    /// "maintenance".
    Maintenance,
    /// "troubleshoot" or "error"; optionally narrowed to one stored symptom label.
    Troubleshoot {
        /// Exact symptom label to keep, if any.
        symptom: Option<&'static str>,
    },
    /// "safety"; always answered from the application section.
    Safety,
}

impl Intent {
    /// Classify a command, returning `None` when no rule matches.
    #[must_use]
    pub fn classify(command: &str) -> Option<Self> {
        let command = command.to_lowercase();

        if command.contains("start") || command.contains("application") {
            Some(Self::Application)
        } else if command.contains("maintenance") {
            Some(Self::Maintenance)
        } else if command.contains("troubleshoot") || command.contains("error") {
            let symptom = command
                .contains(ERROR_CODE_12_PHRASE)
                .then_some(ERROR_CODE_12_LABEL);
            Some(Self::Troubleshoot { symptom })
        } else if command.contains("safety") {
            Some(Self::Safety)
        } else {
            None
        }
    }

    /// Extract the subset of `equipment` this intent asks for.
    #[must_use]
    pub fn select(self, equipment: &EquipmentRecord) -> DataSubset {
        match self {
            Self::Application => DataSubset {
                application: equipment.application.clone(),
                ..DataSubset::default()
            },
            Self::Maintenance => DataSubset {
                maintenance: equipment.maintenance.clone(),
                ..DataSubset::default()
            },
            Self::Troubleshoot { symptom } => {
                let troubleshoot = equipment.troubleshoot.clone().map(|mut section| {
                    if let (Some(label), Some(symptoms)) = (symptom, section.symptoms.as_mut()) {
                        symptoms.retain(|s| s.symptom == label);
                    }
                    section
                });
                DataSubset {
                    troubleshoot,
                    ..DataSubset::default()
                }
            }
            Self::Safety => DataSubset {
                application: Some(Application {
                    safety: equipment
                        .application
                        .as_ref()
                        .and_then(|a| a.safety.clone()),
                    ..Application::default()
                }),
                ..DataSubset::default()
            },
        }
    }
}

/// Resolve a command against a selected equipment record.
///
/// # Errors
///
/// Returns [`LookupError::CommandNotUnderstood`] when no rule matches.
pub fn resolve(equipment: &EquipmentRecord, command: &str) -> Resolution {
    let intent = Intent::classify(command)
        .ok_or_else(|| LookupError::CommandNotUnderstood(command.to_string()))?;
    debug!(?intent, equipment = %equipment.name, "Resolved command");
    Ok(intent.select(equipment))
}

/// Resolve a command against an optional selection.
///
/// With no selection the command is not looked at.
///
/// # Errors
///
/// Returns [`LookupError::NoEquipmentSelected`] without a selection, otherwise
/// whatever [`resolve`] returns.
pub fn resolve_selected(equipment: Option<&EquipmentRecord>, command: &str) -> Resolution {
    match equipment {
        Some(equipment) => resolve(equipment, command),
        None => Err(LookupError::NoEquipmentSelected),
    }
}
