//! Content projection.
//!
//! Turns a [`DataSubset`] (or a [`LookupError`]) into a [`Document`]: an
//! ordered list of collapsible category blocks, each holding the sub-sections
//! present in the data in a fixed per-category order. Projection is pure;
//! the same input always yields the same document.

mod document;

pub use document::{
    Block, Body, Category, CategoryBlock, Document, SubBlock, SubCategory, SymptomEntry,
    VideoEmbed,
};

use crate::dataset::{
    Application, Checklist, Maintenance, MaintenanceHistory, PartsList, QuickStartGuide, Schedule,
    Symptom, Troubleshoot, Video,
};
use crate::resolver::{DataSubset, LookupError, Resolution};

/// Heading of the videos sub-block.
const VIDEOS_TITLE: &str = "Instructional Videos";

/// Heading of the symptoms sub-block.
const SYMPTOMS_TITLE: &str = "Troubleshooting";

/// Column headings of the maintenance history table.
const HISTORY_COLUMNS: [&str; 3] = ["Date", "Description", "Technician"];

/// Project a data subset into a document of collapsed categories.
#[must_use]
pub fn project(subset: &DataSubset) -> Document {
    let mut blocks = Vec::new();

    if let Some(application) = &subset.application {
        blocks.push(Block::Category(CategoryBlock::new(
            Category::Application,
            application_sections(application),
        )));
    }
    if let Some(maintenance) = &subset.maintenance {
        blocks.push(Block::Category(CategoryBlock::new(
            Category::Maintenance,
            maintenance_sections(maintenance),
        )));
    }
    if let Some(troubleshoot) = &subset.troubleshoot {
        blocks.push(Block::Category(CategoryBlock::new(
            Category::Troubleshoot,
            troubleshoot_sections(troubleshoot),
        )));
    }

    Document { blocks }
}

/// Project a lookup error into a single error block.
#[must_use]
pub fn project_error(error: &LookupError) -> Document {
    Document::error(error.to_string())
}

/// Project either outcome of command resolution.
#[must_use]
pub fn project_resolution(resolution: &Resolution) -> Document {
    match resolution {
        Ok(subset) => project(subset),
        Err(error) => project_error(error),
    }
}

fn application_sections(application: &Application) -> Vec<SubBlock> {
    let mut sections = Vec::new();
    if let Some(safety) = &application.safety {
        sections.push(checklist_block(SubCategory::Safety, safety));
    }
    if let Some(checklist) = &application.readiness_checklist {
        sections.push(checklist_block(SubCategory::ReadinessChecklist, checklist));
    }
    if let Some(guide) = &application.quick_start_guide {
        sections.push(quick_start_block(guide));
    }
    if let Some(videos) = &application.instructional_videos {
        sections.push(videos_block(videos));
    }
    sections
}

fn maintenance_sections(maintenance: &Maintenance) -> Vec<SubBlock> {
    let mut sections = Vec::new();
    if let Some(safety) = &maintenance.safety {
        sections.push(checklist_block(SubCategory::Safety, safety));
    }
    if let Some(schedule) = &maintenance.schedule {
        sections.push(schedule_block(schedule));
    }
    if let Some(parts) = &maintenance.parts {
        sections.push(parts_block(parts));
    }
    if let Some(history) = &maintenance.maintenance_history {
        sections.push(history_block(history));
    }
    sections
}

fn troubleshoot_sections(troubleshoot: &Troubleshoot) -> Vec<SubBlock> {
    let mut sections = Vec::new();
    if let Some(safety) = &troubleshoot.safety {
        sections.push(checklist_block(SubCategory::Safety, safety));
    }
    if let Some(symptoms) = &troubleshoot.symptoms {
        sections.push(symptoms_block(symptoms));
    }
    sections
}

fn checklist_block(kind: SubCategory, checklist: &Checklist) -> SubBlock {
    SubBlock {
        kind,
        title: checklist.title.clone(),
        body: Body::Checklist {
            items: checklist.points.clone(),
        },
    }
}

fn quick_start_block(guide: &QuickStartGuide) -> SubBlock {
    SubBlock {
        kind: SubCategory::QuickStartGuide,
        title: guide.title.clone(),
        body: Body::Steps {
            items: guide.steps.clone(),
        },
    }
}

fn videos_block(videos: &[Video]) -> SubBlock {
    SubBlock {
        kind: SubCategory::InstructionalVideos,
        title: VIDEOS_TITLE.to_string(),
        body: Body::Videos {
            videos: videos
                .iter()
                .map(|v| VideoEmbed {
                    title: v.title.clone(),
                    video_id: v.video_id.clone(),
                })
                .collect(),
        },
    }
}

fn schedule_block(schedule: &Schedule) -> SubBlock {
    SubBlock {
        kind: SubCategory::Schedule,
        title: schedule.title.clone(),
        body: Body::Bullets {
            items: schedule.tasks.clone(),
        },
    }
}

fn parts_block(parts: &PartsList) -> SubBlock {
    SubBlock {
        kind: SubCategory::Parts,
        title: parts.title.clone(),
        body: Body::Bullets {
            items: parts.list.clone(),
        },
    }
}

fn history_block(history: &MaintenanceHistory) -> SubBlock {
    SubBlock {
        kind: SubCategory::MaintenanceHistory,
        title: history.title.clone(),
        body: Body::Table {
            columns: HISTORY_COLUMNS.iter().map(ToString::to_string).collect(),
            rows: history
                .records
                .iter()
                .map(|r| vec![r.date.clone(), r.description.clone(), r.technician.clone()])
                .collect(),
        },
    }
}

fn symptoms_block(symptoms: &[Symptom]) -> SubBlock {
    SubBlock {
        kind: SubCategory::Symptoms,
        title: SYMPTOMS_TITLE.to_string(),
        body: Body::Symptoms {
            entries: symptoms
                .iter()
                .map(|s| SymptomEntry {
                    name: s.symptom.clone(),
                    causes: s.causes.clone(),
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{EquipmentSource, KnowledgeBase, MaintenanceRecord};

    fn press_subset() -> DataSubset {
        let kb = KnowledgeBase::builtin().unwrap();
        DataSubset::from(kb.get("HHP-450").unwrap())
    }

    fn kinds(block: &CategoryBlock) -> Vec<SubCategory> {
        block.sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_full_record_category_order() {
        let doc = project(&press_subset());
        let titles: Vec<&str> = doc.categories().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Application", "Maintenance", "Troubleshoot"]);
        assert!(doc.categories().all(|c| !c.expanded));
    }

    #[test]
    fn test_application_sub_order() {
        let doc = project(&press_subset());
        assert_eq!(
            kinds(doc.category("Application").unwrap()),
            vec![
                SubCategory::Safety,
                SubCategory::ReadinessChecklist,
                SubCategory::QuickStartGuide,
                SubCategory::InstructionalVideos,
            ]
        );
    }

    #[test]
    fn test_maintenance_sub_order() {
        let doc = project(&press_subset());
        assert_eq!(
            kinds(doc.category("Maintenance").unwrap()),
            vec![
                SubCategory::Safety,
                SubCategory::Schedule,
                SubCategory::Parts,
                SubCategory::MaintenanceHistory,
            ]
        );
    }

    #[test]
    fn test_troubleshoot_sub_order() {
        let doc = project(&press_subset());
        assert_eq!(
            kinds(doc.category("Troubleshoot").unwrap()),
            vec![SubCategory::Safety, SubCategory::Symptoms]
        );
    }

    #[test]
    fn test_only_parts_projects_single_sub_block() {
        let subset = DataSubset {
            maintenance: Some(Maintenance {
                parts: Some(PartsList {
                    title: "Parts".to_string(),
                    list: vec!["Seal kit".to_string()],
                }),
                ..Maintenance::default()
            }),
            ..DataSubset::default()
        };

        let doc = project(&subset);
        assert_eq!(doc.blocks.len(), 1);
        let block = doc.category("Maintenance").unwrap();
        assert_eq!(block.sections.len(), 1);
        assert_eq!(block.sections[0].kind, SubCategory::Parts);
        assert_eq!(
            block.sections[0].body,
            Body::Bullets {
                items: vec!["Seal kit".to_string()]
            }
        );
        assert!(block.section(SubCategory::Safety).is_none());
        assert!(block.section(SubCategory::Schedule).is_none());
        assert!(block.section(SubCategory::MaintenanceHistory).is_none());
    }

    #[test]
    fn test_safety_and_checklist_are_checkable() {
        let doc = project(&press_subset());
        let application = doc.category("Application").unwrap();
        for kind in [SubCategory::Safety, SubCategory::ReadinessChecklist] {
            assert!(matches!(
                application.section(kind).unwrap().body,
                Body::Checklist { .. }
            ));
        }
    }

    #[test]
    fn test_schedule_is_plain_list() {
        let doc = project(&press_subset());
        let schedule = doc
            .category("Maintenance")
            .unwrap()
            .section(SubCategory::Schedule)
            .unwrap();
        assert!(matches!(schedule.body, Body::Bullets { .. }));
    }

    #[test]
    fn test_quick_start_is_steps() {
        let doc = project(&press_subset());
        let guide = doc
            .category("Application")
            .unwrap()
            .section(SubCategory::QuickStartGuide)
            .unwrap();
        match &guide.body {
            Body::Steps { items } => assert_eq!(items[0], "Power on the main electrical disconnect."),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_history_table_rows_in_order() {
        let subset = DataSubset {
            maintenance: Some(Maintenance {
                maintenance_history: Some(MaintenanceHistory {
                    title: "History".to_string(),
                    records: vec![
                        MaintenanceRecord {
                            date: "2024-02-01".to_string(),
                            description: "Seals".to_string(),
                            technician: "Ana".to_string(),
                        },
                        MaintenanceRecord {
                            date: "2024-01-01".to_string(),
                            description: "Fluid".to_string(),
                            technician: "Bo".to_string(),
                        },
                    ],
                }),
                ..Maintenance::default()
            }),
            ..DataSubset::default()
        };

        let doc = project(&subset);
        let history = &doc.category("Maintenance").unwrap().sections[0];
        match &history.body {
            Body::Table { columns, rows } => {
                assert_eq!(columns, &["Date", "Description", "Technician"]);
                assert_eq!(rows[0], vec!["2024-02-01", "Seals", "Ana"]);
                assert_eq!(rows[1][2], "Bo");
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_symptoms_block() {
        let doc = project(&press_subset());
        let symptoms = doc
            .category("Troubleshoot")
            .unwrap()
            .section(SubCategory::Symptoms)
            .unwrap();
        assert_eq!(symptoms.title, "Troubleshooting");
        match &symptoms.body {
            Body::Symptoms { entries } => {
                assert_eq!(entries.len(), 3);
                assert_eq!(entries[2].name, "Error Code 12");
                assert_eq!(entries[2].causes.len(), 3);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_videos_block() {
        let doc = project(&press_subset());
        let videos = doc
            .category("Application")
            .unwrap()
            .section(SubCategory::InstructionalVideos)
            .unwrap();
        assert_eq!(videos.title, "Instructional Videos");
        match &videos.body {
            Body::Videos { videos } => {
                assert_eq!(videos.len(), 1);
                assert_eq!(videos[0].video_id, "dQw4w9WgXcQ");
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_empty_subset_projects_empty_document() {
        assert!(project(&DataSubset::default()).is_empty());
    }

    #[test]
    fn test_empty_section_projects_empty_category() {
        let subset = DataSubset {
            application: Some(Application::default()),
            ..DataSubset::default()
        };
        let doc = project(&subset);
        assert_eq!(doc.blocks.len(), 1);
        assert!(doc.category("Application").unwrap().sections.is_empty());
    }

    #[test]
    fn test_project_error() {
        let doc = project_error(&LookupError::CommandNotUnderstood("xyz".to_string()));
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.error_message(), Some("Command \"xyz\" not understood."));
        assert_eq!(doc.categories().count(), 0);
    }

    #[test]
    fn test_project_resolution() {
        let doc = project_resolution(&Err(LookupError::NoEquipmentSelected));
        assert_eq!(doc.error_message(), Some("Please select an equipment first."));

        let doc = project_resolution(&Ok(press_subset()));
        assert_eq!(doc.categories().count(), 3);
    }

    #[test]
    fn test_project_is_idempotent() {
        let subset = press_subset();
        assert_eq!(project(&subset), project(&subset));
    }
}
