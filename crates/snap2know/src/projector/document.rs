//! Document model produced by the projector.

use serde::Serialize;

/// Top-level grouping in the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Operating information.
    Application,
    /// Servicing information.
    Maintenance,
    /// Fault diagnosis.
    Troubleshoot,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Application, Self::Maintenance, Self::Troubleshoot];

    /// Visible block title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Maintenance => "Maintenance",
            Self::Troubleshoot => "Troubleshoot",
        }
    }

    /// Icon tag shown next to the title.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Application => "play-circle",
            Self::Maintenance => "wrench",
            Self::Troubleshoot => "stethoscope",
        }
    }

    /// Find the category whose title is exactly `title`.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.title() == title)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Troubleshoot => write!(f, "troubleshoot"),
        }
    }
}

/// Named field within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubCategory {
    /// Safety rules (any category).
    Safety,
    /// Pre-operation checklist.
    ReadinessChecklist,
    /// Numbered startup steps.
    QuickStartGuide,
    /// Embedded videos.
    InstructionalVideos,
    /// Maintenance tasks.
    Schedule,
    /// Replacement parts.
    Parts,
    /// Past maintenance work.
    MaintenanceHistory,
    /// Troubleshooting symptoms.
    Symptoms,
}

/// A video to embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    /// Heading shown above the player.
    pub title: String,
    /// Opaque id handed to the player.
    pub video_id: String,
}

/// A symptom heading and its causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomEntry {
    /// Symptom name.
    pub name: String,
    /// Causes in display order.
    pub causes: Vec<String>,
}

/// Content of a sub-block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    /// Unordered list with an unchecked toggle per item.
    Checklist {
        /// Items.
        items: Vec<String>,
    },
    /// Plain unordered list.
    Bullets {
        /// Items.
        items: Vec<String>,
    },
    /// Numbered list.
    Steps {
        /// Steps.
        items: Vec<String>,
    },
    /// Titled embedded players.
    Videos {
        /// Videos.
        videos: Vec<VideoEmbed>,
    },
    /// Table with a header row.
    Table {
        /// Column headings.
        columns: Vec<String>,
        /// Rows, one cell per column.
        rows: Vec<Vec<String>>,
    },
    /// Symptom headings each followed by a cause list.
    Symptoms {
        /// Symptoms.
        entries: Vec<SymptomEntry>,
    },
}

/// One titled sub-section inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubBlock {
    /// Which field this came from.
    pub kind: SubCategory,
    /// Heading.
    pub title: String,
    /// Content.
    pub body: Body,
}

/// A collapsible category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBlock {
    /// Source category.
    pub category: Category,
    /// Visible title; matched exactly by expansion requests.
    pub title: String,
    /// Icon tag.
    pub icon: String,
    /// Whether the content is visible.
    pub expanded: bool,
    /// Sub-sections in the category's fixed order.
    pub sections: Vec<SubBlock>,
}

impl CategoryBlock {
    /// Create a collapsed block for `category`.
    #[must_use]
    pub fn new(category: Category, sections: Vec<SubBlock>) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            icon: category.icon().to_string(),
            expanded: false,
            sections,
        }
    }

    /// Find a sub-block by kind.
    #[must_use]
    pub fn section(&self, kind: SubCategory) -> Option<&SubBlock> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// A top-level display block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// An error heading and message.
    Error {
        /// Message text.
        message: String,
    },
    /// A collapsible category.
    Category(CategoryBlock),
}

/// An ordered sequence of display blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Blocks in display order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// A document holding a single error block.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::Error {
                message: message.into(),
            }],
        }
    }

    /// The error message, if this is an error document.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Error { message } => Some(message.as_str()),
            Block::Category(_) => None,
        })
    }

    /// Iterate over category blocks.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Category(c) => Some(c),
            Block::Error { .. } => None,
        })
    }

    fn categories_mut(&mut self) -> impl Iterator<Item = &mut CategoryBlock> {
        self.blocks.iter_mut().filter_map(|b| match b {
            Block::Category(c) => Some(c),
            Block::Error { .. } => None,
        })
    }

    /// Find a category block by exact title.
    #[must_use]
    pub fn category(&self, title: &str) -> Option<&CategoryBlock> {
        self.categories().find(|c| c.title == title)
    }

    /// Expand every category whose title is exactly `title`.
    ///
    /// Other categories keep their state. Returns how many blocks matched.
    pub fn expand_category(&mut self, title: &str) -> usize {
        let mut matched = 0;
        for block in self.categories_mut().filter(|c| c.title == title) {
            block.expanded = true;
            matched += 1;
        }
        matched
    }

    /// Flip the visibility of every category whose title is exactly `title`.
    ///
    /// Returns how many blocks matched.
    pub fn toggle_category(&mut self, title: &str) -> usize {
        let mut matched = 0;
        for block in self.categories_mut().filter(|c| c.title == title) {
            block.expanded = !block.expanded;
            matched += 1;
        }
        matched
    }

    /// Expand every category.
    pub fn expand_all(&mut self) {
        for block in self.categories_mut() {
            block.expanded = true;
        }
    }

    /// Check whether the document has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
