//! Plain-text rendering for the terminal.

use std::fmt::Write;

use crate::projector::{Block, Body, CategoryBlock, Document};

/// Renders documents as indented plain text.
///
/// Collapsed categories show only their header line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a text renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render a document.
    #[must_use]
    pub fn render(&self, document: &Document) -> String {
        let mut out = String::new();
        for block in &document.blocks {
            match block {
                Block::Error { message } => {
                    let _ = writeln!(out, "Error");
                    let _ = writeln!(out, "-----");
                    let _ = writeln!(out, "{message}");
                }
                Block::Category(category) => self.render_category(&mut out, category),
            }
        }
        out
    }

    #[allow(clippy::unused_self)]
    fn render_category(&self, out: &mut String, block: &CategoryBlock) {
        let marker = if block.expanded { "[-]" } else { "[+]" };
        let _ = writeln!(out, "{marker} {} ({})", block.title, block.icon);

        if !block.expanded {
            return;
        }

        for section in &block.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "  {}", section.title);
            match &section.body {
                Body::Checklist { items } => {
                    for item in items {
                        let _ = writeln!(out, "    [ ] {item}");
                    }
                }
                Body::Bullets { items } => {
                    for item in items {
                        let _ = writeln!(out, "    - {item}");
                    }
                }
                Body::Steps { items } => {
                    for (i, item) in items.iter().enumerate() {
                        let _ = writeln!(out, "    {}. {item}", i + 1);
                    }
                }
                Body::Videos { videos } => {
                    for video in videos {
                        let _ = writeln!(out, "    {} [video: {}]", video.title, video.video_id);
                    }
                }
                Body::Table { columns, rows } => render_table(out, columns, rows),
                Body::Symptoms { entries } => {
                    for entry in entries {
                        let _ = writeln!(out, "    {}", entry.name);
                        for cause in &entry.causes {
                            let _ = writeln!(out, "      - {cause}");
                        }
                    }
                }
            }
        }
        let _ = writeln!(out);
    }
}

fn render_table(out: &mut String, columns: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "    {}", line(columns));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "    {}", rule.join("  "));
    for row in rows {
        let _ = writeln!(out, "    {}", line(row.as_slice()));
    }
}
