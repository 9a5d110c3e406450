//! HTML rendering of documents.
//!
//! Markup mirrors the info display: each category is a `div.category`
//! holding a `div.category-header` and a `div.category-content`, the latter
//! hidden with an inline style while collapsed. All dataset text is escaped.

use std::fmt::Write;

use crate::projector::{Block, Body, CategoryBlock, Document, SubBlock, SubCategory};

/// Default URL prefix for embedded players.
const DEFAULT_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Stylesheet embedded in standalone pages.
const PAGE_STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f5f7; color: #222; }
.app-container { max-width: 860px; margin: 0 auto; padding: 0 16px; }
.header { background: #1f3a5f; color: #fff; padding: 12px 16px; }
.footer { color: #777; font-size: 0.85em; text-align: center; padding: 24px 0; }
.category { background: #fff; border: 1px solid #d8dde3; border-radius: 6px; margin: 12px 0; }
.category-header { cursor: pointer; font-weight: 600; padding: 10px 14px; }
.category-content { padding: 0 14px 14px; }
.safety { border-left: 4px solid #d9534f; padding-left: 10px; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 6px; border-bottom: 1px solid #eee; }
.video-container iframe { width: 100%; aspect-ratio: 16 / 9; border: 0; }
";

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders documents and page fragments as HTML.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    embed_base: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_EMBED_BASE)
    }
}

impl HtmlRenderer {
    /// Create a renderer embedding videos under `embed_base`.
    #[must_use]
    pub fn new(embed_base: impl Into<String>) -> Self {
        Self {
            embed_base: embed_base.into(),
        }
    }

    /// Player URL for a video id.
    #[must_use]
    pub fn video_url(&self, video_id: &str) -> String {
        format!("{}{}", self.embed_base, escape(video_id))
    }

    /// Render the blocks of a document.
    #[must_use]
    pub fn render_document(&self, document: &Document) -> String {
        let mut html = String::with_capacity(4096);
        for block in &document.blocks {
            match block {
                Block::Error { message } => {
                    let _ = write!(html, "<h2>Error</h2><p>{}</p>", escape(message));
                }
                Block::Category(category) => self.render_category(&mut html, category),
            }
        }
        html
    }

    /// Wrap body markup in a standalone page with the embedded stylesheet.
    #[must_use]
    pub fn page(&self, title: &str, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + PAGE_STYLE.len() + 256);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape(title));
        html.push_str("<style>\n");
        html.push_str(PAGE_STYLE);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(body);
        html.push_str("\n</body>\n</html>\n");
        html
    }

    fn render_category(&self, html: &mut String, block: &CategoryBlock) {
        let style = if block.expanded {
            "display: block;"
        } else {
            "display: none;"
        };
        let _ = write!(
            html,
            "<div class=\"category\" data-category=\"{}\"><div class=\"category-header\"><span class=\"icon icon-{}\" aria-hidden=\"true\"></span>{}</div><div class=\"category-content\" style=\"{style}\">",
            block.category,
            escape(&block.icon),
            escape(&block.title),
        );
        for section in &block.sections {
            self.render_section(html, section);
        }
        html.push_str("</div></div>");
    }

    fn render_section(&self, html: &mut String, section: &SubBlock) {
        let wrap = section.kind == SubCategory::Safety;
        if wrap {
            html.push_str("<div class=\"safety\">");
        }
        let _ = write!(html, "<h3>{}</h3>", escape(&section.title));

        match &section.body {
            Body::Checklist { items } => {
                html.push_str("<ul>");
                for item in items {
                    let _ = write!(html, "<li><input type=\"checkbox\">{}</li>", escape(item));
                }
                html.push_str("</ul>");
            }
            Body::Bullets { items } => render_list(html, "ul", items),
            Body::Steps { items } => render_list(html, "ol", items),
            Body::Videos { videos } => {
                for video in videos {
                    let _ = write!(
                        html,
                        "<h4>{}</h4><div class=\"video-container\"><iframe src=\"{}\" frameborder=\"0\" allowfullscreen></iframe></div>",
                        escape(&video.title),
                        self.video_url(&video.video_id),
                    );
                }
            }
            Body::Table { columns, rows } => {
                html.push_str("<table><thead><tr>");
                for column in columns {
                    let _ = write!(html, "<th>{}</th>", escape(column));
                }
                html.push_str("</tr></thead><tbody>");
                for row in rows {
                    html.push_str("<tr>");
                    for cell in row {
                        let _ = write!(html, "<td>{}</td>", escape(cell));
                    }
                    html.push_str("</tr>");
                }
                html.push_str("</tbody></table>");
            }
            Body::Symptoms { entries } => {
                for entry in entries {
                    let _ = write!(html, "<h4>{}</h4>", escape(&entry.name));
                    render_list(html, "ul", &entry.causes);
                }
            }
        }

        if wrap {
            html.push_str("</div>");
        }
    }
}

fn render_list(html: &mut String, tag: &str, items: &[String]) {
    let _ = write!(html, "<{tag}>");
    for item in items {
        let _ = write!(html, "<li>{}</li>", escape(item));
    }
    let _ = write!(html, "</{tag}>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{EquipmentSource, KnowledgeBase};
    use crate::projector::{project, Category};
    use crate::resolver::DataSubset;

    fn press_document() -> Document {
        let kb = KnowledgeBase::builtin().unwrap();
        project(&DataSubset::from(kb.get("HHP-450").unwrap()))
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_error_block() {
        let html = HtmlRenderer::default().render_document(&Document::error("Bad <input>"));
        assert_eq!(html, "<h2>Error</h2><p>Bad &lt;input&gt;</p>");
    }

    #[test]
    fn test_categories_start_collapsed() {
        let html = HtmlRenderer::default().render_document(&press_document());
        assert_eq!(html.matches("class=\"category-header\"").count(), 3);
        assert_eq!(html.matches("display: none;").count(), 3);
        assert!(!html.contains("display: block;"));
    }

    #[test]
    fn test_expanded_category_is_visible() {
        let mut doc = press_document();
        doc.expand_category("Application");
        let html = HtmlRenderer::default().render_document(&doc);
        assert_eq!(html.matches("display: block;").count(), 1);
        assert_eq!(html.matches("display: none;").count(), 2);
    }

    #[test]
    fn test_category_order_and_icons() {
        let html = HtmlRenderer::default().render_document(&press_document());
        let app = html.find(">Application</div>").unwrap();
        let maint = html.find(">Maintenance</div>").unwrap();
        let trouble = html.find(">Troubleshoot</div>").unwrap();
        assert!(app < maint && maint < trouble);
        for category in Category::ALL {
            assert!(html.contains(&format!("icon-{}", category.icon())));
        }
    }

    #[test]
    fn test_checklists_have_checkboxes() {
        let html = HtmlRenderer::default().render_document(&press_document());
        // 5 application safety + 5 readiness + 3 maintenance safety + 3 troubleshoot safety
        assert_eq!(html.matches("<input type=\"checkbox\">").count(), 16);
        assert_eq!(html.matches("<div class=\"safety\">").count(), 3);
    }

    #[test]
    fn test_quick_start_is_ordered_list() {
        let html = HtmlRenderer::default().render_document(&press_document());
        assert!(html.contains("<ol><li>Power on the main electrical disconnect.</li>"));
    }

    #[test]
    fn test_video_embed_uses_base() {
        let renderer = HtmlRenderer::new("https://videos.example.com/embed/");
        let html = renderer.render_document(&press_document());
        assert!(html.contains("<h3>Instructional Videos</h3>"));
        assert!(html.contains("src=\"https://videos.example.com/embed/dQw4w9WgXcQ\""));
    }

    #[test]
    fn test_history_table() {
        let html = HtmlRenderer::default().render_document(&press_document());
        assert!(html.contains("<th>Date</th><th>Description</th><th>Technician</th>"));
        assert!(html.contains("<td>2024-01-15</td>"));
    }

    #[test]
    fn test_symptoms_markup() {
        let html = HtmlRenderer::default().render_document(&press_document());
        assert!(html.contains("<h3>Troubleshooting</h3><h4>Machine will not start</h4><ul>"));
    }

    #[test]
    fn test_page_wraps_body() {
        let page = HtmlRenderer::default().page("Snap2Know", "<p>hi</p>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Snap2Know</title>"));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.contains(".category-header"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = HtmlRenderer::default();
        assert_eq!(
            renderer.render_document(&press_document()),
            renderer.render_document(&press_document())
        );
    }
}
