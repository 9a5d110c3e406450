//! Interactive session.
//!
//! Reads one instruction per line, turns it into a [`UiEvent`] for the
//! controller and writes the refreshed display after each step. Deferred
//! actions returned by the controller are awaited with `tokio::time::sleep`
//! and then applied before the display is written.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::controller::{App, DeferredAction, UiEvent};
use crate::dataset::EquipmentSource;
use crate::error::Result;
use crate::projector::Document;
use crate::render::{render_document, OutputFormat};
use crate::view::ViewComponent;

const HELP: &str = "\
Commands:
  list                 list available equipment
  select <id>          select equipment
  deselect             clear the selection
  fetch                show everything for the selected equipment
  say <command>        submit a spoken command (any other text works too)
  toggle <title>       expand or collapse a category
  expand <title>       expand a category
  page                 print the full page as HTML
  help                 show this help
  quit                 leave the session
";

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Deliver a UI event.
    Event(UiEvent),
    /// Expand a category directly.
    Expand(String),
    /// Print the equipment catalog.
    List,
    /// Print the page HTML.
    Page,
    /// Print help.
    Help,
    /// End the session.
    Quit,
    /// Blank line.
    Nothing,
}

impl Instruction {
    /// Parse one input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Nothing;
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword {
            "select" if !rest.is_empty() => {
                Self::Event(UiEvent::EquipmentSelected(Some(rest.to_string())))
            }
            "deselect" if rest.is_empty() => Self::Event(UiEvent::EquipmentSelected(None)),
            "fetch" if rest.is_empty() => Self::Event(UiEvent::FetchRequested),
            "say" => Self::Event(UiEvent::CommandSubmitted(rest.to_string())),
            "toggle" if !rest.is_empty() => {
                Self::Event(UiEvent::CategoryToggled(rest.to_string()))
            }
            "expand" if !rest.is_empty() => Self::Expand(rest.to_string()),
            "list" if rest.is_empty() => Self::List,
            "page" if rest.is_empty() => Self::Page,
            "help" if rest.is_empty() => Self::Help,
            "quit" | "exit" if rest.is_empty() => Self::Quit,
            _ => Self::Event(UiEvent::CommandSubmitted(line.to_string())),
        }
    }
}

/// Run a session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run<S, R, W>(
    app: &mut App<S>,
    format: OutputFormat,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    S: EquipmentSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Session started");
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let instruction = Instruction::parse(&line);
        debug!(?instruction, "Session instruction");

        let output = match instruction {
            Instruction::Nothing => continue,
            Instruction::Quit => break,
            Instruction::Help => HELP.to_string(),
            Instruction::List => catalog_text(app),
            Instruction::Page => app.render_page(),
            Instruction::Expand(title) => {
                app.apply(&DeferredAction::ExpandCategory(title));
                display_text(app, format)?
            }
            Instruction::Event(event) => match app.handle(event) {
                Ok(scheduled) => {
                    for item in scheduled {
                        tokio::time::sleep(item.delay).await;
                        app.apply(&item.action);
                    }
                    display_text(app, format)?
                }
                Err(err) => {
                    warn!(%err, "Event rejected");
                    if err.is_unknown_equipment() {
                        format!("{err}\nType 'list' to see the available equipment.\n")
                    } else {
                        format!("{err}\n")
                    }
                }
            },
        };

        writer.write_all(output.as_bytes()).await?;
        writer.flush().await?;
    }

    info!("Session ended");
    Ok(())
}

fn catalog_text<S: EquipmentSource>(app: &App<S>) -> String {
    let mut out = String::new();
    for entry in app.source().catalog() {
        let marker = if app.selected() == Some(entry.id.as_str()) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!("{marker} {:<10} {}\n", entry.id, entry.name));
    }
    out
}

fn display_text<S: EquipmentSource>(app: &App<S>, format: OutputFormat) -> Result<String> {
    let display = app.display();
    let mut out = match display.document() {
        Some(document) => render_document(document, format, app.html())?,
        None => match format {
            OutputFormat::Html => display.render(app.html()),
            OutputFormat::Json => render_document(&Document::default(), format, app.html())?,
            OutputFormat::Text => display.placeholder().to_string(),
        },
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
