//! `snap2know` - CLI for the equipment reference lookup
//!
//! This binary lists equipment, renders records and command answers, and runs
//! an interactive session that mirrors the select / fetch / speak workflow.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use snap2know::cli::{AskCommand, Cli, Command, ConfigCommand, PageCommand, ShowCommand};
use snap2know::controller::UiEvent;
use snap2know::dataset::EquipmentSource;
use snap2know::projector::project_resolution;
use snap2know::render::{render_document, HtmlRenderer, OutputFormat};
use snap2know::resolver::resolve_selected;
use snap2know::{init_logging, session, App, Config, DataSubset, Error, KnowledgeBase};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::List(list_cmd) => handle_list(&config, list_cmd.json),
        Command::Show(show_cmd) => handle_show(&config, &show_cmd),
        Command::Ask(ask_cmd) => handle_ask(&config, &ask_cmd),
        Command::Page(page_cmd) => handle_page(&config, page_cmd),
        Command::Session(session_cmd) => {
            let format = session_cmd.format.unwrap_or(config.output.format);
            handle_session(&config, format).await
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn load_dataset(config: &Config) -> anyhow::Result<KnowledgeBase> {
    config.load_dataset().context("loading equipment dataset")
}

fn html_renderer(config: &Config) -> HtmlRenderer {
    HtmlRenderer::new(config.display.video_embed_base.clone())
}

fn emit(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing output to {}", path.display())),
        None => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

fn handle_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let kb = load_dataset(config)?;
    let catalog = kb.catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        println!("{:<10}  Name", "ID");
        println!("{:<10}  ----", "--");
        for entry in catalog {
            println!("{:<10}  {}", entry.id, entry.name);
        }
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let kb = load_dataset(config)?;
    let record = kb
        .get(&cmd.equipment)
        .ok_or_else(|| Error::unknown_equipment(&cmd.equipment))?;

    let mut document = snap2know::project(&DataSubset::from(record));
    if cmd.expand_all {
        document.expand_all();
    } else if let Some(title) = config.display.auto_expand() {
        document.expand_category(title);
    }

    let format = cmd.format.unwrap_or(config.output.format);
    let text = render_document(&document, format, &html_renderer(config))?;
    emit(cmd.output.as_deref(), &text)
}

fn handle_ask(config: &Config, cmd: &AskCommand) -> anyhow::Result<()> {
    let kb = load_dataset(config)?;
    let record = match &cmd.equipment {
        Some(id) => Some(kb.get(id).ok_or_else(|| Error::unknown_equipment(id))?),
        None => None,
    };

    let resolution = resolve_selected(record, &cmd.phrase());
    let mut document = project_resolution(&resolution);
    if cmd.expand_all {
        document.expand_all();
    }

    let format = cmd.format.unwrap_or(config.output.format);
    let text = render_document(&document, format, &html_renderer(config))?;
    emit(cmd.output.as_deref(), &text)
}

fn handle_page(config: &Config, cmd: PageCommand) -> anyhow::Result<()> {
    let mut app = App::new(load_dataset(config)?, config.display.clone());

    if let Some(id) = cmd.equipment {
        app.handle(UiEvent::EquipmentSelected(Some(id)))?;
        let scheduled = match cmd.command {
            Some(command) => app.handle(UiEvent::CommandSubmitted(command))?,
            None => app.handle(UiEvent::FetchRequested)?,
        };
        // Nothing is on screen yet, so deferred work can run immediately.
        for item in &scheduled {
            app.apply(&item.action);
        }
    } else if let Some(command) = cmd.command {
        app.handle(UiEvent::CommandSubmitted(command))?;
    }

    emit(cmd.output.as_deref(), &app.render_page())
}

async fn handle_session(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let mut app = App::new(load_dataset(config)?, config.display.clone());
    if format != OutputFormat::Json {
        println!("snap2know interactive session. Type 'help' for commands.");
    }
    let reader = BufReader::new(tokio::io::stdin());
    session::run(&mut app, format, reader, tokio::io::stdout()).await?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Dataset]");
                match &config.dataset.path {
                    Some(path) => println!("  Path:               {}", path.display()),
                    None => println!("  Path:               (embedded)"),
                }
                println!();
                println!("[Display]");
                println!(
                    "  Auto-expand:        {}",
                    config.display.auto_expand().unwrap_or("(disabled)")
                );
                println!(
                    "  Auto-expand delay:  {} ms",
                    config.display.auto_expand_delay_ms
                );
                println!("  Video embed base:   {}", config.display.video_embed_base);
                println!("  Placeholder:        {}", config.display.placeholder);
                println!();
                println!("[Output]");
                println!("  Format:             {}", config.output.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
