use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

pub mod clipboard;
pub mod comments;
pub mod error;
pub mod formatter;
pub mod highlight;
pub mod language;
pub mod settings;
pub mod source;
pub mod view;

use crate::clipboard::CommandClipboard;
use crate::formatter::PrettierCommand;
use crate::highlight::{Highlighter, MarkupHighlighter, PlainHighlighter};
use crate::settings::Settings;
use crate::view::FormView;

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Plain,
    Markup,
    Json,
}

/// Configuration passed from the CLI layer (main.rs) into the core logic.
#[derive(Debug)]
pub struct Config {
    pub file: Option<PathBuf>,
    pub code: Option<String>,
    pub language: String,
    pub remove_comments: bool,
    pub paste: bool,
    pub copy: bool,
    pub output: OutputMode,
    pub prettier: Option<String>,
    pub settings: Settings,
}

#[derive(serde::Serialize)]
struct FormattedEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    class_name: &'a str,
    content: &'a str,
}

pub fn run_with_config(cfg: Config) -> Result<()> {
    let program = cfg
        .prettier
        .clone()
        .or_else(|| cfg.settings.formatter.command.clone())
        .unwrap_or_else(|| "prettier".to_string());
    let formatter = PrettierCommand::new(program);
    let clipboard = CommandClipboard::from_settings(&cfg.settings.clipboard);

    let mut view = FormView::new();
    view.language = cfg.language.clone();
    view.remove_comments = cfg.remove_comments;

    if let Some(path) = &cfg.file {
        view.select_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    } else if cfg.paste {
        let outcome = view.paste(&clipboard);
        if let Some(msg) = outcome.message() {
            bail!(msg);
        }
    } else if let Some(code) = &cfg.code {
        view.code_input = code.clone();
    } else {
        io::stdin()
            .read_to_string(&mut view.code_input)
            .context("Failed to read code from stdin")?;
    }

    let highlighter: &dyn Highlighter = match cfg.output {
        OutputMode::Markup => &MarkupHighlighter,
        OutputMode::Plain | OutputMode::Json => &PlainHighlighter,
    };

    let shown = view.beautify(&formatter, highlighter).clone();
    let Some(class_name) = shown.class_name.as_deref() else {
        bail!(shown.text);
    };
    log::info!("formatted input as {class_name} with {}", formatter.program());

    match cfg.output {
        OutputMode::Json => {
            let entry = FormattedEntry {
                path: cfg.file.as_ref().map(|p| p.to_string_lossy().replace('\\', "/")),
                class_name,
                content: &shown.text,
            };
            println!("{}", serde_json::to_string(&entry)?);
        }
        OutputMode::Plain | OutputMode::Markup => {
            print!("{}", shown.text);
            // Keep the shell prompt off the last line of output.
            if !shown.text.ends_with('\n') {
                println!();
            }
        }
    }

    if cfg.copy {
        let outcome = view.copy(&clipboard);
        if !outcome.is_success() {
            bail!(outcome.message());
        }
        eprintln!("{}", outcome.message());
    }

    Ok(())
}
