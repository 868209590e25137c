//! Commands of the `linklists` tool, kept out of `main` so they can be
//! driven against any service.

use anyhow::{Context, Result};
use clap::Subcommand;
use linklists_engine::{ImportDocument, LinkListService};
use linklists_types::{Langcode, LinkListId};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a link list from a JSON file
    Import {
        /// Path to the import document
        file: PathBuf,
    },
    /// List stored link lists
    List {
        /// Include lists marked local
        #[arg(long)]
        allow_local: bool,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Render a link list as text
    Render {
        id: LinkListId,
        /// Language to render in; defaults to the list's base language
        #[arg(short, long)]
        lang: Option<Langcode>,
    },
    /// Delete a link list and its revisions
    Delete { id: LinkListId },
}

/// One line of `list` output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListEntry {
    pub id: LinkListId,
    pub bundle: String,
    pub label: String,
    pub local: bool,
}

/// Runs `command` and returns what should be printed.
pub fn execute(service: &LinkListService, command: &Command) -> Result<String> {
    match command {
        Command::Import { file } => {
            let contents = fs::read_to_string(file)
                .with_context(|| format!("Failed to read import file {}", file.display()))?;
            let document = ImportDocument::from_json(&contents)
                .with_context(|| format!("Failed to parse import file {}", file.display()))?;
            let list = service.import(document).context("Import failed")?;
            info!(link_list_id = %list.id(), "Imported {:?}", file);
            Ok(format!("{}\n", list.id()))
        }
        Command::List { allow_local, json } => {
            let lists = service
                .list(*allow_local)
                .context("Failed to list link lists")?;
            let mut out = String::new();
            for list in lists {
                let entry = ListEntry {
                    id: list.id(),
                    bundle: list.bundle().to_string(),
                    label: list.label().to_string(),
                    local: list.local().is_local(),
                };
                if *json {
                    writeln!(out, "{}", serde_json::to_string(&entry)?)?;
                } else {
                    let marker = if entry.local { " (local)" } else { "" };
                    writeln!(out, "{}  {:<10} {}{}", entry.id, entry.bundle, entry.label, marker)?;
                }
            }
            Ok(out)
        }
        Command::Render { id, lang } => {
            let output = service
                .render(*id, lang.as_ref())
                .with_context(|| format!("Failed to render link list {id}"))?;
            Ok(output.to_string())
        }
        Command::Delete { id } => {
            service
                .delete(*id)
                .with_context(|| format!("Failed to delete link list {id}"))?;
            Ok(format!("Deleted {id}\n"))
        }
    }
}
