//! Tessera CLI
//!
//! Runs the content normalization pipeline over content items stored as JSON
//! (`field -> language -> value`) and prints the derived views.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tessera_core::content::ContentData;
use tessera_search::{document, geo, index, mutate, query};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Derive geo and full-text views from content items", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the text and geo views of one content item
    Extract {
        /// Content item file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Id reported in the output
        #[arg(long, default_value = "content")]
        id: String,
    },
    /// Report the geo parse outcome of every field/language slot
    Validate {
        /// Content item file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Index content items in memory and run a full-text query over them
    Search {
        /// Query, e.g. `hello` or `texts.en:hello`
        #[arg(long)]
        query: String,

        /// Maximum number of hits
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Content item files; each file stem is used as the item id
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Extract { file, id } => {
            let data = read_content(file.as_deref())?;
            let content = document::normalize(&id, &data);
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Command::Validate { file } => {
            let data = read_content(file.as_deref())?;
            for (field, language, value) in data.slots() {
                let (outcome, _) = geo::parse(value);
                let line = json!({
                    "slot": format!("{field}.{language}"),
                    "valid": outcome.is_success(),
                    "message": outcome.message(),
                });
                println!("{line}");
            }
        }
        Command::Search {
            query: query_text,
            limit,
            files,
        } => {
            let index = index::create_index_in_ram();
            let mut writer = index::open_writer(&index)?;

            for file in &files {
                let data = read_content(Some(file))?;
                let id = file
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.display().to_string());
                mutate::upsert_content(&index, &writer, &id, &data)?;
            }
            mutate::commit(&mut writer)?;
            info!(items = files.len(), "content indexed");

            for hit in query::search(&index, &query_text, limit)? {
                println!("{}", json!({ "id": hit.id, "score": hit.score }));
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_content(file: Option<&Path>) -> eyre::Result<ContentData> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("failed to read stdin")?;
            buf
        }
    };

    ContentData::from_json_str(&raw).wrap_err("content item is not a field/language JSON object")
}
