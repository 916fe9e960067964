//! Edition publisher binary for the Frontpage simulation.
//!
//! Reads an edition input file (catalogs, the previous edition, a saved
//! draft, and layout edits), replays the edits, and prints either the
//! published edition or a preview of its score as JSON on stdout. Logs go
//! to stderr.
//!
//! # Sequence
//!
//! 1. Parse arguments
//! 2. Load configuration from `frontpage-config.yaml`
//! 3. Initialize structured logging (tracing)
//! 4. Read the edition input
//! 5. Replay layout edits
//! 6. Publish (or preview) and print the result

mod error;
mod input;

use std::path::{Path, PathBuf};

use clap::Parser;
use frontpage_core::config::EditorConfig;
use frontpage_core::publish::Publisher;
use frontpage_core::session::EditingSession;
use frontpage_layout::CommandOutcome;
use frontpage_scoring::ContentCatalog;
use frontpage_types::{PlacementEntry, RowId, SlotId};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::input::EditionInput;

/// Command-line arguments for frontpage-engine
#[derive(Parser, Debug)]
#[command(name = "frontpage-engine")]
#[command(about = "Replay front-page edits and publish the edition")]
#[command(version)]
struct Args {
    /// Edition input JSON file
    input: PathBuf,

    /// Configuration file
    #[arg(short, long, default_value = "frontpage-config.yaml", env = "FRONTPAGE_CONFIG")]
    config: PathBuf,

    /// Print the score of the arrangement without publishing it
    #[arg(long)]
    preview: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration or input cannot be loaded, or the
/// edition cannot be published.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args.config)?;
    init_logging(&config.logging.level, args.json_logs);

    info!(
        config = %args.config.display(),
        input = %args.input.display(),
        "frontpage-engine starting"
    );

    let output = run(&args, &config)?;
    println!("{output}");
    Ok(())
}

fn run(args: &Args, config: &EditorConfig) -> Result<String, EngineError> {
    let input = EditionInput::from_file(&args.input)?;
    let catalog = ContentCatalog::new(input.articles, input.ads);
    info!(
        articles = catalog.article_count(),
        ads = catalog.ad_count(),
        commands = input.commands.len(),
        has_previous = input.previous.is_some(),
        "Edition input loaded"
    );

    let mut session = EditingSession::new(catalog, Publisher::from_config(config));
    if let Some(previous) = input.previous {
        session = session.with_previous(previous);
    }
    if let Some(draft) = input.draft {
        session.restore(draft);
    }

    let outcomes = session.apply_all(input.commands.iter().copied());
    for (index, (command, outcome)) in input.commands.iter().zip(&outcomes).enumerate() {
        if *outcome == CommandOutcome::Unchanged {
            warn!(index, command = ?command, "Layout command had no effect");
        }
    }

    if let Some(headline) = lead_headline(&session) {
        info!(headline, "Lead story");
    }

    if args.preview {
        let result = session.preview();
        serde_json::to_string_pretty(&result).map_err(|source| EngineError::Output { source })
    } else {
        let edition = session.publish()?;
        serde_json::to_string_pretty(&edition).map_err(|source| EngineError::Output { source })
    }
}

/// Display text of the lead article, in the variant it is shown with.
fn lead_headline(session: &EditingSession) -> Option<&str> {
    match session.store().get(SlotId::row(RowId::Row1))?.entry {
        PlacementEntry::Article {
            content_id,
            variant,
        } => session
            .catalog()
            .article(content_id)
            .map(|article| article.text.get(variant)),
        PlacementEntry::Ad { .. } => None,
    }
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<EditorConfig, EngineError> {
    if path.exists() {
        Ok(EditorConfig::from_file(path)?)
    } else {
        EditorConfig::parse("").map_err(EngineError::from)
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
