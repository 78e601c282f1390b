//! Skilltree renderer
//!
//! Load a catalog dataset, resolve node states against a completed set, lay
//! out the visible nodes and print the render-ready view as JSON.

mod error;
mod options;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use skilltree_layout::{Dataset, GraphView, LayoutConfig, LayoutEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use error::{Error, Result};
use options::Options;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skilltree=info,skilltree_layout=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(std::env::args().skip(1)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(Error::Usage(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run<I>(args: I) -> Result<String>
where
    I: IntoIterator<Item = String>,
{
    let options = Options::parse(args)?;

    let config = match &options.config {
        Some(path) => serde_json::from_str::<LayoutConfig>(&read(path)?)?,
        None => LayoutConfig::default(),
    };
    let engine = LayoutEngine::new(config)?;

    let dataset = Dataset::from_json_str(&read(&options.dataset)?)?;
    tracing::info!(
        categories = dataset.categories.len(),
        nodes = dataset.node_count(),
        completed = options.completed.len(),
        expanded = options.expanded.len(),
        "loaded dataset"
    );

    let view = GraphView::build(&engine, Some(&dataset), &options.expanded, &options.completed)
        .filtered(&options.filter());
    tracing::info!(drawn = view.nodes.len(), progress = view.progress, "view built");

    let output = if options.compact {
        serde_json::to_string(&view)?
    } else {
        serde_json::to_string_pretty(&view)?
    };
    Ok(output)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
