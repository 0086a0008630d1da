//! canopy-demo - replays the forest and editor scenarios.
//!
//! Usage: `canopy-demo [config.toml|config.json|config.yaml]`

use canopy_core::{
    CanopyConfig, CanopyResult, Forest, History, Originator, SnapshotStore, TextEditor,
};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn load_config() -> CanopyResult<CanopyConfig> {
    match std::env::args().nth(1) {
        Some(path) => CanopyConfig::from_file(path),
        None => Ok(CanopyConfig::from_env()),
    }
}

fn run_forest(config: &CanopyConfig) {
    let mut forest = Forest::with_config(config);
    forest.plant(1, 1, "Oak", "Green", "Rough");
    forest.plant(2, 3, "Pine", "Dark Green", "Smooth");
    // Shares the existing Oak kind
    forest.plant(3, 5, "Oak", "Green", "Rough");

    for line in forest.render() {
        info!("{}", line);
    }

    for (handle, _) in forest.kinds().iter() {
        match forest.kinds().label(handle) {
            Ok(Some(label)) => info!(kind = handle.index(), %label, "Shared tree kind"),
            Ok(None) => {}
            Err(e) => warn!(kind = handle.index(), "Unlabelled tree kind: {}", e),
        }
    }

    let stats = forest.kinds().stats();
    info!(
        trees = forest.trees().len(),
        kinds = forest.kinds().len(),
        hits = stats.hits,
        misses = stats.misses,
        "Forest planted"
    );
}

fn run_editor(config: &CanopyConfig) -> CanopyResult<()> {
    let mut editor = TextEditor::new();
    let mut history = History::with_config(&config.history);

    editor.set_text("Hello, World!");
    history.record(editor.save());

    editor.set_text("This is a new text.");
    history.record(editor.save());

    history.restore_into(0, &mut editor)?;
    info!(text = editor.text(), versions = history.len(), "Undo to first version");

    if let Err(e) = history.get(history.len() as isize) {
        info!(code = e.code().as_str(), "Lookup past the end: {}", e);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("canopy_core=debug".parse()?),
        )
        .init();

    let config = load_config()?;
    info!(?config, "Starting canopy demo");

    run_forest(&config);
    run_editor(&config)?;

    Ok(())
}
