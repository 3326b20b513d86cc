//! Flowgen - ICO Commerce Postman collection generator
//!
//! Builds the full app-flow collection from the hard-coded suite tables
//! and writes it to a fixed path. No arguments, no configuration.

use std::path::Path;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output path, relative to the invocation directory.
const OUTPUT_PATH: &str = "backend/ICO_Full_App_Flow.postman_collection.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let collection = flowgen_application::suite::collection();
    tracing::info!(
        folders = collection.item.len(),
        requests = collection.request_count(),
        "assembled collection"
    );

    let target = Path::new(OUTPUT_PATH);
    flowgen_infrastructure::save_json(target, &collection)?;

    println!("Wrote {}", target.display());
    Ok(())
}
