use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;

use stockline_cli::{Config, ScriptSource, load_catalog, replay};
use stockline_events::JsonLinesSink;
use stockline_inventory::InventorySystem;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    stockline_observability::init(config.log_format);

    for (key, value) in &config.rejected {
        tracing::warn!(key, value = %value, "ignoring invalid configuration value; using default");
    }

    let products = load_catalog(&config.catalog_path)?;
    tracing::info!(
        products = products.len(),
        catalog = %config.catalog_path.display(),
        max_batch_mass_g = config.max_batch_mass_g,
        packing = ?config.packing,
        "catalog loaded"
    );

    let mut system =
        InventorySystem::with_config(products, config.engine_config(), JsonLinesSink::stdout())
            .context("invalid catalog or engine configuration")?;

    let summary = match &config.script {
        ScriptSource::Stdin => replay(io::stdin().lock(), &mut system)?,
        ScriptSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            replay(BufReader::new(file), &mut system)?
        }
    };

    tracing::info!(
        orders = summary.orders,
        restocks = summary.restocks,
        lookups = summary.lookups,
        open_backorders = system.backorders().len(),
        "replay complete"
    );

    Ok(())
}
