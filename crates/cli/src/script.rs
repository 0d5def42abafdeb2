//! Catalog loading and JSON-lines command replay.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use stockline_core::ProductId;
use stockline_events::ShipmentSink;
use stockline_inventory::{InventorySystem, Order, ProductInfo, StockItem};

/// One line of a command script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScriptCommand {
    Order(Order),
    Restock { items: Vec<StockItem> },
    Info { product_id: ProductId },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub orders: usize,
    pub restocks: usize,
    pub lookups: usize,
}

/// Read a catalog file: a JSON array of `{product_id, product_name, mass_g}`.
pub fn load_catalog(path: &Path) -> Result<Vec<ProductInfo>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let products: Vec<ProductInfo> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    Ok(products)
}

/// Apply every command in `reader` to `system`, in order.
///
/// Blank lines and `#` comments are skipped. The first malformed line stops
/// the replay; commands before it have already been applied.
pub fn replay<R, S>(reader: R, system: &mut InventorySystem<S>) -> Result<ReplaySummary>
where
    R: BufRead,
    S: ShipmentSink,
{
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read script line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command: ScriptCommand = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid command on script line {line_no}"))?;

        match command {
            ScriptCommand::Order(order) => {
                system.process_order(&order);
                summary.orders += 1;
            }
            ScriptCommand::Restock { items } => {
                system.process_restock(&items);
                summary.restocks += 1;
            }
            ScriptCommand::Info { product_id } => {
                match system.get_product_info(product_id) {
                    Some(p) => info!(
                        product_id = %p.product_id,
                        product_name = %p.product_name,
                        mass_g = p.mass_g,
                        stock = p.stock,
                        "product info"
                    ),
                    None => info!(product_id = %product_id, "product not in catalog"),
                }
                summary.lookups += 1;
            }
        }
    }

    Ok(summary)
}
