//! Stock levels per registered product.

use std::collections::HashMap;

use stockline_core::ProductId;

use crate::catalog::{Catalog, ProductSnapshot};

/// Current available quantity per product.
///
/// Levels are unsigned, so stock is never observable as negative. Unknown
/// products have no entry at all, which is distinct from a zero level.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    levels: HashMap<ProductId, u64>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `product_id` with a zero level (resets an existing level).
    pub fn register(&mut self, product_id: ProductId) {
        self.levels.insert(product_id, 0);
    }

    /// Available quantity; 0 for unknown products.
    pub fn available(&self, product_id: ProductId) -> u64 {
        self.level(product_id).unwrap_or(0)
    }

    /// Level of a registered product, `None` if unknown.
    pub fn level(&self, product_id: ProductId) -> Option<u64> {
        self.levels.get(&product_id).copied()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.levels.contains_key(&product_id)
    }

    /// Apply `delta`, flooring the result at zero.
    ///
    /// Returns the new level, or `None` (and changes nothing) when the product
    /// is unknown.
    pub fn adjust(&mut self, product_id: ProductId, delta: i64) -> Option<u64> {
        let level = self.levels.get_mut(&product_id)?;
        *level = if delta >= 0 {
            level.saturating_add(delta.unsigned_abs())
        } else {
            level.saturating_sub(delta.unsigned_abs())
        };
        Some(*level)
    }

    /// Catalog entry joined with its current level.
    pub fn info(&self, catalog: &Catalog, product_id: ProductId) -> Option<ProductSnapshot> {
        let product = catalog.get(product_id)?;
        let stock = self.level(product_id)?;
        Some(ProductSnapshot {
            product_id,
            product_name: product.product_name.clone(),
            mass_g: product.mass_g,
            stock,
        })
    }
}
