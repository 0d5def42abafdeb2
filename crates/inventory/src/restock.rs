//! Restock application. Retrying affected backorders is the engine's job.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use stockline_core::ProductId;

use crate::ledger::StockLedger;
use crate::order::StockItem;

/// Add restocked quantities to the ledger and return the products touched.
///
/// Unknown products are skipped and not counted as touched. A negative
/// quantity adds nothing but still touches a known product.
pub(crate) fn apply_restock(
    items: &[StockItem],
    ledger: &mut StockLedger,
) -> BTreeSet<ProductId> {
    let mut touched = BTreeSet::new();

    for item in items {
        match ledger.adjust(item.product_id, item.quantity.max(0)) {
            Some(level) => {
                debug!(
                    product_id = %item.product_id,
                    added = item.quantity.max(0),
                    stock = level,
                    "restocked"
                );
                touched.insert(item.product_id);
            }
            None => {
                warn!(
                    product_id = %item.product_id,
                    quantity = item.quantity,
                    "skipping restock of unknown product"
                );
            }
        }
    }

    touched
}
