//! Order allocation: split each requested line into "ship now" and "still owed".

use tracing::warn;

use stockline_core::OrderId;

use crate::catalog::Catalog;
use crate::ledger::StockLedger;
use crate::order::OrderItem;
use crate::packer::Allocation;

#[derive(Debug, Default, PartialEq)]
pub(crate) struct AllocationOutcome {
    pub allocated: Vec<Allocation>,
    pub owed: Vec<OrderItem>,
}

/// Allocate `requested` against the ledger, line by line in the given order.
///
/// Stock is decremented as lines are allocated, so a product requested twice
/// in the same order sees the level left by the earlier line. Unknown products
/// read as zero stock and end up fully owed.
pub(crate) fn allocate(
    order_id: OrderId,
    requested: &[OrderItem],
    catalog: &Catalog,
    ledger: &mut StockLedger,
) -> AllocationOutcome {
    let mut outcome = AllocationOutcome::default();

    for line in requested {
        if line.quantity <= 0 {
            warn!(
                order_id = %order_id,
                product_id = %line.product_id,
                quantity = line.quantity,
                "skipping order line with non-positive quantity"
            );
            continue;
        }

        let wanted = line.quantity.unsigned_abs();
        let product = catalog.get(line.product_id);
        let take = match product {
            Some(_) => wanted.min(ledger.available(line.product_id)),
            None => 0,
        };

        if let Some(product) = product.filter(|_| take > 0) {
            ledger.adjust(line.product_id, -(take as i64));
            outcome.allocated.push(Allocation {
                product_id: line.product_id,
                quantity: take,
                unit_mass_g: product.mass_g,
            });
        }

        let shortfall = wanted - take;
        if shortfall > 0 {
            outcome
                .owed
                .push(OrderItem::new(line.product_id, shortfall as i64));
        }
    }

    outcome
}
