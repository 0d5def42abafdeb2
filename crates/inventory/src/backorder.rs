//! Still-owed items per order.

use std::collections::{BTreeMap, BTreeSet};

use stockline_core::{OrderId, ProductId};

use crate::order::{Order, OrderItem};

/// Order id → items not yet allocated as of the order's last processing pass.
///
/// Entries always hold at least one item; an order that is fully satisfied has
/// no entry. Iteration is in ascending `OrderId` order. Only the engine
/// mutates the registry.
#[derive(Debug, Clone, Default)]
pub struct BackorderRegistry {
    entries: BTreeMap<OrderId, Vec<OrderItem>>,
}

impl BackorderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, order_id: OrderId) -> Option<&[OrderItem]> {
        self.entries.get(&order_id).map(Vec::as_slice)
    }

    pub fn contains(&self, order_id: OrderId) -> bool {
        self.entries.contains_key(&order_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderId, &[OrderItem])> {
        self.entries
            .iter()
            .map(|(order_id, owed)| (*order_id, owed.as_slice()))
    }

    /// Replace the entry for `order_id` with `owed`; an empty `owed` removes it.
    ///
    /// Never merges with what was there before.
    pub(crate) fn replace(
        &mut self,
        order_id: OrderId,
        owed: Vec<OrderItem>,
    ) -> Option<Vec<OrderItem>> {
        if owed.is_empty() {
            self.entries.remove(&order_id)
        } else {
            self.entries.insert(order_id, owed)
        }
    }

    /// Orders owing any of `touched`, as they stand right now.
    ///
    /// The result is detached from the registry so it can drive re-processing
    /// that inserts and removes entries.
    pub(crate) fn snapshot_touching(&self, touched: &BTreeSet<ProductId>) -> Vec<Order> {
        self.entries
            .iter()
            .filter(|(_, owed)| owed.iter().any(|item| touched.contains(&item.product_id)))
            .map(|(order_id, owed)| Order::new(*order_id, owed.clone()))
            .collect()
    }
}
