use serde::{Deserialize, Serialize};

use stockline_core::{OrderId, ProductId};

/// One product line inside a committed shipment batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippedItem {
    pub product_id: ProductId,
    pub quantity: u64,
}

impl ShippedItem {
    pub fn new(product_id: ProductId, quantity: u64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A committed shipment batch for a single order.
///
/// Serialises to exactly
/// `{"order_id":<int>,"shipped":[{"product_id":<int>,"quantity":<int>},...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub order_id: OrderId,
    pub shipped: Vec<ShippedItem>,
}

impl ShipmentRecord {
    pub fn new(order_id: OrderId, shipped: Vec<ShippedItem>) -> Self {
        Self { order_id, shipped }
    }

    /// Total units shipped for `product_id` in this batch.
    pub fn quantity_of(&self, product_id: ProductId) -> u64 {
        self.shipped
            .iter()
            .filter(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .sum()
    }
}
