use serde::{Deserialize, Serialize};

use stockline_core::{OrderId, ProductId};

/// Requested (or still owed) quantity of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl OrderItem {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// An order as submitted by the caller. `order_id` may repeat; a repeat
/// submission replaces whatever is still owed under that id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub requested: Vec<OrderItem>,
}

impl Order {
    pub fn new(order_id: OrderId, requested: Vec<OrderItem>) -> Self {
        Self {
            order_id,
            requested,
        }
    }
}

/// One line of a restock batch. Negative quantities contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl StockItem {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}
