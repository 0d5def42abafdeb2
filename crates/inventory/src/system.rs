//! The inventory engine: order processing, restock coordination and shipment
//! emission on top of the catalog, ledger and backorder registry.

use tracing::{debug, error, info};

use stockline_core::{DomainResult, OrderId, ProductId};
use stockline_events::{ShipmentRecord, ShipmentSink};

use crate::backorder::BackorderRegistry;
use crate::catalog::{Catalog, ProductInfo, ProductSnapshot};
use crate::config::EngineConfig;
use crate::ledger::StockLedger;
use crate::order::{Order, OrderItem, StockItem};
use crate::packer::ShipmentPacker;
use crate::processor::allocate;
use crate::restock::apply_restock;

/// Single-writer inventory engine.
///
/// All operations are synchronous. Callers sharing one engine between threads
/// must serialise `process_order` / `process_restock` themselves.
#[derive(Debug)]
pub struct InventorySystem<S> {
    catalog: Catalog,
    ledger: StockLedger,
    backorders: BackorderRegistry,
    packer: ShipmentPacker,
    sink: S,
}

impl<S: ShipmentSink> InventorySystem<S> {
    /// Build an engine with the default configuration (1800g batches, splitting).
    pub fn new(products: impl IntoIterator<Item = ProductInfo>, sink: S) -> DomainResult<Self> {
        Self::with_config(products, EngineConfig::default(), sink)
    }

    /// Build an engine; every catalog product starts with zero stock.
    pub fn with_config(
        products: impl IntoIterator<Item = ProductInfo>,
        config: EngineConfig,
        sink: S,
    ) -> DomainResult<Self> {
        config.validate()?;
        let catalog = Catalog::new(products, config.max_batch_mass_g)?;

        let mut ledger = StockLedger::new();
        for product in catalog.iter() {
            ledger.register(product.product_id);
        }

        Ok(Self {
            catalog,
            ledger,
            backorders: BackorderRegistry::new(),
            packer: ShipmentPacker::from_config(&config),
            sink,
        })
    }

    pub fn get_product_info(&self, product_id: ProductId) -> Option<ProductSnapshot> {
        self.ledger.info(&self.catalog, product_id)
    }

    /// Allocate what stock allows, record the rest as owed, ship the allocation.
    ///
    /// The backorder entry for `order.order_id` is replaced by what this pass
    /// leaves owed (or removed when nothing is owed); it is never merged with
    /// an earlier entry.
    pub fn process_order(&mut self, order: &Order) {
        let outcome = allocate(
            order.order_id,
            &order.requested,
            &self.catalog,
            &mut self.ledger,
        );

        debug!(
            order_id = %order.order_id,
            allocated_lines = outcome.allocated.len(),
            owed_lines = outcome.owed.len(),
            "order allocated"
        );

        let owed_lines = outcome.owed.len();
        let previous = self.backorders.replace(order.order_id, outcome.owed);
        match (previous.is_some(), owed_lines > 0) {
            (_, true) => info!(order_id = %order.order_id, owed_lines, "backorder recorded"),
            (true, false) => info!(order_id = %order.order_id, "backorder cleared"),
            (false, false) => {}
        }

        for batch in self.packer.pack(&outcome.allocated) {
            self.emit(ShipmentRecord::new(order.order_id, batch.items));
        }
    }

    /// Add stock, then retry every backordered order that owes a restocked product.
    ///
    /// Retries run against a snapshot taken after the stock update and before
    /// any retry, so each affected order is re-processed exactly once with the
    /// items it owed at that point.
    pub fn process_restock(&mut self, items: &[StockItem]) {
        let touched = apply_restock(items, &mut self.ledger);
        if touched.is_empty() {
            return;
        }

        let retries = self.backorders.snapshot_touching(&touched);
        if !retries.is_empty() {
            info!(
                products = touched.len(),
                orders = retries.len(),
                "retrying backorders after restock"
            );
        }

        for order in &retries {
            self.process_order(order);
        }
    }

    /// Items still owed for `order_id`, if any.
    pub fn backorder(&self, order_id: OrderId) -> Option<&[OrderItem]> {
        self.backorders.get(order_id)
    }

    pub fn backorders(&self) -> &BackorderRegistry {
        &self.backorders
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn emit(&self, record: ShipmentRecord) {
        let order_id = record.order_id;
        if let Err(err) = self.sink.publish(record) {
            error!(order_id = %order_id, error = %err, "failed to publish shipment record");
        }
    }
}
