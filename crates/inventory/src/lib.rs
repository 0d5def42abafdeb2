//! Inventory engine.
//!
//! Tracks per-product stock, allocates orders against it, defers shortfalls as
//! backorders that are retried when restocks arrive, and groups what ships
//! into mass-bounded batches. Deterministic and synchronous; the only side
//! effect is handing committed batches to a [`ShipmentSink`].
//!
//! [`ShipmentSink`]: stockline_events::ShipmentSink

pub mod backorder;
pub mod catalog;
pub mod config;
pub mod ledger;
pub mod order;
pub mod packer;
mod processor;
mod restock;
pub mod system;

pub use backorder::BackorderRegistry;
pub use catalog::{Catalog, ProductInfo, ProductSnapshot};
pub use config::{DEFAULT_MAX_BATCH_MASS_G, EngineConfig, PackingPolicy};
pub use ledger::StockLedger;
pub use order::{Order, OrderItem, StockItem};
pub use packer::{Allocation, ShipmentBatch, ShipmentPacker};
pub use system::InventorySystem;
