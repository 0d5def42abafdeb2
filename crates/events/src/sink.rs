//! Shipment publishing abstraction (mechanics only).
//!
//! A sink is the **transport layer** for committed shipment batches. The engine
//! decides what ships; the sink decides where the record goes.
//!
//! ```text
//! process_order → ShipmentPacker (batches) → ShipmentSink::publish → stdout / buffer / ...
//! ```
//!
//! ## Delivery
//!
//! Records are published synchronously, one call per batch, in batch-commit
//! order. Stock and backorder state are already updated when `publish` runs,
//! so a failed publish is reported to the caller but never rolls anything back.

use std::sync::Arc;

use thiserror::Error;

use crate::record::ShipmentRecord;

/// Errors a sink can report while publishing a record.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write shipment record: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize shipment record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal lock poisoning.
    #[error("sink lock poisoned")]
    Poisoned,
}

/// Destination for committed shipment batches.
///
/// Implementations must be safe to share across threads, even though the
/// engine itself publishes from a single thread.
pub trait ShipmentSink: Send + Sync {
    fn publish(&self, record: ShipmentRecord) -> Result<(), SinkError>;
}

impl<S> ShipmentSink for Arc<S>
where
    S: ShipmentSink + ?Sized,
{
    fn publish(&self, record: ShipmentRecord) -> Result<(), SinkError> {
        (**self).publish(record)
    }
}

impl<S> ShipmentSink for &S
where
    S: ShipmentSink + ?Sized,
{
    fn publish(&self, record: ShipmentRecord) -> Result<(), SinkError> {
        (**self).publish(record)
    }
}
