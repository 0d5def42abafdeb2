//! Shipment output contract.
//!
//! The inventory engine hands every committed batch to a [`ShipmentSink`] as
//! a [`ShipmentRecord`]. How the record leaves the process (stdout, a queue,
//! a test buffer) is the sink's business.

pub mod in_memory_sink;
pub mod json_lines_sink;
pub mod record;
pub mod sink;

pub use in_memory_sink::InMemorySink;
pub use json_lines_sink::JsonLinesSink;
pub use record::{ShipmentRecord, ShippedItem};
pub use sink::{ShipmentSink, SinkError};
