//! In-memory shipment sink for tests/dev.

use std::sync::Mutex;

use stockline_core::OrderId;

use crate::record::ShipmentRecord;
use crate::sink::{ShipmentSink, SinkError};

/// Keeps every published record, in publish order.
///
/// - No IO
/// - Readers get clones; the buffer stays intact until `clear`
#[derive(Debug, Default)]
pub struct InMemorySink {
    records: Mutex<Vec<ShipmentRecord>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ShipmentRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Records published for one order, in publish order.
    pub fn records_for(&self, order_id: OrderId) -> Vec<ShipmentRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.order_id == order_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl ShipmentSink for InMemorySink {
    fn publish(&self, record: ShipmentRecord) -> Result<(), SinkError> {
        let mut records = self.records.lock().map_err(|_| SinkError::Poisoned)?;
        records.push(record);
        Ok(())
    }
}
