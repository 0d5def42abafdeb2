//! JSON-lines sink: one serialised record per line.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use crate::record::ShipmentRecord;
use crate::sink::{ShipmentSink, SinkError};

/// Writes each record as a single JSON line and flushes after every batch.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl JsonLinesSink<Stdout> {
    /// Standard output sink, the default production destination.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|_| SinkError::Poisoned)
    }
}

impl<W> ShipmentSink for JsonLinesSink<W>
where
    W: Write + Send,
{
    fn publish(&self, record: ShipmentRecord) -> Result<(), SinkError> {
        let line = serde_json::to_string(&record)?;
        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}
