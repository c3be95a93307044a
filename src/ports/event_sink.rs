//! Event sink port - durable destination for brain-log lines

use crate::Result;

/// Append-only destination for timestamped reasoning events.
///
/// Sinks never rewrite earlier lines. The display buffer is kept separately
/// by [`crate::event_log::EventLog`], so a sink only deals with storage.
pub trait EventSink {
    /// Append one already-formatted line.
    fn append(&mut self, line: &str) -> Result<()>;
}

/// Collects lines in memory; handy for tests and headless runs.
impl EventSink for Vec<String> {
    fn append(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
