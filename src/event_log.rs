//! The agent's "brain log"
//!
//! Every reasoning step is stamped with the wall-clock time and fanned out to
//! two independent collaborators: an append-only [`EventSink`] and a bounded
//! [`RecentEvents`] buffer that the renderer shows next to the board.

use std::{
    collections::VecDeque,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::ports::EventSink;

/// Number of recent events kept for display.
pub const RECENT_CAPACITY: usize = 8;

/// Fixed-capacity buffer of the newest events; the oldest is evicted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEvents {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecentEvents {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line);
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `HH:MM:SS` (UTC) for a number of seconds since the Unix epoch.
pub fn format_clock(secs_since_epoch: u64) -> String {
    let secs_of_day = secs_since_epoch % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs_of_day / 3600,
        (secs_of_day % 3600) / 60,
        secs_of_day % 60
    )
}

fn clock_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format_clock(secs)
}

/// Single entry point for reasoning events.
pub struct EventLog {
    sink: Option<Box<dyn EventSink>>,
    recent: RecentEvents,
    sink_failed: bool,
}

impl EventLog {
    /// Log to `sink` and keep the newest `capacity` lines for display.
    pub fn new(sink: impl EventSink + 'static, capacity: usize) -> Self {
        Self {
            sink: Some(Box::new(sink)),
            recent: RecentEvents::new(capacity),
            sink_failed: false,
        }
    }

    /// Display buffer only, nothing is written to durable storage.
    pub fn detached(capacity: usize) -> Self {
        Self {
            sink: None,
            recent: RecentEvents::new(capacity),
            sink_failed: false,
        }
    }

    /// Record one event.
    ///
    /// A failing sink is reported once through `log::warn!`; the display
    /// buffer keeps working either way.
    pub fn log_event(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        let entry = format!("[{}] {message}", clock_now());
        log::debug!("{message}");

        let written = match self.sink.as_mut() {
            Some(sink) => sink.append(&entry),
            None => Ok(()),
        };
        match written {
            Err(err) if !self.sink_failed => {
                log::warn!("brain log write failed, continuing without it: {err}");
                self.sink_failed = true;
            }
            _ => {}
        }

        self.recent.push(entry);
    }

    pub fn recent(&self) -> &RecentEvents {
        &self.recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    struct BrokenSink;

    impl EventSink for BrokenSink {
        fn append(&mut self, _line: &str) -> Result<()> {
            Err(Error::Io {
                operation: "append to brain log".to_string(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    #[test]
    fn test_recent_events_evict_oldest() {
        let mut recent = RecentEvents::new(8);
        for i in 0..10 {
            recent.push(format!("event {i}"));
        }
        let lines: Vec<&str> = recent.iter().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "event 2");
        assert_eq!(lines[7], "event 9");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut recent = RecentEvents::new(0);
        recent.push("ignored".to_string());
        assert!(recent.is_empty());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(3_661), "01:01:01");
        assert_eq!(format_clock(86_399), "23:59:59");
        assert_eq!(format_clock(86_400 + 45), "00:00:45");
    }

    #[test]
    fn test_events_are_timestamped_and_buffered() {
        let mut log = EventLog::detached(RECENT_CAPACITY);
        log.log_event("New game started.");

        let line = log.recent().iter().next().unwrap();
        assert!(line.starts_with('['));
        assert_eq!(&line[9..11], "] ");
        assert!(line.ends_with("New game started."));
    }

    #[test]
    fn test_broken_sink_does_not_stop_display() {
        let mut log = EventLog::new(BrokenSink, 4);
        log.log_event("first");
        log.log_event("second");
        assert_eq!(log.recent().len(), 2);
    }
}
