use chrono::{Local, NaiveTime};
use std::collections::VecDeque;

use crate::constants::{LOG_KEEP_LINES, LOG_MAX_LINES};

/// Timestamped lines shown in the side panel.
#[derive(Debug, Default)]
pub struct EventLog {
    lines: VecDeque<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl AsRef<str>) {
        self.push_at(Local::now().time(), message);
    }

    pub fn push_at(&mut self, time: NaiveTime, message: impl AsRef<str>) {
        self.lines
            .push_back(format!("[{}] {}", time.format("%H:%M:%S"), message.as_ref()));

        if self.lines.len() > LOG_MAX_LINES {
            let excess = self.lines.len() - LOG_KEEP_LINES;
            self.lines.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[cfg(test)]
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.lines.iter().map(String::as_str)
    }

    /// The newest `count` lines, oldest first.
    pub fn tail(&self, count: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(skip).map(String::as_str)
    }
}
