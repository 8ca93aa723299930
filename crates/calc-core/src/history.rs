//! # Calculation History
//!
//! Bounded, in-memory log of successful calculations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  push ──► [ oldest, ..., newest ]  (capacity 10)                        │
//! │                 │                                                       │
//! │                 └──► evicted when an 11th entry arrives (FIFO)          │
//! │                                                                         │
//! │  Rendering walks newest → oldest: "7 + 3 = 10"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::display::format_number;
use crate::MAX_HISTORY_ENTRIES;

/// One completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Expression text, e.g. `7 + 3` or `√16`.
    pub expression: String,

    /// Value returned by the service.
    pub result: f64,

    /// When the result was recorded.
    #[ts(as = "String")]
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        HistoryEntry {
            expression: expression.into(),
            result,
            recorded_at: Utc::now(),
        }
    }

    /// Display line, e.g. `2 ^ 10 = 1024`.
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.result))
    }
}

/// The history log.
///
/// ## Invariants
/// - `len() <= capacity()`
/// - Entries are kept oldest first; the oldest is evicted on overflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        History::with_capacity(MAX_HISTORY_ENTRIES)
    }
}

impl History {
    /// Creates an empty log holding at most `capacity` entries.
    ///
    /// The capacity is clamped to `1..=MAX_HISTORY_ENTRIES`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_HISTORY_ENTRIES);
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a calculation, returning the evicted entry if the log was full.
    pub fn record(&mut self, expression: impl Into<String>, result: f64) -> Option<HistoryEntry> {
        self.push(HistoryEntry::new(expression, result))
    }

    /// Appends an entry, returning the evicted entry if the log was full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries, newest first (display order).
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().rev()
    }

    /// Entries, oldest first (insertion order).
    pub fn oldest_first(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Rendered lines, newest first.
    pub fn lines(&self) -> Vec<String> {
        self.newest_first().map(HistoryEntry::line).collect()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
