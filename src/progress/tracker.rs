use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::progress::store::KeyValueStore;
use crate::training_engine::{helpers::percentage, models::Selection};

/// Storage key of the progress blob.
pub const PROGRESS_KEY: &str = "zhongwen_progress";

/// Cumulative answer statistics.
///
/// `total_answered == correct_answers + wrong_answers` after every update, and
/// `best_combo` never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    #[serde(rename = "totalWords")]
    pub total_answered: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub best_combo: u32,
    pub sessions_completed: u32,
}

impl Stats {
    /// Rounded share of correct answers, 0 before the first answer.
    pub fn accuracy(&self) -> u32 {
        percentage(self.correct_answers, self.total_answered)
    }

    /// Whether the answer total equals the correct and wrong counts combined.
    pub fn is_consistent(&self) -> bool {
        self.correct_answers.checked_add(self.wrong_answers) == Some(self.total_answered)
    }
}

/// The single durable record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    pub name: String,
    #[serde(rename = "selectedBlocks")]
    pub selection: Selection,
    pub stats: Stats,
}

/// Read-modify-write access to the progress blob.
///
/// Every mutation merges only the field it owns into the stored JSON object,
/// so sibling fields (including ones this crate does not know) survive.
/// Storage failures never reach the caller: reads fall back to the default
/// record and writes become no-ops.
#[derive(Debug)]
pub struct ProgressTracker<S> {
    store: S,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        ProgressTracker { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Current record, or the all-zero default when absent or unreadable.
    ///
    /// Stats whose answer total disagrees with the correct and wrong counts
    /// are treated as corrupt and read as zero; name and selection are kept.
    pub fn load(&self) -> ProgressRecord {
        let blob = self.load_blob();
        let mut record: ProgressRecord = serde_json::from_value(Value::Object(blob)).unwrap_or_else(|e| {
            log::warn!("progress record has unexpected shape, using defaults: {e}");
            ProgressRecord::default()
        });
        if !record.stats.is_consistent() {
            log::warn!("stored stats are inconsistent, using zero stats: {:?}", record.stats);
            record.stats = Stats::default();
        }
        record
    }

    pub fn stats(&self) -> Stats {
        self.load().stats
    }

    pub fn record_answer(&mut self, correct: bool, combo: u32) {
        let mut stats = self.stats();
        // A consistent total bounds both counters, so they cannot overflow here.
        match stats.total_answered.checked_add(1) {
            Some(total) => {
                stats.total_answered = total;
                if correct {
                    stats.correct_answers = stats.correct_answers.saturating_add(1);
                } else {
                    stats.wrong_answers = stats.wrong_answers.saturating_add(1);
                }
            }
            None => log::warn!("answer counters are saturated, answer not counted"),
        }
        stats.best_combo = stats.best_combo.max(combo);
        self.merge("stats", &stats);
    }

    pub fn complete_session(&mut self) {
        let mut stats = self.stats();
        stats.sessions_completed = stats.sessions_completed.saturating_add(1);
        self.merge("stats", &stats);
    }

    pub fn name(&self) -> String {
        self.load().name
    }

    pub fn save_name(&mut self, name: &str) {
        self.merge("name", &name);
    }

    pub fn selection(&self) -> Selection {
        self.load().selection
    }

    pub fn save_selection(&mut self, selection: &Selection) {
        self.merge("selectedBlocks", selection);
    }

    /// Wipe storage and write a fresh all-zero record, keeping the name on request.
    pub fn reset_stats(&mut self, keep_name: bool) {
        let name = if keep_name { self.name() } else { String::new() };
        if let Err(e) = self.store.clear_all() {
            log::warn!("progress reset: clearing storage failed: {e}");
        }
        let record = ProgressRecord { name, ..ProgressRecord::default() };
        match serde_json::to_value(&record) {
            Ok(Value::Object(blob)) => self.write_blob(&blob),
            Ok(_) => {}
            Err(e) => log::warn!("progress reset: cannot encode record: {e}"),
        }
    }

    fn load_blob(&self) -> Map<String, Value> {
        let raw = match self.store.get(PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Map::new(),
            Err(e) => {
                log::warn!("progress storage unavailable, using defaults: {e}");
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(blob)) => blob,
            Ok(_) | Err(_) => {
                log::warn!("stored progress is corrupt, using defaults");
                Map::new()
            }
        }
    }

    fn merge<T: Serialize + ?Sized>(&mut self, field: &str, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("cannot encode progress field {field}: {e}");
                return;
            }
        };
        let mut blob = self.load_blob();
        // A blob that would not decode is replaced wholesale, like an absent one.
        if serde_json::from_value::<ProgressRecord>(Value::Object(blob.clone())).is_err() {
            blob = Map::new();
        }
        blob.insert(field.to_string(), value);
        self.write_blob(&blob);
        log::debug!("progress field {field} updated");
    }

    fn write_blob(&mut self, blob: &Map<String, Value>) {
        let text = match serde_json::to_string(blob) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("cannot encode progress record: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(PROGRESS_KEY, &text) {
            log::warn!("progress not saved: {e}");
        }
    }
}
