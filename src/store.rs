//! In-memory, append-only collection of submissions.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::logging::{debug, info};
use crate::quiz::RatingSet;
use crate::submission::SubmissionRecord;

/// Source of receipt times.
pub type Clock = fn() -> DateTime<Utc>;

/// Format a receipt time as ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T12:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Shared handle to the submission collection.
///
/// Clones share the same records. Records are kept in insertion order for
/// the life of the process; there is no update or delete.
#[derive(Clone)]
pub struct SubmissionStore {
    records: Arc<RwLock<Vec<SubmissionRecord>>>,
    clock: Clock,
}

impl SubmissionStore {
    /// An empty store stamping records with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// An empty store stamping records with `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Stamp `ratings` with the current time, append, and return the stored record.
    pub fn create(&self, ratings: RatingSet) -> SubmissionRecord {
        let record = SubmissionRecord::new(ratings, format_timestamp((self.clock)()));
        // A push cannot leave the vector half-written, so recover from poisoning.
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.push(record.clone());
        info!(timestamp = record.timestamp(), total = records.len(), "stored submission");
        record
    }

    /// All records in the order they were created.
    pub fn list(&self) -> Vec<SubmissionRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        debug!(count = records.len(), "listing submissions");
        records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SubmissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Category, Rating};
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).single().unwrap()
    }

    #[test]
    fn test_create_stamps_and_returns_input() {
        let store = SubmissionStore::with_clock(fixed_clock);
        let ratings = RatingSet::new().with(Category::Health, Rating::new(8).unwrap());

        let record = store.create(ratings);

        assert_eq!(record.ratings(), &ratings);
        assert_eq!(record.timestamp(), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn test_system_clock_timestamp_is_iso8601() {
        let record = SubmissionStore::new().create(RatingSet::new());
        assert!(DateTime::parse_from_rfc3339(record.timestamp()).is_ok());
        assert!(record.timestamp().ends_with('Z'));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = SubmissionStore::new();
        let created: Vec<_> = (1..=10)
            .map(|v| store.create(RatingSet::uniform(Rating::new(v).unwrap())))
            .collect();

        let listed = store.list();

        assert_eq!(listed.len(), 10);
        assert_eq!(listed, created);
    }

    #[test]
    fn test_clones_share_records() {
        let store = SubmissionStore::new();
        let handle = store.clone();
        handle.create(RatingSet::new());

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let store = SubmissionStore::new();
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.create(RatingSet::new());
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(store.len(), 200);
    }
}
