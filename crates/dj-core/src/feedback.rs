//! Bounded, newest-first feedback list stored under a single key.

use crate::clock::Clock;
use crate::error::{DjError, Result};
use crate::storage::KvStore;
use crate::types::{FeedbackEntry, DEFAULT_SOURCE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Key holding the JSON-encoded feedback list.
pub const FEEDBACK_LIST_KEY: &str = "feedback:list";

/// Message returned to callers that submit no text.
pub const MISSING_TEXT: &str = "Missing text";

/// Seed entries as (source, text, age in ms at seeding time).
const SEED: [(&str, &str, i64); 5] = [
    ("support", "Onboarding is confusing — docs felt scattered.", 86_400_000),
    (
        "github",
        "Wrangler deploy errors didn’t tell me which binding was missing.",
        70_000_000,
    ),
    (
        "discord",
        "Not sure which Workers AI model to use for sentiment vs summary.",
        50_000_000,
    ),
    (
        "email",
        "Once it worked, performance was awesome. Love edge latency.",
        30_000_000,
    ),
    (
        "twitter",
        "KV setup was fast but naming/preview namespaces confused me.",
        10_000_000,
    ),
];

/// Which length `ingest` reports back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountMode {
    /// Length after prepending, before the list is capped. Can exceed the cap by one.
    #[default]
    PreTruncation,
    /// Length actually persisted.
    PostTruncation,
}

/// Configuration for the feedback list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackConfig {
    pub max_entries: usize,
    pub count_mode: CountMode,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            max_entries: 50,
            count_mode: CountMode::PreTruncation,
        }
    }
}

/// Result of a successful ingest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub count: usize,
    pub entry: FeedbackEntry,
}

/// The five entries an empty store is initialised with, timed relative to `now_ms`.
pub fn seed_entries(now_ms: i64) -> Vec<FeedbackEntry> {
    SEED.iter()
        .map(|(source, text, age)| FeedbackEntry::new(*source, *text, now_ms - age))
        .collect()
}

/// Reads and appends to the feedback list.
pub struct FeedbackStore<S: KvStore + ?Sized> {
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
    config: FeedbackConfig,
}

impl<S: KvStore + ?Sized> FeedbackStore<S> {
    pub fn new(storage: Arc<S>, clock: Arc<dyn Clock>, config: FeedbackConfig) -> Self {
        Self {
            storage,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Return the stored list, seeding (and persisting) it on first access.
    pub fn list(&self) -> Result<Vec<FeedbackEntry>> {
        if let Some(raw) = self.storage.get(FEEDBACK_LIST_KEY)? {
            return serde_json::from_str(&raw).map_err(|e| DjError::Corrupt {
                key: FEEDBACK_LIST_KEY.to_string(),
                reason: e.to_string(),
            });
        }

        let seeded = seed_entries(self.clock.now_ms());
        self.storage
            .put(FEEDBACK_LIST_KEY, &serde_json::to_string(&seeded)?)?;
        log::info!("Seeded empty feedback list with {} entries", seeded.len());
        Ok(seeded)
    }

    /// Prepend a new entry and persist the capped list.
    ///
    /// Missing or empty `text` is a validation error and writes nothing.
    /// An absent or empty `source` becomes `"manual"`.
    pub fn ingest(&self, source: Option<&str>, text: Option<&str>) -> Result<IngestOutcome> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Err(DjError::Validation(MISSING_TEXT.to_string())),
        };
        let source = source.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SOURCE);

        let mut list = self.list()?;
        let entry = FeedbackEntry::new(source, text, self.clock.now_ms());
        list.insert(0, entry.clone());
        let pre_truncation = list.len();

        list.truncate(self.config.max_entries);
        self.storage
            .put(FEEDBACK_LIST_KEY, &serde_json::to_string(&list)?)?;

        let count = match self.config.count_mode {
            CountMode::PreTruncation => pre_truncation,
            CountMode::PostTruncation => list.len(),
        };
        log::debug!("Ingested feedback from '{}' (count={})", source, count);

        Ok(IngestOutcome { count, entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryKvStore;
    use proptest::prelude::*;

    const NOW: i64 = 1_760_000_000_000;

    fn make_store(config: FeedbackConfig) -> (FeedbackStore<MemoryKvStore>, Arc<MemoryKvStore>) {
        let kv = Arc::new(MemoryKvStore::new());
        let store = FeedbackStore::new(kv.clone(), Arc::new(ManualClock::new(NOW)), config);
        (store, kv)
    }

    fn stored_list(kv: &MemoryKvStore) -> Vec<FeedbackEntry> {
        serde_json::from_str(&kv.get(FEEDBACK_LIST_KEY).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_first_list_seeds_and_persists() {
        let (store, kv) = make_store(FeedbackConfig::default());

        let list = store.list().unwrap();
        assert_eq!(list, seed_entries(NOW));
        assert_eq!(list.len(), 5);
        assert_eq!(list[0].source, "support");
        assert_eq!(list[0].timestamp, NOW - 86_400_000);
        assert_eq!(list[4].source, "twitter");
        assert_eq!(list[4].timestamp, NOW - 10_000_000);

        assert_eq!(stored_list(&kv), list);
        assert_eq!(kv.write_count(), 1);
    }

    #[test]
    fn test_second_list_does_not_reseed() {
        let (store, kv) = make_store(FeedbackConfig::default());
        store.list().unwrap();
        store.list().unwrap();
        assert_eq!(kv.write_count(), 1);
    }

    #[test]
    fn test_ingest_example_pre_truncation() {
        let (store, kv) = make_store(FeedbackConfig::default());
        store.list().unwrap();

        let outcome = store.ingest(Some("chat"), Some("Search is slow")).unwrap();
        assert_eq!(outcome.count, 6);

        let list = stored_list(&kv);
        assert_eq!(list.len(), 6);
        assert_eq!(list[0], FeedbackEntry::new("chat", "Search is slow", NOW));
    }

    #[test]
    fn test_ingest_defaults_source_to_manual() {
        let (store, kv) = make_store(FeedbackConfig::default());
        store.ingest(None, Some("no source")).unwrap();
        store.ingest(Some(""), Some("empty source")).unwrap();

        let list = stored_list(&kv);
        assert_eq!(list[0].source, "manual");
        assert_eq!(list[0].text, "empty source");
        assert_eq!(list[1].source, "manual");
    }

    #[test]
    fn test_ingest_rejects_missing_or_empty_text() {
        let (store, kv) = make_store(FeedbackConfig::default());

        let err = store.ingest(Some("chat"), None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Missing text");

        let err = store.ingest(Some("chat"), Some("")).unwrap_err();
        assert!(err.is_validation());

        // Not even the seed list was written
        assert_eq!(kv.write_count(), 0);
        assert_eq!(kv.get(FEEDBACK_LIST_KEY).unwrap(), None);
    }

    #[test]
    fn test_rejected_ingest_leaves_existing_list_alone() {
        let (store, kv) = make_store(FeedbackConfig::default());
        store.ingest(None, Some("first")).unwrap();
        let before = kv.get(FEEDBACK_LIST_KEY).unwrap();
        let writes = kv.write_count();

        assert!(store.ingest(None, Some("")).is_err());
        assert_eq!(kv.get(FEEDBACK_LIST_KEY).unwrap(), before);
        assert_eq!(kv.write_count(), writes);
    }

    #[test]
    fn test_count_modes_at_the_cap() {
        for (mode, expected) in [(CountMode::PreTruncation, 51), (CountMode::PostTruncation, 50)] {
            let (store, kv) = make_store(FeedbackConfig {
                max_entries: 50,
                count_mode: mode,
            });
            let mut last = 0;
            for i in 0..46 {
                last = store.ingest(None, Some(format!("item {}", i).as_str())).unwrap().count;
            }
            // 5 seeds + 45 ingests = 50, the 46th overflows
            assert_eq!(last, expected, "{:?}", mode);
            assert_eq!(stored_list(&kv).len(), 50);
        }
    }

    #[test]
    fn test_count_modes_below_the_cap_agree() {
        for mode in [CountMode::PreTruncation, CountMode::PostTruncation] {
            let (store, _kv) = make_store(FeedbackConfig {
                max_entries: 50,
                count_mode: mode,
            });
            assert_eq!(store.ingest(None, Some("x")).unwrap().count, 6);
        }
    }

    #[test]
    fn test_truncation_drops_oldest() {
        let (store, kv) = make_store(FeedbackConfig {
            max_entries: 3,
            count_mode: CountMode::PostTruncation,
        });
        store.ingest(Some("a"), Some("one")).unwrap();
        store.ingest(Some("b"), Some("two")).unwrap();

        let texts: Vec<String> = stored_list(&kv).into_iter().map(|e| e.text).collect();
        assert_eq!(
            texts,
            vec![
                "two".to_string(),
                "one".to_string(),
                "Onboarding is confusing — docs felt scattered.".to_string(),
            ]
        );
    }

    #[test]
    fn test_corrupt_list_is_reported() {
        let (store, kv) = make_store(FeedbackConfig::default());
        kv.put(FEEDBACK_LIST_KEY, "not json").unwrap();
        assert!(matches!(store.list(), Err(DjError::Corrupt { .. })));
    }

    proptest! {
        #[test]
        fn prop_ingest_grows_to_cap_with_newest_first(
            texts in proptest::collection::vec("[a-z]{1,12}", 1..70)
        ) {
            let (store, kv) = make_store(FeedbackConfig::default());
            let mut previous = store.list().unwrap().len();

            for text in &texts {
                store.ingest(Some("prop"), Some(text.as_str())).unwrap();
                let list = stored_list(&kv);
                prop_assert_eq!(list.len(), (previous + 1).min(50));
                prop_assert_eq!(&list[0].text, text);
                prop_assert_eq!(list[0].source.as_str(), "prop");
                previous = list.len();
            }
        }
    }
}
