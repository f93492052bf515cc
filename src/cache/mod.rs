use std::time::Duration;

use moka::sync::Cache;

use crate::fetch_meta::MetaRecord;

/// Bounded TTL cache of fetched metadata, keyed by the raw URL string.
///
/// Entries expire a fixed duration after insertion, independent of access.
/// An expired entry is absent on `get` even before moka physically evicts
/// it. Shared across request tasks; get/insert are individually atomic.
pub struct MetaCache {
    entries: Cache<String, MetaRecord>,
}

impl MetaCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Returns `None` on miss or when the entry has outlived the TTL.
    pub fn get(&self, url: &str) -> Option<MetaRecord> {
        self.entries.get(url)
    }

    /// Inserts or overwrites the record for `url`.
    pub fn insert(&self, url: String, record: MetaRecord) {
        self.entries.insert(url, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> MetaRecord {
        MetaRecord {
            title: title.to_string(),
            ..MetaRecord::default()
        }
    }

    #[test]
    fn get_returns_inserted_record() {
        let cache = MetaCache::new(10, Duration::from_secs(60));
        cache.insert("https://example.com".to_string(), record("Example"));

        let hit = cache.get("https://example.com").unwrap();
        assert_eq!(hit.title, "Example");
    }

    #[test]
    fn expired_entries_are_treated_as_absent() {
        let cache = MetaCache::new(10, Duration::from_millis(20));
        cache.insert("https://example.com".to_string(), record("Example"));

        std::thread::sleep(Duration::from_millis(60));

        assert!(cache.get("https://example.com").is_none());
    }

    #[test]
    fn capacity_pressure_evicts_entries() {
        let cache = MetaCache::new(2, Duration::from_secs(60));
        for i in 0..16 {
            cache.insert(format!("https://example.com/{i}"), record("x"));
        }
        cache.entries.run_pending_tasks();

        assert!(cache.entries.entry_count() <= 2);
    }

    #[test]
    fn keys_are_not_canonicalized() {
        let cache = MetaCache::new(10, Duration::from_secs(60));
        cache.insert("https://example.com".to_string(), record("Example"));

        assert!(cache.get("https://example.com/").is_none());
    }
}
