//! Single-slot, time-bounded cache for the unscoped catalog listing.
//!
//! Only complete entries are ever stored, so a reader either gets the last
//! full listing or nothing. Concurrent misses may each fetch and overwrite
//! the slot; every fetch is idempotent so the last writer wins.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use stockbot_core::types::CatalogItem;

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self { origin: Instant::now(), offset: Mutex::new(Duration::ZERO) }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap_or_else(PoisonError::into_inner) += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    items: Arc<Vec<CatalogItem>>,
    stored_at: Instant,
}

pub struct CatalogCache {
    slot: RwLock<Option<CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl CatalogCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { slot: RwLock::new(None), ttl, clock }
    }

    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(ttl, Arc::new(SystemClock))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached listing, if one exists and is younger than the TTL.
    pub fn get(&self) -> Option<Arc<Vec<CatalogItem>>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        let entry = slot.as_ref()?;
        let age = self.clock.now().saturating_duration_since(entry.stored_at);
        (age < self.ttl).then(|| Arc::clone(&entry.items))
    }

    /// Replace the slot with a fresh listing and hand back the shared copy.
    pub fn put(&self, items: Vec<CatalogItem>) -> Arc<Vec<CatalogItem>> {
        let items = Arc::new(items);
        let entry = CacheEntry { items: Arc::clone(&items), stored_at: self.clock.now() };
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(entry);
        items
    }

    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(n: usize) -> Vec<CatalogItem> {
        (0..n)
            .map(|i| CatalogItem {
                name: format!("item {i}"),
                code: format!("C{i}"),
                stock_quantity: 1,
                price_usd: 1.0,
                price_ars: 1.0,
                brand: String::new(),
                category: String::new(),
                description: None,
                image: None,
            })
            .collect()
    }

    #[test]
    fn entry_expires_after_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = CatalogCache::new(Duration::from_secs(3600), clock.clone());
        assert_eq!(cache.ttl(), Duration::from_secs(3600));
        let stored = cache.put(listing(2));

        clock.advance(Duration::from_secs(3599));
        let hit = cache.get().expect("still fresh");
        assert!(Arc::ptr_eq(&stored, &hit));

        clock.advance(Duration::from_secs(1));
        assert!(cache.get().is_none(), "expired exactly at the TTL");
    }

    #[test]
    fn put_overwrites_and_clear_empties() {
        let cache = CatalogCache::new(Duration::from_secs(60), Arc::new(ManualClock::new()));
        cache.put(listing(1));
        let second = cache.put(listing(3));
        assert!(Arc::ptr_eq(&second, &cache.get().expect("cached")));
        assert_eq!(cache.get().map(|l| l.len()), Some(3));

        cache.clear();
        assert!(cache.get().is_none());
    }

    #[test]
    fn system_clock_entry_is_fresh_right_after_put() {
        let cache = CatalogCache::with_system_clock(Duration::from_secs(60));
        assert_eq!(cache.ttl(), Duration::from_secs(60));
        assert!(cache.get().is_none());
        cache.put(listing(2));
        assert_eq!(cache.get().map(|l| l.len()), Some(2));
    }
}
