use crate::metrics::{ShapeMetrics, ShapeMetricsSnapshot};
use std::collections::{HashMap, VecDeque};
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

type Slot<V> = Arc<Mutex<Option<Arc<V>>>>;

/// Slot map plus key insertion order, kept in sync under one lock.
#[derive(Debug)]
struct Slots<K, V> {
    map: HashMap<K, Slot<V>>,
    order: VecDeque<K>,
}

impl<K, V> Default for Slots<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }
}

impl<K: Eq + Hash, V> Slots<K, V> {
    fn remove(&mut self, key: &K) -> bool {
        if self.map.remove(key).is_none() {
            return false;
        }
        self.order.retain(|k| k != key);
        true
    }
}

/// Content-addressed cache with single-flight builds.
///
/// The outer map lock is only held to look up or insert a key's slot. The
/// build itself runs under the slot's own lock, so concurrent requests for
/// one key wait for a single build while other keys proceed independently.
/// Entries are never mutated in place; stale entries are invalidated.
///
/// A bounded cache evicts its oldest inserted entries once it holds more
/// than `capacity` keys. [`ShapeCache::new`] is unbounded and grows until
/// [`ShapeCache::clear`] or an invalidation.
#[derive(Debug)]
pub struct ShapeCache<K, V> {
    slots: Mutex<Slots<K, V>>,
    capacity: usize,
    metrics: ShapeMetrics,
}

impl<K, V> Default for ShapeCache<K, V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(Slots::default()),
            capacity: usize::MAX,
            metrics: ShapeMetrics::new(),
        }
    }
}

impl<K, V> ShapeCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the cached value for `key`, building it with `build` on a miss.
    ///
    /// A failed build leaves no entry behind so the next request retries.
    pub fn get_or_try_compute<E, F>(&self, key: &K, build: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            match slots.map.get(key) {
                Some(slot) => Arc::clone(slot),
                None => {
                    let slot: Slot<V> = Arc::default();
                    slots.map.insert(key.clone(), Arc::clone(&slot));
                    slots.order.push_back(key.clone());
                    self.evict_overflow(&mut slots);
                    slot
                }
            }
        };

        let mut entry = slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(value) = entry.as_ref() {
            self.metrics.record_hit();
            return Ok(Arc::clone(value));
        }

        self.metrics.record_miss();
        match build() {
            Ok(value) => {
                let value = Arc::new(value);
                *entry = Some(Arc::clone(&value));
                self.metrics.record_build();
                Ok(value)
            }
            Err(err) => {
                drop(entry);
                let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
                // A slot locked by another builder is left alone.
                let unused = slots.map.get(key).is_some_and(|current| {
                    Arc::ptr_eq(current, &slot)
                        && matches!(current.try_lock(), Ok(entry) if entry.is_none())
                });
                if unused {
                    slots.remove(key);
                }
                Err(err)
            }
        }
    }

    /// Drops the oldest entries until the cache is within capacity.
    ///
    /// Builds already running on an evicted slot still finish and return
    /// their value; it is just no longer reachable through the cache.
    fn evict_overflow(&self, slots: &mut Slots<K, V>) {
        let mut evicted = 0;
        while slots.map.len() > self.capacity {
            let Some(oldest) = slots.order.pop_front() else {
                break;
            };
            if slots.map.remove(&oldest).is_some() {
                evicted += 1;
            }
        }
        if evicted > 0 {
            self.metrics.record_evictions(evicted);
            tracing::trace!(evicted, capacity = self.capacity, "Evicted shapes");
        }
    }

    /// Infallible form of [`Self::get_or_try_compute`].
    pub fn get_or_compute<F>(&self, key: &K, build: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_compute(key, || Ok::<_, Infallible>(build())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Returns the value for `key` without building it.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let slot = {
            let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            slots.map.get(key).cloned()
        }?;
        let entry = slot.lock().unwrap_or_else(|e| e.into_inner());
        entry.clone()
    }

    pub fn invalidate(&self, key: &K) -> bool {
        let removed = self
            .slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        if removed {
            self.metrics.record_invalidations(1);
        }
        removed
    }

    /// Drops every entry whose key matches `predicate`. Returns how many were removed.
    pub fn invalidate_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&K) -> bool,
    {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        let before = slots.map.len();
        slots.map.retain(|k, _| !predicate(k));
        let Slots { map, order } = &mut *slots;
        order.retain(|k| map.contains_key(k));
        let removed = before - map.len();
        self.metrics.record_invalidations(removed as u64);
        removed
    }

    pub fn clear(&self) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        self.metrics.record_invalidations(slots.map.len() as u64);
        slots.map.clear();
        slots.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn metrics(&self) -> ShapeMetricsSnapshot {
        self.metrics.snapshot()
    }
}
