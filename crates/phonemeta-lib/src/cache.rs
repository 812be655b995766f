//! Bounded, access-ordered response cache.
//!
//! The cache is a hash index from normalized number to a slot in a slab of
//! doubly linked nodes; the link order is the recency order, head being the
//! most recently touched entry. Both hits and writes promote to the head.
//! An insertion that pushes the size above capacity evicts exactly one
//! entry, the tail.
//!
//! One mutex guards the whole structure. Values are handed out as
//! `Arc<MetadataResult>` clones, so a reader can never observe a
//! half-written value and a cached result is never mutated in place; an
//! overwrite replaces the `Arc` wholesale.
//!
//! There is deliberately no single-flight de-duplication: two concurrent
//! misses for the same key may both resolve and both write. Resolution is a
//! pure function of the key, so the writes carry equal values and last
//! write wins.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use crate::metadata::MetadataResult;
use crate::validate::NormalizedNumber;

/// Sentinel slot meaning "no neighbor".
const NIL: usize = usize::MAX;

struct Node {
    key: NormalizedNumber,
    value: Arc<MetadataResult>,
    prev: usize,
    next: usize,
}

/// The unsynchronized LRU structure. Always accessed under the
/// [`ResponseCache`] mutex.
struct LruInner {
    capacity: usize,
    index: HashMap<NormalizedNumber, usize>,
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
}

impl LruInner {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Unlink a slot from the recency list without touching the index.
    fn detach(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = NIL;
    }

    /// Link a detached slot in as the most recently used entry.
    fn push_front(&mut self, slot: usize) {
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }

    fn promote(&mut self, slot: usize) {
        if self.head != slot {
            self.detach(slot);
            self.push_front(slot);
        }
    }

    fn get(&mut self, key: &NormalizedNumber) -> Option<Arc<MetadataResult>> {
        let slot = *self.index.get(key)?;
        self.promote(slot);
        Some(Arc::clone(&self.nodes[slot].value))
    }

    fn put(&mut self, key: NormalizedNumber, value: Arc<MetadataResult>) {
        if let Some(&slot) = self.index.get(&key) {
            self.nodes[slot].value = value;
            self.promote(slot);
            return;
        }

        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Node {
                    key: key.clone(),
                    value,
                    prev: NIL,
                    next: NIL,
                };
                slot
            }
            None => {
                self.nodes.push(Node {
                    key: key.clone(),
                    value,
                    prev: NIL,
                    next: NIL,
                });
                self.nodes.len() - 1
            }
        };
        self.index.insert(key, slot);
        self.push_front(slot);

        if self.index.len() > self.capacity {
            self.evict_tail();
        }
    }

    /// Remove the least recently touched entry.
    fn evict_tail(&mut self) {
        let slot = self.tail;
        debug_assert_ne!(slot, NIL, "evict on empty cache");
        self.detach(slot);
        let key = self.nodes[slot].key.clone();
        self.index.remove(&key);
        self.free.push(slot);
        tracing::debug!(number = %key, "evicted least recently used cache entry");
    }
}

/// Concurrency-safe bounded LRU map from normalized number to resolved
/// metadata, shared by reference across all in-flight requests.
pub struct ResponseCache {
    inner: Mutex<LruInner>,
    capacity: usize,
}

impl ResponseCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruInner::new(capacity.get())),
            capacity: capacity.get(),
        }
    }

    /// Look up a number, promoting the entry on hit.
    pub fn get(&self, key: &NormalizedNumber) -> Option<Arc<MetadataResult>> {
        self.lock().get(key)
    }

    /// Insert or overwrite an entry, promoting it and evicting the oldest
    /// entry if the insert pushed the size over capacity.
    pub fn put(&self, key: NormalizedNumber, value: Arc<MetadataResult>) {
        self.lock().put(key, value);
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.lock().index.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruInner> {
        // A poisoned mutex means a panic mid-update on another thread; the
        // structure is repaired by continuing with the recovered guard
        // rather than taking the whole service down.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::LineType;
    use crate::validate::validate;

    fn key(raw: &str) -> NormalizedNumber {
        validate(raw).unwrap()
    }

    fn value(input: &str) -> Arc<MetadataResult> {
        Arc::new(MetadataResult {
            input: input.to_string(),
            formatted: input.to_string(),
            country: "Testland".to_string(),
            country_code: "+49".to_string(),
            region_code: "DE".to_string(),
            location: String::new(),
            carrier: String::new(),
            line_type: LineType::Unknown,
            time_zones: vec![],
            is_valid: true,
            is_possible: true,
            is_valid_for_region: true,
            is_emergency: false,
        })
    }

    fn cache(capacity: usize) -> ResponseCache {
        ResponseCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn get_on_empty_cache_misses() {
        let c = cache(4);
        assert!(c.get(&key("+14155552671")).is_none());
        assert!(c.is_empty());
    }

    #[test]
    fn put_then_get_round_trips_the_same_allocation() {
        let c = cache(4);
        let v = value("+14155552671");
        c.put(key("+14155552671"), Arc::clone(&v));
        let got = c.get(&key("+14155552671")).unwrap();
        assert!(Arc::ptr_eq(&v, &got));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn insertion_beyond_capacity_evicts_exactly_the_oldest() {
        let c = cache(3);
        c.put(key("+49123456"), value("+49123456"));
        c.put(key("+49123457"), value("+49123457"));
        c.put(key("+49123458"), value("+49123458"));
        c.put(key("+49123459"), value("+49123459"));

        assert_eq!(c.len(), 3);
        assert!(c.get(&key("+49123456")).is_none(), "oldest entry survives");
        for raw in ["+49123457", "+49123458", "+49123459"] {
            assert!(c.get(&key(raw)).is_some(), "{raw} was wrongly evicted");
        }
    }

    #[test]
    fn hit_promotes_entry_out_of_eviction_order() {
        let c = cache(3);
        c.put(key("+49123456"), value("+49123456"));
        c.put(key("+49123457"), value("+49123457"));
        c.put(key("+49123458"), value("+49123458"));

        // Touch the oldest entry, then push one past capacity.
        assert!(c.get(&key("+49123456")).is_some());
        c.put(key("+49123459"), value("+49123459"));

        assert!(c.get(&key("+49123456")).is_some(), "promoted entry evicted");
        assert!(c.get(&key("+49123457")).is_none(), "unpromoted oldest kept");
    }

    #[test]
    fn overwrite_replaces_value_and_promotes_without_growing() {
        let c = cache(2);
        c.put(key("+49123456"), value("old"));
        c.put(key("+49123457"), value("+49123457"));
        c.put(key("+49123456"), value("new"));
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(&key("+49123456")).unwrap().input, "new");

        // The overwrite promoted +49123456, so the next eviction takes
        // +49123457.
        c.put(key("+49123458"), value("+49123458"));
        assert!(c.get(&key("+49123457")).is_none());
        assert!(c.get(&key("+49123456")).is_some());
    }

    #[test]
    fn capacity_one_cache_holds_only_the_latest() {
        let c = cache(1);
        c.put(key("+49123456"), value("+49123456"));
        c.put(key("+49123457"), value("+49123457"));
        assert_eq!(c.len(), 1);
        assert!(c.get(&key("+49123456")).is_none());
        assert!(c.get(&key("+49123457")).is_some());
    }

    #[test]
    fn evicted_slots_are_reused() {
        let c = cache(2);
        for i in 0..100u32 {
            c.put(key(&format!("+4930{:08}", i)), value("x"));
        }
        assert_eq!(c.len(), 2);
        let slabs = c.lock().nodes.len();
        assert!(slabs <= 3, "slab grew to {slabs} slots for a 2-entry cache");
    }

    #[test]
    fn concurrent_mixed_access_keeps_bookkeeping_consistent() {
        use std::sync::Arc as StdArc;
        use std::thread;

        let c = StdArc::new(cache(8));
        let mut handles = Vec::new();
        for t in 0..8u32 {
            let c = StdArc::clone(&c);
            handles.push(thread::spawn(move || {
                for i in 0..500u32 {
                    let raw = format!("+4930{:08}", (t * 500 + i) % 16);
                    let k = key(&raw);
                    if i % 3 == 0 {
                        c.put(k, value(&raw));
                    } else if let Some(v) = c.get(&k) {
                        assert_eq!(v.input, raw);
                    }
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert!(c.len() <= 8);
    }
}
