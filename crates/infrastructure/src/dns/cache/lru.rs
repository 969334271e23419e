use super::ordered_list::{NodeId, OrderedList};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Fixed capacity key/value store evicting the least recently used entry.
///
/// The recency order lives in an [`OrderedList`]: the head is the most
/// recently touched entry, the tail the next one to be evicted.
pub struct BoundedLru<K, V> {
    order: OrderedList<(K, V)>,
    index: FxHashMap<K, NodeId>,
    capacity: NonZeroUsize,
}

impl<K, V> BoundedLru<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            order: OrderedList::with_capacity(capacity.get()),
            index: FxHashMap::with_capacity_and_hasher(capacity.get(), Default::default()),
            capacity,
        }
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero: such a cache could never hold an entry.
    pub fn with_capacity(capacity: usize) -> Self {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Self::new(capacity),
            None => panic!("BoundedLru capacity must be greater than zero"),
        }
    }

    /// Insert `key`, or touch it if already present.
    ///
    /// When `key` is present it becomes the most recently used entry and its
    /// stored value is returned unchanged; `value` is dropped. Otherwise the
    /// new entry is inserted at the head, evicting the tail first when the
    /// cache is full. The second element reports whether an eviction happened.
    pub fn add(&mut self, key: K, value: V) -> (Option<&V>, bool) {
        if let Some(&node) = self.index.get(&key) {
            self.order.move_to_front(node);
            return (self.order.get(node).map(|(_, v)| v), false);
        }

        let mut evicted = false;
        if self.index.len() >= self.capacity.get() {
            if let Some((oldest, _)) = self.order.pop_back() {
                self.index.remove(&oldest);
                evicted = true;
            }
        }

        let node = self.order.push_front((key.clone(), value));
        self.index.insert(key, node);
        (None, evicted)
    }

    /// Read without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let node = self.index.get(key)?;
        self.order.get(*node).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Most recently used first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().map(|(_, (k, v))| (k, v))
    }
}
