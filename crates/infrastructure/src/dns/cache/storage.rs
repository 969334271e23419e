use super::entry::CacheEntry;
use super::event::CacheEvent;
use super::fingerprint::Fingerprint;
use super::metrics::CacheMetrics;
use super::ordered_list::{NodeId, OrderedList};
use emudns_application::ports::{TimerFacility, TimerId};
use emudns_domain::{CacheRecord, DomainError, RecordClass, RecordType};
use rustc_hash::FxHashMap;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Stale entries reclaimed per flush tick.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 100;

/// TTL resolution cache.
///
/// Entries are indexed by [`Fingerprint`] and kept in insertion order in an
/// [`OrderedList`]. Each entry owns an expiry timer on the host timer
/// facility; the facility hands back [`CacheEvent`]s which the owner feeds
/// into [`on_event`](DnsCache::on_event).
///
/// `flush` only bumps the epoch. Entries of older epochs are invisible to
/// iteration right away and are physically reclaimed from the head of the
/// list, at most `flush_threshold` per tick. Because the list is in
/// insertion order, every stale entry sits before the first current one.
pub struct DnsCache {
    table: FxHashMap<Fingerprint, NodeId>,
    order: OrderedList<CacheEntry>,
    flush_timer: Option<TimerId>,
    cursor: Option<NodeId>,
    iter_ready: bool,
    epoch: u64,
    flush_threshold: usize,
    metrics: Arc<CacheMetrics>,
}

impl DnsCache {
    pub fn new() -> Self {
        Self::with_flush_threshold(DEFAULT_FLUSH_THRESHOLD)
    }

    pub fn with_flush_threshold(flush_threshold: usize) -> Self {
        Self {
            table: FxHashMap::default(),
            order: OrderedList::new(),
            flush_timer: None,
            cursor: None,
            iter_ready: false,
            epoch: 0,
            flush_threshold: flush_threshold.max(1),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// Number of entries physically held, including stale ones.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&CacheEntry> {
        let node = self.table.get(fingerprint)?;
        self.order.get(*node)
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.table.contains_key(fingerprint)
    }

    /// Fingerprint the record would have if added now.
    pub fn fingerprint_of(
        &self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        answer: &str,
    ) -> Fingerprint {
        Fingerprint::compute(name, record_type, class, answer, self.epoch)
    }

    pub fn add_entry<E, W>(
        &mut self,
        timers: &mut W,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        answer: &str,
    ) -> Fingerprint
    where
        E: From<CacheEvent>,
        W: TimerFacility<E>,
    {
        let fingerprint = self.fingerprint_of(name, record_type, class, answer);

        // Re-adding moves the record to the tail so the list stays chronological.
        if self.take(timers, &fingerprint).is_some() {
            self.metrics.refreshes.fetch_add(1, AtomicOrdering::Relaxed);
        }

        let ticks = timers.duration_to_ticks(Duration::from_secs(u64::from(ttl)));
        let timer = timers.start_ticks(ticks, CacheEvent::Expire(fingerprint).into());

        let node = self.order.push_back(CacheEntry {
            name: name.into(),
            record_type,
            class,
            ttl,
            answer: answer.into(),
            created_secs: timers.ticks_in_sec(),
            epoch: self.epoch,
            timer: Some(timer),
            fingerprint,
        });
        self.table.insert(fingerprint, node);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);

        debug!(
            name = %name,
            record_type = %record_type,
            ttl = ttl,
            answer = %answer,
            epoch = self.epoch,
            cache_size = self.table.len(),
            "Inserted into cache"
        );

        fingerprint
    }

    /// Remove an entry by fingerprint. Absent fingerprints are ignored.
    pub fn remove_entry<E, W>(&mut self, timers: &mut W, fingerprint: &Fingerprint) -> bool
    where
        W: TimerFacility<E>,
    {
        let removed = self.take(timers, fingerprint).is_some();
        if removed {
            self.metrics.removals.fetch_add(1, AtomicOrdering::Relaxed);
        }
        removed
    }

    /// Dispatch a fired timer.
    pub fn on_event<E, W>(&mut self, timers: &mut W, event: CacheEvent)
    where
        E: From<CacheEvent>,
        W: TimerFacility<E>,
    {
        match event {
            CacheEvent::Expire(fingerprint) => {
                if let Some(entry) = self.take(timers, &fingerprint) {
                    self.metrics.expirations.fetch_add(1, AtomicOrdering::Relaxed);
                    debug!(
                        name = %entry.name,
                        record_type = %entry.record_type,
                        answer = %entry.answer,
                        "Cache entry expired"
                    );
                }
            }
            CacheEvent::FlushTick => self.on_flush_tick(timers),
        }
    }

    /// Point the iterator at the first entry.
    ///
    /// Returns `true` when the cache is empty, in which case the iterator
    /// stays stopped.
    pub fn iter_reset(&mut self) -> bool {
        self.cursor = self.order.first();
        self.iter_ready = !self.order.is_empty();
        !self.iter_ready
    }

    pub fn iter_is_stopped(&self) -> bool {
        !self.iter_ready
    }

    /// Walk up to `count` entries from the cursor, returning the ones that
    /// belong to the current epoch.
    ///
    /// Reaching the end stops the iterator; a new [`iter_reset`] is needed
    /// before the next call.
    ///
    /// [`iter_reset`]: DnsCache::iter_reset
    pub fn get_next<E, W>(&mut self, timers: &W, count: usize) -> Result<Vec<CacheRecord>, DomainError>
    where
        W: TimerFacility<E>,
    {
        if !self.iter_ready {
            return Err(DomainError::IteratorNotReady);
        }

        let now = timers.ticks_in_sec();
        let mut records = Vec::with_capacity(count.min(self.order.len()));

        for _ in 0..count {
            let Some(node) = self.cursor else {
                self.iter_ready = false;
                break;
            };
            if let Some(entry) = self.order.get(node) {
                if entry.epoch == self.epoch {
                    records.push(entry.to_record(now));
                }
            }
            self.cursor = self.order.next(node);
        }

        Ok(records)
    }

    /// Invalidate every entry in O(1).
    ///
    /// Stale entries are reclaimed on later ticks by
    /// [`on_flush_tick`](DnsCache::on_flush_tick).
    pub fn flush<E, W>(&mut self, timers: &mut W)
    where
        E: From<CacheEvent>,
        W: TimerFacility<E>,
    {
        self.epoch += 1;
        self.metrics.flushes.fetch_add(1, AtomicOrdering::Relaxed);

        info!(
            epoch = self.epoch,
            cache_size = self.table.len(),
            "Cache flushed"
        );

        if self.is_reclaiming(&*timers) || self.order.is_empty() {
            return;
        }
        self.flush_timer = Some(timers.start_ticks(1, CacheEvent::FlushTick.into()));
    }

    /// Whether a reclamation step is scheduled.
    pub fn is_reclaiming<E, W>(&self, timers: &W) -> bool
    where
        W: TimerFacility<E>,
    {
        self.flush_timer.is_some_and(|timer| timers.is_running(timer))
    }

    /// Reclaim up to `flush_threshold` stale entries from the head of the list.
    pub fn on_flush_tick<E, W>(&mut self, timers: &mut W)
    where
        E: From<CacheEvent>,
        W: TimerFacility<E>,
    {
        self.flush_timer = None;

        let mut reclaimed = 0usize;
        while reclaimed < self.flush_threshold {
            let Some(fingerprint) = self.stale_head() else {
                break;
            };
            self.take(timers, &fingerprint);
            reclaimed += 1;
        }

        self.metrics
            .reclaimed
            .fetch_add(reclaimed as u64, AtomicOrdering::Relaxed);

        if self.stale_head().is_some() {
            self.flush_timer = Some(timers.start_ticks(1, CacheEvent::FlushTick.into()));
            debug!(
                reclaimed,
                cache_size = self.table.len(),
                "Flush reclamation continues next tick"
            );
        } else {
            debug!(
                reclaimed,
                cache_size = self.table.len(),
                epoch = self.epoch,
                "Flush reclamation completed"
            );
        }
    }

    /// Remove up to `limit` entries in index order, regardless of epoch.
    /// Returns how many were removed.
    pub(crate) fn drain_chunk<E, W>(&mut self, timers: &mut W, limit: usize) -> usize
    where
        W: TimerFacility<E>,
    {
        let batch: Vec<Fingerprint> = self.table.keys().take(limit).copied().collect();
        for fingerprint in &batch {
            self.take(timers, fingerprint);
        }

        self.metrics
            .drained
            .fetch_add(batch.len() as u64, AtomicOrdering::Relaxed);
        batch.len()
    }

    fn stale_head(&self) -> Option<Fingerprint> {
        let head = self.order.get(self.order.first()?)?;
        (head.epoch < self.epoch).then_some(head.fingerprint)
    }

    /// Unlink an entry from the index and the list, cancelling its timer.
    /// The iterator cursor is moved off the node before it goes away.
    fn take<E, W>(&mut self, timers: &mut W, fingerprint: &Fingerprint) -> Option<CacheEntry>
    where
        W: TimerFacility<E>,
    {
        let node = self.table.remove(fingerprint)?;

        if self.cursor == Some(node) {
            self.cursor = self.order.next(node);
        }

        let entry = self.order.remove(node)?;
        if let Some(timer) = entry.timer {
            if timers.is_running(timer) {
                timers.stop(timer);
            }
        }
        Some(entry)
    }
}

impl Default for DnsCache {
    fn default() -> Self {
        Self::new()
    }
}
