use super::cache::{CacheDrainer, CacheEvent, CacheMetrics, DnsCache, DrainTick};
use crate::timer::TimerWheel;
use emudns_application::ports::{DnsCachePort, TimerFacility};
use emudns_domain::{CacheRecord, Config, DomainError, RecordClass, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Everything the session's timer wheel can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Cache(CacheEvent),
    Drain(DrainTick),
}

impl From<CacheEvent> for SessionEvent {
    fn from(event: CacheEvent) -> Self {
        SessionEvent::Cache(event)
    }
}

impl From<DrainTick> for SessionEvent {
    fn from(tick: DrainTick) -> Self {
        SessionEvent::Drain(tick)
    }
}

/// A resolution cache bound to its own timer wheel.
///
/// The owner calls [`tick`](CacheSession::tick) once per tick duration;
/// every timer that comes due is dispatched to the cache or the drainer
/// before `tick` returns.
pub struct CacheSession {
    wheel: TimerWheel<SessionEvent>,
    cache: DnsCache,
    drainer: Option<CacheDrainer>,
    drain_threshold: usize,
}

impl CacheSession {
    pub fn new(wheel: TimerWheel<SessionEvent>, cache: DnsCache, drain_threshold: usize) -> Self {
        Self {
            wheel,
            cache,
            drainer: None,
            drain_threshold,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TimerWheel::from_config(&config.timer),
            DnsCache::with_flush_threshold(config.cache.flush_threshold),
            config.cache.drain_threshold,
        )
    }

    /// Advance the wheel by one tick and dispatch what fired.
    /// Returns the number of events handled.
    pub fn tick(&mut self) -> usize {
        let fired = self.wheel.advance();
        let count = fired.len();

        for event in fired {
            match event {
                SessionEvent::Cache(event) => self.cache.on_event(&mut self.wheel, event),
                SessionEvent::Drain(DrainTick) => {
                    if let Some(drainer) = self.drainer.as_mut() {
                        drainer.on_tick(&mut self.cache, &mut self.wheel);
                    }
                }
            }
        }

        count
    }

    /// Begin emptying the cache. Calling it again while a drain is in
    /// progress does nothing.
    pub fn start_drain(&mut self) {
        if self.is_draining() {
            return;
        }
        self.drainer = Some(CacheDrainer::start(
            &mut self.cache,
            &mut self.wheel,
            self.drain_threshold,
        ));
    }

    pub fn is_draining(&self) -> bool {
        self.drainer.as_ref().is_some_and(CacheDrainer::is_active)
    }

    /// Ticks used by the last drain, if one was started.
    pub fn drain_ticks(&self) -> Option<u64> {
        self.drainer.as_ref().map(CacheDrainer::ticks)
    }

    /// Stop an in-progress drain, leaving the remaining entries in place.
    pub fn cancel_drain(&mut self) {
        if let Some(drainer) = self.drainer.as_mut() {
            drainer.cancel(&mut self.wheel);
            debug!(remaining = self.cache.len(), "Cache drain cancelled");
        }
    }

    pub fn cache(&self) -> &DnsCache {
        &self.cache
    }

    pub fn wheel(&self) -> &TimerWheel<SessionEvent> {
        &self.wheel
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        self.cache.metrics()
    }

    pub fn now_secs(&self) -> f64 {
        self.wheel.ticks_in_sec()
    }
}

impl DnsCachePort for CacheSession {
    fn add_entry(
        &mut self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        answer: &str,
    ) {
        self.cache
            .add_entry(&mut self.wheel, name, record_type, class, ttl, answer);
    }

    fn remove_record(
        &mut self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        answer: &str,
    ) -> bool {
        let fingerprint = self.cache.fingerprint_of(name, record_type, class, answer);
        self.cache.remove_entry(&mut self.wheel, &fingerprint)
    }

    fn flush(&mut self) {
        self.cache.flush(&mut self.wheel);
    }

    fn iter_reset(&mut self) -> bool {
        self.cache.iter_reset()
    }

    fn iter_is_stopped(&self) -> bool {
        self.cache.iter_is_stopped()
    }

    fn get_next(&mut self, count: usize) -> Result<Vec<CacheRecord>, DomainError> {
        self.cache.get_next(&self.wheel, count)
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}
