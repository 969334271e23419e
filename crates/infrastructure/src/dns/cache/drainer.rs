use super::storage::DnsCache;
use emudns_application::ports::{TimerFacility, TimerId};
use tracing::{debug, info};

/// Entries removed per drain tick.
pub const DEFAULT_DRAIN_THRESHOLD: usize = 1000;

/// Payload of the drainer's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainTick;

/// Empties a [`DnsCache`] over several ticks.
///
/// The first chunk is removed by [`start`](CacheDrainer::start); each later
/// [`DrainTick`] removes the next one. Entries go in index order whatever
/// their epoch. Once the cache is empty no further tick is scheduled.
#[derive(Debug)]
pub struct CacheDrainer {
    threshold: usize,
    timer: Option<TimerId>,
    ticks: u64,
}

impl CacheDrainer {
    pub fn start<E, W>(cache: &mut DnsCache, timers: &mut W, threshold: usize) -> Self
    where
        E: From<DrainTick>,
        W: TimerFacility<E>,
    {
        let mut drainer = Self {
            threshold: threshold.max(1),
            timer: None,
            ticks: 0,
        };

        info!(
            cache_size = cache.len(),
            threshold = drainer.threshold,
            "Cache drain started"
        );

        drainer.on_tick(cache, timers);
        drainer
    }

    /// Remove the next chunk and re-arm if anything is left.
    pub fn on_tick<E, W>(&mut self, cache: &mut DnsCache, timers: &mut W)
    where
        E: From<DrainTick>,
        W: TimerFacility<E>,
    {
        self.timer = None;
        self.ticks += 1;

        let removed = cache.drain_chunk(timers, self.threshold);

        if cache.is_empty() {
            info!(ticks = self.ticks, "Cache drain completed");
        } else {
            self.timer = Some(timers.start_ticks(1, DrainTick.into()));
            debug!(
                removed,
                remaining = cache.len(),
                "Cache drain continues next tick"
            );
        }
    }

    /// Whether another chunk is scheduled.
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Chunks processed so far, the one run by `start` included.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn cancel<E, W>(&mut self, timers: &mut W)
    where
        W: TimerFacility<E>,
    {
        if let Some(timer) = self.timer.take() {
            timers.stop(timer);
        }
    }
}
