use std::sync::{Mutex as StdMutex, MutexGuard, PoisonError};
use std::time::Duration;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use crate::config::FeedConfig;
use crate::models::{FeedState, LoadOutcome, Section, Transaction, TransactionFilter};
use crate::services::generator_service::FeedGenerator;
use crate::services::section_service;
use crate::utils::{FeedError, RandomSource, RngSource};

/// Where the controller gets its batches from
#[allow(async_fn_in_trait)]
pub trait TransactionSource {
    /// Fetch up to `count` new transactions. An empty batch means the
    /// source has nothing more to give.
    async fn fetch(&mut self, count: usize) -> Result<Vec<Transaction>, FeedError>;
}

/// Generator-backed source that simulates network latency. Never fails.
pub struct MockTransactionSource<R: RandomSource> {
    generator: FeedGenerator,
    rng: R,
    latency: Duration,
    clock: fn() -> DateTime<Utc>,
}

impl<R: RandomSource> MockTransactionSource<R> {
    pub fn new(rng: R, latency: Duration) -> Self {
        MockTransactionSource {
            generator: FeedGenerator::new(),
            rng,
            latency,
            clock: Utc::now,
        }
    }

    /// Replace the "now" generated dates are anchored on
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}

impl<R: RandomSource> TransactionSource for MockTransactionSource<R> {
    async fn fetch(&mut self, count: usize) -> Result<Vec<Transaction>, FeedError> {
        if !self.latency.is_zero() {
            debug!("Mock source: waiting {}ms", self.latency.as_millis());
            tokio::time::sleep(self.latency).await;
        }

        let now = (self.clock)();
        let batch = self.generator.generate_batch(count, &mut self.rng, now);
        debug!(
            "Mock source: generated {} transactions (next id {})",
            batch.len(),
            self.generator.peek_next_id()
        );
        Ok(batch)
    }
}

struct FeedInner {
    items: Vec<Transaction>,
    state: FeedState,
}

fn lock_inner(inner: &StdMutex<FeedInner>) -> MutexGuard<'_, FeedInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Puts a `Loading` feed back to `Idle` if the load future is dropped
/// before it finishes
struct LoadingGuard<'a> {
    inner: &'a StdMutex<FeedInner>,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = lock_inner(self.inner);
        if inner.state == FeedState::Loading {
            warn!("Load cancelled before completion; feed back to idle");
            inner.state = FeedState::Idle;
        }
    }
}

/// Holds the loaded transactions for one screen session and pages more
/// in on demand, up to `config.max_items`
pub struct FeedController<S: TransactionSource> {
    config: FeedConfig,
    source: Mutex<S>,
    inner: StdMutex<FeedInner>,
}

/// Controller over the mock source, seeded from `config.seed` when set
pub fn mock_feed(config: FeedConfig) -> FeedController<MockTransactionSource<RngSource<StdRng>>> {
    let rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let source = MockTransactionSource::new(rng, config.latency);
    FeedController::new(config, source)
}

impl<S: TransactionSource> FeedController<S> {
    pub fn new(config: FeedConfig, source: S) -> Self {
        FeedController {
            config,
            source: Mutex::new(source),
            inner: StdMutex::new(FeedInner {
                items: Vec::new(),
                state: FeedState::Idle,
            }),
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Load the next page
    ///
    /// No-op while another load is in flight or once the cap is reached.
    /// A failed fetch returns the controller to `Idle` without touching the
    /// held items, so the caller may retry. Dropping the returned future
    /// mid-fetch does the same.
    pub async fn load_more(&self) -> Result<LoadOutcome, FeedError> {
        let take = {
            let mut inner = lock_inner(&self.inner);
            match inner.state {
                FeedState::Loading => {
                    debug!("load_more skipped: load already in flight");
                    return Ok(LoadOutcome::Busy);
                }
                FeedState::Exhausted => return Ok(LoadOutcome::Exhausted),
                FeedState::Idle => {}
            }

            let remaining = self.config.max_items.saturating_sub(inner.items.len());
            if remaining == 0 {
                inner.state = FeedState::Exhausted;
                return Ok(LoadOutcome::Exhausted);
            }

            inner.state = FeedState::Loading;
            remaining.min(self.config.page_size)
        };

        let guard = LoadingGuard {
            inner: &self.inner,
            armed: true,
        };

        debug!("Loading {} more transactions", take);
        let fetched = {
            let mut source = self.source.lock().await;
            source.fetch(take).await
        };

        // no await past this point, so the load can no longer be cancelled
        guard.disarm();
        let mut inner = lock_inner(&self.inner);
        match fetched {
            Ok(mut batch) => {
                batch.truncate(take);
                let added = batch.len();
                inner.items.append(&mut batch);
                let total = inner.items.len();

                inner.state = if added == 0 || total >= self.config.max_items {
                    info!("Feed exhausted at {} transactions", total);
                    FeedState::Exhausted
                } else {
                    FeedState::Idle
                };

                debug!("Loaded {} transactions ({} held)", added, total);
                Ok(LoadOutcome::Loaded { added, total })
            }
            Err(e) => {
                inner.state = FeedState::Idle;
                warn!("Failed to load transactions: {}", e);
                Err(e)
            }
        }
    }

    /// Initial load when the screen mounts; does nothing if items are already held
    pub async fn on_mount(&self) -> Result<Option<LoadOutcome>, FeedError> {
        if !self.is_empty().await {
            return Ok(None);
        }
        self.load_more().await.map(Some)
    }

    /// The list scrolled near its end
    pub async fn on_end_reached(&self) -> Result<LoadOutcome, FeedError> {
        self.load_more().await
    }

    pub async fn state(&self) -> FeedState {
        lock_inner(&self.inner).state
    }

    pub async fn has_more(&self) -> bool {
        self.state().await != FeedState::Exhausted
    }

    pub async fn len(&self) -> usize {
        lock_inner(&self.inner).items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Snapshot of the held transactions in load order
    pub async fn items(&self) -> Vec<Transaction> {
        lock_inner(&self.inner).items.clone()
    }

    pub async fn sections(&self) -> Vec<Section> {
        let inner = lock_inner(&self.inner);
        section_service::group_by_month(&inner.items)
    }

    pub async fn sections_filtered(&self, filter: &TransactionFilter) -> Vec<Section> {
        let inner = lock_inner(&self.inner);
        section_service::group_filtered(&inner.items, filter)
    }

    /// Look up a held transaction by id
    pub async fn find(&self, id: &str) -> Result<Transaction, FeedError> {
        let inner = lock_inner(&self.inner);
        inner
            .items
            .iter()
            .find(|tx| tx.id == id)
            .cloned()
            .ok_or_else(|| FeedError::UnknownTransaction(id.to_string()))
    }
}
