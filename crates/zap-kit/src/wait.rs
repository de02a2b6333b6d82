//! Interned wait tokens keyed by duration.
//!
//! Schedulers and scripted sequences tend to wait for the same handful
//! of durations over and over; interning the token means one shared
//! allocation per distinct duration instead of one per wait. The cache
//! is process-wide, lazily populated, and never evicted, which is the
//! right trade for a small read-mostly set of durations and would be the
//! wrong one for unbounded key sets.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

/// A reusable wait token. Two tokens for the same duration are
/// interchangeable, so the cache hands out one shared instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wait {
    duration: Duration,
}

impl Wait {
    /// The duration this token waits for.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The duration in seconds, for frame-delta arithmetic.
    pub fn secs_f32(&self) -> f32 {
        self.duration.as_secs_f32()
    }
}

static CACHE: OnceLock<Mutex<HashMap<Duration, Arc<Wait>>>> = OnceLock::new();

/// The shared token for `duration`, creating and caching it on first
/// request.
///
/// Thread-safe: concurrent first requests for the same duration are
/// serialized through the cache lock and both receive the same token.
pub fn wait_for(duration: Duration) -> Arc<Wait> {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut tokens = cache
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    Arc::clone(tokens.entry(duration).or_insert_with(|| {
        log::debug!("wait cache: interning token for {:?}", duration);
        Arc::new(Wait { duration })
    }))
}

/// The shared token for `seconds`.
///
/// `seconds` must be finite and non-negative; anything else is a caller
/// contract violation and panics.
pub fn wait_for_secs(seconds: f32) -> Arc<Wait> {
    wait_for(Duration::from_secs_f32(seconds))
}
