/*
[INPUT]:  Wall-clock time (nanoseconds)
[OUTPUT]: Per-request nonces for replay protection
[POS]:    Auth layer - nonce generation for private requests
[UPDATE]: When the exchange changes nonce requirements
*/

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Source of request nonces.
///
/// Every call must return a value never handed out before by the same source.
pub trait NonceSource: Send + Sync + Debug {
    fn next_nonce(&self) -> i64;
}

/// Nanosecond wall-clock nonce that never repeats within one process.
///
/// Each value is `max(now, previous + 1)`, so a burst of calls inside one clock tick or a
/// clock stepping backwards still yields strictly increasing values. Nothing is persisted:
/// a restarted process, another process sharing the API key, or a clock rollback larger
/// than the run time can still produce values the exchange has already seen.
#[derive(Debug, Default)]
pub struct ClockNonce {
    last: AtomicI64,
}

impl ClockNonce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceSource for ClockNonce {
    fn next_nonce(&self) -> i64 {
        let now = clock_nanos();
        let advance = |last: i64| now.max(last.saturating_add(1));
        match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(advance(last)))
        {
            Ok(previous) | Err(previous) => advance(previous),
        }
    }
}

/// Deterministic counter, handy for tests and replayable fixtures
#[derive(Debug)]
pub struct SequenceNonce {
    next: AtomicI64,
}

impl SequenceNonce {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl NonceSource for SequenceNonce {
    fn next_nonce(&self) -> i64 {
        self.next.fetch_add(1, Ordering::AcqRel)
    }
}

fn clock_nanos() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
}
