//! Timestamp-derived id allocation
//!
//! Ids are milliseconds since the Unix epoch, bumped so that every id handed
//! out by one allocator is strictly greater than the previous one. Two
//! processes writing the same store can still collide.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id, strictly greater than `floor` and than any id
    /// previously returned.
    pub fn next(&self, floor: i64) -> i64 {
        self.next_at(Utc::now().timestamp_millis(), floor)
    }

    fn next_at(&self, now_millis: i64, floor: i64) -> i64 {
        let mut candidate = 0;
        // fetch_update retries on contention, so the closure may run more than once
        let _ = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                candidate = now_millis.max(last + 1).max(floor + 1);
                Some(candidate)
            });
        candidate
    }
}
