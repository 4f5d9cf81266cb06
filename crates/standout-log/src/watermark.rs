//! Process-wide timestamp width watermark.
//!
//! Timestamp layouts are not known ahead of time, so padded timestamps are
//! aligned to the widest timestamp formatted so far. The watermark is shared
//! by every logger in the process, starts at 0 and only grows. A short
//! timestamp printed before a longer one is not realigned after the fact.
//!
//! [`reset_timestamp_watermark`] exists for test isolation; tests that depend
//! on the watermark value should run serially.

use std::sync::atomic::{AtomicUsize, Ordering};

static LONGEST_TIMESTAMP_SEEN: AtomicUsize = AtomicUsize::new(0);

/// Raises the watermark to at least `width` and returns the resulting value.
pub fn observe_timestamp_width(width: usize) -> usize {
    let previous = LONGEST_TIMESTAMP_SEEN.fetch_max(width, Ordering::AcqRel);
    previous.max(width)
}

/// Returns the widest timestamp width seen so far.
pub fn timestamp_watermark() -> usize {
    LONGEST_TIMESTAMP_SEEN.load(Ordering::Acquire)
}

/// Resets the watermark to 0.
pub fn reset_timestamp_watermark() {
    LONGEST_TIMESTAMP_SEEN.store(0, Ordering::Release);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_watermark_never_decreases() {
        reset_timestamp_watermark();
        assert_eq!(observe_timestamp_width(5), 5);
        assert_eq!(observe_timestamp_width(9), 9);
        assert_eq!(observe_timestamp_width(5), 9);
        assert_eq!(timestamp_watermark(), 9);
    }

    #[test]
    #[serial]
    fn test_reset() {
        observe_timestamp_width(12);
        reset_timestamp_watermark();
        assert_eq!(timestamp_watermark(), 0);
    }

    #[test]
    #[serial]
    fn test_concurrent_updates_keep_maximum() {
        reset_timestamp_watermark();
        let handles: Vec<_> = (1..=8)
            .map(|n| std::thread::spawn(move || observe_timestamp_width(n * 3)))
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(timestamp_watermark(), 24);
        reset_timestamp_watermark();
    }
}
