//! Progress reporting for the embedding pipeline.

use instant::Instant;

/// A point-in-time snapshot of pipeline progress.
///
/// Emitted once after chunking (zero completed) and once per embedded
/// chunk, so consumers can render a determinate progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingProgress {
    /// Chunks embedded so far
    pub chunks_completed: usize,
    /// Total chunks queued for embedding
    pub chunks_total: usize,
    /// Milliseconds since processing started
    pub elapsed_ms: u64,
}

impl ProcessingProgress {
    /// Completion as a percentage in `0..=100`.
    pub fn percent_complete(&self) -> u8 {
        if self.chunks_total == 0 {
            return 100;
        }
        ((self.chunks_completed * 100) / self.chunks_total) as u8
    }

    /// Whether all queued chunks have been embedded.
    pub fn is_complete(&self) -> bool {
        self.chunks_completed >= self.chunks_total
    }
}

/// Wall-clock timer for progress snapshots.
///
/// Uses `instant::Instant`, which maps to `performance.now()` on wasm and
/// `std::time::Instant` elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct ProgressTimer {
    started: Instant,
}

impl ProgressTimer {
    /// Starts the timer.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Builds a progress snapshot at the current elapsed time.
    pub fn snapshot(&self, chunks_completed: usize, chunks_total: usize) -> ProcessingProgress {
        ProcessingProgress {
            chunks_completed,
            chunks_total,
            elapsed_ms: self.started.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_complete() {
        let progress = ProcessingProgress {
            chunks_completed: 3,
            chunks_total: 12,
            elapsed_ms: 0,
        };
        assert_eq!(progress.percent_complete(), 25);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_complete() {
        let progress = ProcessingProgress {
            chunks_completed: 12,
            chunks_total: 12,
            elapsed_ms: 42,
        };
        assert_eq!(progress.percent_complete(), 100);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_zero_total_counts_as_complete() {
        let progress = ProcessingProgress {
            chunks_completed: 0,
            chunks_total: 0,
            elapsed_ms: 0,
        };
        assert_eq!(progress.percent_complete(), 100);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_timer_snapshot() {
        let timer = ProgressTimer::start();
        let snapshot = timer.snapshot(1, 4);
        assert_eq!(snapshot.chunks_completed, 1);
        assert_eq!(snapshot.chunks_total, 4);
    }
}
