//! Animation frame scheduling for a poll-driven event loop.

use std::time::{Duration, Instant};

/// Decides when the next animation frame runs.
///
/// At most one frame is pending at a time, and frames are spaced by the
/// configured interval. The event loop uses [`FrameScheduler::timeout`] as
/// its poll timeout, so an idle shower does not wake the loop at all.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    pending: Option<Instant>,
    last_frame: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            last_frame: None,
        }
    }

    /// Ask for a frame. Has no effect while one is already pending.
    pub fn request(&mut self, now: Instant) {
        if self.pending.is_some() {
            return;
        }
        let at = match self.last_frame {
            Some(last) => (last + self.interval).max(now),
            None => now,
        };
        self.pending = Some(at);
    }

    /// Whether a frame has been requested and not yet run.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the pending frame should run at `now`.
    pub fn due(&self, now: Instant) -> bool {
        self.pending.is_some_and(|at| now >= at)
    }

    /// Consume the pending frame if it is due, returning whether it was.
    pub fn take(&mut self, now: Instant) -> bool {
        if !self.due(now) {
            return false;
        }
        self.pending = None;
        self.last_frame = Some(now);
        true
    }

    /// Drop any pending frame.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// How long the caller may block before the next frame is due.
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.pending {
            Some(at) => at.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const IDLE: Duration = Duration::from_millis(250);

    #[test]
    fn first_request_is_due_immediately() {
        let now = Instant::now();
        let mut scheduler = FrameScheduler::new(FRAME);
        assert!(!scheduler.due(now));
        scheduler.request(now);
        assert!(scheduler.due(now));
        assert_eq!(scheduler.timeout(now, IDLE), Duration::ZERO);
        assert!(scheduler.take(now));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn following_frames_wait_for_interval() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(FRAME);
        scheduler.request(start);
        assert!(scheduler.take(start));

        scheduler.request(start);
        assert!(!scheduler.due(start + Duration::from_millis(10)));
        assert!(!scheduler.take(start + Duration::from_millis(10)));
        assert_eq!(
            scheduler.timeout(start + Duration::from_millis(10), IDLE),
            Duration::from_millis(6)
        );
        assert!(scheduler.take(start + FRAME));
    }

    #[test]
    fn late_requests_run_right_away() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(FRAME);
        scheduler.request(start);
        scheduler.take(start);
        let later = start + Duration::from_secs(1);
        scheduler.request(later);
        assert!(scheduler.due(later));
    }

    #[test]
    fn duplicate_requests_collapse() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(FRAME);
        scheduler.request(start);
        scheduler.request(start + Duration::from_millis(5));
        assert!(scheduler.take(start + Duration::from_millis(5)));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn idle_scheduler_blocks_for_idle_timeout() {
        let now = Instant::now();
        let mut scheduler = FrameScheduler::new(FRAME);
        assert_eq!(scheduler.timeout(now, IDLE), IDLE);
        scheduler.request(now);
        scheduler.cancel();
        assert_eq!(scheduler.timeout(now, IDLE), IDLE);
    }
}
