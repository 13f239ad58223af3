use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Duration;

/// Opaque handle for a scheduled timeout or animation frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimerId(pub u64);

/// What a scheduled handle delivers when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// One-shot timeout.
    Timeout,
    /// Next animation frame.
    Frame,
}

/// Timer and animation-frame service of the embedding environment.
///
/// The host calls back into a [`TimerTarget`] when a handle fires. Hosts are not required to
/// honor cancellation instantly; targets ignore handles they no longer track.
pub trait TimerHost {
    /// Monotonic clock reading.
    fn now(&self) -> Duration;
    /// Schedule a one-shot timeout.
    fn set_timeout(&mut self, delay: Duration) -> TimerId;
    /// Cancel a timeout. Unknown ids are ignored.
    fn clear_timeout(&mut self, id: TimerId);
    /// Request a callback on the next animation frame.
    fn request_frame(&mut self) -> TimerId;
    /// Cancel a frame request. Unknown ids are ignored.
    fn cancel_frame(&mut self, id: TimerId);
}

/// Receiver of fired host callbacks.
pub trait TimerTarget {
    /// A timeout scheduled by this target fired.
    fn on_timeout(&mut self, host: &mut dyn TimerHost, id: TimerId);
    /// A frame requested by this target fired.
    fn on_frame(&mut self, host: &mut dyn TimerHost, id: TimerId);
}

/// Default frame interval of [`ManualTimerHost`] (about 60 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Deterministic virtual-clock host for headless runs and tests.
///
/// Handles fire in due-time order; ties fire in scheduling order.
#[derive(Debug)]
pub struct ManualTimerHost {
    now: Duration,
    frame_interval: Duration,
    next_id: u64,
    queue: BinaryHeap<Reverse<(Duration, TimerId)>>,
    live: BTreeMap<TimerId, CallbackKind>,
    lazy_cancel: bool,
    cancelled: BTreeMap<TimerId, CallbackKind>,
}

impl Default for ManualTimerHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimerHost {
    /// Host at `t = 0` with [`DEFAULT_FRAME_INTERVAL`].
    pub fn new() -> Self {
        Self::with_frame_interval(DEFAULT_FRAME_INTERVAL)
    }

    /// Host with a custom frame interval. A zero interval is bumped to 1 ms.
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            next_id: 0,
            queue: BinaryHeap::new(),
            live: BTreeMap::new(),
            lazy_cancel: false,
            cancelled: BTreeMap::new(),
        }
    }

    /// Keep delivering cancelled handles, like a host whose cancellation races its dispatch.
    pub fn set_lazy_cancel(&mut self, lazy: bool) {
        self.lazy_cancel = lazy;
    }

    /// Number of handles scheduled and not cancelled.
    pub fn pending_count(&self) -> usize {
        self.live.len()
    }

    /// Number of scheduled timeouts (frames excluded).
    pub fn pending_timeouts(&self) -> usize {
        self.live
            .values()
            .filter(|k| **k == CallbackKind::Timeout)
            .count()
    }

    /// Fire every handle due at or before `until`, in order, then move the clock to `until`.
    ///
    /// Handles scheduled by the target during dispatch fire in the same call if they fall due.
    pub fn run_until(&mut self, target: &mut dyn TimerTarget, until: Duration) {
        while let Some(&Reverse((due, id))) = self.queue.peek() {
            if due > until {
                break;
            }
            self.queue.pop();

            let kind = match self.live.remove(&id) {
                Some(kind) => kind,
                None if self.lazy_cancel => match self.cancelled.remove(&id) {
                    Some(kind) => kind,
                    None => continue,
                },
                None => continue,
            };

            self.now = self.now.max(due);
            match kind {
                CallbackKind::Timeout => target.on_timeout(self, id),
                CallbackKind::Frame => target.on_frame(self, id),
            }
        }
        self.now = self.now.max(until);
    }

    /// [`ManualTimerHost::run_until`] relative to the current clock.
    pub fn advance_by(&mut self, target: &mut dyn TimerTarget, delta: Duration) {
        let until = self.now.saturating_add(delta);
        self.run_until(target, until);
    }

    fn schedule(&mut self, delay: Duration, kind: CallbackKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Reverse((self.now.saturating_add(delay), id)));
        self.live.insert(id, kind);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(kind) = self.live.remove(&id)
            && self.lazy_cancel
        {
            self.cancelled.insert(id, kind);
        }
    }
}

impl TimerHost for ManualTimerHost {
    fn now(&self) -> Duration {
        self.now
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.schedule(delay, CallbackKind::Timeout)
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.cancel(id);
    }

    fn request_frame(&mut self) -> TimerId {
        self.schedule(self.frame_interval, CallbackKind::Frame)
    }

    fn cancel_frame(&mut self, id: TimerId) {
        self.cancel(id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/timer.rs"]
mod tests;
