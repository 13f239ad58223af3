use std::time::Duration;

use smallvec::SmallVec;

use crate::{
    animation::breath::Breath,
    foundation::error::CueResult,
    stage::{
        model::{Stage, StageChange},
        timer::{CallbackKind, TimerHost, TimerId, TimerTarget},
        timing::{ActiveExit, CueTiming},
    },
};

type CompletionFn = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingCallback {
    id: TimerId,
    kind: CallbackKind,
    armed_in: Stage,
}

/// Drives one cue through `arriving → present → active → resonant → afterglow`.
///
/// The orchestrator owns the only list of handles it scheduled on the host. Every handler
/// checks that list and the liveness flags first, so late or duplicate callbacks are no-ops.
/// The completion callback is an `FnOnce` taken on entry to `afterglow`, so it can fire at
/// most once.
pub struct StageOrchestrator {
    timing: CueTiming,
    breath: Breath,
    stage: Stage,
    started: bool,
    disposed: bool,
    finished: bool,
    pending: SmallVec<[PendingCallback; 4]>,
    on_complete: Option<CompletionFn>,
    stage_entered_at: Duration,
    breath_origin: Duration,
    breath_amplitude: f64,
    trace: SmallVec<[StageChange; 5]>,
}

impl std::fmt::Debug for StageOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageOrchestrator")
            .field("timing", &self.timing)
            .field("stage", &self.stage)
            .field("started", &self.started)
            .field("disposed", &self.disposed)
            .field("finished", &self.finished)
            .field("pending", &self.pending)
            .field("breath_amplitude", &self.breath_amplitude)
            .finish_non_exhaustive()
    }
}

impl StageOrchestrator {
    /// Build an idle orchestrator. Nothing is scheduled until [`StageOrchestrator::start`].
    pub fn new(timing: CueTiming, on_complete: impl FnOnce() + 'static) -> CueResult<Self> {
        timing.validate()?;
        Ok(Self {
            timing,
            breath: Breath::new(timing.breath_period),
            stage: Stage::Arriving,
            started: false,
            disposed: false,
            finished: false,
            pending: SmallVec::new(),
            on_complete: Some(Box::new(on_complete)),
            stage_entered_at: Duration::ZERO,
            breath_origin: Duration::ZERO,
            breath_amplitude: 0.0,
            trace: SmallVec::new(),
        })
    }

    /// Enter `arriving` at the host's current time and arm T1. Later calls are no-ops.
    pub fn start(&mut self, host: &mut dyn TimerHost) {
        if self.started || self.disposed {
            tracing::trace!("start ignored: already started or disposed");
            return;
        }
        self.started = true;
        self.enter(host, Stage::Arriving);
    }

    /// Stage the cue is currently in.
    pub fn current_stage(&self) -> Stage {
        self.stage
    }

    /// Ambient breath value in `[0, 1]`; frozen outside `present`/`active`.
    pub fn breath_amplitude(&self) -> f64 {
        self.breath_amplitude
    }

    /// Timing table fixed at construction.
    pub fn timing(&self) -> &CueTiming {
        &self.timing
    }

    /// Stages entered so far, with their entry times.
    pub fn trace(&self) -> &[StageChange] {
        &self.trace
    }

    /// `true` once started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// `true` once `afterglow` was reached and completion fired.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `true` after [`StageOrchestrator::dispose`].
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Handles this instance still tracks as scheduled.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Ids of the handles this instance still tracks.
    pub fn pending_ids(&self) -> impl Iterator<Item = TimerId> + '_ {
        self.pending.iter().map(|p| p.id)
    }

    /// Time spent in the current stage.
    pub fn stage_elapsed(&self, host: &dyn TimerHost) -> Duration {
        host.now().saturating_sub(self.stage_entered_at)
    }

    /// Leave `active` for `resonant` early.
    ///
    /// Only honored while `active` on a cue whose exit mode is [`ActiveExit::Advance`]. Every
    /// other call is silently ignored: user input routinely races the timers.
    pub fn advance(&mut self, host: &mut dyn TimerHost) {
        if self.disposed || self.finished {
            tracing::trace!("advance ignored: orchestrator no longer live");
            return;
        }
        if self.stage != Stage::Active {
            tracing::trace!(stage = self.stage.as_str(), "advance ignored outside active");
            return;
        }
        if self.timing.active != ActiveExit::Advance {
            tracing::trace!("advance ignored: cue exits active on its fallback timer");
            return;
        }
        self.cancel_timeouts(host);
        self.enter(host, Stage::Resonant);
    }

    /// Cancel every pending timer and frame. Idempotent.
    pub fn dispose(&mut self, host: &mut dyn TimerHost) {
        if self.disposed {
            tracing::trace!("duplicate dispose ignored");
            return;
        }
        self.release_all(host);
        self.disposed = true;
        self.on_complete = None;
        tracing::debug!(stage = self.stage.as_str(), "orchestrator disposed");
    }

    /// Handle a fired timeout. Unknown or stale ids are ignored.
    pub fn handle_timeout(&mut self, host: &mut dyn TimerHost, id: TimerId) {
        if self.disposed || self.finished {
            tracing::trace!(id = id.0, "stale timeout ignored");
            return;
        }
        let Some(pos) = self.find_pending(id, CallbackKind::Timeout) else {
            tracing::trace!(id = id.0, "untracked timeout ignored");
            return;
        };
        let fired = self.pending.swap_remove(pos);
        if fired.armed_in != self.stage {
            tracing::trace!(id = id.0, "timeout from an earlier stage ignored");
            return;
        }
        if let Some(next) = self.stage.next() {
            self.enter(host, next);
        }
    }

    /// Handle a fired animation frame: sample the breath and re-arm while breathing.
    pub fn handle_frame(&mut self, host: &mut dyn TimerHost, id: TimerId) {
        if self.disposed || self.finished {
            tracing::trace!(id = id.0, "stale frame ignored");
            return;
        }
        let Some(pos) = self.find_pending(id, CallbackKind::Frame) else {
            tracing::trace!(id = id.0, "untracked frame ignored");
            return;
        };
        self.pending.swap_remove(pos);
        if !self.stage.breathes() {
            return;
        }
        let elapsed = host.now().saturating_sub(self.breath_origin);
        self.breath_amplitude = self.breath.amplitude_at(elapsed);
        self.ensure_frame(host);
    }

    fn enter(&mut self, host: &mut dyn TimerHost, stage: Stage) {
        let now = host.now();
        self.stage = stage;
        self.stage_entered_at = now;
        self.trace.push(StageChange { stage, at: now });
        tracing::debug!(
            stage = stage.as_str(),
            at_ms = now.as_millis() as u64,
            "stage entered"
        );

        match stage {
            Stage::Arriving => self.arm_timeout(host, self.timing.arriving),
            Stage::Present => {
                self.breath_origin = now;
                self.arm_timeout(host, self.timing.present);
                self.ensure_frame(host);
            }
            Stage::Active => {
                if let ActiveExit::Fallback(delay) = self.timing.active {
                    self.arm_timeout(host, delay);
                }
                self.ensure_frame(host);
            }
            Stage::Resonant => {
                self.cancel_frames(host);
                self.arm_timeout(host, self.timing.resonant);
            }
            Stage::Afterglow => {
                self.release_all(host);
                self.finished = true;
                if let Some(on_complete) = self.on_complete.take() {
                    tracing::debug!(at_ms = now.as_millis() as u64, "cue complete");
                    on_complete();
                }
            }
        }
    }

    fn find_pending(&self, id: TimerId, kind: CallbackKind) -> Option<usize> {
        self.pending
            .iter()
            .position(|p| p.id == id && p.kind == kind)
    }

    fn arm_timeout(&mut self, host: &mut dyn TimerHost, delay: Duration) {
        let id = host.set_timeout(delay);
        self.pending.push(PendingCallback {
            id,
            kind: CallbackKind::Timeout,
            armed_in: self.stage,
        });
    }

    fn ensure_frame(&mut self, host: &mut dyn TimerHost) {
        if self.pending.iter().any(|p| p.kind == CallbackKind::Frame) {
            return;
        }
        let id = host.request_frame();
        self.pending.push(PendingCallback {
            id,
            kind: CallbackKind::Frame,
            armed_in: self.stage,
        });
    }

    fn cancel_timeouts(&mut self, host: &mut dyn TimerHost) {
        self.pending.retain(|p| {
            if p.kind == CallbackKind::Timeout {
                host.clear_timeout(p.id);
                false
            } else {
                true
            }
        });
    }

    fn cancel_frames(&mut self, host: &mut dyn TimerHost) {
        self.pending.retain(|p| {
            if p.kind == CallbackKind::Frame {
                host.cancel_frame(p.id);
                false
            } else {
                true
            }
        });
    }

    fn release_all(&mut self, host: &mut dyn TimerHost) {
        for p in self.pending.drain(..) {
            match p.kind {
                CallbackKind::Timeout => host.clear_timeout(p.id),
                CallbackKind::Frame => host.cancel_frame(p.id),
            }
        }
    }
}

impl TimerTarget for StageOrchestrator {
    fn on_timeout(&mut self, host: &mut dyn TimerHost, id: TimerId) {
        self.handle_timeout(host, id);
    }

    fn on_frame(&mut self, host: &mut dyn TimerHost, id: TimerId) {
        self.handle_frame(host, id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/orchestrator.rs"]
mod tests;
