use crate::{
    composition::{
        compositor::{CompositionOutput, compose},
        input::{CompositionInput, RawCompositionInput},
        tags::AffordanceHint,
    },
    foundation::error::CueResult,
    stage::{
        model::Stage,
        orchestrator::StageOrchestrator,
        timer::{TimerHost, TimerId, TimerTarget},
        timing::CueTiming,
    },
};

/// One mounted cue: its resolved look plus the orchestrator driving its stages.
///
/// Cues share nothing with each other; each owns its own orchestrator and handle list.
#[derive(Debug)]
pub struct Cue {
    input: CompositionInput,
    output: CompositionOutput,
    orchestrator: StageOrchestrator,
}

impl Cue {
    /// Parse tags, compose, and start the cue.
    ///
    /// A configuration error stops the mount before anything is scheduled. When `timing` is
    /// `None`, defaults come from [`CueTiming::for_hook`] with the composed breath cycle.
    #[tracing::instrument(skip_all, fields(signature = %raw.signature, hook = %raw.hook))]
    pub fn mount(
        raw: &RawCompositionInput,
        timing: Option<CueTiming>,
        on_complete: impl FnOnce() + 'static,
        host: &mut dyn TimerHost,
    ) -> CueResult<Self> {
        let input = raw.parse()?;
        Self::mount_input(input, timing, on_complete, host)
    }

    /// [`Cue::mount`] for already-typed input.
    pub fn mount_input(
        input: CompositionInput,
        timing: Option<CueTiming>,
        on_complete: impl FnOnce() + 'static,
        host: &mut dyn TimerHost,
    ) -> CueResult<Self> {
        let output = compose(&input);
        let timing = timing.unwrap_or_else(|| {
            CueTiming::for_hook(input.hook).with_breath_period(output.motion.breath_cycle())
        });
        let mut orchestrator = StageOrchestrator::new(timing, on_complete)?;
        orchestrator.start(host);
        tracing::debug!(
            signature = input.signature.as_str(),
            form = input.form.as_str(),
            chrono = input.chrono.as_str(),
            mode = input.mode.as_str(),
            hook = input.hook.as_str(),
            capstone = input.is_capstone,
            variant = output.variant,
            "cue mounted"
        );
        Ok(Self {
            input,
            output,
            orchestrator,
        })
    }

    /// Typed input the cue was mounted with.
    pub fn input(&self) -> &CompositionInput {
        &self.input
    }

    /// Presentation spec; stable for the cue's lifetime.
    pub fn output(&self) -> &CompositionOutput {
        &self.output
    }

    /// Interaction hint for the cue's hook.
    pub fn affordance(&self) -> AffordanceHint {
        self.input.hook.affordance()
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.orchestrator.current_stage()
    }

    /// Current breath amplitude in `[0, 1]`.
    pub fn breath_amplitude(&self) -> f64 {
        self.orchestrator.breath_amplitude()
    }

    /// The underlying orchestrator.
    pub fn orchestrator(&self) -> &StageOrchestrator {
        &self.orchestrator
    }

    /// User interaction completed; see [`StageOrchestrator::advance`].
    pub fn advance(&mut self, host: &mut dyn TimerHost) {
        self.orchestrator.advance(host);
    }

    /// Unmount: cancel every pending handle. Idempotent.
    pub fn dispose(&mut self, host: &mut dyn TimerHost) {
        self.orchestrator.dispose(host);
    }
}

impl TimerTarget for Cue {
    fn on_timeout(&mut self, host: &mut dyn TimerHost, id: TimerId) {
        self.orchestrator.handle_timeout(host, id);
    }

    fn on_frame(&mut self, host: &mut dyn TimerHost, id: TimerId) {
        self.orchestrator.handle_frame(host, id);
    }
}

#[cfg(test)]
#[path = "../tests/unit/cue.rs"]
mod tests;
