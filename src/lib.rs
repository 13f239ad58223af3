//! cuekit is the shared core behind a catalogue of short, narrated interactive cues.
//!
//! A cue is a timed vignette that walks the user through five narrative stages and then
//! reports completion. Cues are described by a handful of semantic tags rather than by colors,
//! fonts, or timings. This crate turns those tags into a presentation spec and drives the
//! stage timeline; the scenes themselves and their rendering live elsewhere.
//!
//! # Pieces
//!
//! 1. **Compose**: [`compose`] maps a [`CompositionInput`] to a [`CompositionOutput`]
//!    (palette, typography, motion, radius). It is pure and deterministic; string tags are
//!    validated at [`compose_raw`] / [`RawCompositionInput::parse`].
//! 2. **Orchestrate**: [`StageOrchestrator`] walks
//!    `arriving → present → active → resonant → afterglow` on host timers, fires completion
//!    exactly once, and leaves no handle behind after [`StageOrchestrator::dispose`].
//! 3. **Mount**: [`Cue`] does both for one cue instance.
//!
//! The host supplies time through [`TimerHost`]; [`ManualTimerHost`] is a deterministic
//! virtual clock for headless runs and tests.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: one logical thread of control per cue; no locks.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod cue;
mod foundation;
mod stage;

pub use animation::breath::Breath;
pub use animation::ease::Ease;
pub use composition::compositor::{CompositionOutput, SealRing, compose, compose_raw};
pub use composition::fingerprint::OutputFingerprint;
pub use composition::input::{CompositionInput, RawCompositionInput};
pub use composition::motion::{Motion, MotionCurve, RadiusTokens};
pub use composition::palette::Palette;
pub use composition::tags::{AffordanceHint, Chrono, Form, Hook, Mode, Signature};
pub use composition::typography::{TextStyle, Typography};
pub use cue::Cue;
pub use foundation::color::{Hsl, Rgba};
pub use foundation::error::{CueError, CueResult};
pub use foundation::math::safe_opacity;
pub use stage::model::{Stage, StageChange};
pub use stage::orchestrator::StageOrchestrator;
pub use stage::timer::{
    CallbackKind, DEFAULT_FRAME_INTERVAL, ManualTimerHost, TimerHost, TimerId, TimerTarget,
};
pub use stage::timing::{
    ActiveExit, CueTiming, DEFAULT_ARRIVING, DEFAULT_BREATH_PERIOD, DEFAULT_FALLBACK,
    DEFAULT_PRESENT, DEFAULT_RESONANT,
};
