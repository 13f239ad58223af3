use std::time::Duration;

use crate::{
    composition::tags::Hook,
    foundation::error::{CueError, CueResult},
};

/// Default arriving → present delay (T1).
pub const DEFAULT_ARRIVING: Duration = Duration::from_millis(1200);
/// Default present → active delay (T2).
pub const DEFAULT_PRESENT: Duration = Duration::from_millis(2300);
/// Default resonant → afterglow delay (T4).
pub const DEFAULT_RESONANT: Duration = Duration::from_millis(4000);
/// Default active → resonant fallback for observe-only cues (T3).
pub const DEFAULT_FALLBACK: Duration = Duration::from_secs(10);
/// Default breath oscillator period.
pub const DEFAULT_BREATH_PERIOD: Duration = Duration::from_millis(4800);

/// How a cue leaves the `active` stage. Exactly one is armed per cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveExit {
    /// Only [`crate::StageOrchestrator::advance`] leaves `active`.
    Advance,
    /// Only a timer of this length leaves `active`; `advance()` is ignored.
    Fallback(Duration),
}

/// Per-cue stage durations, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "CueTimingDef")]
pub struct CueTiming {
    /// T1: time spent in `arriving`.
    pub arriving: Duration,
    /// T2: time spent in `present`.
    pub present: Duration,
    /// T3: how `active` ends.
    pub active: ActiveExit,
    /// T4: time spent in `resonant`.
    pub resonant: Duration,
    /// Breath oscillator period.
    pub breath_period: Duration,
}

impl Default for CueTiming {
    fn default() -> Self {
        Self {
            arriving: DEFAULT_ARRIVING,
            present: DEFAULT_PRESENT,
            active: ActiveExit::Advance,
            resonant: DEFAULT_RESONANT,
            breath_period: DEFAULT_BREATH_PERIOD,
        }
    }
}

impl CueTiming {
    /// Defaults with the exit mode implied by the hook: observe-only cues fall back to a timer,
    /// interactive cues wait for `advance()`.
    pub fn for_hook(hook: Hook) -> Self {
        let active = if hook.is_interactive() {
            ActiveExit::Advance
        } else {
            ActiveExit::Fallback(DEFAULT_FALLBACK)
        };
        Self {
            active,
            ..Self::default()
        }
    }

    /// Replace the exit mode.
    pub fn with_active(self, active: ActiveExit) -> Self {
        Self { active, ..self }
    }

    /// Replace the breath period.
    pub fn with_breath_period(self, breath_period: Duration) -> Self {
        Self {
            breath_period,
            ..self
        }
    }

    /// Reject zero durations and durations finer than a millisecond.
    ///
    /// Timing tables are stored in whole milliseconds.
    pub fn validate(&self) -> CueResult<()> {
        let fallback = match self.active {
            ActiveExit::Fallback(d) => Some(("active fallback", d)),
            ActiveExit::Advance => None,
        };
        let durations = [
            ("arriving", self.arriving),
            ("present", self.present),
            ("resonant", self.resonant),
            ("breath_period", self.breath_period),
        ]
        .into_iter()
        .chain(fallback);
        for (name, d) in durations {
            if d.is_zero() {
                return Err(CueError::validation(format!(
                    "timing.{name} must be > 0"
                )));
            }
            if d.subsec_nanos() % 1_000_000 != 0 {
                return Err(CueError::validation(format!(
                    "timing.{name} must be a whole number of milliseconds, got {d:?}"
                )));
            }
            if u64::try_from(d.as_millis()).is_err() {
                return Err(CueError::validation(format!(
                    "timing.{name} is out of range"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON timing table.
    pub fn from_json(s: &str) -> CueResult<Self> {
        let def: CueTimingDef = serde_json::from_str(s)?;
        Self::try_from(def)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ActiveExitDef {
    Named(String),
    Fallback { fallback_ms: u64 },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct CueTimingDef {
    #[serde(default = "default_arriving_ms")]
    arriving_ms: u64,
    #[serde(default = "default_present_ms")]
    present_ms: u64,
    #[serde(default = "default_active")]
    active: ActiveExitDef,
    #[serde(default = "default_resonant_ms")]
    resonant_ms: u64,
    #[serde(default = "default_breath_period_ms")]
    breath_period_ms: u64,
}

fn default_arriving_ms() -> u64 {
    DEFAULT_ARRIVING.as_millis() as u64
}

fn default_present_ms() -> u64 {
    DEFAULT_PRESENT.as_millis() as u64
}

fn default_active() -> ActiveExitDef {
    ActiveExitDef::Named("advance".to_owned())
}

fn default_resonant_ms() -> u64 {
    DEFAULT_RESONANT.as_millis() as u64
}

fn default_breath_period_ms() -> u64 {
    DEFAULT_BREATH_PERIOD.as_millis() as u64
}

impl TryFrom<CueTimingDef> for CueTiming {
    type Error = CueError;

    fn try_from(def: CueTimingDef) -> Result<Self, Self::Error> {
        let active = match def.active {
            ActiveExitDef::Named(name) => match name.trim().to_ascii_lowercase().as_str() {
                "advance" => ActiveExit::Advance,
                _ => return Err(CueError::configuration("timing.active", name)),
            },
            ActiveExitDef::Fallback { fallback_ms } => {
                ActiveExit::Fallback(Duration::from_millis(fallback_ms))
            }
        };
        let timing = Self {
            arriving: Duration::from_millis(def.arriving_ms),
            present: Duration::from_millis(def.present_ms),
            active,
            resonant: Duration::from_millis(def.resonant_ms),
            breath_period: Duration::from_millis(def.breath_period_ms),
        };
        timing.validate()?;
        Ok(timing)
    }
}

impl From<CueTiming> for CueTimingDef {
    fn from(t: CueTiming) -> Self {
        Self {
            arriving_ms: t.arriving.as_millis() as u64,
            present_ms: t.present.as_millis() as u64,
            active: match t.active {
                ActiveExit::Advance => default_active(),
                ActiveExit::Fallback(d) => ActiveExitDef::Fallback {
                    fallback_ms: d.as_millis() as u64,
                },
            },
            resonant_ms: t.resonant.as_millis() as u64,
            breath_period_ms: t.breath_period.as_millis() as u64,
        }
    }
}

impl serde::Serialize for CueTiming {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.validate().map_err(serde::ser::Error::custom)?;
        serde::Serialize::serialize(&CueTimingDef::from(*self), serializer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/timing.rs"]
mod tests;
