use crate::foundation::error::{CueError, CueResult};

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Thematic color/mood family of a cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signature {
    /// Warm red-orange, glowing coals.
    Ember,
    /// Sea blue.
    Tide,
    /// Forest green.
    Grove,
    /// Muted violet.
    Dusk,
    /// Soft apricot.
    Dawn,
    /// Pale icy cyan.
    Frost,
    /// Olive green.
    Moss,
    /// Earthy terracotta.
    Clay,
    /// Blue-violet.
    Iris,
    /// Saturated golden yellow.
    Saffron,
    /// Cool grey-blue.
    Slate,
    /// Pink-red.
    Coral,
    /// Deep indigo.
    Ink,
    /// Light warm neutral.
    Pearl,
    /// Grey-green.
    Sage,
    /// Vivid teal-green.
    Aurora,
}

impl Signature {
    /// Every signature, in table order.
    pub const ALL: &'static [Self] = &[
        Self::Ember,
        Self::Tide,
        Self::Grove,
        Self::Dusk,
        Self::Dawn,
        Self::Frost,
        Self::Moss,
        Self::Clay,
        Self::Iris,
        Self::Saffron,
        Self::Slate,
        Self::Coral,
        Self::Ink,
        Self::Pearl,
        Self::Sage,
        Self::Aurora,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ember => "ember",
            Self::Tide => "tide",
            Self::Grove => "grove",
            Self::Dusk => "dusk",
            Self::Dawn => "dawn",
            Self::Frost => "frost",
            Self::Moss => "moss",
            Self::Clay => "clay",
            Self::Iris => "iris",
            Self::Saffron => "saffron",
            Self::Slate => "slate",
            Self::Coral => "coral",
            Self::Ink => "ink",
            Self::Pearl => "pearl",
            Self::Sage => "sage",
            Self::Aurora => "aurora",
        }
    }

    /// Parse a signature name (case-insensitive).
    pub fn parse(raw: &str) -> CueResult<Self> {
        let key = normalize(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == key)
            .ok_or_else(|| CueError::configuration("signature", raw))
    }
}

/// Structural/layout archetype of a cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Form {
    /// Circular motion around a center.
    Orbit,
    /// Grid of cells.
    Lattice,
    /// A single connecting line.
    Thread,
    /// Rhythmic expansion.
    Pulse,
    /// Angular fragments.
    Shard,
    /// Soft outward unfolding.
    Bloom,
}

impl Form {
    /// Every form, in table order.
    pub const ALL: &'static [Self] = &[
        Self::Orbit,
        Self::Lattice,
        Self::Thread,
        Self::Pulse,
        Self::Shard,
        Self::Bloom,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Lattice => "lattice",
            Self::Thread => "thread",
            Self::Pulse => "pulse",
            Self::Shard => "shard",
            Self::Bloom => "bloom",
        }
    }

    /// Parse a form name (case-insensitive).
    pub fn parse(raw: &str) -> CueResult<Self> {
        let key = normalize(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| CueError::configuration("form", raw))
    }
}

/// Time-of-day lighting bias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chrono {
    /// Brighter, slightly more saturated.
    Morning,
    /// Neutral daylight. Also parsed from `day`.
    Work,
    /// Warmer and slightly dimmer.
    Evening,
    /// Darker and desaturated.
    Night,
}

impl Chrono {
    /// Every chrono, in table order.
    pub const ALL: &'static [Self] = &[Self::Morning, Self::Work, Self::Evening, Self::Night];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Work => "work",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Parse a chrono name (case-insensitive).
    pub fn parse(raw: &str) -> CueResult<Self> {
        match normalize(raw).as_str() {
            "morning" => Ok(Self::Morning),
            "work" | "day" => Ok(Self::Work),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            _ => Err(CueError::configuration("chrono", raw)),
        }
    }
}

/// Cognitive-affective channel: knowing, embodying, or believing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// `k`: cognitive, crisp typography.
    Knowing,
    /// `e`: somatic, open tracking.
    Embodying,
    /// `b`: affective, light and airy type.
    Believing,
}

impl Mode {
    /// Every mode, in table order.
    pub const ALL: &'static [Self] = &[Self::Knowing, Self::Embodying, Self::Believing];

    /// Canonical one-letter name (`k`, `e`, `b`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Knowing => "k",
            Self::Embodying => "e",
            Self::Believing => "b",
        }
    }

    /// Parse a mode from its letter or full name.
    pub fn parse(raw: &str) -> CueResult<Self> {
        match normalize(raw).as_str() {
            "k" | "knowing" => Ok(Self::Knowing),
            "e" | "embodying" => Ok(Self::Embodying),
            "b" | "believing" => Ok(Self::Believing),
            _ => Err(CueError::configuration("mode", raw)),
        }
    }
}

/// Primary interaction verb of a cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hook {
    /// Single tap to continue.
    Tap,
    /// Drag along a track.
    Drag,
    /// Press and hold. Also parsed from `press`.
    Hold,
    /// No interaction; `active` ends on a timer. Also parsed from `watch`.
    Observe,
}

impl Hook {
    /// Every hook.
    pub const ALL: &'static [Self] = &[Self::Tap, Self::Drag, Self::Hold, Self::Observe];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::Drag => "drag",
            Self::Hold => "hold",
            Self::Observe => "observe",
        }
    }

    /// Parse a hook name (case-insensitive).
    pub fn parse(raw: &str) -> CueResult<Self> {
        match normalize(raw).as_str() {
            "tap" => Ok(Self::Tap),
            "drag" => Ok(Self::Drag),
            "hold" | "press" => Ok(Self::Hold),
            "observe" | "watch" => Ok(Self::Observe),
            _ => Err(CueError::configuration("hook", raw)),
        }
    }

    /// `false` only for observe-only cues, which leave `active` on a fallback timer.
    pub fn is_interactive(self) -> bool {
        !matches!(self, Self::Observe)
    }

    /// Interaction hint the shell renders for this hook.
    pub fn affordance(self) -> AffordanceHint {
        match self {
            Self::Tap => AffordanceHint {
                verb: self,
                prompt: "tap to continue",
                shows_hold_ring: false,
                shows_drag_track: false,
            },
            Self::Drag => AffordanceHint {
                verb: self,
                prompt: "drag to continue",
                shows_hold_ring: false,
                shows_drag_track: true,
            },
            Self::Hold => AffordanceHint {
                verb: self,
                prompt: "press and hold",
                shows_hold_ring: true,
                shows_drag_track: false,
            },
            Self::Observe => AffordanceHint {
                verb: self,
                prompt: "",
                shows_hold_ring: false,
                shows_drag_track: false,
            },
        }
    }
}

/// What the shell draws to invite the cue's interaction. Never affects the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AffordanceHint {
    /// Interaction verb this hint belongs to.
    pub verb: Hook,
    /// Short hint caption; empty for observe-only cues.
    pub prompt: &'static str,
    /// Render a fill ring while the user holds.
    pub shows_hold_ring: bool,
    /// Render a drag track.
    pub shows_drag_track: bool,
}

macro_rules! tag_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                    Self::parse(&raw).map_err(serde::de::Error::custom)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = CueError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse(s)
                }
            }
        )+
    };
}

tag_serde!(Signature, Form, Chrono, Mode, Hook);

#[cfg(test)]
#[path = "../../tests/unit/composition/tags.rs"]
mod tests;
