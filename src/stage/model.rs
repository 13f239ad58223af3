use std::time::Duration;

/// Narrative phase of a cue. Visited strictly in declaration order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Content fades in.
    Arriving,
    /// Content settles; ambient breathing starts.
    Present,
    /// The cue waits for the user (or its fallback timer).
    Active,
    /// The cue responds to what happened.
    Resonant,
    /// Terminal; completion has fired.
    Afterglow,
}

impl Stage {
    /// Every stage in order.
    pub const ALL: [Self; 5] = [
        Self::Arriving,
        Self::Present,
        Self::Active,
        Self::Resonant,
        Self::Afterglow,
    ];

    /// The following stage, or `None` from the terminal stage.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Arriving => Some(Self::Present),
            Self::Present => Some(Self::Active),
            Self::Active => Some(Self::Resonant),
            Self::Resonant => Some(Self::Afterglow),
            Self::Afterglow => None,
        }
    }

    /// `true` only for [`Stage::Afterglow`].
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Afterglow)
    }

    /// Whether the breath oscillator runs in this stage.
    pub fn breathes(self) -> bool {
        matches!(self, Self::Present | Self::Active)
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arriving => "arriving",
            Self::Present => "present",
            Self::Active => "active",
            Self::Resonant => "resonant",
            Self::Afterglow => "afterglow",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an orchestrator's stage trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StageChange {
    /// Stage entered.
    pub stage: Stage,
    /// Host clock reading at entry.
    pub at: Duration,
}

#[cfg(test)]
#[path = "../../tests/unit/stage/model.rs"]
mod tests;
