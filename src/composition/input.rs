use crate::{
    composition::tags::{Chrono, Form, Hook, Mode, Signature},
    foundation::error::{CueError, CueResult},
};

/// Semantic inputs of a cue, supplied once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CompositionInput {
    /// Thematic color family.
    pub signature: Signature,
    /// Layout archetype.
    pub form: Form,
    /// Time-of-day lighting bias.
    pub chrono: Chrono,
    /// Cognitive-affective channel.
    pub mode: Mode,
    /// Primary interaction verb.
    pub hook: Hook,
    /// Per-instance seed selecting a micro-variant.
    pub seed: u64,
    /// Summary/proof cue with the widened accent and seal ring.
    #[serde(default)]
    pub is_capstone: bool,
}

/// Untyped boundary form of [`CompositionInput`], as authored in cue catalogues.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawCompositionInput {
    /// Signature name.
    pub signature: String,
    /// Form name.
    pub form: String,
    /// Chrono name.
    pub chrono: String,
    /// Mode letter or name.
    pub mode: String,
    /// Hook name.
    pub hook: String,
    /// Per-instance seed.
    #[serde(default)]
    pub seed: u64,
    /// Capstone flag.
    #[serde(default)]
    pub is_capstone: bool,
}

impl RawCompositionInput {
    /// Convenience constructor from string slices.
    pub fn new(
        signature: &str,
        form: &str,
        chrono: &str,
        mode: &str,
        hook: &str,
        seed: u64,
        is_capstone: bool,
    ) -> Self {
        Self {
            signature: signature.to_owned(),
            form: form.to_owned(),
            chrono: chrono.to_owned(),
            mode: mode.to_owned(),
            hook: hook.to_owned(),
            seed,
            is_capstone,
        }
    }

    /// Deserialize from JSON and parse every tag.
    pub fn from_json(s: &str) -> CueResult<CompositionInput> {
        let raw: Self = serde_json::from_str(s)?;
        raw.parse()
    }

    /// Resolve every tag; the first invalid field (in declaration order) is reported.
    pub fn parse(&self) -> CueResult<CompositionInput> {
        Ok(CompositionInput {
            signature: Signature::parse(&self.signature)?,
            form: Form::parse(&self.form)?,
            chrono: Chrono::parse(&self.chrono)?,
            mode: Mode::parse(&self.mode)?,
            hook: Hook::parse(&self.hook)?,
            seed: self.seed,
            is_capstone: self.is_capstone,
        })
    }
}

impl From<CompositionInput> for RawCompositionInput {
    fn from(input: CompositionInput) -> Self {
        Self::new(
            input.signature.as_str(),
            input.form.as_str(),
            input.chrono.as_str(),
            input.mode.as_str(),
            input.hook.as_str(),
            input.seed,
            input.is_capstone,
        )
    }
}

impl TryFrom<&RawCompositionInput> for CompositionInput {
    type Error = CueError;

    fn try_from(raw: &RawCompositionInput) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/input.rs"]
mod tests;
