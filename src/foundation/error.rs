/// Convenience result type used across cuekit.
pub type CueResult<T> = Result<T, CueError>;

/// Top-level error taxonomy used by composition and orchestration APIs.
#[derive(thiserror::Error, Debug)]
pub enum CueError {
    /// A tag value outside its declared set.
    ///
    /// Raised at composition time so a misconfigured cue fails to mount instead of rendering
    /// with the wrong colors.
    #[error("configuration error: invalid {field} '{value}'")]
    Configuration {
        /// Name of the offending input field (`"signature"`, `"mode"`, ...).
        field: &'static str,
        /// The rejected raw value.
        value: String,
    },

    /// Invalid numeric or structural configuration (e.g. a zero stage duration).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CueError {
    /// Build a [`CueError::Configuration`] value.
    pub fn configuration(field: &'static str, value: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            value: value.into(),
        }
    }

    /// Build a [`CueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Name of the rejected input field, for configuration errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Configuration { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CueError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
