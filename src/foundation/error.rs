/// Convenience result type used across animdl.
pub type AnimdlResult<T> = Result<T, AnimdlError>;

/// Top-level error taxonomy used by interpreter and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum AnimdlError {
    /// Invalid user-provided settings or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Animation configuration faults found while building the knob timeline.
    #[error("animation error: {0}")]
    Animation(String),

    /// Failures while replaying commands into a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Failures while persisting or displaying a frame.
    #[error("output error: {0}")]
    Output(String),

    /// A `pop` was issued while only the base transform remained.
    #[error("transform stack underflow: pop on the base level")]
    StackUnderflow,

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimdlError {
    /// Build a [`AnimdlError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AnimdlError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`AnimdlError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`AnimdlError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Build a [`AnimdlError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
