/// Convenience result type used across Eruption.
pub type EruptionResult<T> = Result<T, EruptionError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Evaluation and mutation never fail: IEEE special values propagate instead. Errors only arise at
/// the boundaries, when a tree or configuration enters the engine or when a sink rejects samples.
#[derive(thiserror::Error, Debug)]
pub enum EruptionError {
    /// Invalid user-provided trees or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or parsing engine configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors raised by a sample sink while rendering.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EruptionError {
    /// Build a [`EruptionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EruptionError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`EruptionError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
