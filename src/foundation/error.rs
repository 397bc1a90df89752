/// Convenience result type used across the crate.
pub type SetaliaResult<T> = Result<T, SetaliaError>;

/// Top-level error type for configuration, host plumbing, and the enquiry form.
///
/// Panel event handlers never surface these; they suppress failures locally and keep the last
/// rendered state.
#[derive(thiserror::Error, Debug)]
pub enum SetaliaError {
    /// Invalid configuration or page description.
    #[error("validation error: {0}")]
    Validation(String),

    /// Host capability misuse (unknown panel, duplicate mount).
    #[error("host error: {0}")]
    Host(String),

    /// Enquiry form submission rejected.
    #[error("enquiry error: {0}")]
    Enquiry(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetaliaError {
    /// Build a [`SetaliaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SetaliaError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`SetaliaError::Enquiry`] value.
    pub fn enquiry(msg: impl Into<String>) -> Self {
        Self::Enquiry(msg.into())
    }

    /// Build a [`SetaliaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SetaliaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
