use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to parse or a value has the wrong type.
    #[error("veloz config: {0}")]
    Figment(#[from] figment::Error),

    /// A setting the selected mode depends on is empty.
    #[error("veloz config: '{section}' must be set")]
    NotConfigured { section: String },

    #[error("veloz config: invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
