use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the battle view.
///
/// Only the loading surfaces can fail; frame stepping never returns an error.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Error while loading or validating the view configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Error while loading a string catalog
    #[error("I18n error: {0}")]
    I18n(#[from] I18nError),
    /// Error while loading a recorded action script
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),
}

/// Errors related to the view configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid RON
    #[error("malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A value is out of its accepted range
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors related to localized string catalogs
#[derive(Debug, Error)]
pub enum I18nError {
    /// The catalog file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not valid RON
    #[error("malformed catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The requested language has no catalog
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// Errors related to recorded action scripts
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The script file is not valid JSON
    #[error("malformed script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Type alias for Results using ViewError
pub type ViewResult<T> = Result<T, ViewError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using I18nError
pub type I18nResult<T> = Result<T, I18nError>;

/// Type alias for Results using ScriptError
pub type ScriptResult<T> = Result<T, ScriptError>;
