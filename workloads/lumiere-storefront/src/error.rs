//! Storefront error types.

use thiserror::Error;

/// Errors raised while bootstrapping the storefront.
///
/// Once running, the storefront has no failing operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// The store configuration could not be parsed.
    #[error("Invalid store config: {0}")]
    Config(#[from] toml::de::Error),

    /// The log filter directive is malformed.
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("Logger already installed: {0}")]
    Logger(#[from] tracing::subscriber::SetGlobalDefaultError),
}
