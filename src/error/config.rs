use thiserror::Error;

/// Configuration errors raised during startup.
///
/// These always abort startup; there is no HTTP mapping beyond the generic
/// 500 fallback because the server never begins listening with a broken
/// configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("Invalid endpoint URL {url}: {source}")]
    InvalidEndpointUrl {
        url: String,
        source: oauth2::url::ParseError,
    },
}
