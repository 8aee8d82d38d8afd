use crate::domain::HttpMethod;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid status {status} for {method} {url}")]
    InvalidStatus {
        method: HttpMethod,
        url: String,
        status: u16,
    },
    #[error("route {url:?} names a path parameter differently from {other:?}")]
    ConflictingParameter { url: String, other: String },
    #[error("duplicate route: {method} {url}")]
    DuplicateRoute { method: HttpMethod, url: String },
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}
