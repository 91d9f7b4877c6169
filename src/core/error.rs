//! Server startup errors

use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read Leptos options: {0}")]
    Leptos(String),

    #[error("invalid header value {0:?}")]
    Header(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: ServerError = ConfigError::InvalidNumber {
            key: "TEKGEO_ASSET_MAX_AGE",
            value: "x".to_string(),
        }
        .into();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration:"));
    }

    #[test]
    fn test_bind_error_message() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:3000".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:3000: in use");
    }
}
