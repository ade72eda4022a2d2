use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

pub const CORS_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// CORS layer for an explicit list of origins. Credentials are allowed.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Any origin, any method, any header. Credentials are not allowed with a wildcard origin.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Unset, empty or `*` allows every origin. Otherwise the value is a
/// comma-separated list such as `http://localhost:5173,https://app.example.com`.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var(CORS_ENV).unwrap_or_default();
    let origins = parse_origins(&raw)?;

    if origins.is_empty() {
        info!("CORS allows any origin");
        return Ok(create_permissive_cors_layer());
    }

    info!(origins = %raw, "CORS restricted to configured origins");
    Ok(create_cors_layer(origins))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.iter().any(|s| *s == "*") {
        return Ok(Vec::new());
    }

    entries
        .into_iter()
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid {CORS_ENV} value '{s}': {e}"),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_list() {
        let origins = parse_origins("http://localhost:5173, https://example.com ,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:5173");
        assert_eq!(origins[1], "https://example.com");
    }

    #[test]
    fn test_parse_origins_wildcard_means_any() {
        assert!(parse_origins("*").unwrap().is_empty());
        assert!(parse_origins("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header() {
        assert!(parse_origins("http://bad\norigin").is_err());
    }

    #[test]
    fn test_cors_layer_from_env_unset_is_ok() {
        temp_env::with_var_unset(CORS_ENV, || {
            assert!(cors_layer_from_env().is_ok());
        });
    }
}
