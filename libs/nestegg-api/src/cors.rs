use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Cross-origin settings for the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
            allowed_methods: vec!["GET".to_owned(), "POST".to_owned(), "OPTIONS".to_owned()],
            allowed_headers: vec!["*".to_owned()],
            allow_credentials: false,
            max_age_seconds: 3600,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorsConfigError {
    #[error("{field}=['*'] cannot be combined with allow_credentials=true")]
    WildcardWithCredentials { field: &'static str },

    #[error("invalid CORS {kind} '{value}'")]
    InvalidEntry { kind: &'static str, value: String },
}

/// Build a CORS layer from config.
///
/// # Errors
///
/// Returns an error when credentials are enabled together with a wildcard
/// origin, method or header, or when an entry cannot be parsed.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer, CorsConfigError> {
    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");

    if cfg.allow_credentials {
        for (field, values) in [
            ("allowed_origins", &cfg.allowed_origins),
            ("allowed_methods", &cfg.allowed_methods),
            ("allowed_headers", &cfg.allowed_headers),
        ] {
            if values.iter().any(|v| v == "*") {
                return Err(CorsConfigError::WildcardWithCredentials { field });
            }
        }
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        warn!("CORS allows any origin; set cors.allowed_origins for production deployments");
        layer = layer.allow_origin(Any);
    } else {
        let origins = parse_all::<HeaderValue>(&cfg.allowed_origins, "origin", |s| {
            HeaderValue::from_str(s).ok()
        })?;
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(Any);
    } else {
        let methods = parse_all::<Method>(&cfg.allowed_methods, "method", |s| s.parse().ok())?;
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers =
            parse_all::<HeaderName>(&cfg.allowed_headers, "header", |s| s.parse().ok())?;
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}

fn parse_all<T>(
    values: &[String],
    kind: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, CorsConfigError> {
    values
        .iter()
        .map(|value| {
            parse(value).ok_or_else(|| CorsConfigError::InvalidEntry {
                kind,
                value: value.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(build_cors_layer(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn wildcard_with_credentials_is_rejected() {
        let cfg = CorsConfig {
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert_eq!(
            build_cors_layer(&cfg).err(),
            Some(CorsConfigError::WildcardWithCredentials {
                field: "allowed_origins"
            })
        );
    }

    #[test]
    fn wildcard_headers_with_credentials_are_rejected() {
        let cfg = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_owned()],
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert_eq!(
            build_cors_layer(&cfg).err(),
            Some(CorsConfigError::WildcardWithCredentials {
                field: "allowed_headers"
            })
        );
    }

    #[test]
    fn default_allows_any_header() {
        assert_eq!(CorsConfig::default().allowed_headers, vec!["*".to_owned()]);
    }

    #[test]
    fn explicit_origins_with_credentials_are_allowed() {
        let cfg = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_owned()],
            allowed_headers: vec!["content-type".to_owned()],
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(build_cors_layer(&cfg).is_ok());
    }

    #[test]
    fn invalid_method_is_reported() {
        let cfg = CorsConfig {
            allowed_methods: vec!["NOT A METHOD".to_owned()],
            ..CorsConfig::default()
        };
        assert_eq!(
            build_cors_layer(&cfg).err(),
            Some(CorsConfigError::InvalidEntry {
                kind: "method",
                value: "NOT A METHOD".to_owned(),
            })
        );
    }
}
