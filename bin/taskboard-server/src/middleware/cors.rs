use crate::config::Config;
use tower_http::cors::{Any, CorsLayer};

/// The browser client is served from a different origin than the API, so
/// CORS is open unless `TASKBOARD_CORS_ORIGINS` narrows it.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new().allow_headers(Any).allow_methods(Any);

    let Some(origins_str) = &config.cors_allowed_origins else {
        return base.allow_origin(Any);
    };

    let origins: Vec<axum::http::HeaderValue> = origins_str
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(origins)
    }
}
