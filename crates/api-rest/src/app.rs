//! Application builder.
//!
//! Assembles routes, middleware and state into an Axum router.

use crate::{
    config::ApiConfig,
    error::ApiError,
    middleware::{handle_panic, logging_middleware, request_id_middleware},
    routes,
    state::AppState,
};
use anyhow::Context;
use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create the main application router
pub fn create_app(config: ApiConfig) -> anyhow::Result<Router> {
    let cors = build_cors_layer(&config)?;
    let timeout = config.request_timeout();
    let max_body_size = config.max_body_size;

    let state = AppState::new(config);

    let app = Router::new()
        .merge(routes::health_routes())
        .nest("/api/v1", routes::v1_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(timeout))
                // Custom middleware wraps the panic handler: panics still get a request ID
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware))
                .layer(CatchPanicLayer::custom(handle_panic)),
        );

    Ok(app)
}

/// Initialize tracing/logging.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &ApiConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;

    let (json_layer, text_layer) = if config.json_logging {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &ApiConfig) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(cors.allow_origin(Any));
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(cors.allow_origin(AllowOrigin::list(origins)))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
