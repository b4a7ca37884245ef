//! Paper Registry REST API
//!
//! Axum service that validates requests against the paper and author
//! resources of the registry. Queries, path identifiers and JSON bodies are
//! checked by extractors before a handler runs; anything that fails is
//! answered with a `400` and a fixed error body.
//!
//! ## Architecture
//!
//! - **app**: Router assembly and tracing setup
//! - **routes**: Health checks and the `/api/v1/user` resources
//! - **middleware**: Request ID, request logging and terminal error handling
//! - **extractors**: Validating extractors for queries, ids and bodies
//! - **responses**: Success envelopes
//! - **error**: HTTP error mapping
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paper_registry_api_rest::{app::{create_app, init_tracing}, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ApiConfig::from_env()?;
//!     init_tracing(&config)?;
//!
//!     let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
//!     let app = create_app(config)?;
//!
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
