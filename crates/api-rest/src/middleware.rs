//! HTTP middleware components.
//!
//! This module provides middleware for request/response processing including:
//! - Request logging
//! - Request ID generation
//! - Terminal error and panic handling

pub mod error_handler;
pub mod logging;
pub mod request_id;

pub use error_handler::{handle_error, handle_panic};
pub use logging::logging_middleware;
pub use request_id::{request_id_middleware, RequestId};
