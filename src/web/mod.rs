//! Web API module for Agora.
//!
//! This module provides the REST API for the community board: routing,
//! handlers, request/response DTOs, validation, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
