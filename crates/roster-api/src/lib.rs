//! HTTP lookup API for police officer rosters.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Liveness** (`GET /ping`)
//! - **Department metadata** (`GET /departments`) describing each
//!   department's record fields and search routes
//! - **Per-department lookups** (`GET /{department}/officer`) by badge or
//!   exact name, and fuzzy name search (`GET /{department}/officer/search`)
//!
//! # Architecture
//!
//! Handlers never touch the database directly. [`AppState`] holds one
//! [`roster_db::DepartmentRoster`] per department, injected at startup, so
//! tests can substitute in-memory rosters for the `PostgreSQL` ones.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
