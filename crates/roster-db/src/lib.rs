//! Data access layer for the roster lookup API (`PostgreSQL`).
//!
//! Every lookup is a call to a department-specific stored procedure. This
//! crate marshals parameters into those calls, maps the returned rows into
//! the department's record type, and exposes each department through the
//! [`DepartmentRoster`] interface that the HTTP layer consumes.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler
//!     |
//!     +-- dyn DepartmentRoster<Officer = SeattleOfficer> --> PgRoster<Seattle>
//!     +-- dyn DepartmentRoster<Officer = TacomaOfficer>  --> PgRoster<Tacoma>
//!                                                              |
//!                                                   shared PgPool (PostgresPool)
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`roster`] -- The [`DepartmentRoster`] interface and its `PostgreSQL`
//!   implementation
//! - [`seattle`] -- Seattle roster schema and procedures
//! - [`tacoma`] -- Tacoma roster schema and procedures
//! - [`error`] -- Shared error types

pub mod error;
pub mod postgres;
pub mod roster;
pub mod seattle;
pub mod tacoma;

// Re-export primary types for convenience.
pub use error::DbError;
pub use postgres::{PostgresConfig, PostgresPool};
pub use roster::{DepartmentRoster, PgRoster, RosterSchema};
pub use seattle::{Seattle, SeattleRoster};
pub use tacoma::{Tacoma, TacomaRoster};
