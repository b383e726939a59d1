//! Shared type definitions for the roster lookup API.
//!
//! This crate is the single source of truth for the records the API
//! returns. Types defined here flow downstream to `TypeScript` via `ts-rs`
//! so clients can consume officer rosters and department metadata without
//! hand-maintained definitions.
//!
//! # Modules
//!
//! - [`enums`] -- Department registry and search modes
//! - [`officer`] -- Per-department officer roster records
//! - [`metadata`] -- Self-describing department metadata (fields, routes)

pub mod enums;
pub mod metadata;
pub mod officer;

// Re-export all public types at crate root for convenience.
pub use enums::{Department, SearchMode};
pub use metadata::{DepartmentMetadata, FieldDescriptor, SearchRoute};
pub use officer::{SeattleOfficer, TacomaOfficer};
