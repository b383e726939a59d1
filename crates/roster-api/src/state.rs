//! Shared application state for the lookup API.
//!
//! [`AppState`] holds one roster per registered department behind the
//! [`DepartmentRoster`] interface. In production both rosters share a
//! single `PostgreSQL` pool; tests inject in-memory implementations.

use std::sync::Arc;

use roster_db::DepartmentRoster;
use roster_types::{DepartmentMetadata, SeattleOfficer, TacomaOfficer};

/// Seattle roster as seen by the handlers.
pub type SeattleRosterRef = Arc<dyn DepartmentRoster<Officer = SeattleOfficer>>;

/// Tacoma roster as seen by the handlers.
pub type TacomaRosterRef = Arc<dyn DepartmentRoster<Officer = TacomaOfficer>>;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. Holds no
/// mutable data, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    /// Seattle Police Department roster.
    pub seattle: SeattleRosterRef,
    /// Tacoma Police Department roster.
    pub tacoma: TacomaRosterRef,
}

impl AppState {
    /// Create application state from one roster per department.
    pub fn new<S, T>(seattle: S, tacoma: T) -> Self
    where
        S: DepartmentRoster<Officer = SeattleOfficer> + 'static,
        T: DepartmentRoster<Officer = TacomaOfficer> + 'static,
    {
        Self {
            seattle: Arc::new(seattle),
            tacoma: Arc::new(tacoma),
        }
    }

    /// Metadata for every registered department, in registry order.
    ///
    /// Metadata loading is fail-soft per department, so a failing
    /// department contributes an empty entry rather than an error.
    pub async fn describe_departments(&self) -> Vec<DepartmentMetadata> {
        vec![self.seattle.metadata().await, self.tacoma.metadata().await]
    }
}
