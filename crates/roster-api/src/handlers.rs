//! REST API endpoint handlers for the lookup server.
//!
//! Lookups go through the department rosters held in [`AppState`]; the
//! handlers only pick the right operation from the query string and
//! serialize what comes back.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/ping` | Liveness check |
//! | `GET` | `/departments` | Metadata for every department |
//! | `GET` | `/{dept}/officer` | Lookup by `badge`, or by `first_name` + `last_name` |
//! | `GET` | `/{dept}/officer/search` | Fuzzy search by `first_name` and/or `last_name` |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use roster_db::DepartmentRoster;
use roster_types::DepartmentMetadata;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Fixed body returned by `GET /ping`.
pub const PONG: &str = "🏓 P O N G 🏓";

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters accepted by the officer lookup and search routes.
///
/// Blank values are treated as absent. Values that did not decode as UTF-8
/// are rejected.
#[derive(Debug, Default, serde::Deserialize)]
pub struct OfficerQuery {
    /// Exact badge number.
    pub badge: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

/// The exact lookup an [`OfficerQuery`] selects.
#[derive(Debug, PartialEq, Eq)]
pub enum ExactLookup<'a> {
    /// Single officer by badge.
    Badge(&'a str),
    /// All officers with exactly this first and last name.
    Name {
        /// Given name.
        first_name: &'a str,
        /// Family name.
        last_name: &'a str,
    },
}

/// The fuzzy search an [`OfficerQuery`] selects.
#[derive(Debug, PartialEq, Eq)]
pub enum FuzzyLookup<'a> {
    /// Both names given: match against the combined full name.
    FullName(String),
    /// Only a first name given.
    FirstName(&'a str),
    /// Only a last name given.
    LastName(&'a str),
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl OfficerQuery {
    /// Reject parameters whose percent-escapes were not valid UTF-8.
    ///
    /// The query decoder substitutes U+FFFD for such bytes, which would
    /// otherwise be searched for literally.
    fn check_encoding(&self) -> Result<(), ApiError> {
        let params = [
            ("badge", &self.badge),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
        ];
        for (name, value) in params {
            if value
                .as_deref()
                .is_some_and(|v| v.contains(char::REPLACEMENT_CHARACTER))
            {
                return Err(ApiError::InvalidQuery(format!(
                    "{name} is not valid UTF-8"
                )));
            }
        }
        Ok(())
    }

    fn badge(&self) -> Option<&str> {
        non_blank(self.badge.as_deref())
    }

    fn first_name(&self) -> Option<&str> {
        non_blank(self.first_name.as_deref())
    }

    fn last_name(&self) -> Option<&str> {
        non_blank(self.last_name.as_deref())
    }

    /// Pick the exact lookup: badge wins, otherwise both names are needed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidQuery`] if neither a badge nor both
    /// names are present, or a value is not valid UTF-8.
    pub fn exact(&self) -> Result<ExactLookup<'_>, ApiError> {
        self.check_encoding()?;
        if let Some(badge) = self.badge() {
            return Ok(ExactLookup::Badge(badge));
        }
        match (self.first_name(), self.last_name()) {
            (Some(first_name), Some(last_name)) => Ok(ExactLookup::Name {
                first_name,
                last_name,
            }),
            _ => Err(ApiError::InvalidQuery(String::from(
                "either badge or both first_name and last_name are required",
            ))),
        }
    }

    /// Pick the fuzzy search from whichever name parts are present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidQuery`] if neither name is present, or a
    /// value is not valid UTF-8.
    pub fn fuzzy(&self) -> Result<FuzzyLookup<'_>, ApiError> {
        self.check_encoding()?;
        match (self.first_name(), self.last_name()) {
            (Some(first), Some(last)) => Ok(FuzzyLookup::FullName(format!("{first} {last}"))),
            (Some(first), None) => Ok(FuzzyLookup::FirstName(first)),
            (None, Some(last)) => Ok(FuzzyLookup::LastName(last)),
            (None, None) => Err(ApiError::InvalidQuery(String::from(
                "first_name or last_name is required",
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Department-independent lookups
// ---------------------------------------------------------------------------

/// Run an exact lookup against any department roster.
///
/// A badge lookup responds with a single record; a name lookup responds
/// with an array in database order.
///
/// # Errors
///
/// Returns [`ApiError`] if the query is incomplete or the roster fails.
pub async fn exact_lookup<O>(
    roster: &dyn DepartmentRoster<Officer = O>,
    query: &OfficerQuery,
) -> Result<Response, ApiError>
where
    O: Serialize + Send + 'static,
{
    let department = roster.department();
    match query.exact()? {
        ExactLookup::Badge(badge) => {
            tracing::debug!(%department, badge, "Officer lookup by badge");
            let officer = roster.officer_by_badge(badge).await?;
            Ok(Json(officer).into_response())
        }
        ExactLookup::Name {
            first_name,
            last_name,
        } => {
            let officers = roster.search_by_name(first_name, last_name).await?;
            tracing::debug!(
                %department,
                first_name,
                last_name,
                count = officers.len(),
                "Officer lookup by name"
            );
            Ok(Json(officers).into_response())
        }
    }
}

/// Run a fuzzy name search against any department roster.
///
/// # Errors
///
/// Returns [`ApiError`] if no name is given or the roster fails.
pub async fn fuzzy_search<O>(
    roster: &dyn DepartmentRoster<Officer = O>,
    query: &OfficerQuery,
) -> Result<Response, ApiError>
where
    O: Serialize + Send + 'static,
{
    let officers = match query.fuzzy()? {
        FuzzyLookup::FullName(name) => roster.fuzzy_search_by_name(&name).await?,
        FuzzyLookup::FirstName(first_name) => {
            roster.fuzzy_search_by_first_name(first_name).await?
        }
        FuzzyLookup::LastName(last_name) => roster.fuzzy_search_by_last_name(last_name).await?,
    };
    tracing::debug!(
        department = %roster.department(),
        count = officers.len(),
        "Fuzzy officer search"
    );
    Ok(Json(officers).into_response())
}

// ---------------------------------------------------------------------------
// GET /ping, GET /departments
// ---------------------------------------------------------------------------

/// Liveness check. Always succeeds.
#[allow(clippy::unused_async)]
pub async fn ping() -> &'static str {
    PONG
}

/// Describe every registered department's fields and search routes.
///
/// A department whose metadata cannot be loaded appears as an empty
/// entry; the response itself is always `200 OK`.
pub async fn describe_departments(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<DepartmentMetadata>> {
    Json(state.describe_departments().await)
}

// ---------------------------------------------------------------------------
// Seattle
// ---------------------------------------------------------------------------

/// `GET /seattle/officer`
pub async fn seattle_officer(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OfficerQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    exact_lookup(state.seattle.as_ref(), &query).await
}

/// `GET /seattle/officer/search`
pub async fn seattle_officer_search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OfficerQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    fuzzy_search(state.seattle.as_ref(), &query).await
}

// ---------------------------------------------------------------------------
// Tacoma
// ---------------------------------------------------------------------------

/// `GET /tacoma/officer`
pub async fn tacoma_officer(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OfficerQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    exact_lookup(state.tacoma.as_ref(), &query).await
}

/// `GET /tacoma/officer/search`
pub async fn tacoma_officer_search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OfficerQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    fuzzy_search(state.tacoma.as_ref(), &query).await
}
