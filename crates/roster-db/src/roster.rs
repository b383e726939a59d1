//! The department roster interface and its `PostgreSQL` implementation.
//!
//! [`DepartmentRoster`] is the seam between the HTTP layer and the
//! database: every department offers the same operations, differing only
//! in the record type they return. [`PgRoster`] implements it once for any
//! [`RosterSchema`], which supplies the department's SQL and row mapping.
//!
//! Metadata loading is fail-soft: a query failure or an empty roster is
//! logged and the empty default metadata is returned, so one department's
//! outage cannot break a combined listing. Lookups and searches propagate
//! every error.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::TryStreamExt;
use roster_types::{Department, DepartmentMetadata, FieldDescriptor};
use sqlx::PgPool;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;

use crate::error::DbError;

/// Read-only lookups against one department's officer roster.
///
/// Implementations must be `Send + Sync`; handlers call them concurrently
/// from many requests.
#[async_trait]
pub trait DepartmentRoster: Send + Sync {
    /// The department's officer record type.
    type Officer: Send + 'static;

    /// The department this roster serves.
    fn department(&self) -> Department;

    /// Describe the department's fields, latest roster date and routes.
    ///
    /// Never fails: on error, or when the roster holds no rows, the empty
    /// [`DepartmentMetadata::default`] is returned instead.
    async fn metadata(&self) -> DepartmentMetadata;

    /// Look up a single officer by exact badge number.
    ///
    /// Returns [`DbError::NotFound`] when no roster entry has the badge.
    async fn officer_by_badge(&self, badge: &str) -> Result<Self::Officer, DbError>;

    /// Officers whose first and last names match exactly.
    async fn search_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Self::Officer>, DbError>;

    /// Officers whose full name approximately matches `name`.
    async fn fuzzy_search_by_name(&self, name: &str) -> Result<Vec<Self::Officer>, DbError>;

    /// Officers whose first name approximately matches `first_name`.
    async fn fuzzy_search_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<Self::Officer>, DbError>;

    /// Officers whose last name approximately matches `last_name`.
    async fn fuzzy_search_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Vec<Self::Officer>, DbError>;
}

/// SQL and row mapping for one department's roster.
///
/// Every lookup query selects from a stored procedure and must return the
/// department's columns in a fixed order, which [`RosterSchema::map_row`]
/// decodes. Parameters are bound positionally (`$1`, `$2`).
pub trait RosterSchema: Send + Sync + 'static {
    /// The department described by this schema.
    const DEPARTMENT: Department;

    /// Selects the most recent roster date as a single nullable `date`.
    const LAST_ROSTER_DATE: &'static str;
    /// Exact badge lookup, one parameter.
    const BY_BADGE: &'static str;
    /// Exact name search, first name then last name.
    const BY_NAME: &'static str;
    /// Fuzzy full-name search, one parameter.
    const FUZZY_BY_NAME: &'static str;
    /// Fuzzy first-name search, one parameter.
    const FUZZY_BY_FIRST_NAME: &'static str;
    /// Fuzzy last-name search, one parameter.
    const FUZZY_BY_LAST_NAME: &'static str;

    /// The record type rows decode into.
    type Officer: Send + 'static;

    /// Fields the department's records carry, in display order.
    fn fields() -> Vec<FieldDescriptor>;

    /// Decode one result row.
    ///
    /// # Errors
    ///
    /// Returns the `sqlx` decode error if a column is missing or has an
    /// unexpected type.
    fn map_row(row: &PgRow) -> Result<Self::Officer, sqlx::Error>;
}

/// A [`DepartmentRoster`] backed by `PostgreSQL` stored procedures.
pub struct PgRoster<S> {
    pool: PgPool,
    schema: PhantomData<fn() -> S>,
}

impl<S> Clone for PgRoster<S> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            schema: PhantomData,
        }
    }
}

impl<S: RosterSchema> PgRoster<S> {
    /// Create a roster bound to a shared connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema: PhantomData,
        }
    }

    /// Most recent roster date, or `None` when the roster is empty.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn last_roster_date(&self) -> Result<Option<NaiveDate>, DbError> {
        let date = sqlx::query_scalar::<_, Option<NaiveDate>>(S::LAST_ROSTER_DATE)
            .fetch_one(&self.pool)
            .await?;
        Ok(date)
    }

    /// Metadata for a roster date query outcome.
    ///
    /// Only a roster with a known latest date is described; a failed query
    /// or an empty roster yields the default record.
    fn describe(date: Result<Option<NaiveDate>, DbError>) -> DepartmentMetadata {
        match date {
            Ok(Some(date)) => DepartmentMetadata::new(S::DEPARTMENT, S::fields(), Some(date)),
            Ok(None) => {
                tracing::warn!(
                    department = %S::DEPARTMENT,
                    "Roster is empty, reporting default metadata"
                );
                DepartmentMetadata::default()
            }
            Err(e) => {
                tracing::error!(
                    department = %S::DEPARTMENT,
                    error = %e,
                    "Failed to load department metadata"
                );
                DepartmentMetadata::default()
            }
        }
    }

    /// Run a multi-row lookup and map every row, in database order.
    ///
    /// The first row that fails to decode aborts the call and discards
    /// the rows already mapped. Dropping the stream on any exit path
    /// returns the connection to the pool.
    async fn collect(
        &self,
        query: Query<'_, sqlx::Postgres, PgArguments>,
    ) -> Result<Vec<S::Officer>, DbError> {
        let mut rows = query.fetch(&self.pool);
        let mut officers = Vec::new();
        while let Some(row) = rows.try_next().await? {
            officers.push(S::map_row(&row)?);
        }
        Ok(officers)
    }
}

#[async_trait]
impl<S: RosterSchema> DepartmentRoster for PgRoster<S> {
    type Officer = S::Officer;

    fn department(&self) -> Department {
        S::DEPARTMENT
    }

    async fn metadata(&self) -> DepartmentMetadata {
        Self::describe(self.last_roster_date().await)
    }

    async fn officer_by_badge(&self, badge: &str) -> Result<S::Officer, DbError> {
        let row = sqlx::query(S::BY_BADGE)
            .bind(badge)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(S::map_row(&row)?),
            None => Err(DbError::NotFound {
                department: S::DEPARTMENT,
                badge: badge.to_owned(),
            }),
        }
    }

    async fn search_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<S::Officer>, DbError> {
        self.collect(sqlx::query(S::BY_NAME).bind(first_name).bind(last_name))
            .await
    }

    async fn fuzzy_search_by_name(&self, name: &str) -> Result<Vec<S::Officer>, DbError> {
        self.collect(sqlx::query(S::FUZZY_BY_NAME).bind(name)).await
    }

    async fn fuzzy_search_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<S::Officer>, DbError> {
        self.collect(sqlx::query(S::FUZZY_BY_FIRST_NAME).bind(first_name))
            .await
    }

    async fn fuzzy_search_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Vec<S::Officer>, DbError> {
        self.collect(sqlx::query(S::FUZZY_BY_LAST_NAME).bind(last_name))
            .await
    }
}
