//! Tacoma Police Department roster.
//!
//! Tacoma publishes fewer columns than Seattle: no middle name and no unit,
//! but a city department instead. The `tacoma_*_p` procedures return date,
//! badge, full name, first name, last name, title, department.

use roster_types::{Department, FieldDescriptor, TacomaOfficer};
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::roster::{PgRoster, RosterSchema};

/// Tacoma roster backed by `PostgreSQL`.
pub type TacomaRoster = PgRoster<Tacoma>;

/// Prefixes a procedure call with the Tacoma column list.
macro_rules! select_officers {
    ($from:literal) => {
        concat!(
            "SELECT date, badge, full_name, first_name, last_name, title, department FROM ",
            $from
        )
    };
}

/// Schema marker for the Tacoma roster.
#[derive(Debug, Clone, Copy)]
pub struct Tacoma;

impl RosterSchema for Tacoma {
    const DEPARTMENT: Department = Department::Tacoma;

    const LAST_ROSTER_DATE: &'static str = "SELECT max(date) AS date FROM tacoma_officers";
    const BY_BADGE: &'static str = select_officers!("tacoma_get_officer_by_badge_p(badge := $1)");
    const BY_NAME: &'static str =
        select_officers!("tacoma_search_officer_by_name_p(first_name := $1, last_name := $2)");
    const FUZZY_BY_NAME: &'static str =
        select_officers!("tacoma_fuzzy_search_officer_by_name_p(full_name_v := $1)");
    const FUZZY_BY_FIRST_NAME: &'static str =
        select_officers!("tacoma_fuzzy_search_officer_by_first_name_p(first_name := $1)");
    const FUZZY_BY_LAST_NAME: &'static str =
        select_officers!("tacoma_fuzzy_search_officer_by_last_name_p(last_name := $1)");

    type Officer = TacomaOfficer;

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("badge", "Badge"),
            FieldDescriptor::new("first_name", "First Name"),
            FieldDescriptor::new("last_name", "Last Name"),
            FieldDescriptor::new("title", "Title"),
            FieldDescriptor::new("department", "Department"),
            FieldDescriptor::new("full_name", "Full Name"),
        ]
    }

    fn map_row(row: &PgRow) -> Result<TacomaOfficer, sqlx::Error> {
        Ok(TacomaOfficer {
            date: row.try_get("date")?,
            badge: row.try_get("badge")?,
            full_name: row.try_get("full_name")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            title: row.try_get("title")?,
            department: row.try_get("department")?,
        })
    }
}
