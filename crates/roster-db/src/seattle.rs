//! Seattle Police Department roster.
//!
//! Lookups call the `seattle_*_p` stored procedures, which return columns
//! in the order: date, badge, full name, first, middle and last name,
//! title, unit, unit description.

use roster_types::{Department, FieldDescriptor, SeattleOfficer};
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::roster::{PgRoster, RosterSchema};

/// Seattle roster backed by `PostgreSQL`.
pub type SeattleRoster = PgRoster<Seattle>;

/// Prefixes a procedure call with the Seattle column list.
macro_rules! select_officers {
    ($from:literal) => {
        concat!(
            "SELECT date, badge, full_name, first_name, middle_name, last_name, ",
            "title, unit, unit_description FROM ",
            $from
        )
    };
}

/// Schema marker for the Seattle roster.
#[derive(Debug, Clone, Copy)]
pub struct Seattle;

impl RosterSchema for Seattle {
    const DEPARTMENT: Department = Department::Seattle;

    const LAST_ROSTER_DATE: &'static str = "SELECT max(date) AS date FROM seattle_officers";
    const BY_BADGE: &'static str = select_officers!("seattle_get_officer_by_badge_p(badge := $1)");
    const BY_NAME: &'static str = select_officers!(
        "seattle_search_officer_by_name_p(first_name := $1, last_name := $2)"
    );
    const FUZZY_BY_NAME: &'static str =
        select_officers!("seattle_fuzzy_search_officer_by_name_p(full_name_v := $1)");
    const FUZZY_BY_FIRST_NAME: &'static str =
        select_officers!("seattle_fuzzy_search_officer_by_first_name_p(first_name := $1)");
    const FUZZY_BY_LAST_NAME: &'static str =
        select_officers!("seattle_fuzzy_search_officer_by_last_name_p(last_name := $1)");

    type Officer = SeattleOfficer;

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("badge", "Badge"),
            FieldDescriptor::new("first_name", "First Name"),
            FieldDescriptor::new("middle_name", "Middle Name"),
            FieldDescriptor::new("last_name", "Last Name"),
            FieldDescriptor::new("title", "Title"),
            FieldDescriptor::new("unit", "Unit"),
            FieldDescriptor::new("unit_description", "Unit Description"),
            FieldDescriptor::new("full_name", "Full Name"),
        ]
    }

    fn map_row(row: &PgRow) -> Result<SeattleOfficer, sqlx::Error> {
        Ok(SeattleOfficer {
            date: row.try_get("date")?,
            badge: row.try_get("badge")?,
            full_name: row.try_get("full_name")?,
            first_name: row.try_get("first_name")?,
            middle_name: row.try_get("middle_name")?,
            last_name: row.try_get("last_name")?,
            title: row.try_get("title")?,
            unit: row.try_get("unit")?,
            unit_description: row.try_get("unit_description")?,
        })
    }
}
