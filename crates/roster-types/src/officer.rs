//! Officer roster records, one struct per department.
//!
//! Each department publishes a different set of roster columns, so each
//! gets its own flat record type. Records are read-only snapshots of a
//! single roster row; they carry no identity beyond their field values.
//!
//! Optional columns are omitted from the JSON output when absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An entry in the Seattle Police Department roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SeattleOfficer {
    /// Date of the most recent roster snapshot containing this entry.
    pub date: NaiveDate,
    /// Badge number, unique within the department's latest roster only.
    pub badge: String,
    /// Full name as printed on the roster.
    pub full_name: String,
    /// Rank or civilian title.
    pub title: String,
    /// Unit code.
    pub unit: String,
    /// Long-form unit description, when the roster provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub unit_description: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Middle name or initial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
}

/// An entry in the Tacoma Police Department roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TacomaOfficer {
    /// Date of the most recent roster snapshot containing this entry.
    pub date: NaiveDate,
    /// Badge number.
    pub badge: String,
    /// Full name as printed on the roster.
    pub full_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title.
    pub title: String,
    /// City department or bureau the officer is assigned to.
    pub department: String,
}
