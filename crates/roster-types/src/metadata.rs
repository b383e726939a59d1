//! Department metadata: the self-describing contract for each department.
//!
//! Clients fetch [`DepartmentMetadata`] from `GET /departments` to learn
//! which fields a department's officer records carry and which routes
//! accept which query parameters. The wire format uses `PascalCase` keys:
//!
//! ```json
//! {
//!   "Fields": [{ "FieldName": "badge", "Label": "Badge" }],
//!   "LastAvailableRosterDate": "2020-06-15",
//!   "Name": "Seattle PD",
//!   "ID": "spd",
//!   "SearchRoutes": {
//!     "exact": { "Path": "/seattle/officer", "QueryParams": ["badge"] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Department, SearchMode};

/// A single record field a department exposes, with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "bindings/")]
pub struct FieldDescriptor {
    /// JSON key of the field in the department's officer records.
    pub field_name: String,
    /// Human-readable label.
    pub label: String,
}

impl FieldDescriptor {
    /// Create a descriptor from a field name and label.
    pub fn new(field_name: &str, label: &str) -> Self {
        Self {
            field_name: field_name.to_owned(),
            label: label.to_owned(),
        }
    }
}

/// An HTTP route and the query parameters it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "bindings/")]
pub struct SearchRoute {
    /// Request path, e.g. `/seattle/officer`.
    pub path: String,
    /// Accepted query parameter names.
    pub query_params: Vec<String>,
}

impl SearchRoute {
    /// Create a route descriptor.
    pub fn new(path: String, query_params: &[&str]) -> Self {
        Self {
            path,
            query_params: query_params.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

/// Describes one department's queryable surface.
///
/// The [`Default`] value (no fields, no date, empty strings, no routes)
/// is what a department reports when its metadata cannot be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "bindings/")]
pub struct DepartmentMetadata {
    /// Fields present on the department's officer records.
    pub fields: Vec<FieldDescriptor>,
    /// Most recent roster snapshot date (`YYYY-MM-DD`), if any roster exists.
    pub last_available_roster_date: Option<NaiveDate>,
    /// Display name, e.g. `Seattle PD`.
    pub name: String,
    /// Short identifier code, e.g. `spd`.
    #[serde(rename = "ID")]
    pub id: String,
    /// Route descriptors keyed by search mode (`exact`, `fuzzy`).
    pub search_routes: BTreeMap<String, SearchRoute>,
}

impl DepartmentMetadata {
    /// Build metadata for a department from its field list and roster date.
    ///
    /// Both search modes are advertised: the exact route accepts `badge`
    /// or `first_name` + `last_name`, the fuzzy route accepts either name
    /// part or both.
    pub fn new(
        department: Department,
        fields: Vec<FieldDescriptor>,
        last_available_roster_date: Option<NaiveDate>,
    ) -> Self {
        let mut search_routes = BTreeMap::new();
        search_routes.insert(
            SearchMode::Exact.as_str().to_owned(),
            SearchRoute::new(
                department.exact_path(),
                &["badge", "first_name", "last_name"],
            ),
        );
        search_routes.insert(
            SearchMode::Fuzzy.as_str().to_owned(),
            SearchRoute::new(department.fuzzy_path(), &["first_name", "last_name"]),
        );

        Self {
            fields,
            last_available_roster_date,
            name: department.display_name().to_owned(),
            id: department.id().to_owned(),
            search_routes,
        }
    }

    /// Whether this is the empty record reported after a load failure.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Look up the route descriptor for a search mode.
    pub fn route(&self, mode: SearchMode) -> Option<&SearchRoute> {
        self.search_routes.get(mode.as_str())
    }
}
