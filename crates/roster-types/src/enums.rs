//! Enumeration types for the roster lookup API.
//!
//! [`Department`] is the registry of every department the API serves.
//! [`SearchMode`] names the two families of lookup routes each department
//! advertises in its metadata.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A police department whose officer roster is served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Department {
    /// Seattle Police Department.
    Seattle,
    /// Tacoma Police Department.
    Tacoma,
}

impl Department {
    /// Every registered department, in the order `/departments` lists them.
    pub const ALL: [Self; 2] = [Self::Seattle, Self::Tacoma];

    /// Short identifier code reported as the metadata `ID`.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Seattle => "spd",
            Self::Tacoma => "tpd",
        }
    }

    /// Human-readable display name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Seattle => "Seattle PD",
            Self::Tacoma => "Tacoma PD",
        }
    }

    /// URL path segment under which the department's routes are mounted.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Seattle => "seattle",
            Self::Tacoma => "tacoma",
        }
    }

    /// Path of the exact lookup route (`/{slug}/officer`).
    pub fn exact_path(self) -> String {
        format!("/{}/officer", self.slug())
    }

    /// Path of the fuzzy search route (`/{slug}/officer/search`).
    pub fn fuzzy_path(self) -> String {
        format!("/{}/officer/search", self.slug())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The kind of lookup a search route performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SearchMode {
    /// Exact match on badge or on first and last name.
    Exact,
    /// Approximate name match ranked by the database.
    Fuzzy,
}

impl SearchMode {
    /// Key used for this mode in the metadata `SearchRoutes` map.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn department_paths_follow_slug() {
        assert_eq!(Department::Seattle.exact_path(), "/seattle/officer");
        assert_eq!(Department::Tacoma.fuzzy_path(), "/tacoma/officer/search");
    }

    #[test]
    fn department_ids_are_distinct() {
        assert_ne!(Department::Seattle.id(), Department::Tacoma.id());
        assert_eq!(Department::ALL.first(), Some(&Department::Seattle));
    }

    #[test]
    fn search_mode_serializes_lowercase() {
        let json = serde_json::to_string(&SearchMode::Fuzzy).unwrap();
        assert_eq!(json, "\"fuzzy\"");
        assert_eq!(SearchMode::Exact.to_string(), "exact");
    }
}
