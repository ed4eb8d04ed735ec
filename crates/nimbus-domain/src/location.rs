//! Assignable location domain types.

use serde::{Deserialize, Serialize};

/// Granularity of a location in the provider hierarchy.
///
/// Wire format: lowercase string (`"provider"`, `"region"`, `"zone"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationScope {
    Provider,
    Region,
    Zone,
}

/// A location resources can be assigned to, e.g. region `region-a.geo-1`.
///
/// Decoded from a list-locations response body; compared by value in
/// assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Provider-scoped identifier (e.g. `"region-a.geo-1"`).
    pub id: String,
    pub scope: LocationScope,
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the enclosing location, absent for top-level entries.
    #[serde(default)]
    pub parent: Option<String>,
}
