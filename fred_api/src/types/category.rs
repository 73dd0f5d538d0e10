//! Category entity: a node in the hierarchy series are organized under.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a category. The root category is `0`.
pub type CategoryID = u32;

/// A category as returned by the `/category*` and `/series/categories` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id", alias = "@id")]
    pub id: CategoryID,

    #[serde(rename = "name", alias = "@name")]
    pub name: String,

    /// Identifier of the parent category.
    #[serde(rename = "parent_id", alias = "@parent_id")]
    pub parent_id: CategoryID,
}
