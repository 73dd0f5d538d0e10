use serde::{Deserialize, Serialize};

use super::{TagGroup, Timestamp};

/// A classification label attached to series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "name", alias = "@name")]
    pub name: String,

    /// Group the tag belongs to. Unknown group codes fail the decode.
    #[serde(rename = "group_id", alias = "@group_id")]
    pub group_id: TagGroup,

    #[serde(rename = "notes", alias = "@notes", default)]
    pub notes: Option<String>,

    #[serde(rename = "created", alias = "@created")]
    pub created: Timestamp,

    #[serde(rename = "popularity", alias = "@popularity")]
    pub popularity: u32,

    #[serde(rename = "series_count", alias = "@series_count")]
    pub series_count: u32,
}
