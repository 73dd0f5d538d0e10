//! Result envelopes: echoed request metadata plus the named entity collection.
//!
//! Every field is spelled twice: the JSON key, and as an `@`-prefixed alias
//! for the XML attribute carrying the same value. Collections alias the
//! singular XML child element (`<seriess><series .../></seriess>`).

use serde::{Deserialize, Serialize};

use super::{CalendarDate, Category, Observation, OrderBy, Series, SortOrder, Tag, UnitType};

/// Gives the decoder access to the entity list of an envelope, for the
/// endpoints that must return exactly one entity.
pub trait Collection {
    type Item;

    /// Entity name used in error messages, e.g. "category".
    const NAME: &'static str;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Response of `/category`, `/category/children`, `/category/related` and
/// `/series/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    #[serde(rename = "categories", alias = "category", default)]
    pub categories: Vec<Category>,
}

impl Collection for CategoryList {
    type Item = Category;
    const NAME: &'static str = "category";

    fn into_items(self) -> Vec<Category> {
        self.categories
    }
}

/// Response of `/series`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesList {
    #[serde(rename = "realtime_start", alias = "@realtime_start")]
    pub realtime_start: CalendarDate,

    #[serde(rename = "realtime_end", alias = "@realtime_end")]
    pub realtime_end: CalendarDate,

    #[serde(rename = "seriess", alias = "series", default)]
    pub series: Vec<Series>,
}

impl Collection for SeriesList {
    type Item = Series;
    const NAME: &'static str = "series";

    fn into_items(self) -> Vec<Series> {
        self.series
    }
}

/// Paged series listing: `/category/series`, `/series/search`, `/series/updates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPage {
    #[serde(rename = "realtime_start", alias = "@realtime_start")]
    pub realtime_start: CalendarDate,

    #[serde(rename = "realtime_end", alias = "@realtime_end")]
    pub realtime_end: CalendarDate,

    #[serde(rename = "order_by", alias = "@order_by")]
    pub order_by: OrderBy,

    #[serde(rename = "sort_order", alias = "@sort_order")]
    pub sort_order: SortOrder,

    /// Total number of matching series, across all pages.
    #[serde(rename = "count", alias = "@count")]
    pub count: u32,

    #[serde(rename = "offset", alias = "@offset")]
    pub offset: u32,

    #[serde(rename = "limit", alias = "@limit")]
    pub limit: u32,

    /// Only echoed by `/series/updates`.
    #[serde(rename = "filter_variable", alias = "@filter_variable", default)]
    pub filter_variable: Option<String>,

    /// Only echoed by `/series/updates`.
    #[serde(rename = "filter_value", alias = "@filter_value", default)]
    pub filter_value: Option<String>,

    #[serde(rename = "seriess", alias = "series", default)]
    pub series: Vec<Series>,
}

/// Paged tag listing: `/category/tags`, `/category/related_tags`,
/// `/series/tags`, `/series/search/tags`, `/series/search/related_tags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagPage {
    #[serde(rename = "realtime_start", alias = "@realtime_start")]
    pub realtime_start: CalendarDate,

    #[serde(rename = "realtime_end", alias = "@realtime_end")]
    pub realtime_end: CalendarDate,

    #[serde(rename = "order_by", alias = "@order_by")]
    pub order_by: OrderBy,

    #[serde(rename = "sort_order", alias = "@sort_order")]
    pub sort_order: SortOrder,

    #[serde(rename = "count", alias = "@count")]
    pub count: u32,

    #[serde(rename = "offset", alias = "@offset")]
    pub offset: u32,

    #[serde(rename = "limit", alias = "@limit")]
    pub limit: u32,

    #[serde(rename = "tags", alias = "tag", default)]
    pub tags: Vec<Tag>,
}

/// Response of `/series/observations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPage {
    #[serde(rename = "realtime_start", alias = "@realtime_start")]
    pub realtime_start: CalendarDate,

    #[serde(rename = "realtime_end", alias = "@realtime_end")]
    pub realtime_end: CalendarDate,

    #[serde(rename = "observation_start", alias = "@observation_start")]
    pub observation_start: CalendarDate,

    #[serde(rename = "observation_end", alias = "@observation_end")]
    pub observation_end: CalendarDate,

    #[serde(rename = "units", alias = "@units")]
    pub units: UnitType,

    #[serde(rename = "order_by", alias = "@order_by")]
    pub order_by: OrderBy,

    #[serde(rename = "sort_order", alias = "@sort_order")]
    pub sort_order: SortOrder,

    #[serde(rename = "count", alias = "@count")]
    pub count: u32,

    #[serde(rename = "offset", alias = "@offset")]
    pub offset: u32,

    #[serde(rename = "limit", alias = "@limit")]
    pub limit: u32,

    /// Includes missing data points; see [`Observation::valid`].
    #[serde(rename = "observations", alias = "observation", default)]
    pub observations: Vec<Observation>,
}

impl ObservationPage {
    /// Observations that carry a value, skipping missing data points.
    pub fn valid_observations(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter().filter(|obs| obs.valid)
    }
}

/// Body sent with every non-success status.
///
/// The live service spells the XML attributes `message`/`code`; both
/// spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(
        rename = "error_message",
        alias = "@error_message",
        alias = "@message"
    )]
    pub message: String,

    #[serde(rename = "error_code", alias = "@error_code", alias = "@code")]
    pub code: u32,
}
