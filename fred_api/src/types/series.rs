//! Series entity: metadata describing one economic time series.

use serde::{Deserialize, Serialize};

use super::{CalendarDate, Frequency, SeasonalAdjustment, Timestamp};

/// Identifier of a series, e.g. `GNPCA`.
pub type SeriesID = String;

/// Full series record returned by the `/series*` and `/category/series` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "id", alias = "@id")]
    pub id: SeriesID,

    #[serde(rename = "realtime_start", alias = "@realtime_start")]
    pub realtime_start: CalendarDate,

    #[serde(rename = "realtime_end", alias = "@realtime_end")]
    pub realtime_end: CalendarDate,

    #[serde(rename = "title", alias = "@title")]
    pub title: String,

    /// First date with data.
    #[serde(rename = "observation_start", alias = "@observation_start")]
    pub observation_start: CalendarDate,

    /// Last date with data.
    #[serde(rename = "observation_end", alias = "@observation_end")]
    pub observation_end: CalendarDate,

    #[serde(rename = "frequency", alias = "@frequency")]
    pub frequency: Frequency,

    /// Human-readable units, e.g. "Billions of Chained 2009 Dollars".
    #[serde(rename = "units", alias = "@units")]
    pub units: String,

    #[serde(rename = "units_short", alias = "@units_short")]
    pub units_short: String,

    #[serde(rename = "seasonal_adjustment", alias = "@seasonal_adjustment")]
    pub seasonal_adjustment: SeasonalAdjustment,

    #[serde(rename = "last_updated", alias = "@last_updated")]
    pub last_updated: Timestamp,

    #[serde(rename = "popularity", alias = "@popularity")]
    pub popularity: u16,

    #[serde(rename = "notes", alias = "@notes", default)]
    pub notes: Option<String>,
}
