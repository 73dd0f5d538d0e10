//! Closed code sets used by the API, each with an explicit string mapping in
//! both directions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DecodeError;

/// Implements `Serialize` via `Display` and `Deserialize` via `FromStr`, so
/// the same codec is used for JSON strings and XML attribute values.
macro_rules! string_codec {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.wire())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Whether a series is seasonally adjusted.
///
/// Three wire strings collapse to these two states. Encoding always uses the
/// canonical "Seasonally Adjusted" / "Not Seasonally Adjusted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonalAdjustment {
    Adjusted,
    NotAdjusted,
}

impl SeasonalAdjustment {
    pub fn is_adjusted(self) -> bool {
        self == SeasonalAdjustment::Adjusted
    }

    fn wire(&self) -> &'static str {
        match self {
            SeasonalAdjustment::Adjusted => "Seasonally Adjusted",
            SeasonalAdjustment::NotAdjusted => "Not Seasonally Adjusted",
        }
    }
}

impl From<bool> for SeasonalAdjustment {
    fn from(adjusted: bool) -> Self {
        if adjusted {
            SeasonalAdjustment::Adjusted
        } else {
            SeasonalAdjustment::NotAdjusted
        }
    }
}

impl fmt::Display for SeasonalAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for SeasonalAdjustment {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Seasonally Adjusted" => Ok(SeasonalAdjustment::NotAdjusted),
            "Seasonally Adjusted" | "Seasonally Adjusted Annual Rate" => {
                Ok(SeasonalAdjustment::Adjusted)
            }
            _ => Err(DecodeError::bad_value(format!(
                "unknown seasonal adjustment string: {}",
                s
            ))),
        }
    }
}

string_codec!(SeasonalAdjustment);

/// Reporting cadence of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
    WeeklyEndingFriday,
    WeeklyEndingThursday,
    WeeklyEndingWednesday,
    WeeklyEndingTuesday,
    WeeklyEndingMonday,
    WeeklyEndingSunday,
    WeeklyEndingSaturday,
    BiweeklyEndingWednesday,
    BiweeklyEndingMonday,
    /// Sentinel for "Not Applicable" and for input that could not be mapped.
    Unknown,
}

impl Frequency {
    /// Decodes a short code or long-form label.
    ///
    /// Always yields a value: unmapped input produces [`Frequency::Unknown`]
    /// together with the failure, and the caller decides whether the failure
    /// matters. "Not Applicable" maps to `Unknown` without a failure.
    pub fn decode(s: &str) -> (Frequency, Option<DecodeError>) {
        let freq = match s {
            "d" | "Daily" | "Daily, 7-Day" | "Daily, Close" => Frequency::Daily,
            "w" | "Weekly" => Frequency::Weekly,
            "bw" | "Biweekly" => Frequency::Biweekly,
            "m" | "Monthly" | "Monthly, End of Month" => Frequency::Monthly,
            "q" | "Quarterly" | "Quarterly, End of Quarter" | "Quarterly, End of Period" => {
                Frequency::Quarterly
            }
            "sa" | "Semiannual" => Frequency::Semiannual,
            "a" | "Annual" | "Annual, Fiscal Year" | "Annual, As of February"
            | "Annual, End of Year" => Frequency::Annual,
            "wef" | "Weekly, Ending Friday" => Frequency::WeeklyEndingFriday,
            "weth" | "Weekly, Ending Thursday" => Frequency::WeeklyEndingThursday,
            "wew" | "Weekly, Ending Wednesday" => Frequency::WeeklyEndingWednesday,
            "wetu" | "Weekly, Ending Tuesday" => Frequency::WeeklyEndingTuesday,
            "wem" | "Weekly, Ending Monday" => Frequency::WeeklyEndingMonday,
            "wesu" | "Weekly, Ending Sunday" => Frequency::WeeklyEndingSunday,
            "wesa" | "Weekly, Ending Saturday" => Frequency::WeeklyEndingSaturday,
            "bwew" | "Biweekly, Ending Wednesday" => Frequency::BiweeklyEndingWednesday,
            "bwem" | "Biweekly, Ending Monday" => Frequency::BiweeklyEndingMonday,
            "Not Applicable" => Frequency::Unknown,
            _ => {
                return (
                    Frequency::Unknown,
                    Some(DecodeError::bad_value(format!(
                        "unknown frequency format: {}",
                        s
                    ))),
                )
            }
        };
        (freq, None)
    }

    /// Short code, e.g. `q`. This is what `Display` prints.
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Daily => "d",
            Frequency::Weekly => "w",
            Frequency::Biweekly => "bw",
            Frequency::Monthly => "m",
            Frequency::Quarterly => "q",
            Frequency::Semiannual => "sa",
            Frequency::Annual => "a",
            Frequency::WeeklyEndingFriday => "wef",
            Frequency::WeeklyEndingThursday => "weth",
            Frequency::WeeklyEndingWednesday => "wew",
            Frequency::WeeklyEndingTuesday => "wetu",
            Frequency::WeeklyEndingMonday => "wem",
            Frequency::WeeklyEndingSunday => "wesu",
            Frequency::WeeklyEndingSaturday => "wesa",
            Frequency::BiweeklyEndingWednesday => "bwew",
            Frequency::BiweeklyEndingMonday => "bwem",
            Frequency::Unknown => "unknown frequency",
        }
    }

    /// Long label, e.g. `Quarterly`. Used when encoding.
    pub fn long_label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Semiannual => "Semiannual",
            Frequency::Annual => "Annual",
            Frequency::WeeklyEndingFriday => "Weekly, Ending Friday",
            Frequency::WeeklyEndingThursday => "Weekly, Ending Thursday",
            Frequency::WeeklyEndingWednesday => "Weekly, Ending Wednesday",
            Frequency::WeeklyEndingTuesday => "Weekly, Ending Tuesday",
            Frequency::WeeklyEndingMonday => "Weekly, Ending Monday",
            Frequency::WeeklyEndingSunday => "Weekly, Ending Sunday",
            Frequency::WeeklyEndingSaturday => "Weekly, Ending Saturday",
            Frequency::BiweeklyEndingWednesday => "Biweekly, Ending Wednesday",
            Frequency::BiweeklyEndingMonday => "Biweekly, Ending Monday",
            Frequency::Unknown => "Not Applicable",
        }
    }

    fn wire(&self) -> &'static str {
        self.long_label()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Frequency {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Frequency::decode(s) {
            (_, Some(err)) => Err(err),
            (freq, None) => Ok(freq),
        }
    }
}

string_codec!(Frequency);

/// Group a tag belongs to.
///
/// `None` is a valid outbound value meaning "no group filter". Inbound it is
/// never accepted: an unmapped group code fails the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagGroup {
    #[default]
    None,
    Frequency,
    General,
    Geography,
    GeographyType,
    Release,
    SeasonalAdjustment,
    Source,
}

impl TagGroup {
    /// Maps a short code, returning [`TagGroup::None`] for anything unmapped.
    pub fn from_code(s: &str) -> TagGroup {
        match s {
            "freq" => TagGroup::Frequency,
            "gen" => TagGroup::General,
            "geo" => TagGroup::Geography,
            "geot" => TagGroup::GeographyType,
            "rls" => TagGroup::Release,
            "seas" => TagGroup::SeasonalAdjustment,
            "src" => TagGroup::Source,
            _ => TagGroup::None,
        }
    }

    /// Short code sent as `tag_group_id`.
    pub fn code(&self) -> &'static str {
        match self {
            TagGroup::None => "",
            TagGroup::Frequency => "freq",
            TagGroup::General => "gen",
            TagGroup::Geography => "geo",
            TagGroup::GeographyType => "geot",
            TagGroup::Release => "rls",
            TagGroup::SeasonalAdjustment => "seas",
            TagGroup::Source => "src",
        }
    }

    pub fn long_label(&self) -> &'static str {
        match self {
            TagGroup::None => "",
            TagGroup::Frequency => "Frequency",
            TagGroup::General => "General or Concept",
            TagGroup::Geography => "Geography",
            TagGroup::GeographyType => "Geography Type",
            TagGroup::Release => "Release",
            TagGroup::SeasonalAdjustment => "Seasonal Adjustment",
            TagGroup::Source => "Source",
        }
    }

    fn wire(&self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TagGroup {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match TagGroup::from_code(s) {
            TagGroup::None => Err(DecodeError::bad_value(format!("unknown tag id '{}'", s))),
            group => Ok(group),
        }
    }
}

string_codec!(TagGroup);

/// Data transformation applied to observation values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitType {
    #[default]
    Linear,
    Change,
    ChangeFromYearAgo,
    PercentChange,
    PercentChangeFromYearAgo,
    CompoundedAnnualRateOfChange,
    ContinuouslyCompoundedRateOfChange,
    ContinuouslyCompoundedAnnualRateOfChange,
    NaturalLog,
}

impl UnitType {
    pub fn code(&self) -> &'static str {
        match self {
            UnitType::Linear => "lin",
            UnitType::Change => "chg",
            UnitType::ChangeFromYearAgo => "ch1",
            UnitType::PercentChange => "pch",
            UnitType::PercentChangeFromYearAgo => "pc1",
            UnitType::CompoundedAnnualRateOfChange => "pca",
            UnitType::ContinuouslyCompoundedRateOfChange => "cch",
            UnitType::ContinuouslyCompoundedAnnualRateOfChange => "cca",
            UnitType::NaturalLog => "log",
        }
    }

    fn wire(&self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitType::Linear => "Linear",
            UnitType::Change => "Change",
            UnitType::ChangeFromYearAgo => "Change from Year Ago",
            UnitType::PercentChange => "Percent Change",
            UnitType::PercentChangeFromYearAgo => "Percent Change from Year Ago",
            UnitType::CompoundedAnnualRateOfChange => "Compounded Annual Rate of Change",
            UnitType::ContinuouslyCompoundedRateOfChange => {
                "Continuously Compounded Rate of Change"
            }
            UnitType::ContinuouslyCompoundedAnnualRateOfChange => {
                "Continuously Compounded Annual Rate of Change"
            }
            UnitType::NaturalLog => "Natural Log",
        })
    }
}

impl FromStr for UnitType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lin" => Ok(UnitType::Linear),
            "chg" => Ok(UnitType::Change),
            "ch1" => Ok(UnitType::ChangeFromYearAgo),
            "pch" => Ok(UnitType::PercentChange),
            "pc1" => Ok(UnitType::PercentChangeFromYearAgo),
            "pca" => Ok(UnitType::CompoundedAnnualRateOfChange),
            "cch" => Ok(UnitType::ContinuouslyCompoundedRateOfChange),
            "cca" => Ok(UnitType::ContinuouslyCompoundedAnnualRateOfChange),
            "log" => Ok(UnitType::NaturalLog),
            _ => Err(DecodeError::bad_value(format!("unknown unit: {}", s))),
        }
    }
}

string_codec!(UnitType);

/// Field a result list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderBy {
    SeriesId,
    GroupId,
    Title,
    Name,
    Created,
    SeriesCount,
    Units,
    Frequency,
    SeasonalAdjustment,
    RealtimeStart,
    RealtimeEnd,
    LastUpdated,
    ObservationStart,
    ObservationEnd,
    ObservationDate,
    Popularity,
    GroupPopularity,
    SearchRank,
}

impl OrderBy {
    fn wire(&self) -> &'static str {
        match self {
            OrderBy::SeriesId => "series_id",
            OrderBy::GroupId => "group_id",
            OrderBy::Title => "title",
            OrderBy::Name => "name",
            OrderBy::Created => "created",
            OrderBy::SeriesCount => "series_count",
            OrderBy::Units => "units",
            OrderBy::Frequency => "frequency",
            OrderBy::SeasonalAdjustment => "seasonal_adjustment",
            OrderBy::RealtimeStart => "realtime_start",
            OrderBy::RealtimeEnd => "realtime_end",
            OrderBy::LastUpdated => "last_updated",
            OrderBy::ObservationStart => "observation_start",
            OrderBy::ObservationEnd => "observation_end",
            OrderBy::ObservationDate => "observation_date",
            OrderBy::Popularity => "popularity",
            OrderBy::GroupPopularity => "group_popularity",
            OrderBy::SearchRank => "search_rank",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for OrderBy {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "series_id" => OrderBy::SeriesId,
            "group_id" => OrderBy::GroupId,
            "title" => OrderBy::Title,
            "name" => OrderBy::Name,
            "created" => OrderBy::Created,
            "series_count" => OrderBy::SeriesCount,
            "units" => OrderBy::Units,
            "frequency" => OrderBy::Frequency,
            "seasonal_adjustment" => OrderBy::SeasonalAdjustment,
            "realtime_start" => OrderBy::RealtimeStart,
            "realtime_end" => OrderBy::RealtimeEnd,
            "last_updated" => OrderBy::LastUpdated,
            "observation_start" => OrderBy::ObservationStart,
            "observation_end" => OrderBy::ObservationEnd,
            "observation_date" => OrderBy::ObservationDate,
            "popularity" => OrderBy::Popularity,
            "group_popularity" => OrderBy::GroupPopularity,
            "search_rank" => OrderBy::SearchRank,
            _ => return Err(DecodeError::bad_value(format!("unknown order: {}", s))),
        })
    }
}

string_codec!(OrderBy);

/// Sort direction for ordered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn wire(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for SortOrder {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(DecodeError::bad_value(format!("unknown sort order: {}", s))),
        }
    }
}

string_codec!(SortOrder);

/// Attribute a series list can be filtered on (`filter_variable`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterVariable {
    Frequency,
    Units,
    SeasonalAdjustment,
}

impl FilterVariable {
    fn wire(&self) -> &'static str {
        match self {
            FilterVariable::Frequency => "frequency",
            FilterVariable::Units => "units",
            FilterVariable::SeasonalAdjustment => "seasonal_adjustment",
        }
    }
}

impl fmt::Display for FilterVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for FilterVariable {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frequency" => Ok(FilterVariable::Frequency),
            "units" => Ok(FilterVariable::Units),
            "seasonal_adjustment" => Ok(FilterVariable::SeasonalAdjustment),
            _ => Err(DecodeError::bad_value(format!("unknown filter variable: {}", s))),
        }
    }
}

string_codec!(FilterVariable);

/// Geography filter for `/series/updates` (`filter_value`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpdatesFilter {
    #[default]
    All,
    Macro,
    Regional,
}

impl UpdatesFilter {
    fn wire(&self) -> &'static str {
        match self {
            UpdatesFilter::All => "all",
            UpdatesFilter::Macro => "macro",
            UpdatesFilter::Regional => "regional",
        }
    }
}

impl fmt::Display for UpdatesFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for UpdatesFilter {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(UpdatesFilter::All),
            "macro" => Ok(UpdatesFilter::Macro),
            "regional" => Ok(UpdatesFilter::Regional),
            _ => Err(DecodeError::bad_value(format!("unknown updates filter: {}", s))),
        }
    }
}

string_codec!(UpdatesFilter);

/// How `/series/search` interprets its search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    FullText,
    SeriesId,
}

impl SearchType {
    fn wire(&self) -> &'static str {
        match self {
            SearchType::FullText => "full_text",
            SearchType::SeriesId => "series_id",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for SearchType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_text" => Ok(SearchType::FullText),
            "series_id" => Ok(SearchType::SeriesId),
            _ => Err(DecodeError::bad_value(format!("unknown search type: {}", s))),
        }
    }
}

string_codec!(SearchType);
