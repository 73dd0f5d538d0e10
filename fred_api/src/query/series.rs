use crate::types::{CalendarDate, SearchType, SeriesID, TagGroup, UpdatesFilter};

use super::{
    common::{MergeParams, QueryParams, Request},
    fragments::{
        DateRange, Dated, Filtered, Ordered, Ordering, Paged, Paging, Tagged, Tagging, TextFilter,
    },
};

/// `/series` and `/series/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesRequest {
    pub series_id: SeriesID,
    pub dates: DateRange,
}

impl SeriesRequest {
    pub fn new(series_id: &str) -> Self {
        Self {
            series_id: series_id.to_string(),
            ..Default::default()
        }
    }
}

impl MergeParams for SeriesRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("series_id", &self.series_id);
        self.dates.merge_into(params);
    }
}

impl Request for SeriesRequest {}

impl Dated for SeriesRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

/// `/series/observations`: the data points of a series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesObservationsRequest {
    pub series_id: SeriesID,
    pub dates: DateRange,
    pub paging: Paging,
    pub observation_start: Option<CalendarDate>,
    pub observation_end: Option<CalendarDate>,
}

impl SeriesObservationsRequest {
    pub fn new(series_id: &str) -> Self {
        Self {
            series_id: series_id.to_string(),
            ..Default::default()
        }
    }

    /// Earliest observation date to return.
    pub fn with_observation_start(mut self, start: CalendarDate) -> Self {
        self.observation_start = Some(start);
        self
    }

    /// Latest observation date to return.
    pub fn with_observation_end(mut self, end: CalendarDate) -> Self {
        self.observation_end = Some(end);
        self
    }
}

impl MergeParams for SeriesObservationsRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("series_id", &self.series_id);
        self.dates.merge_into(params);
        self.paging.merge_into(params);
        if let Some(start) = self.observation_start {
            params.set("observation_start", start);
        }
        if let Some(end) = self.observation_end {
            params.set("observation_end", end);
        }
    }
}

impl Request for SeriesObservationsRequest {}

impl Dated for SeriesObservationsRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Paged for SeriesObservationsRequest {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

/// `/series/search`: full text or series id search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesSearchRequest {
    /// Always sent, even when empty.
    pub search_text: String,
    pub search_type: Option<SearchType>,
    pub dates: DateRange,
    pub paging: Paging,
    pub ordering: Ordering,
    pub filter: TextFilter,
    pub tagging: Tagging,
}

impl SeriesSearchRequest {
    pub fn new(search_text: &str) -> Self {
        Self {
            search_text: search_text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }
}

impl MergeParams for SeriesSearchRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        self.dates.merge_into(params);
        self.paging.merge_into(params);
        self.ordering.merge_into(params);
        self.filter.merge_into(params);
        self.tagging.merge_into(params);
        params.set("search_text", &self.search_text);
        if let Some(search_type) = self.search_type {
            params.set("search_type", search_type);
        }
    }
}

impl Request for SeriesSearchRequest {}

impl Dated for SeriesSearchRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Paged for SeriesSearchRequest {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl Ordered for SeriesSearchRequest {
    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

impl Filtered for SeriesSearchRequest {
    fn text_filter_mut(&mut self) -> &mut TextFilter {
        &mut self.filter
    }
}

impl Tagged for SeriesSearchRequest {
    fn tagging_mut(&mut self) -> &mut Tagging {
        &mut self.tagging
    }
}

/// `/series/search/tags` and `/series/search/related_tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesSearchTagsRequest {
    /// Always sent as `series_search_text`.
    pub series_search_text: String,
    pub tag_search_text: Option<String>,
    /// [`TagGroup::None`] leaves `tag_group_id` out.
    pub tag_group: TagGroup,
    pub dates: DateRange,
    pub paging: Paging,
    pub ordering: Ordering,
    pub tagging: Tagging,
}

impl SeriesSearchTagsRequest {
    pub fn new(series_search_text: &str) -> Self {
        Self {
            series_search_text: series_search_text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_tag_search_text(mut self, text: &str) -> Self {
        self.tag_search_text = Some(text.to_string());
        self
    }

    pub fn with_tag_group(mut self, tag_group: TagGroup) -> Self {
        self.tag_group = tag_group;
        self
    }
}

impl MergeParams for SeriesSearchTagsRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        self.dates.merge_into(params);
        self.tagging.merge_into(params);
        self.paging.merge_into(params);
        self.ordering.merge_into(params);
        params.set("series_search_text", &self.series_search_text);
        if let Some(text) = self.tag_search_text.as_deref().filter(|t| !t.is_empty()) {
            params.set("tag_search_text", text);
        }
        if self.tag_group != TagGroup::None {
            params.set("tag_group_id", self.tag_group.code());
        }
    }
}

impl Request for SeriesSearchTagsRequest {}

impl Dated for SeriesSearchTagsRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Paged for SeriesSearchTagsRequest {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl Ordered for SeriesSearchTagsRequest {
    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

impl Tagged for SeriesSearchTagsRequest {
    fn tagging_mut(&mut self) -> &mut Tagging {
        &mut self.tagging
    }
}

/// `/series/tags`: tags attached to one series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesTagsRequest {
    pub series_id: SeriesID,
    pub dates: DateRange,
    pub ordering: Ordering,
}

impl SeriesTagsRequest {
    pub fn new(series_id: &str) -> Self {
        Self {
            series_id: series_id.to_string(),
            ..Default::default()
        }
    }
}

impl MergeParams for SeriesTagsRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("series_id", &self.series_id);
        self.dates.merge_into(params);
        self.ordering.merge_into(params);
    }
}

impl Request for SeriesTagsRequest {}

impl Dated for SeriesTagsRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Ordered for SeriesTagsRequest {
    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

/// `/series/updates`: recently revised series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesUpdatesRequest {
    pub dates: DateRange,
    pub paging: Paging,
    /// Always sent as `filter_value`.
    pub filter: UpdatesFilter,
}

impl SeriesUpdatesRequest {
    pub fn new(filter: UpdatesFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }
}

impl MergeParams for SeriesUpdatesRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        self.dates.merge_into(params);
        self.paging.merge_into(params);
        params.set("filter_value", self.filter);
    }
}

impl Request for SeriesUpdatesRequest {}

impl Dated for SeriesUpdatesRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Paged for SeriesUpdatesRequest {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}
