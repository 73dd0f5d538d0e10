//! Optional parameter fragments shared by several endpoints, and the builder
//! traits that expose them on each request type.
//!
//! Every fragment owns a disjoint set of keys. An unset field never produces
//! a key, not even an empty one.

use crate::types::{CalendarDate, FilterVariable, OrderBy, SortOrder};

use super::common::{MergeParams, QueryParams};

/// Largest page the API serves.
pub const MAX_LIMIT: u32 = 1000;

/// Offsets wrap one below the page size.
pub const MAX_OFFSET: u32 = MAX_LIMIT - 1;

/// Real-time period: `realtime_start` / `realtime_end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl MergeParams for DateRange {
    fn merge_into(&self, params: &mut QueryParams) {
        if let Some(start) = self.start {
            params.set("realtime_start", start);
        }
        if let Some(end) = self.end {
            params.set("realtime_end", end);
        }
    }
}

/// `limit` / `offset`. Zero means "use the server default" and omits the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub limit: u32,
    pub offset: u32,
}

impl Paging {
    /// The `limit` actually sent: reduced modulo 1000, where a result of 0
    /// is sent as 1. This keeps query strings identical to older clients,
    /// so asking for exactly 1000 sends `limit=1`.
    pub fn encoded_limit(&self) -> Option<u32> {
        match self.limit {
            0 => None,
            limit => match limit % MAX_LIMIT {
                0 => Some(1),
                adjusted => Some(adjusted),
            },
        }
    }

    /// The `offset` actually sent, reduced modulo 999.
    pub fn encoded_offset(&self) -> Option<u32> {
        match self.offset {
            0 => None,
            offset => Some(offset % MAX_OFFSET),
        }
    }
}

impl MergeParams for Paging {
    fn merge_into(&self, params: &mut QueryParams) {
        if let Some(limit) = self.encoded_limit() {
            params.set("limit", limit);
        }
        if let Some(offset) = self.encoded_offset() {
            params.set("offset", offset);
        }
    }
}

/// `order_by` / `sort_order`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordering {
    pub order_by: Option<OrderBy>,
    pub sort_order: Option<SortOrder>,
}

impl MergeParams for Ordering {
    fn merge_into(&self, params: &mut QueryParams) {
        if let Some(order_by) = self.order_by {
            params.set("order_by", order_by);
        }
        if let Some(sort_order) = self.sort_order {
            params.set("sort_order", sort_order);
        }
    }
}

/// `filter_variable` / `filter_value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    pub variable: Option<FilterVariable>,
    pub value: String,
}

impl MergeParams for TextFilter {
    fn merge_into(&self, params: &mut QueryParams) {
        if let Some(variable) = self.variable {
            params.set("filter_variable", variable);
        }
        if !self.value.is_empty() {
            params.set("filter_value", &self.value);
        }
    }
}

/// `tag_names` / `exclude_tag_name`, each a `;`-joined list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tagging {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl MergeParams for Tagging {
    fn merge_into(&self, params: &mut QueryParams) {
        if !self.include.is_empty() {
            params.set("tag_names", self.include.join(";"));
        }
        if !self.exclude.is_empty() {
            params.set("exclude_tag_name", self.exclude.join(";"));
        }
    }
}

/// Builder methods for requests that embed a [`DateRange`].
pub trait Dated {
    fn date_range_mut(&mut self) -> &mut DateRange;

    /// Start of the real-time period.
    fn with_realtime_start(mut self, start: CalendarDate) -> Self
    where
        Self: Sized,
    {
        self.date_range_mut().start = Some(start);
        self
    }

    /// End of the real-time period.
    fn with_realtime_end(mut self, end: CalendarDate) -> Self
    where
        Self: Sized,
    {
        self.date_range_mut().end = Some(end);
        self
    }
}

/// Builder methods for requests that embed [`Paging`].
pub trait Paged {
    fn paging_mut(&mut self) -> &mut Paging;

    /// Maximum number of results. See [`Paging::encoded_limit`] for how
    /// out-of-range values are sent.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.paging_mut().limit = limit;
        self
    }

    fn with_offset(mut self, offset: u32) -> Self
    where
        Self: Sized,
    {
        self.paging_mut().offset = offset;
        self
    }
}

/// Builder methods for requests that embed [`Ordering`].
pub trait Ordered {
    fn ordering_mut(&mut self) -> &mut Ordering;

    fn with_order_by(mut self, order_by: OrderBy) -> Self
    where
        Self: Sized,
    {
        self.ordering_mut().order_by = Some(order_by);
        self
    }

    fn with_sort_order(mut self, sort_order: SortOrder) -> Self
    where
        Self: Sized,
    {
        self.ordering_mut().sort_order = Some(sort_order);
        self
    }
}

/// Builder methods for requests that embed a [`TextFilter`].
pub trait Filtered {
    fn text_filter_mut(&mut self) -> &mut TextFilter;

    /// Only return series whose `variable` equals `value`.
    fn with_filter(mut self, variable: FilterVariable, value: &str) -> Self
    where
        Self: Sized,
    {
        let filter = self.text_filter_mut();
        filter.variable = Some(variable);
        filter.value = value.to_string();
        self
    }
}

/// Builder methods for requests that embed [`Tagging`].
pub trait Tagged {
    fn tagging_mut(&mut self) -> &mut Tagging;

    fn with_tag(mut self, tag: &str) -> Self
    where
        Self: Sized,
    {
        self.tagging_mut().include.push(tag.to_string());
        self
    }

    fn with_tags(mut self, tags: &[&str]) -> Self
    where
        Self: Sized,
    {
        self.tagging_mut()
            .include
            .extend(tags.iter().map(|t| t.to_string()));
        self
    }

    fn with_excluded_tag(mut self, tag: &str) -> Self
    where
        Self: Sized,
    {
        self.tagging_mut().exclude.push(tag.to_string());
        self
    }

    fn with_excluded_tags(mut self, tags: &[&str]) -> Self
    where
        Self: Sized,
    {
        self.tagging_mut()
            .exclude
            .extend(tags.iter().map(|t| t.to_string()));
        self
    }
}
