use crate::types::{CategoryID, TagGroup};

use super::{
    common::{MergeParams, QueryParams, Request},
    fragments::{
        DateRange, Dated, Filtered, Ordered, Ordering, Paged, Paging, Tagged, Tagging, TextFilter,
    },
};

/// `/category`: a single category by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryRequest {
    pub category_id: CategoryID,
}

impl CategoryRequest {
    pub fn new(category_id: CategoryID) -> Self {
        Self { category_id }
    }
}

impl MergeParams for CategoryRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("category_id", self.category_id);
    }
}

impl Request for CategoryRequest {}

/// `/category/children` and `/category/related`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryChildrenRequest {
    pub category_id: CategoryID,
    pub dates: DateRange,
}

/// `/category/related` takes exactly the same parameters as `/category/children`.
pub type RelatedCategoriesRequest = CategoryChildrenRequest;

impl CategoryChildrenRequest {
    pub fn new(category_id: CategoryID) -> Self {
        Self {
            category_id,
            ..Default::default()
        }
    }
}

impl MergeParams for CategoryChildrenRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("category_id", self.category_id);
        self.dates.merge_into(params);
    }
}

impl Request for CategoryChildrenRequest {}

impl Dated for CategoryChildrenRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

/// `/category/series`: the series filed under a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySeriesRequest {
    pub category_id: CategoryID,
    pub dates: DateRange,
    pub paging: Paging,
    pub ordering: Ordering,
    pub filter: TextFilter,
    pub tagging: Tagging,
}

impl CategorySeriesRequest {
    pub fn new(category_id: CategoryID) -> Self {
        Self {
            category_id,
            ..Default::default()
        }
    }
}

impl MergeParams for CategorySeriesRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("category_id", self.category_id);
        self.dates.merge_into(params);
        self.paging.merge_into(params);
        self.ordering.merge_into(params);
        self.filter.merge_into(params);
        self.tagging.merge_into(params);
    }
}

impl Request for CategorySeriesRequest {}

impl Dated for CategorySeriesRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Paged for CategorySeriesRequest {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl Ordered for CategorySeriesRequest {
    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

impl Filtered for CategorySeriesRequest {
    fn text_filter_mut(&mut self) -> &mut TextFilter {
        &mut self.filter
    }
}

impl Tagged for CategorySeriesRequest {
    fn tagging_mut(&mut self) -> &mut Tagging {
        &mut self.tagging
    }
}

/// `/category/tags`: tags attached to the series of a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTagsRequest {
    pub category_id: CategoryID,
    pub dates: DateRange,
    pub paging: Paging,
    pub ordering: Ordering,
    /// [`TagGroup::None`] leaves `tag_group_id` out.
    pub tag_group: TagGroup,
    pub search: Option<String>,
}

impl CategoryTagsRequest {
    pub fn new(category_id: CategoryID) -> Self {
        Self {
            category_id,
            ..Default::default()
        }
    }

    pub fn with_tag_group(mut self, tag_group: TagGroup) -> Self {
        self.tag_group = tag_group;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

impl MergeParams for CategoryTagsRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("category_id", self.category_id);
        self.dates.merge_into(params);
        self.paging.merge_into(params);
        self.ordering.merge_into(params);
        merge_tag_filter(self.tag_group, self.search.as_deref(), params);
    }
}

impl Request for CategoryTagsRequest {}

impl Dated for CategoryTagsRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Paged for CategoryTagsRequest {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl Ordered for CategoryTagsRequest {
    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

/// `/category/related_tags`: tags related to the given `tag_names` within a
/// category. At least one tag name is required by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRelatedTagsRequest {
    pub category_id: CategoryID,
    pub dates: DateRange,
    pub paging: Paging,
    pub ordering: Ordering,
    pub tagging: Tagging,
    pub tag_group: TagGroup,
    pub search: Option<String>,
}

impl CategoryRelatedTagsRequest {
    pub fn new(category_id: CategoryID) -> Self {
        Self {
            category_id,
            ..Default::default()
        }
    }

    pub fn with_tag_group(mut self, tag_group: TagGroup) -> Self {
        self.tag_group = tag_group;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

impl MergeParams for CategoryRelatedTagsRequest {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("category_id", self.category_id);
        self.dates.merge_into(params);
        self.paging.merge_into(params);
        self.ordering.merge_into(params);
        self.tagging.merge_into(params);
        merge_tag_filter(self.tag_group, self.search.as_deref(), params);
    }
}

impl Request for CategoryRelatedTagsRequest {}

impl Dated for CategoryRelatedTagsRequest {
    fn date_range_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl Paged for CategoryRelatedTagsRequest {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl Ordered for CategoryRelatedTagsRequest {
    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

impl Tagged for CategoryRelatedTagsRequest {
    fn tagging_mut(&mut self) -> &mut Tagging {
        &mut self.tagging
    }
}

fn merge_tag_filter(tag_group: TagGroup, search: Option<&str>, params: &mut QueryParams) {
    if tag_group != TagGroup::None {
        params.set("tag_group_id", tag_group.code());
    }
    if let Some(search) = search {
        params.set("search_text", search);
    }
}
