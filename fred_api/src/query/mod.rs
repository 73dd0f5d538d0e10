mod common;
pub use self::common::{
    ApiKey, Credentials, MergeParams, QueryParams, Request, ResponseFormat, API_KEY_LEN,
};

mod fragments;
pub use self::fragments::{
    DateRange, Dated, Filtered, Ordered, Ordering, Paged, Paging, Tagged, Tagging, TextFilter,
    MAX_LIMIT, MAX_OFFSET,
};

mod category;
pub use self::category::{
    CategoryChildrenRequest, CategoryRelatedTagsRequest, CategoryRequest, CategorySeriesRequest,
    CategoryTagsRequest, RelatedCategoriesRequest,
};

mod series;
pub use self::series::{
    SeriesObservationsRequest, SeriesRequest, SeriesSearchRequest, SeriesSearchTagsRequest,
    SeriesTagsRequest, SeriesUpdatesRequest,
};
