//! Client for the FRED economic data web API.
//!
//! Requests are plain values assembled from shared parameter fragments (see
//! [`Dated`], [`Paged`], [`Ordered`], [`Filtered`], [`Tagged`]). Responses
//! decode from either JSON or XML into the same types in [`types`].

mod client;
mod errors;
mod query;
mod response;
pub mod types;
pub use self::client::{Client, API_URL};
pub use self::errors::{DecodeError, DecodeErrorKind, Error, ErrorKind};
pub use self::query::{
    ApiKey, CategoryChildrenRequest, CategoryRelatedTagsRequest, CategoryRequest,
    CategorySeriesRequest, CategoryTagsRequest, Credentials, DateRange, Dated, Filtered,
    MergeParams, Ordered, Ordering, Paged, Paging, QueryParams, RelatedCategoriesRequest, Request,
    ResponseFormat, SeriesObservationsRequest, SeriesRequest, SeriesSearchRequest,
    SeriesSearchTagsRequest, SeriesTagsRequest, SeriesUpdatesRequest, Tagged, Tagging, TextFilter,
    API_KEY_LEN, MAX_LIMIT, MAX_OFFSET,
};
pub use self::response::{decode_body, decode_response, single};
