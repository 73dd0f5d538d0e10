//! HTTP client for the FRED web API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{
        ApiKey, CategoryChildrenRequest, CategoryRelatedTagsRequest, CategoryRequest,
        CategorySeriesRequest, CategoryTagsRequest, Credentials, RelatedCategoriesRequest, Request,
        ResponseFormat, SeriesObservationsRequest, SeriesRequest, SeriesSearchRequest,
        SeriesSearchTagsRequest, SeriesTagsRequest, SeriesUpdatesRequest,
    },
    response::{decode_response, single, truncate_body},
    types::{
        Category, CategoryList, ObservationPage, Series, SeriesList, SeriesPage, TagPage,
    },
    Error,
};

/// Production base URL. Endpoint paths are appended to it.
pub const API_URL: &str = "https://api.stlouisfed.org/fred";

const API_KEY_VAR: &str = "FRED_API_KEY";
const FILE_TYPE_VAR: &str = "FRED_FILE_TYPE";
const BASE_URL_VAR: &str = "FRED_BASE_URL";

const TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the FRED API.
///
/// Holds the credentials and response format copied into every request, and
/// a pooled `reqwest::Client` with a 30-second timeout. It has no mutable
/// state and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl Client {
    /// Creates a client for the production API. Fails if the key is not
    /// exactly 32 characters.
    pub fn new(api_key: &str, format: ResponseFormat) -> Result<Self, Error> {
        Self::with_base_url(API_URL, api_key, format)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        format: ResponseFormat,
    ) -> Result<Self, Error> {
        let credentials = Credentials::new(ApiKey::new(api_key)?, format);
        Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidConfig(format!("invalid base url '{}': {}", base_url, e))
        })?;
        let http = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::InvalidConfig(format!("failed to build http client: {}", e))
            })?;
        Ok(Self {
            http,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reads `FRED_API_KEY` (required), `FRED_FILE_TYPE` (`json` or `xml`,
    /// defaults to `json`) and `FRED_BASE_URL` (defaults to [`API_URL`]).
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| Error::InvalidConfig(format!("{} is not set", API_KEY_VAR)))?;
        let format = match std::env::var(FILE_TYPE_VAR) {
            Ok(value) => value.parse::<ResponseFormat>()?,
            Err(_) => ResponseFormat::default(),
        };
        let base_url = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| API_URL.to_string());
        Self::with_base_url(&base_url, &api_key, format)
    }

    pub fn format(&self) -> ResponseFormat {
        self.credentials.format
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, path: &str, request: &impl Request) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidConfig(format!("invalid url for {}: {}", path, e))
        })?;
        Ok(request.add_to_url(&self.credentials, &url))
    }

    /// Performs the GET and returns the raw body with its status. Only
    /// failures that happen before a status is known are errors here.
    pub async fn fetch(&self, desc: &str, url: Url) -> Result<(Vec<u8>, u16), Error> {
        tracing::debug!("GET {} ({})", url.path(), desc);
        let resp = self.http.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to get {}: {}", desc, e);
            Error::Transport(format!("failed to get {}: {}", desc, e))
        })?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read {} response body: {}", desc, e);
            Error::Transport(format!("failed to read {} response body: {}", desc, e))
        })?;

        if status != 200 {
            tracing::debug!(
                "Request for {} returned status {}: {}",
                desc,
                status,
                truncate_body(&body)
            );
        }
        Ok((body.to_vec(), status))
    }

    async fn get<T, R>(&self, desc: &str, path: &str, request: &R) -> Result<T, Error>
    where
        T: DeserializeOwned,
        R: Request,
    {
        let url = self.get_url(path, request)?;
        let (body, status) = self.fetch(desc, url).await?;
        decode_response(status, &body, self.credentials.format, desc)
    }

    /// Fetches a single category by id.
    pub async fn category(&self, request: &CategoryRequest) -> Result<Category, Error> {
        let ctx = || format!("error getting category {}", request.category_id);
        let list: CategoryList = self
            .get("category", "/category", request)
            .await
            .map_err(|e| e.context(ctx()))?;
        single(list).map_err(|e| e.context(ctx()))
    }

    /// Fetches the child categories of a category.
    pub async fn category_children(
        &self,
        request: &CategoryChildrenRequest,
    ) -> Result<Vec<Category>, Error> {
        let list: CategoryList = self
            .get("category children", "/category/children", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error getting children of category {}",
                    request.category_id
                ))
            })?;
        Ok(list.categories)
    }

    /// Fetches the categories related to a category.
    pub async fn related_categories(
        &self,
        request: &RelatedCategoriesRequest,
    ) -> Result<Vec<Category>, Error> {
        let list: CategoryList = self
            .get("related categories", "/category/related", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error getting categories related to {}",
                    request.category_id
                ))
            })?;
        Ok(list.categories)
    }

    /// Fetches a page of the series filed under a category.
    pub async fn category_series(
        &self,
        request: &CategorySeriesRequest,
    ) -> Result<SeriesPage, Error> {
        self.get("category series", "/category/series", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error getting series of category {}",
                    request.category_id
                ))
            })
    }

    /// Fetches a page of the tags used by the series of a category.
    pub async fn category_tags(&self, request: &CategoryTagsRequest) -> Result<TagPage, Error> {
        self.get("category tags", "/category/tags", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error getting tags of category {}",
                    request.category_id
                ))
            })
    }

    /// Fetches a page of the tags related to the requested tags within a category.
    pub async fn category_related_tags(
        &self,
        request: &CategoryRelatedTagsRequest,
    ) -> Result<TagPage, Error> {
        self.get("category related tags", "/category/related_tags", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error getting related tags of category {}",
                    request.category_id
                ))
            })
    }

    /// Fetches a single series by id.
    pub async fn series(&self, request: &SeriesRequest) -> Result<Series, Error> {
        let ctx = || format!("error getting series {}", request.series_id);
        let list: SeriesList = self
            .get("series", "/series", request)
            .await
            .map_err(|e| e.context(ctx()))?;
        single(list).map_err(|e| e.context(ctx()))
    }

    /// Fetches the categories a series belongs to.
    pub async fn series_categories(&self, request: &SeriesRequest) -> Result<Vec<Category>, Error> {
        let list: CategoryList = self
            .get("series categories", "/series/categories", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error getting categories of series {}",
                    request.series_id
                ))
            })?;
        Ok(list.categories)
    }

    /// Fetches the observations of a series. Missing data points come back
    /// with `valid == false`.
    pub async fn series_observations(
        &self,
        request: &SeriesObservationsRequest,
    ) -> Result<ObservationPage, Error> {
        self.get("series observations", "/series/observations", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error getting observations of series {}",
                    request.series_id
                ))
            })
    }

    /// Searches series by text or id.
    pub async fn series_search(&self, request: &SeriesSearchRequest) -> Result<SeriesPage, Error> {
        self.get("series search", "/series/search", request)
            .await
            .map_err(|e| e.context(format!("error searching series '{}'", request.search_text)))
    }

    /// Fetches the tags of the series matching a search.
    pub async fn series_search_tags(
        &self,
        request: &SeriesSearchTagsRequest,
    ) -> Result<TagPage, Error> {
        self.get("series search tags", "/series/search/tags", request)
            .await
            .map_err(|e| {
                e.context(format!(
                    "error searching series tags '{}'",
                    request.series_search_text
                ))
            })
    }

    /// Fetches the tags related to the requested tags among the series matching a search.
    pub async fn series_search_related_tags(
        &self,
        request: &SeriesSearchTagsRequest,
    ) -> Result<TagPage, Error> {
        self.get(
            "series search related tags",
            "/series/search/related_tags",
            request,
        )
        .await
        .map_err(|e| {
            e.context(format!(
                "error searching series related tags '{}'",
                request.series_search_text
            ))
        })
    }

    /// Fetches the tags of a series.
    pub async fn series_tags(&self, request: &SeriesTagsRequest) -> Result<TagPage, Error> {
        self.get("series tags", "/series/tags", request)
            .await
            .map_err(|e| e.context(format!("error getting tags of series {}", request.series_id)))
    }

    /// Fetches the series most recently updated.
    pub async fn series_updates(&self, request: &SeriesUpdatesRequest) -> Result<SeriesPage, Error> {
        self.get("series updates", "/series/updates", request)
            .await
            .map_err(|e| e.context("error getting series updates"))
    }
}
