//! Shared query infrastructure: the flat [`QueryParams`] set, the
//! [`MergeParams`] capability every fragment implements, the base
//! [`Credentials`] fragment, and the [`Request`] trait.

use std::{collections::BTreeMap, fmt, str::FromStr};

use url::Url;

use crate::Error;

/// Length every API key issued by the service has.
pub const API_KEY_LEN: usize = 32;

/// Flat mapping from parameter name to value.
///
/// Keys are kept sorted so the serialized query string is deterministic.
/// Setting a key again replaces its value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<&'static str, String>);

impl QueryParams {
    pub fn set(&mut self, key: &'static str, value: impl ToString) {
        self.0.insert(key, value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Appends every parameter to the URL's query string, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.is_empty() {
            url.query_pairs_mut().extend_pairs(self.iter());
        }
        url
    }

    /// URL-encoded `key=value&...` form, keys in sorted order.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Prints the API key as `REDACTED`.
impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| match k {
                "api_key" => (k, "REDACTED"),
                _ => (k, v),
            }))
            .finish()
    }
}

/// A composable unit of query parameters.
///
/// `merge_into` only ever sets the keys the implementor owns, and never
/// clears anything, so merging the same fragment twice changes nothing.
pub trait MergeParams {
    fn merge_into(&self, params: &mut QueryParams);

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        self.merge_into(&mut params);
        params
    }
}

/// Wire format requested with `file_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        })
    }
}

impl FromStr for ResponseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            _ => Err(Error::UnknownResponseFormat(format!(
                "unknown request/response type: {}",
                s
            ))),
        }
    }
}

/// API access token. Never printed: `Debug` and `Display` show `REDACTED`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates the key length.
    pub fn new(key: &str) -> Result<Self, Error> {
        if key.len() != API_KEY_LEN {
            return Err(Error::InvalidConfig(format!(
                "api key is invalid length: expected {} characters, got {}",
                API_KEY_LEN,
                key.len()
            )));
        }
        Ok(Self(key.to_string()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("REDACTED")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("REDACTED")
    }
}

/// Base fragment held by the client and copied into every request:
/// `api_key` and `file_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: ApiKey,
    pub format: ResponseFormat,
}

impl Credentials {
    pub fn new(api_key: ApiKey, format: ResponseFormat) -> Self {
        Self { api_key, format }
    }
}

impl MergeParams for Credentials {
    fn merge_into(&self, params: &mut QueryParams) {
        params.set("api_key", self.api_key.expose());
        params.set("file_type", self.format);
    }
}

/// Implemented by every endpoint request. The request merges its own
/// required parameters and each optional fragment it embeds.
pub trait Request: MergeParams {
    /// Base fragment first, then the request: the final parameter set.
    fn assemble(&self, credentials: &Credentials) -> QueryParams {
        let mut params = credentials.to_params();
        self.merge_into(&mut params);
        params
    }

    /// Appends the assembled parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, credentials: &Credentials, url: &Url) -> Url {
        self.assemble(credentials).add_to_url(url)
    }
}
