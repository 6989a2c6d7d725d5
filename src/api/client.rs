// HTTP client for the projects API.
// Wraps reqwest with base-URL handling and response-to-error normalization.

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{Result, SbwmError};
use crate::resource::Resource;

/// Documented production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://projects.sbw.media";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SBWM_BASE_URL";

/// Projects API client.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client against the documented production endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(SbwmError::Transport)?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Create a client from the SBWM_BASE_URL environment variable,
    /// falling back to the documented endpoint.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(base) => Self::with_base_url(&base),
            Err(_) => Self::new(),
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the collection URL: `{base}/{Resource}`.
    fn collection_url(&self, resource: Resource) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SbwmError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(resource.as_str());
        Ok(url)
    }

    /// Build the item URL: `{base}/{Resource}/{key}`, key percent-encoded.
    fn item_url(&self, resource: Resource, key: &str) -> Result<Url> {
        let mut url = self.collection_url(resource)?;
        url.path_segments_mut()
            .map_err(|_| SbwmError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(key);
        Ok(url)
    }

    /// GET the whole collection.
    pub(crate) async fn get_collection(&self, resource: Resource) -> Result<Response> {
        let url = self.collection_url(resource)?;
        debug!(%url, "GET collection");
        let response = self.client.get(url).send().await?;
        check_response(response).await
    }

    /// GET a single record by key.
    pub(crate) async fn get_item(&self, resource: Resource, key: &str) -> Result<Response> {
        let url = self.item_url(resource, key)?;
        debug!(%url, "GET item");
        let response = self.client.get(url).send().await?;
        check_response(response).await
    }

    /// POST a record to the collection (server assigns the key).
    pub(crate) async fn post<T: Serialize + ?Sized>(
        &self,
        resource: Resource,
        body: &T,
    ) -> Result<Response> {
        let url = self.collection_url(resource)?;
        debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        check_response(response).await
    }

    /// PUT a record at its key.
    pub(crate) async fn put<T: Serialize + ?Sized>(
        &self,
        resource: Resource,
        key: &str,
        body: &T,
    ) -> Result<Response> {
        let url = self.item_url(resource, key)?;
        debug!(%url, "PUT");
        let response = self.client.put(url).json(body).send().await?;
        check_response(response).await
    }
}

/// Check response status and convert non-2xx into a uniform error shape.
/// The message is the body text, or the status reason when the body is empty.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        message
    };

    Err(SbwmError::Http {
        status: status.as_u16(),
        message,
    })
}
