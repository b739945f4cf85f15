//! The configured connection to the API.
//!
//! A [`Client`] is an explicit session value: credentials, base URL and
//! transport travel with it, so independent sessions coexist and tests build
//! their own without touching shared state. Resource operations borrow a
//! client and go through its verb methods; those return the raw
//! [`ApiResponse`] untranslated, since status handling belongs to the
//! resource layer.

use std::env;
use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::Error;
use crate::result::Result;
use crate::transport::{
    ApiRequest, ApiResponse, HttpTransport, MultipartForm, Params, RequestBody, Transport,
};

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";
const API_VERSION: &str = "v1";
const API_KEY_VAR: &str = "UNSPLASH_API_KEY";

macro_rules! query_params {
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::transport::Params::new();
        $(
            params.insert($key.to_string(), $value.to_string());
        )+
        params
    }};
}

pub(crate) use query_params;

/// Connection settings for a [`Client`].
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) access_key: String,
    pub(crate) base_url: String,
    pub(crate) bearer_token: Option<String>,
}

impl Config {
    pub fn new<T: AsRef<str>>(access_key: T) -> Self {
        Self {
            access_key: access_key.as_ref().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bearer_token: None,
        }
    }

    /// Point the session at a different API root, e.g. a staging host.
    pub fn base_url<T: AsRef<str>>(mut self, base_url: T) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Start the session with an OAuth bearer token already established.
    pub fn bearer_token<T: AsRef<str>>(mut self, token: T) -> Self {
        self.bearer_token = Some(token.as_ref().to_string());
        self
    }
}

/// A configured session with the API.
///
/// Every request carries the `Accept-Version` header and an `Authorization`
/// header: `Client-ID <access key>` for public endpoints, or
/// `Bearer <token>` once [`authorize`](Client::authorize) has established an
/// authenticated session.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    config: Config,
    auth: HeaderValue,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Build a session from the `UNSPLASH_API_KEY` environment variable.
    pub fn new_from_env() -> Result<Self> {
        let access_key = env::var(API_KEY_VAR).map_err(|_| Error::InvalidApiKey)?;

        Self::new(Config::new(access_key))
    }

    /// Build a session over a caller-supplied [`Transport`].
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let auth = match &config.bearer_token {
            Some(token) => bearer_header(token)?,
            None => client_id_header(&config.access_key)?,
        };

        Ok(Self {
            transport,
            config,
            auth,
        })
    }

    /// Establish the authenticated session required by write operations.
    pub fn authorize<T: AsRef<str>>(&mut self, token: T) -> Result<()> {
        let token = token.as_ref();

        self.auth = bearer_header(token)?;
        self.config.bearer_token = Some(token.to_string());

        Ok(())
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.config.bearer_token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get(&self, path: &str, params: Params) -> Result<ApiResponse> {
        self.request(Method::GET, self.url(path), params, RequestBody::Empty)
            .await
    }

    pub async fn post(&self, path: &str, params: Params) -> Result<ApiResponse> {
        self.request(Method::POST, self.url(path), params, RequestBody::Empty)
            .await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        params: Params,
        form: MultipartForm,
    ) -> Result<ApiResponse> {
        self.request(
            Method::POST,
            self.url(path),
            params,
            RequestBody::Multipart(form),
        )
        .await
    }

    /// GET an absolute URL, e.g. an image host address taken from a resource.
    pub(crate) async fn get_absolute(&self, url: &str, params: Params) -> Result<ApiResponse> {
        self.request(Method::GET, url.to_string(), params, RequestBody::Empty)
            .await
    }

    async fn request(
        &self,
        method: Method,
        url: String,
        query: Params,
        body: RequestBody,
    ) -> Result<ApiResponse> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept-Version", HeaderValue::from_static(API_VERSION));
        headers.insert(AUTHORIZATION, self.auth.clone());

        log::debug!("{} {}", method, url);

        let response = self
            .transport
            .execute(ApiRequest {
                method,
                url,
                query,
                headers,
                body,
            })
            .await?;

        log::debug!("response status: {}", response.status);

        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

fn client_id_header(access_key: &str) -> Result<HeaderValue> {
    let auth = format!("Client-ID {access_key}");
    let mut auth = HeaderValue::from_str(&auth).map_err(|_| Error::InvalidApiKey)?;
    auth.set_sensitive(true);

    Ok(auth)
}

fn bearer_header(token: &str) -> Result<HeaderValue> {
    let auth = format!("Bearer {token}");
    let mut auth = HeaderValue::from_str(&auth).map_err(|_| Error::InvalidBearerToken)?;
    auth.set_sensitive(true);

    Ok(auth)
}
