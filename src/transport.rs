//! Wire-level plumbing between [`Client`](crate::client::Client) and the API.
//!
//! Requests and responses are plain data: a [`Client`](crate::client::Client)
//! assembles an [`ApiRequest`], hands it to a [`Transport`], and gets back an
//! [`ApiResponse`] holding the status and the raw body. The production
//! [`HttpTransport`] performs one `reqwest` round trip per request; tests
//! substitute their own [`Transport`] returning canned responses, so no
//! global interception is ever needed.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::result::Result;

/// Ordered query-parameter mapping.
///
/// Options without a value are never inserted, so they are omitted from the
/// outgoing request rather than sent empty.
pub type Params = BTreeMap<String, String>;

/// One file part of a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub name: String,
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Multipart form data, kept as plain parts so the assembled request stays
/// matchable in tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultipartForm {
    pub parts: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file<T: Into<String>>(mut self, name: T, file_name: T, content: Vec<u8>) -> Self {
        self.parts.push(FilePart {
            name: name.into(),
            file_name: file_name.into(),
            content,
        });

        self
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Multipart(MultipartForm),
}

/// An outgoing API request, fully assembled by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Params,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// A raw API response: the status code and the unparsed body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl ApiResponse {
    /// Pass the response through unless the status is a non-success, in which
    /// case it becomes an [`Error::Api`] carrying the API-provided message.
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            return Ok(self);
        }

        Err(Error::Api {
            status: self.status,
            message: error_message(self.status, &self.body),
        })
    }

    /// Map the body onto `T`, translating non-success statuses first.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.error_for_status()?;

        serde_json::from_slice(&response.body).map_err(Error::InvalidResponse)
    }
}

/// Error payloads come as `{"errors": [..]}` or `{"error": ".."}`.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    #[derive(Debug, Deserialize)]
    struct ErrorBody {
        errors: Option<Vec<String>>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        match parsed.errors {
            Some(errors) if !errors.is_empty() => return errors.join(", "),

            _ => {
                if let Some(error) = parsed.error {
                    return error;
                }
            }
        }
    }

    status.canonical_reason().unwrap_or("Unknown error").to_string()
}

/// Executes [`ApiRequest`]s. The client depends on this seam instead of a
/// concrete HTTP stack, so tests can swap in a fake.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Production transport: one HTTP round trip per request.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let ApiRequest {
            method,
            url,
            query,
            headers,
            body,
        } = request;

        let mut builder = self.http.request(method, url).headers(headers);

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        match body {
            RequestBody::Empty => {}

            RequestBody::Multipart(form) => {
                let mut multipart = Form::new();
                for part in form.parts {
                    multipart = multipart.part(
                        part.name,
                        Part::bytes(part.content).file_name(part.file_name),
                    );
                }

                builder = builder.multipart(multipart);
            }
        }

        let response = builder.send().await.map_err(Error::Request)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::Request)?;

        Ok(ApiResponse { status, body })
    }
}
