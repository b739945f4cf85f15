//! The photo resource and its operations.
//!
//! Schemas are explicit: each field below is declared and typed, nested
//! objects map through their own types (`user` into [`User`], `categories`
//! into [`Category`]), and anything else the API returns is ignored. `user`
//! is deliberately non-optional: a photo payload without one fails to parse,
//! which keeps the "every photo has a photographer" invariant in the type.

use std::path::Path;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::client::{Client, query_params};
use crate::error::Error;
use crate::models::category::Category;
use crate::models::user::User;
use crate::result::Result;
use crate::transport::{MultipartForm, Params};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub color: Option<String>,
    pub likes: Option<u64>,
    pub urls: PhotoUrls,
    pub links: PhotoLinks,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub download: String,
    pub download_location: String,
}

/// Filters for [`Photo::random`].
///
/// Unset options are omitted from the request entirely, never sent as empty
/// values. `categories` ids are joined into one comma-separated `category`
/// parameter, in the given order; an empty list emits nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomFilters {
    pub categories: Vec<u32>,
    pub featured: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub user: Option<String>,
}

impl RandomFilters {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();

        if !self.categories.is_empty() {
            let joined = self
                .categories
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");

            params.insert("category".to_string(), joined);
        }

        if let Some(featured) = self.featured {
            params.insert("featured".to_string(), featured.to_string());
        }

        if let Some(width) = self.width {
            params.insert("width".to_string(), width.to_string());
        }

        if let Some(height) = self.height {
            params.insert("height".to_string(), height.to_string());
        }

        if let Some(user) = &self.user {
            params.insert("user".to_string(), user.clone());
        }

        params
    }
}

#[derive(Debug, Clone)]
pub enum Quality {
    Raw,
    Custom(u32, u32),
}

impl Photo {
    /// Fetch a single photo by id.
    pub async fn find<T: AsRef<str>>(client: &Client, id: T) -> Result<Photo> {
        client
            .get(&format!("/photos/{}", id.as_ref()), Params::new())
            .await?
            .parse()
    }

    /// Fetch one random photo matching `filters`.
    ///
    /// When nothing matches (an unknown `user`, say) the API answers with an
    /// error status, which surfaces as [`Error::Api`]; there is no empty
    /// success.
    pub async fn random(client: &Client, filters: &RandomFilters) -> Result<Photo> {
        client
            .get("/photos/random", filters.to_params())
            .await?
            .parse()
    }

    /// Search photos by query, returning the requested page in order.
    pub async fn search<T: AsRef<str>>(
        client: &Client,
        query: T,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Photo>> {
        let params = query_params!(
            "query" => query.as_ref(),
            "page" => page,
            "per_page" => per_page,
        );

        client.get("/photos/search", params).await?.parse()
    }

    /// List photos, one page at a time.
    pub async fn all(client: &Client, page: u32, per_page: u32) -> Result<Vec<Photo>> {
        let params = query_params!(
            "page" => page,
            "per_page" => per_page,
        );

        client.get("/photos", params).await?.parse()
    }

    /// Upload the image at `filepath`, returning the freshly created photo
    /// with its `user` set to the authenticated account.
    ///
    /// Requires a session established with
    /// [`authorize`](crate::client::Client::authorize); without one the
    /// upload fails before any request leaves the client.
    pub async fn create<P: AsRef<Path>>(client: &Client, filepath: P) -> Result<Photo> {
        if client.bearer_token().is_none() {
            return Err(Error::Api {
                status: StatusCode::UNAUTHORIZED,
                message: "Bearer token required to upload photos".to_string(),
            });
        }

        let filepath = filepath.as_ref();
        let content = tokio::fs::read(filepath).await?;
        let file_name = filepath
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        let form = MultipartForm::new().file("photo".to_string(), file_name, content);

        client
            .post_multipart("/photos", Params::new(), form)
            .await?
            .parse()
    }

    /// Download the image itself at the requested quality.
    ///
    /// Hits the download-tracking endpoint first, then fetches the raw image
    /// URL as PNG, constrained to `Quality::Custom` dimensions when asked.
    pub async fn download(&self, client: &Client, quality: Quality) -> Result<Bytes> {
        client
            .get_absolute(&self.links.download_location, Params::new())
            .await?
            .error_for_status()?;

        let mut params = query_params!(
            "fm" => "png",
        );

        if let Quality::Custom(width, height) = quality {
            params.extend(query_params!(
                "w" => width,
                "h" => height,
                "fit" => "min",
            ));
        }

        let response = client
            .get_absolute(&self.urls.raw, params)
            .await?
            .error_for_status()?;

        Ok(response.body)
    }
}
