//! Client library for the Unsplash REST API.
//!
//! All state lives in an explicit [`Client`] built from a [`Config`]; there
//! is no global configuration. Resource types ([`Photo`], [`User`],
//! [`Category`], [`Stats`]) carry the operations that return them, and every
//! response maps onto a declared schema.
//!
//! ```no_run
//! use unsplash::{Client, Config, Photo, RandomFilters};
//!
//! async fn run() -> unsplash::Result<()> {
//!     let client = Client::new(Config::new("your-access-key"))?;
//!
//!     let photo = Photo::find(&client, "tAKXap853rY").await?;
//!     println!("{} by {}", photo.id, photo.user.username);
//!
//!     let random = Photo::random(&client, &RandomFilters::default()).await?;
//!     println!("{}", random.urls.regular);
//!
//!     Ok(())
//! }
//! ```
//!
//! The HTTP layer sits behind the [`Transport`] trait, so tests can swap in
//! a fake and assert on the exact requests the library builds.

pub mod client;
pub mod error;
pub mod models;
pub mod result;
pub mod transport;

pub use client::{Client, Config};
pub use error::Error;
pub use models::{
    Category, CategoryLinks, Photo, PhotoLinks, PhotoUrls, ProfileImage, Quality, RandomFilters,
    Stats, User, UserLinks,
};
pub use result::Result;
pub use transport::{
    ApiRequest, ApiResponse, FilePart, HttpTransport, MultipartForm, Params, RequestBody, Transport,
};
