use serde::{Deserialize, Serialize};

use crate::client::{Client, query_params};
use crate::models::photo::Photo;
use crate::result::Result;
use crate::transport::Params;

/// A photographer profile. Fields beyond the declared ones are ignored when
/// parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub portfolio_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub total_likes: Option<u64>,
    pub total_photos: Option<u64>,
    pub profile_image: Option<ProfileImage>,
    pub links: Option<UserLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub small: String,
    pub medium: String,
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub photos: String,
    pub likes: Option<String>,
}

impl User {
    /// Fetch a single user by username.
    pub async fn find<T: AsRef<str>>(client: &Client, username: T) -> Result<User> {
        client
            .get(&format!("/users/{}", username.as_ref()), Params::new())
            .await?
            .parse()
    }

    /// List a user's photos, newest first, one page at a time.
    pub async fn photos<T: AsRef<str>>(
        client: &Client,
        username: T,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Photo>> {
        let params = query_params!(
            "page" => page,
            "per_page" => per_page,
        );

        client
            .get(&format!("/users/{}/photos", username.as_ref()), params)
            .await?
            .parse()
    }
}
