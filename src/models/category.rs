use serde::{Deserialize, Serialize};

use crate::client::{Client, query_params};
use crate::models::photo::Photo;
use crate::result::Result;
use crate::transport::Params;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub photo_count: Option<u64>,
    pub links: Option<CategoryLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub photos: String,
}

impl Category {
    /// List every category.
    pub async fn all(client: &Client) -> Result<Vec<Category>> {
        client.get("/categories", Params::new()).await?.parse()
    }

    /// Fetch a single category by id.
    pub async fn find(client: &Client, id: u32) -> Result<Category> {
        client
            .get(&format!("/categories/{id}"), Params::new())
            .await?
            .parse()
    }

    /// List a category's photos, one page at a time.
    pub async fn photos(
        client: &Client,
        id: u32,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Photo>> {
        let params = query_params!(
            "page" => page,
            "per_page" => per_page,
        );

        client
            .get(&format!("/categories/{id}/photos"), params)
            .await?
            .parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_category() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": 4,
            "title": "Nature",
            "photo_count": 24783,
            "links": {
                "self": "https://api.unsplash.com/categories/4",
                "photos": "https://api.unsplash.com/categories/4/photos"
            }
        }))
        .unwrap();

        assert_eq!(category.id, 4);
        assert_eq!(category.title, "Nature");
        assert_eq!(category.photo_count, Some(24783));
    }
}
