//! Shared fixtures plus a canned-response transport for asserting on the
//! exact requests the library assembles.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::{Value, json};

use unsplash::{ApiRequest, ApiResponse, Result, Transport};

pub fn response(status: u16, body: &Value) -> ApiResponse {
    ApiResponse {
        status: StatusCode::from_u16(status).unwrap(),
        body: Bytes::from(body.to_string()),
    }
}

pub fn user_json(username: &str) -> Value {
    json!({
        "id": "pXhwzz1JtQU",
        "username": username,
        "name": "Gilbert Kane",
        "portfolio_url": "https://theylooklikeeggsorsomething.com/",
        "bio": "XO",
        "location": "Way out there",
        "total_likes": 5,
        "total_photos": 74,
        "profile_image": {
            "small": "https://images.unsplash.com/face-springmorning.jpg?h=32&w=32",
            "medium": "https://images.unsplash.com/face-springmorning.jpg?h=64&w=64",
            "large": "https://images.unsplash.com/face-springmorning.jpg?h=128&w=128"
        },
        "links": {
            "self": format!("https://api.unsplash.com/users/{username}"),
            "html": format!("https://unsplash.com/{username}"),
            "photos": format!("https://api.unsplash.com/users/{username}/photos"),
            "likes": format!("https://api.unsplash.com/users/{username}/likes")
        }
    })
}

pub fn category_json(id: u32, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "photo_count": 5296,
        "links": {
            "self": format!("https://api.unsplash.com/categories/{id}"),
            "photos": format!("https://api.unsplash.com/categories/{id}/photos")
        }
    })
}

pub fn photo_json(id: &str) -> Value {
    json!({
        "id": id,
        "width": 2448,
        "height": 3264,
        "color": "#6E633A",
        "likes": 24,
        "urls": {
            "raw": format!("https://images.unsplash.com/photo-{id}"),
            "full": format!("https://images.unsplash.com/photo-{id}?fm=jpg"),
            "regular": format!("https://images.unsplash.com/photo-{id}?w=1080"),
            "small": format!("https://images.unsplash.com/photo-{id}?w=400"),
            "thumb": format!("https://images.unsplash.com/photo-{id}?w=200")
        },
        "links": {
            "self": format!("https://api.unsplash.com/photos/{id}"),
            "html": format!("https://unsplash.com/photos/{id}"),
            "download": format!("https://unsplash.com/photos/{id}/download"),
            "download_location": format!("https://api.unsplash.com/photos/{id}/download")
        },
        "categories": [category_json(4, "Nature")],
        "user": user_json("poorkane")
    })
}

pub fn photo_list_json(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| photo_json(&format!("photo-{i}")))
            .collect(),
    )
}

/// Transport that replies with queued responses while recording every
/// request it is handed, in order.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: Mutex<Vec<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, status: u16, body: &Value) -> Self {
        self.responses.lock().unwrap().push(response(status, body));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                panic!("no canned response left for {} {}", request.method, request.url);
            }

            responses.remove(0)
        };

        self.requests.lock().unwrap().push(request);

        Ok(response)
    }
}
