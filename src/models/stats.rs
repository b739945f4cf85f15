use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::result::Result;
use crate::transport::Params;

/// Library-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub photos: u64,
    pub downloads: u64,
    pub views: Option<u64>,
    pub likes: Option<u64>,
}

impl Stats {
    /// Fetch the total counts across the whole library.
    pub async fn total(client: &Client) -> Result<Stats> {
        client.get("/stats/total", Params::new()).await?.parse()
    }
}
