pub mod error;
pub mod types;

pub use error::{HfHubError, Result};
pub use types::{CardData, HfDataset};

const BASE_URL: &str = "https://huggingface.co/api";

/// Hugging Face Hub API client. Dataset search is anonymous; no token
/// is required for public repos.
pub struct HfHubClient {
    client: reqwest::Client,
}

impl HfHubClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Search the dataset hub. `full=true` asks the Hub to include card
    /// metadata, which carries the description when one exists.
    pub async fn search_datasets(&self, search: &str) -> Result<Vec<HfDataset>> {
        let url = format!("{}/datasets", BASE_URL);
        let resp = self
            .client
            .get(&url)
            .query(&[("search", search), ("full", "true")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HfHubError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let hits: Vec<HfDataset> = resp.json().await?;
        tracing::debug!(count = hits.len(), search, "Hub dataset search fetched");
        Ok(hits)
    }
}

impl Default for HfHubClient {
    fn default() -> Self {
        Self::new()
    }
}
