pub mod error;
pub mod types;

pub use error::{KaggleError, Result};
pub use types::KaggleDataset;

const BASE_URL: &str = "https://www.kaggle.com/api/v1";

/// Kaggle REST API client. Credentials are passed in explicitly; nothing
/// is read from the process environment here.
pub struct KaggleClient {
    client: reqwest::Client,
    username: String,
    key: String,
}

impl KaggleClient {
    pub fn new(username: String, key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            username,
            key,
        }
    }

    /// Search the dataset catalog. Sends only the free-text query; the
    /// list endpoint takes no structured constraints in this call shape.
    pub async fn list_datasets(&self, search: &str) -> Result<Vec<KaggleDataset>> {
        let url = format!("{}/datasets/list", BASE_URL);
        let resp = self
            .client
            .get(&url)
            .query(&[("search", search)])
            .basic_auth(&self.username, Some(&self.key))
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            let body = resp.text().await.unwrap_or_default();
            return Err(KaggleError::Auth {
                status: status.as_u16(),
                message: body,
            });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(KaggleError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let hits: Vec<KaggleDataset> = resp.json().await?;
        tracing::debug!(count = hits.len(), search, "Kaggle dataset list fetched");
        Ok(hits)
    }
}
