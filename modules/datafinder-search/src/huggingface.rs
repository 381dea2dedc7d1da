use async_trait::async_trait;
use datafinder_common::{DatasetResult, FilterSet, Source};
use hfhub_client::{HfDataset, HfHubClient};

use crate::{Catalog, RESULT_CAP};

/// Hugging Face adapter. Sends only the keyword string; applies no
/// filters at all, not even file type.
pub struct HuggingFaceCatalog {
    client: HfHubClient,
}

impl HuggingFaceCatalog {
    pub fn new(client: HfHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Catalog for HuggingFaceCatalog {
    fn source(&self) -> Source {
        Source::HuggingFace
    }

    async fn search(
        &self,
        keywords: &str,
        _filters: &FilterSet,
    ) -> anyhow::Result<Vec<DatasetResult>> {
        let hits = self.client.search_datasets(keywords).await?;
        let results = normalize_hits(hits);
        tracing::info!(count = results.len(), "Hugging Face search complete");
        Ok(results)
    }
}

fn normalize_hits(hits: Vec<HfDataset>) -> Vec<DatasetResult> {
    hits.into_iter().take(RESULT_CAP).map(map_hit).collect()
}

fn map_hit(hit: HfDataset) -> DatasetResult {
    let url = hit.url();
    let description = hit
        .card_data
        .and_then(|card| card.description)
        .unwrap_or_else(|| "No description".to_string());
    DatasetResult {
        source: Source::HuggingFace,
        title: hit.id,
        url,
        // Neither size nor download counts come back in this call shape.
        size: "Unknown".to_string(),
        downloads: "Unknown".to_string(),
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, description: Option<&str>) -> HfDataset {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "cardData": description.map(|d| serde_json::json!({"description": d})),
        }))
        .unwrap()
    }

    #[test]
    fn test_cap_applies_in_service_order() {
        let hits: Vec<HfDataset> = (0..15).map(|i| hit(&format!("org/ds{i}"), None)).collect();
        let results = normalize_hits(hits);
        assert_eq!(results.len(), RESULT_CAP);
        assert_eq!(results[0].title, "org/ds0");
    }

    #[test]
    fn test_map_hit_defaults() {
        let results = normalize_hits(vec![hit("glue", None)]);
        let result = &results[0];
        assert_eq!(result.source, Source::HuggingFace);
        assert_eq!(result.url, "https://huggingface.co/datasets/glue");
        assert_eq!(result.size, "Unknown");
        assert_eq!(result.downloads, "Unknown");
        assert_eq!(result.description, "No description");
    }

    #[test]
    fn test_card_without_description_falls_back() {
        let bare: HfDataset =
            serde_json::from_value(serde_json::json!({"id": "squad", "cardData": {}})).unwrap();
        let results = normalize_hits(vec![bare]);
        assert_eq!(results[0].description, "No description");
    }

    #[test]
    fn test_description_comes_from_card() {
        let results = normalize_hits(vec![hit("nasa/climate", Some("Daily readings"))]);
        assert_eq!(results[0].description, "Daily readings");
    }
}
