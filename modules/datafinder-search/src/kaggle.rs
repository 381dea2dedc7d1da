use async_trait::async_trait;
use datafinder_common::{DatasetResult, FileType, FilterSet, Source};
use kaggle_client::{KaggleClient, KaggleDataset};

use crate::{Catalog, RESULT_CAP};

/// Kaggle adapter. Only the keyword string reaches the remote query;
/// the file-type filter is applied as a local post-filter, and the
/// date/size/column filters are never applied at all.
pub struct KaggleCatalog {
    client: KaggleClient,
}

impl KaggleCatalog {
    pub fn new(client: KaggleClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Catalog for KaggleCatalog {
    fn source(&self) -> Source {
        Source::Kaggle
    }

    async fn search(
        &self,
        keywords: &str,
        filters: &FilterSet,
    ) -> anyhow::Result<Vec<DatasetResult>> {
        let hits = self.client.list_datasets(keywords).await?;
        let results = normalize_hits(hits, filters.file_type);
        tracing::info!(count = results.len(), "Kaggle search complete");
        Ok(results)
    }
}

/// Cap to the first [`RESULT_CAP`] hits in service order, then apply the
/// file-type post-filter. A filtered page can therefore hold fewer than
/// the cap; hits past the cap never backfill. A hit with no declared
/// file-type list is discarded when a file type is requested.
fn normalize_hits(hits: Vec<KaggleDataset>, file_type: Option<FileType>) -> Vec<DatasetResult> {
    hits.into_iter()
        .take(RESULT_CAP)
        .filter(|hit| match file_type {
            Some(wanted) => hit
                .file_types
                .as_ref()
                .is_some_and(|declared| declared.iter().any(|t| wanted.matches(t))),
            None => true,
        })
        .map(map_hit)
        .collect()
}

fn map_hit(hit: KaggleDataset) -> DatasetResult {
    let url = hit.url();
    DatasetResult {
        source: Source::Kaggle,
        title: hit.title,
        url,
        // The list endpoint does not expose dataset size.
        size: "Unknown".to_string(),
        downloads: hit
            .download_count
            .map(|c| c.to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        description: hit.subtitle.unwrap_or_else(|| "—".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(dataset_ref: &str, file_types: Option<Vec<&str>>) -> KaggleDataset {
        serde_json::from_value(serde_json::json!({
            "ref": dataset_ref,
            "title": format!("Dataset {dataset_ref}"),
            "fileTypes": file_types,
        }))
        .unwrap()
    }

    #[test]
    fn test_cap_applies_in_service_order() {
        let hits: Vec<KaggleDataset> = (0..12).map(|i| hit(&format!("u/d{i}"), None)).collect();
        let results = normalize_hits(hits, None);
        assert_eq!(results.len(), RESULT_CAP);
        assert_eq!(results[0].title, "Dataset u/d0");
        assert_eq!(results[9].title, "Dataset u/d9");
    }

    #[test]
    fn test_post_filter_runs_after_cap_without_backfill() {
        // Only hits past the cap declare csv; the filtered page is empty.
        let mut hits: Vec<KaggleDataset> =
            (0..10).map(|i| hit(&format!("u/d{i}"), Some(vec!["JSON"]))).collect();
        hits.push(hit("u/d10", Some(vec!["CSV"])));
        hits.push(hit("u/d11", Some(vec!["CSV"])));

        let results = normalize_hits(hits, Some(FileType::Csv));
        assert!(results.is_empty());
    }

    #[test]
    fn test_post_filter_matches_case_insensitively() {
        let hits = vec![
            hit("u/upper", Some(vec!["CSV"])),
            hit("u/lower", Some(vec!["csv"])),
            hit("u/other", Some(vec!["XML"])),
            hit("u/undeclared", None),
        ];
        let results = normalize_hits(hits, Some(FileType::Csv));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Dataset u/upper");
        assert_eq!(results[1].title, "Dataset u/lower");
    }

    #[test]
    fn test_no_file_type_keeps_undeclared_hits() {
        let hits = vec![hit("u/undeclared", None)];
        let results = normalize_hits(hits, None);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_map_hit_defaults() {
        let results = normalize_hits(vec![hit("u/bare", None)], None);
        let result = &results[0];
        assert_eq!(result.source, Source::Kaggle);
        assert_eq!(result.url, "https://www.kaggle.com/datasets/u/bare");
        assert_eq!(result.size, "Unknown");
        assert_eq!(result.downloads, "Unknown");
        assert_eq!(result.description, "—");
    }

    #[test]
    fn test_map_hit_uses_optional_fields_when_present() {
        let full: KaggleDataset = serde_json::from_value(serde_json::json!({
            "ref": "noaa/storms",
            "title": "Storm Events",
            "subtitle": "NOAA storm event records",
            "downloadCount": 4321,
            "fileTypes": ["CSV"],
        }))
        .unwrap();
        let results = normalize_hits(vec![full], Some(FileType::Csv));
        let result = &results[0];
        assert_eq!(result.downloads, "4321");
        assert_eq!(result.description, "NOAA storm event records");
    }
}
