use serde::{Deserialize, Serialize};

/// A single dataset hit from the Kaggle dataset list endpoint.
/// Only the fields this client consumes are modeled; the list call does
/// not expose dataset size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KaggleDataset {
    /// Owner-qualified slug, e.g. "heptapod/titanic".
    #[serde(rename = "ref")]
    pub dataset_ref: String,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(rename = "downloadCount")]
    pub download_count: Option<u64>,
    #[serde(rename = "fileTypes")]
    pub file_types: Option<Vec<String>>,
}

impl KaggleDataset {
    /// Catalog deep link for this dataset.
    pub fn url(&self) -> String {
        format!("https://www.kaggle.com/datasets/{}", self.dataset_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_hit() {
        let hit: KaggleDataset = serde_json::from_str(
            r#"{"ref": "heptapod/titanic", "title": "Titanic"}"#,
        )
        .unwrap();
        assert_eq!(hit.dataset_ref, "heptapod/titanic");
        assert!(hit.subtitle.is_none());
        assert!(hit.download_count.is_none());
        assert!(hit.file_types.is_none());
        assert_eq!(hit.url(), "https://www.kaggle.com/datasets/heptapod/titanic");
    }

    #[test]
    fn test_deserialize_full_hit() {
        let hit: KaggleDataset = serde_json::from_str(
            r#"{
                "ref": "noaa/storms",
                "title": "Storm Events",
                "subtitle": "NOAA storm event records",
                "downloadCount": 1234,
                "fileTypes": ["CSV", "JSON"],
                "usabilityRating": 0.88
            }"#,
        )
        .unwrap();
        assert_eq!(hit.download_count, Some(1234));
        assert_eq!(hit.file_types.as_deref(), Some(&["CSV".to_string(), "JSON".to_string()][..]));
    }
}
