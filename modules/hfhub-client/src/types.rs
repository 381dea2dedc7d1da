use serde::{Deserialize, Serialize};

/// A single dataset hit from the Hub search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfDataset {
    /// Repo id, e.g. "nasa/climate-observations".
    pub id: String,
    #[serde(rename = "cardData")]
    pub card_data: Option<CardData>,
}

/// The slice of a dataset card this client reads. Cards are free-form
/// YAML upstream; everything except the description is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardData {
    pub description: Option<String>,
}

impl HfDataset {
    /// Catalog deep link for this dataset.
    pub fn url(&self) -> String {
        format!("https://huggingface.co/datasets/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_card() {
        let hit: HfDataset = serde_json::from_str(r#"{"id": "glue"}"#).unwrap();
        assert!(hit.card_data.is_none());
        assert_eq!(hit.url(), "https://huggingface.co/datasets/glue");
    }

    #[test]
    fn test_deserialize_card_with_extra_fields() {
        let hit: HfDataset = serde_json::from_str(
            r#"{
                "id": "nasa/climate",
                "cardData": {"description": "Daily readings", "license": "mit"}
            }"#,
        )
        .unwrap();
        let card = hit.card_data.unwrap();
        assert_eq!(card.description.as_deref(), Some("Daily readings"));
    }

    #[test]
    fn test_deserialize_card_without_description() {
        let hit: HfDataset =
            serde_json::from_str(r#"{"id": "squad", "cardData": {"license": "cc"}}"#).unwrap();
        assert!(hit.card_data.unwrap().description.is_none());
    }
}
