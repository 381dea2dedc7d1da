//! Catalog query adapters: one per external catalog, sharing the
//! [`Catalog`] contract. Each adapter sends only the keyword string to
//! its service, normalizes raw hits into [`DatasetResult`] records, and
//! caps output at [`RESULT_CAP`] per source. Filter application is
//! deliberately partial: Kaggle applies the file-type post-filter
//! locally and ignores the rest; Hugging Face applies none.

pub mod huggingface;
pub mod kaggle;

pub use huggingface::HuggingFaceCatalog;
pub use kaggle::KaggleCatalog;

use async_trait::async_trait;
use datafinder_common::{DatasetResult, FilterSet, Source};

/// Per-source result cap, applied in service order before any post-filter.
pub const RESULT_CAP: usize = 10;

#[async_trait]
pub trait Catalog: Send + Sync {
    fn source(&self) -> Source;

    /// Run one search. Underlying client errors propagate unmodified;
    /// there are no retries and no timeouts at this layer.
    async fn search(&self, keywords: &str, filters: &FilterSet)
        -> anyhow::Result<Vec<DatasetResult>>;
}
