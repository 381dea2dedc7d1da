use serde::{Deserialize, Serialize};

// --- Catalogs ---

/// Which external catalog a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Kaggle,
    HuggingFace,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Kaggle => write!(f, "Kaggle"),
            Source::HuggingFace => write!(f, "HuggingFace"),
        }
    }
}

// --- Filters ---

/// Dataset file formats recognized in prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Csv,
    Json,
    Xls,
    Xlsx,
    Xml,
}

impl FileType {
    /// Fixed scan order. The first candidate found in a prompt wins,
    /// so "csv" beats "json" even when "json" appears earlier in the text.
    pub const CANDIDATES: [FileType; 5] = [
        FileType::Csv,
        FileType::Json,
        FileType::Xls,
        FileType::Xlsx,
        FileType::Xml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Csv => "csv",
            FileType::Json => "json",
            FileType::Xls => "xls",
            FileType::Xlsx => "xlsx",
            FileType::Xml => "xml",
        }
    }

    /// Case-insensitive match against a catalog's declared file type.
    pub fn matches(&self, declared: &str) -> bool {
        declared.eq_ignore_ascii_case(self.as_str())
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateDirection {
    After,
    Before,
}

impl DateDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateDirection::After => "after",
            DateDirection::Before => "before",
        }
    }
}

/// A "(after|before) YYYY" constraint. The year is kept as the matched
/// 4-digit string; nothing ever parses it into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    pub direction: DateDirection,
    pub year: String,
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction.as_str(), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeComparator {
    Above,
    MoreThan,
    Over,
    Below,
    Under,
    LessThan,
}

impl SizeComparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeComparator::Above => "above",
            SizeComparator::MoreThan => "more than",
            SizeComparator::Over => "over",
            SizeComparator::Below => "below",
            SizeComparator::Under => "under",
            SizeComparator::LessThan => "less than",
        }
    }

    pub fn from_phrase(phrase: &str) -> Option<Self> {
        match phrase {
            "above" => Some(SizeComparator::Above),
            "more than" => Some(SizeComparator::MoreThan),
            "over" => Some(SizeComparator::Over),
            "below" => Some(SizeComparator::Below),
            "under" => Some(SizeComparator::Under),
            "less than" => Some(SizeComparator::LessThan),
            _ => None,
        }
    }
}

/// Row-count constraint, e.g. "more than 5000 rows".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeFilter {
    pub comparator: SizeComparator,
    pub rows: u32,
}

impl std::fmt::Display for SizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} rows", self.comparator.as_str(), self.rows)
    }
}

/// Column-count constraint, e.g. "10 columns".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub columns: u32,
}

impl std::fmt::Display for ColumnFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} columns", self.columns)
    }
}

/// Structured constraints extracted from a prompt. Every field is always
/// present structurally; each is independently set or absent. At most one
/// value per field is recorded even when a prompt matches several times.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    pub file_type: Option<FileType>,
    pub date: Option<DateFilter>,
    pub size: Option<SizeFilter>,
    pub columns: Option<ColumnFilter>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.file_type.is_none()
            && self.date.is_none()
            && self.size.is_none()
            && self.columns.is_none()
    }

    /// (label, rendered value) pairs for the filters that are set,
    /// in the fixed display order used by the results page.
    pub fn display_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(ft) = &self.file_type {
            entries.push(("Filetype", ft.to_string()));
        }
        if let Some(date) = &self.date {
            entries.push(("Date", date.to_string()));
        }
        if let Some(size) = &self.size {
            entries.push(("Size", size.to_string()));
        }
        if let Some(columns) = &self.columns {
            entries.push(("Columns", columns.to_string()));
        }
        entries
    }
}

// --- Results ---

/// One normalized catalog hit. Lives only in the in-memory result list
/// for a single render pass; nothing persists across searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetResult {
    pub source: Source,
    pub title: String,
    pub url: String,
    pub size: String,
    pub downloads: String,
    pub description: String,
}
