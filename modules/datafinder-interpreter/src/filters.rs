//! Filter extraction: a fixed bank of patterns scanned over the
//! lowercased prompt. First match wins per field; absence of a match
//! leaves the field unset, never an error.

use regex::Regex;
use std::sync::LazyLock;

use datafinder_common::{
    ColumnFilter, DateDirection, DateFilter, FileType, FilterSet, SizeComparator, SizeFilter,
};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(after|before)\s*(\d{4})").unwrap());

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(above|more than|over|below|under|less than)\s*(\d{3,7})\s*rows?").unwrap()
});

static COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,3})\s*columns?").unwrap());

/// Extract all four filters from a prompt. Each field is scanned
/// independently over the lowercased text.
pub fn extract_filters(prompt: &str) -> FilterSet {
    let lower = prompt.to_lowercase();

    FilterSet {
        file_type: scan_file_type(&lower),
        date: scan_date(&lower),
        size: scan_size(&lower),
        columns: scan_columns(&lower),
    }
}

/// Candidates are tried in their fixed order; the first one found as a
/// substring wins. Word boundaries are intentionally not enforced, so a
/// candidate can match inside a larger word ("statistics.csv").
fn scan_file_type(lower: &str) -> Option<FileType> {
    FileType::CANDIDATES
        .iter()
        .copied()
        .find(|candidate| lower.contains(candidate.as_str()))
}

fn scan_date(lower: &str) -> Option<DateFilter> {
    let caps = DATE_RE.captures(lower)?;
    let direction = match &caps[1] {
        "after" => DateDirection::After,
        _ => DateDirection::Before,
    };
    Some(DateFilter {
        direction,
        year: caps[2].to_string(),
    })
}

fn scan_size(lower: &str) -> Option<SizeFilter> {
    let caps = SIZE_RE.captures(lower)?;
    let comparator = SizeComparator::from_phrase(&caps[1])?;
    let rows = caps[2].parse().ok()?;
    Some(SizeFilter { comparator, rows })
}

fn scan_columns(lower: &str) -> Option<ColumnFilter> {
    let caps = COLUMN_RE.captures(lower)?;
    let columns = caps[1].parse().ok()?;
    Some(ColumnFilter { columns })
}
