//! Contract-level properties of `interpret`: every extracted filter
//! matches its declared shape and range, first-match-wins semantics hold
//! per field, and interpretation is a pure function of the prompt.

use datafinder_common::{DateDirection, FileType, SizeComparator};
use datafinder_interpreter::{init, interpret};

fn setup() {
    init().expect("language model must load");
}

#[test]
fn size_and_file_type_prompt() {
    setup();
    let (keywords, filters) = interpret("Find datasets with more than 5000 rows and csv format");

    let size = filters.size.expect("size filter");
    assert_eq!(size.comparator, SizeComparator::MoreThan);
    assert_eq!(size.rows, 5000);
    assert_eq!(filters.file_type, Some(FileType::Csv));
    assert!(filters.date.is_none());
    assert!(filters.columns.is_none());

    assert_eq!(keywords, "datasets rows csv format");
}

#[test]
fn date_and_columns_prompt() {
    setup();
    let (keywords, filters) = interpret("climate data after 2015 with 10 columns");

    let date = filters.date.expect("date filter");
    assert_eq!(date.direction, DateDirection::After);
    assert_eq!(date.year, "2015");
    let columns = filters.columns.expect("column filter");
    assert_eq!(columns.columns, 10);
    assert!(filters.file_type.is_none());
    assert!(filters.size.is_none());

    assert_eq!(keywords, "climate data columns");
}

#[test]
fn empty_prompt_degrades_to_nothing() {
    setup();
    let (keywords, filters) = interpret("");
    assert_eq!(keywords, "");
    assert!(filters.is_empty());
}

#[test]
fn filter_shapes_and_ranges_hold_across_prompts() {
    setup();
    let prompts = [
        "Find datasets with more than 5000 rows and csv format",
        "climate data after 2015 with 10 columns",
        "xlsx census tables before 1999 under 100000 rows",
        "soccer match results, 999 columns, above 100 rows",
        "no filters here at all",
        "",
    ];

    for prompt in prompts {
        let (_, filters) = interpret(prompt);

        if let Some(date) = &filters.date {
            assert_eq!(date.year.len(), 4, "{prompt}");
            assert!(date.year.chars().all(|c| c.is_ascii_digit()), "{prompt}");
        }
        if let Some(size) = &filters.size {
            assert!((100..=9_999_999).contains(&size.rows), "{prompt}");
        }
        if let Some(columns) = &filters.columns {
            assert!((1..=999).contains(&columns.columns), "{prompt}");
        }
    }
}

#[test]
fn file_type_scan_order_wins_regardless_of_prompt_position() {
    setup();
    // Every candidate appears; the scan order, not prompt order, decides.
    let (_, filters) = interpret("xml xlsx xls json csv");
    assert_eq!(filters.file_type, Some(FileType::Csv));

    let (_, filters) = interpret("xml before json");
    assert_eq!(filters.file_type, Some(FileType::Json));
}

#[test]
fn interpret_is_idempotent() {
    setup();
    let prompt = "Titanic survival data in csv with more than 1000 rows";
    let first = interpret(prompt);
    let second = interpret(prompt);
    assert_eq!(first, second);
}
