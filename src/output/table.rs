//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Message printed instead of an empty table
pub const EMPTY_RESULTS: &str = "No results found.";

/// Format data as a bordered table for humans
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format data as a borderless table, one line per row, for scripts
pub fn format_plain_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let mut table = Table::new(data);
    table.with(Style::blank());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct OrgRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    fn rows() -> Vec<OrgRow> {
        vec![
            OrgRow {
                id: "0a1b2c3d4e5f6789".to_string(),
                name: "acme".to_string(),
            },
            OrgRow {
                id: "1b2c3d4e5f67890a".to_string(),
                name: "globex".to_string(),
            },
        ]
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<OrgRow> = vec![];
        assert_eq!(format_table(&items), EMPTY_RESULTS);
        assert_eq!(format_plain_table(&items), EMPTY_RESULTS);
    }

    #[test]
    fn test_format_table_rows_and_rounded_style() {
        let result = format_table(&rows());

        assert!(result.contains("ID"));
        assert!(result.contains("acme"));
        assert!(result.contains("globex"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_plain_table_one_line_per_row() {
        let result = format_plain_table(&rows());

        assert!(!result.contains("╭"));
        let acme_lines = result.lines().filter(|l| l.contains("acme")).count();
        assert_eq!(acme_lines, 1);
        assert_eq!(result.lines().filter(|l| !l.trim().is_empty()).count(), 3);
    }
}
