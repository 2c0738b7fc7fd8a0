#![allow(dead_code)]

use colored::Colorize;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.len()).dimmed());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

// ============================================================================
// Tables
// ============================================================================

/// Print a column-aligned table
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = column_widths(headers, rows);

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    println!("  {}", format_row(&header_cells, &widths).dimmed());
    for row in rows {
        println!("  {}", format_row(row, &widths));
    }
}

/// Widest cell per column, header included
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}

/// Left-align cells into columns separated by two spaces
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_include_header() {
        let widths = column_widths(
            &["ID", "NAME"],
            &[vec!["1".to_string(), "edge-cache".to_string()]],
        );
        assert_eq!(widths, vec![2, 10]);
    }

    #[test]
    fn test_column_widths_grow_with_cells() {
        let widths = column_widths(
            &["ID", "NAME"],
            &[
                vec!["100".to_string(), "a".to_string()],
                vec!["2".to_string(), "sessions".to_string()],
            ],
        );
        assert_eq!(widths, vec![3, 8]);
    }

    #[test]
    fn test_format_row_aligns_columns() {
        let row = vec!["1".to_string(), "edge".to_string(), "redis".to_string()];
        let formatted = format_row(&row, &[3, 8, 5]);
        assert_eq!(formatted, "1    edge      redis");
    }

    #[test]
    fn test_format_row_trims_trailing_padding() {
        let row = vec!["1".to_string(), "a".to_string()];
        let formatted = format_row(&row, &[2, 8]);
        assert_eq!(formatted, "1   a");
    }
}
