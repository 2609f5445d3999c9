//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print rows as a `{"success": true, "data": [...]}` document
pub fn print_json<T: Serialize>(rows: &[T]) -> serde_json::Result<()> {
    let output = json!({
        "success": true,
        "data": rows
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print a right-aligned text table
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("{}", "No data".yellow());
        return;
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .fold(header.len(), usize::max)
        })
        .collect();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{header:>width$}"))
        .collect();
    println!("{}", header_line.join("  ").bold());

    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("{}", separator.join("  "));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{value:>width$}"))
            .collect();
        println!("{}", cells.join("  "));
    }
}
