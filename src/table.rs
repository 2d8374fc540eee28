//! Plain-text rendering of the comparison table.

use searcher::{Algorithm, SearchReport};

const HEADERS: [&str; 5] = ["Algorithm", "Path", "Steps", "Cost", "Expanded"];

/// Render the aggregated reports as an aligned text table, one row per
/// strategy. Cells that do not apply (no path, or a strategy that does
/// not account cost) show a dash.
pub fn render(results: &[(Algorithm, SearchReport<String>)]) -> String {
    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|(algorithm, report)| row(algorithm, report))
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &headers, &widths);

    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rules, &widths);

    for cells in &rows {
        push_row(&mut out, cells, &widths);
    }
    out
}

fn row(algorithm: &Algorithm, report: &SearchReport<String>) -> [String; 5] {
    let path = match &report.path {
        Some(path) => path.to_string(),
        None => String::from("no path found"),
    };
    let steps = match report.steps() {
        Some(steps) => steps.to_string(),
        None => String::from("-"),
    };
    let cost = match report.cost {
        Some(cost) => cost.to_string(),
        None => String::from("-"),
    };
    [
        algorithm.to_string(),
        path,
        steps,
        cost,
        report.expanded.to_string(),
    ]
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell, width = widths[i]));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
