//! Plain-text rendering for command output.

use std::path::Path;

use screener_core::pipeline::ScreeningReport;
use screener_records::Table;

/// Print the screening summary followed by the highlighted resume.
pub(crate) fn print_report(report: &ScreeningReport, log_path: &Path, preview: Option<&Path>) {
    let result = &report.result;

    println!();
    println!("  Resume:   {} ({})", report.document.filename, report.document.format);
    println!("  Email:    {}", report.contact.email_or_sentinel());
    println!("  Phone:    {}", report.contact.phone_or_sentinel());
    println!(
        "  Score:    {:.2}% ({}/{} skills)",
        result.rounded_score(),
        result.matched_count(),
        result.total
    );
    println!("  Matched:  {}", or_dash(&result.matched.join(", ")));
    println!("  Skills:   {}", or_dash(&report.skills.join(", ")));
    if report.logged {
        println!("  Logged:   {}", log_path.display());
    }
    if let Some(path) = preview {
        println!("  Preview:  {}", path.display());
    }
    println!("  Time:     {:.1}s", report.elapsed.as_secs_f64());
    println!();
    println!("{}", report.highlighted);
    println!();
}

/// Print the log as an aligned table.
pub(crate) fn print_table(table: &Table) {
    if table.rows.is_empty() {
        println!("No screenings logged yet. Run `screener screen` to begin.");
        return;
    }

    let widths = column_widths(table);
    println!("{}", format_row(&table.headers, &widths));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in &table.rows {
        println!("{}", format_row(row, &widths));
    }
}

fn column_widths(table: &Table) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(idx, width)| {
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
