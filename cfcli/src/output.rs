//! Colorized console messages and plain-text table rendering.
//!
//! Tables are rendered by hand with columns padded to the widest cell.
//! Command handlers write the results to stdout; messages carry their own
//! trailing newline.

use std::fmt::Display;

use cfcli_client::ZoneRecord;
use colored::Colorize;

pub const RECORD_HEADERS: [&str; 8] = [
    "ID", "Type", "Name", "Content", "Proxied", "TTL", "Tags", "Comment",
];

pub fn success_message(message: &str) -> String {
    format!("{}\n", format!("[success]: {message}").on_bright_green())
}

pub fn error_message(err: &dyn Display) -> String {
    format!("{}\n", format!("[error]: {err}").on_red())
}

pub fn warning_message(message: &str) -> String {
    format!("{}\n", format!("[warning]: {message}").on_bright_yellow())
}

/// Minimal aligned-column table.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with a header separator, columns padded to the widest cell.
    #[must_use]
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        let mut out = String::new();
        render_line(&mut out, &self.headers, &widths);
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        render_line(&mut out, &separator, &widths);
        for row in &self.rows {
            render_line(&mut out, row, &widths);
        }
        out
    }
}

fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map_or("", String::as_str);
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// The standard row shape for a DNS record listing.
#[must_use]
pub fn record_row(record: &ZoneRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.record_type.clone(),
        record.name.clone(),
        record.content.clone(),
        record.proxied.to_string(),
        record.ttl.to_string(),
        record.tags.join(","),
        record.comment.clone(),
    ]
}

/// A full table for a slice of records.
#[must_use]
pub fn record_table(records: &[ZoneRecord]) -> String {
    let mut table = Table::new(&RECORD_HEADERS);
    for record in records {
        table.add_row(record_row(record));
    }
    table.render()
}
