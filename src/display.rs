use crate::config::OutputStyle;
use crate::parser::DisplayRecord;
use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::fmt::Write as _;

/// Renders search results in the chosen style.
pub fn render_records(
    records: &[DisplayRecord],
    style: OutputStyle,
    color: bool,
) -> Result<String, serde_json::Error> {
    match style {
        OutputStyle::Text => Ok(render_text(records, color)),
        OutputStyle::Json => render_json(records),
        OutputStyle::Table => Ok(render_table(records)),
    }
}

/// One line per record:
/// `{date} {level} sid:{sid} bid:{bid} rid:{rid} message:{message}`
pub fn render_text(records: &[DisplayRecord], color: bool) -> String {
    let mut out = String::new();
    for record in records {
        if color {
            let _ = writeln!(
                out,
                "{} {} sid:{} bid:{} rid:{} message:{}",
                record.timestamp.dimmed(),
                paint_level(&record.level),
                record.session_id,
                record.business_id,
                record.request_id,
                record.message
            );
        } else {
            let _ = writeln!(out, "{record}");
        }
    }
    out
}

pub fn render_json(records: &[DisplayRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

pub fn render_table(records: &[DisplayRecord]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Timestamp",
            "Level",
            "Session",
            "Business",
            "Request",
            "Message",
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.timestamp),
            Cell::new(&record.level),
            Cell::new(&record.session_id),
            Cell::new(&record.business_id),
            Cell::new(&record.request_id),
            Cell::new(&record.message),
        ]);
    }

    format!("{table}\n")
}

fn paint_level(level: &str) -> ColoredString {
    match level {
        "ERROR" => level.red().bold(),
        "WARN" => level.yellow(),
        "INFO" => level.green(),
        "DEBUG" => level.blue(),
        _ => level.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DisplayRecord> {
        vec![DisplayRecord {
            timestamp: "2012-09-13 16:04:22".to_string(),
            level: "DEBUG".to_string(),
            session_id: "34523".to_string(),
            business_id: "1329".to_string(),
            request_id: "65d33".to_string(),
            message: "Starting new session".to_string(),
        }]
    }

    #[test]
    fn test_plain_text_template() {
        assert_eq!(
            render_text(&sample(), false),
            "2012-09-13 16:04:22 DEBUG sid:34523 bid:1329 rid:65d33 message:Starting new session\n"
        );
    }

    #[test]
    fn test_json_is_an_array_of_records() {
        let json = render_json(&sample()).unwrap();
        let parsed: Vec<DisplayRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_table_contains_header_and_values() {
        let table = render_table(&sample());
        assert!(table.contains("Timestamp"));
        assert!(table.contains("65d33"));
    }

    #[test]
    fn test_empty_results_render_empty_text() {
        assert_eq!(render_text(&[], true), "");
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
