//! Terminal renderers for reports: charts as text, message lists with local timestamps.

use std::io::{self, Write};

use analysis::{Chart, ChartKind, MessageList, Report, Summary};
use chrono::{DateTime, Local, Utc};

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 32;

/// Local-time rendering of a UTC instant, `-` when there is none.
pub fn format_datetime(at: Option<DateTime<Utc>>) -> String {
    at.map(|utc| {
        utc.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    })
    .unwrap_or_else(|| "-".to_string())
}

/// Same as [`format_datetime`] for the epoch-millisecond bounds kept in a [`Summary`].
pub fn format_timestamp(timestamp_ms: Option<i64>) -> String {
    format_datetime(timestamp_ms.and_then(DateTime::from_timestamp_millis))
}

pub fn render_report<W: Write>(out: &mut W, source: &str, report: &Report) -> io::Result<()> {
    writeln!(out, "== {} ==", source)?;
    render_summary(out, &report.summary)?;
    writeln!(out)?;
    render_chart(out, &report.sender_chart)?;
    writeln!(out)?;
    render_chart(out, &report.message_chart)?;
    writeln!(out)?;
    render_message_list(out, &report.earliest)?;
    writeln!(out)?;
    render_message_list(out, &report.latest)?;
    Ok(())
}

/// Writes the report as one JSON line, so several reports form a JSON Lines stream.
pub fn render_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)
}

pub fn render_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Messages:   {}", summary.total_messages)?;
    writeln!(out, "Senders:    {}", summary.unique_senders)?;
    writeln!(out, "With time:  {}", summary.timestamped_messages)?;
    writeln!(out, "First:      {}", format_timestamp(summary.first_timestamp_ms))?;
    writeln!(out, "Last:       {}", format_timestamp(summary.last_timestamp_ms))
}

pub fn render_chart<W: Write>(out: &mut W, chart: &Chart) -> io::Result<()> {
    writeln!(out, "{}", chart.title)?;
    if chart.is_empty() {
        return writeln!(out, "  (no data)");
    }

    let max = chart.data.iter().map(|d| d.value).max().unwrap_or(0).max(1);
    for (rank, datum) in chart.data.iter().enumerate() {
        let label = truncate(&datum.label, LABEL_WIDTH);
        match chart.kind {
            ChartKind::Pie => writeln!(
                out,
                "  {:>2}. {:<width$} {:>6} {:>6.1}%  {}",
                rank + 1,
                label,
                datum.value,
                datum.share * 100.0,
                datum.color,
                width = LABEL_WIDTH
            )?,
            ChartKind::Bar => {
                let len = (datum.value as usize * BAR_WIDTH).div_ceil(max as usize);
                writeln!(
                    out,
                    "  {:>2}. {:<width$} {} {}  {}",
                    rank + 1,
                    label,
                    "#".repeat(len),
                    datum.value,
                    datum.color,
                    width = LABEL_WIDTH
                )?
            }
        }
    }
    Ok(())
}

pub fn render_message_list<W: Write>(out: &mut W, list: &MessageList) -> io::Result<()> {
    writeln!(out, "{}", list.title)?;
    if list.is_empty() {
        return writeln!(out, "  No messages to display");
    }
    for message in &list.messages {
        writeln!(
            out,
            "  [{}] {}: {}",
            format_datetime(message.sent_at()),
            message.sender_name(),
            message.content().replace('\n', " ")
        )?;
    }
    Ok(())
}

fn truncate(label: &str, width: usize) -> String {
    let single_line = label.replace('\n', " ");
    if single_line.chars().count() <= width {
        single_line
    } else {
        let head: String = single_line.chars().take(width - 1).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::{build_report, load_pipeline, ReportOptions};

    fn rendered(report: &Report) -> String {
        let mut buf = Vec::new();
        render_report(&mut buf, "test.json", report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_report_degrades() {
        let data = load_pipeline(br#"{"messages": []}"#).unwrap();
        let text = rendered(&build_report(&data, &ReportOptions::default()));

        assert!(text.contains("== test.json =="));
        assert!(text.contains("(no data)"));
        assert_eq!(text.matches("No messages to display").count(), 2);
        assert!(text.contains("First:      -"));
    }

    #[test]
    fn test_report_lists_rankings_in_order() {
        let data = load_pipeline(
            br#"{"messages": [
                {"sender_name": "A", "content": "hi", "timestamp_ms": 100},
                {"sender_name": "B", "content": "hi", "timestamp_ms": 200},
                {"sender_name": "A", "content": "bye", "timestamp_ms": 300}
            ]}"#,
        )
        .unwrap();
        let text = rendered(&build_report(&data, &ReportOptions::default()));

        let a = text.find(" 1. A").expect("A ranked first");
        let b = text.find(" 2. B").expect("B ranked second");
        assert!(a < b);
        assert!(text.contains("66.7%"));
        assert!(text.contains(": hi"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let data = load_pipeline(br#"{"messages": [{"sender_name": "A", "content": "x"}]}"#)
            .unwrap();
        let mut buf = Vec::new();
        render_json(&mut buf, &build_report(&data, &ReportOptions::default())).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["summary"]["total_messages"], 1);
        assert_eq!(value["top_senders"][0]["label"], "A");
        assert_eq!(value["sender_chart"]["kind"], "pie");
    }

    #[test]
    fn test_json_output_is_one_line() {
        let data = load_pipeline(
            br#"{"messages": [{"sender_name": "A", "content": "x\ny", "timestamp_ms": 5}]}"#,
        )
        .unwrap();
        let mut buf = Vec::new();
        render_json(&mut buf, &build_report(&data, &ReportOptions::default())).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_message_list_uses_message_time() {
        let data = load_pipeline(
            br#"{"messages": [
                {"sender_name": "A", "content": "dated", "timestamp_ms": 0},
                {"sender_name": "B", "content": "undated"}
            ]}"#,
        )
        .unwrap();
        let list = MessageList {
            title: "All".to_string(),
            messages: data.all_messages().into_iter().cloned().collect(),
        };
        let mut buf = Vec::new();
        render_message_list(&mut buf, &list).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let epoch = format_datetime(DateTime::from_timestamp_millis(0));
        assert!(text.contains(&format!("[{epoch}] A: dated")));
        assert!(text.contains("[-] B: undated"));
    }

    #[test]
    fn test_format_missing_timestamp() {
        assert_eq!(format_timestamp(None), "-");
        assert_ne!(format_timestamp(Some(0)), "-");
    }

    #[test]
    fn test_truncate_long_label() {
        let long = "x".repeat(50);
        assert_eq!(truncate(&long, 10).chars().count(), 10);
        assert_eq!(truncate("short", 10), "short");
    }
}
