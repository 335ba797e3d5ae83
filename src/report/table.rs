use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::http_probe::result::ProbeResult;

const HEADERS: [&str; 4] = ["URL", "Status", "Response Time (ms)", "Error"];
/// Caps for the padded columns. The error column is last and never cut.
const MAX_WIDTHS: [usize; 3] = [50, 6, 18];
const MISSING_STATUS: &str = "N/A";

/// Truncate or pad to exactly `width` display columns.
fn to_fixed_width(input: &str, width: usize) -> String {
    let (truncated, used) = input.unicode_truncate(width);
    format!("{truncated}{}", " ".repeat(width - used))
}

fn cells(result: &ProbeResult) -> [String; 4] {
    [
        result.url.clone(),
        result
            .status_code()
            .map(|code| code.to_string())
            .unwrap_or_else(|| MISSING_STATUS.to_string()),
        format!("{:.2}", result.elapsed_ms),
        // Keep each row on one line.
        result.error().unwrap_or_default().replace('\n', " "),
    ]
}

fn format_row(cells: &[String; 4], widths: &[usize; 3]) -> String {
    let mut line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| to_fixed_width(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ");
    line.push_str(" | ");
    line.push_str(&cells[3]);
    line
}

/// Render results as a plain-text table, one row per result in order.
pub fn render_table(report: &[ProbeResult]) -> String {
    let rows: Vec<[String; 4]> = report.iter().map(cells).collect();

    let mut widths = [HEADERS[0], HEADERS[1], HEADERS[2]].map(|h| h.width());
    for row in &rows {
        for (i, width) in widths.iter_mut().enumerate() {
            *width = (*width).max(row[i].width().min(MAX_WIDTHS[i]));
        }
    }

    let header = HEADERS.map(str::to_string);
    let mut lines = vec![format_row(&header, &widths)];
    lines.push(
        widths
            .iter()
            .copied()
            .chain([HEADERS[3].len()])
            .map(|w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}
