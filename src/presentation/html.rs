use std::fmt::Write as _;

use codestat_domain::{analytics::extension_rows, model::AggregationSnapshot};

use super::format::{format_count, format_timestamp};

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; margin: 20px; }
        .header { border-bottom: 2px solid #ccc; padding-bottom: 10px; margin-bottom: 20px; }
        .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; margin-bottom: 30px; }
        .stat-card { background: #f3f3f3; padding: 15px; border-radius: 5px; text-align: center; }
        .stat-number { font-size: 2em; font-weight: bold; color: #0066b8; }
        .stat-label { font-size: 0.9em; opacity: 0.8; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 10px; text-align: left; border-bottom: 1px solid #ccc; }
        th { background: #f3f3f3; font-weight: bold; }
        td.num { text-align: right; }"#;

/// Self-contained HTML report for one snapshot.
pub fn render_html(snapshot: &AggregationSnapshot) -> String {
    let mut rows = String::new();
    for row in extension_rows(snapshot) {
        let _ = write!(
            rows,
            "\n                <tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape_html(row.extension),
            format_count(row.bucket.file_count.value()),
            format_count(row.bucket.line_count.value()),
            row.bucket.byte_size.to_human(),
            row.share
        );
    }

    let title = escape_html(&snapshot.workspace_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Code statistics: {title}</title>
    <style>{STYLE}
    </style>
</head>
<body>
    <div class="header">
        <h1>Code statistics report</h1>
        <p><strong>Workspace:</strong> {title}</p>
        <p><strong>Analyzed at:</strong> {captured}</p>
    </div>

    <div class="summary">
        <div class="stat-card"><div class="stat-number">{files}</div><div class="stat-label">Files</div></div>
        <div class="stat-card"><div class="stat-number">{lines}</div><div class="stat-label">Lines of code</div></div>
        <div class="stat-card"><div class="stat-number">{size}</div><div class="stat-label">Total size</div></div>
        <div class="stat-card"><div class="stat-number">{types}</div><div class="stat-label">File types</div></div>
    </div>

    <h2>By file type</h2>
    <table>
        <thead>
            <tr><th>Type</th><th>Files</th><th>Lines</th><th>Size</th><th>Share</th></tr>
        </thead>
        <tbody>{rows}
        </tbody>
    </table>
</body>
</html>
"#,
        captured = escape_html(&format_timestamp(&snapshot.captured_at)),
        files = format_count(snapshot.total_files.value()),
        lines = format_count(snapshot.total_lines.value()),
        size = snapshot.total_bytes.to_human(),
        types = snapshot.extension_count(),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
