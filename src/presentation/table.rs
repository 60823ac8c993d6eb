use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use codestat_domain::{analytics::extension_rows, model::AggregationSnapshot};

use super::format::{format_count, format_timestamp};

fn right(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).set_alignment(CellAlignment::Right)
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header.iter().map(|h| Cell::new(*h)).collect::<Vec<_>>());
    table
}

/// Terminal rendering of a snapshot: summary lines plus the per-extension table.
pub fn render_text(snapshot: &AggregationSnapshot) -> String {
    let mut table = new_table(&["TYPE", "FILES", "LINES", "SIZE", "SHARE"]);
    for row in extension_rows(snapshot) {
        table.add_row(vec![
            Cell::new(row.extension),
            right(format_count(row.bucket.file_count.value())),
            right(format_count(row.bucket.line_count.value())),
            right(row.bucket.byte_size.to_human()),
            right(row.share.to_string()),
        ]);
    }

    format!(
        "Workspace: {}\nAnalyzed:  {}\nFiles: {}  Lines: {}  Size: {}  Types: {}\n\n{table}\n",
        snapshot.workspace_name,
        format_timestamp(&snapshot.captured_at),
        format_count(snapshot.total_files.value()),
        format_count(snapshot.total_lines.value()),
        snapshot.total_bytes.to_human(),
        snapshot.extension_count(),
    )
}

/// Most-recent-first listing used by `history`.
pub fn render_history(snapshots: &[AggregationSnapshot]) -> String {
    let mut table = new_table(&["#", "ANALYZED", "WORKSPACE", "FILES", "LINES", "SIZE"]);
    for (i, snapshot) in snapshots.iter().enumerate() {
        table.add_row(vec![
            right((i + 1).to_string()),
            Cell::new(format_timestamp(&snapshot.captured_at)),
            Cell::new(&snapshot.workspace_name),
            right(format_count(snapshot.total_files.value())),
            right(format_count(snapshot.total_lines.value())),
            right(snapshot.total_bytes.to_human()),
        ]);
    }
    format!("{table}\n")
}
