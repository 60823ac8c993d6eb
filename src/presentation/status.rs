use codestat_domain::model::AggregationSnapshot;

use super::format::{format_count, format_timestamp};

pub const NOT_ANALYZED: &str = "not analyzed";

/// One-line summary: `"12,345 lines | 67 files"` or `"not analyzed"`.
pub fn status_line(latest: Option<&AggregationSnapshot>) -> String {
    match latest {
        Some(snapshot) => format!(
            "{} lines | {} files",
            format_count(snapshot.total_lines.value()),
            format_count(snapshot.total_files.value())
        ),
        None => NOT_ANALYZED.to_string(),
    }
}

/// Long form shown by `status --detail`.
pub fn status_detail(latest: Option<&AggregationSnapshot>) -> String {
    match latest {
        Some(snapshot) => format!(
            "Code statistics: {}\nTotal lines: {}\nTotal files: {}\nUpdated: {}",
            snapshot.workspace_name,
            format_count(snapshot.total_lines.value()),
            format_count(snapshot.total_files.value()),
            format_timestamp(&snapshot.captured_at)
        ),
        None => "Code statistics: not analyzed yet (run `codestat analyze`)".to_string(),
    }
}
