//! 表示層: ステータス行、テキスト表、HTML/JSON レポート

pub mod format;
pub mod html;
pub mod json;
pub mod status;
pub mod table;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use codestat_domain::model::AggregationSnapshot;
use codestat_shared_kernel::Result;

pub use format::{format_count, format_number};
pub use html::{escape_html, render_html};
pub use status::{status_detail, status_line};
pub use table::{render_history, render_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Text,
    Json,
}

pub fn render_report(snapshot: &AggregationSnapshot, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Html => Ok(render_html(snapshot)),
        ReportFormat::Text => Ok(render_text(snapshot)),
        ReportFormat::Json => json::render_json(snapshot),
    }
}
