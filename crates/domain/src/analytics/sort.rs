// domain analytics: report row ordering
use std::{cmp::Ordering, fmt};

use crate::{
    model::{AggregationSnapshot, ExtensionBucket},
    value_objects::LineCount,
};

/// Share of total lines, rendered with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LineShare(f64);

impl LineShare {
    /// `part / total * 100`; a zero total yields `0.0` instead of NaN.
    pub fn of(part: LineCount, total: LineCount) -> Self {
        if total.is_zero() {
            return Self(0.0);
        }
        Self(part.value() as f64 / total.value() as f64 * 100.0)
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

impl fmt::Display for LineShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// 拡張子ごとのレポート行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtensionRow<'a> {
    pub extension: &'a str,
    pub bucket: &'a ExtensionBucket,
    pub share: LineShare,
}

/// Rows sorted by descending line count.
///
/// Equal line counts are ordered by extension name so output is stable
/// regardless of scan order.
pub fn extension_rows(snapshot: &AggregationSnapshot) -> Vec<ExtensionRow<'_>> {
    let mut rows: Vec<ExtensionRow<'_>> = snapshot
        .by_extension
        .iter()
        .map(|(extension, bucket)| ExtensionRow {
            extension,
            bucket,
            share: LineShare::of(bucket.line_count, snapshot.total_lines),
        })
        .collect();
    rows.sort_by(compare_rows);
    rows
}

fn compare_rows(a: &ExtensionRow<'_>, b: &ExtensionRow<'_>) -> Ordering {
    b.bucket
        .line_count
        .cmp(&a.bucket.line_count)
        .then_with(|| a.extension.cmp(b.extension))
}
