//! ファイル内容の計測

mod line_count;

pub use line_count::{count_non_blank_lines, measure_file};
