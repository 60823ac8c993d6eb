use std::path::Path;

use memchr::memchr_iter;

use codestat_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// 空白のみの行を除いた行数
///
/// Content is decoded as lossy UTF-8 and split on `\n`; a trailing `\r`
/// counts as whitespace, so CRLF files behave like LF files.
pub fn count_non_blank_lines(content: &[u8]) -> usize {
    let mut count = 0;
    let mut start = 0;
    for end in memchr_iter(b'\n', content) {
        if !is_blank(&content[start..end]) {
            count += 1;
        }
        start = end + 1;
    }
    if start < content.len() && !is_blank(&content[start..]) {
        count += 1;
    }
    count
}

fn is_blank(line: &[u8]) -> bool {
    if line.iter().all(u8::is_ascii_whitespace) {
        return true;
    }
    // U+3000, NBSP and \x0B are whitespace too; invalid bytes become U+FFFD.
    // A stray BOM is treated as blank.
    String::from_utf8_lossy(line).trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').is_empty()
}

/// Reads `path` fully and counts its non-blank lines.
pub fn measure_file(path: &Path) -> Result<usize> {
    let content = FileReader::read_to_end(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    Ok(count_non_blank_lines(&content))
}
