use globset::{GlobBuilder, GlobMatcher};

use codestat_shared_kernel::{DomainError, DomainResult};

/// Name-matching rule that removes a file or directory from a scan.
///
/// A pattern containing `*` is a wildcard: each `*` matches zero or more
/// characters, every other character is literal, and the whole name must
/// match (`*.log` matches `a.log` but not `a.logx`). Any other pattern
/// matches only an identical name.
#[derive(Debug, Clone)]
pub enum ExcludePattern {
    Exact(String),
    Wildcard { original: String, matcher: GlobMatcher },
}

impl ExcludePattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        if pattern.is_empty() {
            return Err(DomainError::InvalidPattern {
                pattern: String::new(),
                details: "pattern is empty".to_string(),
                source: None,
            });
        }
        if !pattern.contains('*') {
            return Ok(Self::Exact(pattern.to_string()));
        }

        let glob = GlobBuilder::new(&escape_except_star(pattern))
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|err| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                details: err.to_string(),
                source: Some(Box::new(err)),
            })?;
        Ok(Self::Wildcard { original: pattern.to_string(), matcher: glob.compile_matcher() })
    }

    /// Tests a bare entry name (never a full path).
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == name,
            Self::Wildcard { matcher, .. } => matcher.is_match(name),
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Self::Exact(pattern) => pattern,
            Self::Wildcard { original, .. } => original,
        }
    }
}

impl PartialEq for ExcludePattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

/// True when any pattern matches `name`.
pub fn is_excluded(name: &str, patterns: &[ExcludePattern]) -> bool {
    patterns.iter().any(|pattern| pattern.matches(name))
}

// globset treats `? [ ] { } \` as syntax; only `*` keeps its wildcard meaning here.
fn escape_except_star(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len() + 4);
    for ch in pattern.chars() {
        if matches!(ch, '?' | '[' | ']' | '{' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
