//! Pattern-set compilation.
use log::debug;
use regex::{Regex, RegexBuilder};

/// Immutable set of compiled matchers, held in pattern insertion order
/// for the whole scan. Duplicates are kept.
#[derive(Debug)]
pub struct PatternSet {
    matchers: Vec<Regex>,
    requested: usize,
}

impl PatternSet {
    /// Compiles every pattern independently with newline-sensitive
    /// anchoring. A malformed pattern is dropped without a diagnostic and
    /// compilation continues with the remaining patterns.
    pub fn compile(patterns: &[String], ignore_case: bool) -> Self {
        let mut matchers = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            match RegexBuilder::new(pattern)
                .case_insensitive(ignore_case)
                .multi_line(true)
                .build()
            {
                Ok(matcher) => matchers.push(matcher),
                Err(err) => debug!("dropping malformed pattern {pattern:?}: {err}"),
            }
        }
        PatternSet {
            matchers,
            requested: patterns.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// True when the single requested pattern failed to compile; the
    /// orchestrator refuses to scan in that case.
    pub fn is_fatal(&self) -> bool {
        self.matchers.is_empty() && self.requested == 1
    }

    pub fn matchers(&self) -> &[Regex] {
        &self.matchers
    }
}
