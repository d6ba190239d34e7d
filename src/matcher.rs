//! Per-line match evaluation shared by every output strategy.
use crate::patterns::PatternSet;

/// Half-open byte range `[start, end)` of one matcher hit within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// True when any matcher in the set hits the line, negated under
/// inversion. Matchers are tried in insertion order and evaluation stops
/// at the first hit.
pub fn line_matches(line: &str, set: &PatternSet, invert: bool) -> bool {
    let hit = set.matchers().iter().any(|matcher| matcher.is_match(line));
    hit != invert
}

/// Every disjoint match across all patterns: pattern order first, then
/// left to right within each pattern, with each match starting after the
/// previous one's end in that pattern's scan. Empty when nothing matches.
pub fn matched_spans(line: &str, set: &PatternSet) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    for matcher in set.matchers() {
        for hit in matcher.find_iter(line) {
            spans.push(MatchSpan {
                start: hit.start(),
                end: hit.end(),
            });
        }
    }
    spans
}
