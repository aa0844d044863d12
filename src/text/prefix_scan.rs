use serde::{Deserialize, Serialize};

/// One maximal run of characters shared by pattern and text.
///
/// Offsets and lengths count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Position in the text where the run starts
    pub start: usize,
    /// Number of consecutive matching characters
    pub len: usize,
}

impl MatchSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, len): (usize, usize)) -> Self {
        Self::new(start, len)
    }
}

/// Find runs of `pattern` inside `text`, left to right.
///
/// Matching is greedy and non-overlapping. When a run breaks, the character
/// that broke it is tried again against the start of the pattern, so in
/// `("lond", "lonlon")` the second `l` opens a new run. Runs shorter than
/// `min_run_length` are dropped (a minimum of 0 behaves like 1).
///
/// ```
/// use place_autocomplete::text::{find_matches, MatchSpan};
///
/// let spans = find_matches("lon", "ponloberrylon", 1);
/// assert_eq!(spans, vec![MatchSpan::new(3, 2), MatchSpan::new(10, 3)]);
/// ```
pub fn find_matches(pattern: &str, text: &str, min_run_length: usize) -> Vec<MatchSpan> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    find_matches_chars(&pattern, &text, min_run_length)
}

/// Same as [`find_matches`] over pre-split characters.
pub fn find_matches_chars(pattern: &[char], text: &[char], min_run_length: usize) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    if pattern.is_empty() || text.is_empty() {
        return spans;
    }

    let min_run_length = min_run_length.max(1);
    let mut run = 0usize;
    // i: cursor into pattern, j: cursor into text
    let mut i = 0usize;
    let mut j = 0usize;

    while j < text.len() {
        if i == pattern.len() {
            // Whole pattern consumed with text left over; it may recur.
            if run >= min_run_length {
                spans.push(MatchSpan::new(j - run, run));
            }
            i = 0;
            run = 0;
        }

        if pattern[i] == text[j] {
            run += 1;
            i += 1;
            j += 1;
        } else if run > 0 {
            if run >= min_run_length {
                spans.push(MatchSpan::new(j - run, run));
            }
            // Re-sync: text[j] is compared against pattern[0] on the next pass.
            i = 0;
            run = 0;
        } else {
            j += 1;
        }
    }

    if run >= min_run_length {
        spans.push(MatchSpan::new(j - run, run));
    }

    spans
}
