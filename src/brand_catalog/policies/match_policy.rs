/// MatchPolicy decides which candidate wins when several catalog prefixes
/// match the same serial number.
///
/// - `FirstMatch`: the earliest brand in catalog order wins, and within it
///   the earliest declared prefix. A longer prefix declared later never
///   overrides it.
/// - `LongestPrefix`: the longest matching prefix wins; equal lengths fall
///   back to catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    FirstMatch,
    LongestPrefix,
}

impl MatchPolicy {
    /// Whether `candidate_len` should replace the current best of `best_len`.
    /// Candidates arrive in catalog order.
    pub fn prefers(&self, candidate_len: usize, best_len: usize) -> bool {
        match self {
            MatchPolicy::FirstMatch => false,
            MatchPolicy::LongestPrefix => candidate_len > best_len,
        }
    }

    /// Whether the scan can stop at the first candidate
    pub fn stops_at_first(&self) -> bool {
        matches!(self, MatchPolicy::FirstMatch)
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "first-match" | "first" => Ok(MatchPolicy::FirstMatch),
            "longest-prefix" | "longest" => Ok(MatchPolicy::LongestPrefix),
            _ => Err(format!(
                "Invalid match policy: {}. Please specify 'first-match' or 'longest-prefix'",
                s
            )),
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::FirstMatch => write!(f, "first-match"),
            MatchPolicy::LongestPrefix => write!(f, "longest-prefix"),
        }
    }
}
