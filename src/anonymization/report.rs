//! Run summary

use serde::Serialize;
use std::fmt;

/// Outcome of anonymizing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnonymizationSummary {
    /// Path that was read
    pub input_path: String,

    /// Path that was written
    pub output_path: String,

    /// Number of members re-keyed
    pub members: usize,

    /// Whether the output replaced the input file
    pub overwrote_input: bool,
}

impl AnonymizationSummary {
    /// Creates a summary; `overwrote_input` is derived from the two paths
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>, members: usize) -> Self {
        let input_path = input_path.into();
        let output_path = output_path.into();
        let overwrote_input = input_path == output_path;
        Self {
            input_path,
            output_path,
            members,
            overwrote_input,
        }
    }
}

/// The confirmation line printed after a successful run
impl fmt::Display for AnonymizationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "created {}", self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_confirmation_line() {
        let summary = AnonymizationSummary::new("team.json", "team-anon.json", 2);
        assert_eq!(summary.to_string(), "created team-anon.json");
        assert!(!summary.overwrote_input);
    }

    #[test]
    fn test_same_paths_mark_overwrite() {
        let summary = AnonymizationSummary::new("team.txt", "team.txt", 0);
        assert!(summary.overwrote_input);
    }

    #[test]
    fn test_serializes_to_json() {
        let summary = AnonymizationSummary::new("a.json", "a-anon.json", 3);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["members"], 3);
        assert_eq!(value["output_path"], "a-anon.json");
    }
}
