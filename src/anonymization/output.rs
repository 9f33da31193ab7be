//! Output path derivation

/// Substring of the input path that marks where the suffix goes
pub const INPUT_MARKER: &str = ".json";

/// Replacement for the first [`INPUT_MARKER`]
pub const OUTPUT_MARKER: &str = "-anon.json";

/// Derives the output path from the input path
///
/// Only the first `.json` is rewritten. A path without `.json` comes back
/// unchanged, which means the input file gets overwritten.
///
/// ```
/// use member_anon::anonymization::output::output_path;
///
/// assert_eq!(output_path("team.json"), "team-anon.json");
/// ```
pub fn output_path(input: &str) -> String {
    input.replacen(INPUT_MARKER, OUTPUT_MARKER, 1)
}
