//! Result types passed from commands to the summary printer.

use std::path::PathBuf;

use dqi_model::ScoreSummary;

/// Outcome of scoring one index over the input table.
pub struct IndexOutcome {
    pub name: String,
    pub summary: Option<ScoreSummary>,
    /// Scoring error, e.g. missing required columns. The index column is
    /// absent from the output when set.
    pub error: Option<String>,
}

/// Outcome of the `score` command.
pub struct ScoreResult {
    pub rows: usize,
    pub outcomes: Vec<IndexOutcome>,
    pub output: Option<PathBuf>,
}

impl ScoreResult {
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.error.is_some())
    }
}
