//! Online leaderboard wire types and a local top-10 mirror
//!
//! The leaderboard service itself is an external collaborator; this module
//! owns the request/response shapes, submission validation, and the exact
//! ordering contract so locally-merged lists match what the service returns.

use serde::{Deserialize, Serialize};

/// Maximum number of leaderboard entries kept
pub const MAX_ENTRIES: usize = 10;

/// Maximum player name length after sanitization
pub const MAX_NAME_LEN: usize = 20;

/// A single leaderboard entry as the service stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score_relative_to_par: i32,
    pub total_strokes: u32,
    /// Unix timestamp (ms) when the round finished
    pub completed_at: u64,
}

/// Payload sent to the service at round end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score_relative_to_par: i32,
    pub total_strokes: u32,
}

impl ScoreSubmission {
    /// Build a submission with the name sanitized to the service's rules
    pub fn new(player_name: &str, score_relative_to_par: i32, total_strokes: u32) -> Self {
        Self {
            player_name: sanitize_name(player_name),
            score_relative_to_par,
            total_strokes,
        }
    }

    /// Validate before sending; the service rejects empty names with an
    /// opaque error, so catch it client-side.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.player_name.trim().is_empty() {
            return Err(SubmissionError::EmptyName);
        }
        Ok(())
    }
}

/// Client-side submission validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    /// Name is empty after sanitization
    EmptyName,
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::EmptyName => write!(f, "player name is empty after sanitization"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Service response to a score submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    /// 1-indexed rank when the entry made the top 10
    pub rank: Option<u32>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Truncate to `MAX_NAME_LEN` and strip everything but alphanumerics and
/// spaces (same rule the service applies server-side)
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .take(MAX_NAME_LEN)
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Local mirror of the service leaderboard, so the UI can render
/// immediately while a network call is in flight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace local state with what the service returned
    pub fn replace(&mut self, entries: Vec<LeaderboardEntry>) {
        self.entries = entries;
        self.sort();
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Insert an entry, keeping the top 10 in contract order.
    /// Returns the 1-indexed rank when the entry made the cut.
    pub fn submit(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        self.entries.push(entry.clone());
        self.sort();
        self.entries.truncate(MAX_ENTRIES);
        self.entries.iter().position(|e| *e == entry).map(|i| i + 1)
    }

    /// Ordering contract: ascending score relative to par, then ascending
    /// total strokes, then most recent first
    fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            a.score_relative_to_par
                .cmp(&b.score_relative_to_par)
                .then(a.total_strokes.cmp(&b.total_strokes))
                .then(b.completed_at.cmp(&a.completed_at))
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }
}
