//! Pre-call content policy guard.
//!
//! A crude case-insensitive substring denylist over the question and the
//! resent history, checked before the model is ever reached. Blocked
//! requests still get a polite 200 answer; the widget never dead-ends.

use charla_core::Turn;

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Blocked,
}

/// Substring denylist over inbound text.
pub struct PolicyGuard {
    patterns: Vec<String>,
}

impl PolicyGuard {
    /// Create a guard from denylist patterns. Patterns are matched
    /// case-insensitively; empty ones are ignored.
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Check the live question and the client-supplied history.
    pub fn check(&self, question: &str, history: &[Turn]) -> Verdict {
        if self.matches(question) {
            return Verdict::Blocked;
        }
        if history.iter().any(|t| self.matches(&t.content)) {
            return Verdict::Blocked;
        }
        Verdict::Allowed
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.patterns.iter().any(|p| lower.contains(p.as_str()))
    }
}
