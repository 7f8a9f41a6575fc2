//! Password strength rating

use cfkit_domain::impl_domain_status_conversions;
use serde::{Deserialize, Serialize};

/// Highest score the UAA assigns.
pub const MAX_PASSWORD_SCORE: i64 = 10;

/// Password strength as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScore {
    Strong,
    Good,
    Weak,
}

impl_domain_status_conversions!(PasswordScore {
    Strong => "strong",
    Good => "good",
    Weak => "weak",
});

impl PasswordScore {
    /// Translate a UAA `{score, requiredScore}` pair.
    pub fn from_scores(score: i64, required_score: i64) -> Self {
        if score == MAX_PASSWORD_SCORE {
            Self::Strong
        } else if score >= required_score {
            Self::Good
        } else {
            Self::Weak
        }
    }
}
