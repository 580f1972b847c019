// src/strength.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative strength tier shown next to a stored password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Visual severity for rendering the label as a badge.
    pub fn severity(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "destructive",
            StrengthLabel::Medium => "warning",
            StrengthLabel::Strong => "success",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Strength {
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a password against five checks worth one point each: length of at
/// least 12 characters, an uppercase letter, a lowercase letter, a digit,
/// and a character outside A-Za-z0-9.
///
/// This is a display heuristic, not an entropy estimate. Any input
/// classifies; the empty string scores 0.
pub fn estimate(password: &str) -> Strength {
    let mut score = 0u8;

    if password.chars().count() >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3..=4 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    };

    Strength { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_weak() {
        let strength = estimate("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, StrengthLabel::Weak);
    }

    #[test]
    fn all_five_checks_give_strong() {
        let strength = estimate("P@ssw0rd123!");
        assert_eq!(strength.score, 5);
        assert_eq!(strength.label, StrengthLabel::Strong);
    }

    #[test]
    fn lowercase_only_is_weak() {
        let strength = estimate("password");
        assert_eq!(strength.score, 1);
        assert_eq!(strength.label, StrengthLabel::Weak);
    }

    #[test]
    fn three_checks_give_medium() {
        let strength = estimate("Password1");
        assert_eq!(strength.score, 3);
        assert_eq!(strength.label, StrengthLabel::Medium);
    }

    #[test]
    fn four_checks_give_medium() {
        // length, upper, lower, digit; no symbol
        let strength = estimate("Password1234");
        assert_eq!(strength.score, 4);
        assert_eq!(strength.label, StrengthLabel::Medium);
    }

    #[test]
    fn two_checks_give_weak() {
        let strength = estimate("Password");
        assert_eq!(strength.score, 2);
        assert_eq!(strength.label, StrengthLabel::Weak);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        // 12 chars, lowercase, and the accented characters land in the
        // "outside A-Za-z0-9" bucket.
        let strength = estimate("pässwörter12");
        assert_eq!(strength.score, 4);
        assert_eq!(strength.label, StrengthLabel::Medium);
    }

    #[test]
    fn severity_matches_label() {
        assert_eq!(StrengthLabel::Weak.severity(), "destructive");
        assert_eq!(StrengthLabel::Medium.severity(), "warning");
        assert_eq!(StrengthLabel::Strong.severity(), "success");
    }
}
