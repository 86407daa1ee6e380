//! Match scores, tiers, and the apply gate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest score that still allows an application.
pub const APPLY_THRESHOLD: u8 = 50;
const STRONG_FLOOR: u8 = 80;
const MODERATE_FLOOR: u8 = 60;

/// Integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    pub fn new(value: u8) -> Result<Self, InvalidScore> {
        if value > 100 {
            return Err(InvalidScore(value));
        }
        Ok(Self(value))
    }

    /// Values above 100 saturate at 100.
    pub const fn clamped(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn tier(self) -> MatchTier {
        if self.0 >= STRONG_FLOOR {
            MatchTier::Strong
        } else if self.0 >= MODERATE_FLOOR {
            MatchTier::Moderate
        } else {
            MatchTier::Weak
        }
    }

    pub const fn can_apply(self) -> bool {
        self.0 >= APPLY_THRESHOLD
    }
}

impl TryFrom<u8> for MatchScore {
    type Error = InvalidScore;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchScore> for u8 {
    fn from(value: MatchScore) -> Self {
        value.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("match score {0} is outside 0..=100")]
pub struct InvalidScore(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Weak,
}

impl MatchTier {
    pub const fn label(self) -> &'static str {
        match self {
            MatchTier::Strong => "strong",
            MatchTier::Moderate => "moderate",
            MatchTier::Weak => "weak",
        }
    }

    pub const fn style_class(self) -> &'static str {
        match self {
            MatchTier::Strong => "text-green-600 bg-green-100",
            MatchTier::Moderate => "text-yellow-600 bg-yellow-100",
            MatchTier::Weak => "text-red-600 bg-red-100",
        }
    }
}

/// Raised when someone tries to apply below [`APPLY_THRESHOLD`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("match score {score} is below the {threshold}% needed to apply")]
    ScoreBelowThreshold { score: MatchScore, threshold: u8 },
    #[error("job '{job_id}' is closed to new applications")]
    PostingClosed { job_id: String },
}

pub fn ensure_can_apply(score: MatchScore) -> Result<(), ApplyError> {
    if score.can_apply() {
        Ok(())
    } else {
        Err(ApplyError::ScoreBelowThreshold {
            score,
            threshold: APPLY_THRESHOLD,
        })
    }
}

/// Which required skills a candidate covers. Lists keep the job's ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillOverlap {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillOverlap {
    pub fn between<C, S>(candidate_skills: &[C], required_skills: &[S]) -> Self
    where
        C: AsRef<str>,
        S: AsRef<str>,
    {
        let (matching, missing): (Vec<String>, Vec<String>) = required_skills
            .iter()
            .map(|skill| skill.as_ref().to_string())
            .partition(|required| {
                candidate_skills
                    .iter()
                    .any(|owned| owned.as_ref().trim().eq_ignore_ascii_case(required.trim()))
            });
        Self { matching, missing }
    }

    /// `matching / required * 100`, rounded down. No requirements counts as a full match.
    pub fn percentage(&self) -> MatchScore {
        let required = self.matching.len() + self.missing.len();
        if required == 0 {
            return MatchScore(100);
        }
        let pct = self.matching.len() * 100 / required;
        MatchScore(pct as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> MatchScore {
        MatchScore::new(value).expect("valid score")
    }

    #[test]
    fn tiers_use_inclusive_lower_bounds() {
        for value in 0..=100 {
            let expected = if value >= 80 {
                MatchTier::Strong
            } else if value >= 60 {
                MatchTier::Moderate
            } else {
                MatchTier::Weak
            };
            assert_eq!(score(value).tier(), expected, "score {value}");
        }
        assert_eq!(score(80).tier(), MatchTier::Strong);
        assert_eq!(score(79).tier(), MatchTier::Moderate);
        assert_eq!(score(60).tier(), MatchTier::Moderate);
        assert_eq!(score(59).tier(), MatchTier::Weak);
    }

    #[test]
    fn apply_gate_opens_at_fifty() {
        for value in 0..=100 {
            assert_eq!(score(value).can_apply(), value >= 50, "score {value}");
        }
        assert!(ensure_can_apply(score(50)).is_ok());
        assert_eq!(
            ensure_can_apply(score(49)),
            Err(ApplyError::ScoreBelowThreshold {
                score: score(49),
                threshold: 50
            })
        );
    }

    #[test]
    fn rejects_scores_above_one_hundred() {
        assert_eq!(MatchScore::new(101), Err(InvalidScore(101)));
        assert!(serde_json::from_str::<MatchScore>("150").is_err());
        assert_eq!(serde_json::from_str::<MatchScore>("87").ok(), Some(score(87)));
    }

    #[test]
    fn overlap_keeps_required_order_and_ignores_case() {
        let resume = ["React", "TypeScript", "JavaScript", "Node.js", "HTML", "Git"];
        let overlap = SkillOverlap::between(&resume, &["react", "Redux", "Jest", "Webpack"]);
        assert_eq!(overlap.matching, vec!["react"]);
        assert_eq!(overlap.missing, vec!["Redux", "Jest", "Webpack"]);
        assert_eq!(overlap.percentage(), score(25));
        assert_eq!(overlap.percentage().tier(), MatchTier::Weak);
    }

    #[test]
    fn empty_requirements_are_a_full_match() {
        let overlap = SkillOverlap::between(&["Rust"], &[] as &[&str]);
        assert_eq!(overlap.percentage(), score(100));
    }

    #[test]
    fn tier_styles_match_labels() {
        assert_eq!(MatchTier::Strong.style_class(), "text-green-600 bg-green-100");
        assert_eq!(MatchTier::Moderate.label(), "moderate");
        assert_eq!(MatchTier::Weak.style_class(), "text-red-600 bg-red-100");
    }
}
