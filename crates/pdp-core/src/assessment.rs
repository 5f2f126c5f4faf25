use crate::error::{PdpError, Result};
use crate::types::{ManagerStatus, TierId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

pub const MAX_GOAL_PRIORITIES: usize = 3;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;
pub const MAX_MENTEE_SCORE: u32 = 100;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenteeFeedback {
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSkillAlignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_tier: Option<TierId>,
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// One-time self/peer skill assessment that drives plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub manager_status: ManagerStatus,
    #[serde(default)]
    pub goal_priorities: Vec<TierId>,
    #[serde(default)]
    pub self_ratings: BTreeMap<TierId, u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_ratings: Option<BTreeMap<TierId, u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentee_feedback: Option<BTreeMap<TierId, MenteeFeedback>>,
    #[serde(default)]
    pub align_to_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_skill_alignment: Option<TeamSkillAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_generated: Option<DateTime<Utc>>,
}

impl Assessment {
    pub fn new(manager_status: ManagerStatus) -> Self {
        Self {
            manager_status,
            goal_priorities: Vec::new(),
            self_ratings: BTreeMap::new(),
            peer_ratings: None,
            mentee_feedback: None,
            align_to_team: false,
            team_skill_alignment: None,
            date_generated: None,
        }
    }

    /// A filled-in example, used for `pdp assessment template`.
    pub fn sample() -> Self {
        let mut a = Self::new(ManagerStatus::MidLevel);
        a.goal_priorities = vec![TierId::T3, TierId::T2];
        a.self_ratings = [
            (TierId::T1, 3),
            (TierId::T2, 6),
            (TierId::T3, 5),
            (TierId::T4, 7),
            (TierId::T5, 8),
        ]
        .into_iter()
        .collect();
        a.peer_ratings = Some(
            [
                (TierId::T1, 4),
                (TierId::T2, 6),
                (TierId::T3, 5),
                (TierId::T4, 4),
                (TierId::T5, 7),
            ]
            .into_iter()
            .collect(),
        );
        a.mentee_feedback = Some(
            [(
                TierId::T4,
                MenteeFeedback {
                    score: 65,
                    comment: Some("Needs better follow-up after delegating tasks.".to_string()),
                },
            )]
            .into_iter()
            .collect(),
        );
        a.align_to_team = true;
        a.team_skill_alignment = Some(TeamSkillAlignment {
            gap_tier: Some(TierId::T5),
        });
        a
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let assessment: Assessment = serde_yaml::from_str(&data)?;
        Ok(assessment)
    }

    // -----------------------------------------------------------------------
    // Signals
    // -----------------------------------------------------------------------

    /// `None` when the assessment has no self rating for `tier`.
    pub fn self_rating(&self, tier: TierId) -> Option<u8> {
        self.self_ratings.get(&tier).copied()
    }

    pub fn peer_rating(&self, tier: TierId) -> Option<u8> {
        self.peer_ratings
            .as_ref()
            .and_then(|ratings| ratings.get(&tier).copied())
    }

    /// Self rating minus peer rating; `None` unless both are present.
    pub fn confidence_gap(&self, tier: TierId) -> Option<i16> {
        let own = self.self_rating(tier)?;
        let peer = self.peer_rating(tier)?;
        Some(i16::from(own) - i16::from(peer))
    }

    pub fn mentee_score(&self, tier: TierId) -> Option<u32> {
        self.mentee_feedback
            .as_ref()
            .and_then(|feedback| feedback.get(&tier))
            .map(|f| f.score)
    }

    /// The team gap tier, only when the leader opted into team alignment.
    pub fn team_gap_tier(&self) -> Option<TierId> {
        if !self.align_to_team {
            return None;
        }
        self.team_skill_alignment
            .as_ref()
            .and_then(|alignment| alignment.gap_tier)
    }

    pub fn missing_ratings(&self) -> Vec<TierId> {
        TierId::all()
            .iter()
            .copied()
            .filter(|tier| !self.self_ratings.contains_key(tier))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, require_complete_ratings: bool) -> Result<()> {
        if self.goal_priorities.len() > MAX_GOAL_PRIORITIES {
            return Err(PdpError::TooManyGoals(self.goal_priorities.len()));
        }
        let mut seen = HashSet::new();
        for goal in &self.goal_priorities {
            if !seen.insert(*goal) {
                return Err(PdpError::DuplicateGoal(*goal));
            }
        }

        if require_complete_ratings {
            if let Some(tier) = self.missing_ratings().into_iter().next() {
                return Err(PdpError::MissingSelfRating(tier));
            }
        }
        check_ratings("self", &self.self_ratings)?;
        if let Some(peer) = &self.peer_ratings {
            check_ratings("peer", peer)?;
        }

        if let Some(feedback) = &self.mentee_feedback {
            for (tier, entry) in feedback {
                if entry.score > MAX_MENTEE_SCORE {
                    return Err(PdpError::MenteeScoreOutOfRange {
                        tier: *tier,
                        score: entry.score,
                    });
                }
            }
        }
        Ok(())
    }
}

fn check_ratings(kind: &'static str, ratings: &BTreeMap<TierId, u8>) -> Result<()> {
    for (tier, value) in ratings {
        if !(MIN_RATING..=MAX_RATING).contains(value) {
            return Err(PdpError::RatingOutOfRange {
                kind,
                tier: *tier,
                value: *value,
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
