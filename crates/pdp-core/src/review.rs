use crate::plan::Plan;
use crate::types::{Difficulty, TierId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// GenericBaseline
// ---------------------------------------------------------------------------

/// Reference figures for a one-size-fits-all plan, used to show how a
/// personalized plan differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericBaseline {
    #[serde(default = "default_intro")]
    pub intro_items: u32,
    #[serde(default = "default_mastery")]
    pub mastery_items: u32,
    #[serde(default = "default_total_duration")]
    pub total_duration: u32,
}

fn default_intro() -> u32 {
    8
}

fn default_mastery() -> u32 {
    3
}

fn default_total_duration() -> u32 {
    1200
}

impl Default for GenericBaseline {
    fn default() -> Self {
        Self {
            intro_items: default_intro(),
            mastery_items: default_mastery(),
            total_duration: default_total_duration(),
        }
    }
}

// ---------------------------------------------------------------------------
// PlanSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub months: usize,
    pub items: usize,
    pub total_duration: u32,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub months_per_tier: BTreeMap<TierId, usize>,
    pub empty_months: usize,
    /// Tiers in the order the plan first visits them.
    pub rotation: Vec<TierId>,
}

impl PlanSummary {
    pub fn of(plan: &Plan) -> Self {
        let mut by_difficulty: BTreeMap<Difficulty, usize> =
            Difficulty::all().iter().map(|d| (*d, 0)).collect();
        let mut months_per_tier = BTreeMap::new();
        let mut rotation = Vec::new();

        for month in &plan.plan {
            *months_per_tier.entry(month.tier).or_insert(0) += 1;
            if !rotation.contains(&month.tier) {
                rotation.push(month.tier);
            }
            for item in &month.required_content {
                *by_difficulty.entry(item.difficulty).or_insert(0) += 1;
            }
        }

        Self {
            months: plan.plan.len(),
            items: plan.items().count(),
            total_duration: plan.total_duration(),
            by_difficulty,
            months_per_tier,
            empty_months: plan
                .plan
                .iter()
                .filter(|m| m.required_content.is_empty())
                .count(),
            rotation,
        }
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.by_difficulty.get(&difficulty).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// PlanComparison
// ---------------------------------------------------------------------------

/// Signed differences against the generic baseline. Positive values are
/// favourable in every field: less time, fewer intro items, more mastery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanComparison {
    pub duration_difference: i64,
    pub intro_difference: i64,
    pub mastery_difference: i64,
}

impl PlanComparison {
    pub fn against(summary: &PlanSummary, baseline: &GenericBaseline) -> Self {
        let intro = summary.count(Difficulty::Intro) as i64;
        let mastery = summary.count(Difficulty::Mastery) as i64;
        Self {
            duration_difference: i64::from(baseline.total_duration)
                - i64::from(summary.total_duration),
            intro_difference: i64::from(baseline.intro_items) - intro,
            mastery_difference: mastery - i64::from(baseline.mastery_items),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
