use crate::assessment::Assessment;
use crate::error::{PdpError, Result};
use crate::library::ContentItem;
use crate::types::{ContentType, Difficulty, ProgressStatus, TierId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AllocatedItem
// ---------------------------------------------------------------------------

/// A library item as placed into a month: a copy of the item with its
/// duration replaced by the confidence-scaled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedItem {
    pub id: u32,
    pub tier: TierId,
    pub skill: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub duration: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub status: ProgressStatus,
}

impl AllocatedItem {
    pub fn from_item(item: &ContentItem, duration: u32) -> Self {
        Self {
            id: item.id,
            tier: item.tier,
            skill: item.skill.clone(),
            content_type: item.content_type,
            title: item.title.clone(),
            duration,
            difficulty: item.difficulty,
            status: ProgressStatus::Pending,
        }
    }
}

// ---------------------------------------------------------------------------
// PlanMonth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMonth {
    pub month: u32,
    pub tier: TierId,
    pub theme: String,
    pub required_content: Vec<AllocatedItem>,
    #[serde(default)]
    pub status: ProgressStatus,
    #[serde(default)]
    pub reflection_text: String,
    #[serde(default)]
    pub month_completed_date: Option<DateTime<Utc>>,
    /// Always the sum of `required_content` durations.
    pub total_duration: u32,
}

impl PlanMonth {
    pub fn new(month: u32, tier: TierId, theme: String, required_content: Vec<AllocatedItem>) -> Self {
        let total_duration = required_content
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.duration));
        Self {
            month,
            tier,
            theme,
            required_content,
            status: ProgressStatus::Pending,
            reflection_text: String::new(),
            month_completed_date: None,
            total_duration,
        }
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// The persisted aggregate: assessment snapshot plus the generated months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub owner_uid: String,
    pub assessment: Assessment,
    pub plan: Vec<PlanMonth>,
    pub current_month: u32,
    #[serde(default)]
    pub latest_scenario: Option<serde_json::Value>,
    pub last_update: DateTime<Utc>,
}

impl Plan {
    pub fn new(owner_uid: impl Into<String>, assessment: Assessment, months: Vec<PlanMonth>) -> Self {
        Self {
            owner_uid: owner_uid.into(),
            assessment,
            plan: months,
            current_month: 1,
            latest_scenario: None,
            last_update: Utc::now(),
        }
    }

    /// Look up a 1-based month.
    pub fn month(&self, month: u32) -> Result<&PlanMonth> {
        month
            .checked_sub(1)
            .and_then(|i| self.plan.get(i as usize))
            .ok_or(PdpError::MonthOutOfRange {
                month,
                len: self.plan.len(),
            })
    }

    pub fn current(&self) -> Option<&PlanMonth> {
        self.month(self.current_month).ok()
    }

    pub fn total_duration(&self) -> u32 {
        self.plan
            .iter()
            .fold(0u32, |total, m| total.saturating_add(m.total_duration))
    }

    pub fn items(&self) -> impl Iterator<Item = &AllocatedItem> {
        self.plan.iter().flat_map(|m| m.required_content.iter())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
