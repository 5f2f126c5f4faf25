use crate::assessment::Assessment;
use crate::types::{ManagerStatus, TierId};
use serde::Serialize;
use tracing::debug;

/// Self ratings at or below this mark a tier as low-confidence.
pub const LOW_CONFIDENCE_MAX: u8 = 4;
/// Minimum self-minus-peer difference that counts as a confidence gap.
pub const CONFIDENCE_GAP_MIN: i16 = 3;
/// Mentee feedback scores below this pull the conflict tier forward.
pub const MENTEE_SCORE_THRESHOLD: u32 = 70;
/// Queue slot that injection rules target. Slot 0 is the top priority and is
/// only ever replaced by the seniority rule.
pub const INJECTION_SLOT: usize = 1;

// ---------------------------------------------------------------------------
// RotationContext
// ---------------------------------------------------------------------------

pub struct RotationContext<'a> {
    pub assessment: &'a Assessment,
}

// ---------------------------------------------------------------------------
// RotationQueue
// ---------------------------------------------------------------------------

/// Ordered, duplicate-free list of tiers under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationQueue {
    tiers: Vec<TierId>,
}

impl RotationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[TierId] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<TierId> {
        self.tiers.get(index).copied()
    }

    pub fn position(&self, tier: TierId) -> Option<usize> {
        self.tiers.iter().position(|t| *t == tier)
    }

    /// Append `tier` unless already queued. Returns true if appended.
    pub fn push_unique(&mut self, tier: TierId) -> bool {
        if self.position(tier).is_some() {
            return false;
        }
        self.tiers.push(tier);
        true
    }

    /// Place `tier` at `index`, removing any existing occurrence first so the
    /// queue stays duplicate-free. Returns true if the order changed.
    pub fn move_to(&mut self, index: usize, tier: TierId) -> bool {
        let before = self.position(tier);
        if let Some(pos) = before {
            self.tiers.remove(pos);
        }
        let index = index.min(self.tiers.len());
        self.tiers.insert(index, tier);
        before != Some(index)
    }

    pub fn move_to_front(&mut self, tier: TierId) -> bool {
        self.move_to(0, tier)
    }

    pub fn into_vec(self) -> Vec<TierId> {
        self.tiers
    }
}

// ---------------------------------------------------------------------------
// QueueRule
// ---------------------------------------------------------------------------

/// A named, fn-pointer queue rule. `apply` returns true when it changed the
/// queue.
pub struct QueueRule {
    pub id: &'static str,
    pub apply: fn(&RotationContext, &mut RotationQueue) -> bool,
}

fn low_confidence(ctx: &RotationContext, queue: &mut RotationQueue) -> bool {
    let mut changed = false;
    for tier in TierId::all() {
        let low = ctx
            .assessment
            .self_rating(*tier)
            .is_some_and(|r| r <= LOW_CONFIDENCE_MAX);
        if low {
            changed |= queue.push_unique(*tier);
        }
    }
    changed
}

fn goal_priorities(ctx: &RotationContext, queue: &mut RotationQueue) -> bool {
    let mut changed = false;
    for tier in &ctx.assessment.goal_priorities {
        changed |= queue.push_unique(*tier);
    }
    changed
}

fn fill_remaining(_ctx: &RotationContext, queue: &mut RotationQueue) -> bool {
    let mut changed = false;
    for tier in TierId::all() {
        changed |= queue.push_unique(*tier);
    }
    changed
}

fn team_alignment_gap(ctx: &RotationContext, queue: &mut RotationQueue) -> bool {
    match ctx.assessment.team_gap_tier() {
        Some(gap) if queue.get(0) != Some(gap) => queue.move_to(INJECTION_SLOT, gap),
        _ => false,
    }
}

fn confidence_gap(ctx: &RotationContext, queue: &mut RotationQueue) -> bool {
    let first_gap = TierId::all().iter().copied().find(|tier| {
        ctx.assessment
            .confidence_gap(*tier)
            .is_some_and(|gap| gap >= CONFIDENCE_GAP_MIN)
    });
    match first_gap {
        Some(tier) if queue.get(0) != Some(tier) => queue.move_to(INJECTION_SLOT, tier),
        _ => false,
    }
}

fn new_manager_seniority(ctx: &RotationContext, queue: &mut RotationQueue) -> bool {
    if ctx.assessment.manager_status == ManagerStatus::New && queue.get(0) != Some(TierId::T1) {
        return queue.move_to_front(TierId::T1);
    }
    false
}

fn mentee_feedback_gap(ctx: &RotationContext, queue: &mut RotationQueue) -> bool {
    let low = ctx
        .assessment
        .mentee_score(TierId::T4)
        .is_some_and(|score| score < MENTEE_SCORE_THRESHOLD);
    if low && queue.get(0) != Some(TierId::T4) {
        return queue.move_to(INJECTION_SLOT, TierId::T4);
    }
    false
}

/// The queue rules in precedence order. Later rules see, and may reorder,
/// the output of earlier ones.
pub fn default_rules() -> Vec<QueueRule> {
    vec![
        // 1. Tiers the leader rated at 4 or below, catalog order
        QueueRule {
            id: "low_confidence",
            apply: low_confidence,
        },
        // 2. Explicit goals, in the order chosen
        QueueRule {
            id: "goal_priorities",
            apply: goal_priorities,
        },
        // 3. Everything else, catalog order
        QueueRule {
            id: "fill_remaining",
            apply: fill_remaining,
        },
        // 4. Team gap becomes the second tier visited
        QueueRule {
            id: "team_alignment_gap",
            apply: team_alignment_gap,
        },
        // 5. Overconfidence takes slot 1 over the team gap
        QueueRule {
            id: "confidence_gap",
            apply: confidence_gap,
        },
        // 6. New managers always start with T1
        QueueRule {
            id: "new_manager_seniority",
            apply: new_manager_seniority,
        },
        // 7. Weak mentee feedback pulls T4 into slot 1
        QueueRule {
            id: "mentee_feedback_gap",
            apply: mentee_feedback_gap,
        },
    ]
}

// ---------------------------------------------------------------------------
// RotationPlan (output)
// ---------------------------------------------------------------------------

/// Only built by `RotationPlanner`, so the queue is always a full
/// permutation of the catalog tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationPlan {
    queue: Vec<TierId>,
    /// Ids of the rules that changed the queue, in application order.
    fired: Vec<&'static str>,
}

impl RotationPlan {
    pub fn queue(&self) -> &[TierId] {
        &self.queue
    }

    pub fn fired(&self) -> &[&'static str] {
        &self.fired
    }

    pub fn into_queue(self) -> Vec<TierId> {
        self.queue
    }

    /// Tier for a 1-based month number; the queue is used cyclically.
    pub fn tier_for_month(&self, month: u32) -> TierId {
        let slot = (month.saturating_sub(1) as usize) % self.queue.len();
        self.queue[slot]
    }
}

// ---------------------------------------------------------------------------
// RotationPlanner
// ---------------------------------------------------------------------------

pub struct RotationPlanner {
    rules: Vec<QueueRule>,
}

impl Default for RotationPlanner {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl RotationPlanner {
    pub fn new(rules: Vec<QueueRule>) -> Self {
        Self { rules }
    }

    pub fn plan(&self, assessment: &Assessment) -> RotationPlan {
        let ctx = RotationContext { assessment };
        let mut queue = RotationQueue::new();
        let mut fired = Vec::new();
        for rule in &self.rules {
            if (rule.apply)(&ctx, &mut queue) {
                fired.push(rule.id);
            }
        }
        // Any rule set still yields a full permutation.
        fill_remaining(&ctx, &mut queue);

        let plan = RotationPlan {
            queue: queue.into_vec(),
            fired,
        };
        debug!(queue = ?plan.queue, fired = ?plan.fired, "rotation queue built");
        plan
    }
}

/// Build the rotation queue with the default rules.
pub fn build_rotation_queue(assessment: &Assessment) -> Vec<TierId> {
    RotationPlanner::default().plan(assessment).into_queue()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{MenteeFeedback, TeamSkillAlignment};
    use crate::types::TierId::*;

    fn assessment(status: ManagerStatus, ratings: [u8; 5]) -> Assessment {
        let mut a = Assessment::new(status);
        a.self_ratings = TierId::all().iter().copied().zip(ratings).collect();
        a
    }

    fn with_team_gap(mut a: Assessment, gap: TierId) -> Assessment {
        a.align_to_team = true;
        a.team_skill_alignment = Some(TeamSkillAlignment {
            gap_tier: Some(gap),
        });
        a
    }

    fn with_mentee_t4(mut a: Assessment, score: u32) -> Assessment {
        a.mentee_feedback = Some(
            [(
                T4,
                MenteeFeedback {
                    score,
                    comment: None,
                },
            )]
            .into_iter()
            .collect(),
        );
        a
    }

    fn assert_permutation(queue: &[TierId]) {
        let mut sorted = queue.to_vec();
        sorted.sort();
        assert_eq!(sorted, TierId::all(), "not a permutation: {queue:?}");
    }

    #[test]
    fn queue_move_to_keeps_unique() {
        let mut q = RotationQueue::new();
        for t in TierId::all() {
            q.push_unique(*t);
        }
        assert!(!q.push_unique(T2));
        assert!(q.move_to(1, T5));
        assert_eq!(q.as_slice(), &[T1, T5, T2, T3, T4]);
        assert!(!q.move_to(1, T5));
        assert!(q.move_to_front(T4));
        assert_eq!(q.as_slice(), &[T4, T1, T5, T2, T3]);
    }

    #[test]
    fn queue_move_to_inserts_missing_tier() {
        let mut q = RotationQueue::new();
        q.push_unique(T3);
        assert!(q.move_to(1, T1));
        assert!(q.move_to(5, T2));
        assert_eq!(q.as_slice(), &[T3, T1, T2]);
    }

    #[test]
    fn low_confidence_then_goal_then_catalog() {
        let mut a = assessment(ManagerStatus::MidLevel, [3, 5, 5, 5, 5]);
        a.goal_priorities = vec![T3];
        let plan = RotationPlanner::default().plan(&a);
        assert_eq!(plan.queue, vec![T1, T3, T2, T4, T5]);
        assert_eq!(
            plan.fired,
            vec!["low_confidence", "goal_priorities", "fill_remaining"]
        );
    }

    #[test]
    fn goals_keep_supplied_order() {
        let mut a = assessment(ManagerStatus::Seasoned, [5, 5, 2, 5, 5]);
        a.goal_priorities = vec![T5, T3, T2];
        assert_eq!(build_rotation_queue(&a), vec![T3, T5, T2, T1, T4]);
    }

    #[test]
    fn new_manager_starts_with_t1() {
        let a = assessment(ManagerStatus::New, [5, 5, 2, 5, 5]);
        let plan = RotationPlanner::default().plan(&a);
        assert_eq!(plan.queue, vec![T1, T3, T2, T4, T5]);
        assert!(plan.fired.contains(&"new_manager_seniority"));
        assert_permutation(&plan.queue);
    }

    #[test]
    fn new_manager_rule_silent_when_t1_leads() {
        let a = assessment(ManagerStatus::New, [5, 5, 5, 5, 5]);
        let plan = RotationPlanner::default().plan(&a);
        assert_eq!(plan.queue[0], T1);
        assert!(!plan.fired.contains(&"new_manager_seniority"));
    }

    #[test]
    fn team_gap_takes_second_slot() {
        let a = with_team_gap(assessment(ManagerStatus::Seasoned, [5; 5]), T4);
        assert_eq!(build_rotation_queue(&a), vec![T1, T4, T2, T3, T5]);
    }

    #[test]
    fn team_gap_ignored_without_opt_in() {
        let mut a = with_team_gap(assessment(ManagerStatus::Seasoned, [5; 5]), T4);
        a.align_to_team = false;
        assert_eq!(build_rotation_queue(&a), vec![T1, T2, T3, T4, T5]);
    }

    #[test]
    fn team_gap_never_displaces_top_priority() {
        let a = with_team_gap(assessment(ManagerStatus::Seasoned, [5, 5, 5, 2, 5]), T4);
        let plan = RotationPlanner::default().plan(&a);
        assert_eq!(plan.queue, vec![T4, T1, T2, T3, T5]);
        assert!(!plan.fired.contains(&"team_alignment_gap"));
    }

    #[test]
    fn confidence_gap_overrides_team_gap_for_slot_one() {
        let mut a = with_team_gap(assessment(ManagerStatus::Seasoned, [5, 5, 5, 5, 8]), T3);
        a.peer_ratings = Some([(T5, 4)].into_iter().collect());
        let plan = RotationPlanner::default().plan(&a);
        assert_eq!(plan.queue, vec![T1, T5, T3, T2, T4]);
        assert!(plan.fired.contains(&"team_alignment_gap"));
        assert!(plan.fired.contains(&"confidence_gap"));
    }

    #[test]
    fn confidence_gap_uses_first_tier_in_catalog_order() {
        let mut a = assessment(ManagerStatus::Seasoned, [5, 5, 9, 5, 9]);
        a.peer_ratings = Some([(T3, 6), (T5, 2)].into_iter().collect());
        assert_eq!(build_rotation_queue(&a), vec![T1, T3, T2, T4, T5]);
    }

    #[test]
    fn confidence_gap_below_threshold_ignored() {
        let mut a = assessment(ManagerStatus::Seasoned, [5, 5, 5, 5, 7]);
        a.peer_ratings = Some([(T5, 5)].into_iter().collect());
        assert_eq!(build_rotation_queue(&a), vec![T1, T2, T3, T4, T5]);
    }

    #[test]
    fn mentee_gap_pulls_t4_forward() {
        let a = with_mentee_t4(assessment(ManagerStatus::MidLevel, [5; 5]), 65);
        let plan = RotationPlanner::default().plan(&a);
        assert_eq!(plan.queue, vec![T1, T4, T2, T3, T5]);
        assert_eq!(plan.fired.last(), Some(&"mentee_feedback_gap"));
    }

    #[test]
    fn mentee_gap_leaves_t4_at_top() {
        let a = with_mentee_t4(assessment(ManagerStatus::MidLevel, [5, 5, 5, 3, 5]), 40);
        let plan = RotationPlanner::default().plan(&a);
        assert_eq!(plan.queue(), &[T4, T1, T2, T3, T5]);
        assert!(!plan.fired().contains(&"mentee_feedback_gap"));
    }

    #[test]
    fn mentee_score_at_threshold_ignored() {
        let a = with_mentee_t4(assessment(ManagerStatus::MidLevel, [5; 5]), 70);
        assert_eq!(build_rotation_queue(&a), vec![T1, T2, T3, T4, T5]);
    }

    #[test]
    fn mentee_gap_runs_after_seniority() {
        let a = with_mentee_t4(assessment(ManagerStatus::New, [5, 5, 3, 5, 5]), 40);
        assert_eq!(build_rotation_queue(&a), vec![T1, T4, T3, T2, T5]);
    }

    #[test]
    fn missing_rating_is_not_low_confidence() {
        let mut a = assessment(ManagerStatus::Seasoned, [5; 5]);
        a.self_ratings.remove(&T2);
        assert_eq!(build_rotation_queue(&a), vec![T1, T2, T3, T4, T5]);
    }

    #[test]
    fn custom_rule_set_still_covers_every_tier() {
        let planner = RotationPlanner::new(vec![QueueRule {
            id: "goal_priorities",
            apply: goal_priorities,
        }]);
        let mut a = assessment(ManagerStatus::Seasoned, [5; 5]);
        a.goal_priorities = vec![T4];
        let plan = planner.plan(&a);
        assert_eq!(plan.queue, vec![T4, T1, T2, T3, T5]);
    }

    #[test]
    fn tier_for_month_cycles() {
        let plan = RotationPlan {
            queue: vec![T2, T1, T3, T4, T5],
            fired: vec![],
        };
        assert_eq!(plan.tier_for_month(1), T2);
        assert_eq!(plan.tier_for_month(5), T5);
        assert_eq!(plan.tier_for_month(6), T2);
        assert_eq!(plan.tier_for_month(24), T4);
    }
}
