use crate::library::ContentLibrary;
use crate::plan::{AllocatedItem, PlanMonth};
use crate::tier::tier_name;
use crate::types::{Difficulty, TierId};
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub const ITEMS_PER_MONTH: usize = 4;

/// Ratings at or above this compress content.
pub const COMPRESS_RATING_MIN: u8 = 8;
/// Ratings at or below this expand content.
pub const EXPAND_RATING_MAX: u8 = 3;
pub const DURATION_FLOOR: u32 = 15;
pub const DURATION_CEILING: u32 = 90;

// ---------------------------------------------------------------------------
// Rating → difficulty / duration
// ---------------------------------------------------------------------------

/// Target difficulty for a self rating. An absent rating lands on
/// `Mastery`, the last rung of the ladder.
pub fn classify(rating: Option<u8>) -> Difficulty {
    match rating {
        Some(r) if r <= 4 => Difficulty::Intro,
        Some(r) if r <= 7 => Difficulty::Core,
        _ => Difficulty::Mastery,
    }
}

/// Scale a base duration by confidence. Confident learners get 70% (never
/// below 15 minutes), low-confidence learners 130% (never above 90).
/// Anything else, including an absent rating, keeps the base duration.
pub fn scale_duration(rating: Option<u8>, base: u32) -> u32 {
    match rating {
        Some(r) if r >= COMPRESS_RATING_MIN => percent_rounded(base, 70).max(DURATION_FLOOR),
        Some(r) if r <= EXPAND_RATING_MAX => percent_rounded(base, 130).min(DURATION_CEILING),
        _ => base,
    }
}

/// `base * pct / 100`, rounded half up, saturating at `u32::MAX`.
fn percent_rounded(base: u32, pct: u32) -> u32 {
    let scaled = (u64::from(base) * u64::from(pct) + 50) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Month allocation
// ---------------------------------------------------------------------------

/// Allocate up to four unused items of `tier` for one month.
///
/// Items are drawn from the target-difficulty pool first, then from the
/// tier's remaining items of any difficulty. Every selected id is added to
/// `used`, which the caller threads through all months of a plan.
pub fn allocate_month(
    library: &ContentLibrary,
    month: u32,
    tier: TierId,
    rating: Option<u8>,
    used: &mut BTreeSet<u32>,
) -> PlanMonth {
    let target = classify(rating);
    let mut content: Vec<AllocatedItem> = Vec::with_capacity(ITEMS_PER_MONTH);

    let picked: Vec<_> = library
        .find_candidates(tier, target, used)
        .into_iter()
        .take(ITEMS_PER_MONTH)
        .collect();
    for item in picked {
        used.insert(item.id);
        content.push(AllocatedItem::from_item(item, scale_duration(rating, item.duration)));
    }

    let from_target = content.len();
    if content.len() < ITEMS_PER_MONTH {
        let picked: Vec<_> = library
            .find_candidates_any_difficulty(tier, used)
            .into_iter()
            .take(ITEMS_PER_MONTH - content.len())
            .collect();
        for item in picked {
            used.insert(item.id);
            content.push(AllocatedItem::from_item(item, scale_duration(rating, item.duration)));
        }
    }

    debug!(
        month,
        %tier,
        difficulty = %target,
        items = content.len(),
        fallback = content.len() - from_target,
        "month allocated"
    );
    if content.len() < ITEMS_PER_MONTH {
        warn!(month, %tier, items = content.len(), "content pool exhausted");
    }

    PlanMonth::new(month, tier, format!("Focus on {}", tier_name(tier)), content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ContentItem;
    use crate::types::{ContentType, ProgressStatus};

    fn ids(month: &PlanMonth) -> Vec<u32> {
        month.required_content.iter().map(|i| i.id).collect()
    }

    #[test]
    fn classify_ladder() {
        assert_eq!(classify(Some(1)), Difficulty::Intro);
        assert_eq!(classify(Some(4)), Difficulty::Intro);
        assert_eq!(classify(Some(5)), Difficulty::Core);
        assert_eq!(classify(Some(7)), Difficulty::Core);
        assert_eq!(classify(Some(8)), Difficulty::Mastery);
        assert_eq!(classify(Some(10)), Difficulty::Mastery);
    }

    #[test]
    fn classify_absent_rating_is_mastery() {
        assert_eq!(classify(None), Difficulty::Mastery);
    }

    #[test]
    fn scale_examples() {
        assert_eq!(scale_duration(Some(9), 30), 21);
        assert_eq!(scale_duration(Some(2), 30), 39);
        assert_eq!(scale_duration(Some(5), 30), 30);
        assert_eq!(scale_duration(Some(8), 10), 15);
        assert_eq!(scale_duration(Some(1), 80), 90);
    }

    #[test]
    fn scale_boundaries() {
        assert_eq!(scale_duration(Some(4), 30), 30);
        assert_eq!(scale_duration(Some(7), 30), 30);
        assert_eq!(scale_duration(Some(3), 30), 39);
        assert_eq!(scale_duration(Some(8), 30), 21);
    }

    #[test]
    fn scale_rounds_half_up() {
        assert_eq!(scale_duration(Some(9), 45), 32);
        assert_eq!(scale_duration(Some(9), 25), 18);
        assert_eq!(scale_duration(Some(2), 25), 33);
    }

    #[test]
    fn scale_large_base_does_not_overflow() {
        assert_eq!(scale_duration(Some(2), 40_000_000), DURATION_CEILING);
        assert_eq!(scale_duration(Some(9), 40_000_000), 28_000_000);
        assert_eq!(scale_duration(Some(9), u32::MAX), 3_006_477_107);
        assert_eq!(scale_duration(Some(1), u32::MAX), DURATION_CEILING);
    }

    #[test]
    fn scale_absent_rating_unchanged() {
        assert_eq!(scale_duration(None, 45), 45);
    }

    #[test]
    fn allocates_four_target_items_in_order() {
        let lib = ContentLibrary::builtin();
        let mut used = BTreeSet::new();
        let m = allocate_month(&lib, 1, TierId::T1, Some(3), &mut used);
        assert_eq!(m.month, 1);
        assert_eq!(m.tier, TierId::T1);
        assert_eq!(m.theme, "Focus on Lead Self & Mindsets");
        assert_eq!(ids(&m), vec![102, 105, 106, 113]);
        assert!(m.required_content.iter().all(|i| i.difficulty == Difficulty::Intro));
        assert!(m.required_content.iter().all(|i| i.status == ProgressStatus::Pending));
        // 30, 30, 40, 50 expanded by 130%
        let durations: Vec<u32> = m.required_content.iter().map(|i| i.duration).collect();
        assert_eq!(durations, vec![39, 39, 52, 65]);
        assert_eq!(m.total_duration, 195);
        assert_eq!(used, [102, 105, 106, 113].into_iter().collect());
    }

    #[test]
    fn falls_back_to_any_difficulty() {
        let lib = ContentLibrary::builtin();
        let mut used = BTreeSet::new();
        // T5 has three Core items; the fourth slot comes from the full tier.
        let m = allocate_month(&lib, 2, TierId::T5, Some(6), &mut used);
        assert_eq!(ids(&m), vec![501, 506, 507, 502]);
        assert_eq!(m.required_content[3].difficulty, Difficulty::Mastery);
        assert_eq!(m.total_duration, 45 + 35 + 30 + 30);
    }

    #[test]
    fn never_reuses_ids_across_months() {
        let lib = ContentLibrary::builtin();
        let mut used = BTreeSet::new();
        let first = allocate_month(&lib, 1, TierId::T5, Some(6), &mut used);
        let second = allocate_month(&lib, 6, TierId::T5, Some(6), &mut used);
        let third = allocate_month(&lib, 11, TierId::T5, Some(6), &mut used);
        assert_eq!(ids(&second), vec![503, 504, 505, 508]);
        assert_eq!(ids(&third), vec![509]);
        assert_eq!(first.required_content.len() + second.required_content.len() + 1, 9);
    }

    #[test]
    fn exhausted_tier_yields_empty_month() {
        let lib = ContentLibrary::builtin();
        let mut used: BTreeSet<u32> = lib.by_tier(TierId::T5).iter().map(|i| i.id).collect();
        let m = allocate_month(&lib, 24, TierId::T5, Some(5), &mut used);
        assert!(m.required_content.is_empty());
        assert_eq!(m.total_duration, 0);
    }

    #[test]
    fn absent_rating_uses_mastery_and_base_duration() {
        let lib = ContentLibrary::builtin();
        let mut used = BTreeSet::new();
        let m = allocate_month(&lib, 1, TierId::T3, None, &mut used);
        assert_eq!(ids(&m), vec![305, 306, 309, 312]);
        let durations: Vec<u32> = m.required_content.iter().map(|i| i.duration).collect();
        assert_eq!(durations, vec![50, 55, 45, 60]);
    }

    #[test]
    fn compressed_duration_respects_floor() {
        let lib = ContentLibrary::from_items(vec![ContentItem {
            id: 9,
            tier: TierId::T2,
            skill: "Meetings".to_string(),
            content_type: ContentType::Quiz,
            title: "Short quiz".to_string(),
            duration: 12,
            difficulty: Difficulty::Mastery,
        }])
        .unwrap();
        let mut used = BTreeSet::new();
        let m = allocate_month(&lib, 1, TierId::T2, Some(10), &mut used);
        assert_eq!(m.required_content[0].duration, 15);
        assert_eq!(m.total_duration, 15);
    }
}
