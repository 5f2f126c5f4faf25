use crate::allocator::allocate_month;
use crate::assessment::Assessment;
use crate::error::{PdpError, Result};
use crate::library::{ContentLibrary, LibrarySource};
use crate::plan::{Plan, PlanMonth};
use crate::rotation::{RotationPlan, RotationPlanner};
use std::collections::BTreeSet;
use tracing::{info, warn};

pub const PLAN_MONTHS: u32 = 24;

/// Generates 24-month plans against one loaded content library.
///
/// Holds no mutable state, so one generator can serve concurrent callers.
pub struct PlanGenerator {
    library: ContentLibrary,
    planner: RotationPlanner,
    require_complete_ratings: bool,
}

impl PlanGenerator {
    pub fn new(library: ContentLibrary) -> Self {
        Self {
            library,
            planner: RotationPlanner::default(),
            require_complete_ratings: true,
        }
    }

    /// Load the library from `source`, failing fast if it is unavailable.
    pub fn from_source(source: &dyn LibrarySource) -> Result<Self> {
        Ok(Self::new(source.load()?))
    }

    /// When false, tiers without a self rating are allowed and fall back to
    /// Mastery content at base duration.
    pub fn require_complete_ratings(mut self, require: bool) -> Self {
        self.require_complete_ratings = require;
        self
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    pub fn rotation(&self, assessment: &Assessment) -> RotationPlan {
        self.planner.plan(assessment)
    }

    pub fn generate(&self, assessment: &Assessment, owner_uid: &str) -> Result<Plan> {
        if self.library.is_empty() {
            return Err(PdpError::LibraryUnavailable(
                "library has no content items".to_string(),
            ));
        }
        assessment.validate(self.require_complete_ratings)?;
        for tier in assessment.missing_ratings() {
            warn!(%tier, "no self rating; using Mastery content at base duration");
        }

        let rotation = self.planner.plan(assessment);
        let mut used = BTreeSet::new();
        let months: Vec<PlanMonth> = (1..=PLAN_MONTHS)
            .map(|month| {
                let tier = rotation.tier_for_month(month);
                allocate_month(
                    &self.library,
                    month,
                    tier,
                    assessment.self_rating(tier),
                    &mut used,
                )
            })
            .collect();

        info!(
            owner = owner_uid,
            queue = ?rotation.queue(),
            items = used.len(),
            "plan generated"
        );
        Ok(Plan::new(owner_uid, assessment.clone(), months))
    }
}

/// Generate a plan against the built-in library.
pub fn generate_plan(assessment: &Assessment, owner_uid: &str) -> Result<Plan> {
    PlanGenerator::new(ContentLibrary::builtin()).generate(assessment, owner_uid)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
