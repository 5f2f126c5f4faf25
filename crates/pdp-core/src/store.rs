use crate::error::{PdpError, Result};
use crate::io::atomic_write;
use crate::paths;
use crate::plan::Plan;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persistence for generated plans, keyed by owner uid.
///
/// Saving replaces any earlier plan for the same owner.
pub trait PlanStore {
    fn save(&self, plan: &Plan) -> Result<()>;
    fn load(&self, owner_uid: &str) -> Result<Plan>;
}

/// Stores each plan as `.pdp/plans/<ownerUid>.yaml` under a project root.
pub struct FilePlanStore {
    root: PathBuf,
}

impl FilePlanStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_initialized(&self) -> Result<()> {
        if !paths::pdp_dir(&self.root).is_dir() {
            return Err(PdpError::NotInitialized);
        }
        Ok(())
    }

    pub fn exists(&self, owner_uid: &str) -> bool {
        paths::validate_owner_uid(owner_uid).is_ok()
            && paths::plan_path(&self.root, owner_uid).is_file()
    }
}

impl PlanStore for FilePlanStore {
    fn save(&self, plan: &Plan) -> Result<()> {
        paths::validate_owner_uid(&plan.owner_uid)?;
        self.ensure_initialized()?;
        let path = paths::plan_path(&self.root, &plan.owner_uid);
        let data = serde_yaml::to_string(plan)?;
        atomic_write(&path, data.as_bytes())?;
        info!(owner = %plan.owner_uid, path = %path.display(), "plan saved");
        Ok(())
    }

    fn load(&self, owner_uid: &str) -> Result<Plan> {
        paths::validate_owner_uid(owner_uid)?;
        self.ensure_initialized()?;
        let path = paths::plan_path(&self.root, owner_uid);
        if !path.exists() {
            return Err(PdpError::PlanNotFound(owner_uid.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let plan: Plan = serde_yaml::from_str(&data)?;
        Ok(plan)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
