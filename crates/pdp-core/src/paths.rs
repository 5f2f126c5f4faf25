use crate::error::{PdpError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const PDP_DIR: &str = ".pdp";
pub const PLANS_DIR: &str = ".pdp/plans";
pub const CONFIG_FILE: &str = ".pdp/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn pdp_dir(root: &Path) -> PathBuf {
    root.join(PDP_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn plans_dir(root: &Path) -> PathBuf {
    root.join(PLANS_DIR)
}

pub fn plan_path(root: &Path, owner_uid: &str) -> PathBuf {
    plans_dir(root).join(format!("{owner_uid}.yaml"))
}

// ---------------------------------------------------------------------------
// Owner uid validation
// ---------------------------------------------------------------------------

static OWNER_UID_RE: OnceLock<Regex> = OnceLock::new();

fn owner_uid_re() -> &'static Regex {
    OWNER_UID_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_\-]{1,128}$").unwrap())
}

/// Owner uids become file names, so only a conservative alphabet is allowed.
pub fn validate_owner_uid(owner_uid: &str) -> Result<()> {
    if !owner_uid_re().is_match(owner_uid) {
        return Err(PdpError::InvalidOwnerUid(owner_uid.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
