use crate::types::TierId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdpError {
    #[error("not initialized: run 'pdp init'")]
    NotInitialized,

    #[error("content library unavailable: {0}")]
    LibraryUnavailable(String),

    #[error("duplicate content id {0} in library")]
    DuplicateContentId(u32),

    #[error("invalid content item {id}: {reason}")]
    InvalidContentItem { id: u32, reason: String },

    #[error("unknown tier: {0}")]
    UnknownTier(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown manager status: {0}")]
    UnknownManagerStatus(String),

    #[error("missing self rating for tier {0}")]
    MissingSelfRating(TierId),

    #[error("{kind} rating for tier {tier} must be 1-10, got {value}")]
    RatingOutOfRange {
        kind: &'static str,
        tier: TierId,
        value: u8,
    },

    #[error("at most 3 goal priorities allowed, got {0}")]
    TooManyGoals(usize),

    #[error("goal priority {0} listed more than once")]
    DuplicateGoal(TierId),

    #[error("mentee feedback score for tier {tier} must be 0-100, got {score}")]
    MenteeScoreOutOfRange { tier: TierId, score: u32 },

    #[error("invalid owner uid '{0}': must be 1-128 alphanumeric, '-' or '_' characters")]
    InvalidOwnerUid(String),

    #[error("no plan stored for owner: {0}")]
    PlanNotFound(String),

    #[error("month {month} out of range: plan has {len} months")]
    MonthOutOfRange { month: u32, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PdpError>;
