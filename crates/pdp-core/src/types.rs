use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TierId
// ---------------------------------------------------------------------------

/// Competency tier identifier. Declaration order is catalog order and is the
/// tie-break order wherever tiers are compared without other signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierId {
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl TierId {
    pub fn all() -> &'static [TierId] {
        &[TierId::T1, TierId::T2, TierId::T3, TierId::T4, TierId::T5]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TierId::T1 => "T1",
            TierId::T2 => "T2",
            TierId::T3 => "T3",
            TierId::T4 => "T4",
            TierId::T5 => "T5",
        }
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TierId {
    type Err = crate::error::PdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "T1" => Ok(TierId::T1),
            "T2" => Ok(TierId::T2),
            "T3" => Ok(TierId::T3),
            "T4" => Ok(TierId::T4),
            "T5" => Ok(TierId::T5),
            _ => Err(crate::error::PdpError::UnknownTier(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Intro,
    Core,
    Mastery,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Intro, Difficulty::Core, Difficulty::Mastery]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Intro => "Intro",
            Difficulty::Core => "Core",
            Difficulty::Mastery => "Mastery",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = crate::error::PdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intro" => Ok(Difficulty::Intro),
            "core" => Ok(Difficulty::Core),
            "mastery" => Ok(Difficulty::Mastery),
            _ => Err(crate::error::PdpError::UnknownDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Reading,
    Exercise,
    Journal,
    Quiz,
    #[serde(rename = "Case Study", alias = "CaseStudy")]
    CaseStudy,
    #[serde(rename = "Role-Play", alias = "RolePlay")]
    RolePlay,
    Tool,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Reading => "Reading",
            ContentType::Exercise => "Exercise",
            ContentType::Journal => "Journal",
            ContentType::Quiz => "Quiz",
            ContentType::CaseStudy => "Case Study",
            ContentType::RolePlay => "Role-Play",
            ContentType::Tool => "Tool",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ManagerStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagerStatus {
    New,
    #[serde(rename = "Mid-Level", alias = "MidLevel")]
    MidLevel,
    Seasoned,
}

impl ManagerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ManagerStatus::New => "New",
            ManagerStatus::MidLevel => "Mid-Level",
            ManagerStatus::Seasoned => "Seasoned",
        }
    }
}

impl fmt::Display for ManagerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ManagerStatus {
    type Err = crate::error::PdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(ManagerStatus::New),
            "mid-level" | "midlevel" | "mid_level" => Ok(ManagerStatus::MidLevel),
            "seasoned" => Ok(ManagerStatus::Seasoned),
            _ => Err(crate::error::PdpError::UnknownManagerStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ProgressStatus
// ---------------------------------------------------------------------------

/// Completion state shared by plan months and allocated items. Generation
/// only ever produces `Pending`; the tracking side flips it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgressStatus {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressStatus::Pending => "Pending",
            ProgressStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_order_is_catalog_order() {
        let mut tiers = vec![TierId::T4, TierId::T1, TierId::T5, TierId::T2, TierId::T3];
        tiers.sort();
        assert_eq!(tiers, TierId::all());
    }

    #[test]
    fn tier_from_str_accepts_lowercase() {
        assert_eq!("t3".parse::<TierId>().unwrap(), TierId::T3);
        assert!("T9".parse::<TierId>().is_err());
    }

    #[test]
    fn content_type_uses_table_spelling() {
        let json = serde_json::to_string(&ContentType::CaseStudy).unwrap();
        assert_eq!(json, "\"Case Study\"");
        let parsed: ContentType = serde_json::from_str("\"RolePlay\"").unwrap();
        assert_eq!(parsed, ContentType::RolePlay);
        let parsed: ContentType = serde_json::from_str("\"Role-Play\"").unwrap();
        assert_eq!(parsed, ContentType::RolePlay);
    }

    #[test]
    fn manager_status_serializes_hyphenated() {
        let json = serde_json::to_string(&ManagerStatus::MidLevel).unwrap();
        assert_eq!(json, "\"Mid-Level\"");
        assert_eq!(
            "mid-level".parse::<ManagerStatus>().unwrap(),
            ManagerStatus::MidLevel
        );
    }

    #[test]
    fn difficulty_parse_is_case_insensitive() {
        assert_eq!("MASTERY".parse::<Difficulty>().unwrap(), Difficulty::Mastery);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
