use crate::types::TierId;
use serde::Serialize;

/// Static metadata for one competency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub id: TierId,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

static CATALOG: [Tier; 5] = [
    Tier {
        id: TierId::T1,
        name: "Lead Self & Mindsets",
        icon: "HeartPulse",
        color: "indigo-500",
    },
    Tier {
        id: TierId::T2,
        name: "Lead Work & Execution",
        icon: "Briefcase",
        color: "green-600",
    },
    Tier {
        id: TierId::T3,
        name: "Lead People & Coaching",
        icon: "Users",
        color: "yellow-600",
    },
    Tier {
        id: TierId::T4,
        name: "Conflict & Team Health",
        icon: "AlertTriangle",
        color: "red-600",
    },
    Tier {
        id: TierId::T5,
        name: "Strategy & Vision",
        icon: "TrendingUp",
        color: "cyan-600",
    },
];

pub fn catalog() -> &'static [Tier] {
    &CATALOG
}

pub fn tier(id: TierId) -> &'static Tier {
    &CATALOG[id.index()]
}

pub fn tier_name(id: TierId) -> &'static str {
    tier(id).name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_tier() {
        for id in TierId::all() {
            assert_eq!(tier(*id).id, *id);
        }
        assert_eq!(catalog().len(), TierId::all().len());
    }

    #[test]
    fn tier_names() {
        assert_eq!(tier_name(TierId::T1), "Lead Self & Mindsets");
        assert_eq!(tier_name(TierId::T5), "Strategy & Vision");
    }
}
