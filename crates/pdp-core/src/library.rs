use crate::content_table::builtin_items;
use crate::error::{PdpError, Result};
use crate::types::{ContentType, Difficulty, TierId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Longest accepted base duration, in minutes.
pub const MAX_ITEM_DURATION: u32 = 24 * 60;

// ---------------------------------------------------------------------------
// ContentItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Globally unique across the library; the deduplication key.
    pub id: u32,
    pub tier: TierId,
    pub skill: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    /// Base duration in minutes.
    pub duration: u32,
    pub difficulty: Difficulty,
}

// ---------------------------------------------------------------------------
// ContentLibrary
// ---------------------------------------------------------------------------

/// Immutable, in-memory content catalog. Lookups return items in
/// declaration order so allocation is reproducible.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    items: Vec<ContentItem>,
}

impl ContentLibrary {
    /// The built-in table shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    pub fn from_items(items: Vec<ContentItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(PdpError::LibraryUnavailable(
                "library has no content items".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(PdpError::DuplicateContentId(item.id));
            }
            if item.duration == 0 {
                return Err(PdpError::InvalidContentItem {
                    id: item.id,
                    reason: "duration must be greater than zero".to_string(),
                });
            }
            if item.duration > MAX_ITEM_DURATION {
                return Err(PdpError::InvalidContentItem {
                    id: item.id,
                    reason: format!(
                        "duration {} exceeds {MAX_ITEM_DURATION} minutes",
                        item.duration
                    ),
                });
            }
            if item.title.trim().is_empty() {
                return Err(PdpError::InvalidContentItem {
                    id: item.id,
                    reason: "title is empty".to_string(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Load a YAML list of content items. Any read or parse failure is
    /// reported as `LibraryUnavailable`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            PdpError::LibraryUnavailable(format!("cannot read {}: {e}", path.display()))
        })?;
        let items: Vec<ContentItem> = serde_yaml::from_str(&data).map_err(|e| {
            PdpError::LibraryUnavailable(format!("cannot parse {}: {e}", path.display()))
        })?;
        Self::from_items(items)
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn by_tier(&self, tier: TierId) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.tier == tier).collect()
    }

    pub fn count(&self, tier: TierId, difficulty: Difficulty) -> usize {
        self.items
            .iter()
            .filter(|item| item.tier == tier && item.difficulty == difficulty)
            .count()
    }

    /// Items matching `tier` and `difficulty` whose id is not excluded.
    pub fn find_candidates(
        &self,
        tier: TierId,
        difficulty: Difficulty,
        exclude: &BTreeSet<u32>,
    ) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| {
                item.tier == tier && item.difficulty == difficulty && !exclude.contains(&item.id)
            })
            .collect()
    }

    /// Fallback lookup: same as `find_candidates` without the difficulty filter.
    pub fn find_candidates_any_difficulty(
        &self,
        tier: TierId,
        exclude: &BTreeSet<u32>,
    ) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.tier == tier && !exclude.contains(&item.id))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// LibrarySource
// ---------------------------------------------------------------------------

/// Read-only provider of the content table, consulted once at startup.
pub trait LibrarySource {
    fn load(&self) -> Result<ContentLibrary>;
}

pub struct BuiltinLibrary;

impl LibrarySource for BuiltinLibrary {
    fn load(&self) -> Result<ContentLibrary> {
        Ok(ContentLibrary::builtin())
    }
}

pub struct FileLibrary {
    pub path: PathBuf,
}

impl FileLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LibrarySource for FileLibrary {
    fn load(&self) -> Result<ContentLibrary> {
        ContentLibrary::load(&self.path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn item(id: u32, tier: TierId, difficulty: Difficulty) -> ContentItem {
        ContentItem {
            id,
            tier,
            skill: "Skill".to_string(),
            content_type: ContentType::Reading,
            title: format!("Item {id}"),
            duration: 30,
            difficulty,
        }
    }

    #[test]
    fn builtin_table_is_valid() {
        let lib = ContentLibrary::builtin();
        assert_eq!(lib.len(), 67);
        ContentLibrary::from_items(lib.items().to_vec()).unwrap();
    }

    #[test]
    fn builtin_counts_per_tier() {
        let lib = ContentLibrary::builtin();
        assert_eq!(lib.by_tier(TierId::T1).len(), 18);
        assert_eq!(lib.by_tier(TierId::T2).len(), 16);
        assert_eq!(lib.by_tier(TierId::T3).len(), 12);
        assert_eq!(lib.by_tier(TierId::T4).len(), 12);
        assert_eq!(lib.by_tier(TierId::T5).len(), 9);
        assert_eq!(lib.count(TierId::T2, Difficulty::Core), 5);
        assert_eq!(lib.count(TierId::T5, Difficulty::Mastery), 3);
    }

    #[test]
    fn normalized_string_id() {
        let lib = ContentLibrary::builtin();
        let item = lib.get(116).unwrap();
        assert_eq!(item.title, "Case: Purpose vs. Profit Alignment");
    }

    #[test]
    fn find_candidates_is_filtered_and_ordered() {
        let lib = ContentLibrary::builtin();
        let none = BTreeSet::new();
        let ids: Vec<u32> = lib
            .find_candidates(TierId::T1, Difficulty::Intro, &none)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![102, 105, 106, 113, 114, 117]);

        let used: BTreeSet<u32> = [102, 106].into_iter().collect();
        let ids: Vec<u32> = lib
            .find_candidates(TierId::T1, Difficulty::Intro, &used)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![105, 113, 114, 117]);
    }

    #[test]
    fn any_difficulty_drops_difficulty_filter() {
        let lib = ContentLibrary::builtin();
        let used: BTreeSet<u32> = [501, 502, 503, 504].into_iter().collect();
        let ids: Vec<u32> = lib
            .find_candidates_any_difficulty(TierId::T5, &used)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![505, 506, 507, 508, 509]);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = ContentLibrary::from_items(vec![
            item(1, TierId::T1, Difficulty::Intro),
            item(1, TierId::T2, Difficulty::Core),
        ])
        .unwrap_err();
        assert!(matches!(err, PdpError::DuplicateContentId(1)));
    }

    #[test]
    fn zero_duration_rejected() {
        let mut bad = item(7, TierId::T1, Difficulty::Intro);
        bad.duration = 0;
        let err = ContentLibrary::from_items(vec![bad]).unwrap_err();
        assert!(matches!(err, PdpError::InvalidContentItem { id: 7, .. }));
    }

    #[test]
    fn oversized_duration_rejected() {
        let mut bad = item(8, TierId::T2, Difficulty::Core);
        bad.duration = 40_000_000;
        let err = ContentLibrary::from_items(vec![bad]).unwrap_err();
        assert!(matches!(err, PdpError::InvalidContentItem { id: 8, .. }));

        let mut longest = item(9, TierId::T2, Difficulty::Core);
        longest.duration = MAX_ITEM_DURATION;
        assert!(ContentLibrary::from_items(vec![longest]).is_ok());
    }

    #[test]
    fn oversized_duration_in_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.yaml");
        std::fs::write(
            &path,
            "- id: 1\n  tier: T2\n  skill: Meetings\n  type: Quiz\n  title: Endless\n  duration: 40000000\n  difficulty: Intro\n",
        )
        .unwrap();
        assert!(matches!(
            ContentLibrary::load(&path),
            Err(PdpError::InvalidContentItem { id: 1, .. })
        ));
    }

    #[test]
    fn empty_library_is_unavailable() {
        let err = ContentLibrary::from_items(vec![]).unwrap_err();
        assert!(matches!(err, PdpError::LibraryUnavailable(_)));
    }

    #[test]
    fn file_library_loads_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.yaml");
        let yaml = r#"
- id: 1
  tier: T2
  skill: Goals
  type: Case Study
  title: Case one
  duration: 40
  difficulty: Core
- id: 2
  tier: T2
  skill: Goals
  type: Role-Play
  title: Sim two
  duration: 50
  difficulty: Mastery
"#;
        std::fs::write(&path, yaml).unwrap();
        let lib = FileLibrary::new(&path).load().unwrap();
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.items()[0].content_type, ContentType::CaseStudy);
        assert_eq!(lib.items()[1].content_type, ContentType::RolePlay);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = FileLibrary::new(dir.path().join("nope.yaml"))
            .load()
            .unwrap_err();
        assert!(matches!(err, PdpError::LibraryUnavailable(_)));
    }
}
