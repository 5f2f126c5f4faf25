use crate::error::Result;
use crate::library::{BuiltinLibrary, FileLibrary, LibrarySource};
use crate::paths;
use crate::review::GenericBaseline;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// LibraryConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// YAML content table replacing the built-in library. Relative paths
    /// resolve against the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_require_complete")]
    pub require_complete_ratings: bool,
    #[serde(default)]
    pub generic_baseline: GenericBaseline,
}

fn default_require_complete() -> bool {
    true
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            require_complete_ratings: default_require_complete(),
            generic_baseline: GenericBaseline::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            library: LibraryConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Config {
    /// Load `.pdp/config.yaml`, or defaults when the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn library_path(&self, root: &Path) -> Option<PathBuf> {
        self.library.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        })
    }

    pub fn library_source(&self, root: &Path) -> Box<dyn LibrarySource> {
        match self.library_path(root) {
            Some(path) => Box::new(FileLibrary::new(path)),
            None => Box::new(BuiltinLibrary),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let Some(path) = self.library_path(root) {
            if !path.exists() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("library.path '{}' does not exist", path.display()),
                });
            }
        }

        let baseline = &self.generation.generic_baseline;
        for (name, value) in [
            ("intro_items", baseline.intro_items),
            ("mastery_items", baseline.mastery_items),
            ("total_duration", baseline.total_duration),
        ] {
            if value == 0 {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("generation.generic_baseline.{name} is 0"),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
