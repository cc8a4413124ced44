//! libtranslit-core
//!
//! Script-agnostic transliteration engine shared by script-specific crates
//! (libmalayalam).
//!
//! A script crate supplies three lookup tables (base characters, dependent
//! vowel signs, multi-character clusters) bundled as a `Scheme`; the
//! `Transliterator` scans input left to right and renders it in the target
//! script.
//!
//! Public API:
//! - `Table` - Static (`phf`) or owned lookup table
//! - `Scheme` / `SchemeDef` - Named bundle of the three tables
//! - `Transliterator` - The scanning engine
//! - `Composition` / `Segment` - Per-segment account of a transliteration
//! - `Config` - Engine options
use serde::{Deserialize, Serialize};

pub mod table;
pub use table::{Scheme, SchemeDef, Table};

pub mod engine;
pub use engine::Transliterator;

pub mod composition;
pub use composition::{Composition, Segment, SegmentKind};

/// Engine configuration.
///
/// The defaults reproduce the reference behavior exactly; script crates only
/// need a custom config when experimenting with the rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Drop the scheme's inherent vowel marker from a base value when a
    /// dependent vowel sign follows (e.g. "کَ" + "ِ" -> "کِ").
    pub strip_inherent_vowel: bool,

    /// Widest cluster window tried at each position.
    /// `None` derives it from the longest key in the cluster table.
    pub max_cluster_chars: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_inherent_vowel: true,
            max_cluster_chars: None,
        }
    }
}

impl Config {
    /// Read an engine config from a TOML file.
    ///
    /// Errors name the offending file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| format!("invalid config {}: {}", path.display(), e).into())
    }

    /// Write this config as pretty TOML to `path`.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?)
            .map_err(|e| format!("cannot write config {}: {}", path.display(), e))?;
        Ok(())
    }

    /// Parse a config; absent keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
