// core/src/table.rs
//
// Lookup tables and the `Scheme` that bundles them.
//
// Script crates ship their tables as compile-time `phf` maps; schemes loaded
// at runtime (TOML/JSON) use owned hash maps. The engine only sees `Table`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A read-only mapping from source-script strings to target-script strings.
#[derive(Debug, Clone)]
pub enum Table {
    /// Compile-time table, typically built with `phf::phf_map!`.
    Static(&'static phf::Map<&'static str, &'static str>),
    /// Table built at runtime from a scheme file.
    Owned(AHashMap<String, String>),
}

impl Table {
    /// Build an owned table from any iterator of string pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Table::Owned(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Table::Static(map) => map.get(key).copied(),
            Table::Owned(map) => map.get(key).map(String::as_str),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        match self {
            Table::Static(map) => map.len(),
            Table::Owned(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all `(key, value)` entries in unspecified order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        match self {
            Table::Static(map) => Box::new(map.entries().map(|(k, v)| (*k, *v))),
            Table::Owned(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
        }
    }

    /// Length in characters of the longest key (0 for an empty table).
    pub fn max_key_chars(&self) -> usize {
        self.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0)
    }

    /// Copy the table into a sorted map, used for export and serialization.
    pub fn to_btree(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl From<BTreeMap<String, String>> for Table {
    fn from(map: BTreeMap<String, String>) -> Self {
        Table::from_pairs(map)
    }
}

/// The three tables and inherent vowel marker that define one
/// source-script -> target-script rendering.
#[derive(Debug, Clone)]
pub struct Scheme {
    pub name: String,
    /// Target-script marker for the implicit vowel of a bare consonant
    /// (Fatha for Arabic targets). Empty disables stripping.
    pub inherent_vowel: String,
    /// Single source characters: vowels, consonants, final forms, digits, punctuation.
    pub base: Table,
    /// Dependent vowel signs.
    pub vowel_signs: Table,
    /// Multi-character clusters, tried longest first.
    pub clusters: Table,
}

/// Serializable form of a `Scheme`.
///
/// Maps are sorted so exported files are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemeDef {
    pub name: String,
    #[serde(default)]
    pub inherent_vowel: String,
    #[serde(default)]
    pub base: BTreeMap<String, String>,
    #[serde(default)]
    pub vowel_signs: BTreeMap<String, String>,
    #[serde(default)]
    pub clusters: BTreeMap<String, String>,
}

impl Scheme {
    pub fn new(
        name: impl Into<String>,
        inherent_vowel: impl Into<String>,
        base: Table,
        vowel_signs: Table,
        clusters: Table,
    ) -> Self {
        Self {
            name: name.into(),
            inherent_vowel: inherent_vowel.into(),
            base,
            vowel_signs,
            clusters,
        }
    }

    pub fn from_def(def: SchemeDef) -> Self {
        Self {
            name: def.name,
            inherent_vowel: def.inherent_vowel,
            base: def.base.into(),
            vowel_signs: def.vowel_signs.into(),
            clusters: def.clusters.into(),
        }
    }

    pub fn to_def(&self) -> SchemeDef {
        SchemeDef {
            name: self.name.clone(),
            inherent_vowel: self.inherent_vowel.clone(),
            base: self.base.to_btree(),
            vowel_signs: self.vowel_signs.to_btree(),
            clusters: self.clusters.to_btree(),
        }
    }

    /// Parse a scheme from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let def: SchemeDef = toml::from_str(content)?;
        Ok(Self::from_def(def))
    }

    /// Parse a scheme from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let def: SchemeDef = serde_json::from_str(content)?;
        Ok(Self::from_def(def))
    }

    /// Load a scheme from a TOML file. Errors name the file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read scheme {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| format!("invalid scheme {}: {}", path.display(), e).into())
    }

    /// Report authoring problems the engine tolerates but that usually mean
    /// a table entry will never be reached.
    ///
    /// Returned messages are sorted for deterministic output.
    pub fn lint(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (key, _) in self.base.iter() {
            if key.chars().count() != 1 {
                issues.push(format!("base key {:?} is not a single character", key));
            }
            if self.vowel_signs.contains_key(key) {
                issues.push(format!("key {:?} is both a base character and a vowel sign", key));
            }
        }
        for (key, _) in self.vowel_signs.iter() {
            if key.chars().count() != 1 {
                issues.push(format!("vowel sign key {:?} is not a single character", key));
            }
        }
        for (key, _) in self.clusters.iter() {
            if key.chars().count() < 2 {
                issues.push(format!("cluster key {:?} is shorter than two characters", key));
            }
        }

        issues.sort();
        issues
    }
}
