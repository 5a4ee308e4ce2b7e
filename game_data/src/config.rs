//! Generator configuration, read from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::documents::EntityKind;
use crate::error::{DataError, Result};
use crate::lookup::IdBound;

/// Highest ability id that belongs to the main series.
pub const DEFAULT_MAX_ABILITY_ID: IdBound = IdBound(188);

/// `local_language_id` of English prose.
pub const ENGLISH_LANGUAGE_ID: i64 = 9;

/// File names of the emitted document collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputFiles {
    pub creatures: String,
    pub moves: String,
    pub abilities: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            creatures: "pokemon.json".to_string(),
            moves: "moves.json".to_string(),
            abilities: "abilities.json".to_string(),
        }
    }
}

impl OutputFiles {
    pub fn file_name(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Creature => &self.creatures,
            EntityKind::Move => &self.moves,
            EntityKind::Ability => &self.abilities,
        }
    }
}

/// Configuration for one generation run.
///
/// ```toml
/// data_dir = "data/csv"
/// output_dir = "data"
/// max_ability_id = 188
/// language_id = 9
///
/// [outputs]
/// creatures = "pokemon.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding one `<table>.csv` per source table.
    pub data_dir: PathBuf,

    /// Directory the document collections are written to.
    pub output_dir: PathBuf,

    pub outputs: OutputFiles,

    /// Ability ids above this are synthetic and excluded.
    pub max_ability_id: IdBound,

    /// Move ids above this are excluded; unbounded when absent.
    pub max_move_id: Option<IdBound>,

    /// Only prose rows in this language are read; every row when absent.
    pub language_id: Option<i64>,

    /// Pretty-print emitted JSON.
    pub pretty: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/csv"),
            output_dir: PathBuf::from("data"),
            outputs: OutputFiles::default(),
            max_ability_id: DEFAULT_MAX_ABILITY_ID,
            max_move_id: None,
            language_id: Some(ENGLISH_LANGUAGE_ID),
            pretty: false,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from TOML text; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Where the collection of `kind` is written.
    pub fn output_path(&self, kind: EntityKind) -> PathBuf {
        self.output_dir.join(self.outputs.file_name(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_ability_id, IdBound(188));
        assert_eq!(config.language_id, Some(9));
        assert_eq!(
            config.output_path(EntityKind::Creature),
            Path::new("data/pokemon.json")
        );
    }

    #[test]
    fn test_partial_toml() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            output_dir = "out"
            max_ability_id = 191
            max_move_id = 621
            pretty = true

            [outputs]
            moves = "move-index.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_ability_id, IdBound(191));
        assert_eq!(config.max_move_id, Some(IdBound(621)));
        assert!(config.pretty);
        assert_eq!(config.data_dir, Path::new("data/csv"));
        assert_eq!(config.output_path(EntityKind::Move), Path::new("out/move-index.json"));
        assert_eq!(config.outputs.abilities, "abilities.json");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GeneratorConfig::from_toml_str("max_abilities = 3").unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("dexbase.toml")).unwrap_err();
        assert!(matches!(err, DataError::ReadConfig { .. }));
    }
}
