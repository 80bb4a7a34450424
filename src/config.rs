use crate::errors::ConfigError;
use schema::Species;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterKind {
    Wild,
    Trainer,
}

/// Rule knobs that differ between the written rules and the cartridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleRules {
    /// Effective speed is divided by this while paralyzed.
    pub paralysis_speed_divisor: u16,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            paralysis_speed_divisor: 2,
        }
    }
}

/// How an encounter is set up. Everything except `kind` is optional in RON.
///
/// ```ron
/// (
///     kind: Trainer,
///     trainer_id: Some(12),
///     rules: (paralysis_speed_divisor: 4),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    pub kind: EncounterKind,
    #[serde(default)]
    pub trainer_id: Option<u16>,
    /// The scripted first battle cannot be fled from even when wild.
    #[serde(default)]
    pub first_battle: bool,
    /// Encounter takes place while diving; boosts the Dive Ball.
    #[serde(default)]
    pub underwater: bool,
    /// Species already registered as caught; boosts the Repeat Ball.
    #[serde(default)]
    pub caught_species: Vec<Species>,
    #[serde(default)]
    pub rules: BattleRules,
}

impl BattleConfig {
    pub fn wild() -> Self {
        Self {
            kind: EncounterKind::Wild,
            trainer_id: None,
            first_battle: false,
            underwater: false,
            caught_species: Vec::new(),
            rules: BattleRules::default(),
        }
    }

    pub fn trainer(trainer_id: u16) -> Self {
        Self {
            kind: EncounterKind::Trainer,
            trainer_id: Some(trainer_id),
            ..Self::wild()
        }
    }

    pub fn is_trainer_battle(&self) -> bool {
        self.kind == EncounterKind::Trainer
    }

    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        log::debug!("loaded battle config from {}: {:?}", path.display(), config.kind);
        Ok(config)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::wild()
    }
}
