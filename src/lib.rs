// In: src/lib.rs

//! Gen 3 Battle Engine
//!
//! A deterministic single-battle turn simulator with third-generation rules:
//! turn ordering, the damage formula, primary and volatile status, weather,
//! per-move effects, and the capture and experience formulas around them.
//! Every random draw goes through one injectable `BattleRng`.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod pokemon;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Static rule tables.
pub use schema::{
    Ability, BaseStats, HoldEffect, Item, Move, MoveData, MoveTarget, PokemonType, Species, SpeciesData,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine and state.
pub use battle::action_stack::{ActionValidation, BattleAction, MoveBlockReason};
pub use battle::engine::{BattleEngine, BattleSnapshot};
pub use battle::rng::{BattleRng, ScriptedRng, StdBattleRng};
pub use battle::state::{BattleEvent, Battler, EventKind, Outcome, Side, SideState, TurnResult};
pub use battle::weather::{WeatherKind, WeatherState};

// Runtime party data and configuration.
pub use config::{BattleConfig, BattleRules, EncounterKind};
pub use pokemon::{PartyPokemon, PrimaryStatus};

// Crate-specific error and result types.
pub use errors::{BattleError, BattleResult, ConfigError, PartyError};
