use crate::battle::state::Battler;
use crate::config::EncounterKind;
use schema::{Item, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchError {
    /// Trainers block every ball.
    TrainerBattle,
    /// The thrown item is not a ball.
    NotABall { item: Item },
    /// Target is already fainted.
    TargetFainted { pokemon: Species },
}

/// Check if catch attempts are allowed in this kind of encounter.
pub fn is_catch_allowed(encounter: EncounterKind) -> bool {
    encounter == EncounterKind::Wild
}

/// Validate a throw and return the target species if it may proceed.
pub fn can_attempt_catch(encounter: EncounterKind, item: Item, target: &Battler) -> Result<Species, CatchError> {
    if !item.is_ball() {
        return Err(CatchError::NotABall { item });
    }
    if !is_catch_allowed(encounter) {
        return Err(CatchError::TrainerBattle);
    }
    if target.is_fainted() {
        return Err(CatchError::TargetFainted {
            pokemon: target.species(),
        });
    }
    Ok(target.species())
}
