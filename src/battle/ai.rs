//! Action selection for the opposing side.

use crate::battle::action_stack::BattleAction;
use crate::battle::rng::BattleRng;
use crate::battle::state::Battler;

/// A trait for any system that can decide on a battle action.
pub trait Behavior {
    /// Inspects the acting battler and decides on its action for this turn.
    fn decide_action(&self, battler: &Battler, rng: &mut dyn BattleRng) -> BattleAction;
}

/// Picks uniformly among the move slots that still have PP, or Struggles.
///
/// Restrictions such as Disable or Taunt are not considered here; the engine
/// normalizes whatever this returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoveAI;

impl RandomMoveAI {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for RandomMoveAI {
    fn decide_action(&self, battler: &Battler, rng: &mut dyn BattleRng) -> BattleAction {
        let usable: Vec<BattleAction> = battler
            .pokemon
            .moves
            .iter()
            .enumerate()
            .filter_map(|(slot, instance)| {
                instance
                    .as_ref()
                    .filter(|instance| instance.pp > 0)
                    .map(|instance| BattleAction::fight(instance.move_, slot))
            })
            .collect();

        if usable.is_empty() {
            return BattleAction::struggle();
        }

        let pick = rng.random_int(0, usable.len() as i32 - 1, "AI Move Choice");
        usable[pick as usize]
    }
}
