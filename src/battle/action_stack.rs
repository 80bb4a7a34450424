use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::battle::rng::BattleRng;
use crate::battle::state::{Battler, FieldState, Side};
use crate::battle::stats::effective_speed;
use crate::config::BattleRules;
use schema::{Item, Move};
use serde::{Deserialize, Serialize};

/// Slot index carried by a Struggle action; it never names a real move slot.
pub const STRUGGLE_SLOT: usize = 4;

/// What a side asks to do this turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Fight { move_id: Move, move_slot: usize },
    Switch { party_index: usize },
    Item { item: Item, target: Option<usize> },
    Run,
}

impl BattleAction {
    pub fn fight(move_id: Move, move_slot: usize) -> Self {
        BattleAction::Fight { move_id, move_slot }
    }

    pub fn struggle() -> Self {
        Self::fight(Move::Struggle, STRUGGLE_SLOT)
    }

    /// Party slot a fight action draws PP from. `None` for Struggle.
    pub fn pp_slot(&self) -> Option<usize> {
        match self {
            BattleAction::Fight { move_slot, .. } if *move_slot < STRUGGLE_SLOT => Some(*move_slot),
            _ => None,
        }
    }
}

/// Why a chosen move slot can't be used this turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveBlockReason {
    NoPp,
    Disabled,
    Taunt,
    Torment,
    ChoiceLock,
    Encore,
    /// A multi-turn move in progress overrides the choice.
    LockedIn,
}

/// Result of checking a requested action against current legality.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionValidation {
    /// The action that will actually be executed.
    pub action: BattleAction,
    pub blocked: Option<MoveBlockReason>,
    pub blocked_slot: Option<usize>,
    pub all_moves_blocked: bool,
}

impl ActionValidation {
    pub fn is_legal(&self) -> bool {
        self.blocked.is_none()
    }
}

/// First restriction that stops `battler` from using the move in `slot`.
pub fn move_block_reason(battler: &Battler, slot: usize) -> Option<MoveBlockReason> {
    let Some(instance) = battler.move_slot(slot) else {
        return Some(MoveBlockReason::NoPp);
    };
    let move_ = instance.move_;
    let volatile = &battler.volatile;

    if instance.pp == 0 {
        return Some(MoveBlockReason::NoPp);
    }
    if volatile.disable_turns > 0 && volatile.disabled_move == Some(move_) {
        return Some(MoveBlockReason::Disabled);
    }
    if volatile.taunt_turns > 0 && move_.data().power == 0 {
        return Some(MoveBlockReason::Taunt);
    }
    if volatile.torment && volatile.last_move_used == Some(move_) {
        return Some(MoveBlockReason::Torment);
    }
    if let Some(locked) = volatile.choice_locked_move {
        if locked != move_ && battler.slot_of(locked).is_some() {
            return Some(MoveBlockReason::ChoiceLock);
        }
    }
    if volatile.encore_turns > 0 {
        if let Some(encored) = volatile.encored_move {
            if encored != move_ {
                return Some(MoveBlockReason::Encore);
            }
        }
    }
    None
}

/// Slots the battler may pick from right now, in slot order.
pub fn usable_slots(battler: &Battler) -> Vec<usize> {
    (0..STRUGGLE_SLOT)
        .filter(|slot| battler.move_slot(*slot).is_some() && move_block_reason(battler, *slot).is_none())
        .collect()
}

/// The move a multi-turn commitment forces this turn, as a fight action.
fn forced_action(battler: &Battler) -> Option<BattleAction> {
    let move_ = battler.volatile.forced_move()?;
    let slot = battler.slot_of(move_).unwrap_or(STRUGGLE_SLOT);
    Some(BattleAction::fight(move_, slot))
}

/// Rewrite `action` into something `battler` can legally do.
///
/// Fight actions are resolved in this order: a forced multi-turn move, the requested
/// slot (re-found by move if the slot is stale), the encored move, the first usable
/// slot, and finally Struggle. Non-fight actions pass through unchanged.
pub fn normalize_action(battler: &Battler, action: &BattleAction) -> ActionValidation {
    let usable = usable_slots(battler);
    let all_moves_blocked = usable.is_empty();

    if let Some(forced) = forced_action(battler) {
        let blocked = (*action != forced).then_some(MoveBlockReason::LockedIn);
        return ActionValidation {
            action: forced,
            blocked,
            blocked_slot: blocked.and(action.pp_slot()),
            all_moves_blocked,
        };
    }

    let BattleAction::Fight { move_id, move_slot } = *action else {
        return ActionValidation {
            action: *action,
            blocked: None,
            blocked_slot: None,
            all_moves_blocked,
        };
    };

    if move_id == Move::Struggle && all_moves_blocked {
        return ActionValidation {
            action: BattleAction::struggle(),
            blocked: None,
            blocked_slot: None,
            all_moves_blocked,
        };
    }

    let slot_matches = battler
        .move_slot(move_slot)
        .is_some_and(|instance| instance.move_ == move_id);
    let slot = if slot_matches {
        move_slot
    } else {
        battler.slot_of(move_id).unwrap_or(move_slot)
    };

    let Some(reason) = move_block_reason(battler, slot) else {
        return ActionValidation {
            action: BattleAction::fight(move_id, slot),
            blocked: None,
            blocked_slot: None,
            all_moves_blocked,
        };
    };

    let encored_slot = battler
        .volatile
        .encored_move
        .filter(|_| battler.volatile.encore_turns > 0)
        .and_then(|encored| battler.slot_of(encored))
        .filter(|slot| usable.contains(slot));
    let fallback = encored_slot
        .or_else(|| usable.first().copied())
        .and_then(|slot| battler.move_slot(slot).map(|instance| BattleAction::fight(instance.move_, slot)))
        .unwrap_or_else(BattleAction::struggle);

    log::debug!(
        "{} cannot use {:?} ({:?}), falling back to {:?}",
        battler.name(),
        move_id,
        reason,
        fallback
    );

    ActionValidation {
        action: fallback,
        blocked: Some(reason),
        blocked_slot: Some(slot),
        all_moves_blocked,
    }
}

/// One side's normalized action waiting to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedAction {
    pub side: Side,
    pub action: BattleAction,
}

/// The turn's actions in execution order.
#[derive(Debug, Clone, Default)]
pub struct ActionStack {
    actions: VecDeque<QueuedAction>,
}

// Ordering keys for a single action, compared highest first.
#[derive(Debug, Clone, Copy)]
struct ActionPriority {
    action_priority: i8, // Run: 7, Switch/Item: 6, Fight: move priority
    speed: u16,
}

impl ActionStack {
    pub fn new() -> Self {
        Self {
            actions: VecDeque::new(),
        }
    }

    /// Order both sides' actions: action class, then move priority, then effective speed.
    /// A full tie is settled by one coin flip that favours the player on heads.
    pub fn build(
        player: BattleAction,
        enemy: BattleAction,
        field: &FieldState,
        rules: &BattleRules,
        rng: &mut dyn BattleRng,
    ) -> Self {
        let player_priority = Self::calculate_action_priority(&player, field.battler(Side::Player), field, rules);
        let enemy_priority = Self::calculate_action_priority(&enemy, field.battler(Side::Enemy), field, rules);

        let ordering = player_priority
            .action_priority
            .cmp(&enemy_priority.action_priority)
            .then(player_priority.speed.cmp(&enemy_priority.speed));
        let player_first = match ordering {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => rng.random_int(0, 1, "Speed Tie Coin Flip") == 0,
        };

        let player = QueuedAction {
            side: Side::Player,
            action: player,
        };
        let enemy = QueuedAction {
            side: Side::Enemy,
            action: enemy,
        };
        let mut stack = Self::new();
        if player_first {
            stack.push_back(player);
            stack.push_back(enemy);
        } else {
            stack.push_back(enemy);
            stack.push_back(player);
        }
        stack
    }

    /// Single-sided stack, used when only one side acts.
    pub fn single(side: Side, action: BattleAction) -> Self {
        let mut stack = Self::new();
        stack.push_back(QueuedAction { side, action });
        stack
    }

    pub fn push_back(&mut self, action: QueuedAction) {
        self.actions.push_back(action);
    }

    pub fn pop_front(&mut self) -> Option<QueuedAction> {
        self.actions.pop_front()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn sides(&self) -> Vec<Side> {
        self.actions.iter().map(|queued| queued.side).collect()
    }

    fn calculate_action_priority(
        action: &BattleAction,
        battler: &Battler,
        field: &FieldState,
        rules: &BattleRules,
    ) -> ActionPriority {
        let speed = effective_speed(battler, &field.weather, rules);
        let action_priority = match action {
            BattleAction::Run => 7,
            BattleAction::Switch { .. } | BattleAction::Item { .. } => 6,
            BattleAction::Fight { move_id, .. } => move_id.data().priority,
        };
        ActionPriority { action_priority, speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::ScriptedRng;
    use crate::battle::state::SideState;
    use crate::battle::weather::WeatherState;
    use crate::pokemon::PartyPokemon;
    use pretty_assertions::assert_eq;
    use schema::Species;

    fn battler(species: Species, side: Side, moves: &[Move]) -> Battler {
        let pokemon = PartyPokemon::new(species, 50, moves).expect("valid");
        Battler::from_party(&pokemon, side, 0)
    }

    fn field(player: Battler, enemy: Battler) -> FieldState {
        FieldState {
            player,
            enemy,
            player_side: SideState::default(),
            enemy_side: SideState::default(),
            weather: WeatherState::default(),
        }
    }

    #[test]
    fn test_faster_battler_moves_first_without_drawing() {
        // Arrange: Treecko (base 70 speed) outpaces Makuhita (base 25).
        let field = field(
            battler(Species::Makuhita, Side::Player, &[Move::Tackle]),
            battler(Species::Treecko, Side::Enemy, &[Move::Pound]),
        );
        let mut rng = ScriptedRng::new(vec![]);

        // Act
        let stack = ActionStack::build(
            BattleAction::fight(Move::Tackle, 0),
            BattleAction::fight(Move::Pound, 0),
            &field,
            &BattleRules::default(),
            &mut rng,
        );

        // Assert
        assert_eq!(stack.sides(), vec![Side::Enemy, Side::Player]);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_priority_beats_speed_and_switch_beats_priority() {
        let field = field(
            battler(Species::Makuhita, Side::Player, &[Move::QuickAttack]),
            battler(Species::Treecko, Side::Enemy, &[Move::Pound]),
        );
        let rules = BattleRules::default();
        let mut rng = ScriptedRng::new(vec![]);

        let quick = ActionStack::build(
            BattleAction::fight(Move::QuickAttack, 0),
            BattleAction::fight(Move::Pound, 0),
            &field,
            &rules,
            &mut rng,
        );
        assert_eq!(quick.sides(), vec![Side::Player, Side::Enemy]);

        let switch = ActionStack::build(
            BattleAction::fight(Move::QuickAttack, 0),
            BattleAction::Switch { party_index: 1 },
            &field,
            &rules,
            &mut rng,
        );
        assert_eq!(switch.sides(), vec![Side::Enemy, Side::Player]);
    }

    #[test]
    fn test_speed_tie_is_one_coin_flip() {
        let field = field(
            battler(Species::Zigzagoon, Side::Player, &[Move::Tackle]),
            battler(Species::Zigzagoon, Side::Enemy, &[Move::Tackle]),
        );
        let mut heads = ScriptedRng::new(vec![0.25]);
        let mut tails = ScriptedRng::new(vec![0.75]);
        let action = BattleAction::fight(Move::Tackle, 0);
        let rules = BattleRules::default();

        let first = ActionStack::build(action, action, &field, &rules, &mut heads);
        let second = ActionStack::build(action, action, &field, &rules, &mut tails);

        assert_eq!(first.sides(), vec![Side::Player, Side::Enemy]);
        assert_eq!(second.sides(), vec![Side::Enemy, Side::Player]);
        assert_eq!(heads.consumed(), 1);
    }

    #[test]
    fn test_stale_slot_is_refound_by_move() {
        let battler = battler(Species::Zigzagoon, Side::Player, &[Move::Tackle, Move::Growl]);

        let validation = normalize_action(&battler, &BattleAction::fight(Move::Growl, 0));

        assert_eq!(validation.action, BattleAction::fight(Move::Growl, 1));
        assert!(validation.is_legal());
    }

    #[test]
    fn test_blocked_moves_fall_back_and_report_reason() {
        // Arrange
        let mut battler = battler(Species::Zigzagoon, Side::Player, &[Move::Tackle, Move::Growl]);
        battler.volatile.disable_turns = 3;
        battler.volatile.disabled_move = Some(Move::Tackle);

        // Act
        let validation = normalize_action(&battler, &BattleAction::fight(Move::Tackle, 0));

        // Assert
        assert_eq!(validation.action, BattleAction::fight(Move::Growl, 1));
        assert_eq!(validation.blocked, Some(MoveBlockReason::Disabled));
        assert_eq!(validation.blocked_slot, Some(0));
        assert!(!validation.all_moves_blocked);
    }

    #[test]
    fn test_taunt_blocks_status_moves_only() {
        let mut battler = battler(Species::Zigzagoon, Side::Player, &[Move::Tackle, Move::Growl]);
        battler.volatile.taunt_turns = 2;

        assert_eq!(move_block_reason(&battler, 1), Some(MoveBlockReason::Taunt));
        assert_eq!(move_block_reason(&battler, 0), None);
    }

    #[test]
    fn test_no_usable_moves_means_struggle() {
        let mut battler = battler(Species::Zigzagoon, Side::Player, &[Move::Tackle]);
        if let Some(Some(instance)) = battler.pokemon.moves.get_mut(0) {
            instance.pp = 0;
        }

        let validation = normalize_action(&battler, &BattleAction::fight(Move::Tackle, 0));

        assert_eq!(validation.action, BattleAction::struggle());
        assert_eq!(validation.blocked, Some(MoveBlockReason::NoPp));
        assert!(validation.all_moves_blocked);
    }

    #[test]
    fn test_choice_lock_and_lock_in() {
        let mut battler = battler(Species::Zigzagoon, Side::Player, &[Move::Tackle, Move::Growl]);
        battler.volatile.choice_locked_move = Some(Move::Growl);
        assert_eq!(move_block_reason(&battler, 0), Some(MoveBlockReason::ChoiceLock));

        battler.volatile.choice_locked_move = None;
        battler.volatile.charging_move = Some(Move::SolarBeam);
        let validation = normalize_action(&battler, &BattleAction::fight(Move::Tackle, 0));
        assert_eq!(validation.action, BattleAction::fight(Move::SolarBeam, STRUGGLE_SLOT));
        assert_eq!(validation.blocked, Some(MoveBlockReason::LockedIn));
    }

    #[test]
    fn test_single_stack_holds_one_action() {
        let mut stack = ActionStack::single(Side::Enemy, BattleAction::fight(Move::Growl, 0));

        assert_eq!(stack.sides(), vec![Side::Enemy]);
        let queued = stack.pop_front().map(|queued| queued.action);
        assert_eq!(queued, Some(BattleAction::fight(Move::Growl, 0)));
        assert!(stack.is_empty());
    }
}
