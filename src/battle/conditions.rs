// In: src/battle/conditions.rs

use crate::battle::calculators::confusion_self_damage;
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, Battler, EventBus, EventKind};
use crate::pokemon::PrimaryStatus;
use schema::PokemonType;
use serde::{Deserialize, Serialize};

const MAX_TOXIC_COUNTER: u8 = 15;

/// A primary status a move or effect asks to inflict. Sleep and Toxic get their
/// counters filled in on application.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Sleep,
    Poison,
    Toxic,
    Burn,
    Freeze,
    Paralysis,
}

impl StatusKind {
    /// Type-based immunity. Abilities are not consulted here.
    pub fn is_blocked_by_type(self, battler: &Battler) -> bool {
        match self {
            StatusKind::Poison | StatusKind::Toxic => {
                battler.has_type(PokemonType::Poison) || battler.has_type(PokemonType::Steel)
            }
            StatusKind::Burn => battler.has_type(PokemonType::Fire),
            StatusKind::Freeze => battler.has_type(PokemonType::Ice),
            StatusKind::Sleep | StatusKind::Paralysis => false,
        }
    }

    fn applied_message(self, name: &str) -> String {
        match self {
            StatusKind::Sleep => format!("{} fell asleep!", name),
            StatusKind::Poison => format!("{} was poisoned!", name),
            StatusKind::Toxic => format!("{} was badly poisoned!", name),
            StatusKind::Burn => format!("{} was burned!", name),
            StatusKind::Freeze => format!("{} was frozen solid!", name),
            StatusKind::Paralysis => format!("{} is paralyzed! It may be unable to move!", name),
        }
    }
}

/// Inflict a primary status. Fails without events if one is already active
/// or the target's types are immune; the caller reports the failure.
pub fn try_apply_status(
    target: &mut Battler,
    kind: StatusKind,
    rng: &mut dyn BattleRng,
    events: &mut EventBus,
) -> bool {
    if !target.status().is_none() || kind.is_blocked_by_type(target) {
        return false;
    }

    let status = match kind {
        StatusKind::Sleep => PrimaryStatus::Sleep(rng.random_int(2, 5, "Sleep Duration") as u8),
        StatusKind::Poison => PrimaryStatus::Poison,
        StatusKind::Toxic => PrimaryStatus::Toxic(0),
        StatusKind::Burn => PrimaryStatus::Burn,
        StatusKind::Freeze => PrimaryStatus::Freeze,
        StatusKind::Paralysis => PrimaryStatus::Paralysis,
    };
    target.set_status(status);
    log::debug!("{} status set to {:?}", target.name(), status);

    events.push(
        BattleEvent::new(EventKind::StatusApplied)
            .on(target.side)
            .text(kind.applied_message(&target.name())),
    );
    true
}

/// Clear the primary status, if any.
pub fn cure_status(target: &mut Battler, events: &mut EventBus) -> bool {
    let status = target.status();
    if status.is_none() {
        return false;
    }
    target.set_status(PrimaryStatus::None);
    events.push(
        BattleEvent::new(EventKind::StatusCured)
            .on(target.side)
            .text(format!("{} was cured of its {}!", target.name(), status.name())),
    );
    true
}

pub fn apply_confusion(target: &mut Battler, rng: &mut dyn BattleRng, events: &mut EventBus) -> bool {
    if target.volatile.confusion_turns > 0 {
        return false;
    }
    target.volatile.confusion_turns = rng.random_int(2, 5, "Confusion Duration") as u8;
    events.push(
        BattleEvent::new(EventKind::StatusApplied)
            .on(target.side)
            .text(format!("{} became confused!", target.name())),
    );
    true
}

pub(crate) fn push_faint_if_down(battler: &Battler, events: &mut EventBus) {
    if battler.is_fainted() {
        events.push(
            BattleEvent::new(EventKind::Faint)
                .on(battler.side)
                .text(format!("{} fainted!", battler.name())),
        );
    }
}

/// Checks run before a battler may use its move, in cartridge order.
/// Returns whether the battler gets to act.
pub fn pre_move_gate(battler: &mut Battler, rng: &mut dyn BattleRng, events: &mut EventBus) -> bool {
    let side = battler.side;
    let name = battler.name();

    if battler.volatile.recharging {
        battler.volatile.recharging = false;
        events.message(Some(side), format!("{} must recharge!", name));
        return false;
    }

    match battler.status() {
        PrimaryStatus::Sleep(turns) => {
            let remaining = turns.saturating_sub(1);
            if remaining > 0 {
                battler.set_status(PrimaryStatus::Sleep(remaining));
                events.message(Some(side), format!("{} is fast asleep.", name));
                return false;
            }
            battler.set_status(PrimaryStatus::None);
            events.push(
                BattleEvent::new(EventKind::StatusCured)
                    .on(side)
                    .text(format!("{} woke up!", name)),
            );
        }
        PrimaryStatus::Freeze => {
            if rng.random_int(1, 5, "Freeze Thaw Check") == 1 {
                battler.set_status(PrimaryStatus::None);
                events.push(
                    BattleEvent::new(EventKind::StatusCured)
                        .on(side)
                        .text(format!("{} thawed out!", name)),
                );
            } else {
                events.message(Some(side), format!("{} is frozen solid!", name));
                return false;
            }
        }
        PrimaryStatus::Paralysis => {
            if rng.random_int(1, 4, "Full Paralysis Check") == 1 {
                events.message(Some(side), format!("{} is fully paralyzed!", name));
                return false;
            }
        }
        _ => {}
    }

    if battler.volatile.flinch {
        battler.volatile.flinch = false;
        events.message(Some(side), format!("{} flinched!", name));
        return false;
    }

    if battler.volatile.confusion_turns > 0 {
        battler.volatile.confusion_turns -= 1;
        if battler.volatile.confusion_turns == 0 {
            events.message(Some(side), format!("{} snapped out of confusion!", name));
        } else {
            events.message(Some(side), format!("{} is confused!", name));
            if rng.random_int(1, 2, "Confusion Self-Hit Check") == 1 {
                let damage = confusion_self_damage(battler);
                let applied = battler.take_damage(damage);
                battler.volatile.took_damage_this_turn = true;
                battler.volatile.last_damage_taken = applied;
                events.push(
                    BattleEvent::new(EventKind::Damage)
                        .on(side)
                        .value(applied)
                        .text("It hurt itself in its confusion!"),
                );
                push_faint_if_down(battler, events);
                return false;
            }
        }
    }

    if battler.volatile.attracted_to.is_some() {
        events.message(Some(side), format!("{} is in love!", name));
        if rng.random_int(1, 2, "Attraction Immobilize Check") == 1 {
            events.message(Some(side), format!("{} is immobilized by love!", name));
            return false;
        }
    }

    true
}

fn chip(battler: &mut Battler, amount: u16, message: String, events: &mut EventBus) {
    let applied = battler.take_damage(amount.max(1));
    events.push(
        BattleEvent::new(EventKind::Damage)
            .on(battler.side)
            .value(applied)
            .text(message),
    );
    push_faint_if_down(battler, events);
}

/// Residual damage from primary status, nightmare, curse and binding moves.
/// Stops as soon as the battler faints.
pub fn end_of_turn_status(battler: &mut Battler, events: &mut EventBus) {
    if battler.is_fainted() {
        return;
    }
    let max = battler.max_hp;
    let name = battler.name();

    match battler.status() {
        PrimaryStatus::Poison => {
            chip(battler, max / 8, format!("{} is hurt by poison!", name), events);
        }
        PrimaryStatus::Toxic(counter) => {
            let counter = (counter + 1).min(MAX_TOXIC_COUNTER);
            battler.set_status(PrimaryStatus::Toxic(counter));
            let damage = (max / 16).max(1).saturating_mul(u16::from(counter));
            chip(battler, damage, format!("{} is hurt by poison!", name), events);
        }
        PrimaryStatus::Burn => {
            chip(battler, max / 8, format!("{} is hurt by its burn!", name), events);
        }
        _ => {}
    }
    if battler.is_fainted() {
        return;
    }

    if battler.volatile.nightmare {
        if battler.status().is_asleep() {
            chip(battler, max / 4, format!("{} is locked in a nightmare!", name), events);
            if battler.is_fainted() {
                return;
            }
        } else {
            battler.volatile.nightmare = false;
        }
    }

    if battler.volatile.curse {
        chip(battler, max / 4, format!("{} is afflicted by the curse!", name), events);
        if battler.is_fainted() {
            return;
        }
    }

    if battler.volatile.trap_turns > 0 {
        chip(battler, max / 16, format!("{} is hurt by the trap!", name), events);
        battler.volatile.trap_turns -= 1;
        if battler.volatile.trap_turns == 0 {
            battler.volatile.trapped_by = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::ScriptedRng;
    use crate::battle::state::Side;
    use crate::pokemon::PartyPokemon;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Move, Species};

    fn battler(species: Species) -> Battler {
        let pokemon = PartyPokemon::new(species, 50, &[Move::Tackle]).expect("valid party member");
        Battler::from_party(&pokemon, Side::Player, 0)
    }

    #[test]
    fn test_sleep_duration_always_two_to_five() {
        for trial in 0..64 {
            // Arrange
            let mut target = battler(Species::Zigzagoon);
            let mut rng = ScriptedRng::new(vec![f64::from(trial) / 64.0]);
            let mut events = EventBus::new();

            // Act
            let applied = try_apply_status(&mut target, StatusKind::Sleep, &mut rng, &mut events);

            // Assert
            assert!(applied);
            match target.status() {
                PrimaryStatus::Sleep(turns) => assert!((2..=5).contains(&turns), "rolled {}", turns),
                other => panic!("expected sleep, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_second_primary_status_always_fails() {
        let mut target = battler(Species::Zigzagoon);
        let mut rng = ScriptedRng::always_min();
        let mut events = EventBus::new();

        assert!(try_apply_status(&mut target, StatusKind::Burn, &mut rng, &mut events));
        assert!(!try_apply_status(&mut target, StatusKind::Paralysis, &mut rng, &mut events));
        assert_eq!(target.status(), PrimaryStatus::Burn);
        assert_eq!(events.len(), 1);
    }

    #[rstest]
    #[case(Species::Gastly, StatusKind::Poison)]
    #[case(Species::Skarmory, StatusKind::Toxic)]
    #[case(Species::Torchic, StatusKind::Burn)]
    #[case(Species::Snorunt, StatusKind::Freeze)]
    fn test_type_immunities_block_status(#[case] species: Species, #[case] kind: StatusKind) {
        let mut target = battler(species);
        let mut events = EventBus::new();
        assert!(!try_apply_status(&mut target, kind, &mut ScriptedRng::new(vec![]), &mut events));
        assert!(target.status().is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn test_toxic_escalates_and_resets_when_cleared() {
        // Arrange
        let mut target = battler(Species::Zigzagoon);
        target.max_hp = 160;
        target.current_hp = 160;
        target.set_status(PrimaryStatus::Toxic(0));
        let mut events = EventBus::new();

        // Act
        end_of_turn_status(&mut target, &mut events);
        end_of_turn_status(&mut target, &mut events);

        // Assert
        let damage: Vec<i32> = events
            .events()
            .iter()
            .filter(|e| e.kind == EventKind::Damage)
            .filter_map(|e| e.value)
            .collect();
        assert_eq!(damage, vec![10, 20]);
        assert_eq!(target.current_hp, 130);

        cure_status(&mut target, &mut events);
        assert_eq!(target.status().toxic_counter(), 0);
    }

    #[test]
    fn test_poison_tick_can_faint() {
        let mut target = battler(Species::Zigzagoon);
        target.current_hp = 1;
        target.set_status(PrimaryStatus::Poison);
        let mut events = EventBus::new();

        end_of_turn_status(&mut target, &mut events);

        assert!(target.is_fainted());
        assert_eq!(events.messages().last().copied(), Some("ZIGZAGOON fainted!"));
    }

    #[test]
    fn test_fainted_battler_takes_no_ticks() {
        let mut target = battler(Species::Zigzagoon);
        target.current_hp = 0;
        target.set_status(PrimaryStatus::Burn);
        target.volatile.curse = true;
        let mut events = EventBus::new();

        end_of_turn_status(&mut target, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_trap_counts_down_and_releases() {
        let mut target = battler(Species::Zigzagoon);
        target.volatile.trap_turns = 1;
        target.volatile.trapped_by = Some(Side::Enemy);
        let mut events = EventBus::new();

        end_of_turn_status(&mut target, &mut events);

        assert_eq!(target.current_hp, target.max_hp - (target.max_hp / 16).max(1));
        assert_eq!(target.volatile.trap_turns, 0);
        assert_eq!(target.volatile.trapped_by, None);
    }

    #[rstest]
    #[case(1, false)]
    #[case(2, true)]
    #[case(4, true)]
    fn test_paralysis_blocks_one_in_four(#[case] roll: i32, #[case] can_act: bool) {
        let mut actor = battler(Species::Zigzagoon);
        actor.set_status(PrimaryStatus::Paralysis);
        let mut rng = ScriptedRng::new(vec![ScriptedRng::unit_for(roll, 1, 4)]);
        let mut events = EventBus::new();

        assert_eq!(pre_move_gate(&mut actor, &mut rng, &mut events), can_act);
        assert_eq!(actor.status(), PrimaryStatus::Paralysis);
    }

    #[test]
    fn test_sleep_counts_down_then_wakes() {
        let mut actor = battler(Species::Zigzagoon);
        actor.set_status(PrimaryStatus::Sleep(2));
        let mut rng = ScriptedRng::new(vec![]);
        let mut events = EventBus::new();

        assert!(!pre_move_gate(&mut actor, &mut rng, &mut events));
        assert_eq!(actor.status(), PrimaryStatus::Sleep(1));
        assert!(pre_move_gate(&mut actor, &mut rng, &mut events));
        assert!(actor.status().is_none());
        assert_eq!(events.messages(), vec!["ZIGZAGOON is fast asleep.", "ZIGZAGOON woke up!"]);
    }

    #[test]
    fn test_freeze_thaws_on_one_in_five() {
        let mut actor = battler(Species::Zigzagoon);
        actor.set_status(PrimaryStatus::Freeze);
        let mut rng = ScriptedRng::new(vec![
            ScriptedRng::unit_for(3, 1, 5),
            ScriptedRng::unit_for(1, 1, 5),
        ]);
        let mut events = EventBus::new();

        assert!(!pre_move_gate(&mut actor, &mut rng, &mut events));
        assert!(pre_move_gate(&mut actor, &mut rng, &mut events));
        assert!(actor.status().is_none());
    }

    #[test]
    fn test_confusion_self_hit_blocks_the_move() {
        // Arrange
        let mut actor = battler(Species::Zigzagoon);
        actor.volatile.confusion_turns = 3;
        let mut rng = ScriptedRng::new(vec![ScriptedRng::unit_for(1, 1, 2)]);
        let mut events = EventBus::new();

        // Act
        let can_act = pre_move_gate(&mut actor, &mut rng, &mut events);
        events.print_debug_with_message("Events for confusion self-hit:");

        // Assert
        assert!(!can_act);
        assert_eq!(actor.volatile.confusion_turns, 2);
        assert_eq!(actor.current_hp, actor.max_hp - 15);
        assert!(events.messages().contains(&"It hurt itself in its confusion!"));
    }

    #[test]
    fn test_recharge_consumes_the_turn_once() {
        let mut actor = battler(Species::Zigzagoon);
        actor.volatile.recharging = true;
        let mut rng = ScriptedRng::new(vec![]);
        let mut events = EventBus::new();

        assert!(!pre_move_gate(&mut actor, &mut rng, &mut events));
        assert!(pre_move_gate(&mut actor, &mut rng, &mut events));
    }

    #[test]
    fn test_confusion_does_not_stack() {
        let mut target = battler(Species::Zigzagoon);
        let mut rng = ScriptedRng::always_min();
        let mut events = EventBus::new();

        assert!(apply_confusion(&mut target, &mut rng, &mut events));
        assert_eq!(target.volatile.confusion_turns, 2);
        assert!(!apply_confusion(&mut target, &mut rng, &mut events));
    }
}
