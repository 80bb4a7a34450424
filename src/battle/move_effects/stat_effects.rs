// In: src/battle/move_effects/stat_effects.rs

// --- IMPORTS ---
use super::damage_effects::{strike, Strike};
use super::status_effects::safeguard_blocks;
use super::MoveContext;
use crate::battle::conditions::{apply_confusion, push_faint_if_down};
use crate::battle::state::{BattleEvent, Battler, EventBus, EventKind, StatStage, StatStages};
use schema::{Ability, PokemonType};

// --- SHARED STAGE ARITHMETIC ---

fn change_message(name: &str, stat: StatStage, amount: i8) -> String {
    let label = stat.label();
    match amount {
        1 => format!("{}'s {} rose!", name, label),
        -1 => format!("{}'s {} fell!", name, label),
        amount if amount > 1 => format!("{}'s {} rose sharply!", name, label),
        _ => format!("{}'s {} harshly fell!", name, label),
    }
}

/// Shift one stage on `battler`, clamped to -6..=6. A change that would cross the
/// cap leaves the stage untouched and reports failure.
pub(super) fn apply_stat_change(battler: &mut Battler, stat: StatStage, amount: i8, events: &mut EventBus) -> bool {
    let current = battler.stages.get(stat);
    let capped = (amount > 0 && current >= StatStages::MAX) || (amount < 0 && current <= StatStages::MIN);
    if amount == 0 || capped {
        let direction = if amount > 0 { "higher" } else { "lower" };
        events.push(
            BattleEvent::new(EventKind::StatChange)
                .on(battler.side)
                .value(0)
                .text(format!("{}'s {} won't go any {}!", battler.name(), stat.label(), direction)),
        );
        return false;
    }

    battler.stages.set(stat, current + amount);
    let delta = battler.stages.get(stat) - current;
    events.push(
        BattleEvent::new(EventKind::StatChange)
            .on(battler.side)
            .value(delta)
            .text(change_message(&battler.name(), stat, amount)),
    );
    true
}

/// Mist and stat-guarding abilities shield the defender from drops.
fn drop_blocked(ctx: &mut MoveContext, stat: StatStage) -> bool {
    let defender_name = ctx.defender_name();
    let side = ctx.defender.side;
    if ctx.defender_side.mist_turns > 0 {
        ctx.events
            .message(Some(side), format!("{} is protected by Mist!", defender_name));
        return true;
    }
    let guard = match ctx.defender.ability {
        Ability::ClearBody => Some("CLEAR BODY"),
        Ability::HyperCutter if stat == StatStage::Attack => Some("HYPER CUTTER"),
        Ability::KeenEye if stat == StatStage::Accuracy => Some("KEEN EYE"),
        _ => None,
    };
    if let Some(ability_name) = guard {
        ctx.events.message(
            Some(side),
            format!("{}'s {} prevents {} loss!", defender_name, ability_name, stat.label()),
        );
        return true;
    }
    false
}

fn lower_defender_stat(ctx: &mut MoveContext, stat: StatStage, amount: i8) -> bool {
    if drop_blocked(ctx, stat) {
        return false;
    }
    apply_stat_change(ctx.defender, stat, amount, &mut ctx.events)
}

// --- STANDALONE HELPER FUNCTIONS ---

pub(super) fn apply_stat_up_effect(ctx: &mut MoveContext, stat: StatStage, amount: i8) -> bool {
    apply_stat_change(ctx.attacker, stat, amount, &mut ctx.events)
}

pub(super) fn apply_stat_down_effect(ctx: &mut MoveContext, stat: StatStage, amount: i8) -> bool {
    lower_defender_stat(ctx, stat, amount)
}

/// Damaging move with a chance to drop one of the target's stats by a stage.
pub(super) fn apply_stat_down_hit_effect(ctx: &mut MoveContext, stat: StatStage) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if ctx.secondary_triggers(result.damage) {
        lower_defender_stat(ctx, stat, -1);
    }
    result.landed()
}

/// Damaging move with a chance to raise the user's stats by a stage each.
pub(super) fn apply_stat_up_hit_effect(ctx: &mut MoveContext, stats: &[StatStage]) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if !ctx.attacker.is_fainted() && ctx.secondary_triggers(result.damage) {
        for stat in stats {
            apply_stat_change(ctx.attacker, *stat, 1, &mut ctx.events);
        }
    }
    result.landed()
}

/// High-power hit followed by guaranteed drops on the user.
pub(super) fn apply_self_drop_hit_effect(ctx: &mut MoveContext, changes: &'static [(StatStage, i8)]) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.damage > 0 && !ctx.attacker.is_fainted() {
        for (stat, amount) in changes {
            apply_stat_change(ctx.attacker, *stat, *amount, &mut ctx.events);
        }
    }
    result.landed()
}

/// Several self stat changes at once. Succeeds if any of them moved.
pub(super) fn apply_self_boost_effect(ctx: &mut MoveContext, changes: &'static [(StatStage, i8)]) -> bool {
    let mut changed = false;
    for (stat, amount) in changes {
        changed |= apply_stat_change(ctx.attacker, *stat, *amount, &mut ctx.events);
    }
    changed
}

pub(super) fn apply_tickle_effect(ctx: &mut MoveContext) -> bool {
    if drop_blocked(ctx, StatStage::Attack) {
        return false;
    }
    let attack = apply_stat_change(ctx.defender, StatStage::Attack, -1, &mut ctx.events);
    let defense = apply_stat_change(ctx.defender, StatStage::Defense, -1, &mut ctx.events);
    attack || defense
}

pub(super) fn apply_haze_effect(ctx: &mut MoveContext) -> bool {
    ctx.attacker.stages = StatStages::default();
    ctx.defender.stages = StatStages::default();
    ctx.events.message(None, "All stat changes were eliminated!");
    true
}

/// Swagger and Flatter: raise the target's stat, then confuse it.
pub(super) fn apply_swagger_effect(ctx: &mut MoveContext, stat: StatStage, amount: i8) -> bool {
    let raised = apply_stat_change(ctx.defender, stat, amount, &mut ctx.events);
    if safeguard_blocks(ctx) {
        return raised;
    }
    let confused = apply_confusion(ctx.defender, &mut *ctx.rng, &mut ctx.events);
    if !confused && !raised {
        return ctx.fail();
    }
    raised || confused
}

pub(super) fn apply_minimize_effect(ctx: &mut MoveContext) -> bool {
    ctx.attacker.volatile.minimized = true;
    apply_stat_change(ctx.attacker, StatStage::Evasion, 1, &mut ctx.events)
}

/// Ghosts trade half their HP to curse the target; everyone else trades Speed for Attack and Defense.
pub(super) fn apply_curse_effect(ctx: &mut MoveContext) -> bool {
    if !ctx.attacker.has_type(PokemonType::Ghost) {
        let attack_capped = ctx.attacker.stages.attack >= StatStages::MAX;
        let defense_capped = ctx.attacker.stages.defense >= StatStages::MAX;
        if attack_capped && defense_capped {
            return ctx.fail();
        }
        apply_stat_change(ctx.attacker, StatStage::Speed, -1, &mut ctx.events);
        apply_stat_change(ctx.attacker, StatStage::Attack, 1, &mut ctx.events);
        apply_stat_change(ctx.attacker, StatStage::Defense, 1, &mut ctx.events);
        return true;
    }

    if ctx.defender.volatile.curse {
        return ctx.fail();
    }
    let cost = ctx.attacker.take_damage((ctx.attacker.max_hp / 2).max(1));
    ctx.defender.volatile.curse = true;
    let (attacker_name, defender_name) = (ctx.attacker_name(), ctx.defender_name());
    ctx.events.push(
        BattleEvent::new(EventKind::Damage)
            .on(ctx.attacker.side)
            .value(cost)
            .text(format!("{} cut its own HP and laid a curse on {}!", attacker_name, defender_name)),
    );
    push_faint_if_down(ctx.attacker, &mut ctx.events);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::state::Side;
    use crate::pokemon::PartyPokemon;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Move, Species};

    fn battler() -> Battler {
        let pokemon = PartyPokemon::new(Species::Makuhita, 30, &[Move::Tackle]).expect("valid");
        Battler::from_party(&pokemon, Side::Player, 0)
    }

    #[rstest]
    #[case(1, "MAKUHITA's ATTACK rose!")]
    #[case(2, "MAKUHITA's ATTACK rose sharply!")]
    #[case(-1, "MAKUHITA's ATTACK fell!")]
    #[case(-2, "MAKUHITA's ATTACK harshly fell!")]
    fn test_stage_change_messages(#[case] amount: i8, #[case] expected: &str) {
        let mut battler = battler();
        let mut events = EventBus::new();

        assert!(apply_stat_change(&mut battler, StatStage::Attack, amount, &mut events));

        assert_eq!(battler.stages.attack, amount);
        assert_eq!(events.messages(), vec![expected]);
    }

    #[test]
    fn test_stage_at_cap_reports_failure_and_stays_put() {
        // Arrange
        let mut battler = battler();
        battler.stages.set(StatStage::Defense, 6);
        battler.stages.set(StatStage::Speed, -6);
        let mut events = EventBus::new();

        // Act
        let raised = apply_stat_change(&mut battler, StatStage::Defense, 2, &mut events);
        let lowered = apply_stat_change(&mut battler, StatStage::Speed, -1, &mut events);

        // Assert
        events.print_debug_with_message("Events for stage caps:");
        assert!(!raised);
        assert!(!lowered);
        assert_eq!(battler.stages.defense, 6);
        assert_eq!(battler.stages.speed, -6);
        assert_eq!(
            events.messages(),
            vec![
                "MAKUHITA's DEFENSE won't go any higher!",
                "MAKUHITA's SPEED won't go any lower!"
            ]
        );
    }

    #[test]
    fn test_partial_change_near_cap_reports_actual_delta() {
        let mut battler = battler();
        battler.stages.set(StatStage::SpAttack, 5);
        let mut events = EventBus::new();

        assert!(apply_stat_change(&mut battler, StatStage::SpAttack, 2, &mut events));

        assert_eq!(battler.stages.sp_attack, 6);
        assert_eq!(events.events()[0].value, Some(1));
    }
}
