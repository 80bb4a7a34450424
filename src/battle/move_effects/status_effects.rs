// In: src/battle/move_effects/status_effects.rs

// --- IMPORTS ---
use super::damage_effects::{strike, Strike};
use super::MoveContext;
use crate::battle::calculators::effectiveness_against;
use crate::battle::conditions::{apply_confusion, cure_status, try_apply_status, StatusKind};
use crate::battle::state::{BattleEvent, EventKind};
use crate::pokemon::{Gender, PrimaryStatus};
use schema::{Ability, PokemonType};

const REST_SLEEP_TURNS: u8 = 3;
const YAWN_DELAY: u8 = 2;

// --- GATES ---

/// Safeguard on the defender's side stops status and confusion from the attacker.
pub(super) fn safeguard_blocks(ctx: &mut MoveContext) -> bool {
    if ctx.defender_side.safeguard_turns == 0 {
        return false;
    }
    let defender_name = ctx.defender_name();
    ctx.events
        .message(Some(ctx.defender.side), format!("{} is protected by Safeguard!", defender_name));
    true
}

fn ability_prevents(ability: Ability, kind: StatusKind) -> bool {
    matches!(
        (ability, kind),
        (Ability::Limber, StatusKind::Paralysis)
            | (Ability::Insomnia | Ability::VitalSpirit, StatusKind::Sleep)
            | (Ability::Immunity, StatusKind::Poison | StatusKind::Toxic)
            | (Ability::WaterVeil, StatusKind::Burn)
            | (Ability::MagmaArmor, StatusKind::Freeze)
    )
}

fn uproar_active(ctx: &MoveContext) -> bool {
    ctx.attacker.volatile.uproar_turns > 0 || ctx.defender.volatile.uproar_turns > 0
}

/// Inflict `kind` on the defender through every block except the Safeguard message.
/// Secondary effects fail quietly; the caller decides whether to report it.
pub(super) fn inflict_on_defender(ctx: &mut MoveContext, kind: StatusKind) -> bool {
    if ctx.defender_side.safeguard_turns > 0 || ability_prevents(ctx.defender.ability, kind) {
        return false;
    }
    if kind == StatusKind::Sleep && uproar_active(ctx) {
        return false;
    }
    try_apply_status(ctx.defender, kind, &mut *ctx.rng, &mut ctx.events)
}

// --- STANDALONE HELPER FUNCTIONS ---

/// Damaging move with a chance to inflict a primary status.
pub(super) fn apply_status_hit_effect(ctx: &mut MoveContext, kind: StatusKind) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if ctx.secondary_triggers(result.damage) {
        inflict_on_defender(ctx, kind);
    }
    result.landed()
}

/// Status-only move such as Thunder Wave or Sleep Powder.
pub(super) fn apply_inflict_status_effect(ctx: &mut MoveContext, kind: StatusKind) -> bool {
    let move_type = ctx.data().move_type;
    if move_type == PokemonType::Electric
        && effectiveness_against(move_type, ctx.defender.types(), ctx.defender.volatile.foresight) == 0
    {
        let defender_name = ctx.defender_name();
        ctx.events.push(
            BattleEvent::new(EventKind::Effectiveness)
                .on(ctx.defender.side)
                .value(0)
                .text(format!("It doesn't affect {}...", defender_name)),
        );
        return false;
    }
    if safeguard_blocks(ctx) {
        return false;
    }
    if !ctx.defender.status().is_none() {
        let defender_name = ctx.defender_name();
        let status = ctx.defender.status().name();
        ctx.events.message(
            Some(ctx.defender.side),
            format!("{} is already affected by {}!", defender_name, status),
        );
        return false;
    }
    if !inflict_on_defender(ctx, kind) {
        return ctx.fail();
    }
    true
}

/// One of burn, freeze or paralysis, picked evenly.
pub(super) fn apply_tri_attack_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if ctx.secondary_triggers(result.damage) {
        let kind = match ctx.rng.random_int(0, 2, "Tri Attack Status") {
            0 => StatusKind::Burn,
            1 => StatusKind::Freeze,
            _ => StatusKind::Paralysis,
        };
        inflict_on_defender(ctx, kind);
    }
    result.landed()
}

/// Fire hit that can burn and thaws a frozen target.
pub(super) fn apply_thaw_hit_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.damage > 0 && ctx.defender.status() == PrimaryStatus::Freeze && !ctx.defender.is_fainted() {
        ctx.defender.set_status(PrimaryStatus::None);
        let defender_name = ctx.defender_name();
        ctx.events.push(
            BattleEvent::new(EventKind::StatusCured)
                .on(ctx.defender.side)
                .text(format!("{} was defrosted!", defender_name)),
        );
    }
    if ctx.secondary_triggers(result.damage) {
        inflict_on_defender(ctx, StatusKind::Burn);
    }
    result.landed()
}

pub(super) fn apply_flinch_hit_effect(ctx: &mut MoveContext, power: u16) -> bool {
    let result = strike(ctx, Strike::power(power));
    if ctx.secondary_triggers(result.damage) && ctx.defender.ability != Ability::InnerFocus {
        ctx.defender.volatile.flinch = true;
    }
    result.landed()
}

pub(super) fn apply_confuse_effect(ctx: &mut MoveContext) -> bool {
    if safeguard_blocks(ctx) {
        return false;
    }
    let defender_name = ctx.defender_name();
    if ctx.defender.ability == Ability::OwnTempo {
        ctx.events.message(
            Some(ctx.defender.side),
            format!("{}'s OWN TEMPO prevents confusion!", defender_name),
        );
        return false;
    }
    if !apply_confusion(ctx.defender, &mut *ctx.rng, &mut ctx.events) {
        ctx.events
            .message(Some(ctx.defender.side), format!("{} is already confused!", defender_name));
        return false;
    }
    true
}

pub(super) fn apply_confuse_hit_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if ctx.secondary_triggers(result.damage)
        && ctx.defender_side.safeguard_turns == 0
        && ctx.defender.ability != Ability::OwnTempo
    {
        apply_confusion(ctx.defender, &mut *ctx.rng, &mut ctx.events);
    }
    result.landed()
}

pub(super) fn apply_leech_seed_effect(ctx: &mut MoveContext) -> bool {
    let defender_name = ctx.defender_name();
    if ctx.defender.has_type(PokemonType::Grass) {
        ctx.events.push(
            BattleEvent::new(EventKind::Effectiveness)
                .on(ctx.defender.side)
                .value(0)
                .text(format!("It doesn't affect {}...", defender_name)),
        );
        return false;
    }
    if ctx.defender.volatile.leech_seed {
        return ctx.fail();
    }
    ctx.defender.volatile.leech_seed = true;
    ctx.events
        .message(Some(ctx.defender.side), format!("{} was seeded!", defender_name));
    true
}

pub(super) fn apply_nightmare_effect(ctx: &mut MoveContext) -> bool {
    if !ctx.defender.status().is_asleep() || ctx.defender.volatile.nightmare {
        return ctx.fail();
    }
    ctx.defender.volatile.nightmare = true;
    let defender_name = ctx.defender_name();
    ctx.events.message(
        Some(ctx.defender.side),
        format!("{} began having a NIGHTMARE!", defender_name),
    );
    true
}

/// The target falls asleep at the end of the next turn.
pub(super) fn apply_yawn_effect(ctx: &mut MoveContext) -> bool {
    if !ctx.defender.status().is_none() || ctx.defender.volatile.yawn_turns > 0 {
        return ctx.fail();
    }
    if safeguard_blocks(ctx) {
        return false;
    }
    if ability_prevents(ctx.defender.ability, StatusKind::Sleep) {
        return ctx.fail();
    }
    ctx.defender.volatile.yawn_turns = YAWN_DELAY;
    let (attacker_name, defender_name) = (ctx.attacker_name(), ctx.defender_name());
    ctx.events.message(
        Some(ctx.defender.side),
        format!("{} made {} drowsy!", attacker_name, defender_name),
    );
    true
}

pub(super) fn apply_attract_effect(ctx: &mut MoveContext) -> bool {
    let defender_name = ctx.defender_name();
    let (mine, theirs) = (ctx.attacker.pokemon.gender, ctx.defender.pokemon.gender);
    let opposite = matches!(
        (mine, theirs),
        (Gender::Male, Gender::Female) | (Gender::Female, Gender::Male)
    );
    if !opposite || ctx.defender.volatile.attracted_to.is_some() {
        return ctx.fail();
    }
    if ctx.defender.ability == Ability::Oblivious {
        ctx.events.message(
            Some(ctx.defender.side),
            format!("{}'s OBLIVIOUS prevents romance!", defender_name),
        );
        return false;
    }
    ctx.defender.volatile.attracted_to = Some(ctx.attacker.side);
    ctx.events
        .message(Some(ctx.defender.side), format!("{} fell in love!", defender_name));
    true
}

/// Cures the user. Benched party members are outside the battle and untouched.
pub(super) fn apply_heal_bell_effect(ctx: &mut MoveContext) -> bool {
    ctx.events.message(Some(ctx.attacker.side), "A bell chimed!");
    cure_status(ctx.attacker, &mut ctx.events);
    true
}

/// Full heal in exchange for a fixed sleep that replaces any current status.
pub(super) fn apply_rest_effect(ctx: &mut MoveContext) -> bool {
    if ctx.attacker.current_hp == ctx.attacker.max_hp
        || ability_prevents(ctx.attacker.ability, StatusKind::Sleep)
        || uproar_active(ctx)
    {
        return ctx.fail();
    }
    ctx.attacker.set_status(PrimaryStatus::Sleep(REST_SLEEP_TURNS));
    let max_hp = ctx.attacker.max_hp;
    let healed = ctx.attacker.heal(max_hp);
    let attacker_name = ctx.attacker_name();
    ctx.events.push(
        BattleEvent::new(EventKind::StatusApplied)
            .on(ctx.attacker.side)
            .text(format!("{} slept and became healthy!", attacker_name)),
    );
    ctx.events.push(
        BattleEvent::new(EventKind::Heal)
            .on(ctx.attacker.side)
            .value(healed),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ability::Limber, StatusKind::Paralysis, true)]
    #[case(Ability::VitalSpirit, StatusKind::Sleep, true)]
    #[case(Ability::Immunity, StatusKind::Toxic, true)]
    #[case(Ability::WaterVeil, StatusKind::Paralysis, false)]
    #[case(Ability::None, StatusKind::Burn, false)]
    fn test_status_blocking_abilities(#[case] ability: Ability, #[case] kind: StatusKind, #[case] blocked: bool) {
        assert_eq!(ability_prevents(ability, kind), blocked);
    }
}
