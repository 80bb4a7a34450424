// In: src/battle/move_effects/damage_effects.rs

// --- IMPORTS ---
use super::stat_effects::apply_stat_change;
use super::status_effects::inflict_on_defender;
use super::{reaches_semi_invulnerable, ChargeKind, MoveContext};
use crate::battle::calculators::{calculate_damage, effectiveness_against, DamageContext};
use crate::battle::conditions::{apply_confusion, push_faint_if_down, StatusKind};
use crate::battle::state::{BattleEvent, Battler, EventKind, FutureSight, Side, StatStage};
use crate::battle::weather::WeatherKind;
use schema::{Ability, Move, PokemonType};

const MAX_ROLLOUT_TURN: u8 = 5;
const MAX_FURY_CUTTER: u8 = 5;

// --- SHARED DAMAGE APPLICATION ---

/// How one hit should be computed and clamped.
#[derive(Debug, Clone, Copy)]
pub(super) struct Strike {
    pub power: u16,
    pub halve_defense: bool,
    /// HP the target is guaranteed to keep.
    pub min_remaining: u16,
}

impl Strike {
    pub fn power(power: u16) -> Self {
        Self {
            power,
            halve_defense: false,
            min_remaining: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct StrikeResult {
    pub damage: u16,
    pub effectiveness: u32,
}

impl StrikeResult {
    /// A damaging move counts as executed if it dealt damage or the target was immune.
    pub fn landed(&self) -> bool {
        self.damage > 0 || self.effectiveness == 0
    }
}

fn record_damage_taken(defender: &mut Battler, from: Side, applied: u16) {
    defender.volatile.took_damage_this_turn = true;
    defender.volatile.last_damage_taken = applied;
    defender.volatile.last_damaged_by = Some(from);
    if defender.volatile.bide_turns > 0 {
        defender.volatile.bide_damage += u32::from(applied);
    }
}

/// Clamp, apply and announce damage against the defender. Faint is left to the caller
/// so critical and effectiveness lines land before it.
fn land_damage(ctx: &mut MoveContext, computed: u16, min_remaining: u16) -> u16 {
    let endure = ctx.defender.volatile.endure;
    let min_remaining = min_remaining.max(u16::from(endure));
    let hp_before = ctx.defender.current_hp;
    let applied = computed.min(hp_before.saturating_sub(min_remaining));

    if applied > 0 {
        ctx.defender.take_damage(applied);
        ctx.events.push(
            BattleEvent::new(EventKind::Damage)
                .on(ctx.defender.side)
                .value(applied),
        );
        record_damage_taken(ctx.defender, ctx.attacker.side, applied);
    }

    if endure && hp_before > 1 && computed >= hp_before && ctx.defender.current_hp == 1 {
        let defender_name = ctx.defender_name();
        ctx.events
            .message(Some(ctx.defender.side), format!("{} endured the hit!", defender_name));
    }
    applied
}

fn immune_message(ctx: &mut MoveContext) {
    let defender_name = ctx.defender_name();
    ctx.events.push(
        BattleEvent::new(EventKind::Effectiveness)
            .on(ctx.defender.side)
            .value(0)
            .text(format!("It doesn't affect {}...", defender_name)),
    );
}

/// One formula-driven hit on the defender.
pub(super) fn strike(ctx: &mut MoveContext, hit: Strike) -> StrikeResult {
    let mut damage_ctx = DamageContext::new(
        ctx.attacker,
        ctx.defender,
        ctx.move_,
        ctx.weather.kind,
        ctx.defender_side,
    )
    .with_power(hit.power);
    if hit.halve_defense {
        damage_ctx = damage_ctx.halving_defense();
    }
    let result = calculate_damage(&damage_ctx, &mut *ctx.rng);

    if result.effectiveness == 0 {
        immune_message(ctx);
        return StrikeResult {
            damage: 0,
            effectiveness: 0,
        };
    }

    let mut computed = result.damage;
    let charged = ctx.attacker.volatile.charge_turns > 0 && ctx.data().move_type == PokemonType::Electric;
    let exposed = ctx
        .defender
        .volatile
        .semi_invulnerable_move
        .is_some_and(|hiding| reaches_semi_invulnerable(ctx.move_, hiding));
    if charged || exposed {
        computed = computed.saturating_mul(2).max(1);
    }

    let applied = land_damage(ctx, computed, hit.min_remaining);
    let defender_side = ctx.defender.side;

    if result.critical {
        ctx.events.push(
            BattleEvent::new(EventKind::Critical)
                .on(defender_side)
                .text("A critical hit!"),
        );
    }
    if result.effectiveness > 100 {
        ctx.events.push(
            BattleEvent::new(EventKind::Effectiveness)
                .on(defender_side)
                .value(result.effectiveness as i32)
                .text("It's super effective!"),
        );
    } else if result.effectiveness < 100 {
        ctx.events.push(
            BattleEvent::new(EventKind::Effectiveness)
                .on(defender_side)
                .value(result.effectiveness as i32)
                .text("It's not very effective..."),
        );
    }
    push_faint_if_down(ctx.defender, &mut ctx.events);

    StrikeResult {
        damage: applied,
        effectiveness: result.effectiveness,
    }
}

/// Damage that bypasses the formula but still respects type immunity.
pub(super) fn strike_fixed(ctx: &mut MoveContext, amount: u16, move_type: PokemonType, min_remaining: u16) -> bool {
    let effectiveness = effectiveness_against(move_type, ctx.defender.types(), ctx.defender.volatile.foresight);
    if effectiveness == 0 {
        immune_message(ctx);
        return false;
    }
    land_damage(ctx, amount, min_remaining);
    push_faint_if_down(ctx.defender, &mut ctx.events);
    true
}

// --- STANDALONE HELPER FUNCTIONS ---

pub(super) fn apply_plain_hit(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    strike(ctx, Strike::power(power)).landed()
}

pub(super) fn apply_fixed_damage_effect(ctx: &mut MoveContext, amount: u16, move_type: PokemonType) -> bool {
    strike_fixed(ctx, amount, move_type, 0)
}

/// Heals the attacker for half the damage dealt.
pub(super) fn apply_absorb_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.damage > 0 {
        let healed = ctx.attacker.heal((result.damage / 2).max(1));
        if healed > 0 {
            let defender_name = ctx.defender_name();
            ctx.events.push(
                BattleEvent::new(EventKind::Drain)
                    .on(ctx.attacker.side)
                    .value(healed)
                    .text(format!("{} had its energy drained!", defender_name)),
            );
        }
    }
    true
}

/// Hits with the target's defense halved, then the user faints.
pub(super) fn apply_explosion_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    strike(
        ctx,
        Strike {
            halve_defense: true,
            ..Strike::power(power)
        },
    );
    let remaining = ctx.attacker.current_hp;
    ctx.attacker.take_damage(remaining);
    push_faint_if_down(ctx.attacker, &mut ctx.events);
    true
}

fn hit_repeatedly(ctx: &mut MoveContext, hits: u8) -> bool {
    let power = ctx.data().power;
    let mut total = 0u32;
    let mut landed = 0u8;
    for _ in 0..hits {
        let result = strike(ctx, Strike::power(power));
        if result.effectiveness == 0 {
            break;
        }
        total += u32::from(result.damage);
        landed += 1;
        if ctx.defender.is_fainted() {
            break;
        }
    }
    if landed > 0 {
        ctx.events.push(
            BattleEvent::new(EventKind::Message)
                .on(ctx.defender.side)
                .value(landed)
                .text(format!("Hit {} time(s)!", landed)),
        );
    }
    total > 0
}

/// 2-5 hits: 3/8 two, 3/8 three, 1/8 four, 1/8 five.
pub(super) fn apply_multi_hit_effect(ctx: &mut MoveContext) -> bool {
    let hits = match ctx.rng.random_int(1, 8, "Multi-Hit Count") {
        1..=3 => 2,
        4..=6 => 3,
        7 => 4,
        _ => 5,
    };
    hit_repeatedly(ctx, hits)
}

/// Magnitude 4-10 rolled on every use, weighted 5/10/20/30/20/10/5 percent.
fn magnitude_power(roll: i32) -> (u8, u16) {
    match roll {
        0..=4 => (4, 10),
        5..=14 => (5, 30),
        15..=34 => (6, 50),
        35..=64 => (7, 70),
        65..=84 => (8, 90),
        85..=94 => (9, 110),
        _ => (10, 150),
    }
}

pub(super) fn apply_magnitude_effect(ctx: &mut MoveContext) -> bool {
    let (magnitude, power) = magnitude_power(ctx.rng.random_int(0, 99, "Magnitude"));
    ctx.events.message(None, format!("Magnitude {}!", magnitude));
    strike(ctx, Strike::power(power)).landed()
}

pub(super) fn apply_fixed_multi_hit_effect(ctx: &mut MoveContext, hits: u8) -> bool {
    hit_repeatedly(ctx, hits)
}

pub(super) fn apply_recoil_effect(ctx: &mut MoveContext, divisor: u16) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.damage > 0 {
        let recoil = ctx.attacker.take_damage((result.damage / divisor).max(1));
        let attacker_name = ctx.attacker_name();
        ctx.events.push(
            BattleEvent::new(EventKind::Recoil)
                .on(ctx.attacker.side)
                .value(recoil)
                .text(format!("{} is damaged by recoil!", attacker_name)),
        );
        push_faint_if_down(ctx.attacker, &mut ctx.events);
    }
    true
}

/// Jump-kick crash damage after a miss: half of max HP.
pub(super) fn apply_crash_effect(ctx: &mut MoveContext) {
    let crash = ctx.attacker.take_damage((ctx.attacker.max_hp / 2).max(1));
    let attacker_name = ctx.attacker_name();
    ctx.events.push(
        BattleEvent::new(EventKind::Recoil)
            .on(ctx.attacker.side)
            .value(crash)
            .text(format!("{} kept going and crashed!", attacker_name)),
    );
    push_faint_if_down(ctx.attacker, &mut ctx.events);
}

pub(super) fn apply_one_hit_ko_effect(ctx: &mut MoveContext) -> bool {
    if ctx.defender.level() > ctx.attacker.level() {
        return ctx.fail();
    }
    let remaining = ctx.defender.current_hp;
    let applied = ctx.defender.take_damage(remaining);
    record_damage_taken(ctx.defender, ctx.attacker.side, applied);
    ctx.events.push(
        BattleEvent::new(EventKind::Damage)
            .on(ctx.defender.side)
            .value(ctx.defender.max_hp)
            .text("It's a one-hit KO!"),
    );
    push_faint_if_down(ctx.defender, &mut ctx.events);
    true
}

/// Never drops the target below 1 HP.
pub(super) fn apply_false_swipe_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(
        ctx,
        Strike {
            min_remaining: 1,
            ..Strike::power(power)
        },
    );
    result.effectiveness != 0
}

fn flail_power(current_hp: u16, max_hp: u16) -> u16 {
    let mut fraction = u32::from(current_hp) * 48 / u32::from(max_hp.max(1));
    if fraction == 0 && current_hp > 0 {
        fraction = 1;
    }
    match fraction {
        0..=1 => 200,
        2..=4 => 150,
        5..=9 => 100,
        10..=16 => 80,
        17..=32 => 40,
        _ => 20,
    }
}

pub(super) fn apply_flail_effect(ctx: &mut MoveContext) -> bool {
    let power = flail_power(ctx.attacker.current_hp, ctx.attacker.max_hp);
    strike(ctx, Strike::power(power)).landed()
}

/// Power scales with the user's remaining HP.
pub(super) fn apply_eruption_effect(ctx: &mut MoveContext) -> bool {
    let base = u32::from(ctx.data().power);
    let power = (u32::from(ctx.attacker.current_hp) * base / u32::from(ctx.attacker.max_hp.max(1))).max(1);
    strike(ctx, Strike::power(power as u16)).landed()
}

pub(super) fn apply_revenge_effect(ctx: &mut MoveContext) -> bool {
    let mut power = ctx.data().power;
    let volatile = &ctx.attacker.volatile;
    if volatile.took_damage_this_turn && volatile.last_damaged_by == Some(ctx.defender.side) {
        power *= 2;
    }
    strike(ctx, Strike::power(power)).landed()
}

pub(super) fn apply_focus_punch_effect(ctx: &mut MoveContext) -> bool {
    if ctx.attacker.volatile.took_damage_this_turn {
        let attacker_name = ctx.attacker_name();
        ctx.events.message(
            Some(ctx.attacker.side),
            format!("{} lost its focus and couldn't move!", attacker_name),
        );
        return false;
    }
    apply_plain_hit(ctx)
}

/// Shatters Reflect and Light Screen on the target's side before hitting.
pub(super) fn apply_brick_break_effect(ctx: &mut MoveContext) -> bool {
    if ctx.defender_side.reflect_turns > 0 || ctx.defender_side.light_screen_turns > 0 {
        ctx.defender_side.reflect_turns = 0;
        ctx.defender_side.light_screen_turns = 0;
        let attacker_name = ctx.attacker_name();
        ctx.events
            .message(Some(ctx.attacker.side), format!("{} shattered the wall!", attacker_name));
    }
    apply_plain_hit(ctx)
}

pub(super) fn apply_recharge_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.effectiveness != 0 {
        ctx.attacker.volatile.recharging = true;
    }
    result.landed()
}

/// Binds the target for 4-5 turns of residual damage. Never refreshes a running trap.
pub(super) fn apply_trap_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.damage > 0 && !ctx.defender.is_fainted() && ctx.defender.volatile.trap_turns == 0 {
        ctx.defender.volatile.trap_turns = ctx.rng.random_int(4, 5, "Trap Duration") as u8;
        ctx.defender.volatile.trapped_by = Some(ctx.attacker.side);
        let defender_name = ctx.defender_name();
        ctx.events
            .message(Some(ctx.defender.side), format!("{} was trapped!", defender_name));
    }
    result.landed()
}

pub(super) fn apply_thief_effect(ctx: &mut MoveContext) -> bool {
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.damage > 0 && ctx.attacker.held_item().is_none() {
        if let Some(item) = ctx.defender.pokemon.held_item.take() {
            ctx.attacker.pokemon.held_item = Some(item);
            let (attacker_name, defender_name) = (ctx.attacker_name(), ctx.defender_name());
            ctx.events.message(
                Some(ctx.attacker.side),
                format!("{} stole {}'s {}!", attacker_name, defender_name, item.name()),
            );
        }
    }
    result.landed()
}

pub(super) fn apply_stomp_effect(ctx: &mut MoveContext) -> bool {
    let mut power = ctx.data().power;
    if ctx.defender.volatile.minimized {
        power *= 2;
    }
    super::status_effects::apply_flinch_hit_effect(ctx, power)
}

// --- MULTI-TURN MOVES ---

/// Two turns of storing damage, then double it back at the attacker.
pub(super) fn apply_bide_effect(ctx: &mut MoveContext) -> bool {
    let attacker_name = ctx.attacker_name();
    let side = ctx.attacker.side;
    let volatile = &mut ctx.attacker.volatile;

    if volatile.bide_turns == 0 {
        volatile.bide_turns = 2;
        volatile.bide_damage = 0;
        ctx.events.message(Some(side), format!("{} is storing energy!", attacker_name));
        return true;
    }

    volatile.bide_turns -= 1;
    if volatile.bide_turns > 0 {
        ctx.events.message(Some(side), format!("{} is storing energy!", attacker_name));
        return true;
    }

    let stored = std::mem::take(&mut volatile.bide_damage);
    ctx.events.message(Some(side), format!("{} unleashed energy!", attacker_name));
    if stored == 0 {
        return ctx.fail();
    }
    let amount = (stored * 2).clamp(1, u32::from(u16::MAX)) as u16;
    let move_type = ctx.data().move_type;
    strike_fixed(ctx, amount, move_type, 0)
}

/// Thrash and Outrage: locked in for 2-3 turns, then confused from fatigue.
pub(super) fn apply_rampage_effect(ctx: &mut MoveContext) -> bool {
    let move_ = ctx.move_;
    if ctx.attacker.volatile.rampage_turns == 0 || ctx.attacker.volatile.rampage_move != Some(move_) {
        ctx.attacker.volatile.rampage_turns = ctx.rng.random_int(2, 3, "Rampage Duration") as u8;
        ctx.attacker.volatile.rampage_move = Some(move_);
    }

    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if result.effectiveness == 0 {
        ctx.attacker.volatile.rampage_turns = 0;
        ctx.attacker.volatile.rampage_move = None;
        return false;
    }

    ctx.attacker.volatile.rampage_turns -= 1;
    if ctx.attacker.volatile.rampage_turns == 0 {
        ctx.attacker.volatile.rampage_move = None;
        if !ctx.attacker.is_fainted() {
            apply_confusion(ctx.attacker, &mut *ctx.rng, &mut ctx.events);
        }
    }
    result.landed()
}

/// Power doubles each consecutive turn, up to five turns.
pub(super) fn apply_rollout_effect(ctx: &mut MoveContext) -> bool {
    let turn = ctx.attacker.volatile.rollout_count.max(1);
    let power = ctx.data().power.saturating_mul(1 << (turn - 1));
    let result = strike(ctx, Strike::power(power));
    if result.effectiveness == 0 {
        ctx.attacker.volatile.rollout_count = 0;
        return false;
    }
    ctx.attacker.volatile.rollout_count = if turn >= MAX_ROLLOUT_TURN { 0 } else { turn + 1 };
    result.landed()
}

pub(super) fn apply_fury_cutter_effect(ctx: &mut MoveContext) -> bool {
    let next = (ctx.attacker.volatile.fury_cutter_count + 1).clamp(1, MAX_FURY_CUTTER);
    ctx.attacker.volatile.fury_cutter_count = next;
    let power = ctx.data().power.saturating_mul(1 << (next - 1));
    let result = strike(ctx, Strike::power(power));
    if result.effectiveness == 0 {
        ctx.attacker.volatile.fury_cutter_count = 0;
        return false;
    }
    result.landed()
}

/// 2-5 turns of attacking; the count is kept by the move itself.
pub(super) fn apply_uproar_effect(ctx: &mut MoveContext) -> bool {
    let attacker_name = ctx.attacker_name();
    let side = ctx.attacker.side;
    if ctx.attacker.volatile.uproar_turns == 0 {
        ctx.attacker.volatile.uproar_turns = ctx.rng.random_int(2, 5, "Uproar Duration") as u8;
        ctx.events.message(Some(side), format!("{} caused an uproar!", attacker_name));
    }

    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));

    ctx.attacker.volatile.uproar_turns -= 1;
    if ctx.attacker.volatile.uproar_turns == 0 {
        ctx.events.message(Some(side), format!("{} calmed down.", attacker_name));
    }
    result.landed()
}

pub(super) fn apply_spit_up_effect(ctx: &mut MoveContext) -> bool {
    let stockpile = ctx.attacker.volatile.stockpile;
    if stockpile == 0 {
        ctx.events.message(None, "But it failed to spit up a thing!");
        return false;
    }
    if ctx.defender.volatile.protect {
        ctx.attacker.volatile.stockpile = 0;
        let defender_name = ctx.defender_name();
        ctx.events
            .message(Some(ctx.defender.side), format!("{} protected itself!", defender_name));
        return false;
    }
    let power = ctx.data().power.saturating_mul(u16::from(stockpile));
    let result = strike(ctx, Strike::power(power));
    ctx.attacker.volatile.stockpile = 0;
    result.landed()
}

/// Computes the damage now; it lands on the target three turns later.
pub(super) fn apply_future_sight_effect(ctx: &mut MoveContext) -> bool {
    if ctx.defender.volatile.future_sight.is_some() {
        return ctx.fail();
    }
    let preview = DamageContext::new(ctx.attacker, ctx.defender, ctx.move_, ctx.weather.kind, ctx.defender_side);
    let result = calculate_damage(&preview, &mut *ctx.rng);
    if result.effectiveness == 0 {
        return ctx.fail();
    }
    ctx.defender.volatile.future_sight = Some(FutureSight {
        turns: 3,
        damage: result.damage.max(1),
        move_: ctx.move_,
        from: ctx.attacker.side,
    });
    let attacker_name = ctx.attacker_name();
    ctx.events
        .message(Some(ctx.attacker.side), format!("{} foresaw an attack!", attacker_name));
    true
}

fn weather_suppressed(ctx: &MoveContext) -> bool {
    [ctx.attacker.ability, ctx.defender.ability]
        .iter()
        .any(|ability| matches!(ability, Ability::CloudNine | Ability::AirLock))
}

pub(super) fn apply_charge_then_strike_effect(ctx: &mut MoveContext, kind: ChargeKind) -> bool {
    let move_ = ctx.move_;
    let attacker_name = ctx.attacker_name();
    let side = ctx.attacker.side;

    if ctx.attacker.volatile.charging_move != Some(move_) {
        let instant = kind == ChargeKind::SolarBeam
            && ctx.weather.is(WeatherKind::Sun)
            && !weather_suppressed(ctx);
        if !instant {
            ctx.attacker.volatile.charging_move = Some(move_);
            let message = match kind {
                ChargeKind::RazorWind => format!("{} whipped up a whirlwind!", attacker_name),
                ChargeKind::SkyAttack => format!("{} became cloaked in a harsh light!", attacker_name),
                ChargeKind::SkullBash => format!("{} lowered its head!", attacker_name),
                ChargeKind::SolarBeam => format!("{} took in sunlight!", attacker_name),
            };
            ctx.events.message(Some(side), message);
            if kind == ChargeKind::SkullBash {
                apply_stat_change(ctx.attacker, StatStage::Defense, 1, &mut ctx.events);
            }
            return true;
        }
    }

    ctx.attacker.volatile.charging_move = None;
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if kind == ChargeKind::SkyAttack && ctx.secondary_triggers(result.damage) {
        ctx.defender.volatile.flinch = true;
    }
    result.landed()
}

/// Fly, Dig, Dive and Bounce: vanish on the first turn, strike on the second.
pub(super) fn apply_semi_invulnerable_effect(ctx: &mut MoveContext) -> bool {
    let move_ = ctx.move_;
    let attacker_name = ctx.attacker_name();

    if ctx.attacker.volatile.charging_move != Some(move_) {
        ctx.attacker.volatile.charging_move = Some(move_);
        ctx.attacker.volatile.semi_invulnerable_move = Some(move_);
        let message = match move_ {
            Move::Dig => format!("{} dug underground!", attacker_name),
            Move::Dive => format!("{} hid underwater!", attacker_name),
            Move::Bounce => format!("{} sprang up!", attacker_name),
            _ => format!("{} flew up high!", attacker_name),
        };
        ctx.events.message(Some(ctx.attacker.side), message);
        return true;
    }

    ctx.attacker.volatile.charging_move = None;
    ctx.attacker.volatile.semi_invulnerable_move = None;
    let power = ctx.data().power;
    let result = strike(ctx, Strike::power(power));
    if move_ == Move::Bounce && ctx.secondary_triggers(result.damage) {
        inflict_on_defender(ctx, StatusKind::Paralysis);
    }
    result.landed()
}
