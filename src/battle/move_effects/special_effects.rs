// In: src/battle/move_effects/special_effects.rs

// --- IMPORTS ---
use super::MoveContext;
use crate::battle::state::{BattleEvent, EventKind, Outcome, SideState, Wish};
use crate::battle::weather::{WeatherKind, WeatherState};
use crate::config::EncounterKind;
use schema::{Ability, Move};

const SCREEN_DURATION: u8 = 5;
const WISH_DELAY: u8 = 2;
const TAUNT_DURATION: u8 = 2;
const LOCK_ON_DURATION: u8 = 2;
const CHARGE_DURATION: u8 = 2;
const PERISH_START: u8 = 4;
const MAX_STOCKPILE: u8 = 3;

/// Success odds for consecutive Protect/Endure uses.
const PROTECT_ODDS: [f64; 4] = [1.0, 0.5, 0.25, 0.125];

/// A five-turn side condition raised by the user for its own team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Screen {
    Reflect,
    LightScreen,
    Mist,
    Safeguard,
}

impl Screen {
    fn turns(self, side: &mut SideState) -> &mut u8 {
        match self {
            Screen::Reflect => &mut side.reflect_turns,
            Screen::LightScreen => &mut side.light_screen_turns,
            Screen::Mist => &mut side.mist_turns,
            Screen::Safeguard => &mut side.safeguard_turns,
        }
    }

    fn start_message(self, name: &str) -> String {
        match self {
            Screen::Reflect => format!("REFLECT raised {}'s team's DEFENSE!", name),
            Screen::LightScreen => format!("LIGHT SCREEN raised {}'s team's SP. DEF!", name),
            Screen::Mist => format!("{}'s team became shrouded in MIST!", name),
            Screen::Safeguard => format!("{}'s team became cloaked in a mystical veil!", name),
        }
    }
}

// --- STANDALONE HELPER FUNCTIONS ---

/// Protect and Endure share one escalating failure counter.
pub(super) fn apply_protect_effect(ctx: &mut MoveContext, endure: bool) -> bool {
    let streak = usize::from(ctx.attacker.volatile.protect_success_count).min(PROTECT_ODDS.len() - 1);
    if !ctx.rng.random_chance(PROTECT_ODDS[streak], "Protect Success Check") {
        ctx.attacker.volatile.protect_success_count = 0;
        return ctx.fail();
    }

    let attacker_name = ctx.attacker_name();
    let volatile = &mut ctx.attacker.volatile;
    volatile.protect_success_count = volatile.protect_success_count.saturating_add(1);
    let message = if endure {
        volatile.endure = true;
        format!("{} braced itself!", attacker_name)
    } else {
        volatile.protect = true;
        format!("{} protected itself!", attacker_name)
    };
    ctx.events.message(Some(ctx.attacker.side), message);
    true
}

pub(super) fn apply_screen_effect(ctx: &mut MoveContext, screen: Screen) -> bool {
    if *screen.turns(ctx.attacker_side) > 0 {
        return ctx.fail();
    }
    *screen.turns(ctx.attacker_side) = SCREEN_DURATION;
    let attacker_name = ctx.attacker_name();
    ctx.events
        .message(Some(ctx.attacker.side), screen.start_message(&attacker_name));
    true
}

pub(super) fn apply_spikes_effect(ctx: &mut MoveContext) -> bool {
    if ctx.defender_side.spikes >= SideState::MAX_SPIKES {
        return ctx.fail();
    }
    ctx.defender_side.spikes += 1;
    ctx.events.message(
        Some(ctx.defender.side),
        "SPIKES were scattered all around the opposing team!",
    );
    true
}

pub(super) fn apply_focus_energy_effect(ctx: &mut MoveContext) -> bool {
    if ctx.attacker.volatile.focus_energy {
        return ctx.fail();
    }
    ctx.attacker.volatile.focus_energy = true;
    let attacker_name = ctx.attacker_name();
    ctx.events
        .message(Some(ctx.attacker.side), format!("{} is getting pumped!", attacker_name));
    true
}

/// Rain Dance and friends. The new weather is handed back to the engine.
pub(super) fn apply_weather_effect(ctx: &mut MoveContext, kind: WeatherKind) -> bool {
    if ctx.weather.is(kind) {
        return ctx.fail();
    }
    let weather = WeatherState::from_move(kind);
    ctx.weather = weather;
    ctx.weather_change = Some(weather);
    let mut event = BattleEvent::new(EventKind::WeatherChange).value(i32::from(weather.turns));
    if let Some(message) = kind.start_message() {
        event = event.text(message);
    }
    ctx.events.push(event);
    true
}

fn heal_attacker(ctx: &mut MoveContext, amount: u16) -> u16 {
    let healed = ctx.attacker.heal(amount);
    let attacker_name = ctx.attacker_name();
    ctx.events.push(
        BattleEvent::new(EventKind::Heal)
            .on(ctx.attacker.side)
            .value(healed)
            .text(format!("{} regained health!", attacker_name)),
    );
    healed
}

/// Recover and Softboiled: half of max HP.
pub(super) fn apply_restore_hp_effect(ctx: &mut MoveContext) -> bool {
    if ctx.attacker.missing_hp() == 0 {
        return ctx.fail();
    }
    let amount = (ctx.attacker.max_hp / 2).max(1);
    heal_attacker(ctx, amount);
    true
}

pub(super) fn apply_stockpile_effect(ctx: &mut MoveContext) -> bool {
    let attacker_name = ctx.attacker_name();
    let side = ctx.attacker.side;
    let volatile = &mut ctx.attacker.volatile;
    if volatile.stockpile >= MAX_STOCKPILE {
        ctx.events
            .message(Some(side), format!("{} can't stockpile any more!", attacker_name));
        return false;
    }
    volatile.stockpile += 1;
    let count = volatile.stockpile;
    ctx.events
        .message(Some(side), format!("{} stockpiled {}!", attacker_name, count));
    true
}

/// Heals a quarter, half or all of max HP for one, two or three stockpiles.
pub(super) fn apply_swallow_effect(ctx: &mut MoveContext) -> bool {
    let stockpile = std::mem::take(&mut ctx.attacker.volatile.stockpile);
    let max_hp = ctx.attacker.max_hp;
    let amount = match stockpile {
        0 => {
            ctx.events.message(None, "But it failed to swallow a thing!");
            return false;
        }
        1 => max_hp / 4,
        2 => max_hp / 2,
        _ => max_hp,
    };
    if ctx.attacker.missing_hp() == 0 {
        return ctx.fail();
    }
    heal_attacker(ctx, amount.max(1));
    true
}

/// Half of the user's max HP, restored to whoever is active two turns later.
pub(super) fn apply_wish_effect(ctx: &mut MoveContext) -> bool {
    if ctx.attacker_side.wish.is_some() {
        return ctx.fail();
    }
    ctx.attacker_side.wish = Some(Wish {
        turns: WISH_DELAY,
        amount: (ctx.attacker.max_hp / 2).max(1),
    });
    let attacker_name = ctx.attacker_name();
    ctx.events
        .message(Some(ctx.attacker.side), format!("{} made a wish!", attacker_name));
    true
}

pub(super) fn apply_charge_effect(ctx: &mut MoveContext) -> bool {
    ctx.attacker.volatile.charge_turns = CHARGE_DURATION;
    let attacker_name = ctx.attacker_name();
    ctx.events
        .message(Some(ctx.attacker.side), format!("{} began charging power!", attacker_name));
    true
}

pub(super) fn apply_taunt_effect(ctx: &mut MoveContext) -> bool {
    if ctx.defender.volatile.taunt_turns > 0 {
        return ctx.fail();
    }
    ctx.defender.volatile.taunt_turns = TAUNT_DURATION;
    let defender_name = ctx.defender_name();
    ctx.events
        .message(Some(ctx.defender.side), format!("{} fell for the TAUNT!", defender_name));
    true
}

pub(super) fn apply_torment_effect(ctx: &mut MoveContext) -> bool {
    if ctx.defender.volatile.torment {
        return ctx.fail();
    }
    ctx.defender.volatile.torment = true;
    let (attacker_name, defender_name) = (ctx.attacker_name(), ctx.defender_name());
    ctx.events.message(
        Some(ctx.defender.side),
        format!("{} subjected {} to TORMENT!", attacker_name, defender_name),
    );
    true
}

/// The defender's last move, if it still has PP to lock onto.
fn last_move_with_pp(ctx: &MoveContext) -> Option<Move> {
    let last = ctx.defender.volatile.last_move_used?;
    let slot = ctx.defender.slot_of(last)?;
    ctx.defender
        .move_slot(slot)
        .filter(|instance| instance.pp > 0)
        .map(|_| last)
}

pub(super) fn apply_disable_effect(ctx: &mut MoveContext) -> bool {
    let target = last_move_with_pp(ctx).filter(|m| *m != Move::Struggle);
    let Some(move_) = target else {
        return ctx.fail();
    };
    if ctx.defender.volatile.disable_turns > 0 {
        return ctx.fail();
    }
    ctx.defender.volatile.disabled_move = Some(move_);
    ctx.defender.volatile.disable_turns = ctx.rng.random_int(2, 5, "Disable Duration") as u8;
    let defender_name = ctx.defender_name();
    ctx.events.message(
        Some(ctx.defender.side),
        format!("{}'s {} was disabled!", defender_name, move_.name()),
    );
    true
}

pub(super) fn apply_encore_effect(ctx: &mut MoveContext) -> bool {
    let target = last_move_with_pp(ctx).filter(|m| !matches!(m, Move::Struggle | Move::Encore));
    let Some(move_) = target else {
        return ctx.fail();
    };
    if ctx.defender.volatile.encore_turns > 0 {
        return ctx.fail();
    }
    ctx.defender.volatile.encored_move = Some(move_);
    ctx.defender.volatile.encore_turns = ctx.rng.random_int(3, 6, "Encore Duration") as u8;
    let defender_name = ctx.defender_name();
    ctx.events
        .message(Some(ctx.defender.side), format!("{} got an ENCORE!", defender_name));
    true
}

pub(super) fn apply_lock_on_effect(ctx: &mut MoveContext) -> bool {
    ctx.attacker.volatile.lock_on_turns = LOCK_ON_DURATION;
    ctx.attacker.volatile.lock_on_target = Some(ctx.defender.side);
    let (attacker_name, defender_name) = (ctx.attacker_name(), ctx.defender_name());
    ctx.events.message(
        Some(ctx.attacker.side),
        format!("{} took aim at {}!", attacker_name, defender_name),
    );
    true
}

pub(super) fn apply_mean_look_effect(ctx: &mut MoveContext) -> bool {
    if ctx.defender.volatile.escape_blocked_by.is_some() {
        return ctx.fail();
    }
    ctx.defender.volatile.escape_blocked_by = Some(ctx.attacker.side);
    let defender_name = ctx.defender_name();
    ctx.events
        .message(Some(ctx.defender.side), format!("{} can't escape now!", defender_name));
    true
}

pub(super) fn apply_foresight_effect(ctx: &mut MoveContext) -> bool {
    ctx.defender.volatile.foresight = true;
    let (attacker_name, defender_name) = (ctx.attacker_name(), ctx.defender_name());
    ctx.events.message(
        Some(ctx.defender.side),
        format!("{} identified {}!", attacker_name, defender_name),
    );
    true
}

/// Everyone who can hear it faints after the count runs out. Soundproof opts out.
pub(super) fn apply_perish_song_effect(ctx: &mut MoveContext) -> bool {
    let mut affected = false;
    for battler in [&mut *ctx.attacker, &mut *ctx.defender] {
        if battler.ability != Ability::Soundproof && battler.volatile.perish_count.is_none() {
            battler.volatile.perish_count = Some(PERISH_START);
            affected = true;
        }
    }
    if !affected {
        return ctx.fail();
    }
    ctx.events
        .message(None, "All POKEMON hearing the song will faint in three turns!");
    true
}

/// Roar and Whirlwind end a wild encounter. Trainer battles have no one to drag in.
pub(super) fn apply_roar_effect(ctx: &mut MoveContext) -> bool {
    if ctx.encounter == EncounterKind::Trainer {
        return ctx.fail();
    }
    let defender_name = ctx.defender_name();
    if ctx.defender.ability == Ability::SuctionCups {
        ctx.events.message(
            Some(ctx.defender.side),
            format!("{} anchored itself with SUCTION CUPS!", defender_name),
        );
        return false;
    }

    let (user_level, target_level) = (i32::from(ctx.attacker.level()), i32::from(ctx.defender.level()));
    if user_level < target_level {
        let roll = ctx.rng.random_int(0, 255, "Roar Level Check");
        if roll * (user_level + target_level) / 256 + 1 <= target_level / 4 {
            return ctx.fail();
        }
    }

    ctx.events.push(
        BattleEvent::new(EventKind::BattleEnd)
            .on(ctx.defender.side)
            .text(format!("{} was blown away!", defender_name)),
    );
    ctx.battle_end = Some(Outcome::Flee);
    true
}

/// Also the fallback for status moves with no handler. Nothing changes, so nothing succeeded.
pub(super) fn apply_splash_effect(ctx: &mut MoveContext) -> bool {
    ctx.events.message(None, "But nothing happened!");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_screen_turns_point_at_the_right_counter() {
        let mut side = SideState::default();
        *Screen::LightScreen.turns(&mut side) = 5;
        *Screen::Mist.turns(&mut side) = 3;
        assert_eq!(side.light_screen_turns, 5);
        assert_eq!(side.mist_turns, 3);
        assert_eq!(side.reflect_turns, 0);
    }
}
