// In: src/battle/move_effects/mod.rs

// --- 1. DECLARE HELPER MODULES ---
// Handlers are grouped by what they touch: HP, stat stages, status, or everything else.
mod damage_effects;
mod special_effects;
mod stat_effects;
mod status_effects;

// --- 2. IMPORTS ---
use crate::battle::conditions::StatusKind;
use crate::battle::rng::BattleRng;
use crate::battle::state::{
    BattleEvent, Battler, EventBus, EventKind, Outcome, SideState, StatStage,
};
use crate::battle::stats::staged_accuracy;
use crate::battle::weather::{WeatherKind, WeatherState};
use crate::config::EncounterKind;
use schema::{Ability, HoldEffect, Move, MoveData, MoveTarget, PokemonType};
use serde::{Deserialize, Serialize};
// Bring the standalone helper functions from our private modules into scope.
use self::{damage_effects::*, special_effects::*, stat_effects::*, status_effects::*};

// --- 3. THE CLOSED EFFECT TABLE ---

/// The four charge-then-strike moves differ only in what happens on the charge turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeKind {
    RazorWind,
    SkyAttack,
    SkullBash,
    SolarBeam,
}

/// Every move effect the engine knows how to resolve, keyed by the cartridge's
/// numeric effect ID. IDs with no handler land in `Unmapped`, which resolves as a
/// plain hit for damaging moves and as a no-op otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    Hit,
    HighCritical,
    StatusHit(StatusKind),
    InflictStatus(StatusKind),
    Absorb,
    Explosion,
    StatUp(StatStage, i8),
    StatDown(StatStage, i8),
    StatDownHit(StatStage),
    Haze,
    Bide,
    Rampage,
    Roar,
    MultiHit,
    Magnitude,
    FlinchHit,
    RestoreHp,
    LightScreen,
    TriAttack,
    Rest,
    OneHitKo,
    ChargeThenStrike(ChargeKind),
    SuperFang,
    DragonRage,
    Trap,
    DoubleHit,
    RecoilIfMiss,
    Mist,
    FocusEnergy,
    Recoil { divisor: u16 },
    Confuse,
    Reflect,
    ConfuseHit,
    Recharge,
    LeechSeed,
    Splash,
    Disable,
    LevelDamage,
    Encore,
    LockOn,
    Flail,
    FalseSwipe,
    HealBell,
    Thief,
    MeanLook,
    Nightmare,
    Minimize,
    Curse,
    Protect,
    Spikes,
    Foresight,
    PerishSong,
    Weather(WeatherKind),
    Endure,
    Rollout,
    Swagger,
    FuryCutter,
    Attract,
    Safeguard,
    ThawHit,
    SonicBoom,
    StatUpHit(StatStage),
    AllStatsUpHit,
    FutureSight,
    Stomp,
    SemiInvulnerable,
    Uproar,
    Stockpile,
    SpitUp,
    Swallow,
    Torment,
    Flatter,
    Facade,
    FocusPunch,
    Charge,
    Taunt,
    Wish,
    SelfDropHit(&'static [(StatStage, i8)]),
    Revenge,
    BrickBreak,
    Yawn,
    Eruption,
    Tickle,
    SelfBoost(&'static [(StatStage, i8)]),
    Unmapped(u16),
}

/// Stage slots in the order the cartridge numbers its stat-change effects.
const EFFECT_STAT_ORDER: [StatStage; 7] = [
    StatStage::Attack,
    StatStage::Defense,
    StatStage::Speed,
    StatStage::SpAttack,
    StatStage::SpDefense,
    StatStage::Accuracy,
    StatStage::Evasion,
];

impl MoveEffect {
    pub fn from_id(id: u16) -> Self {
        let stat = |base: u16| EFFECT_STAT_ORDER[usize::from(id - base)];
        match id {
            0 | 17 | 103 | 147 | 149 | 207 => MoveEffect::Hit,
            1 => MoveEffect::InflictStatus(StatusKind::Sleep),
            2 | 209 => MoveEffect::StatusHit(StatusKind::Poison),
            3 => MoveEffect::Absorb,
            4 | 200 => MoveEffect::StatusHit(StatusKind::Burn),
            5 => MoveEffect::StatusHit(StatusKind::Freeze),
            6 | 152 => MoveEffect::StatusHit(StatusKind::Paralysis),
            7 => MoveEffect::Explosion,
            10..=16 => MoveEffect::StatUp(stat(10), 1),
            18..=24 => MoveEffect::StatDown(stat(18), -1),
            25 => MoveEffect::Haze,
            26 => MoveEffect::Bide,
            27 => MoveEffect::Rampage,
            28 => MoveEffect::Roar,
            29 => MoveEffect::MultiHit,
            31 | 146 => MoveEffect::FlinchHit,
            32 | 157 => MoveEffect::RestoreHp,
            33 => MoveEffect::InflictStatus(StatusKind::Toxic),
            35 => MoveEffect::LightScreen,
            36 => MoveEffect::TriAttack,
            37 => MoveEffect::Rest,
            38 => MoveEffect::OneHitKo,
            39 => MoveEffect::ChargeThenStrike(ChargeKind::RazorWind),
            40 => MoveEffect::SuperFang,
            41 => MoveEffect::DragonRage,
            42 => MoveEffect::Trap,
            43 => MoveEffect::HighCritical,
            44 => MoveEffect::DoubleHit,
            45 => MoveEffect::RecoilIfMiss,
            46 => MoveEffect::Mist,
            47 => MoveEffect::FocusEnergy,
            48 => MoveEffect::Recoil { divisor: 4 },
            49 => MoveEffect::Confuse,
            50..=56 => MoveEffect::StatUp(stat(50), 2),
            58..=64 => MoveEffect::StatDown(stat(58), -2),
            65 => MoveEffect::Reflect,
            66 => MoveEffect::InflictStatus(StatusKind::Poison),
            67 => MoveEffect::InflictStatus(StatusKind::Paralysis),
            68..=74 => MoveEffect::StatDownHit(stat(68)),
            75 => MoveEffect::ChargeThenStrike(ChargeKind::SkyAttack),
            76 => MoveEffect::ConfuseHit,
            80 => MoveEffect::Recharge,
            84 => MoveEffect::LeechSeed,
            85 => MoveEffect::Splash,
            86 => MoveEffect::Disable,
            87 => MoveEffect::LevelDamage,
            90 => MoveEffect::Encore,
            94 => MoveEffect::LockOn,
            99 => MoveEffect::Flail,
            101 => MoveEffect::FalseSwipe,
            102 => MoveEffect::HealBell,
            105 => MoveEffect::Thief,
            106 => MoveEffect::MeanLook,
            107 => MoveEffect::Nightmare,
            108 => MoveEffect::Minimize,
            109 => MoveEffect::Curse,
            111 => MoveEffect::Protect,
            112 => MoveEffect::Spikes,
            113 => MoveEffect::Foresight,
            114 => MoveEffect::PerishSong,
            115 => MoveEffect::Weather(WeatherKind::Sandstorm),
            116 => MoveEffect::Endure,
            117 => MoveEffect::Rollout,
            118 => MoveEffect::Swagger,
            119 => MoveEffect::FuryCutter,
            120 => MoveEffect::Attract,
            124 => MoveEffect::Safeguard,
            125 => MoveEffect::ThawHit,
            126 => MoveEffect::Magnitude,
            130 => MoveEffect::SonicBoom,
            136 => MoveEffect::Weather(WeatherKind::Rain),
            137 => MoveEffect::Weather(WeatherKind::Sun),
            138 => MoveEffect::StatUpHit(StatStage::Defense),
            139 => MoveEffect::StatUpHit(StatStage::Attack),
            140 => MoveEffect::AllStatsUpHit,
            145 => MoveEffect::ChargeThenStrike(ChargeKind::SkullBash),
            148 => MoveEffect::FutureSight,
            150 => MoveEffect::Stomp,
            151 => MoveEffect::ChargeThenStrike(ChargeKind::SolarBeam),
            155 => MoveEffect::SemiInvulnerable,
            159 => MoveEffect::Uproar,
            160 => MoveEffect::Stockpile,
            161 => MoveEffect::SpitUp,
            162 => MoveEffect::Swallow,
            164 => MoveEffect::Weather(WeatherKind::Hail),
            165 => MoveEffect::Torment,
            166 => MoveEffect::Flatter,
            167 => MoveEffect::InflictStatus(StatusKind::Burn),
            169 => MoveEffect::Facade,
            170 => MoveEffect::FocusPunch,
            174 => MoveEffect::Charge,
            175 => MoveEffect::Taunt,
            179 => MoveEffect::Wish,
            182 => MoveEffect::SelfDropHit(&[(StatStage::Attack, -1), (StatStage::Defense, -1)]),
            185 => MoveEffect::Revenge,
            186 => MoveEffect::BrickBreak,
            187 => MoveEffect::Yawn,
            190 => MoveEffect::Eruption,
            198 => MoveEffect::Recoil { divisor: 3 },
            204 => MoveEffect::SelfDropHit(&[(StatStage::SpAttack, -2)]),
            205 => MoveEffect::Tickle,
            206 => MoveEffect::SelfBoost(&[(StatStage::Defense, 1), (StatStage::SpDefense, 1)]),
            208 => MoveEffect::SelfBoost(&[(StatStage::Attack, 1), (StatStage::Defense, 1)]),
            211 => MoveEffect::SelfBoost(&[(StatStage::SpAttack, 1), (StatStage::SpDefense, 1)]),
            212 => MoveEffect::SelfBoost(&[(StatStage::Attack, 1), (StatStage::Speed, 1)]),
            other => MoveEffect::Unmapped(other),
        }
    }

    pub fn of(move_: Move) -> Self {
        Self::from_id(move_.data().effect)
    }

    /// Moves that spend their first turn charging or hiding.
    pub fn is_two_turn(self) -> bool {
        matches!(self, MoveEffect::ChargeThenStrike(_) | MoveEffect::SemiInvulnerable)
    }
}

/// Whether `move_` can hit a target hidden by `hiding_move`. Every move that can
/// also deals double damage.
pub fn reaches_semi_invulnerable(move_: Move, hiding_move: Move) -> bool {
    match hiding_move {
        Move::Dig => matches!(move_, Move::Earthquake | Move::Magnitude),
        Move::Dive => matches!(move_, Move::Surf | Move::Whirlpool),
        Move::Fly | Move::Bounce => matches!(move_, Move::Gust | Move::Twister),
        _ => false,
    }
}

// --- 4. HANDLER CONTEXT AND RESULT ---

/// Everything a handler may read or mutate while one move resolves.
/// Handlers get exclusive access to both battlers and both sides for the duration.
pub struct MoveContext<'a> {
    pub attacker: &'a mut Battler,
    pub defender: &'a mut Battler,
    pub attacker_side: &'a mut SideState,
    pub defender_side: &'a mut SideState,
    pub weather: WeatherState,
    pub move_: Move,
    /// Party slot the move came from. `None` for Struggle.
    pub slot: Option<usize>,
    pub encounter: EncounterKind,
    pub rng: &'a mut dyn BattleRng,
    events: EventBus,
    weather_change: Option<WeatherState>,
    battle_end: Option<Outcome>,
}

impl<'a> MoveContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        attacker: &'a mut Battler,
        attacker_side: &'a mut SideState,
        defender: &'a mut Battler,
        defender_side: &'a mut SideState,
        weather: WeatherState,
        move_: Move,
        slot: Option<usize>,
        encounter: EncounterKind,
        rng: &'a mut dyn BattleRng,
    ) -> Self {
        Self {
            attacker,
            defender,
            attacker_side,
            defender_side,
            weather,
            move_,
            slot,
            encounter,
            rng,
            events: EventBus::new(),
            weather_change: None,
            battle_end: None,
        }
    }

    fn data(&self) -> MoveData {
        self.move_.data()
    }

    fn attacker_name(&self) -> String {
        self.attacker.name()
    }

    fn defender_name(&self) -> String {
        self.defender.name()
    }

    fn fail(&mut self) -> bool {
        self.events.message(None, "But it failed!");
        false
    }

    /// The on-hit secondary roll shared by every "chance to X" effect.
    fn secondary_triggers(&mut self, damage: u16) -> bool {
        let chance = self.data().secondary_chance;
        damage > 0
            && !self.defender.is_fainted()
            && chance > 0
            && self.rng.random_int(1, 100, "Secondary Effect Chance") <= i32::from(chance)
    }

    /// Charge turn of a two-turn move: not yet committed to the strike.
    fn is_charge_turn(&self, effect: MoveEffect) -> bool {
        effect.is_two_turn() && self.attacker.volatile.charging_move != Some(self.move_)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub events: Vec<BattleEvent>,
    pub success: bool,
    /// Replacement weather, when the move set one.
    pub weather: Option<WeatherState>,
    /// Set when the move ends the encounter outright.
    pub ends_battle: Option<Outcome>,
}

// --- 5. THE PUBLIC ENTRY POINT ---

/// Resolve one use of a move: announcement, PP, Protect, accuracy, then the effect.
pub fn execute_move(mut ctx: MoveContext) -> MoveResult {
    let data = ctx.data();
    let effect = MoveEffect::from_id(data.effect);
    let attacker_name = ctx.attacker_name();

    ctx.events.push(
        BattleEvent::new(EventKind::MoveUsed)
            .on(ctx.attacker.side)
            .text(format!("{} used {}!", attacker_name, data.name)),
    );

    if effect != MoveEffect::FuryCutter {
        ctx.attacker.volatile.fury_cutter_count = 0;
    }

    consume_pp(&mut ctx, effect);

    let success = if blocked_by_protect(&ctx, effect, &data) {
        let defender_name = ctx.defender_name();
        ctx.events
            .message(Some(ctx.defender.side), format!("{} protected itself!", defender_name));
        false
    } else if !needs_accuracy_check(&ctx, effect, &data) || accuracy_check(&mut ctx, &data) {
        dispatch(&mut ctx, effect, &data)
    } else {
        handle_miss(&mut ctx, effect);
        false
    };

    log::debug!(
        "{} resolved {:?} (success: {})",
        attacker_name,
        ctx.move_,
        success
    );

    MoveResult {
        events: ctx.events.into_events(),
        success,
        weather: ctx.weather_change,
        ends_battle: ctx.battle_end,
    }
}

/// Continuation turns of multi-turn moves don't spend PP.
fn consume_pp(ctx: &mut MoveContext, effect: MoveEffect) {
    let move_ = ctx.move_;
    let volatile = &ctx.attacker.volatile;
    let continuing = (effect.is_two_turn() && volatile.charging_move == Some(move_))
        || (effect == MoveEffect::Bide && volatile.bide_turns > 0)
        || (volatile.rampage_move == Some(move_) && volatile.rampage_turns > 0)
        || (volatile.rollout_count > 0 && volatile.last_move_used == Some(move_))
        || volatile.uproar_turns > 0;

    if !continuing {
        if let Some(slot) = ctx.slot.filter(|slot| *slot < 4) {
            if let Some(Some(instance)) = ctx.attacker.pokemon.moves.get_mut(slot) {
                instance.pp = instance.pp.saturating_sub(1);
            }
        }
    }

    ctx.attacker.volatile.last_move_used = Some(move_);
    if ctx.attacker.hold_effect() == HoldEffect::ChoiceBand
        && ctx.attacker.volatile.choice_locked_move.is_none()
        && move_ != Move::Struggle
    {
        ctx.attacker.volatile.choice_locked_move = Some(move_);
    }
}

fn targets_opponent(data: &MoveData) -> bool {
    !matches!(data.target, MoveTarget::User | MoveTarget::OpponentsField)
}

fn blocked_by_protect(ctx: &MoveContext, effect: MoveEffect, data: &MoveData) -> bool {
    effect != MoveEffect::SpitUp
        && ctx.defender.volatile.protect
        && data.protect_affected
        && targets_opponent(data)
        && !ctx.is_charge_turn(effect)
}

fn needs_accuracy_check(ctx: &MoveContext, effect: MoveEffect, data: &MoveData) -> bool {
    if !targets_opponent(data) || effect == MoveEffect::Bide {
        return false;
    }
    if effect == MoveEffect::FocusPunch && ctx.attacker.volatile.took_damage_this_turn {
        return false;
    }
    !ctx.is_charge_turn(effect)
}

/// Returns whether the move connects, emitting the miss event when it doesn't.
fn accuracy_check(ctx: &mut MoveContext, data: &MoveData) -> bool {
    let hits = 'check: {
        let attacker = &ctx.attacker.volatile;
        if attacker.lock_on_turns > 0 && attacker.lock_on_target == Some(ctx.defender.side) {
            break 'check true;
        }
        if let Some(hiding) = ctx.defender.volatile.semi_invulnerable_move {
            if !reaches_semi_invulnerable(ctx.move_, hiding) {
                break 'check false;
            }
        }
        if data.accuracy == 0 {
            break 'check true;
        }

        let mut accuracy = data.accuracy;
        if ctx.move_ == Move::Thunder {
            if let Some(forced) = ctx.weather.thunder_accuracy() {
                accuracy = forced;
            }
        }
        accuracy = staged_accuracy(
            accuracy,
            ctx.attacker.stages.accuracy,
            ctx.defender.stages.evasion,
            ctx.defender.volatile.foresight,
        );
        if ctx.attacker.ability == Ability::Hustle && data.move_type.is_physical() {
            accuracy = accuracy * 8 / 10;
        }

        ctx.rng.random_int(1, 100, "Accuracy Check") <= i32::from(accuracy)
    };

    if !hits {
        let attacker_name = ctx.attacker_name();
        ctx.events.push(
            BattleEvent::new(EventKind::Miss)
                .on(ctx.attacker.side)
                .text(format!("{}'s attack missed!", attacker_name)),
        );
    }
    hits
}

fn handle_miss(ctx: &mut MoveContext, effect: MoveEffect) {
    match effect {
        MoveEffect::RecoilIfMiss => apply_crash_effect(ctx),
        MoveEffect::SemiInvulnerable => {
            ctx.attacker.volatile.charging_move = None;
            ctx.attacker.volatile.semi_invulnerable_move = None;
        }
        MoveEffect::Rollout => ctx.attacker.volatile.rollout_count = 0,
        MoveEffect::FuryCutter => ctx.attacker.volatile.fury_cutter_count = 0,
        _ => {}
    }
}

fn dispatch(ctx: &mut MoveContext, effect: MoveEffect, data: &MoveData) -> bool {
    match effect {
        MoveEffect::Hit | MoveEffect::HighCritical | MoveEffect::RecoilIfMiss | MoveEffect::Facade => {
            apply_plain_hit(ctx)
        }
        MoveEffect::StatusHit(kind) => apply_status_hit_effect(ctx, kind),
        MoveEffect::InflictStatus(kind) => apply_inflict_status_effect(ctx, kind),
        MoveEffect::TriAttack => apply_tri_attack_effect(ctx),
        MoveEffect::ThawHit => apply_thaw_hit_effect(ctx),
        MoveEffect::FlinchHit => apply_flinch_hit_effect(ctx, data.power),
        MoveEffect::Stomp => apply_stomp_effect(ctx),
        MoveEffect::Confuse => apply_confuse_effect(ctx),
        MoveEffect::ConfuseHit => apply_confuse_hit_effect(ctx),
        MoveEffect::LeechSeed => apply_leech_seed_effect(ctx),
        MoveEffect::Nightmare => apply_nightmare_effect(ctx),
        MoveEffect::Yawn => apply_yawn_effect(ctx),
        MoveEffect::Attract => apply_attract_effect(ctx),
        MoveEffect::HealBell => apply_heal_bell_effect(ctx),
        MoveEffect::Rest => apply_rest_effect(ctx),

        MoveEffect::StatUp(stat, amount) => apply_stat_up_effect(ctx, stat, amount),
        MoveEffect::StatDown(stat, amount) => apply_stat_down_effect(ctx, stat, amount),
        MoveEffect::StatDownHit(stat) => apply_stat_down_hit_effect(ctx, stat),
        MoveEffect::StatUpHit(stat) => apply_stat_up_hit_effect(ctx, &[stat]),
        MoveEffect::AllStatsUpHit => apply_stat_up_hit_effect(ctx, &StatStage::BATTLE_STATS),
        MoveEffect::SelfDropHit(changes) => apply_self_drop_hit_effect(ctx, changes),
        MoveEffect::SelfBoost(changes) => apply_self_boost_effect(ctx, changes),
        MoveEffect::Tickle => apply_tickle_effect(ctx),
        MoveEffect::Haze => apply_haze_effect(ctx),
        MoveEffect::Swagger => apply_swagger_effect(ctx, StatStage::Attack, 2),
        MoveEffect::Flatter => apply_swagger_effect(ctx, StatStage::SpAttack, 1),
        MoveEffect::Minimize => apply_minimize_effect(ctx),
        MoveEffect::Curse => apply_curse_effect(ctx),

        MoveEffect::Absorb => apply_absorb_effect(ctx),
        MoveEffect::Explosion => apply_explosion_effect(ctx),
        MoveEffect::MultiHit => apply_multi_hit_effect(ctx),
        MoveEffect::Magnitude => apply_magnitude_effect(ctx),
        MoveEffect::DoubleHit => apply_fixed_multi_hit_effect(ctx, 2),
        MoveEffect::Recoil { divisor } => apply_recoil_effect(ctx, divisor),
        MoveEffect::OneHitKo => apply_one_hit_ko_effect(ctx),
        MoveEffect::SuperFang => {
            let half = (ctx.defender.current_hp / 2).max(1);
            apply_fixed_damage_effect(ctx, half, PokemonType::Normal)
        }
        MoveEffect::DragonRage => apply_fixed_damage_effect(ctx, 40, PokemonType::Dragon),
        MoveEffect::SonicBoom => apply_fixed_damage_effect(ctx, 20, PokemonType::Normal),
        MoveEffect::LevelDamage => {
            let level = u16::from(ctx.attacker.level());
            apply_fixed_damage_effect(ctx, level, data.move_type)
        }
        MoveEffect::FalseSwipe => apply_false_swipe_effect(ctx),
        MoveEffect::Flail => apply_flail_effect(ctx),
        MoveEffect::Eruption => apply_eruption_effect(ctx),
        MoveEffect::Revenge => apply_revenge_effect(ctx),
        MoveEffect::FocusPunch => apply_focus_punch_effect(ctx),
        MoveEffect::BrickBreak => apply_brick_break_effect(ctx),
        MoveEffect::Recharge => apply_recharge_effect(ctx),
        MoveEffect::Trap => apply_trap_effect(ctx),
        MoveEffect::Thief => apply_thief_effect(ctx),
        MoveEffect::Bide => apply_bide_effect(ctx),
        MoveEffect::Rampage => apply_rampage_effect(ctx),
        MoveEffect::Rollout => apply_rollout_effect(ctx),
        MoveEffect::FuryCutter => apply_fury_cutter_effect(ctx),
        MoveEffect::Uproar => apply_uproar_effect(ctx),
        MoveEffect::SpitUp => apply_spit_up_effect(ctx),
        MoveEffect::FutureSight => apply_future_sight_effect(ctx),
        MoveEffect::ChargeThenStrike(kind) => apply_charge_then_strike_effect(ctx, kind),
        MoveEffect::SemiInvulnerable => apply_semi_invulnerable_effect(ctx),

        MoveEffect::Protect => apply_protect_effect(ctx, false),
        MoveEffect::Endure => apply_protect_effect(ctx, true),
        MoveEffect::Reflect => apply_screen_effect(ctx, Screen::Reflect),
        MoveEffect::LightScreen => apply_screen_effect(ctx, Screen::LightScreen),
        MoveEffect::Mist => apply_screen_effect(ctx, Screen::Mist),
        MoveEffect::Safeguard => apply_screen_effect(ctx, Screen::Safeguard),
        MoveEffect::Spikes => apply_spikes_effect(ctx),
        MoveEffect::FocusEnergy => apply_focus_energy_effect(ctx),
        MoveEffect::Weather(kind) => apply_weather_effect(ctx, kind),
        MoveEffect::RestoreHp => apply_restore_hp_effect(ctx),
        MoveEffect::Stockpile => apply_stockpile_effect(ctx),
        MoveEffect::Swallow => apply_swallow_effect(ctx),
        MoveEffect::Wish => apply_wish_effect(ctx),
        MoveEffect::Charge => apply_charge_effect(ctx),
        MoveEffect::Taunt => apply_taunt_effect(ctx),
        MoveEffect::Torment => apply_torment_effect(ctx),
        MoveEffect::Disable => apply_disable_effect(ctx),
        MoveEffect::Encore => apply_encore_effect(ctx),
        MoveEffect::LockOn => apply_lock_on_effect(ctx),
        MoveEffect::MeanLook => apply_mean_look_effect(ctx),
        MoveEffect::Foresight => apply_foresight_effect(ctx),
        MoveEffect::PerishSong => apply_perish_song_effect(ctx),
        MoveEffect::Roar => apply_roar_effect(ctx),
        MoveEffect::Splash => apply_splash_effect(ctx),

        MoveEffect::Unmapped(id) => {
            log::debug!("effect {} has no handler, falling back", id);
            if data.power > 0 {
                apply_plain_hit(ctx)
            } else {
                apply_splash_effect(ctx)
            }
        }
    }
}
