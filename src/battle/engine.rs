// In: src/battle/engine.rs

use crate::battle::action_stack::{normalize_action, ActionStack, ActionValidation, BattleAction, QueuedAction};
use crate::battle::ai::{Behavior, RandomMoveAI};
use crate::battle::catch::throw_ball;
use crate::battle::conditions::{end_of_turn_status, pre_move_gate, push_faint_if_down, try_apply_status, StatusKind};
use crate::battle::move_effects::{execute_move, MoveContext};
use crate::battle::rng::BattleRng;
use crate::battle::state::{
    BattleEvent, Battler, EventBus, EventKind, FieldState, Outcome, Side, SideState, TurnResult,
};
use crate::battle::stats::effective_speed;
use crate::battle::weather::{WeatherKind, WeatherState};
use crate::config::BattleConfig;
use crate::errors::BattleResult;
use crate::pokemon::PartyPokemon;
use schema::{Ability, HoldEffect, Move, PokemonType};
use serde::{Deserialize, Serialize};

/// Bonus added to the escape chance per earlier failed attempt.
const ESCAPE_ATTEMPT_BONUS: u32 = 30;

/// Spikes damage divisor by layer count.
const SPIKES_DIVISORS: [u16; 3] = [8, 6, 4];

/// Everything an engine owns except its RNG handle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleSnapshot {
    pub config: BattleConfig,
    pub field: FieldState,
    pub outcome: Option<Outcome>,
    pub escape_attempts: u32,
    pub turn_counter: u32,
}

impl BattleSnapshot {
    pub fn to_bytes(&self) -> BattleResult<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> BattleResult<Self> {
        Ok(postcard::from_bytes(bytes)?)
    }
}

/// Runs one single battle between the player's active battler and one opponent.
///
/// The engine owns both battlers, both side records and the weather. Every random
/// draw goes through the injected `BattleRng`, so a scripted RNG replays a turn exactly.
pub struct BattleEngine {
    config: BattleConfig,
    field: FieldState,
    outcome: Option<Outcome>,
    escape_attempts: u32,
    turn_counter: u32,
    ai: RandomMoveAI,
    rng: Box<dyn BattleRng>,
}

impl BattleEngine {
    pub fn new(
        config: BattleConfig,
        player: &PartyPokemon,
        enemy: &PartyPokemon,
        rng: Box<dyn BattleRng>,
    ) -> Self {
        let mut engine = Self {
            config,
            field: FieldState {
                player: Battler::from_party(player, Side::Player, 0),
                enemy: Battler::from_party(enemy, Side::Enemy, 0),
                player_side: SideState::default(),
                enemy_side: SideState::default(),
                weather: WeatherState::default(),
            },
            outcome: None,
            escape_attempts: 0,
            turn_counter: 0,
            ai: RandomMoveAI::new(),
            rng,
        };
        engine.summon_ability_weather(Side::Player);
        engine.summon_ability_weather(Side::Enemy);
        log::debug!(
            "battle started: {} vs {} ({:?})",
            engine.field.player.name(),
            engine.field.enemy.name(),
            engine.config.kind
        );
        engine
    }

    /// Rebuild an engine from a snapshot. The RNG is not part of the snapshot.
    pub fn restore(snapshot: BattleSnapshot, rng: Box<dyn BattleRng>) -> Self {
        Self {
            config: snapshot.config,
            field: snapshot.field,
            outcome: snapshot.outcome,
            escape_attempts: snapshot.escape_attempts,
            turn_counter: snapshot.turn_counter,
            ai: RandomMoveAI::new(),
            rng,
        }
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            config: self.config.clone(),
            field: self.field.clone(),
            outcome: self.outcome,
            escape_attempts: self.escape_attempts,
            turn_counter: self.turn_counter,
        }
    }

    pub fn set_rng(&mut self, rng: Box<dyn BattleRng>) {
        self.rng = rng;
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn player(&self) -> &Battler {
        &self.field.player
    }

    pub fn enemy(&self) -> &Battler {
        &self.field.enemy
    }

    pub fn player_mut(&mut self) -> &mut Battler {
        &mut self.field.player
    }

    pub fn enemy_mut(&mut self) -> &mut Battler {
        &mut self.field.enemy
    }

    pub fn field(&self) -> &FieldState {
        &self.field
    }

    pub fn side_state(&self, side: Side) -> &SideState {
        self.field.side_state(side)
    }

    pub fn side_state_mut(&mut self, side: Side) -> &mut SideState {
        self.field.side_state_mut(side)
    }

    pub fn weather(&self) -> WeatherState {
        self.field.weather
    }

    pub fn set_weather(&mut self, weather: WeatherState) {
        self.field.weather = weather;
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn escape_attempts(&self) -> u32 {
        self.escape_attempts
    }

    /// Turns fully resolved so far.
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    /// What the player's action would turn into, without touching any state.
    pub fn validate_player_action(&self, action: &BattleAction) -> ActionValidation {
        normalize_action(&self.field.player, action)
    }

    pub fn replace_player_pokemon(&mut self, pokemon: &PartyPokemon, party_index: usize) {
        self.field.player = Battler::from_party(pokemon, Side::Player, party_index);
        self.after_replacement(Side::Player);
    }

    pub fn replace_enemy_pokemon(&mut self, pokemon: &PartyPokemon, party_index: usize) {
        self.field.enemy = Battler::from_party(pokemon, Side::Enemy, party_index);
        self.after_replacement(Side::Enemy);
    }

    /// Spikes damage for a battler that just entered on `side`. Replacement itself
    /// never touches HP, so a caller that switches battlers in applies hazards here.
    pub fn apply_entry_hazards(&mut self, side: Side) -> Vec<BattleEvent> {
        let mut bus = EventBus::new();
        let layers = self.field.side_state(side).spikes.min(SideState::MAX_SPIKES);
        let battler = self.field.battler_mut(side);
        let grounded = !battler.has_type(PokemonType::Flying) && battler.ability != Ability::Levitate;

        if layers > 0 && grounded && !battler.is_fainted() {
            let divisor = SPIKES_DIVISORS[usize::from(layers) - 1];
            let applied = battler.take_damage((battler.max_hp / divisor).max(1));
            bus.push(
                BattleEvent::new(EventKind::Damage)
                    .on(side)
                    .value(applied)
                    .text(format!("{} is hurt by spikes!", battler.name())),
            );
            push_faint_if_down(battler, &mut bus);
            self.resolve_outcome();
        }
        bus.into_events()
    }

    /// Resolve one full turn for the player's chosen action.
    pub fn execute_turn(&mut self, player_action: BattleAction) -> TurnResult {
        if let Some(outcome) = self.outcome {
            return TurnResult {
                events: Vec::new(),
                outcome: Some(outcome),
                consumed_turn: false,
            };
        }

        log::debug!("turn {} begins: player chose {:?}", self.turn_counter + 1, player_action);
        let mut bus = EventBus::new();

        if player_action == BattleAction::Run {
            if self.config.is_trainer_battle() || self.config.first_battle {
                bus.message(Some(Side::Player), "No! There's no running from this battle!");
                return TurnResult {
                    events: bus.into_events(),
                    outcome: None,
                    consumed_turn: false,
                };
            }
            self.run_turn(&mut bus);
        } else {
            self.fight_turn(player_action, &mut bus);
        }

        self.finalize_turn();
        log::debug!(
            "turn {} ends with {} events, outcome {:?}",
            self.turn_counter,
            bus.len(),
            self.outcome
        );

        TurnResult {
            events: bus.into_events(),
            outcome: self.outcome,
            consumed_turn: true,
        }
    }

    // --- Turn phases ---

    fn fight_turn(&mut self, player_action: BattleAction, bus: &mut EventBus) {
        let enemy_choice = self.ai.decide_action(&self.field.enemy, &mut *self.rng);
        let player_action = normalize_action(&self.field.player, &player_action).action;
        let enemy_action = normalize_action(&self.field.enemy, &enemy_choice).action;

        let mut stack = ActionStack::build(
            player_action,
            enemy_action,
            &self.field,
            &self.config.rules,
            &mut *self.rng,
        );
        log::debug!("action order: {:?}", stack.sides());

        while let Some(queued) = stack.pop_front() {
            if self.outcome.is_some() {
                break;
            }
            self.execute_step(queued, bus);
        }

        if self.outcome.is_none() {
            self.apply_end_of_turn(bus);
            self.resolve_outcome();
        }
    }

    /// A run attempt. A failed escape still gives the opponent its move.
    fn run_turn(&mut self, bus: &mut EventBus) {
        self.handle_run_attempt(bus);

        if self.outcome.is_none() && !self.field.player.is_fainted() && !self.field.enemy.is_fainted() {
            let enemy_choice = self.ai.decide_action(&self.field.enemy, &mut *self.rng);
            let enemy_action = normalize_action(&self.field.enemy, &enemy_choice).action;
            let mut stack = ActionStack::single(Side::Enemy, enemy_action);
            while let Some(queued) = stack.pop_front() {
                self.execute_step(queued, bus);
            }
        }

        if self.outcome.is_none() {
            self.apply_end_of_turn(bus);
            self.resolve_outcome();
        }
    }

    fn handle_run_attempt(&mut self, bus: &mut EventBus) {
        let player = &self.field.player;
        if player.ability == Ability::RunAway || player.hold_effect() == HoldEffect::CanAlwaysRun {
            self.outcome = Some(Outcome::Flee);
            bus.message(Some(Side::Player), "Got away safely!");
            return;
        }

        let trapped = player.volatile.escape_blocked_by.is_some() || player.volatile.trap_turns > 0;
        let escaped = if trapped {
            false
        } else {
            let player_speed = u32::from(effective_speed(player, &self.field.weather, &self.config.rules));
            let enemy_speed = u32::from(effective_speed(&self.field.enemy, &self.field.weather, &self.config.rules));
            if player_speed >= enemy_speed {
                true
            } else {
                let chance = player_speed * 128 / enemy_speed.max(1) + ESCAPE_ATTEMPT_BONUS * self.escape_attempts;
                let roll = self.rng.random_int(0, 255, "Escape Roll");
                chance > roll as u32
            }
        };
        self.escape_attempts += 1;

        if escaped {
            self.outcome = Some(Outcome::Flee);
            bus.message(Some(Side::Player), "Got away safely!");
        } else {
            bus.message(Some(Side::Player), "Can't escape!");
        }
        log::debug!("escape attempt {} (escaped: {})", self.escape_attempts, escaped);
    }

    fn execute_step(&mut self, queued: QueuedAction, bus: &mut EventBus) {
        let side = queued.side;
        if self.field.battler(side).is_fainted() || self.field.battler(side.opponent()).is_fainted() {
            return;
        }

        match queued.action {
            BattleAction::Fight { move_id, .. } => {
                if !pre_move_gate(self.field.battler_mut(side), &mut *self.rng, bus) {
                    cancel_multi_turn_moves(self.field.battler_mut(side));
                    self.resolve_outcome();
                    return;
                }
                self.execute_fight(side, move_id, queued.action.pp_slot(), bus);
            }
            BattleAction::Item { item, .. } if side == Side::Player && item.is_ball() => {
                let caught = throw_ball(
                    item,
                    &self.field.enemy,
                    &self.config,
                    self.turn_counter,
                    &mut *self.rng,
                    bus,
                );
                if caught {
                    self.outcome = Some(Outcome::Capture);
                }
            }
            BattleAction::Switch { .. } | BattleAction::Item { .. } => {
                bus.message(Some(side), "But it failed!");
            }
            BattleAction::Run => self.handle_run_attempt(bus),
        }
        self.resolve_outcome();
    }

    fn execute_fight(&mut self, side: Side, move_: Move, slot: Option<usize>, bus: &mut EventBus) {
        let weather = self.field.weather;
        let encounter = self.config.kind;
        let (actor, actor_side, target, target_side, _) = self.field.split_mut(side);
        let ctx = MoveContext::new(
            actor,
            actor_side,
            target,
            target_side,
            weather,
            move_,
            slot,
            encounter,
            &mut *self.rng,
        );
        let result = execute_move(ctx);
        bus.extend(result.events);

        if let Some(weather) = result.weather {
            log::debug!("weather changed to {:?}", weather.kind);
            self.field.weather = weather;
        }
        if let Some(outcome) = result.ends_battle {
            self.outcome = Some(outcome);
        }
    }

    // --- End of turn ---

    fn apply_end_of_turn(&mut self, bus: &mut EventBus) {
        end_of_turn_status(&mut self.field.player, bus);
        end_of_turn_status(&mut self.field.enemy, bus);

        self.apply_leech_seed(Side::Player, bus);
        self.apply_leech_seed(Side::Enemy, bus);

        let FieldState {
            player,
            enemy,
            weather,
            ..
        } = &mut self.field;
        bus.extend(weather.tick([player, enemy]));

        tick_side_timers(&mut self.field.player_side, Side::Player, bus);
        tick_side_timers(&mut self.field.enemy_side, Side::Enemy, bus);

        for side in [Side::Player, Side::Enemy] {
            self.resolve_wish(side, bus);
        }
        for side in [Side::Player, Side::Enemy] {
            resolve_future_sight(self.field.battler_mut(side), bus);
        }
        for side in [Side::Player, Side::Enemy] {
            tick_perish_count(self.field.battler_mut(side), bus);
        }
        for side in [Side::Player, Side::Enemy] {
            self.resolve_yawn(side, bus);
        }
        for side in [Side::Player, Side::Enemy] {
            tick_move_locks(self.field.battler_mut(side), bus);
        }
    }

    /// The seeded battler loses 1/8 of its max HP; the other battler heals what was drained.
    fn apply_leech_seed(&mut self, seeded: Side, bus: &mut EventBus) {
        let (victim, _, other, _, _) = self.field.split_mut(seeded);
        if victim.is_fainted() || !victim.volatile.leech_seed || other.is_fainted() {
            return;
        }
        let drained = victim.take_damage((victim.max_hp / 8).max(1));
        other.heal(drained);
        bus.push(
            BattleEvent::new(EventKind::Drain)
                .on(seeded)
                .value(drained)
                .text(format!("{}'s health is sapped by Leech Seed!", victim.name())),
        );
        push_faint_if_down(victim, bus);
    }

    fn resolve_wish(&mut self, side: Side, bus: &mut EventBus) {
        let Some(mut wish) = self.field.side_state(side).wish else {
            return;
        };
        wish.turns = wish.turns.saturating_sub(1);
        if wish.turns > 0 {
            self.field.side_state_mut(side).wish = Some(wish);
            return;
        }
        self.field.side_state_mut(side).wish = None;

        let battler = self.field.battler_mut(side);
        if battler.is_fainted() {
            return;
        }
        let healed = battler.heal(wish.amount);
        bus.push(
            BattleEvent::new(EventKind::Heal)
                .on(side)
                .value(healed)
                .text(format!("{}'s wish came true!", battler.name())),
        );
    }

    fn resolve_yawn(&mut self, side: Side, bus: &mut EventBus) {
        let safeguarded = self.field.side_state(side).safeguard_turns > 0;
        let battler = self.field.battler_mut(side);
        if battler.volatile.yawn_turns == 0 {
            return;
        }
        battler.volatile.yawn_turns -= 1;
        if battler.volatile.yawn_turns > 0 || battler.is_fainted() || safeguarded {
            return;
        }
        if matches!(battler.ability, Ability::Insomnia | Ability::VitalSpirit) {
            return;
        }
        try_apply_status(battler, StatusKind::Sleep, &mut *self.rng, bus);
    }

    // --- Outcome and bookkeeping ---

    fn resolve_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let player_down = self.field.player.is_fainted();
        let enemy_down = self.field.enemy.is_fainted();
        self.outcome = match (player_down, enemy_down) {
            (true, true) => Some(Outcome::Draw),
            (false, true) => Some(Outcome::Win),
            (true, false) => Some(Outcome::Lose),
            (false, false) => None,
        };
        if let Some(outcome) = self.outcome {
            log::debug!("battle over: {:?}", outcome);
        }
    }

    /// Per-turn flags that never outlive the turn they were set in.
    fn finalize_turn(&mut self) {
        for battler in [&mut self.field.player, &mut self.field.enemy] {
            let volatile = &mut battler.volatile;
            volatile.flinch = false;
            if !volatile.protect && !volatile.endure {
                volatile.protect_success_count = 0;
            }
            volatile.protect = false;
            volatile.endure = false;
            volatile.took_damage_this_turn = false;
        }
        self.turn_counter += 1;
    }

    fn after_replacement(&mut self, side: Side) {
        self.outcome = None;

        let opponent = &mut self.field.battler_mut(side.opponent()).volatile;
        if opponent.attracted_to == Some(side) {
            opponent.attracted_to = None;
        }
        if opponent.trapped_by == Some(side) {
            opponent.trapped_by = None;
            opponent.trap_turns = 0;
        }
        if opponent.escape_blocked_by == Some(side) {
            opponent.escape_blocked_by = None;
        }
        if opponent.lock_on_target == Some(side) {
            opponent.lock_on_target = None;
            opponent.lock_on_turns = 0;
        }

        self.summon_ability_weather(side);
        log::debug!("{:?} sent out {}", side, self.field.battler(side).name());
    }

    fn summon_ability_weather(&mut self, side: Side) {
        if let Some(kind) = WeatherKind::from_ability(self.field.battler(side).ability) {
            self.field.weather = WeatherState::permanent(kind);
        }
    }
}

/// A blocked turn breaks any multi-turn move that was in progress.
fn cancel_multi_turn_moves(battler: &mut Battler) {
    let volatile = &mut battler.volatile;
    volatile.charging_move = None;
    volatile.semi_invulnerable_move = None;
    volatile.bide_turns = 0;
    volatile.bide_damage = 0;
    volatile.rampage_turns = 0;
    volatile.rampage_move = None;
    volatile.rollout_count = 0;
    volatile.uproar_turns = 0;
}

fn tick_side_timers(state: &mut SideState, side: Side, bus: &mut EventBus) {
    let team = match side {
        Side::Player => "Your team's",
        Side::Enemy => "Foe's",
    };
    let timers = [
        (&mut state.reflect_turns, "Reflect"),
        (&mut state.light_screen_turns, "Light Screen"),
        (&mut state.safeguard_turns, "Safeguard"),
        (&mut state.mist_turns, "Mist"),
    ];
    for (turns, name) in timers {
        if *turns == 0 {
            continue;
        }
        *turns -= 1;
        if *turns == 0 {
            bus.message(Some(side), format!("{} {} wore off!", team, name));
        }
    }
}

fn resolve_future_sight(battler: &mut Battler, bus: &mut EventBus) {
    let Some(mut pending) = battler.volatile.future_sight else {
        return;
    };
    pending.turns = pending.turns.saturating_sub(1);
    if pending.turns > 0 {
        battler.volatile.future_sight = Some(pending);
        return;
    }
    battler.volatile.future_sight = None;
    if battler.is_fainted() {
        return;
    }

    let applied = battler.take_damage(pending.damage);
    battler.volatile.took_damage_this_turn = true;
    battler.volatile.last_damage_taken = applied;
    battler.volatile.last_damaged_by = Some(pending.from);
    bus.push(
        BattleEvent::new(EventKind::Damage)
            .on(battler.side)
            .value(applied)
            .text(format!(
                "{} took the {} attack!",
                battler.name(),
                pending.move_.data().name
            )),
    );
    push_faint_if_down(battler, bus);
}

fn tick_perish_count(battler: &mut Battler, bus: &mut EventBus) {
    let Some(count) = battler.volatile.perish_count else {
        return;
    };
    if battler.is_fainted() {
        return;
    }
    let count = count.saturating_sub(1);
    bus.message(
        Some(battler.side),
        format!("{}'s perish count fell to {}.", battler.name(), count),
    );
    if count > 0 {
        battler.volatile.perish_count = Some(count);
        return;
    }
    battler.volatile.perish_count = None;
    let remaining = battler.current_hp;
    battler.take_damage(remaining);
    push_faint_if_down(battler, bus);
}

/// Countdowns for disable, encore, taunt, lock-on and charge.
fn tick_move_locks(battler: &mut Battler, bus: &mut EventBus) {
    let name = battler.name();

    if battler.volatile.disable_turns > 0 {
        battler.volatile.disable_turns -= 1;
        if battler.volatile.disable_turns == 0 {
            if let Some(disabled) = battler.volatile.disabled_move.take() {
                bus.message(
                    Some(battler.side),
                    format!("{}'s {} is disabled no more!", name, disabled.data().name),
                );
            }
        }
    }

    if battler.volatile.encore_turns > 0 {
        let out_of_pp = battler
            .volatile
            .encored_move
            .and_then(|encored| battler.slot_of(encored))
            .and_then(|slot| battler.move_slot(slot))
            .map_or(true, |instance| instance.pp == 0);
        battler.volatile.encore_turns = if out_of_pp {
            0
        } else {
            battler.volatile.encore_turns - 1
        };
        if battler.volatile.encore_turns == 0 {
            battler.volatile.encored_move = None;
            bus.message(Some(battler.side), format!("{}'s encore ended!", name));
        }
    }

    let volatile = &mut battler.volatile;
    volatile.taunt_turns = volatile.taunt_turns.saturating_sub(1);
    volatile.charge_turns = volatile.charge_turns.saturating_sub(1);
    if volatile.lock_on_turns > 0 {
        volatile.lock_on_turns -= 1;
        if volatile.lock_on_turns == 0 {
            volatile.lock_on_target = None;
        }
    }
}
