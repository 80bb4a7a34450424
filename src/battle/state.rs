use crate::battle::weather::WeatherState;
use crate::pokemon::{MoveInstance, PartyPokemon, PrimaryStatus};
use schema::{Ability, HoldEffect, Item, Move, PokemonType, Species};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the field a battler, side record or event belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Enemy => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatStage {
    Attack,
    Defense,
    Speed,
    SpAttack,
    SpDefense,
    Accuracy,
    Evasion,
}

impl StatStage {
    /// The five stats a stat-boosting combo hit raises.
    pub const BATTLE_STATS: [StatStage; 5] = [
        StatStage::Attack,
        StatStage::Defense,
        StatStage::Speed,
        StatStage::SpAttack,
        StatStage::SpDefense,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatStage::Attack => "ATTACK",
            StatStage::Defense => "DEFENSE",
            StatStage::Speed => "SPEED",
            StatStage::SpAttack => "SP. ATK",
            StatStage::SpDefense => "SP. DEF",
            StatStage::Accuracy => "accuracy",
            StatStage::Evasion => "evasiveness",
        }
    }
}

/// Seven stat stages, each kept within -6..=6.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub speed: i8,
    pub sp_attack: i8,
    pub sp_defense: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    pub const MIN: i8 = -6;
    pub const MAX: i8 = 6;

    pub fn get(&self, stat: StatStage) -> i8 {
        match stat {
            StatStage::Attack => self.attack,
            StatStage::Defense => self.defense,
            StatStage::Speed => self.speed,
            StatStage::SpAttack => self.sp_attack,
            StatStage::SpDefense => self.sp_defense,
            StatStage::Accuracy => self.accuracy,
            StatStage::Evasion => self.evasion,
        }
    }

    pub fn set(&mut self, stat: StatStage, value: i8) {
        let value = value.clamp(Self::MIN, Self::MAX);
        match stat {
            StatStage::Attack => self.attack = value,
            StatStage::Defense => self.defense = value,
            StatStage::Speed => self.speed = value,
            StatStage::SpAttack => self.sp_attack = value,
            StatStage::SpDefense => self.sp_defense = value,
            StatStage::Accuracy => self.accuracy = value,
            StatStage::Evasion => self.evasion = value,
        }
    }
}

/// A Future Sight strike waiting to land on the battler that carries it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureSight {
    pub turns: u8,
    pub damage: u16,
    pub move_: Move,
    pub from: Side,
}

/// Battle-only conditions. Reset wholesale when the battler leaves the field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VolatileStatus {
    pub confusion_turns: u8,
    pub flinch: bool,
    pub leech_seed: bool,
    pub trap_turns: u8,
    pub trapped_by: Option<Side>,
    pub nightmare: bool,
    pub curse: bool,
    pub focus_energy: bool,

    // Protect / Endure
    pub protect: bool,
    pub endure: bool,
    pub protect_success_count: u8,

    pub attracted_to: Option<Side>,

    // Move restrictions
    pub encore_turns: u8,
    pub encored_move: Option<Move>,
    pub disable_turns: u8,
    pub disabled_move: Option<Move>,
    pub taunt_turns: u8,
    pub torment: bool,
    pub choice_locked_move: Option<Move>,
    pub last_move_used: Option<Move>,

    // Multi-turn moves
    pub charging_move: Option<Move>,
    pub semi_invulnerable_move: Option<Move>,
    pub recharging: bool,
    pub bide_turns: u8,
    pub bide_damage: u32,
    pub rampage_turns: u8,
    pub rampage_move: Option<Move>,
    pub rollout_count: u8,
    pub fury_cutter_count: u8,
    pub uproar_turns: u8,
    pub stockpile: u8,
    pub charge_turns: u8,

    // Targeting marks
    pub lock_on_turns: u8,
    pub lock_on_target: Option<Side>,
    pub escape_blocked_by: Option<Side>,
    pub foresight: bool,
    pub minimized: bool,

    // Delayed effects
    pub perish_count: Option<u8>,
    pub yawn_turns: u8,
    pub future_sight: Option<FutureSight>,

    // Damage bookkeeping for Revenge / Focus Punch / Bide
    pub took_damage_this_turn: bool,
    pub last_damage_taken: u16,
    pub last_damaged_by: Option<Side>,
}

impl VolatileStatus {
    /// A move the battler is committed to this turn, regardless of what was selected.
    pub fn forced_move(&self) -> Option<Move> {
        if let Some(move_) = self.charging_move.or(self.semi_invulnerable_move) {
            return Some(move_);
        }
        if self.bide_turns > 0 {
            return Some(Move::Bide);
        }
        if self.rampage_turns > 0 {
            return self.rampage_move;
        }
        if self.uproar_turns > 0 {
            return Some(Move::Uproar);
        }
        if self.rollout_count > 0 {
            return self.last_move_used;
        }
        None
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wish {
    pub turns: u8,
    pub amount: u16,
}

/// Team-wide conditions. Turn counters read zero when inactive.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SideState {
    pub reflect_turns: u8,
    pub light_screen_turns: u8,
    pub safeguard_turns: u8,
    pub mist_turns: u8,
    pub spikes: u8,
    pub wish: Option<Wish>,
}

impl SideState {
    pub const MAX_SPIKES: u8 = 3;
}

/// One side's active combatant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Battler {
    pub pokemon: PartyPokemon,
    pub current_hp: u16,
    pub max_hp: u16,
    pub stages: StatStages,
    pub volatile: VolatileStatus,
    pub ability: Ability,
    pub side: Side,
    pub party_index: usize,
}

impl Battler {
    /// Wrap a party member for battle. Stages and volatile state start fresh;
    /// a toxic counter restarts because it only builds while on the field.
    pub fn from_party(pokemon: &PartyPokemon, side: Side, party_index: usize) -> Self {
        let mut pokemon = pokemon.clone();
        if let PrimaryStatus::Toxic(_) = pokemon.status {
            pokemon.status = PrimaryStatus::Toxic(0);
        }
        let max_hp = pokemon.max_hp();
        let current_hp = pokemon.current_hp.min(max_hp);
        Self {
            ability: pokemon.ability(),
            current_hp,
            max_hp,
            stages: StatStages::default(),
            volatile: VolatileStatus::default(),
            side,
            party_index,
            pokemon,
        }
    }

    /// The party member with this battle's HP, status and PP written back.
    pub fn to_party(&self) -> PartyPokemon {
        let mut pokemon = self.pokemon.clone();
        pokemon.current_hp = self.current_hp;
        pokemon
    }

    pub fn name(&self) -> String {
        self.pokemon.name()
    }

    pub fn species(&self) -> Species {
        self.pokemon.species
    }

    pub fn level(&self) -> u8 {
        self.pokemon.level
    }

    pub fn types(&self) -> [PokemonType; 2] {
        self.pokemon.types()
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types().contains(&pokemon_type)
    }

    pub fn status(&self) -> PrimaryStatus {
        self.pokemon.status
    }

    pub fn set_status(&mut self, status: PrimaryStatus) {
        self.pokemon.status = status;
    }

    pub fn held_item(&self) -> Option<Item> {
        self.pokemon.held_item
    }

    pub fn hold_effect(&self) -> HoldEffect {
        self.pokemon
            .held_item
            .map_or(HoldEffect::None, |item| item.hold_effect())
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn missing_hp(&self) -> u16 {
        self.max_hp - self.current_hp
    }

    /// Unmodified stat for a stage slot. Accuracy and evasion have no base stat.
    pub fn raw_stat(&self, stat: StatStage) -> u16 {
        let stats = &self.pokemon.stats;
        match stat {
            StatStage::Attack => stats.attack,
            StatStage::Defense => stats.defense,
            StatStage::Speed => stats.speed,
            StatStage::SpAttack => stats.sp_attack,
            StatStage::SpDefense => stats.sp_defense,
            StatStage::Accuracy | StatStage::Evasion => 0,
        }
    }

    /// Lower HP, never below zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let applied = amount.min(self.current_hp);
        self.current_hp -= applied;
        applied
    }

    /// Raise HP, never above max. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let applied = amount.min(self.missing_hp());
        self.current_hp += applied;
        applied
    }

    pub fn move_slot(&self, slot: usize) -> Option<&MoveInstance> {
        self.pokemon.moves.get(slot).and_then(|m| m.as_ref())
    }

    pub fn slot_of(&self, move_: Move) -> Option<usize> {
        self.pokemon
            .moves
            .iter()
            .position(|m| m.as_ref().is_some_and(|m| m.move_ == move_))
    }
}

/// What kind of thing a `BattleEvent` reports.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Message,
    MoveUsed,
    Damage,
    Heal,
    Faint,
    StatChange,
    StatusApplied,
    StatusCured,
    WeatherChange,
    WeatherDamage,
    Miss,
    Critical,
    /// Value is the combined multiplier in hundredths (200 = 2x).
    Effectiveness,
    Recoil,
    Drain,
    CaptureAttempt,
    CaptureShake,
    CaptureSuccess,
    CaptureFail,
    BattleEnd,
}

/// One entry in the turn log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BattleEvent {
    pub kind: EventKind,
    pub battler: Option<Side>,
    pub value: Option<i32>,
    pub message: Option<String>,
}

impl BattleEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            battler: None,
            value: None,
            message: None,
        }
    }

    pub fn message(battler: Option<Side>, text: impl Into<String>) -> Self {
        Self::new(EventKind::Message).on_opt(battler).text(text)
    }

    pub fn on(mut self, side: Side) -> Self {
        self.battler = Some(side);
        self
    }

    pub fn on_opt(mut self, side: Option<Side>) -> Self {
        self.battler = side;
        self
    }

    pub fn value(mut self, value: impl Into<i32>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "{:?} {:?} {:?}", self.kind, self.battler, self.value),
        }
    }
}

/// Ordered, append-only event log for one operation.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    /// Shorthand for a plain message event.
    pub fn message(&mut self, battler: Option<Side>, text: impl Into<String>) {
        self.push(BattleEvent::message(battler, text));
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = BattleEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Every human-readable line, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect()
    }

    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Terminal result of an encounter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
    Flee,
    Capture,
}

/// What one call to `execute_turn` produced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub events: Vec<BattleEvent>,
    pub outcome: Option<Outcome>,
    /// False when the turn was refused outright (battle over, or running from a trainer).
    pub consumed_turn: bool,
}

impl TurnResult {
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect()
    }

    pub fn has_event(&self, kind: EventKind, battler: Option<Side>) -> bool {
        self.events
            .iter()
            .any(|e| e.kind == kind && (battler.is_none() || e.battler == battler))
    }
}

/// Everything an engine owns except its RNG.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldState {
    pub player: Battler,
    pub enemy: Battler,
    pub player_side: SideState,
    pub enemy_side: SideState,
    pub weather: WeatherState,
}

impl FieldState {
    pub fn battler(&self, side: Side) -> &Battler {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn battler_mut(&mut self, side: Side) -> &mut Battler {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn side_state(&self, side: Side) -> &SideState {
        match side {
            Side::Player => &self.player_side,
            Side::Enemy => &self.enemy_side,
        }
    }

    pub fn side_state_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Player => &mut self.player_side,
            Side::Enemy => &mut self.enemy_side,
        }
    }

    /// Split borrow: (actor, actor's side, opponent, opponent's side, weather).
    pub fn split_mut(
        &mut self,
        actor: Side,
    ) -> (
        &mut Battler,
        &mut SideState,
        &mut Battler,
        &mut SideState,
        &mut WeatherState,
    ) {
        let FieldState {
            player,
            enemy,
            player_side,
            enemy_side,
            weather,
        } = self;
        match actor {
            Side::Player => (player, player_side, enemy, enemy_side, weather),
            Side::Enemy => (enemy, enemy_side, player, player_side, weather),
        }
    }
}
