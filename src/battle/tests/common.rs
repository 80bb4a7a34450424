use crate::battle::engine::BattleEngine;
use crate::battle::move_effects::{execute_move, MoveContext, MoveResult};
use crate::battle::rng::ScriptedRng;
use crate::battle::state::{BattleEvent, Battler, EventKind, Side, SideState, TurnResult};
use crate::battle::weather::WeatherState;
use crate::config::{BattleConfig, EncounterKind};
use crate::pokemon::{PartyPokemon, PrimaryStatus};
use schema::{Item, Move, Species};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Route engine logs to the test harness. Safe to call from every test.
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_core::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// A builder for creating test party members with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new(Species::Pikachu, 25)
///     .with_moves(vec![Move::Tackle])
///     .with_status(PrimaryStatus::Paralysis)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    species: Species,
    level: u8,
    moves: Option<Vec<Move>>,
    status: Option<PrimaryStatus>,
    current_hp: Option<u16>,
    held_item: Option<Item>,
    ability_slot: u8,
}

impl TestPokemonBuilder {
    pub fn new(species: Species, level: u8) -> Self {
        Self {
            species,
            level,
            moves: None,
            status: None,
            current_hp: None,
            held_item: None,
            ability_slot: 0,
        }
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn with_status(mut self, status: PrimaryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.held_item = Some(item);
        self
    }

    pub fn with_ability_slot(mut self, slot: u8) -> Self {
        self.ability_slot = slot;
        self
    }

    pub fn build(self) -> PartyPokemon {
        let moves = self.moves.unwrap_or_else(|| vec![Move::Tackle]);
        let mut pokemon = match PartyPokemon::new(self.species, self.level, &moves) {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to build {:?}: {}", self.species, err),
        };

        pokemon.ability_slot = self.ability_slot;
        pokemon.held_item = self.held_item;
        if let Some(status) = self.status {
            pokemon.status = status;
        }
        if let Some(hp) = self.current_hp {
            if let Err(err) = pokemon.set_hp(hp) {
                panic!("Invalid test HP for {:?}: {}", self.species, err);
            }
        }
        pokemon
    }
}

/// A battler on the field, outside any engine.
pub fn create_battler(species: Species, level: u8, moves: Vec<Move>, side: Side) -> Battler {
    let pokemon = TestPokemonBuilder::new(species, level).with_moves(moves).build();
    Battler::from_party(&pokemon, side, 0)
}

/// Resolve one move from slot 0 with empty side state and clear skies.
pub fn use_move(attacker: &mut Battler, defender: &mut Battler, move_: Move, rng: &mut ScriptedRng) -> MoveResult {
    init_logger();
    let mut attacker_side = SideState::default();
    let mut defender_side = SideState::default();
    execute_move(MoveContext::new(
        attacker,
        &mut attacker_side,
        defender,
        &mut defender_side,
        WeatherState::default(),
        move_,
        Some(0),
        EncounterKind::Wild,
        rng,
    ))
}

pub fn move_messages(result: &MoveResult) -> Vec<&str> {
    result
        .events
        .iter()
        .filter_map(|e| e.message.as_deref())
        .collect()
}

/// A wild encounter driven by a fixed script of unit draws.
pub fn create_test_engine(player: PartyPokemon, enemy: PartyPokemon, rng: ScriptedRng) -> BattleEngine {
    init_logger();
    BattleEngine::new(BattleConfig::wild(), &player, &enemy, Box::new(rng))
}

/// A trainer encounter driven by a fixed script of unit draws.
pub fn create_trainer_engine(player: PartyPokemon, enemy: PartyPokemon, rng: ScriptedRng) -> BattleEngine {
    init_logger();
    BattleEngine::new(BattleConfig::trainer(1), &player, &enemy, Box::new(rng))
}

/// Every draw lands mid-range: moves hit, crits don't, and the random factor is 93.
pub fn predictable_rng() -> ScriptedRng {
    ScriptedRng::repeating(vec![0.5])
}

pub fn events_of(result: &TurnResult, kind: EventKind, side: Side) -> Vec<&BattleEvent> {
    result
        .events
        .iter()
        .filter(|e| e.kind == kind && e.battler == Some(side))
        .collect()
}

pub fn count_messages(result: &TurnResult, text: &str) -> usize {
    result.messages().iter().filter(|m| **m == text).count()
}

/// Debug dump for a turn, in the same shape as `EventBus::print_debug_with_message`.
pub fn print_turn(result: &TurnResult, header: &str) {
    println!("{}", header);
    for event in &result.events {
        println!("  {:?}", event);
    }
}
