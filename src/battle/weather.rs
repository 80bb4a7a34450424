use crate::battle::state::{BattleEvent, Battler, EventKind};
use schema::{Ability, PokemonType};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    #[default]
    None,
    Rain,
    Sun,
    Sandstorm,
    Hail,
}

impl WeatherKind {
    pub fn start_message(self) -> Option<&'static str> {
        match self {
            WeatherKind::None => None,
            WeatherKind::Rain => Some("It started to rain!"),
            WeatherKind::Sun => Some("The sunlight turned harsh!"),
            WeatherKind::Sandstorm => Some("A sandstorm brewed!"),
            WeatherKind::Hail => Some("It started to hail!"),
        }
    }

    pub fn end_message(self) -> Option<&'static str> {
        match self {
            WeatherKind::None => None,
            WeatherKind::Rain => Some("The rain stopped."),
            WeatherKind::Sun => Some("The sunlight faded."),
            WeatherKind::Sandstorm => Some("The sandstorm subsided."),
            WeatherKind::Hail => Some("The hail stopped."),
        }
    }

    /// Weather a battler's ability summons on entry.
    pub fn from_ability(ability: Ability) -> Option<WeatherKind> {
        match ability {
            Ability::Drizzle => Some(WeatherKind::Rain),
            Ability::Drought => Some(WeatherKind::Sun),
            Ability::SandStream => Some(WeatherKind::Sandstorm),
            _ => None,
        }
    }

    fn chip_name(self) -> Option<&'static str> {
        match self {
            WeatherKind::Sandstorm => Some("sandstorm"),
            WeatherKind::Hail => Some("hail"),
            _ => None,
        }
    }

    fn is_immune(self, battler: &Battler) -> bool {
        match self {
            WeatherKind::Sandstorm => {
                battler.has_type(PokemonType::Rock)
                    || battler.has_type(PokemonType::Ground)
                    || battler.has_type(PokemonType::Steel)
            }
            WeatherKind::Hail => battler.has_type(PokemonType::Ice),
            _ => true,
        }
    }
}

/// Current weather. `permanent` weather came from an ability and ignores `turns`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeatherState {
    pub kind: WeatherKind,
    pub turns: u8,
    pub permanent: bool,
}

impl WeatherState {
    pub const MOVE_DURATION: u8 = 5;

    /// Weather set by a move: a fixed countdown.
    pub fn from_move(kind: WeatherKind) -> Self {
        Self::with_turns(kind, Self::MOVE_DURATION)
    }

    /// Ability weather never counts down.
    pub fn permanent(kind: WeatherKind) -> Self {
        Self::with_turns(kind, 0)
    }

    /// Zero turns means permanent.
    pub fn with_turns(kind: WeatherKind, turns: u8) -> Self {
        Self {
            kind,
            turns,
            permanent: turns == 0 && kind != WeatherKind::None,
        }
    }

    pub fn is(&self, kind: WeatherKind) -> bool {
        self.kind == kind
    }

    /// Accuracy override for Thunder-style moves, if the weather sets one.
    pub fn thunder_accuracy(&self) -> Option<u16> {
        match self.kind {
            WeatherKind::Rain => Some(100),
            WeatherKind::Sun => Some(50),
            _ => None,
        }
    }

    /// End-of-turn processing: chip damage first, then the countdown.
    pub fn tick(&mut self, battlers: [&mut Battler; 2]) -> Vec<BattleEvent> {
        let mut events = Vec::new();

        if let Some(chip_name) = self.kind.chip_name() {
            for battler in battlers {
                if battler.is_fainted() || self.kind.is_immune(battler) {
                    continue;
                }
                let damage = (battler.max_hp / 16).max(1);
                let applied = battler.take_damage(damage);
                events.push(
                    BattleEvent::new(EventKind::WeatherDamage)
                        .on(battler.side)
                        .value(applied)
                        .text(format!("{} is buffeted by the {}!", battler.name(), chip_name)),
                );
                if battler.is_fainted() {
                    events.push(
                        BattleEvent::new(EventKind::Faint)
                            .on(battler.side)
                            .text(format!("{} fainted!", battler.name())),
                    );
                }
            }
        }

        if self.kind != WeatherKind::None && !self.permanent {
            self.turns = self.turns.saturating_sub(1);
            if self.turns == 0 {
                let ended = self.kind;
                *self = WeatherState::default();
                if let Some(message) = ended.end_message() {
                    events.push(BattleEvent::new(EventKind::WeatherChange).text(message));
                }
                log::debug!("weather {:?} expired", ended);
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::state::Side;
    use crate::pokemon::PartyPokemon;
    use pretty_assertions::assert_eq;
    use schema::{Move, Species};

    fn battler(species: Species, side: Side) -> Battler {
        let pokemon = PartyPokemon::new(species, 50, &[Move::Tackle]).expect("valid");
        Battler::from_party(&pokemon, side, 0)
    }

    #[test]
    fn test_sandstorm_spares_rock_types_and_counts_down() {
        let mut weather = WeatherState::from_move(WeatherKind::Sandstorm);
        let mut zigzagoon = battler(Species::Zigzagoon, Side::Player);
        let mut geodude = battler(Species::Geodude, Side::Enemy);
        let max = zigzagoon.max_hp;

        let events = weather.tick([&mut zigzagoon, &mut geodude]);

        assert_eq!(zigzagoon.current_hp, max - (max / 16).max(1));
        assert_eq!(geodude.current_hp, geodude.max_hp);
        assert_eq!(events.len(), 1);
        assert_eq!(weather.turns, 4);
    }

    #[test]
    fn test_move_weather_expires_after_five_ticks() {
        let mut weather = WeatherState::from_move(WeatherKind::Rain);
        let mut a = battler(Species::Mudkip, Side::Player);
        let mut b = battler(Species::Lotad, Side::Enemy);
        let mut last = Vec::new();
        for _ in 0..5 {
            last = weather.tick([&mut a, &mut b]);
        }
        assert_eq!(weather.kind, WeatherKind::None);
        assert_eq!(last[0].message.as_deref(), Some("The rain stopped."));
    }

    #[test]
    fn test_permanent_weather_never_expires() {
        let mut weather = WeatherState::permanent(WeatherKind::Hail);
        let mut a = battler(Species::Snorunt, Side::Player);
        let mut b = battler(Species::Snorunt, Side::Enemy);
        for _ in 0..20 {
            weather.tick([&mut a, &mut b]);
        }
        assert!(weather.is(WeatherKind::Hail));
        assert!(weather.permanent);
    }

    #[test]
    fn test_thunder_accuracy_override() {
        assert_eq!(WeatherState::from_move(WeatherKind::Rain).thunder_accuracy(), Some(100));
        assert_eq!(WeatherState::from_move(WeatherKind::Sun).thunder_accuracy(), Some(50));
        assert_eq!(WeatherState::default().thunder_accuracy(), None);
    }
}
