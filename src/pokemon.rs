use crate::errors::PartyError;
use schema::{Ability, Item, Move, PokemonType, Species};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary status. At most one can be active, and it survives switching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryStatus {
    #[default]
    None,
    /// Turns left before waking.
    Sleep(u8),
    Poison,
    /// Escalating counter, 0..=15. Each tick raises it before dealing damage.
    Toxic(u8),
    Burn,
    Freeze,
    Paralysis,
}

impl PrimaryStatus {
    pub fn is_none(self) -> bool {
        self == PrimaryStatus::None
    }

    pub fn is_asleep(self) -> bool {
        matches!(self, PrimaryStatus::Sleep(_))
    }

    /// The toxic counter, or 0 whenever toxic is not the active status.
    pub fn toxic_counter(self) -> u8 {
        match self {
            PrimaryStatus::Toxic(counter) => counter,
            _ => 0,
        }
    }

    /// Lowercase name used in cure messages.
    pub fn name(self) -> &'static str {
        match self {
            PrimaryStatus::None => "none",
            PrimaryStatus::Sleep(_) => "sleep",
            PrimaryStatus::Poison => "poison",
            PrimaryStatus::Toxic(_) => "bad poison",
            PrimaryStatus::Burn => "burn",
            PrimaryStatus::Freeze => "freeze",
            PrimaryStatus::Paralysis => "paralysis",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    fn default_for(species: Species) -> Self {
        match species.data().gender_ratio {
            255 => Gender::Genderless,
            254 => Gender::Female,
            _ => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInstance {
    pub move_: Move,
    pub pp: u8,
}

impl MoveInstance {
    /// Create a new move instance with max PP
    pub fn new(move_: Move) -> Self {
        MoveInstance {
            move_,
            pp: move_.data().pp,
        }
    }

    pub fn max_pp(&self) -> u8 {
        self.move_.data().pp
    }
}

/// Calculated stats, in the order the cartridge stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

/// A party member as the surrounding game hands it to the battle core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyPokemon {
    pub species: Species,
    pub nickname: Option<String>,
    pub level: u8,
    pub gender: Gender,
    pub ability_slot: u8,
    pub ivs: [u8; 6], // HP, ATK, DEF, SPD, SP.ATK, SP.DEF
    pub evs: [u8; 6],
    pub stats: PartyStats,
    pub current_hp: u16,
    pub moves: [Option<MoveInstance>; 4],
    pub status: PrimaryStatus,
    pub held_item: Option<Item>,
}

impl PartyPokemon {
    /// Build a party member at full HP with zero IVs and EVs.
    pub fn new(species: Species, level: u8, moves: &[Move]) -> Result<Self, PartyError> {
        Self::with_ivs(species, level, [0; 6], moves)
    }

    pub fn with_ivs(
        species: Species,
        level: u8,
        ivs: [u8; 6],
        moves: &[Move],
    ) -> Result<Self, PartyError> {
        if level == 0 || level > 100 {
            return Err(PartyError::InvalidLevel(level));
        }
        if moves.is_empty() {
            return Err(PartyError::NoMoves(species));
        }
        if moves.len() > 4 {
            return Err(PartyError::TooManyMoves {
                species,
                count: moves.len(),
            });
        }

        let evs = [0; 6];
        let stats = Self::calculate_stats(species, level, &ivs, &evs);
        let mut move_array = [const { None }; 4];
        for (slot, move_) in moves.iter().enumerate() {
            move_array[slot] = Some(MoveInstance::new(*move_));
        }

        Ok(PartyPokemon {
            species,
            nickname: None,
            level,
            gender: Gender::default_for(species),
            ability_slot: 0,
            ivs,
            evs,
            stats,
            current_hp: stats.hp,
            moves: move_array,
            status: PrimaryStatus::None,
            held_item: None,
        })
    }

    /// Gen-3 stat formula with a neutral nature.
    fn calculate_stats(species: Species, level: u8, ivs: &[u8; 6], evs: &[u8; 6]) -> PartyStats {
        let base = species.data().base_stats;
        let level = u32::from(level);
        let core = |index: usize, base: u8| {
            (2 * u32::from(base) + u32::from(ivs[index]) + u32::from(evs[index]) / 4) * level / 100
        };
        let other = |index: usize, base: u8| (core(index, base) + 5) as u16;

        PartyStats {
            hp: (core(0, base.hp) + level + 10) as u16,
            attack: other(1, base.attack),
            defense: other(2, base.defense),
            speed: other(3, base.speed),
            sp_attack: other(4, base.sp_attack),
            sp_defense: other(5, base.sp_defense),
        }
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn set_hp(&mut self, hp: u16) -> Result<(), PartyError> {
        if hp > self.stats.hp {
            return Err(PartyError::HpAboveMax {
                species: self.species,
                hp,
                max_hp: self.stats.hp,
            });
        }
        self.current_hp = hp;
        Ok(())
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Nickname if one was given, otherwise the species name.
    pub fn name(&self) -> String {
        self.nickname
            .clone()
            .unwrap_or_else(|| self.species.name().to_string())
    }

    pub fn ability(&self) -> Ability {
        self.species.ability(self.ability_slot)
    }

    pub fn types(&self) -> [PokemonType; 2] {
        self.species.data().types
    }
}

impl fmt::Display for PartyPokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Lv{} ({}/{})", self.name(), self.level, self.current_hp, self.max_hp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_follow_gen3_formula() {
        let pokemon = PartyPokemon::with_ivs(Species::Treecko, 50, [31; 6], &[Move::Pound])
            .expect("valid party member");
        // HP: (80 + 31) * 50 / 100 + 50 + 10 = 115
        assert_eq!(pokemon.stats.hp, 115);
        // Speed: (140 + 31) * 50 / 100 + 5 = 90
        assert_eq!(pokemon.stats.speed, 90);
        assert_eq!(pokemon.current_hp, 115);
    }

    #[test]
    fn test_invalid_party_members_are_rejected() {
        assert_eq!(
            PartyPokemon::new(Species::Treecko, 0, &[Move::Pound]),
            Err(PartyError::InvalidLevel(0))
        );
        assert_eq!(
            PartyPokemon::new(Species::Treecko, 5, &[]),
            Err(PartyError::NoMoves(Species::Treecko))
        );

        let mut pokemon = PartyPokemon::new(Species::Treecko, 5, &[Move::Pound]).expect("valid");
        let max_hp = pokemon.max_hp();
        assert!(pokemon.set_hp(max_hp + 1).is_err());
        assert!(pokemon.set_hp(0).is_ok());
        assert!(pokemon.is_fainted());
    }

    #[test]
    fn test_toxic_counter_reads_zero_when_not_toxic() {
        assert_eq!(PrimaryStatus::Toxic(3).toxic_counter(), 3);
        assert_eq!(PrimaryStatus::Poison.toxic_counter(), 0);
        assert_eq!(PrimaryStatus::Toxic(3).name(), "bad poison");
    }
}
