use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, FromRepr};

/// Elemental types in their cartridge order. `Mystery` is the typeless `???` slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter, FromRepr,
)]
#[repr(u8)]
pub enum PokemonType {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Mystery = 9,
    Fire = 10,
    Water = 11,
    Grass = 12,
    Electric = 13,
    Psychic = 14,
    Ice = 15,
    Dragon = 16,
    Dark = 17,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokemonType::Mystery => write!(f, "???"),
            other => write!(f, "{}", format!("{:?}", other).to_uppercase()),
        }
    }
}

impl PokemonType {
    /// Moves of these types use Attack/Defense; every other type uses the special pair.
    pub fn is_physical(self) -> bool {
        use PokemonType::*;
        matches!(
            self,
            Normal | Fighting | Flying | Poison | Ground | Rock | Bug | Ghost | Steel
        )
    }

    /// Effectiveness of one attacking type against one defending type, in tenths:
    /// 20 = super effective, 10 = neutral, 5 = not very effective, 0 = no effect.
    pub fn effectiveness_tenths(attacking: PokemonType, defending: PokemonType) -> u32 {
        use PokemonType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Ghost) => 0,
            (Normal, Rock) | (Normal, Steel) => 5,
            (Normal, _) => 10,

            // Fire
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 5,
            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 20,
            (Fire, _) => 10,

            // Water
            (Water, Water) | (Water, Grass) | (Water, Dragon) => 5,
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 20,
            (Water, _) => 10,

            // Electric
            (Electric, Electric) | (Electric, Grass) | (Electric, Dragon) => 5,
            (Electric, Ground) => 0,
            (Electric, Water) | (Electric, Flying) => 20,
            (Electric, _) => 10,

            // Grass
            (Grass, Fire)
            | (Grass, Grass)
            | (Grass, Poison)
            | (Grass, Flying)
            | (Grass, Bug)
            | (Grass, Dragon)
            | (Grass, Steel) => 5,
            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 20,
            (Grass, _) => 10,

            // Ice
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 5,
            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 20,
            (Ice, _) => 10,

            // Fighting
            (Fighting, Poison) | (Fighting, Flying) | (Fighting, Psychic) | (Fighting, Bug) => 5,
            (Fighting, Ghost) => 0,
            (Fighting, Normal)
            | (Fighting, Ice)
            | (Fighting, Rock)
            | (Fighting, Dark)
            | (Fighting, Steel) => 20,
            (Fighting, _) => 10,

            // Poison
            (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 5,
            (Poison, Steel) => 0,
            (Poison, Grass) => 20,
            (Poison, _) => 10,

            // Ground
            (Ground, Grass) | (Ground, Bug) => 5,
            (Ground, Flying) => 0,
            (Ground, Fire)
            | (Ground, Electric)
            | (Ground, Poison)
            | (Ground, Rock)
            | (Ground, Steel) => 20,
            (Ground, _) => 10,

            // Flying
            (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => 5,
            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 20,
            (Flying, _) => 10,

            // Psychic
            (Psychic, Psychic) | (Psychic, Steel) => 5,
            (Psychic, Dark) => 0,
            (Psychic, Fighting) | (Psychic, Poison) => 20,
            (Psychic, _) => 10,

            // Bug
            (Bug, Fire)
            | (Bug, Fighting)
            | (Bug, Poison)
            | (Bug, Flying)
            | (Bug, Ghost)
            | (Bug, Steel) => 5,
            (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 20,
            (Bug, _) => 10,

            // Rock
            (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 5,
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 20,
            (Rock, _) => 10,

            // Ghost
            (Ghost, Normal) => 0,
            (Ghost, Ghost) | (Ghost, Psychic) => 20,
            (Ghost, Dark) | (Ghost, Steel) => 5,
            (Ghost, _) => 10,

            // Dragon
            (Dragon, Dragon) => 20,
            (Dragon, Steel) => 5,
            (Dragon, _) => 10,

            // Dark
            (Dark, Psychic) | (Dark, Ghost) => 20,
            (Dark, Fighting) | (Dark, Dark) | (Dark, Steel) => 5,
            (Dark, _) => 10,

            // Steel
            (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 5,
            (Steel, Ice) | (Steel, Rock) => 20,
            (Steel, _) => 10,

            (Mystery, _) => 10,
        }
    }

    /// Combined effectiveness against a type pair, in hundredths (400 = 4x).
    /// A mono-typed defender repeats its type in both slots and is only counted once.
    pub fn effectiveness_percent(attacking: PokemonType, types: [PokemonType; 2]) -> u32 {
        let first = Self::effectiveness_tenths(attacking, types[0]);
        let second = if types[1] != types[0] {
            Self::effectiveness_tenths(attacking, types[1])
        } else {
            10
        };
        first * second
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::effectiveness_tenths(attacking, defending) == 0
    }
}
