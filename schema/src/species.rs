use crate::{Ability, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, FromRepr};

/// Species known to the simulator, keyed by national dex number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, FromRepr,
)]
#[repr(u16)]
pub enum Species {
    Pikachu = 25,
    Geodude = 74,
    Farfetchd = 83,
    Gastly = 92,
    Cubone = 104,
    Marowak = 105,
    Chansey = 113,
    Magikarp = 129,
    Gyarados = 130,
    Snorlax = 143,
    Marill = 183,
    Skarmory = 227,
    Treecko = 252,
    Torchic = 255,
    Blaziken = 257,
    Mudkip = 258,
    Poochyena = 261,
    Zigzagoon = 263,
    Wurmple = 265,
    Lotad = 270,
    Seedot = 273,
    Makuhita = 296,
    Nosepass = 299,
    Meditite = 307,
    Snorunt = 361,
    Clamperl = 366,
    Beldum = 374,
    Latias = 380,
    Latios = 381,
    Kyogre = 382,
    Groudon = 383,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
}

/// Static data for one species. Mono-typed species repeat their type in both slots.
/// `gender_ratio` is the cartridge's female threshold: 0 = always male,
/// 254 = always female, 255 = genderless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeciesData {
    pub name: &'static str,
    pub types: [PokemonType; 2],
    pub base_stats: BaseStats,
    pub abilities: [Ability; 2],
    pub catch_rate: u8,
    pub exp_yield: u16,
    pub gender_ratio: u8,
}

const fn stats(hp: u8, attack: u8, defense: u8, sp_attack: u8, sp_defense: u8, speed: u8) -> BaseStats {
    BaseStats {
        hp,
        attack,
        defense,
        speed,
        sp_attack,
        sp_defense,
    }
}

const fn sd(
    name: &'static str,
    types: [PokemonType; 2],
    base_stats: BaseStats,
    abilities: [Ability; 2],
    catch_rate: u8,
    exp_yield: u16,
    gender_ratio: u8,
) -> SpeciesData {
    SpeciesData {
        name,
        types,
        base_stats,
        abilities,
        catch_rate,
        exp_yield,
        gender_ratio,
    }
}

impl Species {
    pub fn dex_number(self) -> u16 {
        self as u16
    }

    pub fn data(self) -> SpeciesData {
        use PokemonType::*;

        match self {
            Species::Pikachu => sd("PIKACHU", [Electric, Electric], stats(35, 55, 30, 50, 40, 90), [Ability::Static, Ability::None], 190, 82, 127),
            Species::Geodude => sd("GEODUDE", [Rock, Ground], stats(40, 80, 100, 30, 30, 20), [Ability::RockHead, Ability::Sturdy], 255, 86, 127),
            Species::Farfetchd => sd("FARFETCH'D", [Normal, Flying], stats(52, 65, 55, 58, 62, 60), [Ability::KeenEye, Ability::InnerFocus], 45, 94, 127),
            Species::Gastly => sd("GASTLY", [Ghost, Poison], stats(30, 35, 30, 100, 35, 80), [Ability::Levitate, Ability::None], 190, 95, 127),
            Species::Cubone => sd("CUBONE", [Ground, Ground], stats(50, 50, 95, 40, 50, 35), [Ability::RockHead, Ability::LightningRod], 190, 87, 127),
            Species::Marowak => sd("MAROWAK", [Ground, Ground], stats(60, 80, 110, 50, 80, 45), [Ability::RockHead, Ability::LightningRod], 75, 124, 127),
            Species::Chansey => sd("CHANSEY", [Normal, Normal], stats(250, 5, 5, 35, 105, 50), [Ability::NaturalCure, Ability::SereneGrace], 30, 255, 254),
            Species::Magikarp => sd("MAGIKARP", [Water, Water], stats(20, 10, 55, 15, 20, 80), [Ability::SwiftSwim, Ability::None], 255, 20, 127),
            Species::Gyarados => sd("GYARADOS", [Water, Flying], stats(95, 125, 79, 60, 100, 81), [Ability::Intimidate, Ability::None], 45, 214, 127),
            Species::Snorlax => sd("SNORLAX", [Normal, Normal], stats(160, 110, 65, 65, 110, 30), [Ability::Immunity, Ability::ThickFat], 25, 154, 31),
            Species::Marill => sd("MARILL", [Water, Water], stats(70, 20, 50, 20, 50, 40), [Ability::ThickFat, Ability::HugePower], 190, 58, 127),
            Species::Skarmory => sd("SKARMORY", [Steel, Flying], stats(65, 80, 140, 40, 70, 70), [Ability::KeenEye, Ability::Sturdy], 25, 168, 127),
            Species::Treecko => sd("TREECKO", [Grass, Grass], stats(40, 45, 35, 65, 55, 70), [Ability::Overgrow, Ability::None], 45, 65, 31),
            Species::Torchic => sd("TORCHIC", [Fire, Fire], stats(45, 60, 40, 70, 50, 45), [Ability::Blaze, Ability::None], 45, 65, 31),
            Species::Blaziken => sd("BLAZIKEN", [Fire, Fighting], stats(80, 120, 70, 110, 70, 80), [Ability::Blaze, Ability::None], 45, 209, 31),
            Species::Mudkip => sd("MUDKIP", [Water, Water], stats(50, 70, 50, 50, 50, 40), [Ability::Torrent, Ability::None], 45, 65, 31),
            Species::Poochyena => sd("POOCHYENA", [Dark, Dark], stats(35, 55, 35, 30, 30, 35), [Ability::RunAway, Ability::None], 255, 55, 127),
            Species::Zigzagoon => sd("ZIGZAGOON", [Normal, Normal], stats(38, 30, 41, 30, 41, 60), [Ability::Pickup, Ability::None], 255, 60, 127),
            Species::Wurmple => sd("WURMPLE", [Bug, Bug], stats(45, 45, 35, 20, 30, 20), [Ability::ShieldDust, Ability::None], 255, 54, 127),
            Species::Lotad => sd("LOTAD", [Water, Grass], stats(40, 30, 30, 40, 50, 30), [Ability::SwiftSwim, Ability::RainDish], 255, 74, 127),
            Species::Seedot => sd("SEEDOT", [Grass, Grass], stats(40, 40, 50, 30, 30, 30), [Ability::Chlorophyll, Ability::EarlyBird], 255, 74, 127),
            Species::Makuhita => sd("MAKUHITA", [Fighting, Fighting], stats(72, 60, 30, 20, 30, 25), [Ability::ThickFat, Ability::Guts], 180, 87, 63),
            Species::Nosepass => sd("NOSEPASS", [Rock, Rock], stats(30, 45, 135, 45, 90, 30), [Ability::Sturdy, Ability::MagnetPull], 255, 108, 127),
            Species::Meditite => sd("MEDITITE", [Fighting, Psychic], stats(30, 40, 55, 40, 55, 60), [Ability::PurePower, Ability::None], 180, 91, 127),
            Species::Snorunt => sd("SNORUNT", [Ice, Ice], stats(50, 50, 50, 50, 50, 50), [Ability::InnerFocus, Ability::None], 190, 74, 127),
            Species::Clamperl => sd("CLAMPERL", [Water, Water], stats(35, 64, 85, 74, 55, 32), [Ability::ShellArmor, Ability::None], 255, 142, 127),
            Species::Beldum => sd("BELDUM", [Steel, Psychic], stats(40, 55, 80, 35, 60, 30), [Ability::ClearBody, Ability::None], 3, 103, 255),
            Species::Latias => sd("LATIAS", [Dragon, Psychic], stats(80, 80, 90, 110, 130, 110), [Ability::Levitate, Ability::None], 3, 211, 254),
            Species::Latios => sd("LATIOS", [Dragon, Psychic], stats(80, 90, 80, 130, 110, 110), [Ability::Levitate, Ability::None], 3, 211, 0),
            Species::Kyogre => sd("KYOGRE", [Water, Water], stats(100, 100, 90, 150, 140, 90), [Ability::Drizzle, Ability::None], 5, 218, 255),
            Species::Groudon => sd("GROUDON", [Ground, Ground], stats(100, 150, 140, 100, 90, 90), [Ability::Drought, Ability::None], 5, 218, 255),
        }
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// Ability for the given slot. A species with one ability uses it for both slots.
    pub fn ability(self, slot: u8) -> Ability {
        let abilities = self.data().abilities;
        match (slot, abilities[1]) {
            (1, second) if second != Ability::None => second,
            _ => abilities[0],
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
