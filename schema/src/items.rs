use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::FromRepr;

/// Items the battle core knows about, keyed by their Gen-3 item number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr)]
#[repr(u16)]
pub enum Item {
    // Balls
    MasterBall = 1,
    UltraBall = 2,
    GreatBall = 3,
    PokeBall = 4,
    SafariBall = 5,
    NetBall = 6,
    DiveBall = 7,
    NestBall = 8,
    RepeatBall = 9,
    TimerBall = 10,
    LuxuryBall = 11,
    PremierBall = 12,

    // Medicine (applied by the bag, never by the engine)
    Potion = 13,
    Antidote = 14,

    // Held items
    SilverPowder = 188,
    ExpShare = 182,
    ChoiceBand = 186,
    SoulDew = 191,
    DeepSeaTooth = 192,
    SmokeBall = 194,
    LuckyEgg = 197,
    ScopeLens = 198,
    MetalCoat = 199,
    LightBall = 202,
    SoftSand = 203,
    HardStone = 204,
    MiracleSeed = 205,
    BlackGlasses = 206,
    BlackBelt = 207,
    Magnet = 208,
    MysticWater = 209,
    SharpBeak = 210,
    PoisonBarb = 211,
    NeverMeltIce = 212,
    SpellTag = 213,
    TwistedSpoon = 214,
    Charcoal = 215,
    DragonFang = 216,
    SilkScarf = 217,
    SeaIncense = 220,
    LuckyPunch = 222,
    ThickClub = 224,
    Stick = 225,
}

/// What an item does while held in battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoldEffect {
    None,
    ExpShare,
    ChoiceBand,
    SoulDew,
    DeepSeaTooth,
    CanAlwaysRun,
    LuckyEgg,
    ScopeLens,
    LightBall,
    LuckyPunch,
    ThickClub,
    Stick,
    /// Boosts moves of the given type by `hold_effect_param` percent.
    TypePower(PokemonType),
}

impl Item {
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn is_ball(self) -> bool {
        self.id() <= Item::PremierBall.id()
    }

    pub fn hold_effect(self) -> HoldEffect {
        use PokemonType::*;
        match self {
            Item::ExpShare => HoldEffect::ExpShare,
            Item::ChoiceBand => HoldEffect::ChoiceBand,
            Item::SoulDew => HoldEffect::SoulDew,
            Item::DeepSeaTooth => HoldEffect::DeepSeaTooth,
            Item::SmokeBall => HoldEffect::CanAlwaysRun,
            Item::LuckyEgg => HoldEffect::LuckyEgg,
            Item::ScopeLens => HoldEffect::ScopeLens,
            Item::LightBall => HoldEffect::LightBall,
            Item::LuckyPunch => HoldEffect::LuckyPunch,
            Item::ThickClub => HoldEffect::ThickClub,
            Item::Stick => HoldEffect::Stick,
            Item::SilverPowder => HoldEffect::TypePower(Bug),
            Item::MetalCoat => HoldEffect::TypePower(Steel),
            Item::SoftSand => HoldEffect::TypePower(Ground),
            Item::HardStone => HoldEffect::TypePower(Rock),
            Item::MiracleSeed => HoldEffect::TypePower(Grass),
            Item::BlackGlasses => HoldEffect::TypePower(Dark),
            Item::BlackBelt => HoldEffect::TypePower(Fighting),
            Item::Magnet => HoldEffect::TypePower(Electric),
            Item::MysticWater | Item::SeaIncense => HoldEffect::TypePower(Water),
            Item::SharpBeak => HoldEffect::TypePower(Flying),
            Item::PoisonBarb => HoldEffect::TypePower(Poison),
            Item::NeverMeltIce => HoldEffect::TypePower(Ice),
            Item::SpellTag => HoldEffect::TypePower(Ghost),
            Item::TwistedSpoon => HoldEffect::TypePower(Psychic),
            Item::Charcoal => HoldEffect::TypePower(Fire),
            Item::DragonFang => HoldEffect::TypePower(Dragon),
            Item::SilkScarf => HoldEffect::TypePower(Normal),
            _ => HoldEffect::None,
        }
    }

    /// Percentage parameter attached to the hold effect.
    pub fn hold_effect_param(self) -> u32 {
        match self {
            Item::SeaIncense => 5,
            item if matches!(item.hold_effect(), HoldEffect::TypePower(_)) => 10,
            _ => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Item::MasterBall => "MASTER BALL",
            Item::UltraBall => "ULTRA BALL",
            Item::GreatBall => "GREAT BALL",
            Item::PokeBall => "POKé BALL",
            Item::SafariBall => "SAFARI BALL",
            Item::NetBall => "NET BALL",
            Item::DiveBall => "DIVE BALL",
            Item::NestBall => "NEST BALL",
            Item::RepeatBall => "REPEAT BALL",
            Item::TimerBall => "TIMER BALL",
            Item::LuxuryBall => "LUXURY BALL",
            Item::PremierBall => "PREMIER BALL",
            Item::Potion => "POTION",
            Item::Antidote => "ANTIDOTE",
            Item::SilverPowder => "SILVERPOWDER",
            Item::ExpShare => "EXP. SHARE",
            Item::ChoiceBand => "CHOICE BAND",
            Item::SoulDew => "SOUL DEW",
            Item::DeepSeaTooth => "DEEPSEATOOTH",
            Item::SmokeBall => "SMOKE BALL",
            Item::LuckyEgg => "LUCKY EGG",
            Item::ScopeLens => "SCOPE LENS",
            Item::MetalCoat => "METAL COAT",
            Item::LightBall => "LIGHT BALL",
            Item::SoftSand => "SOFT SAND",
            Item::HardStone => "HARD STONE",
            Item::MiracleSeed => "MIRACLE SEED",
            Item::BlackGlasses => "BLACKGLASSES",
            Item::BlackBelt => "BLACK BELT",
            Item::Magnet => "MAGNET",
            Item::MysticWater => "MYSTIC WATER",
            Item::SharpBeak => "SHARP BEAK",
            Item::PoisonBarb => "POISON BARB",
            Item::NeverMeltIce => "NEVERMELTICE",
            Item::SpellTag => "SPELL TAG",
            Item::TwistedSpoon => "TWISTEDSPOON",
            Item::Charcoal => "CHARCOAL",
            Item::DragonFang => "DRAGON FANG",
            Item::SilkScarf => "SILK SCARF",
            Item::SeaIncense => "SEA INCENSE",
            Item::LuckyPunch => "LUCKY PUNCH",
            Item::ThickClub => "THICK CLUB",
            Item::Stick => "STICK",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
