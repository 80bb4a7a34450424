use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, FromRepr};

/// Moves known to the simulator, keyed by their Gen-3 move number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, FromRepr,
)]
#[repr(u16)]
pub enum Move {
    Pound = 1,
    KarateChop = 2,
    DoubleSlap = 3,
    PayDay = 6,
    FirePunch = 7,
    IcePunch = 8,
    ThunderPunch = 9,
    Scratch = 10,
    Guillotine = 12,
    RazorWind = 13,
    SwordsDance = 14,
    Gust = 16,
    Fly = 19,
    Bind = 20,
    VineWhip = 22,
    Stomp = 23,
    DoubleKick = 24,
    JumpKick = 26,
    SandAttack = 28,
    Headbutt = 29,
    HornDrill = 32,
    Tackle = 33,
    Wrap = 35,
    TakeDown = 36,
    Thrash = 37,
    DoubleEdge = 38,
    TailWhip = 39,
    PoisonSting = 40,
    Leer = 43,
    Bite = 44,
    Growl = 45,
    Roar = 46,
    Sing = 47,
    Supersonic = 48,
    SonicBoom = 49,
    Disable = 50,
    Acid = 51,
    Ember = 52,
    Flamethrower = 53,
    Mist = 54,
    WaterGun = 55,
    HydroPump = 56,
    Surf = 57,
    IceBeam = 58,
    Blizzard = 59,
    Psybeam = 60,
    BubbleBeam = 61,
    AuroraBeam = 62,
    HyperBeam = 63,
    Peck = 64,
    SeismicToss = 69,
    Absorb = 71,
    MegaDrain = 72,
    LeechSeed = 73,
    Growth = 74,
    SolarBeam = 76,
    PoisonPowder = 77,
    StunSpore = 78,
    SleepPowder = 79,
    StringShot = 81,
    DragonRage = 82,
    ThunderShock = 84,
    Thunderbolt = 85,
    ThunderWave = 86,
    Thunder = 87,
    RockThrow = 88,
    Earthquake = 89,
    Fissure = 90,
    Dig = 91,
    Toxic = 92,
    Confusion = 93,
    Psychic = 94,
    Hypnosis = 95,
    Meditate = 96,
    Agility = 97,
    QuickAttack = 98,
    NightShade = 101,
    Screech = 103,
    DoubleTeam = 104,
    Recover = 105,
    Harden = 106,
    Minimize = 107,
    Smokescreen = 108,
    ConfuseRay = 109,
    Withdraw = 110,
    LightScreen = 113,
    Haze = 114,
    Reflect = 115,
    FocusEnergy = 116,
    Bide = 117,
    SelfDestruct = 120,
    Lick = 122,
    Sludge = 124,
    FireBlast = 126,
    Swift = 129,
    SkullBash = 130,
    Amnesia = 133,
    SoftBoiled = 135,
    HiJumpKick = 136,
    Glare = 137,
    PoisonGas = 139,
    SkyAttack = 143,
    Transform = 144,
    Bubble = 145,
    Splash = 150,
    Explosion = 153,
    Rest = 156,
    RockSlide = 157,
    TriAttack = 161,
    SuperFang = 162,
    Slash = 163,
    Struggle = 165,
    Thief = 168,
    Nightmare = 171,
    FlameWheel = 172,
    Curse = 174,
    Flail = 175,
    Protect = 182,
    MachPunch = 183,
    ScaryFace = 184,
    SludgeBomb = 188,
    MudSlap = 189,
    Spikes = 191,
    Foresight = 193,
    PerishSong = 195,
    LockOn = 199,
    Outrage = 200,
    Sandstorm = 201,
    GigaDrain = 202,
    Endure = 203,
    Charm = 204,
    Rollout = 205,
    FalseSwipe = 206,
    Swagger = 207,
    FuryCutter = 210,
    SteelWing = 211,
    MeanLook = 212,
    Attract = 213,
    HealBell = 215,
    Safeguard = 219,
    Magnitude = 222,
    Encore = 227,
    DragonBreath = 225,
    SweetScent = 230,
    IronTail = 231,
    MetalClaw = 232,
    Twister = 239,
    RainDance = 240,
    SunnyDay = 241,
    Crunch = 242,
    ExtremeSpeed = 245,
    AncientPower = 246,
    ShadowBall = 247,
    FutureSight = 248,
    RockSmash = 249,
    Whirlpool = 250,
    Uproar = 253,
    Stockpile = 254,
    SpitUp = 255,
    Swallow = 256,
    Hail = 258,
    Torment = 259,
    Flatter = 260,
    WillOWisp = 261,
    Facade = 263,
    FocusPunch = 264,
    Charge = 268,
    Taunt = 269,
    Wish = 273,
    Superpower = 276,
    Revenge = 279,
    BrickBreak = 280,
    Yawn = 281,
    Eruption = 284,
    Dive = 291,
    BlazeKick = 299,
    FakeTears = 313,
    Overheat = 315,
    Tickle = 321,
    CosmicPower = 322,
    SkyUppercut = 327,
    SheerCold = 329,
    AerialAce = 332,
    IronDefense = 334,
    BulkUp = 339,
    Bounce = 340,
    MudShot = 341,
    PoisonTail = 342,
    CalmMind = 347,
    DragonDance = 349,
    RockBlast = 350,
    ShockWave = 351,
}

/// Who a move is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTarget {
    Selected,
    User,
    OpponentsField,
    Both,
}

/// Base data for one move.
///
/// `accuracy == 0` means the move never misses. `effect` is the numeric
/// effect ID the battle core dispatches on; `secondary_chance` is the
/// percentage for its on-hit side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveData {
    pub name: &'static str,
    pub move_type: PokemonType,
    pub power: u16,
    pub accuracy: u16,
    pub pp: u8,
    pub effect: u16,
    pub secondary_chance: u8,
    pub priority: i8,
    pub target: MoveTarget,
    pub protect_affected: bool,
}

#[allow(clippy::too_many_arguments)]
const fn md(
    name: &'static str,
    move_type: PokemonType,
    power: u16,
    accuracy: u16,
    pp: u8,
    effect: u16,
    secondary_chance: u8,
    priority: i8,
    target: MoveTarget,
    protect_affected: bool,
) -> MoveData {
    MoveData {
        name,
        move_type,
        power,
        accuracy,
        pp,
        effect,
        secondary_chance,
        priority,
        target,
        protect_affected,
    }
}

impl Move {
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn data(self) -> MoveData {
        use MoveTarget::*;
        use PokemonType::*;

        match self {
            Move::Pound => md("POUND", Normal, 40, 100, 35, 0, 0, 0, Selected, true),
            Move::KarateChop => md("KARATE CHOP", Fighting, 50, 100, 25, 43, 0, 0, Selected, true),
            Move::DoubleSlap => md("DOUBLESLAP", Normal, 15, 85, 10, 29, 0, 0, Selected, true),
            Move::PayDay => md("PAY DAY", Normal, 40, 100, 20, 34, 0, 0, Selected, true),
            Move::FirePunch => md("FIRE PUNCH", Fire, 75, 100, 15, 4, 10, 0, Selected, true),
            Move::IcePunch => md("ICE PUNCH", Ice, 75, 100, 15, 5, 10, 0, Selected, true),
            Move::ThunderPunch => md("THUNDERPUNCH", Electric, 75, 100, 15, 6, 10, 0, Selected, true),
            Move::Scratch => md("SCRATCH", Normal, 40, 100, 35, 0, 0, 0, Selected, true),
            Move::Guillotine => md("GUILLOTINE", Normal, 1, 30, 5, 38, 0, 0, Selected, true),
            Move::RazorWind => md("RAZOR WIND", Normal, 80, 100, 10, 39, 0, 0, Selected, true),
            Move::SwordsDance => md("SWORDS DANCE", Normal, 0, 0, 30, 50, 0, 0, User, false),
            Move::Gust => md("GUST", Flying, 40, 100, 35, 149, 0, 0, Selected, true),
            Move::Fly => md("FLY", Flying, 70, 95, 15, 155, 0, 0, Selected, true),
            Move::Bind => md("BIND", Normal, 15, 75, 20, 42, 0, 0, Selected, true),
            Move::VineWhip => md("VINE WHIP", Grass, 35, 100, 10, 0, 0, 0, Selected, true),
            Move::Stomp => md("STOMP", Normal, 65, 100, 20, 150, 30, 0, Selected, true),
            Move::DoubleKick => md("DOUBLE KICK", Fighting, 30, 100, 30, 44, 0, 0, Selected, true),
            Move::JumpKick => md("JUMP KICK", Fighting, 70, 95, 25, 45, 0, 0, Selected, true),
            Move::SandAttack => md("SAND-ATTACK", Ground, 0, 100, 15, 23, 0, 0, Selected, true),
            Move::Headbutt => md("HEADBUTT", Normal, 70, 100, 15, 31, 30, 0, Selected, true),
            Move::HornDrill => md("HORN DRILL", Normal, 1, 30, 5, 38, 0, 0, Selected, true),
            Move::Tackle => md("TACKLE", Normal, 35, 95, 35, 0, 0, 0, Selected, true),
            Move::Wrap => md("WRAP", Normal, 15, 85, 20, 42, 0, 0, Selected, true),
            Move::TakeDown => md("TAKE DOWN", Normal, 90, 85, 20, 48, 0, 0, Selected, true),
            Move::Thrash => md("THRASH", Normal, 90, 100, 20, 27, 0, 0, Selected, true),
            Move::DoubleEdge => md("DOUBLE-EDGE", Normal, 120, 100, 15, 198, 0, 0, Selected, true),
            Move::TailWhip => md("TAIL WHIP", Normal, 0, 100, 30, 19, 0, 0, Selected, true),
            Move::PoisonSting => md("POISON STING", Poison, 15, 100, 35, 2, 30, 0, Selected, true),
            Move::Leer => md("LEER", Normal, 0, 100, 30, 19, 0, 0, Selected, true),
            Move::Bite => md("BITE", Dark, 60, 100, 25, 31, 30, 0, Selected, true),
            Move::Growl => md("GROWL", Normal, 0, 100, 40, 18, 0, 0, Selected, true),
            Move::Roar => md("ROAR", Normal, 0, 100, 20, 28, 0, -6, Selected, false),
            Move::Sing => md("SING", Normal, 0, 55, 15, 1, 0, 0, Selected, true),
            Move::Supersonic => md("SUPERSONIC", Normal, 0, 55, 20, 49, 0, 0, Selected, true),
            Move::SonicBoom => md("SONICBOOM", Normal, 1, 90, 20, 130, 0, 0, Selected, true),
            Move::Disable => md("DISABLE", Normal, 0, 55, 20, 86, 0, 0, Selected, true),
            Move::Acid => md("ACID", Poison, 40, 100, 30, 69, 10, 0, Selected, true),
            Move::Ember => md("EMBER", Fire, 40, 100, 25, 4, 10, 0, Selected, true),
            Move::Flamethrower => md("FLAMETHROWER", Fire, 95, 100, 15, 4, 10, 0, Selected, true),
            Move::Mist => md("MIST", Ice, 0, 0, 30, 46, 0, 0, User, false),
            Move::WaterGun => md("WATER GUN", Water, 40, 100, 25, 0, 0, 0, Selected, true),
            Move::HydroPump => md("HYDRO PUMP", Water, 120, 80, 5, 0, 0, 0, Selected, true),
            Move::Surf => md("SURF", Water, 95, 100, 15, 0, 0, 0, Selected, true),
            Move::IceBeam => md("ICE BEAM", Ice, 95, 100, 10, 5, 10, 0, Selected, true),
            Move::Blizzard => md("BLIZZARD", Ice, 120, 70, 5, 5, 10, 0, Selected, true),
            Move::Psybeam => md("PSYBEAM", Psychic, 65, 100, 20, 76, 10, 0, Selected, true),
            Move::BubbleBeam => md("BUBBLEBEAM", Water, 65, 100, 20, 70, 10, 0, Selected, true),
            Move::AuroraBeam => md("AURORA BEAM", Ice, 65, 100, 20, 68, 10, 0, Selected, true),
            Move::HyperBeam => md("HYPER BEAM", Normal, 150, 90, 5, 80, 0, 0, Selected, true),
            Move::Peck => md("PECK", Flying, 35, 100, 35, 0, 0, 0, Selected, true),
            Move::SeismicToss => md("SEISMIC TOSS", Fighting, 1, 100, 20, 87, 0, 0, Selected, true),
            Move::Absorb => md("ABSORB", Grass, 20, 100, 20, 3, 0, 0, Selected, true),
            Move::MegaDrain => md("MEGA DRAIN", Grass, 40, 100, 10, 3, 0, 0, Selected, true),
            Move::LeechSeed => md("LEECH SEED", Grass, 0, 90, 10, 84, 0, 0, Selected, true),
            Move::Growth => md("GROWTH", Normal, 0, 0, 40, 13, 0, 0, User, false),
            Move::SolarBeam => md("SOLARBEAM", Grass, 120, 100, 10, 151, 0, 0, Selected, true),
            Move::PoisonPowder => md("POISONPOWDER", Poison, 0, 75, 35, 66, 0, 0, Selected, true),
            Move::StunSpore => md("STUN SPORE", Grass, 0, 75, 30, 67, 0, 0, Selected, true),
            Move::SleepPowder => md("SLEEP POWDER", Grass, 0, 75, 15, 1, 0, 0, Selected, true),
            Move::StringShot => md("STRING SHOT", Bug, 0, 95, 40, 20, 0, 0, Selected, true),
            Move::DragonRage => md("DRAGON RAGE", Dragon, 1, 100, 10, 41, 0, 0, Selected, true),
            Move::ThunderShock => md("THUNDERSHOCK", Electric, 40, 100, 30, 6, 10, 0, Selected, true),
            Move::Thunderbolt => md("THUNDERBOLT", Electric, 95, 100, 15, 6, 10, 0, Selected, true),
            Move::ThunderWave => md("THUNDER WAVE", Electric, 0, 100, 20, 67, 0, 0, Selected, true),
            Move::Thunder => md("THUNDER", Electric, 120, 70, 10, 152, 30, 0, Selected, true),
            Move::RockThrow => md("ROCK THROW", Rock, 50, 90, 15, 0, 0, 0, Selected, true),
            Move::Earthquake => md("EARTHQUAKE", Ground, 100, 100, 10, 147, 0, 0, Selected, true),
            Move::Fissure => md("FISSURE", Ground, 1, 30, 5, 38, 0, 0, Selected, true),
            Move::Dig => md("DIG", Ground, 60, 100, 10, 155, 0, 0, Selected, true),
            Move::Toxic => md("TOXIC", Poison, 0, 85, 10, 33, 0, 0, Selected, true),
            Move::Confusion => md("CONFUSION", Psychic, 50, 100, 25, 76, 10, 0, Selected, true),
            Move::Psychic => md("PSYCHIC", Psychic, 90, 100, 10, 72, 10, 0, Selected, true),
            Move::Hypnosis => md("HYPNOSIS", Psychic, 0, 60, 20, 1, 0, 0, Selected, true),
            Move::Meditate => md("MEDITATE", Psychic, 0, 0, 40, 10, 0, 0, User, false),
            Move::Agility => md("AGILITY", Psychic, 0, 0, 30, 52, 0, 0, User, false),
            Move::QuickAttack => md("QUICK ATTACK", Normal, 40, 100, 30, 103, 0, 1, Selected, true),
            Move::NightShade => md("NIGHT SHADE", Ghost, 1, 100, 15, 87, 0, 0, Selected, true),
            Move::Screech => md("SCREECH", Normal, 0, 85, 40, 59, 0, 0, Selected, true),
            Move::DoubleTeam => md("DOUBLE TEAM", Normal, 0, 0, 15, 16, 0, 0, User, false),
            Move::Recover => md("RECOVER", Normal, 0, 0, 20, 32, 0, 0, User, false),
            Move::Harden => md("HARDEN", Normal, 0, 0, 30, 11, 0, 0, User, false),
            Move::Minimize => md("MINIMIZE", Normal, 0, 0, 20, 108, 0, 0, User, false),
            Move::Smokescreen => md("SMOKESCREEN", Normal, 0, 100, 20, 23, 0, 0, Selected, true),
            Move::ConfuseRay => md("CONFUSE RAY", Ghost, 0, 100, 10, 49, 0, 0, Selected, true),
            Move::Withdraw => md("WITHDRAW", Water, 0, 0, 40, 11, 0, 0, User, false),
            Move::LightScreen => md("LIGHT SCREEN", Psychic, 0, 0, 30, 35, 0, 0, User, false),
            Move::Haze => md("HAZE", Ice, 0, 0, 30, 25, 0, 0, User, false),
            Move::Reflect => md("REFLECT", Psychic, 0, 0, 20, 65, 0, 0, User, false),
            Move::FocusEnergy => md("FOCUS ENERGY", Normal, 0, 0, 30, 47, 0, 0, User, false),
            Move::Bide => md("BIDE", Normal, 1, 100, 10, 26, 0, 1, User, false),
            Move::SelfDestruct => md("SELFDESTRUCT", Normal, 200, 100, 5, 7, 0, 0, Selected, true),
            Move::Lick => md("LICK", Ghost, 20, 100, 30, 6, 30, 0, Selected, true),
            Move::Sludge => md("SLUDGE", Poison, 65, 100, 20, 2, 30, 0, Selected, true),
            Move::FireBlast => md("FIRE BLAST", Fire, 120, 85, 5, 4, 10, 0, Selected, true),
            Move::Swift => md("SWIFT", Normal, 60, 0, 20, 17, 0, 0, Selected, true),
            Move::SkullBash => md("SKULL BASH", Normal, 100, 100, 15, 145, 0, 0, Selected, true),
            Move::Amnesia => md("AMNESIA", Psychic, 0, 0, 20, 54, 0, 0, User, false),
            Move::SoftBoiled => md("SOFTBOILED", Normal, 0, 0, 10, 157, 0, 0, User, false),
            Move::HiJumpKick => md("HI JUMP KICK", Fighting, 85, 90, 20, 45, 0, 0, Selected, true),
            Move::Glare => md("GLARE", Normal, 0, 75, 30, 67, 0, 0, Selected, true),
            Move::PoisonGas => md("POISON GAS", Poison, 0, 55, 40, 66, 0, 0, Selected, true),
            Move::SkyAttack => md("SKY ATTACK", Flying, 140, 90, 5, 75, 30, 0, Selected, true),
            Move::Transform => md("TRANSFORM", Normal, 0, 0, 10, 57, 0, 0, Selected, false),
            Move::Bubble => md("BUBBLE", Water, 20, 100, 30, 70, 10, 0, Selected, true),
            Move::Splash => md("SPLASH", Normal, 0, 0, 40, 85, 0, 0, User, false),
            Move::Explosion => md("EXPLOSION", Normal, 250, 100, 5, 7, 0, 0, Selected, true),
            Move::Rest => md("REST", Psychic, 0, 0, 10, 37, 0, 0, User, false),
            Move::RockSlide => md("ROCK SLIDE", Rock, 75, 90, 10, 31, 30, 0, Selected, true),
            Move::TriAttack => md("TRI ATTACK", Normal, 80, 100, 10, 36, 20, 0, Selected, true),
            Move::SuperFang => md("SUPER FANG", Normal, 1, 90, 10, 40, 0, 0, Selected, true),
            Move::Slash => md("SLASH", Normal, 70, 100, 20, 43, 0, 0, Selected, true),
            Move::Struggle => md("STRUGGLE", Normal, 50, 100, 1, 48, 0, 0, Selected, true),
            Move::Thief => md("THIEF", Dark, 40, 100, 10, 105, 0, 0, Selected, true),
            Move::Nightmare => md("NIGHTMARE", Ghost, 0, 100, 15, 107, 0, 0, Selected, true),
            Move::FlameWheel => md("FLAME WHEEL", Fire, 60, 100, 25, 125, 10, 0, Selected, true),
            Move::Curse => md("CURSE", Mystery, 0, 0, 10, 109, 0, 0, User, false),
            Move::Flail => md("FLAIL", Normal, 1, 100, 15, 99, 0, 0, Selected, true),
            Move::Protect => md("PROTECT", Normal, 0, 0, 10, 111, 0, 3, User, false),
            Move::MachPunch => md("MACH PUNCH", Fighting, 40, 100, 30, 103, 0, 1, Selected, true),
            Move::ScaryFace => md("SCARY FACE", Normal, 0, 90, 10, 60, 0, 0, Selected, true),
            Move::SludgeBomb => md("SLUDGE BOMB", Poison, 90, 100, 10, 2, 30, 0, Selected, true),
            Move::MudSlap => md("MUD-SLAP", Ground, 20, 100, 10, 73, 100, 0, Selected, true),
            Move::Spikes => md("SPIKES", Ground, 0, 0, 20, 112, 0, 0, OpponentsField, false),
            Move::Foresight => md("FORESIGHT", Normal, 0, 100, 40, 113, 0, 0, Selected, true),
            Move::PerishSong => md("PERISH SONG", Normal, 0, 0, 5, 114, 0, 0, Both, false),
            Move::LockOn => md("LOCK-ON", Normal, 0, 100, 5, 94, 0, 0, Selected, true),
            Move::Outrage => md("OUTRAGE", Dragon, 90, 100, 15, 27, 0, 0, Selected, true),
            Move::Sandstorm => md("SANDSTORM", Rock, 0, 0, 10, 115, 0, 0, User, false),
            Move::GigaDrain => md("GIGA DRAIN", Grass, 60, 100, 5, 3, 0, 0, Selected, true),
            Move::Endure => md("ENDURE", Normal, 0, 0, 10, 116, 0, 3, User, false),
            Move::Charm => md("CHARM", Normal, 0, 100, 20, 58, 0, 0, Selected, true),
            Move::Rollout => md("ROLLOUT", Rock, 30, 90, 20, 117, 0, 0, Selected, true),
            Move::FalseSwipe => md("FALSE SWIPE", Normal, 40, 100, 40, 101, 0, 0, Selected, true),
            Move::Swagger => md("SWAGGER", Normal, 0, 90, 15, 118, 0, 0, Selected, true),
            Move::FuryCutter => md("FURY CUTTER", Bug, 10, 95, 20, 119, 0, 0, Selected, true),
            Move::SteelWing => md("STEEL WING", Steel, 70, 90, 25, 138, 10, 0, Selected, true),
            Move::MeanLook => md("MEAN LOOK", Normal, 0, 100, 5, 106, 0, 0, Selected, false),
            Move::Attract => md("ATTRACT", Normal, 0, 100, 15, 120, 0, 0, Selected, true),
            Move::HealBell => md("HEAL BELL", Normal, 0, 0, 5, 102, 0, 0, User, false),
            Move::Safeguard => md("SAFEGUARD", Normal, 0, 0, 25, 124, 0, 0, User, false),
            Move::Magnitude => md("MAGNITUDE", Ground, 1, 100, 30, 126, 0, 0, Selected, true),
            Move::Encore => md("ENCORE", Normal, 0, 100, 5, 90, 0, 0, Selected, true),
            Move::DragonBreath => md("DRAGONBREATH", Dragon, 60, 100, 20, 6, 30, 0, Selected, true),
            Move::SweetScent => md("SWEET SCENT", Normal, 0, 100, 20, 24, 0, 0, Selected, true),
            Move::IronTail => md("IRON TAIL", Steel, 100, 75, 15, 69, 30, 0, Selected, true),
            Move::MetalClaw => md("METAL CLAW", Steel, 50, 95, 35, 139, 10, 0, Selected, true),
            Move::Twister => md("TWISTER", Dragon, 40, 100, 20, 146, 20, 0, Selected, true),
            Move::RainDance => md("RAIN DANCE", Water, 0, 0, 5, 136, 0, 0, User, false),
            Move::SunnyDay => md("SUNNY DAY", Fire, 0, 0, 5, 137, 0, 0, User, false),
            Move::Crunch => md("CRUNCH", Dark, 80, 100, 15, 72, 20, 0, Selected, true),
            Move::ExtremeSpeed => md("EXTREMESPEED", Normal, 80, 100, 5, 103, 0, 1, Selected, true),
            Move::AncientPower => md("ANCIENTPOWER", Rock, 60, 100, 5, 140, 10, 0, Selected, true),
            Move::ShadowBall => md("SHADOW BALL", Ghost, 80, 100, 15, 72, 20, 0, Selected, true),
            Move::FutureSight => md("FUTURE SIGHT", Psychic, 80, 90, 15, 148, 0, 0, Selected, false),
            Move::RockSmash => md("ROCK SMASH", Fighting, 20, 100, 15, 69, 50, 0, Selected, true),
            Move::Whirlpool => md("WHIRLPOOL", Water, 15, 70, 15, 42, 0, 0, Selected, true),
            Move::Uproar => md("UPROAR", Normal, 50, 100, 10, 159, 0, 0, Selected, true),
            Move::Stockpile => md("STOCKPILE", Normal, 0, 0, 10, 160, 0, 0, User, false),
            Move::SpitUp => md("SPIT UP", Normal, 100, 100, 10, 161, 0, 0, Selected, true),
            Move::Swallow => md("SWALLOW", Normal, 0, 0, 10, 162, 0, 0, User, false),
            Move::Hail => md("HAIL", Ice, 0, 0, 10, 164, 0, 0, User, false),
            Move::Torment => md("TORMENT", Dark, 0, 100, 15, 165, 0, 0, Selected, true),
            Move::Flatter => md("FLATTER", Dark, 0, 100, 15, 166, 0, 0, Selected, true),
            Move::WillOWisp => md("WILL-O-WISP", Fire, 0, 75, 15, 167, 0, 0, Selected, true),
            Move::Facade => md("FACADE", Normal, 70, 100, 20, 169, 0, 0, Selected, true),
            Move::FocusPunch => md("FOCUS PUNCH", Fighting, 150, 100, 20, 170, 0, -3, Selected, true),
            Move::Charge => md("CHARGE", Electric, 0, 0, 20, 174, 0, 0, User, false),
            Move::Taunt => md("TAUNT", Dark, 0, 100, 20, 175, 0, 0, Selected, true),
            Move::Wish => md("WISH", Normal, 0, 0, 10, 179, 0, 0, User, false),
            Move::Superpower => md("SUPERPOWER", Fighting, 120, 100, 5, 182, 0, 0, Selected, true),
            Move::Revenge => md("REVENGE", Fighting, 60, 100, 10, 185, 0, -4, Selected, true),
            Move::BrickBreak => md("BRICK BREAK", Fighting, 75, 100, 15, 186, 0, 0, Selected, true),
            Move::Yawn => md("YAWN", Normal, 0, 0, 10, 187, 0, 0, Selected, true),
            Move::Eruption => md("ERUPTION", Fire, 150, 100, 5, 190, 0, 0, Selected, true),
            Move::Dive => md("DIVE", Water, 60, 100, 10, 155, 0, 0, Selected, true),
            Move::BlazeKick => md("BLAZE KICK", Fire, 85, 90, 10, 200, 10, 0, Selected, true),
            Move::FakeTears => md("FAKE TEARS", Dark, 0, 100, 20, 62, 0, 0, Selected, true),
            Move::Overheat => md("OVERHEAT", Fire, 140, 90, 5, 204, 100, 0, Selected, true),
            Move::Tickle => md("TICKLE", Normal, 0, 100, 20, 205, 0, 0, Selected, true),
            Move::CosmicPower => md("COSMIC POWER", Psychic, 0, 0, 20, 206, 0, 0, User, false),
            Move::SkyUppercut => md("SKY UPPERCUT", Fighting, 85, 90, 15, 207, 0, 0, Selected, true),
            Move::SheerCold => md("SHEER COLD", Ice, 1, 30, 5, 38, 0, 0, Selected, true),
            Move::AerialAce => md("AERIAL ACE", Flying, 60, 0, 20, 17, 0, 0, Selected, true),
            Move::IronDefense => md("IRON DEFENSE", Steel, 0, 0, 15, 51, 0, 0, User, false),
            Move::BulkUp => md("BULK UP", Fighting, 0, 0, 20, 208, 0, 0, User, false),
            Move::Bounce => md("BOUNCE", Flying, 85, 85, 5, 155, 30, 0, Selected, true),
            Move::MudShot => md("MUD SHOT", Ground, 55, 95, 15, 70, 100, 0, Selected, true),
            Move::PoisonTail => md("POISON TAIL", Poison, 50, 100, 25, 209, 10, 0, Selected, true),
            Move::CalmMind => md("CALM MIND", Psychic, 0, 0, 20, 211, 0, 0, User, false),
            Move::DragonDance => md("DRAGON DANCE", Dragon, 0, 0, 20, 212, 0, 0, User, false),
            Move::RockBlast => md("ROCK BLAST", Rock, 25, 80, 10, 29, 0, 0, Selected, true),
            Move::ShockWave => md("SHOCK WAVE", Electric, 60, 0, 20, 17, 0, 0, Selected, true),
        }
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    pub fn is_damaging(self) -> bool {
        self.data().power > 0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
