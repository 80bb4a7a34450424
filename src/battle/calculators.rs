// In: src/battle/calculators.rs

use crate::battle::move_effects::MoveEffect;
use crate::battle::rng::BattleRng;
use crate::battle::state::{Battler, SideState, StatStage};
use crate::battle::stats::apply_stat_stage;
use crate::battle::weather::WeatherKind;
use crate::pokemon::PrimaryStatus;
use schema::{Ability, HoldEffect, Move, PokemonType, Species};

/// One-in-N critical hit odds, indexed by critical stage.
const CRIT_CHANCES: [i32; 5] = [16, 8, 4, 3, 2];
const CONFUSION_POWER: u64 = 40;

/// Everything the damage formula reads for a single hit.
#[derive(Debug, Clone, Copy)]
pub struct DamageContext<'a> {
    pub attacker: &'a Battler,
    pub defender: &'a Battler,
    pub move_: Move,
    pub power: u16,
    pub move_type: PokemonType,
    pub weather: WeatherKind,
    pub defender_side: &'a SideState,
    /// Foresight lets Normal and Fighting moves connect with Ghost types.
    pub identified: bool,
    /// Explosion-class hits halve the target's raw defense for this calculation only.
    pub halve_defense: bool,
}

impl<'a> DamageContext<'a> {
    pub fn new(
        attacker: &'a Battler,
        defender: &'a Battler,
        move_: Move,
        weather: WeatherKind,
        defender_side: &'a SideState,
    ) -> Self {
        let data = move_.data();
        Self {
            attacker,
            defender,
            move_,
            power: data.power,
            move_type: data.move_type,
            weather,
            defender_side,
            identified: defender.volatile.foresight,
            halve_defense: false,
        }
    }

    pub fn with_power(mut self, power: u16) -> Self {
        self.power = power;
        self
    }

    pub fn halving_defense(mut self) -> Self {
        self.halve_defense = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamageResult {
    pub damage: u16,
    pub critical: bool,
    /// Combined type multiplier in hundredths: 0 immune, 100 neutral, 400 double weakness.
    pub effectiveness: u32,
}

/// Type multiplier against one defending type, in tenths.
fn type_factor(move_type: PokemonType, defending: PokemonType, identified: bool) -> u32 {
    if identified
        && defending == PokemonType::Ghost
        && matches!(move_type, PokemonType::Normal | PokemonType::Fighting)
    {
        return 10;
    }
    PokemonType::effectiveness_tenths(move_type, defending)
}

/// Combined multiplier in hundredths. A repeated type only counts once.
pub fn effectiveness_against(move_type: PokemonType, types: [PokemonType; 2], identified: bool) -> u32 {
    let first = type_factor(move_type, types[0], identified);
    let second = if types[1] != types[0] {
        type_factor(move_type, types[1], identified)
    } else {
        10
    };
    first * second
}

/// Critical stage before the cap: focus energy, high-crit moves and held items stack.
pub fn critical_stage(attacker: &Battler, move_: Move) -> usize {
    let mut stage = 0;
    if attacker.volatile.focus_energy {
        stage += 2;
    }
    if MoveEffect::of(move_) == MoveEffect::HighCritical {
        stage += 1;
    }
    match attacker.hold_effect() {
        HoldEffect::ScopeLens => stage += 1,
        HoldEffect::LuckyPunch if attacker.species() == Species::Chansey => stage += 2,
        HoldEffect::Stick if attacker.species() == Species::Farfetchd => stage += 2,
        _ => {}
    }
    stage.min(CRIT_CHANCES.len() - 1)
}

fn roll_critical(attacker: &Battler, move_: Move, rng: &mut dyn BattleRng) -> bool {
    let chance = CRIT_CHANCES[critical_stage(attacker, move_)];
    rng.random_int(1, chance, "Critical Hit Check") == 1
}

fn attack_ability_modifier(attacker: &Battler, attack: u64, physical: bool, move_type: PokemonType) -> u64 {
    let in_pinch = 3 * u32::from(attacker.current_hp) <= u32::from(attacker.max_hp);
    let statused = !attacker.status().is_none();
    match attacker.ability {
        Ability::HugePower | Ability::PurePower if physical => attack * 2,
        Ability::Hustle if physical => attack * 15 / 10,
        Ability::Guts if physical && statused => attack * 15 / 10,
        Ability::Overgrow if in_pinch && move_type == PokemonType::Grass => attack * 15 / 10,
        Ability::Blaze if in_pinch && move_type == PokemonType::Fire => attack * 15 / 10,
        Ability::Torrent if in_pinch && move_type == PokemonType::Water => attack * 15 / 10,
        Ability::Swarm if in_pinch && move_type == PokemonType::Bug => attack * 15 / 10,
        _ => attack,
    }
}

fn defense_ability_modifier(defender: &Battler, defense: u64, physical: bool, move_type: PokemonType) -> u64 {
    match defender.ability {
        Ability::MarvelScale if physical && !defender.status().is_none() => defense * 15 / 10,
        // Folded into defense so the halving lands before truncation.
        Ability::ThickFat if !physical && matches!(move_type, PokemonType::Fire | PokemonType::Ice) => {
            defense * 2
        }
        _ => defense,
    }
}

fn attack_item_modifier(attacker: &Battler, attack: u64, physical: bool) -> u64 {
    let species = attacker.species();
    match attacker.hold_effect() {
        HoldEffect::ChoiceBand if physical => attack * 15 / 10,
        HoldEffect::ThickClub if physical && matches!(species, Species::Cubone | Species::Marowak) => {
            attack * 2
        }
        HoldEffect::LightBall if !physical && species == Species::Pikachu => attack * 2,
        HoldEffect::SoulDew if !physical && matches!(species, Species::Latias | Species::Latios) => {
            attack * 15 / 10
        }
        HoldEffect::DeepSeaTooth if !physical && species == Species::Clamperl => attack * 2,
        _ => attack,
    }
}

/// `((2L/5 + 2) * power * attack / defense) / 50 + 2`, keeping `2L/5` exact.
fn base_damage(level: u8, power: u64, attack: u64, defense: u64) -> u64 {
    let level = u64::from(level);
    (2 * level + 10) * power * attack / (5 * defense.max(1)) / 50 + 2
}

/// Damage for one hit of an attacking move.
///
/// Returns zero damage with no RNG draws when the move has no power or the
/// defender is immune. Otherwise draws the critical roll, then the 85..=100
/// random factor, in that order.
pub fn calculate_damage(ctx: &DamageContext, rng: &mut dyn BattleRng) -> DamageResult {
    let DamageContext {
        attacker,
        defender,
        move_type,
        ..
    } = *ctx;

    if ctx.power == 0 {
        return DamageResult {
            damage: 0,
            critical: false,
            effectiveness: 100,
        };
    }

    let defender_types = defender.types();
    let effectiveness = effectiveness_against(move_type, defender_types, ctx.identified);
    if effectiveness == 0 {
        return DamageResult::default();
    }

    let physical = move_type.is_physical();
    let critical = roll_critical(attacker, ctx.move_, rng);

    let (attack_stat, defense_stat) = if physical {
        (StatStage::Attack, StatStage::Defense)
    } else {
        (StatStage::SpAttack, StatStage::SpDefense)
    };
    let mut attack_stage = attacker.stages.get(attack_stat);
    let mut defense_stage = defender.stages.get(defense_stat);
    if critical {
        attack_stage = attack_stage.max(0);
        defense_stage = defense_stage.min(0);
    }

    let mut raw_defense = defender.raw_stat(defense_stat);
    if ctx.halve_defense && physical {
        raw_defense = (raw_defense / 2).max(1);
    }

    let mut attack = u64::from(apply_stat_stage(attacker.raw_stat(attack_stat), attack_stage));
    let mut defense = u64::from(apply_stat_stage(raw_defense, defense_stage));

    attack = attack_ability_modifier(attacker, attack, physical, move_type);
    defense = defense_ability_modifier(defender, defense, physical, move_type);
    attack = attack_item_modifier(attacker, attack, physical);

    if physical && attacker.status() == PrimaryStatus::Burn && attacker.ability != Ability::Guts {
        attack /= 2;
    }

    let mut damage = base_damage(attacker.level(), u64::from(ctx.power), attack, defense.max(1));

    match (ctx.weather, move_type) {
        (WeatherKind::Rain, PokemonType::Water) | (WeatherKind::Sun, PokemonType::Fire) => {
            damage = damage * 15 / 10;
        }
        (WeatherKind::Rain, PokemonType::Fire) | (WeatherKind::Sun, PokemonType::Water) => {
            damage /= 2;
        }
        _ => {}
    }

    if critical {
        damage *= 2;
    }

    if attacker.has_type(move_type) {
        damage = damage * 15 / 10;
    }

    // Two truncating steps, never one combined multiplier.
    damage = damage * u64::from(type_factor(move_type, defender_types[0], ctx.identified)) / 10;
    if defender_types[1] != defender_types[0] {
        damage = damage * u64::from(type_factor(move_type, defender_types[1], ctx.identified)) / 10;
    }

    if !critical {
        let screened = if physical {
            ctx.defender_side.reflect_turns > 0
        } else {
            ctx.defender_side.light_screen_turns > 0
        };
        if screened {
            damage /= 2;
        }
    }

    if let Some(item) = attacker.held_item() {
        if item.hold_effect() == HoldEffect::TypePower(move_type) {
            damage = damage * (100 + u64::from(item.hold_effect_param())) / 100;
        }
    }

    let random_factor = rng.random_int(85, 100, "Damage Random Factor");
    damage = damage * random_factor as u64 / 100;

    DamageResult {
        damage: damage.clamp(1, u64::from(u16::MAX)) as u16,
        critical,
        effectiveness,
    }
}

/// The 40-power typeless self-hit of a confused battler: raw stats, no random factor.
pub fn confusion_self_damage(battler: &Battler) -> u16 {
    let attack = u64::from(battler.pokemon.stats.attack);
    let defense = u64::from(battler.pokemon.stats.defense);
    base_damage(battler.level(), CONFUSION_POWER, attack, defense).clamp(1, u64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::ScriptedRng;
    use crate::battle::state::Side;
    use crate::pokemon::PartyPokemon;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::Item;

    const NO_CRIT: f64 = 0.5;
    const CRIT: f64 = 0.0;

    fn battler(species: Species, level: u8, side: Side) -> Battler {
        let pokemon = PartyPokemon::new(species, level, &[Move::Pound]).expect("valid party member");
        Battler::from_party(&pokemon, side, 0)
    }

    fn random_factor(value: i32) -> f64 {
        ScriptedRng::unit_for(value, 85, 100)
    }

    #[rstest]
    #[case(85, 18)]
    #[case(100, 22)]
    fn test_pound_follows_truncating_pipeline(#[case] roll: i32, #[case] expected: u16) {
        // Zigzagoon Lv50: attack 35, defense 46. Base 15, STAB 22, then the random factor.
        let attacker = battler(Species::Zigzagoon, 50, Side::Player);
        let defender = battler(Species::Zigzagoon, 50, Side::Enemy);
        let side = SideState::default();
        let mut rng = ScriptedRng::new(vec![NO_CRIT, random_factor(roll)]);

        let ctx = DamageContext::new(&attacker, &defender, Move::Pound, WeatherKind::None, &side);
        let result = calculate_damage(&ctx, &mut rng);

        assert_eq!(result.damage, expected);
        assert!(!result.critical);
        assert_eq!(result.effectiveness, 100);
    }

    #[test]
    fn test_always_min_rng_is_reproducible() {
        let attacker = battler(Species::Zigzagoon, 50, Side::Player);
        let defender = battler(Species::Zigzagoon, 50, Side::Enemy);
        let side = SideState::default();
        let ctx = DamageContext::new(&attacker, &defender, Move::Pound, WeatherKind::None, &side);

        let first = calculate_damage(&ctx, &mut ScriptedRng::always_min());
        let second = calculate_damage(&ctx, &mut ScriptedRng::always_min());

        // A minimum roll is a critical hit: 15 * 2 = 30, STAB 45, 85% = 38.
        assert_eq!(first, second);
        assert_eq!(first.damage, 38);
        assert!(first.critical);
    }

    #[test]
    fn test_critical_hit_ignores_reflect_and_doubles() {
        let attacker = battler(Species::Zigzagoon, 50, Side::Player);
        let defender = battler(Species::Zigzagoon, 50, Side::Enemy);
        let side = SideState {
            reflect_turns: 5,
            ..SideState::default()
        };
        let ctx = DamageContext::new(&attacker, &defender, Move::Pound, WeatherKind::None, &side);

        let crit = calculate_damage(&ctx, &mut ScriptedRng::new(vec![CRIT, random_factor(100)]));
        let screened = calculate_damage(&ctx, &mut ScriptedRng::new(vec![NO_CRIT, random_factor(100)]));

        assert_eq!(crit.damage, 45);
        assert_eq!(screened.damage, 11);
    }

    #[test]
    fn test_immune_target_draws_nothing() {
        let attacker = battler(Species::Zigzagoon, 50, Side::Player);
        let defender = battler(Species::Gastly, 50, Side::Enemy);
        let side = SideState::default();
        let mut rng = ScriptedRng::new(vec![]);

        let ctx = DamageContext::new(&attacker, &defender, Move::Pound, WeatherKind::None, &side);
        let result = calculate_damage(&ctx, &mut rng);

        assert_eq!(result, DamageResult::default());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_identified_ghost_takes_normal_hits() {
        let attacker = battler(Species::Zigzagoon, 50, Side::Player);
        let mut defender = battler(Species::Gastly, 50, Side::Enemy);
        defender.volatile.foresight = true;
        let side = SideState::default();
        let mut rng = ScriptedRng::new(vec![NO_CRIT, random_factor(100)]);

        let ctx = DamageContext::new(&attacker, &defender, Move::Pound, WeatherKind::None, &side);
        let result = calculate_damage(&ctx, &mut rng);

        assert_eq!(result.effectiveness, 100);
        assert!(result.damage > 0);
    }

    #[test]
    fn test_zero_power_deals_nothing() {
        let attacker = battler(Species::Zigzagoon, 50, Side::Player);
        let defender = battler(Species::Zigzagoon, 50, Side::Enemy);
        let side = SideState::default();
        let mut rng = ScriptedRng::new(vec![]);

        let ctx = DamageContext::new(&attacker, &defender, Move::Growl, WeatherKind::None, &side);
        assert_eq!(calculate_damage(&ctx, &mut rng).damage, 0);
    }

    #[test]
    fn test_burn_halves_physical_attack() {
        let mut attacker = battler(Species::Zigzagoon, 50, Side::Player);
        let defender = battler(Species::Zigzagoon, 50, Side::Enemy);
        let side = SideState::default();
        attacker.set_status(PrimaryStatus::Burn);

        let ctx = DamageContext::new(&attacker, &defender, Move::Pound, WeatherKind::None, &side);
        let result = calculate_damage(&ctx, &mut ScriptedRng::new(vec![NO_CRIT, random_factor(100)]));

        // Attack 17: (110 * 40 * 17) / 230 / 50 + 2 = 8, STAB 12.
        assert_eq!(result.damage, 12);
    }

    #[test]
    fn test_rain_boosts_water_and_weakens_fire() {
        let mudkip = battler(Species::Mudkip, 50, Side::Player);
        let target = battler(Species::Zigzagoon, 50, Side::Enemy);
        let side = SideState::default();

        let dry = DamageContext::new(&mudkip, &target, Move::WaterGun, WeatherKind::None, &side);
        let rain = DamageContext::new(&mudkip, &target, Move::WaterGun, WeatherKind::Rain, &side);
        let sun = DamageContext::new(&mudkip, &target, Move::WaterGun, WeatherKind::Sun, &side);

        let roll = || ScriptedRng::new(vec![NO_CRIT, random_factor(100)]);
        let dry = calculate_damage(&dry, &mut roll()).damage;
        let rain = calculate_damage(&rain, &mut roll()).damage;
        let sun = calculate_damage(&sun, &mut roll()).damage;

        assert!(rain > dry);
        assert!(sun < dry);
    }

    #[test]
    fn test_double_weakness_reports_four_hundred() {
        assert_eq!(
            effectiveness_against(PokemonType::Water, [PokemonType::Rock, PokemonType::Ground], false),
            400
        );
        assert_eq!(
            effectiveness_against(PokemonType::Normal, [PokemonType::Ghost, PokemonType::Poison], false),
            0
        );
        assert_eq!(
            effectiveness_against(PokemonType::Fire, [PokemonType::Fire, PokemonType::Fire], false),
            50
        );
    }

    #[test]
    fn test_critical_stage_stacks_and_caps() {
        let mut attacker = battler(Species::Farfetchd, 50, Side::Player);
        assert_eq!(critical_stage(&attacker, Move::Pound), 0);
        assert_eq!(critical_stage(&attacker, Move::Slash), 1);

        attacker.pokemon.held_item = Some(Item::Stick);
        attacker.volatile.focus_energy = true;
        assert_eq!(critical_stage(&attacker, Move::Slash), 4);

        let mut chansey = battler(Species::Chansey, 50, Side::Player);
        chansey.pokemon.held_item = Some(Item::Stick);
        assert_eq!(critical_stage(&chansey, Move::Pound), 0);
        chansey.pokemon.held_item = Some(Item::ScopeLens);
        assert_eq!(critical_stage(&chansey, Move::Pound), 1);
    }

    #[test]
    fn test_confusion_self_hit_uses_raw_stats() {
        let mut battler = battler(Species::Zigzagoon, 50, Side::Player);
        battler.stages.attack = 6;
        assert_eq!(confusion_self_damage(&battler), 15);
    }
}
