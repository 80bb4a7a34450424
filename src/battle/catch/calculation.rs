use crate::battle::rng::BattleRng;
use crate::pokemon::PrimaryStatus;
use schema::{Item, PokemonType};

/// Consecutive successful shakes needed for a catch.
pub const BALL_SHAKES_SUCCESS: u8 = 3;

/// Odds above this skip the shake loop entirely.
const GUARANTEED_ODDS: u32 = 254;

/// Everything the ball multiplier can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallContext {
    pub ball: Item,
    pub target_level: u8,
    pub target_types: [PokemonType; 2],
    pub underwater: bool,
    pub species_caught_before: bool,
    /// Turns elapsed in this battle.
    pub turn_counter: u32,
}

/// Ball multiplier in tenths (10 = x1.0).
pub fn ball_multiplier_tenths(ctx: &BallContext) -> u32 {
    match ctx.ball {
        Item::UltraBall => 20,
        Item::GreatBall | Item::SafariBall => 15,
        Item::NetBall => {
            let netted = ctx
                .target_types
                .iter()
                .any(|t| matches!(t, PokemonType::Water | PokemonType::Bug));
            if netted {
                30
            } else {
                10
            }
        }
        Item::DiveBall => {
            if ctx.underwater {
                35
            } else {
                10
            }
        }
        Item::NestBall if ctx.target_level < 40 => {
            let scaled = 40 - u32::from(ctx.target_level);
            if scaled <= 9 {
                10
            } else {
                scaled
            }
        }
        Item::RepeatBall if ctx.species_caught_before => 30,
        Item::TimerBall => (ctx.turn_counter + 10).clamp(10, 40),
        _ => 10,
    }
}

/// Inputs to the catch-odds formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchOddsContext {
    pub catch_rate: u8,
    pub ball_multiplier_tenths: u32,
    pub target_hp: u16,
    pub target_max_hp: u16,
    pub target_status: PrimaryStatus,
}

/// `catchRate * ball / 10`, scaled by missing HP, then boosted for status.
pub fn calculate_catch_odds(ctx: &CatchOddsContext) -> u32 {
    let max_hp = u32::from(ctx.target_max_hp.max(1));
    let hp = u32::from(ctx.target_hp).min(max_hp);
    let catch_rate = u32::from(ctx.catch_rate.max(1));
    let multiplier = ctx.ball_multiplier_tenths.max(1);

    let mut odds = catch_rate * multiplier / 10;
    odds = odds * (max_hp * 3 - hp * 2) / (3 * max_hp);

    match ctx.target_status {
        PrimaryStatus::Sleep(_) | PrimaryStatus::Freeze => odds *= 2,
        PrimaryStatus::None => {}
        _ => odds = odds * 15 / 10,
    }
    odds
}

/// Per-shake success threshold against a 16-bit roll.
pub fn shake_threshold(odds: u32) -> u32 {
    let divisor = (16_711_680.0 / f64::from(odds.max(1))).sqrt().sqrt();
    (1_048_560.0 / divisor.max(1.0)).floor() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeResult {
    pub caught: bool,
    pub shakes: u8,
}

/// Up to three shake rolls. The Master Ball and very high odds skip the rolls.
pub fn resolve_capture_shakes(ball: Item, odds: u32, rng: &mut dyn BattleRng) -> ShakeResult {
    if ball == Item::MasterBall || odds > GUARANTEED_ODDS {
        return ShakeResult {
            caught: true,
            shakes: BALL_SHAKES_SUCCESS,
        };
    }
    if odds == 0 {
        return ShakeResult {
            caught: false,
            shakes: 0,
        };
    }

    let threshold = shake_threshold(odds);
    let mut shakes = 0;
    while shakes < BALL_SHAKES_SUCCESS {
        if u32::from(rng.random_u16("Ball Shake Check")) >= threshold {
            break;
        }
        shakes += 1;
    }
    ShakeResult {
        caught: shakes == BALL_SHAKES_SUCCESS,
        shakes,
    }
}

pub fn ball_escape_message(shakes: u8) -> &'static str {
    match shakes {
        0 => "Oh no! The POKEMON broke free!",
        1 => "Aww! It appeared to be caught!",
        2 => "Aargh! Almost had it!",
        _ => "Shoot! It was so close, too!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::ScriptedRng;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ball_context(ball: Item) -> BallContext {
        BallContext {
            ball,
            target_level: 10,
            target_types: [PokemonType::Water, PokemonType::Water],
            underwater: false,
            species_caught_before: false,
            turn_counter: 0,
        }
    }

    #[rstest]
    #[case(Item::PokeBall, 10)]
    #[case(Item::GreatBall, 15)]
    #[case(Item::UltraBall, 20)]
    #[case(Item::NetBall, 30)]
    #[case(Item::DiveBall, 10)]
    #[case(Item::NestBall, 30)]
    #[case(Item::RepeatBall, 10)]
    #[case(Item::TimerBall, 10)]
    #[case(Item::PremierBall, 10)]
    fn test_ball_multipliers(#[case] ball: Item, #[case] expected: u32) {
        assert_eq!(ball_multiplier_tenths(&ball_context(ball)), expected);
    }

    #[test]
    fn test_conditional_balls_clamp() {
        let mut ctx = ball_context(Item::TimerBall);
        ctx.turn_counter = 50;
        assert_eq!(ball_multiplier_tenths(&ctx), 40);

        ctx.ball = Item::NestBall;
        ctx.target_level = 35;
        assert_eq!(ball_multiplier_tenths(&ctx), 10);
        ctx.target_level = 45;
        assert_eq!(ball_multiplier_tenths(&ctx), 10);

        ctx.ball = Item::DiveBall;
        ctx.underwater = true;
        assert_eq!(ball_multiplier_tenths(&ctx), 35);
    }

    #[rstest]
    #[case(PrimaryStatus::None, 85)]
    #[case(PrimaryStatus::Sleep(2), 170)]
    #[case(PrimaryStatus::Freeze, 170)]
    #[case(PrimaryStatus::Burn, 127)]
    fn test_catch_odds_full_hp(#[case] status: PrimaryStatus, #[case] expected: u32) {
        // 255 * 10 / 10 = 255, then 255 * (3h - 2h) / 3h = 85.
        let ctx = CatchOddsContext {
            catch_rate: 255,
            ball_multiplier_tenths: 10,
            target_hp: 30,
            target_max_hp: 30,
            target_status: status,
        };
        assert_eq!(calculate_catch_odds(&ctx), expected);
    }

    #[test]
    fn test_master_ball_and_high_odds_skip_the_rolls() {
        let mut rng = ScriptedRng::new(vec![]);
        assert_eq!(
            resolve_capture_shakes(Item::MasterBall, 1, &mut rng),
            ShakeResult { caught: true, shakes: 3 }
        );
        assert_eq!(
            resolve_capture_shakes(Item::PokeBall, 255, &mut rng),
            ShakeResult { caught: true, shakes: 3 }
        );
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_shake_loop_stops_at_first_failure() {
        // Arrange: the first roll is 0 (always passes), the second is 65535 (always fails).
        let mut rng = ScriptedRng::new(vec![0.0, 0.99999]);

        // Act
        let result = resolve_capture_shakes(Item::PokeBall, 85, &mut rng);

        // Assert
        assert_eq!(result, ShakeResult { caught: false, shakes: 1 });
        assert_eq!(rng.consumed(), 2);
        assert_eq!(ball_escape_message(result.shakes), "Aww! It appeared to be caught!");
    }

    #[test]
    fn test_shake_threshold_grows_with_odds() {
        assert!(shake_threshold(200) > shake_threshold(50));
        assert!(shake_threshold(254) < 65_536);
    }
}
