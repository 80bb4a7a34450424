use super::calculation::{
    ball_escape_message, ball_multiplier_tenths, calculate_catch_odds, resolve_capture_shakes, BallContext,
    CatchOddsContext,
};
use super::validation::{can_attempt_catch, CatchError};
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, Battler, EventBus, EventKind, Side};
use crate::config::BattleConfig;
use schema::Item;

/// Throw `ball` at the enemy battler and report what happened.
/// Returns whether the target was caught.
pub fn throw_ball(
    ball: Item,
    target: &Battler,
    config: &BattleConfig,
    turn_counter: u32,
    rng: &mut dyn BattleRng,
    events: &mut EventBus,
) -> bool {
    match can_attempt_catch(config.kind, ball, target) {
        Ok(_) => {}
        Err(CatchError::TrainerBattle) => {
            events.message(Some(Side::Player), "The TRAINER blocked the BALL!");
            events.message(Some(Side::Player), "Don't be a thief!");
            return false;
        }
        Err(error) => {
            log::debug!("ball throw rejected: {:?}", error);
            events.message(Some(Side::Player), "But it failed!");
            return false;
        }
    }

    let species = target.species();
    let ball_ctx = BallContext {
        ball,
        target_level: target.level(),
        target_types: target.types(),
        underwater: config.underwater,
        species_caught_before: config.caught_species.contains(&species),
        turn_counter,
    };
    let odds = calculate_catch_odds(&CatchOddsContext {
        catch_rate: species.data().catch_rate,
        ball_multiplier_tenths: ball_multiplier_tenths(&ball_ctx),
        target_hp: target.current_hp,
        target_max_hp: target.max_hp,
        target_status: target.status(),
    });
    log::debug!("{} thrown at {} with odds {}", ball.name(), target.name(), odds);

    events.push(
        BattleEvent::new(EventKind::CaptureAttempt)
            .on(Side::Enemy)
            .value(odds.min(i32::MAX as u32) as i32)
            .text(format!("PLAYER used {}!", ball.name())),
    );

    let result = resolve_capture_shakes(ball, odds, rng);
    for shake in 1..=result.shakes.min(3) {
        events.push(
            BattleEvent::new(EventKind::CaptureShake)
                .on(Side::Enemy)
                .value(shake),
        );
    }

    if result.caught {
        events.push(
            BattleEvent::new(EventKind::CaptureSuccess)
                .on(Side::Enemy)
                .text(format!("Gotcha! {} was caught!", target.name())),
        );
    } else {
        events.push(
            BattleEvent::new(EventKind::CaptureFail)
                .on(Side::Enemy)
                .value(result.shakes)
                .text(ball_escape_message(result.shakes)),
        );
    }
    result.caught
}
