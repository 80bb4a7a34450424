use crate::battle::state::{Battler, StatStage};
use crate::battle::weather::{WeatherKind, WeatherState};
use crate::config::BattleRules;
use crate::pokemon::PrimaryStatus;
use schema::Ability;

const STAGE_NUMERATORS: [u32; 13] = [2, 2, 2, 2, 2, 2, 2, 3, 4, 5, 6, 7, 8];
const STAGE_DENOMINATORS: [u32; 13] = [8, 7, 6, 5, 4, 3, 2, 2, 2, 2, 2, 2, 2];

/// Accuracy multipliers in hundredths, indexed by (accuracy - evasion) + 6.
const ACCURACY_RATIOS: [u32; 13] = [33, 36, 43, 50, 60, 75, 100, 133, 166, 200, 233, 266, 300];

fn stage_index(stage: i8) -> usize {
    (i32::from(stage) + 6).clamp(0, 12) as usize
}

/// Apply a stat stage through the Gen-3 ratio table, truncating.
pub fn apply_stat_stage(stat: u16, stage: i8) -> u16 {
    let index = stage_index(stage);
    (u32::from(stat) * STAGE_NUMERATORS[index] / STAGE_DENOMINATORS[index]) as u16
}

/// Accuracy after the accuracy/evasion stage difference.
/// Foresight-style identification ignores the stages entirely.
pub fn staged_accuracy(accuracy: u16, accuracy_stage: i8, evasion_stage: i8, ignore_stages: bool) -> u16 {
    if ignore_stages {
        return accuracy;
    }
    let diff = (i32::from(accuracy_stage) - i32::from(evasion_stage)).clamp(-6, 6) as i8;
    (u32::from(accuracy) * ACCURACY_RATIOS[stage_index(diff)] / 100) as u16
}

/// Speed used for turn ordering.
pub fn effective_speed(battler: &Battler, weather: &WeatherState, rules: &BattleRules) -> u16 {
    let mut speed = apply_stat_stage(battler.raw_stat(StatStage::Speed), battler.stages.speed);

    if battler.status() == PrimaryStatus::Paralysis {
        speed /= rules.paralysis_speed_divisor.max(1);
    }

    let weather_boost = matches!(
        (battler.ability, weather.kind),
        (Ability::SwiftSwim, WeatherKind::Rain) | (Ability::Chlorophyll, WeatherKind::Sun)
    );
    if weather_boost {
        speed = speed.saturating_mul(2);
    }

    speed.max(1)
}
