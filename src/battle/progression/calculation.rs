use super::validation::{can_award_experience, ExpCandidate};
use schema::{HoldEffect, Item};
use serde::{Deserialize, Serialize};

/// Percentage applied by a Lucky Egg and by trainer battles, in that order.
const EXP_BONUS_PERCENT: u32 = 150;

/// Experience awarded to one party member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpAward {
    pub party_index: usize,
    pub exp: u32,
}

fn holds(item: Option<Item>, effect: HoldEffect) -> bool {
    item.map(|item| item.hold_effect()) == Some(effect)
}

fn apply_bonuses(mut exp: u32, lucky_egg: bool, trainer: bool) -> u32 {
    if lucky_egg {
        exp = exp * EXP_BONUS_PERCENT / 100;
    }
    if trainer {
        exp = exp * EXP_BONUS_PERCENT / 100;
    }
    exp.max(1)
}

/// Base experience for defeating a battler, before any split.
fn base_exp(exp_yield: u16, fainted_level: u8) -> u32 {
    u32::from(exp_yield) * u32::from(fainted_level) / 7
}

/// Experience for a single recipient: `yield * level / 7`, then the
/// Lucky Egg and trainer-battle bonuses.
pub fn exp_award(exp_yield: u16, fainted_level: u8, lucky_egg: bool, trainer: bool) -> u32 {
    apply_bonuses(base_exp(exp_yield, fainted_level).max(1), lucky_egg, trainer)
}

/// Split the experience for a faint between everyone who earned a share.
///
/// Without an Exp Share holder, sent-in participants split the whole yield.
/// With one, the yield is halved into a participant pool and a holder pool,
/// and a participant who also holds an Exp Share draws from both. Fainted
/// members and members at the level cap are excluded before counting.
pub fn distribute_faint_exp(
    exp_yield: u16,
    fainted_level: u8,
    trainer: bool,
    candidates: &[ExpCandidate],
) -> Vec<ExpAward> {
    let eligible: Vec<&ExpCandidate> = candidates
        .iter()
        .filter(|candidate| match can_award_experience(candidate) {
            Ok(()) => true,
            Err(reason) => {
                log::trace!("no exp for party member: {:?}", reason);
                false
            }
        })
        .collect();

    let participants = eligible.iter().filter(|c| c.sent_in).count() as u32;
    let holders = eligible
        .iter()
        .filter(|c| holds(c.held_item, HoldEffect::ExpShare))
        .count() as u32;

    let total = base_exp(exp_yield, fainted_level);
    let (participant_share, holder_share) = if holders > 0 {
        let half = total / 2;
        let participant_share = if participants > 0 { (half / participants).max(1) } else { 0 };
        (participant_share, (half / holders).max(1))
    } else {
        let participant_share = if participants > 0 { (total / participants).max(1) } else { 0 };
        (participant_share, 0)
    };

    eligible
        .into_iter()
        .filter_map(|candidate| {
            let mut exp = 0;
            if candidate.sent_in {
                exp += participant_share;
            }
            if holds(candidate.held_item, HoldEffect::ExpShare) {
                exp += holder_share;
            }
            if exp == 0 {
                return None;
            }
            let lucky_egg = holds(candidate.held_item, HoldEffect::LuckyEgg);
            Some(ExpAward {
                party_index: candidate.party_index,
                exp: apply_bonuses(exp, lucky_egg, trainer),
            })
        })
        .collect()
}

/// Map a 0..=255 trainer-data IV byte onto the 0..=31 IV range.
pub fn scale_trainer_iv(iv: i32) -> u8 {
    (iv.clamp(0, 255) * 31 / 255) as u8
}
