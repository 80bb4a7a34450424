use serde::{Deserialize, Serialize};

/// Level cap for experience gain.
pub const MAX_LEVEL: u8 = 100;

/// Why a party member cannot receive experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionError {
    PokemonFainted { party_index: usize },
    MaxLevel { party_index: usize, level: u8 },
}

/// One party member that might receive experience for a faint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpCandidate {
    pub party_index: usize,
    pub level: u8,
    pub current_hp: u16,
    /// Was on the field against the fainted battler.
    pub sent_in: bool,
    pub held_item: Option<schema::Item>,
}

/// Validate that a party member can receive experience.
pub fn can_award_experience(candidate: &ExpCandidate) -> Result<(), ProgressionError> {
    if candidate.current_hp == 0 {
        return Err(ProgressionError::PokemonFainted {
            party_index: candidate.party_index,
        });
    }
    if candidate.level >= MAX_LEVEL {
        return Err(ProgressionError::MaxLevel {
            party_index: candidate.party_index,
            level: candidate.level,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate(level: u8, current_hp: u16) -> ExpCandidate {
        ExpCandidate {
            party_index: 2,
            level,
            current_hp,
            sent_in: true,
            held_item: None,
        }
    }

    #[test]
    fn test_can_award_experience() {
        assert_eq!(can_award_experience(&candidate(50, 10)), Ok(()));
        assert_eq!(
            can_award_experience(&candidate(50, 0)),
            Err(ProgressionError::PokemonFainted { party_index: 2 })
        );
        assert_eq!(
            can_award_experience(&candidate(100, 10)),
            Err(ProgressionError::MaxLevel {
                party_index: 2,
                level: 100
            })
        );
    }
}
