// In: src/battle/rng.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The single source of randomness for a battle.
///
/// Implementors only provide `next_unit`; every other draw is derived from it so a
/// scripted sequence of unit values reproduces an entire turn. The `reason` string
/// is carried into the trace log and into the panic message of exhausted scripts.
pub trait BattleRng {
    /// A uniform value in `[0, 1)`.
    fn next_unit(&mut self, reason: &str) -> f64;

    /// Uniform integer in `min..=max`.
    fn random_int(&mut self, min: i32, max: i32, reason: &str) -> i32 {
        let unit = self.next_unit(reason);
        let span = i64::from(max) - i64::from(min) + 1;
        if span <= 0 {
            return min;
        }
        let offset = ((unit * span as f64).floor() as i64).clamp(0, span - 1);
        (i64::from(min) + offset) as i32
    }

    /// True with probability `probability`.
    fn random_chance(&mut self, probability: f64, reason: &str) -> bool {
        self.next_unit(reason) < probability
    }

    /// Uniform value in `0..=65535`, used by the shake check.
    fn random_u16(&mut self, reason: &str) -> u16 {
        self.random_int(0, 0xFFFF, reason) as u16
    }
}

/// Production adapter backed by `rand`'s standard generator.
#[derive(Debug, Clone)]
pub struct StdBattleRng {
    inner: StdRng,
}

impl StdBattleRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl BattleRng for StdBattleRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        let unit: f64 = self.inner.random();
        log::trace!("[RNG] drew {:.6} for: {}", unit, reason);
        unit
    }
}

/// Replays a fixed list of unit values.
///
/// A plain script panics when it runs dry, naming the draw that asked for more;
/// a repeating script cycles forever.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f64>,
    index: usize,
    repeat: bool,
}

impl ScriptedRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            index: 0,
            repeat: false,
        }
    }

    pub fn repeating(values: Vec<f64>) -> Self {
        Self {
            values,
            index: 0,
            repeat: true,
        }
    }

    /// Every draw returns 0.0, so every ranged roll yields its minimum and every chance succeeds.
    pub fn always_min() -> Self {
        Self::repeating(vec![0.0])
    }

    /// The unit value that makes `random_int(min, max)` return `value`.
    pub fn unit_for(value: i32, min: i32, max: i32) -> f64 {
        let span = f64::from(max - min + 1);
        (f64::from(value - min) + 0.5) / span
    }

    pub fn consumed(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        if self.repeat {
            usize::MAX
        } else {
            self.values.len().saturating_sub(self.index)
        }
    }
}

impl BattleRng for ScriptedRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        let slot = if self.repeat && !self.values.is_empty() {
            self.index % self.values.len()
        } else {
            self.index
        };
        let Some(&unit) = self.values.get(slot) else {
            panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        };
        log::trace!("[RNG] scripted {:.6} for: {}", unit, reason);
        self.index += 1;
        unit
    }
}
