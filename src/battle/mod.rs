pub mod action_stack;
pub mod ai;
pub mod calculators;
pub mod catch;
pub mod conditions;
pub mod engine;
pub mod move_effects;
pub mod progression;
pub mod rng;
pub mod state;
pub mod stats;
pub mod weather;

#[cfg(test)]
mod tests;
