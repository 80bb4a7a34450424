// Gen-3 rule tables shared by the battle core.
// Types, abilities, items, moves and species are closed enums keyed by their
// cartridge numbers, each with a `const` data table behind it.

pub use abilities::*;
pub use items::*;
pub use moves::*;
pub use pokemon_types::*;
pub use species::*;

pub mod abilities;
pub mod items;
pub mod moves;
pub mod pokemon_types;
pub mod species;
