//! Core engine types: sides, moves, RNG, configuration, combatant state.
//!
//! These are shared by the resolver, the opponent policies and the duel
//! fold. Nothing here knows about archetypes or turn resolution.

pub mod side;
pub mod rng;
pub mod config;
pub mod moves;
pub mod state;

pub use side::{PerSide, Side};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRolls};
pub use config::{ConfigError, MoveCosts, RulesConfig};
pub use moves::{Move, MoveHistory};
pub use state::CombatantState;
