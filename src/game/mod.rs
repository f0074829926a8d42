//! Match flow built on the resolver: rounds, summaries and progression.
//!
//! - `Duel`: folds turn outcomes into a best-of-N match
//! - `MatchLog` / `PlayStyle`: what a finished match looked like
//! - `Profile`: experience and archetype unlocks across matches

pub mod duel;
pub mod progression;
pub mod summary;

pub use duel::{Duel, DuelError, TurnRecord, TurnReport};
pub use progression::{Profile, XP_FOR_LOSS, XP_PER_DIFFICULTY, XP_PER_LEVEL};
pub use summary::{MatchLog, MatchResult, MoveCounts, PlayStyle};
