//! # duel-core
//!
//! Turn resolution engine for a two-resource duel: health and willpower,
//! four moves, simultaneous turns, scripted opponents.
//!
//! ## Design Principles
//!
//! 1. **Pure Resolution**: `Resolver::resolve` is a function of its inputs.
//!    It returns an immutable `TurnOutcome`; the caller folds it into its
//!    own state.
//!
//! 2. **Injected Randomness**: Every random draw comes from a
//!    `RandomSource`. Seed a `GameRng` for reproducible matches, or script
//!    the rolls with `ScriptedRolls` in tests.
//!
//! 3. **Configuration Over Convention**: Damage, costs and thresholds live
//!    in `RulesConfig`; opponent heuristics live in a `PolicyTable`.
//!
//! ## Modules
//!
//! - `core`: sides, moves, RNG, configuration, combatant state
//! - `rules`: the resolver, turn outcomes, reaction classification
//! - `policy`: opponent archetypes and their decision heuristics
//! - `game`: match flow, summaries, progression

pub mod core;
pub mod game;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CombatantState, ConfigError, GameRng, GameRngState, Move, MoveCosts, MoveHistory, PerSide,
    RandomSource, RulesConfig, ScriptedRolls, Side,
};

pub use crate::rules::{
    Reaction, Resolver, SideInput, SideResult, TurnEvent, TurnOutcome, HIGH_DAMAGE_THRESHOLD,
};

pub use crate::policy::{
    Affordability, Archetype, ArchetypePolicy, ArchetypeProfile, Heuristic, OpponentPolicy,
    ParseArchetypeError, PolicyContext, PolicyTable, UniformOpponent,
};

pub use crate::game::{
    Duel, DuelError, MatchLog, MatchResult, MoveCounts, PlayStyle, Profile, TurnRecord,
    TurnReport,
};
