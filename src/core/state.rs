//! Per-combatant state threaded between turns by the caller.
//!
//! The resolver never stores this; a `Duel` (or any other caller) owns
//! one `CombatantState` per side and folds each `TurnOutcome` into it.

use serde::{Deserialize, Serialize};

use super::config::RulesConfig;

/// Health, willpower and focus of one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantState {
    /// Current health, in `[0, max_hp]`.
    pub hp: i32,
    /// Current willpower, in `[0, max_will]`.
    pub will: i32,
    /// Whether the last effective move was Observe.
    pub focused: bool,
}

impl CombatantState {
    /// State at the start of a match.
    #[must_use]
    pub fn fresh(config: &RulesConfig) -> Self {
        Self {
            hp: config.max_hp,
            will: config.start_will,
            focused: false,
        }
    }

    /// Reset health and willpower for a new round. Focus carries over.
    pub fn reset_round(&mut self, config: &RulesConfig) {
        self.hp = config.max_hp;
        self.will = config.start_will;
    }

    /// Apply a signed damage delta (negative heals), keeping HP in range.
    pub fn take_damage(&mut self, delta: i32, config: &RulesConfig) {
        self.hp = (self.hp - delta).clamp(0, config.max_hp);
    }

    /// Whether this combatant has run out of health.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.hp <= 0
    }
}
