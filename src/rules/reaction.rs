//! Reaction classifier.
//!
//! Picks the coarse emotional reaction a side shows after a turn. The
//! presentation layer maps a `Reaction` to an emote; the engine only decides
//! which category applies.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Side};

use super::outcome::TurnOutcome;

/// Damage at or above which a hit provokes a reaction.
pub const HIGH_DAMAGE_THRESHOLD: i32 = 20;

/// Reaction category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    /// Own gamble paid off.
    Happy,
    /// Took a heavy hit.
    Angry,
    /// Saw a critical strike or the opponent's lucky gamble.
    Shocked,
    /// Dealt a heavy hit, or blocked a strike.
    Taunt,
}

impl Reaction {
    /// Classify with the default threshold.
    #[must_use]
    pub fn classify(outcome: &TurnOutcome, side: Side) -> Option<Self> {
        Self::classify_with(outcome, side, HIGH_DAMAGE_THRESHOLD)
    }

    /// Classify a turn from `side`'s point of view. First match wins.
    #[must_use]
    pub fn classify_with(outcome: &TurnOutcome, side: Side, threshold: i32) -> Option<Self> {
        let own = outcome.side(side);
        let opponent = outcome.side(side.opponent());

        if own.damage >= threshold {
            return Some(Reaction::Angry);
        }
        if opponent.damage >= threshold {
            return Some(Reaction::Taunt);
        }
        if outcome.is_critical() {
            return Some(Reaction::Shocked);
        }
        if outcome.is_gamble_success() {
            return Some(if own.gamble_won {
                Reaction::Happy
            } else {
                Reaction::Shocked
            });
        }
        if own.effective == Move::Shield && opponent.effective == Move::Strike {
            return Some(Reaction::Taunt);
        }
        None
    }
}
