//! Post-match summaries and play-style insight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveHistory};
use crate::policy::Archetype;

/// Per-move tallies of a side's effective moves.
///
/// `total` includes turns lost to burnout, so the shares below are shares of
/// all turns played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts {
    pub strikes: usize,
    pub shields: usize,
    pub observes: usize,
    pub gambles: usize,
    pub total: usize,
}

impl MoveCounts {
    /// Tally a history.
    #[must_use]
    pub fn from_history(history: &MoveHistory) -> Self {
        let mut counts = Self::default();
        for mv in history.iter() {
            match mv {
                Move::Strike => counts.strikes += 1,
                Move::Shield => counts.shields += 1,
                Move::Observe => counts.observes += 1,
                Move::Gamble => counts.gambles += 1,
                Move::None => {}
            }
            counts.total += 1;
        }
        counts
    }
}

/// Outcome of a match from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == MatchResult::Win
    }
}

/// Record of one finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLog {
    /// Archetype the player faced.
    pub opponent: Archetype,
    pub result: MatchResult,
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the ai side.
    pub ai_wins: u32,
    /// The player's effective moves this match.
    pub counts: MoveCounts,
    /// Turns played across all rounds.
    pub turns: usize,
}

impl MatchLog {
    /// Play-style read of the player's moves.
    #[must_use]
    pub fn play_style(&self) -> PlayStyle {
        PlayStyle::classify(&self.counts, self.result.is_win())
    }
}

/// Coarse read of how a player fought a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayStyle {
    /// No turns were played.
    Void,
    /// Shielded more than half the time.
    Fortress,
    /// Gambled more than 40% of the time.
    Fatalist,
    /// Struck more than 60% of the time.
    Hammer,
    /// Observed more than 40% of the time.
    Spectator,
    /// Balanced and won.
    Victor,
    /// Balanced and lost.
    Learner,
}

impl PlayStyle {
    /// Classify a tally. Rules are checked in declaration order.
    #[must_use]
    pub fn classify(counts: &MoveCounts, won: bool) -> Self {
        let total = counts.total;
        if total == 0 {
            PlayStyle::Void
        } else if counts.shields * 2 > total {
            PlayStyle::Fortress
        } else if counts.gambles * 5 > total * 2 {
            PlayStyle::Fatalist
        } else if counts.strikes * 5 > total * 3 {
            PlayStyle::Hammer
        } else if counts.observes * 5 > total * 2 {
            PlayStyle::Spectator
        } else if won {
            PlayStyle::Victor
        } else {
            PlayStyle::Learner
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            PlayStyle::Void => "The Void",
            PlayStyle::Fortress => "The Fortress",
            PlayStyle::Fatalist => "The Fatalist",
            PlayStyle::Hammer => "The Hammer",
            PlayStyle::Spectator => "The Spectator",
            PlayStyle::Victor => "The Victor",
            PlayStyle::Learner => "The Learner",
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
