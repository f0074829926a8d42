//! Player progression across matches.
//!
//! A `Profile` accumulates experience, the archetypes the player has beaten
//! and the player's lifetime move history (which the Mirror archetype reads
//! through [`Duel::with_prior_history`](super::Duel::with_prior_history)).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::MoveHistory;
use crate::policy::Archetype;

use super::summary::MatchLog;

/// XP per difficulty point for a win.
pub const XP_PER_DIFFICULTY: u32 = 100;
/// XP for a loss.
pub const XP_FOR_LOSS: u32 = 20;
/// XP per level.
pub const XP_PER_LEVEL: u32 = 500;

/// Persistent player progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub xp: u32,
    /// Starts at 1.
    pub level: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub archetypes_defeated: FxHashSet<Archetype>,
    /// Every effective player move, oldest first.
    pub move_history: MoveHistory,
    /// Finished matches, newest first.
    pub match_logs: Vec<MatchLog>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            matches_played: 0,
            matches_won: 0,
            archetypes_defeated: FxHashSet::default(),
            move_history: MoveHistory::new(),
            match_logs: Vec::new(),
        }
    }
}

impl Profile {
    /// Create an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished match into the profile.
    ///
    /// `player_moves` are the player's effective moves in that match.
    /// Returns the XP gained.
    pub fn record_match(&mut self, log: MatchLog, player_moves: &MoveHistory) -> u32 {
        let gained = if log.result.is_win() {
            self.matches_won += 1;
            self.archetypes_defeated.insert(log.opponent);
            XP_PER_DIFFICULTY * log.opponent.difficulty()
        } else {
            XP_FOR_LOSS
        };

        let previous_level = self.level;
        self.xp += gained;
        self.level = 1 + self.xp / XP_PER_LEVEL;
        self.matches_played += 1;
        self.move_history.extend_from(player_moves);

        info!(
            opponent = %log.opponent,
            result = ?log.result,
            gained,
            xp = self.xp,
            level = self.level,
            "match recorded"
        );
        if self.level > previous_level {
            info!(level = self.level, "level up");
        }

        self.match_logs.insert(0, log);
        gained
    }

    /// Whether the player may challenge an archetype.
    #[must_use]
    pub fn is_unlocked(&self, archetype: Archetype) -> bool {
        let beaten = |a: Archetype| self.archetypes_defeated.contains(&a);
        match archetype {
            Archetype::Impulse | Archetype::Custom(_) => true,
            Archetype::Wall => beaten(Archetype::Impulse),
            Archetype::Observer | Archetype::Gambler => beaten(Archetype::Wall),
            Archetype::Trickster => beaten(Archetype::Observer) || beaten(Archetype::Gambler),
            Archetype::Mirror => beaten(Archetype::Trickster),
        }
    }

    /// Built-in archetypes currently open, in unlock order.
    #[must_use]
    pub fn unlocked(&self) -> Vec<Archetype> {
        Archetype::BUILT_IN
            .into_iter()
            .filter(|&a| self.is_unlocked(a))
            .collect()
    }

    /// Most recent match, if any.
    #[must_use]
    pub fn last_match(&self) -> Option<&MatchLog> {
        self.match_logs.first()
    }
}
