//! Moves and move history.
//!
//! Each turn both sides secretly pick one of four moves; the resolver
//! reveals them together. `Move::None` is never a legal choice: it is the
//! effective move the resolver reports when a side burns out.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A duel move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Deal fixed damage unless the opponent shields.
    Strike,
    /// Block an incoming Strike and reflect a Gamble.
    Shield,
    /// Recover health and willpower; grants Focus next turn.
    Observe,
    /// Coin-flip for heavy damage, or hurt yourself.
    Gamble,
    /// Fizzled action after exhaustion. Output only.
    None,
}

impl Move {
    /// The four moves a side may request.
    pub const CHOICES: [Move; 4] = [Move::Strike, Move::Shield, Move::Observe, Move::Gamble];

    /// Whether this move may be requested as input.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        !matches!(self, Move::None)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Strike => "Strike",
            Move::Shield => "Shield",
            Move::Observe => "Observe",
            Move::Gamble => "Gamble",
            Move::None => "None",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, append-only record of one side's effective moves.
///
/// Backed by an `im::Vector` so snapshots of a long lifetime history are
/// O(1) to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vector<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push_back(mv);
    }

    /// Append every move of another history.
    pub fn extend_from(&mut self, other: &MoveHistory) {
        self.moves.append(other.moves.clone());
    }

    /// The most recent move.
    #[must_use]
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no moves are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// How many times `mv` was played.
    #[must_use]
    pub fn count(&self, mv: Move) -> usize {
        self.moves.iter().filter(|&&m| m == mv).count()
    }

    /// Iterate over moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Move>> for MoveHistory {
    fn from(moves: Vec<Move>) -> Self {
        moves.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_exclude_none() {
        assert!(Move::CHOICES.iter().all(|m| m.is_choice()));
        assert!(!Move::None.is_choice());
        assert_eq!(format!("{}", Move::Gamble), "Gamble");
    }

    #[test]
    fn test_history_push_and_last() {
        let mut history = MoveHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);

        history.push(Move::Strike);
        history.push(Move::Observe);

        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(Move::Observe));
    }

    #[test]
    fn test_history_count() {
        let history = MoveHistory::from(vec![Move::Strike, Move::Shield, Move::Strike, Move::None]);
        assert_eq!(history.count(Move::Strike), 2);
        assert_eq!(history.count(Move::None), 1);
        assert_eq!(history.count(Move::Gamble), 0);
    }

    #[test]
    fn test_history_extend_keeps_order() {
        let mut lifetime = MoveHistory::from(vec![Move::Gamble]);
        let current = MoveHistory::from(vec![Move::Strike, Move::Shield]);
        lifetime.extend_from(&current);

        let moves: Vec<_> = lifetime.iter().collect();
        assert_eq!(moves, vec![Move::Gamble, Move::Strike, Move::Shield]);
        assert_eq!(current.len(), 2);
    }

    #[test]
    fn test_history_serialization() {
        let history = MoveHistory::from(vec![Move::Observe, Move::Strike]);
        let json = serde_json::to_string(&history).unwrap();
        let back: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }
}
