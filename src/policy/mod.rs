//! Opponent decision policies.
//!
//! Policies are trait-based to allow customization:
//! - `ArchetypePolicy`: the scripted opponents, dispatched through a
//!   [`PolicyTable`]
//! - `UniformOpponent`: uniform over affordable moves, for baselines
//!
//! A policy sees only move histories and willpower, never the resolver's
//! Focus flag; archetypes that care about Focus approximate it from their
//! own last move.

pub mod archetype;
pub mod heuristics;
pub mod table;

pub use archetype::{Archetype, ArchetypeProfile, ParseArchetypeError};
pub use table::{Heuristic, PolicyTable};

use tracing::debug;

use crate::core::{Move, MoveCosts, MoveHistory, RandomSource};

/// Everything a policy may consult for one decision.
#[derive(Clone, Copy, Debug)]
pub struct PolicyContext<'a> {
    /// The deciding side's effective moves, oldest first.
    pub own_history: &'a MoveHistory,
    /// The other side's effective moves, oldest first.
    pub opponent_history: &'a MoveHistory,
    /// The deciding side's willpower.
    pub own_will: i32,
    /// The other side's willpower.
    pub opponent_will: i32,
    /// Move costs in effect.
    pub costs: MoveCosts,
}

impl<'a> PolicyContext<'a> {
    /// Create a decision context.
    #[must_use]
    pub fn new(
        own_history: &'a MoveHistory,
        opponent_history: &'a MoveHistory,
        own_will: i32,
        opponent_will: i32,
        costs: MoveCosts,
    ) -> Self {
        Self {
            own_history,
            opponent_history,
            own_will,
            opponent_will,
            costs,
        }
    }

    /// Which costed moves the deciding side can pay for.
    #[must_use]
    pub fn affordability(&self) -> Affordability {
        Affordability {
            strike: self.costs.can_afford(Move::Strike, self.own_will),
            shield: self.costs.can_afford(Move::Shield, self.own_will),
            gamble: self.costs.can_afford(Move::Gamble, self.own_will),
        }
    }
}

/// Affordability of the costed moves. Observe is always affordable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordability {
    /// Strike is affordable.
    pub strike: bool,
    /// Shield is affordable.
    pub shield: bool,
    /// Gamble is affordable.
    pub gamble: bool,
}

impl Affordability {
    /// Whether a move is affordable.
    #[must_use]
    pub const fn allows(self, mv: Move) -> bool {
        match mv {
            Move::Strike => self.strike,
            Move::Shield => self.shield,
            Move::Gamble => self.gamble,
            Move::Observe => true,
            Move::None => false,
        }
    }
}

/// Policy for choosing the scripted side's move.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a move. Never returns `Move::None`.
    fn choose_move(&self, ctx: &PolicyContext<'_>, rng: &mut dyn RandomSource) -> Move;
}

/// A scripted archetype opponent.
#[derive(Clone, Debug)]
pub struct ArchetypePolicy {
    archetype: Archetype,
    table: PolicyTable,
}

impl ArchetypePolicy {
    /// Opponent using the default strategy table.
    #[must_use]
    pub fn new(archetype: Archetype) -> Self {
        Self::with_table(archetype, PolicyTable::default())
    }

    /// Opponent using a caller-supplied strategy table.
    #[must_use]
    pub fn with_table(archetype: Archetype, table: PolicyTable) -> Self {
        Self { archetype, table }
    }

    /// The archetype this policy plays.
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }
}

impl OpponentPolicy for ArchetypePolicy {
    fn choose_move(&self, ctx: &PolicyContext<'_>, rng: &mut dyn RandomSource) -> Move {
        self.table.choose_move(self.archetype, ctx, rng)
    }
}

/// Uniform random opponent policy.
///
/// Selects uniformly from affordable moves, with the same forced-Observe
/// floor as the archetypes.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_move(&self, ctx: &PolicyContext<'_>, rng: &mut dyn RandomSource) -> Move {
        let roll = rng.next_unit();
        let afford = ctx.affordability();

        if !afford.strike && !afford.shield {
            return Move::Observe;
        }

        let options: Vec<Move> = Move::CHOICES
            .into_iter()
            .filter(|&mv| afford.allows(mv))
            .collect();
        let idx = ((roll * options.len() as f64) as usize).min(options.len() - 1);
        debug!(roll, chosen = %options[idx], "uniform decision");
        options[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRolls;

    #[test]
    fn test_affordability() {
        let history = MoveHistory::new();
        let ctx = PolicyContext::new(&history, &history, 30, 0, MoveCosts::default());
        let afford = ctx.affordability();

        assert!(afford.strike);
        assert!(afford.shield);
        assert!(!afford.gamble);
        assert!(afford.allows(Move::Observe));
        assert!(!afford.allows(Move::None));
    }

    #[test]
    fn test_policy_is_object_safe() {
        let policies: Vec<Box<dyn OpponentPolicy>> = vec![
            Box::new(ArchetypePolicy::new(Archetype::Impulse)),
            Box::new(UniformOpponent),
        ];
        let history = MoveHistory::new();
        let ctx = PolicyContext::new(&history, &history, 0, 75, MoveCosts::default());

        for policy in &policies {
            let mut rng = ScriptedRolls::new([0.5]);
            assert_eq!(policy.choose_move(&ctx, &mut rng), Move::Observe);
        }
    }

    #[test]
    fn test_uniform_covers_affordable_moves() {
        let history = MoveHistory::new();
        let ctx = PolicyContext::new(&history, &history, 20, 75, MoveCosts::default());

        // Strike and Gamble unaffordable: Shield and Observe remain
        let low = UniformOpponent.choose_move(&ctx, &mut ScriptedRolls::new([0.0]));
        let high = UniformOpponent.choose_move(&ctx, &mut ScriptedRolls::new([0.999]));
        assert_eq!(low, Move::Shield);
        assert_eq!(high, Move::Observe);
    }

    #[test]
    fn test_archetype_policy_delegates_to_table() {
        let policy = ArchetypePolicy::new(Archetype::Gambler);
        assert_eq!(policy.archetype(), Archetype::Gambler);

        let history = MoveHistory::new();
        let ctx = PolicyContext::new(&history, &history, 75, 75, MoveCosts::default());
        assert_eq!(
            policy.choose_move(&ctx, &mut ScriptedRolls::new([0.1])),
            Move::Gamble
        );
    }
}
