//! Archetype strategy table.
//!
//! Maps each archetype to a heuristic function. The default table registers
//! every built-in archetype except Trickster, which (like any custom
//! archetype) resolves to the fallback until a caller registers a heuristic
//! for it:
//!
//! ```
//! use duel_core::core::{Move, MoveCosts, MoveHistory, ScriptedRolls};
//! use duel_core::policy::{Affordability, Archetype, PolicyContext, PolicyTable};
//!
//! fn feint(_ctx: &PolicyContext<'_>, afford: Affordability, _roll: f64) -> Move {
//!     if afford.gamble { Move::Gamble } else { Move::Observe }
//! }
//!
//! let table = PolicyTable::default().with_heuristic(Archetype::Trickster, feint);
//! let history = MoveHistory::new();
//! let ctx = PolicyContext::new(&history, &history, 75, 75, MoveCosts::default());
//!
//! let mv = table.choose_move(Archetype::Trickster, &ctx, &mut ScriptedRolls::new([0.5]));
//! assert_eq!(mv, Move::Gamble);
//! ```

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{Move, RandomSource};

use super::archetype::Archetype;
use super::heuristics;
use super::{Affordability, PolicyContext};

/// A decision heuristic: context, affordability, roll -> move.
pub type Heuristic = fn(&PolicyContext<'_>, Affordability, f64) -> Move;

/// Archetype -> heuristic dispatch with a fallback.
#[derive(Clone)]
pub struct PolicyTable {
    heuristics: FxHashMap<Archetype, Heuristic>,
    fallback: Heuristic,
}

impl std::fmt::Debug for PolicyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyTable")
            .field("registered", &self.heuristics.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::empty()
            .with_heuristic(Archetype::Impulse, heuristics::impulse)
            .with_heuristic(Archetype::Wall, heuristics::wall)
            .with_heuristic(Archetype::Gambler, heuristics::gambler)
            .with_heuristic(Archetype::Observer, heuristics::observer)
            .with_heuristic(Archetype::Mirror, heuristics::mirror)
    }
}

impl PolicyTable {
    /// A table where every archetype uses the fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            heuristics: FxHashMap::default(),
            fallback: heuristics::fallback,
        }
    }

    /// Register (or replace) the heuristic for an archetype.
    #[must_use]
    pub fn with_heuristic(mut self, archetype: Archetype, heuristic: Heuristic) -> Self {
        self.heuristics.insert(archetype, heuristic);
        self
    }

    /// Replace the fallback heuristic.
    #[must_use]
    pub fn with_fallback(mut self, heuristic: Heuristic) -> Self {
        self.fallback = heuristic;
        self
    }

    /// Whether an archetype has its own heuristic.
    #[must_use]
    pub fn is_registered(&self, archetype: Archetype) -> bool {
        self.heuristics.contains_key(&archetype)
    }

    /// The heuristic used for an archetype.
    #[must_use]
    pub fn heuristic_for(&self, archetype: Archetype) -> Heuristic {
        self.heuristics
            .get(&archetype)
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Choose a move for `archetype`.
    ///
    /// Takes exactly one draw from `rng`, before anything else. If neither
    /// Strike nor Shield is affordable the answer is Observe regardless of
    /// archetype.
    pub fn choose_move(
        &self,
        archetype: Archetype,
        ctx: &PolicyContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> Move {
        let roll = rng.next_unit();
        let afford = ctx.affordability();

        if !afford.strike && !afford.shield {
            debug!(%archetype, own_will = ctx.own_will, "forced Observe: cannot Strike or Shield");
            return Move::Observe;
        }

        let mv = (self.heuristic_for(archetype))(ctx, afford, roll);
        debug!(%archetype, roll, own_will = ctx.own_will, opponent_will = ctx.opponent_will, chosen = %mv, "opponent decision");
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveCosts, MoveHistory, ScriptedRolls};

    #[test]
    fn test_default_registrations() {
        let table = PolicyTable::default();
        assert!(table.is_registered(Archetype::Impulse));
        assert!(table.is_registered(Archetype::Mirror));
        assert!(!table.is_registered(Archetype::Trickster));
        assert!(!table.is_registered(Archetype::Custom(1)));
    }

    #[test]
    fn test_unregistered_uses_fallback() {
        let table = PolicyTable::default();
        let history = MoveHistory::new();
        let ctx = PolicyContext::new(&history, &history, 75, 75, MoveCosts::default());

        for archetype in [Archetype::Trickster, Archetype::Custom(42)] {
            let mut rng = ScriptedRolls::new([0.99]);
            assert_eq!(table.choose_move(archetype, &ctx, &mut rng), Move::Strike);
        }
    }

    #[test]
    fn test_floor_applies_to_custom_heuristics() {
        fn always_gamble(_: &PolicyContext<'_>, _: Affordability, _: f64) -> Move {
            Move::Gamble
        }

        let table = PolicyTable::empty().with_fallback(always_gamble);
        let history = MoveHistory::new();
        let ctx = PolicyContext::new(&history, &history, 10, 75, MoveCosts::default());

        let mut rng = ScriptedRolls::new([0.3]);
        assert_eq!(table.choose_move(Archetype::Gambler, &ctx, &mut rng), Move::Observe);
        assert_eq!(rng.taken(), 1);
    }
}
