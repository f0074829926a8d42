//! Turn outcome: the resolver's only output.
//!
//! A `TurnOutcome` is an immutable value. The caller folds it into its own
//! match state (see `game::Duel`); nothing in the engine keeps a reference.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, PerSide, Side};

/// Structured record of what happened during a resolution.
///
/// Presentation layers render these instead of the engine producing prose.
/// Events are ordered player side first, then ai side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A side could not afford its move and took exhaustion damage.
    Burnout { side: Side, damage: i32 },
    /// A Strike landed.
    Hit {
        attacker: Side,
        damage: i32,
        critical: bool,
    },
    /// A Strike was stopped by a Shield.
    Blocked { attacker: Side },
    /// A Gamble crashed into a Shield and hurt the gambler.
    Reflected { gambler: Side, damage: i32 },
    /// A Gamble paid off.
    GambleWon {
        gambler: Side,
        damage: i32,
        focused: bool,
    },
    /// A Gamble lost the coin-flip and hurt the gambler.
    GambleBackfired { gambler: Side, damage: i32 },
    /// A side observed, recovering health and willpower.
    Recovered { side: Side, heal: i32, will: i32 },
}

/// Resolution result for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideResult {
    /// The move the side asked for.
    pub requested: Move,
    /// The move actually resolved (`Move::None` after exhaustion).
    pub effective: Move,
    /// Signed HP delta for this side. Positive is damage taken, negative is
    /// healing, never below `-observe_heal`.
    pub damage: i32,
    /// Willpower after paying or regenerating, in `[0, max_will]`.
    pub will: i32,
    /// The side could not afford its move.
    pub exhausted: bool,
    /// This side landed a focused Strike.
    pub critical: bool,
    /// This side's Gamble succeeded.
    pub gamble_won: bool,
}

/// Everything one turn produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    sides: PerSide<SideResult>,
    events: SmallVec<[TurnEvent; 4]>,
}

impl TurnOutcome {
    pub(crate) fn new(sides: PerSide<SideResult>, events: SmallVec<[TurnEvent; 4]>) -> Self {
        Self { sides, events }
    }

    /// Result for one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &SideResult {
        &self.sides[side]
    }

    /// Result for the player side.
    #[must_use]
    pub fn player(&self) -> &SideResult {
        self.side(Side::Player)
    }

    /// Result for the ai side.
    #[must_use]
    pub fn ai(&self) -> &SideResult {
        self.side(Side::Ai)
    }

    /// Effective move of a side.
    #[must_use]
    pub fn effective_move(&self, side: Side) -> Move {
        self.sides[side].effective
    }

    /// Signed HP delta of a side.
    #[must_use]
    pub fn damage(&self, side: Side) -> i32 {
        self.sides[side].damage
    }

    /// Updated willpower of a side.
    #[must_use]
    pub fn will(&self, side: Side) -> i32 {
        self.sides[side].will
    }

    /// Whether a side burned out.
    #[must_use]
    pub fn exhausted(&self, side: Side) -> bool {
        self.sides[side].exhausted
    }

    /// Whether the player side burned out.
    #[must_use]
    pub fn player_exhausted(&self) -> bool {
        self.exhausted(Side::Player)
    }

    /// Whether the ai side burned out.
    #[must_use]
    pub fn ai_exhausted(&self) -> bool {
        self.exhausted(Side::Ai)
    }

    /// Whether either side landed a focused Strike.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.sides.iter().any(|(_, s)| s.critical)
    }

    /// Whether either side's Gamble succeeded.
    #[must_use]
    pub fn is_gamble_success(&self) -> bool {
        self.sides.iter().any(|(_, s)| s.gamble_won)
    }

    /// Focus a side carries into the next turn.
    ///
    /// Derived solely from this outcome: a side is focused next turn iff its
    /// effective move this turn was Observe.
    #[must_use]
    pub fn focus_after(&self, side: Side) -> bool {
        self.sides[side].effective == Move::Observe
    }

    /// Events in resolution order.
    #[must_use]
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }
}
