//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A duel always has exactly two combatants. `Side::Player` is the first
//! slot (the local human in single-player, P1 in local play) and
//! `Side::Ai` is the second slot (the scripted opponent, or P2).
//!
//! ## PerSide
//!
//! Fixed two-entry storage indexed by `Side`, backed by an array for O(1)
//! access without allocation.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two combatants in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first slot: the human player, or P1.
    Player,
    /// The second slot: the scripted opponent, or P2.
    Ai,
}

impl Side {
    /// Both sides in resolution order.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Ai];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Get the raw slot index (0 for player, 1 for ai).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "Ai"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use duel_core::core::{PerSide, Side};
///
/// let mut hp: PerSide<i32> = PerSide::splat(100);
/// hp[Side::Ai] -= 15;
///
/// assert_eq!(hp[Side::Player], 100);
/// assert_eq!(hp[Side::Ai], 85);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerSide<T> {
    data: [T; 2],
}

impl<T> PerSide<T> {
    /// Create from explicit player and ai values.
    pub fn new(player: T, ai: T) -> Self {
        Self { data: [player, ai] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Ai)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Map each entry to a new value.
    pub fn map<U>(self, mut f: impl FnMut(Side, T) -> U) -> PerSide<U> {
        let [player, ai] = self.data;
        PerSide::new(f(Side::Player, player), f(Side::Ai, ai))
    }

    /// Iterate over (Side, &T) pairs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
