//! Built-in archetype heuristics.
//!
//! Each heuristic receives the decision context, the affordability flags and
//! the single roll drawn for this decision. Probability bands are evaluated
//! in order against that one roll; the first matching band wins. The shared
//! "cannot Strike or Shield" floor is applied by the table before any
//! heuristic runs.

use crate::core::Move;

use super::{Affordability, PolicyContext};

/// Impulse: Strike band upper bound.
const IMPULSE_STRIKE_BAND: f64 = 0.7;
/// Impulse: Gamble band upper bound.
const IMPULSE_GAMBLE_BAND: f64 = 0.9;

/// Wall: below this willpower, always Observe.
const WALL_LOW_WILL: i32 = 40;
/// Wall: Shield band upper bound.
const WALL_SHIELD_BAND: f64 = 0.5;
/// Wall: Shield band shrinks by this after a Shield.
const WALL_REPEAT_PENALTY: f64 = 0.3;
/// Wall: Observe band upper bound.
const WALL_OBSERVE_BAND: f64 = 0.8;

/// Gambler: Gamble band upper bound.
const GAMBLER_GAMBLE_BAND: f64 = 0.5;
/// Gambler: Strike band upper bound.
const GAMBLER_STRIKE_BAND: f64 = 0.8;

/// Observer: Observe band upper bound.
const OBSERVER_OBSERVE_BAND: f64 = 0.4;
/// Observer: Shield band upper bound.
const OBSERVER_SHIELD_BAND: f64 = 0.7;

/// Mirror: below this willpower, always Observe.
const MIRROR_LOW_WILL: i32 = 30;
/// Mirror: Strike band upper bound.
const MIRROR_STRIKE_BAND: f64 = 0.6;

/// Strike if affordable, else Observe.
fn strike_or_observe(afford: Affordability) -> Move {
    if afford.strike {
        Move::Strike
    } else {
        Move::Observe
    }
}

/// Punishes an opponent who cannot Shield, otherwise mostly strikes.
pub fn impulse(ctx: &PolicyContext<'_>, afford: Affordability, roll: f64) -> Move {
    let opponent_cannot_shield = ctx.opponent_will < ctx.costs.shield;
    if opponent_cannot_shield && afford.strike {
        return Move::Strike;
    }
    if roll < IMPULSE_STRIKE_BAND && afford.strike {
        return Move::Strike;
    }
    if roll < IMPULSE_GAMBLE_BAND && afford.gamble {
        return Move::Gamble;
    }
    if afford.shield {
        Move::Shield
    } else {
        Move::Observe
    }
}

/// Shields and observes; avoids shielding twice in a row.
pub fn wall(ctx: &PolicyContext<'_>, afford: Affordability, roll: f64) -> Move {
    if ctx.own_will < WALL_LOW_WILL {
        return Move::Observe;
    }

    let penalty = if ctx.own_history.last() == Some(Move::Shield) {
        WALL_REPEAT_PENALTY
    } else {
        0.0
    };

    if roll < WALL_SHIELD_BAND - penalty && afford.shield {
        return Move::Shield;
    }
    if roll < WALL_OBSERVE_BAND {
        return Move::Observe;
    }
    strike_or_observe(afford)
}

/// Gambles half the time.
pub fn gambler(_ctx: &PolicyContext<'_>, afford: Affordability, roll: f64) -> Move {
    if roll < GAMBLER_GAMBLE_BAND && afford.gamble {
        return Move::Gamble;
    }
    if roll < GAMBLER_STRIKE_BAND && afford.strike {
        return Move::Strike;
    }
    Move::Observe
}

/// Finishes a drained opponent and strikes right after observing.
///
/// "Right after observing" approximates the resolver's Focus from move
/// history alone.
pub fn observer(ctx: &PolicyContext<'_>, afford: Affordability, roll: f64) -> Move {
    let opponent_cannot_strike = ctx.opponent_will < ctx.costs.strike;
    if opponent_cannot_strike && afford.strike {
        return Move::Strike;
    }
    if ctx.own_history.last() == Some(Move::Observe) && afford.strike {
        return Move::Strike;
    }
    if roll < OBSERVER_OBSERVE_BAND {
        return Move::Observe;
    }
    if roll < OBSERVER_SHIELD_BAND && afford.shield {
        return Move::Shield;
    }
    strike_or_observe(afford)
}

/// Never burns out; shields against strike-heavy opponents.
pub fn mirror(ctx: &PolicyContext<'_>, afford: Affordability, roll: f64) -> Move {
    if ctx.own_will < MIRROR_LOW_WILL {
        return Move::Observe;
    }

    let strikes = ctx.opponent_history.count(Move::Strike);
    if strikes * 2 > ctx.opponent_history.len() && afford.shield {
        return Move::Shield;
    }

    if roll < MIRROR_STRIKE_BAND && afford.strike {
        return Move::Strike;
    }
    if afford.gamble {
        Move::Gamble
    } else {
        Move::Observe
    }
}

/// Default for archetypes without a registered heuristic.
pub fn fallback(_ctx: &PolicyContext<'_>, afford: Affordability, _roll: f64) -> Move {
    strike_or_observe(afford)
}
