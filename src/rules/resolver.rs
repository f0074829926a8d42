//! Turn resolver.
//!
//! Maps both sides' requested moves, focus flags and willpower to a
//! `TurnOutcome`. Stateless across calls; the only randomness is the Gamble
//! coin-flip, drawn from the injected `RandomSource`.
//!
//! ## Resolution Order
//!
//! 1. Affordability per side: pay the cost, regenerate on Observe, or burn
//!    out (effective move `None`, exhaustion damage, nothing spent)
//! 2. Effective moves interact pairwise; damage is additive, both sides
//!    resolve in the same call
//! 3. Each side's delta is floored at `-observe_heal`
//!
//! Every step reads only the pre-turn snapshot of both sides, so the two
//! sides resolve as if in parallel. Gamble draws are taken player side
//! first, at most one per gambling side, none when the gambler is focused or
//! faces a Shield.
//!
//! ## Example
//!
//! ```
//! use duel_core::core::{Move, ScriptedRolls};
//! use duel_core::rules::{Resolver, SideInput};
//!
//! let resolver = Resolver::default();
//! let mut rng = ScriptedRolls::new([]);
//!
//! let outcome = resolver.resolve(
//!     SideInput::new(Move::Strike, false, 75),
//!     SideInput::new(Move::Shield, false, 75),
//!     &mut rng,
//! );
//!
//! assert_eq!(outcome.player().will, 50);
//! assert_eq!(outcome.ai().will, 60);
//! assert_eq!(outcome.ai().damage, 0);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{Move, PerSide, RandomSource, RulesConfig, Side};

use super::outcome::{SideResult, TurnEvent, TurnOutcome};

/// One side's input to a resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideInput {
    /// The move the side picked. Must not be `Move::None`.
    pub requested: Move,
    /// Whether the side's previous effective move was Observe.
    pub focused: bool,
    /// Willpower before paying for this turn.
    pub willpower: i32,
}

impl SideInput {
    /// Create a side input.
    #[must_use]
    pub const fn new(requested: Move, focused: bool, willpower: i32) -> Self {
        Self {
            requested,
            focused,
            willpower,
        }
    }
}

/// Willpower step result for one side.
#[derive(Clone, Copy, Debug)]
struct Payment {
    effective: Move,
    will: i32,
    exhausted: bool,
}

/// Pure turn resolver.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Resolver {
    config: RulesConfig,
}

impl Resolver {
    /// Create a resolver with the given rules.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// The rules this resolver applies.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Resolve one turn.
    pub fn resolve<R>(&self, player: SideInput, ai: SideInput, rng: &mut R) -> TurnOutcome
    where
        R: RandomSource + ?Sized,
    {
        let config = &self.config;
        let inputs = PerSide::new(player, ai);
        let mut events: SmallVec<[TurnEvent; 4]> = SmallVec::new();

        let mut results = inputs.map(|side, input| {
            let payment = self.pay(side, input);
            SideResult {
                requested: input.requested,
                effective: payment.effective,
                damage: if payment.exhausted {
                    config.exhaustion_damage
                } else {
                    0
                },
                will: payment.will,
                exhausted: payment.exhausted,
                critical: false,
                gamble_won: false,
            }
        });

        for side in Side::BOTH {
            if results[side].exhausted {
                events.push(TurnEvent::Burnout {
                    side,
                    damage: config.exhaustion_damage,
                });
            }
        }

        let effective = results.map(|_, r| r.effective);

        for side in Side::BOTH {
            let opponent = side.opponent();
            let focused = inputs[side].focused;

            match effective[side] {
                Move::Strike => {
                    if effective[opponent] == Move::Shield {
                        events.push(TurnEvent::Blocked { attacker: side });
                    } else {
                        let damage = if focused {
                            config.critical_damage
                        } else {
                            config.strike_damage
                        };
                        results[opponent].damage += damage;
                        results[side].critical = focused;
                        events.push(TurnEvent::Hit {
                            attacker: side,
                            damage,
                            critical: focused,
                        });
                    }
                }
                Move::Gamble => {
                    if effective[opponent] == Move::Shield {
                        results[side].damage += config.gamble_fail_damage;
                        events.push(TurnEvent::Reflected {
                            gambler: side,
                            damage: config.gamble_fail_damage,
                        });
                    } else if focused || rng.next_unit() < config.gamble_success_chance {
                        results[opponent].damage += config.gamble_success_damage;
                        results[side].gamble_won = true;
                        events.push(TurnEvent::GambleWon {
                            gambler: side,
                            damage: config.gamble_success_damage,
                            focused,
                        });
                    } else {
                        results[side].damage += config.gamble_fail_damage;
                        events.push(TurnEvent::GambleBackfired {
                            gambler: side,
                            damage: config.gamble_fail_damage,
                        });
                    }
                }
                Move::Observe => {
                    results[side].damage -= config.observe_heal;
                    events.push(TurnEvent::Recovered {
                        side,
                        heal: config.observe_heal,
                        will: config.will_regen,
                    });
                }
                Move::Shield | Move::None => {}
            }
        }

        for side in Side::BOTH {
            results[side].damage = results[side].damage.max(-config.observe_heal);
        }

        trace!(
            player_move = %results[Side::Player].effective,
            ai_move = %results[Side::Ai].effective,
            player_damage = results[Side::Player].damage,
            ai_damage = results[Side::Ai].damage,
            "resolved turn"
        );

        TurnOutcome::new(results, events)
    }

    /// Step 1 for one side: spend, regenerate, or burn out.
    fn pay(&self, side: Side, input: SideInput) -> Payment {
        let config = &self.config;

        if !(0..=config.max_will).contains(&input.willpower) {
            warn!(%side, willpower = input.willpower, "willpower outside 0..=max_will");
        }

        match input.requested {
            Move::None => {
                warn!(%side, "Move::None requested; resolving as a no-op");
                Payment {
                    effective: Move::None,
                    will: config.clamp_will(input.willpower),
                    exhausted: false,
                }
            }
            Move::Observe => Payment {
                effective: Move::Observe,
                will: config.clamp_will(input.willpower.saturating_add(config.will_regen)),
                exhausted: false,
            },
            requested => {
                let cost = config.costs.cost(requested);
                if input.willpower < cost {
                    Payment {
                        effective: Move::None,
                        will: config.clamp_will(input.willpower),
                        exhausted: true,
                    }
                } else {
                    Payment {
                        effective: requested,
                        will: config.clamp_will(input.willpower - cost),
                        exhausted: false,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRolls;

    fn resolve(player: SideInput, ai: SideInput) -> TurnOutcome {
        Resolver::default().resolve(player, ai, &mut ScriptedRolls::new([]))
    }

    #[test]
    fn test_strike_into_shield() {
        let outcome = resolve(
            SideInput::new(Move::Strike, false, 75),
            SideInput::new(Move::Shield, false, 75),
        );

        assert_eq!(outcome.player().will, 50);
        assert_eq!(outcome.ai().will, 60);
        assert_eq!(outcome.player().damage, 0);
        assert_eq!(outcome.ai().damage, 0);
        assert_eq!(outcome.effective_move(Side::Player), Move::Strike);
        assert_eq!(outcome.effective_move(Side::Ai), Move::Shield);
        assert_eq!(outcome.events(), &[TurnEvent::Blocked { attacker: Side::Player }]);
    }

    #[test]
    fn test_burnout_against_observe() {
        let outcome = resolve(
            SideInput::new(Move::Strike, false, 10),
            SideInput::new(Move::Observe, false, 75),
        );

        assert_eq!(outcome.effective_move(Side::Player), Move::None);
        assert!(outcome.player_exhausted());
        assert_eq!(outcome.player().damage, 10);
        assert_eq!(outcome.player().will, 10);
        assert_eq!(outcome.ai().damage, -10);
        assert_eq!(outcome.ai().will, 100);
    }

    #[test]
    fn test_strike_hits_observer() {
        let outcome = resolve(
            SideInput::new(Move::Strike, false, 75),
            SideInput::new(Move::Observe, false, 75),
        );

        // 15 damage minus 10 heal
        assert_eq!(outcome.ai().damage, 5);
        assert!(!outcome.is_critical());
    }

    #[test]
    fn test_focused_strike_is_critical_for_either_side() {
        let outcome = resolve(
            SideInput::new(Move::Shield, false, 75),
            SideInput::new(Move::Strike, true, 75),
        );
        // Blocked: no critical
        assert!(!outcome.is_critical());

        let outcome = resolve(
            SideInput::new(Move::Gamble, false, 5),
            SideInput::new(Move::Strike, true, 75),
        );
        assert!(outcome.is_critical());
        assert!(outcome.ai().critical);
        // 10 exhaustion + 25 critical
        assert_eq!(outcome.player().damage, 35);
    }

    #[test]
    fn test_gamble_draws() {
        let resolver = Resolver::default();

        let mut win = ScriptedRolls::new([0.1]);
        let outcome = resolver.resolve(
            SideInput::new(Move::Gamble, false, 75),
            SideInput::new(Move::Strike, false, 75),
            &mut win,
        );
        assert!(outcome.player().gamble_won);
        assert_eq!(outcome.ai().damage, 35);
        assert_eq!(outcome.player().damage, 15);
        assert_eq!(win.taken(), 1);

        let mut lose = ScriptedRolls::new([0.9]);
        let outcome = resolver.resolve(
            SideInput::new(Move::Gamble, false, 75),
            SideInput::new(Move::Observe, false, 75),
            &mut lose,
        );
        assert!(!outcome.is_gamble_success());
        assert_eq!(outcome.player().damage, 8);
        assert_eq!(outcome.ai().damage, -10);
    }

    #[test]
    fn test_gamble_draw_order_is_player_first() {
        let mut rolls = ScriptedRolls::new([0.9, 0.1]);
        let outcome = Resolver::default().resolve(
            SideInput::new(Move::Gamble, false, 75),
            SideInput::new(Move::Gamble, false, 75),
            &mut rolls,
        );

        assert!(!outcome.player().gamble_won);
        assert!(outcome.ai().gamble_won);
        assert_eq!(outcome.player().damage, 8 + 35);
        assert_eq!(outcome.ai().damage, 0);
        assert_eq!(rolls.taken(), 2);
    }

    #[test]
    fn test_gamble_into_shield_reflects_without_draw() {
        let mut rolls = ScriptedRolls::new([0.0]);
        let outcome = Resolver::default().resolve(
            SideInput::new(Move::Shield, false, 75),
            SideInput::new(Move::Gamble, false, 75),
            &mut rolls,
        );

        assert_eq!(outcome.ai().damage, 8);
        assert_eq!(outcome.player().damage, 0);
        assert_eq!(rolls.taken(), 0);
    }

    #[test]
    fn test_requested_none_is_noop() {
        let outcome = resolve(
            SideInput::new(Move::None, false, 20),
            SideInput::new(Move::Shield, false, 75),
        );

        assert_eq!(outcome.effective_move(Side::Player), Move::None);
        assert!(!outcome.player_exhausted());
        assert_eq!(outcome.player().damage, 0);
        assert_eq!(outcome.player().will, 20);
    }

    #[test]
    fn test_out_of_range_will_is_clamped() {
        let outcome = resolve(
            SideInput::new(Move::Shield, false, 250),
            SideInput::new(Move::Observe, false, -30),
        );

        assert_eq!(outcome.player().will, 100);
        assert_eq!(outcome.ai().will, 10);
    }

    #[test]
    fn test_both_exhausted() {
        let outcome = resolve(
            SideInput::new(Move::Gamble, false, 0),
            SideInput::new(Move::Strike, false, 0),
        );

        assert!(outcome.player_exhausted());
        assert!(outcome.ai_exhausted());
        assert_eq!(outcome.player().damage, 10);
        assert_eq!(outcome.ai().damage, 10);
        assert_eq!(outcome.player().will, 0);
        assert_eq!(outcome.ai().will, 0);
    }
}
