//! Match state: folds turn outcomes into a best-of-N duel.
//!
//! `Duel` owns everything that persists between turns: health, willpower,
//! focus, round wins and history. Each turn it builds the resolver inputs
//! from its own state, resolves, and folds the outcome back in.
//!
//! ## Round Rules
//!
//! - A round ends when either side's HP reaches 0 after a turn
//! - The side with strictly more remaining HP wins the round; an exact tie
//!   goes to the ai side
//! - After a round, HP and willpower reset; focus carries over
//! - The first side to `win_rounds` round wins takes the match
//!
//! ## Example
//!
//! ```
//! use duel_core::core::{GameRng, Move};
//! use duel_core::game::Duel;
//! use duel_core::policy::{Archetype, ArchetypePolicy};
//!
//! let mut duel = Duel::default();
//! let mut rng = GameRng::new(7);
//! let opponent = ArchetypePolicy::new(Archetype::Wall);
//!
//! let report = duel.play_vs_policy(Move::Observe, &opponent, &mut rng).unwrap();
//! assert_eq!(report.outcome.player().will, 100);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::{
    CombatantState, Move, MoveHistory, PerSide, RandomSource, RulesConfig, Side,
};
use crate::policy::{Archetype, OpponentPolicy, PolicyContext};
use crate::rules::{Resolver, SideInput, TurnOutcome};

use super::summary::{MatchLog, MatchResult, MoveCounts};

/// Errors from driving a duel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DuelError {
    /// A turn was submitted after the match ended.
    #[error("match is already over ({winner} won)")]
    MatchOver {
        /// Side that won the match.
        winner: Side,
    },

    /// `Move::None` is not a legal choice.
    #[error("{side} requested Move::None")]
    NoneRequested {
        /// Side that submitted the move.
        side: Side,
    },
}

/// One resolved turn in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round the turn belongs to (starts at 1).
    pub round: u32,
    /// The resolver's outcome.
    pub outcome: TurnOutcome,
}

/// What one call to [`Duel::play_turn`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The resolver's outcome.
    pub outcome: TurnOutcome,
    /// Set if this turn ended a round.
    pub round_winner: Option<Side>,
    /// Set if this turn ended the match.
    pub match_winner: Option<Side>,
}

/// A best-of-N duel between two sides.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Duel {
    resolver: Resolver,
    combatants: PerSide<CombatantState>,
    wins: PerSide<u32>,
    round: u32,
    history: Vector<TurnRecord>,
    /// Effective moves of this match only.
    moves: PerSide<MoveHistory>,
    /// Player moves as the opponent policy sees them: lifetime history
    /// followed by this match.
    player_lifetime: MoveHistory,
    winner: Option<Side>,
}

impl Default for Duel {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl Duel {
    /// Start a match.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        let combatants = PerSide::splat(CombatantState::fresh(&config));
        Self {
            resolver: Resolver::new(config),
            combatants,
            wins: PerSide::default(),
            round: 1,
            history: Vector::new(),
            moves: PerSide::default(),
            player_lifetime: MoveHistory::new(),
            winner: None,
        }
    }

    /// Seed the player's lifetime history consulted by opponent policies.
    #[must_use]
    pub fn with_prior_history(mut self, prior: MoveHistory) -> Self {
        let mut lifetime = prior;
        lifetime.extend_from(&self.moves[Side::Player]);
        self.player_lifetime = lifetime;
        self
    }

    /// Rules in effect.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        self.resolver.config()
    }

    /// Current state of a side.
    #[must_use]
    pub fn combatant(&self, side: Side) -> &CombatantState {
        &self.combatants[side]
    }

    /// Round wins per side.
    #[must_use]
    pub fn wins(&self) -> PerSide<u32> {
        self.wins
    }

    /// Current round (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// A side's effective moves in this match.
    #[must_use]
    pub fn moves(&self, side: Side) -> &MoveHistory {
        &self.moves[side]
    }

    /// Match winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Whether the match is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Decision context for the ai side.
    #[must_use]
    pub fn opponent_context(&self) -> PolicyContext<'_> {
        PolicyContext::new(
            &self.moves[Side::Ai],
            &self.player_lifetime,
            self.combatants[Side::Ai].will,
            self.combatants[Side::Player].will,
            self.config().costs,
        )
    }

    /// Decision context for the player side, for policy-vs-policy play.
    ///
    /// Uses only this match's ai moves as the opponent history.
    #[must_use]
    pub fn player_context(&self) -> PolicyContext<'_> {
        PolicyContext::new(
            &self.player_lifetime,
            &self.moves[Side::Ai],
            self.combatants[Side::Player].will,
            self.combatants[Side::Ai].will,
            self.config().costs,
        )
    }

    /// Ask a policy for the ai side's next move.
    pub fn choose_opponent_move(
        &self,
        policy: &dyn OpponentPolicy,
        rng: &mut dyn RandomSource,
    ) -> Move {
        policy.choose_move(&self.opponent_context(), rng)
    }

    /// Play a turn where the ai side is driven by `policy`.
    ///
    /// The policy decision and the gamble rolls draw from the same `rng`,
    /// decision first.
    pub fn play_vs_policy(
        &mut self,
        player_move: Move,
        policy: &dyn OpponentPolicy,
        rng: &mut dyn RandomSource,
    ) -> Result<TurnReport, DuelError> {
        self.ensure_running()?;
        let ai_move = self.choose_opponent_move(policy, rng);
        self.play_turn(player_move, ai_move, rng)
    }

    /// Resolve one turn with both sides' moves and fold the outcome in.
    pub fn play_turn<R>(
        &mut self,
        player_move: Move,
        ai_move: Move,
        rng: &mut R,
    ) -> Result<TurnReport, DuelError>
    where
        R: RandomSource + ?Sized,
    {
        self.ensure_running()?;
        for (side, mv) in [(Side::Player, player_move), (Side::Ai, ai_move)] {
            if !mv.is_choice() {
                return Err(DuelError::NoneRequested { side });
            }
        }

        let outcome = self.resolver.resolve(
            self.input(Side::Player, player_move),
            self.input(Side::Ai, ai_move),
            rng,
        );

        let config = self.resolver.config();
        let raw_hp = PerSide::from_fn(|side| self.combatants[side].hp - outcome.damage(side));

        for side in Side::BOTH {
            let combatant = &mut self.combatants[side];
            combatant.take_damage(outcome.damage(side), config);
            combatant.will = outcome.will(side);
            combatant.focused = outcome.focus_after(side);
            self.moves[side].push(outcome.effective_move(side));
        }
        self.player_lifetime.push(outcome.effective_move(Side::Player));

        self.history.push_back(TurnRecord {
            round: self.round,
            outcome: outcome.clone(),
        });

        let mut report = TurnReport {
            outcome,
            round_winner: None,
            match_winner: None,
        };

        if raw_hp[Side::Player] <= 0 || raw_hp[Side::Ai] <= 0 {
            let winner = if raw_hp[Side::Player] > raw_hp[Side::Ai] {
                Side::Player
            } else {
                Side::Ai
            };
            self.wins[winner] += 1;
            report.round_winner = Some(winner);
            info!(round = self.round, %winner, wins = self.wins[winner], "round over");

            if self.wins[winner] >= config.win_rounds {
                self.winner = Some(winner);
                report.match_winner = Some(winner);
                info!(
                    %winner,
                    player_wins = self.wins[Side::Player],
                    ai_wins = self.wins[Side::Ai],
                    "match over"
                );
            } else {
                self.round += 1;
                for side in Side::BOTH {
                    self.combatants[side].reset_round(config);
                }
            }
        }

        Ok(report)
    }

    /// Post-match log from the player's point of view.
    ///
    /// `None` while the match is still running.
    #[must_use]
    pub fn summary(&self, opponent: Archetype) -> Option<MatchLog> {
        let winner = self.winner?;
        Some(MatchLog {
            opponent,
            result: if winner == Side::Player {
                MatchResult::Win
            } else {
                MatchResult::Loss
            },
            player_wins: self.wins[Side::Player],
            ai_wins: self.wins[Side::Ai],
            counts: MoveCounts::from_history(&self.moves[Side::Player]),
            turns: self.history.len(),
        })
    }

    fn ensure_running(&self) -> Result<(), DuelError> {
        match self.winner {
            Some(winner) => Err(DuelError::MatchOver { winner }),
            None => Ok(()),
        }
    }

    fn input(&self, side: Side, requested: Move) -> SideInput {
        let combatant = &self.combatants[side];
        SideInput::new(requested, combatant.focused, combatant.will)
    }
}
