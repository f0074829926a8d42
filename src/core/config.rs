//! Rules configuration.
//!
//! Every number the resolver, policies and duel fold use lives in
//! `RulesConfig`. The defaults are the tuned values of the shipped game;
//! callers can override individual values with the `with_*` builders or load
//! a partial JSON document where missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::moves::Move;

/// Errors from building or loading a `RulesConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid rules json: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value that must be positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A value that must be non-negative was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Starting willpower outside `[0, max_will]`.
    #[error("start_will {start_will} is outside 0..={max_will}")]
    StartWillOutOfRange {
        /// Configured starting willpower.
        start_will: i32,
        /// Configured willpower ceiling.
        max_will: i32,
    },

    /// Gamble success chance outside `[0, 1]`.
    #[error("gamble_success_chance {0} is outside 0.0..=1.0")]
    ChanceOutOfRange(f64),
}

/// Willpower cost per move. Observe is always free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveCosts {
    /// Cost of Strike.
    pub strike: i32,
    /// Cost of Shield.
    pub shield: i32,
    /// Cost of Gamble.
    pub gamble: i32,
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self {
            strike: 25,
            shield: 15,
            gamble: 35,
        }
    }
}

impl MoveCosts {
    /// Willpower cost of a move.
    ///
    /// Observe and None cost nothing.
    #[must_use]
    pub const fn cost(&self, mv: Move) -> i32 {
        match mv {
            Move::Strike => self.strike,
            Move::Shield => self.shield,
            Move::Gamble => self.gamble,
            Move::Observe | Move::None => 0,
        }
    }

    /// Whether `willpower` covers the cost of `mv`.
    #[must_use]
    pub const fn can_afford(&self, mv: Move, willpower: i32) -> bool {
        matches!(mv, Move::Observe) || willpower >= self.cost(mv)
    }
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Health at the start of every round.
    pub max_hp: i32,

    /// Willpower ceiling.
    pub max_will: i32,

    /// Willpower at the start of every round.
    pub start_will: i32,

    /// Willpower regained by Observe.
    pub will_regen: i32,

    /// Willpower cost per move.
    pub costs: MoveCosts,

    /// Damage of an unfocused Strike.
    pub strike_damage: i32,

    /// Damage of a focused Strike. Replaces `strike_damage`, not scaled.
    pub critical_damage: i32,

    /// Damage a winning Gamble deals to the opponent.
    pub gamble_success_damage: i32,

    /// Damage a failed or reflected Gamble deals to the gambler.
    pub gamble_fail_damage: i32,

    /// Health regained by Observe. Also the per-turn heal ceiling.
    pub observe_heal: i32,

    /// Damage taken when a side cannot afford its move.
    pub exhaustion_damage: i32,

    /// Probability an unfocused Gamble against a non-Shield succeeds.
    pub gamble_success_chance: f64,

    /// Rounds needed to win the match (3 = best of five).
    pub win_rounds: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_hp: 100,
            max_will: 100,
            start_will: 75,
            will_regen: 40,
            costs: MoveCosts::default(),
            strike_damage: 15,
            critical_damage: 25,
            gamble_success_damage: 35,
            gamble_fail_damage: 8,
            observe_heal: 10,
            exhaustion_damage: 10,
            gamble_success_chance: 0.5,
            win_rounds: 3,
        }
    }
}

impl RulesConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    ///
    /// ```
    /// use duel_core::core::RulesConfig;
    ///
    /// let config = RulesConfig::from_json(r#"{ "max_hp": 60, "costs": { "gamble": 40 } }"#).unwrap();
    /// assert_eq!(config.max_hp, 60);
    /// assert_eq!(config.costs.gamble, 40);
    /// assert_eq!(config.costs.strike, 25);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_hp", i64::from(self.max_hp)),
            ("max_will", i64::from(self.max_will)),
            ("win_rounds", i64::from(self.win_rounds)),
        ] {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("will_regen", self.will_regen),
            ("costs.strike", self.costs.strike),
            ("costs.shield", self.costs.shield),
            ("costs.gamble", self.costs.gamble),
            ("strike_damage", self.strike_damage),
            ("critical_damage", self.critical_damage),
            ("gamble_success_damage", self.gamble_success_damage),
            ("gamble_fail_damage", self.gamble_fail_damage),
            ("observe_heal", self.observe_heal),
            ("exhaustion_damage", self.exhaustion_damage),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative {
                    field,
                    value: i64::from(value),
                });
            }
        }

        if !(0..=self.max_will).contains(&self.start_will) {
            return Err(ConfigError::StartWillOutOfRange {
                start_will: self.start_will,
                max_will: self.max_will,
            });
        }

        if !(0.0..=1.0).contains(&self.gamble_success_chance) {
            return Err(ConfigError::ChanceOutOfRange(self.gamble_success_chance));
        }

        Ok(())
    }

    /// Set health per round.
    #[must_use]
    pub fn with_max_hp(mut self, hp: i32) -> Self {
        self.max_hp = hp;
        self
    }

    /// Set the willpower ceiling.
    #[must_use]
    pub fn with_max_will(mut self, will: i32) -> Self {
        self.max_will = will;
        self
    }

    /// Set willpower at round start.
    #[must_use]
    pub fn with_start_will(mut self, will: i32) -> Self {
        self.start_will = will;
        self
    }

    /// Set move costs.
    #[must_use]
    pub fn with_costs(mut self, costs: MoveCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Set the gamble success probability.
    #[must_use]
    pub fn with_gamble_success_chance(mut self, chance: f64) -> Self {
        self.gamble_success_chance = chance;
        self
    }

    /// Set rounds needed to win.
    #[must_use]
    pub fn with_win_rounds(mut self, rounds: u32) -> Self {
        self.win_rounds = rounds;
        self
    }

    /// Clamp a willpower value into `[0, max_will]`.
    #[must_use]
    pub fn clamp_will(&self, will: i32) -> i32 {
        will.clamp(0, self.max_will)
    }
}
