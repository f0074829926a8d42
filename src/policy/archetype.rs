//! Opponent archetypes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Named opponent behavioral profile.
///
/// `Custom` lets callers register additional archetypes in a
/// [`PolicyTable`](super::PolicyTable); unregistered ones use the default
/// fallback heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Aggressive; strikes hard and often.
    Impulse,
    /// Defensive; hides behind shields and waits.
    Wall,
    /// Patient; punishes low willpower and combos off Focus.
    Observer,
    /// Chaotic; leans on Gamble.
    Gambler,
    /// Declared but without a distinct heuristic by default.
    Trickster,
    /// Counter-picks the opponent's most common habit.
    Mirror,
    /// Caller-defined archetype.
    Custom(u16),
}

/// Static display metadata for a built-in archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchetypeProfile {
    /// Display name.
    pub name: &'static str,
    /// Subtitle.
    pub title: &'static str,
    /// Difficulty, 1-5. Scales the XP a win awards.
    pub difficulty: u32,
}

impl Archetype {
    /// All built-in archetypes, in unlock order.
    pub const BUILT_IN: [Archetype; 6] = [
        Archetype::Impulse,
        Archetype::Wall,
        Archetype::Observer,
        Archetype::Gambler,
        Archetype::Trickster,
        Archetype::Mirror,
    ];

    /// Display metadata. `None` for custom archetypes.
    #[must_use]
    pub const fn profile(self) -> Option<ArchetypeProfile> {
        let (name, title, difficulty) = match self {
            Archetype::Impulse => ("The Impulse", "Avatar of Aggression", 1),
            Archetype::Wall => ("The Wall", "Avatar of Fear", 2),
            Archetype::Observer => ("The Observer", "Avatar of Judgment", 3),
            Archetype::Gambler => ("The Gambler", "Avatar of Chaos", 3),
            Archetype::Trickster => ("The Trickster", "Avatar of Deceit", 4),
            Archetype::Mirror => ("The Mirror", "Your Shadow Self", 5),
            Archetype::Custom(_) => return None,
        };
        Some(ArchetypeProfile {
            name,
            title,
            difficulty,
        })
    }

    /// Difficulty rating. Custom archetypes rate 1.
    #[must_use]
    pub const fn difficulty(self) -> u32 {
        match self.profile() {
            Some(profile) => profile.difficulty,
            None => 1,
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.profile()) {
            (_, Some(profile)) => f.write_str(profile.name),
            (Archetype::Custom(id), None) => write!(f, "Custom({id})"),
            (_, None) => write!(f, "{self:?}"),
        }
    }
}

/// Unknown archetype name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown archetype `{0}`")]
pub struct ParseArchetypeError(pub String);

impl FromStr for Archetype {
    type Err = ParseArchetypeError;

    /// Parse an archetype id such as `impulse` or `custom:7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let archetype = match lower.as_str() {
            "impulse" => Archetype::Impulse,
            "wall" => Archetype::Wall,
            "observer" => Archetype::Observer,
            "gambler" => Archetype::Gambler,
            "trickster" => Archetype::Trickster,
            "mirror" => Archetype::Mirror,
            other => other
                .strip_prefix("custom:")
                .and_then(|id| id.parse().ok())
                .map(Archetype::Custom)
                .ok_or_else(|| ParseArchetypeError(s.to_string()))?,
        };
        Ok(archetype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty() {
        assert_eq!(Archetype::Impulse.difficulty(), 1);
        assert_eq!(Archetype::Mirror.difficulty(), 5);
        assert_eq!(Archetype::Custom(9).difficulty(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Archetype::Wall.to_string(), "The Wall");
        assert_eq!(Archetype::Custom(3).to_string(), "Custom(3)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("IMPULSE".parse(), Ok(Archetype::Impulse));
        assert_eq!(" mirror ".parse(), Ok(Archetype::Mirror));
        assert_eq!("custom:12".parse(), Ok(Archetype::Custom(12)));
        assert_eq!(
            "jester".parse::<Archetype>(),
            Err(ParseArchetypeError("jester".to_string()))
        );
        assert!("custom:x".parse::<Archetype>().is_err());
    }

    #[test]
    fn test_serialization() {
        for archetype in Archetype::BUILT_IN.into_iter().chain([Archetype::Custom(4)]) {
            let json = serde_json::to_string(&archetype).unwrap();
            let back: Archetype = serde_json::from_str(&json).unwrap();
            assert_eq!(archetype, back);
        }
    }
}
