//! Turn rules: resolution and reaction classification.
//!
//! - `resolver`: pure turn resolution
//! - `outcome`: the immutable `TurnOutcome` value and its events
//! - `reaction`: reaction category derived from an outcome

pub mod outcome;
pub mod reaction;
pub mod resolver;

pub use outcome::{SideResult, TurnEvent, TurnOutcome};
pub use reaction::{Reaction, HIGH_DAMAGE_THRESHOLD};
pub use resolver::{Resolver, SideInput};
