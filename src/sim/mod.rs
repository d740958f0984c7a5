//! Fixed-timestep tube-dodging simulation.
//!
//! One `Round` owns all mutable state for a single play-through. Each call to
//! `Round::tick` runs the stages in a fixed order: advance tubes, move the
//! entity, check collision, update the score.

pub mod collision;
pub mod motion;
pub mod obstacles;
pub mod round;
pub mod score;
pub mod types;

pub use collision::{check, first_collision};
pub use motion::{clamp, move_entity};
pub use obstacles::{GapHeights, ObstacleTrack};
pub use round::{EndReason, Round, RoundOutcome, RoundState, TickInput, TickOutcome};
pub use score::{update_score, PassedSet};
pub use types::*;
