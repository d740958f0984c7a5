//! Tubes - a fixed-timestep tube-dodging game.
//!
//! The simulation core lives in [`sim`]; [`render`] turns round state into draw
//! commands, and [`ui`] is the terminal front end that displays them.

pub mod config;
pub mod constants;
pub mod input;
pub mod render;
pub mod sim;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
pub use sim::{Direction, EndReason, Round, RoundState, TickInput};
