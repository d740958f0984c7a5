//! Headless simulator for tuning and regression checks.
//!
//! Plays many seeded rounds with an autopilot and aggregates the scores. It
//! drives the same `Round` as the terminal shell, so results match real play.

mod config;
mod pilot;
mod report;
mod runner;

pub use config::SimConfig;
pub use pilot::{create_pilot, Drifter, GapSeeker, Pilot, PilotView, PILOT_IDS};
pub use report::{RunEnd, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
