//! Plays simulated rounds through the real `Round` state machine.

use super::config::SimConfig;
use super::pilot::{Pilot, PilotView};
use super::report::{RunEnd, RunStats, SimReport};
use crate::config::{clock_seed, GameConfig};
use crate::sim::round::{EndReason, Round, RoundState, TickInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig, game: &GameConfig, pilot: &mut dyn Pilot) -> SimReport {
    let base_seed = config.seed.unwrap_or_else(clock_seed);
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = base_seed.wrapping_add(run_idx as u64);
        let stats = simulate_single_run(game, pilot, seed, config.max_ticks_per_run);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - seed {}, score {}, ticks {}, {:?}",
                run_idx + 1,
                config.num_runs,
                stats.seed,
                stats.score,
                stats.ticks,
                stats.end
            );
        }
        runs.push(stats);
    }

    let report = SimReport::from_runs(pilot.id(), base_seed, runs);
    log::info!(
        "simulated {} rounds with {}: mean score {:.2}, best {}",
        report.num_runs,
        report.pilot,
        report.mean_score,
        report.max_score
    );
    report
}

/// Play one round to its end or to `max_ticks`.
pub fn simulate_single_run(
    game: &GameConfig,
    pilot: &mut dyn Pilot,
    seed: u64,
    max_ticks: u64,
) -> RunStats {
    pilot.reset(seed);
    let mut round = Round::new(game.round_settings(), ChaCha8Rng::seed_from_u64(seed));
    let mut tubes_spawned = 0;

    while round.is_running() && round.tick_count() < max_ticks {
        let direction = pilot.steer(&PilotView::of(&round));
        let outcome = round.tick(TickInput::steer(direction));
        if outcome.spawned.is_some() {
            tubes_spawned += 1;
        }
    }

    let end = match round.state() {
        RoundState::Running => RunEnd::TimedOut,
        RoundState::Ended(EndReason::Collision(_)) => RunEnd::Collision,
        RoundState::Ended(EndReason::Stopped) => RunEnd::Stopped,
    };

    RunStats {
        seed,
        score: round.score(),
        ticks: round.tick_count(),
        end,
        tubes_spawned,
    }
}
