//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = from the clock)
    pub seed: Option<u64>,

    /// Rounds still running after this many ticks are cut off
    pub max_ticks_per_run: u64,

    /// Autopilot id, see `PILOT_IDS`
    pub pilot: String,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_ticks_per_run: 20_000,
            pilot: "gap-seeker".to_string(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for smoke tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_ticks_per_run: 2_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
