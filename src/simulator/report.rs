//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// How a simulated round finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEnd {
    Collision,
    Stopped,
    TimedOut,
}

/// Result of a single simulated round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub end: RunEnd,
    /// Tubes spawned during the round (excludes the initial layout).
    pub tubes_spawned: u32,
}

/// Aggregated results from multiple simulated rounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub pilot: String,
    pub base_seed: u64,
    pub num_runs: u32,
    pub collisions: u32,
    pub stops: u32,
    pub timeouts: u32,
    pub mean_score: f64,
    pub median_score: u32,
    pub max_score: u32,
    pub mean_ticks: f64,
    /// score -> number of runs
    pub score_distribution: BTreeMap<u32, u32>,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(pilot: &str, base_seed: u64, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |end: RunEnd| runs.iter().filter(|r| r.end == end).count() as u32;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);
        let max_score = scores.last().copied().unwrap_or(0);

        let divisor = num_runs.max(1) as f64;
        let mean_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let mean_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            pilot: pilot.to_string(),
            base_seed,
            num_runs,
            collisions: count(RunEnd::Collision),
            stops: count(RunEnd::Stopped),
            timeouts: count(RunEnd::TimedOut),
            mean_score,
            median_score,
            max_score,
            mean_ticks,
            score_distribution,
            runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══════════════════════════════════════\n");
        out.push_str(&format!(" Pilot:        {}\n", self.pilot));
        out.push_str(&format!(" Base seed:    {}\n", self.base_seed));
        out.push_str(&format!(" Runs:         {}\n", self.num_runs));
        out.push_str(&format!(
            " Ended by:     {} collisions, {} stops, {} timeouts\n",
            self.collisions, self.stops, self.timeouts
        ));
        out.push_str("───────────────────────────────────────\n");
        out.push_str(&format!(" Mean score:   {:.2}\n", self.mean_score));
        out.push_str(&format!(" Median score: {}\n", self.median_score));
        out.push_str(&format!(" Best score:   {}\n", self.max_score));
        out.push_str(&format!(" Mean ticks:   {:.1}\n", self.mean_ticks));
        out.push_str("───────────────────────────────────────\n");
        out.push_str(" Score distribution:\n");
        let widest = self.score_distribution.values().copied().max().unwrap_or(1).max(1);
        for (score, runs) in &self.score_distribution {
            let bar = (*runs as usize * 30).div_ceil(widest as usize);
            out.push_str(&format!(" {:>5} │{} {}\n", score, "█".repeat(bar), runs));
        }
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
