//! Tube spawning, scrolling and retirement.

use super::types::{Field, Obstacle, ObstacleId};
use crate::constants::INITIAL_GAP_HEIGHTS;
use rand::Rng;

/// Append-only record of every gap height used in a round, in spawn order.
///
/// Never empty. Reads go through [`GapHeights::cyclic`], which wraps the index
/// by the current length, so any spawn ordinal maps to a valid entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapHeights {
    heights: Vec<i32>,
}

impl GapHeights {
    /// Start from the given heights, falling back to the built-in list when empty.
    pub fn new(initial: &[i32]) -> Self {
        let heights = if initial.is_empty() {
            INITIAL_GAP_HEIGHTS.to_vec()
        } else {
            initial.to_vec()
        };
        Self { heights }
    }

    pub fn push(&mut self, height: i32) {
        self.heights.push(height);
    }

    pub fn cyclic(&self, index: usize) -> i32 {
        self.heights[index % self.heights.len()]
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.heights
    }
}

/// Parameters the track needs for a round.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSettings {
    pub field: Field,
    /// The next tube spawns once the rightmost one is left of `width - spawn_interval`.
    pub spawn_interval: f64,
    /// Spawn position beyond the right edge.
    pub lead_in: f64,
    pub min_gap: i32,
    pub max_gap: i32,
    pub initial_gap_heights: Vec<i32>,
    /// Offsets past the right edge for the tubes present at round start.
    pub initial_offsets: Vec<f64>,
}

/// Owns the live tubes of one round and the generator that sizes new ones.
#[derive(Debug, Clone)]
pub struct ObstacleTrack<R: Rng> {
    obstacles: Vec<Obstacle>,
    gap_heights: GapHeights,
    next_id: u64,
    settings: TrackSettings,
    rng: R,
}

impl<R: Rng> ObstacleTrack<R> {
    /// Lay out the round-start tubes. Their heights come from the seed list by spawn ordinal.
    ///
    /// Offsets are laid out left to right whatever order they are given in, so the
    /// last tube is always the rightmost.
    pub fn new(settings: TrackSettings, rng: R) -> Self {
        let gap_heights = GapHeights::new(&settings.initial_gap_heights);
        let spawn_x = settings.field.width as f64;
        let mut offsets = settings.initial_offsets.clone();
        offsets.sort_by(f64::total_cmp);
        let obstacles: Vec<Obstacle> = offsets
            .iter()
            .enumerate()
            .map(|(ordinal, offset)| Obstacle {
                id: ObstacleId(ordinal as u64),
                x: spawn_x + offset,
                gap_height: gap_heights.cyclic(ordinal),
            })
            .collect();

        Self {
            next_id: obstacles.len() as u64,
            obstacles,
            gap_heights,
            settings,
            rng,
        }
    }

    /// Tubes in spawn order; the last one is the rightmost.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn gap_heights(&self) -> &GapHeights {
        &self.gap_heights
    }

    pub fn settings(&self) -> &TrackSettings {
        &self.settings
    }

    pub fn rightmost(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    /// Scroll every tube left by `speed`, retire tubes at or past the origin, and
    /// spawn at most one new tube. Returns the id of the spawned tube, if any.
    pub fn advance(&mut self, speed: f64) -> Option<ObstacleId> {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
        self.obstacles.retain(Obstacle::is_live);

        if self.needs_spawn() {
            Some(self.spawn())
        } else {
            None
        }
    }

    fn needs_spawn(&self) -> bool {
        let threshold = self.settings.field.width as f64 - self.settings.spawn_interval;
        match self.rightmost() {
            None => true,
            Some(last) => last.x < threshold,
        }
    }

    fn spawn(&mut self) -> ObstacleId {
        let gap_height = self
            .rng
            .gen_range(self.settings.min_gap..=self.settings.max_gap);
        self.gap_heights.push(gap_height);

        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        let x = self.settings.field.width as f64 + self.settings.lead_in;
        self.obstacles.push(Obstacle { id, x, gap_height });

        log::debug!("spawned tube {} at x={:.1} gap={}", id.0, x, gap_height);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn settings() -> TrackSettings {
        TrackSettings {
            field: Field::new(84, 48),
            spawn_interval: 20.0,
            lead_in: 10.0,
            min_gap: 10,
            max_gap: 31,
            initial_gap_heights: vec![20, 25, 15, 30],
            initial_offsets: vec![10.0, 30.0, 50.0],
        }
    }

    fn track() -> ObstacleTrack<ChaCha8Rng> {
        ObstacleTrack::new(settings(), ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn test_initial_layout() {
        let track = track();
        let xs: Vec<f64> = track.obstacles().iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![94.0, 114.0, 134.0]);
        let gaps: Vec<i32> = track.obstacles().iter().map(|o| o.gap_height).collect();
        assert_eq!(gaps, vec![20, 25, 15]);
        assert_eq!(track.gap_heights().len(), 4);
    }

    #[test]
    fn test_unordered_offsets_laid_out_left_to_right() {
        let mut unordered = settings();
        unordered.initial_offsets = vec![50.0, 30.0, 10.0];
        let mut track = ObstacleTrack::new(unordered, ChaCha8Rng::seed_from_u64(42));
        let xs: Vec<f64> = track.obstacles().iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![94.0, 114.0, 134.0]);

        for _ in 0..400 {
            let before: Vec<f64> = track.obstacles().iter().map(|o| o.x - 1.5).collect();
            if let Some(id) = track.advance(1.5) {
                let widest = before.iter().copied().fold(f64::MIN, f64::max);
                assert!(widest < 64.0, "spawned {:?} with a tube still at x={}", id, widest);
            }
            assert!(track.obstacles().windows(2).all(|pair| pair[0].x < pair[1].x));
        }
    }

    #[test]
    fn test_advance_shifts_left() {
        let mut track = track();
        let spawned = track.advance(1.5);
        assert!(spawned.is_none());
        assert!((track.obstacles()[0].x - 92.5).abs() < f64::EPSILON);
        assert!((track.obstacles()[2].x - 132.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advance_culls_at_origin() {
        let mut track = track();
        track.obstacles[0].x = 1.5;
        track.advance(1.5);
        assert!(track.obstacles().iter().all(|o| o.x > 0.0));
        assert_eq!(track.obstacles().len(), 2);
    }

    #[test]
    fn test_spawn_when_rightmost_crosses_threshold() {
        let mut track = track();
        track.obstacles.truncate(1);
        track.obstacles[0].x = 65.0;
        let spawned = track.advance(1.5);
        assert_eq!(spawned, Some(ObstacleId(3)));
        let last = track.rightmost().expect("spawned tube");
        assert!((last.x - 94.0).abs() < f64::EPSILON);
        assert_eq!(track.gap_heights().len(), 5);
        assert_eq!(track.gap_heights().as_slice().last(), Some(&last.gap_height));
    }

    #[test]
    fn test_no_spawn_exactly_at_threshold() {
        let mut track = track();
        track.obstacles.truncate(1);
        track.obstacles[0].x = 65.5;
        assert!(track.advance(1.5).is_none());
    }

    #[test]
    fn test_spawn_when_empty() {
        let mut track = track();
        track.obstacles.clear();
        let spawned = track.advance(1.5);
        assert!(spawned.is_some());
        assert_eq!(track.obstacles().len(), 1);
    }

    #[test]
    fn test_single_spawn_after_mass_cull() {
        let mut track = track();
        for obstacle in &mut track.obstacles {
            obstacle.x = 1.0;
        }
        track.advance(1.5);
        assert_eq!(track.obstacles().len(), 1);
    }

    #[test]
    fn test_spawned_gap_heights_in_range() {
        let mut track = track();
        for _ in 0..2000 {
            track.advance(1.5);
        }
        for &height in &track.gap_heights().as_slice()[4..] {
            assert!((10..=31).contains(&height), "height {} out of range", height);
        }
        assert!(track.gap_heights().len() > 50);
    }

    #[test]
    fn test_ids_increase_in_spawn_order() {
        let mut track = track();
        for _ in 0..500 {
            track.advance(1.5);
        }
        let ids: Vec<u64> = track.obstacles().iter().map(|o| o.id.0).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_gap_heights_cyclic_access() {
        let heights = GapHeights::new(&[20, 25, 15, 30]);
        assert_eq!(heights.cyclic(0), 20);
        assert_eq!(heights.cyclic(3), 30);
        assert_eq!(heights.cyclic(4), 20);
        assert_eq!(heights.cyclic(9), 25);
    }

    #[test]
    fn test_gap_heights_never_empty() {
        let heights = GapHeights::new(&[]);
        assert!(!heights.is_empty());
        assert_eq!(heights.as_slice(), &INITIAL_GAP_HEIGHTS);
    }
}
