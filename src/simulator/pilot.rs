//! Autopilots that steer a round without a human.

use crate::sim::round::Round;
use crate::sim::types::{Direction, Entity, Field, Obstacle, TubeGeometry};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Ids accepted by [`create_pilot`].
pub const PILOT_IDS: [&str; 2] = ["gap-seeker", "drifter"];

/// What a pilot may look at before choosing a direction.
#[derive(Debug, Clone, Copy)]
pub struct PilotView<'a> {
    pub entity: Entity,
    pub obstacles: &'a [Obstacle],
    pub field: Field,
    pub geometry: TubeGeometry,
}

impl<'a> PilotView<'a> {
    pub fn of<R: Rng>(round: &'a Round<R>) -> Self {
        Self {
            entity: *round.entity(),
            obstacles: round.obstacles(),
            field: *round.field(),
            geometry: *round.geometry(),
        }
    }

    /// Closest live tube whose trailing edge is not yet behind the entity.
    pub fn next_tube(&self) -> Option<&'a Obstacle> {
        self.obstacles
            .iter()
            .filter(|t| t.is_live() && t.trailing_edge(&self.geometry) >= self.entity.x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
    }
}

pub trait Pilot {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn reset(&mut self, seed: u64);
    fn steer(&mut self, view: &PilotView) -> Direction;
}

/// Holds its column and steers towards the middle of the next opening.
#[derive(Debug, Clone, Default)]
pub struct GapSeeker;

impl GapSeeker {
    /// Distance from the target row treated as on target.
    const DEADBAND: f64 = 0.5;
}

impl Pilot for GapSeeker {
    fn id(&self) -> &'static str {
        "gap-seeker"
    }

    fn description(&self) -> &'static str {
        "steers vertically towards the centre of the next opening"
    }

    fn reset(&mut self, _seed: u64) {}

    fn steer(&mut self, view: &PilotView) -> Direction {
        let target = match view.next_tube() {
            Some(tube) => view.geometry.opening_center(&view.field, tube.gap_height),
            None => view.field.height as f64 / 2.0,
        };
        let offset = view.entity.y - target;
        if offset > Self::DEADBAND {
            Direction::N
        } else if offset < -Self::DEADBAND {
            Direction::S
        } else {
            Direction::None
        }
    }
}

/// Picks a uniformly random direction every tick. A baseline for comparisons.
#[derive(Debug, Clone)]
pub struct Drifter {
    rng: ChaCha8Rng,
}

impl Default for Drifter {
    fn default() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }
}

impl Pilot for Drifter {
    fn id(&self) -> &'static str {
        "drifter"
    }

    fn description(&self) -> &'static str {
        "random direction every tick"
    }

    fn reset(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5EED_D21F);
    }

    fn steer(&mut self, _view: &PilotView) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

pub fn create_pilot(id: &str) -> Option<Box<dyn Pilot>> {
    match id {
        "gap-seeker" => Some(Box::new(GapSeeker)),
        "drifter" => Some(Box::<Drifter>::default()),
        _ => None,
    }
}
