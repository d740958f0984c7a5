//! Round context and the per-tick state machine.

use super::collision::first_collision;
use super::motion::{clamp, move_entity};
use super::obstacles::{ObstacleTrack, TrackSettings};
use super::score::{update_score, PassedSet};
use super::types::{Direction, Entity, Field, Obstacle, ObstacleId, TubeGeometry};
use rand::Rng;

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The entity overlapped this tube.
    Collision(ObstacleId),
    /// The shell raised the stop signal.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Running,
    /// Terminal. Further ticks have no effect.
    Ended(EndReason),
}

/// Input sampled by the shell for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub direction: Direction,
    pub stop: bool,
}

impl TickInput {
    pub fn steer(direction: Direction) -> Self {
        Self {
            direction,
            stop: false,
        }
    }

    pub fn stop() -> Self {
        Self {
            direction: Direction::None,
            stop: true,
        }
    }
}

/// What the shell needs to decide between drawing and ending the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub state: RoundState,
    pub score: u32,
}

/// Result of one tick - captures everything that happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub state: RoundState,
    pub score: u32,
    /// Tubes credited during this tick.
    pub scored: u32,
    /// Tube spawned during this tick.
    pub spawned: Option<ObstacleId>,
}

/// Tunables a round is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSettings {
    pub track: TrackSettings,
    pub geometry: TubeGeometry,
    pub speed: f64,
    pub start_x: f64,
    pub start_y: f64,
}

/// Everything one play-through owns. Dropped when the round is over.
#[derive(Debug, Clone)]
pub struct Round<R: Rng> {
    field: Field,
    geometry: TubeGeometry,
    speed: f64,
    track: ObstacleTrack<R>,
    entity: Entity,
    passed: PassedSet,
    score: u32,
    state: RoundState,
    tick_count: u64,
}

impl<R: Rng> Round<R> {
    /// Start a round: initial tube layout, entity at the start point, zero score.
    pub fn new(settings: RoundSettings, rng: R) -> Self {
        let field = settings.track.field;
        let entity = clamp(&Entity::new(settings.start_x, settings.start_y), &field);
        Self {
            field,
            geometry: settings.geometry,
            speed: settings.speed,
            track: ObstacleTrack::new(settings.track, rng),
            entity,
            passed: PassedSet::new(),
            score: 0,
            state: RoundState::Running,
            tick_count: 0,
        }
    }

    /// Run one fixed-timestep tick.
    ///
    /// Order: stop check, advance tubes, move and clamp the entity, collision,
    /// score. A collision ends the round before the score update.
    pub fn tick(&mut self, input: TickInput) -> TickOutcome {
        if self.state != RoundState::Running {
            return self.tick_outcome(0, None);
        }

        if input.stop {
            self.state = RoundState::Ended(EndReason::Stopped);
            log::info!("round stopped at tick {} with score {}", self.tick_count, self.score);
            return self.tick_outcome(0, None);
        }

        let spawned = self.track.advance(self.speed);
        self.entity = move_entity(&self.entity, input.direction, &self.field);
        self.tick_count += 1;

        log::trace!(
            "tick {}: entity=({:.1}, {:.1}) tubes={:?}",
            self.tick_count,
            self.entity.x,
            self.entity.y,
            self.track.obstacles().iter().map(|o| o.x).collect::<Vec<_>>()
        );

        if let Some(hit) = first_collision(
            &self.entity,
            self.track.obstacles(),
            &self.field,
            &self.geometry,
        ) {
            self.state = RoundState::Ended(EndReason::Collision(hit.id));
            log::info!(
                "round over: hit tube {} at tick {} with score {}",
                hit.id.0,
                self.tick_count,
                self.score
            );
            return self.tick_outcome(0, spawned);
        }

        let scored = update_score(
            self.entity.x,
            self.track.obstacles(),
            &mut self.passed,
            self.geometry.width,
        );
        self.score += scored;
        self.tick_outcome(scored, spawned)
    }

    fn tick_outcome(&self, scored: u32, spawned: Option<ObstacleId>) -> TickOutcome {
        TickOutcome {
            state: self.state,
            score: self.score,
            scored,
            spawned,
        }
    }

    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome {
            state: self.state,
            score: self.score,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.track.obstacles()
    }

    pub fn track(&self) -> &ObstacleTrack<R> {
        &self.track
    }

    pub fn passed(&self) -> &PassedSet {
        &self.passed
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn geometry(&self) -> &TubeGeometry {
        &self.geometry
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}
