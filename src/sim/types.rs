//! Data model shared by the simulation stages.

use crate::constants::{EDGE_INSET, EDGE_MIN};
use serde::{Deserialize, Serialize};

/// Immutable bounds of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn min_x(&self) -> f64 {
        EDGE_MIN
    }

    pub fn max_x(&self) -> f64 {
        self.width as f64 - EDGE_INSET
    }

    pub fn min_y(&self) -> f64 {
        EDGE_MIN
    }

    pub fn max_y(&self) -> f64 {
        self.height as f64 - EDGE_INSET
    }

    /// Clamp a raw point into the region the entity may occupy.
    pub fn clamp_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x.clamp(self.min_x(), self.max_x()),
            y.clamp(self.min_y(), self.max_y()),
        )
    }
}

/// Tube dimensions that collision, scoring and drawing agree on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeGeometry {
    /// Horizontal extent; a tube at `x` spans `[x, x + width]`.
    pub width: f64,
    /// Height of the upper pillar is `field height - gap - gap_margin`.
    pub gap_margin: i32,
}

impl TubeGeometry {
    /// Top row of the lower pillar. Anything at or below it is solid.
    pub fn lower_pillar_top(&self, field: &Field, gap_height: i32) -> i32 {
        field.height - gap_height - 1
    }

    /// Bottom row of the upper pillar. Anything at or above it is solid.
    pub fn upper_pillar_bottom(&self, field: &Field, gap_height: i32) -> i32 {
        field.height - gap_height - self.gap_margin
    }

    /// Vertical centre of the passable opening.
    pub fn opening_center(&self, field: &Field, gap_height: i32) -> f64 {
        let top = self.upper_pillar_bottom(field, gap_height) as f64;
        let bottom = self.lower_pillar_top(field, gap_height) as f64;
        (top + bottom) / 2.0
    }
}

/// Spawn ordinal of a tube within its round. Unique per tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId(pub u64);

/// A tube pair scrolling right to left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    /// Leading edge; decreases every tick.
    pub x: f64,
    /// Height of the lower pillar, fixed at spawn.
    pub gap_height: i32,
}

impl Obstacle {
    /// Tubes at or left of the field origin no longer collide or score.
    pub fn is_live(&self) -> bool {
        self.x > 0.0
    }

    pub fn trailing_edge(&self, geometry: &TubeGeometry) -> f64 {
        self.x + geometry.width
    }

    pub fn spans_x(&self, x: f64, geometry: &TubeGeometry) -> bool {
        x >= self.x && x <= self.trailing_edge(geometry)
    }
}

/// Which sprite the entity shows. Has no effect on movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
}

/// Steering signal for one tick. North is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Direction::None,
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit step on each axis as `(dx, dy)`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::None => (0, 0),
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
        }
    }

    /// Build a direction from axis signs. Only the sign of each input matters.
    pub fn from_axes(dx: i8, dy: i8) -> Direction {
        match (dx.signum(), dy.signum()) {
            (0, -1) => Direction::N,
            (1, -1) => Direction::NE,
            (1, 0) => Direction::E,
            (1, 1) => Direction::SE,
            (0, 1) => Direction::S,
            (-1, 1) => Direction::SW,
            (-1, 0) => Direction::W,
            (-1, -1) => Direction::NW,
            _ => Direction::None,
        }
    }

    /// Facing implied by the vertical component, if any.
    pub fn facing(self) -> Option<Facing> {
        match self.delta().1 {
            -1 => Some(Facing::Up),
            1 => Some(Facing::Down),
            _ => None,
        }
    }
}

/// The steered entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub facing: Facing,
}

impl Entity {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            facing: Facing::default(),
        }
    }
}
