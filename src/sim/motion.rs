//! Entity steering and boundary clamping.

use super::types::{Direction, Entity, Field};

/// Apply one tick of steering, then clamp to the field.
pub fn move_entity(entity: &Entity, direction: Direction, field: &Field) -> Entity {
    let (dx, dy) = direction.delta();
    let moved = Entity {
        x: entity.x + dx as f64,
        y: entity.y + dy as f64,
        facing: direction.facing().unwrap_or(entity.facing),
    };
    clamp(&moved, field)
}

/// Keep the entity inside `[1, width-3] x [1, height-3]`. Idempotent.
pub fn clamp(entity: &Entity, field: &Field) -> Entity {
    let (x, y) = field.clamp_point(entity.x, entity.y);
    Entity { x, y, ..*entity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::types::Facing;

    fn field() -> Field {
        Field::new(84, 48)
    }

    #[test]
    fn test_cardinal_moves() {
        let start = Entity::new(42.0, 24.0);
        let north = move_entity(&start, Direction::N, &field());
        assert_eq!((north.x, north.y), (42.0, 23.0));
        let east = move_entity(&start, Direction::E, &field());
        assert_eq!((east.x, east.y), (43.0, 24.0));
        let south = move_entity(&start, Direction::S, &field());
        assert_eq!((south.x, south.y), (42.0, 25.0));
        let west = move_entity(&start, Direction::W, &field());
        assert_eq!((west.x, west.y), (41.0, 24.0));
    }

    #[test]
    fn test_diagonals_move_both_axes() {
        let start = Entity::new(42.0, 24.0);
        let ne = move_entity(&start, Direction::NE, &field());
        assert_eq!((ne.x, ne.y), (43.0, 23.0));
        let sw = move_entity(&start, Direction::SW, &field());
        assert_eq!((sw.x, sw.y), (41.0, 25.0));
    }

    #[test]
    fn test_facing_follows_vertical_component() {
        let start = Entity::new(42.0, 24.0);
        let up = move_entity(&start, Direction::NW, &field());
        assert_eq!(up.facing, Facing::Up);
        let still_up = move_entity(&up, Direction::E, &field());
        assert_eq!(still_up.facing, Facing::Up);
        let down = move_entity(&still_up, Direction::SE, &field());
        assert_eq!(down.facing, Facing::Down);
        let still_down = move_entity(&down, Direction::W, &field());
        assert_eq!(still_down.facing, Facing::Down);
    }

    #[test]
    fn test_none_is_noop() {
        let mut start = Entity::new(42.0, 24.0);
        start.facing = Facing::Up;
        let after = move_entity(&start, Direction::None, &field());
        assert_eq!(after, start);
    }

    #[test]
    fn test_moves_clamp_at_edges() {
        let corner = Entity::new(1.0, 1.0);
        let pushed = move_entity(&corner, Direction::NW, &field());
        assert_eq!((pushed.x, pushed.y), (1.0, 1.0));
        assert_eq!(pushed.facing, Facing::Up);

        let far = Entity::new(81.0, 45.0);
        let pushed = move_entity(&far, Direction::SE, &field());
        assert_eq!((pushed.x, pushed.y), (81.0, 45.0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let wild = Entity::new(-30.0, 300.0);
        let once = clamp(&wild, &field());
        assert_eq!((once.x, once.y), (1.0, 45.0));
        assert_eq!(clamp(&once, &field()), once);
    }
}
