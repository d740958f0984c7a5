//! Entity versus tube overlap.
//!
//! Field edges are never a collision: motion clamps the entity before this runs.

use super::types::{Entity, Field, Obstacle, TubeGeometry};

/// True if the entity sits inside a solid pillar of any live tube.
pub fn check(entity: &Entity, obstacles: &[Obstacle], field: &Field, geometry: &TubeGeometry) -> bool {
    first_collision(entity, obstacles, field, geometry).is_some()
}

/// The first live tube, in spawn order, that the entity overlaps.
pub fn first_collision<'a>(
    entity: &Entity,
    obstacles: &'a [Obstacle],
    field: &Field,
    geometry: &TubeGeometry,
) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .filter(|obstacle| obstacle.is_live())
        .find(|obstacle| hits(entity, obstacle, field, geometry))
}

fn hits(entity: &Entity, obstacle: &Obstacle, field: &Field, geometry: &TubeGeometry) -> bool {
    if !obstacle.spans_x(entity.x, geometry) {
        return false;
    }
    let in_lower = entity.y >= geometry.lower_pillar_top(field, obstacle.gap_height) as f64;
    let in_upper = entity.y <= geometry.upper_pillar_bottom(field, obstacle.gap_height) as f64;
    in_lower || in_upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::types::ObstacleId;

    fn field() -> Field {
        Field::new(84, 48)
    }

    fn geometry() -> TubeGeometry {
        TubeGeometry {
            width: 5.0,
            gap_margin: 16,
        }
    }

    fn tube(x: f64, gap_height: i32) -> Obstacle {
        Obstacle {
            id: ObstacleId(0),
            x,
            gap_height,
        }
    }

    #[test]
    fn test_inside_opening_is_clear() {
        let entity = Entity::new(52.0, 24.0);
        assert!(!check(&entity, &[tube(50.0, 20)], &field(), &geometry()));
    }

    #[test]
    fn test_lower_pillar_boundary_row_hits() {
        let entity = Entity::new(52.0, 27.0);
        assert!(check(&entity, &[tube(50.0, 20)], &field(), &geometry()));
        let entity = Entity::new(52.0, 26.9);
        assert!(!check(&entity, &[tube(50.0, 20)], &field(), &geometry()));
    }

    #[test]
    fn test_upper_pillar_boundary_row_hits() {
        let entity = Entity::new(52.0, 12.0);
        assert!(check(&entity, &[tube(50.0, 20)], &field(), &geometry()));
        let entity = Entity::new(52.0, 12.5);
        assert!(!check(&entity, &[tube(50.0, 20)], &field(), &geometry()));
    }

    #[test]
    fn test_outside_span_never_hits() {
        let tubes = [tube(50.0, 20)];
        assert!(!check(&Entity::new(49.0, 40.0), &tubes, &field(), &geometry()));
        assert!(!check(&Entity::new(56.0, 40.0), &tubes, &field(), &geometry()));
        assert!(check(&Entity::new(50.0, 40.0), &tubes, &field(), &geometry()));
        assert!(check(&Entity::new(55.0, 40.0), &tubes, &field(), &geometry()));
    }

    #[test]
    fn test_retired_tube_ignored() {
        let entity = Entity::new(1.0, 40.0);
        assert!(!check(&entity, &[tube(0.0, 20)], &field(), &geometry()));
        assert!(!check(&entity, &[tube(-2.0, 20)], &field(), &geometry()));
    }

    #[test]
    fn test_first_collision_reports_earliest_tube() {
        let mut second = tube(40.0, 10);
        second.id = ObstacleId(7);
        let tubes = [tube(10.0, 20), second, tube(41.0, 10)];
        let entity = Entity::new(42.0, 45.0);
        let hit = first_collision(&entity, &tubes, &field(), &geometry()).expect("collision");
        assert_eq!(hit.id, ObstacleId(7));
    }

    #[test]
    fn test_no_tubes_no_collision() {
        assert!(!check(&Entity::new(42.0, 24.0), &[], &field(), &geometry()));
    }
}
