//! Pass-through scoring.
//!
//! A tube is credited once the entity's x is beyond its trailing edge. Whether
//! the entity actually went through the opening is not considered.

use super::types::{Obstacle, ObstacleId};
use std::collections::BTreeSet;

/// Ids of tubes already credited this round. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassedSet {
    ids: BTreeSet<ObstacleId>,
}

impl PassedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns false if the id was already present.
    pub fn insert(&mut self, id: ObstacleId) -> bool {
        self.ids.insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObstacleId> + '_ {
        self.ids.iter().copied()
    }
}

/// Credit every live tube the entity has cleared that was not credited before.
/// Returns how many were newly credited.
pub fn update_score(entity_x: f64, obstacles: &[Obstacle], passed: &mut PassedSet, tube_width: f64) -> u32 {
    let mut newly_passed = 0;
    for obstacle in obstacles.iter().filter(|o| o.is_live()) {
        if passed.contains(obstacle.id) {
            continue;
        }
        if entity_x > obstacle.x + tube_width {
            passed.insert(obstacle.id);
            newly_passed += 1;
            log::debug!("cleared tube {} (x={:.1})", obstacle.id.0, obstacle.x);
        }
    }
    newly_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tube(id: u64, x: f64) -> Obstacle {
        Obstacle {
            id: ObstacleId(id),
            x,
            gap_height: 20,
        }
    }

    #[test]
    fn test_credit_once() {
        let tubes = [tube(10, 10.0)];
        let mut passed = PassedSet::new();
        assert_eq!(update_score(16.0, &tubes, &mut passed, 5.0), 1);
        assert!(passed.contains(ObstacleId(10)));
        assert_eq!(update_score(16.0, &tubes, &mut passed, 5.0), 0);
        assert_eq!(passed.len(), 1);
    }

    #[test]
    fn test_trailing_edge_is_exclusive() {
        let tubes = [tube(0, 10.0)];
        let mut passed = PassedSet::new();
        assert_eq!(update_score(15.0, &tubes, &mut passed, 5.0), 0);
        assert!(passed.is_empty());
    }

    #[test]
    fn test_multiple_cleared_in_one_update() {
        let tubes = [tube(0, 5.0), tube(1, 20.0), tube(2, 60.0)];
        let mut passed = PassedSet::new();
        assert_eq!(update_score(42.0, &tubes, &mut passed, 5.0), 2);
        let ids: Vec<ObstacleId> = passed.iter().collect();
        assert_eq!(ids, vec![ObstacleId(0), ObstacleId(1)]);
    }

    #[test]
    fn test_retired_tubes_not_scored() {
        let tubes = [tube(0, 0.0), tube(1, -3.0)];
        let mut passed = PassedSet::new();
        assert_eq!(update_score(42.0, &tubes, &mut passed, 5.0), 0);
    }

    #[test]
    fn test_credit_survives_culling() {
        let mut passed = PassedSet::new();
        update_score(42.0, &[tube(4, 30.0)], &mut passed, 5.0);
        // The tube is gone from the track, the credit stays.
        assert_eq!(update_score(42.0, &[], &mut passed, 5.0), 0);
        assert!(passed.contains(ObstacleId(4)));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut passed = PassedSet::new();
        assert!(passed.insert(ObstacleId(1)));
        assert!(!passed.insert(ObstacleId(1)));
    }
}
