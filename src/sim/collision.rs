//! Collision detection between cars
//!
//! Car sprites don't fill their bounding boxes (wheels stick out, noses taper),
//! so the default oracle shrinks both boxes before testing overlap.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Finite coordinates and a strictly positive size
    pub fn is_well_formed(&self) -> bool {
        self.pos.is_finite() && self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(self.pos + Vec2::splat(amount), self.size - Vec2::splat(2.0 * amount))
    }

    /// Overlapping region; touching edges don't count
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        if min.x < max.x && min.y < max.y {
            Some(Rect::new(min, max - min))
        } else {
            None
        }
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub hit: bool,
    /// Where to put the sparks (if hit)
    pub point: Option<Vec2>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: None,
        }
    }

    pub fn hit_at(point: Vec2) -> Self {
        Self {
            hit: true,
            point: Some(point),
        }
    }
}

/// Decides whether the player and an obstacle touch
///
/// Implementations must be pure: same inputs, same answer, no mutation.
/// Geometry they can't evaluate is reported as a miss.
pub trait CollisionOracle {
    fn check(&self, player: &Rect, obstacle: &Rect) -> CollisionResult;
}

/// Shrunken-hitbox overlap test with the contact point at the center of the
/// overlapping region
#[derive(Debug, Clone, Copy)]
pub struct PreciseCollision {
    /// Shrink per side applied to both boxes
    pub inset: f32,
}

impl PreciseCollision {
    pub fn new(inset: f32) -> Self {
        Self { inset }
    }
}

impl Default for PreciseCollision {
    fn default() -> Self {
        Self::new(crate::consts::COLLISION_INSET)
    }
}

impl CollisionOracle for PreciseCollision {
    fn check(&self, player: &Rect, obstacle: &Rect) -> CollisionResult {
        if !self.inset.is_finite() || !player.is_well_formed() || !obstacle.is_well_formed() {
            log::warn!("Collision check skipped for ill-formed geometry: {player:?} vs {obstacle:?}");
            return CollisionResult::miss();
        }

        let a = player.inset(self.inset);
        let b = obstacle.inset(self.inset);
        if !a.is_well_formed() || !b.is_well_formed() {
            log::warn!("Collision inset {} swallows a hitbox", self.inset);
            return CollisionResult::miss();
        }

        match a.intersection(&b) {
            Some(overlap) => CollisionResult::hit_at(overlap.center()),
            None => CollisionResult::miss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_cars_collide_with_contact_point() {
        let oracle = PreciseCollision::new(5.0);
        let player = Rect::from_xywh(100.0, 400.0, 50.0, 80.0);
        let obstacle = Rect::from_xywh(120.0, 350.0, 50.0, 80.0);

        let result = oracle.check(&player, &obstacle);
        assert!(result.hit);
        // Inset boxes: player (105,405)-(145,475), obstacle (125,355)-(165,425)
        // Overlap (125,405)-(145,425)
        assert_eq!(result.point, Some(Vec2::new(135.0, 415.0)));
    }

    #[test]
    fn test_separated_cars_miss() {
        let oracle = PreciseCollision::default();
        let player = Rect::from_xywh(100.0, 400.0, 50.0, 80.0);
        let obstacle = Rect::from_xywh(300.0, 400.0, 50.0, 80.0);

        let result = oracle.check(&player, &obstacle);
        assert_eq!(result, CollisionResult::miss());
    }

    #[test]
    fn test_grazing_boxes_are_not_a_collision() {
        // Bounding boxes overlap by 6px, but the inset hitboxes don't
        let oracle = PreciseCollision::new(5.0);
        let player = Rect::from_xywh(100.0, 400.0, 50.0, 80.0);
        let obstacle = Rect::from_xywh(144.0, 400.0, 50.0, 80.0);

        assert!(player.intersection(&obstacle).is_some());
        assert!(!oracle.check(&player, &obstacle).hit);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_ill_formed_geometry_fails_closed() {
        let oracle = PreciseCollision::new(5.0);
        let player = Rect::from_xywh(100.0, 400.0, 50.0, 80.0);

        let nan = Rect::from_xywh(f32::NAN, 400.0, 50.0, 80.0);
        assert!(!oracle.check(&player, &nan).hit);

        let negative = Rect::from_xywh(100.0, 400.0, -50.0, 80.0);
        assert!(!oracle.check(&player, &negative).hit);

        // Inset larger than the box itself
        let tiny = Rect::from_xywh(100.0, 400.0, 6.0, 6.0);
        assert!(!oracle.check(&player, &tiny).hit);
    }

    #[test]
    fn test_check_is_deterministic() {
        let oracle = PreciseCollision::default();
        let player = Rect::from_xywh(10.0, 10.0, 50.0, 80.0);
        let obstacle = Rect::from_xywh(30.0, 40.0, 50.0, 80.0);

        let first = oracle.check(&player, &obstacle);
        for _ in 0..10 {
            assert_eq!(oracle.check(&player, &obstacle), first);
        }
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains_point(Vec2::new(10.0, 20.0)));
        assert!(rect.contains_point(Vec2::new(60.0, 45.0)));
        assert!(!rect.contains_point(Vec2::new(110.0, 45.0)));
        assert!(!rect.contains_point(Vec2::new(60.0, 10.0)));
    }
}
