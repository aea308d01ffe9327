//! Axis-aligned collision primitives
//!
//! Overlap tests, face-side classification, and the reflection helpers
//! the ball physics is built from. Two overlap predicates exist on
//! purpose: entity placement uses the strict test (rects sharing only an
//! edge do not collide), the ball uses the inclusive one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }
}

/// Inclusive overlap between a ball (treated as its bounding square of
/// side 2r) and a rect
pub fn ball_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius >= rect.x
        && center.x - radius <= rect.right()
        && center.y + radius >= rect.y
        && center.y - radius <= rect.bottom()
}

/// Which kind of rect face a collision struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// A left or right side; flips the horizontal velocity
    Vertical,
    /// A top or bottom side; flips the vertical velocity
    Horizontal,
}

/// Classify the struck face by comparing center-to-center offsets: the
/// larger-magnitude axis names the face. Ties go to `Horizontal`.
pub fn struck_face(ball_center: Vec2, rect: &Rect) -> Face {
    let d = ball_center - rect.center();
    if d.x.abs() > d.y.abs() {
        Face::Vertical
    } else {
        Face::Horizontal
    }
}

/// Reflect off a face by flipping one velocity component
pub fn deflect_off_face(vel: Vec2, face: Face) -> Vec2 {
    match face {
        Face::Vertical => Vec2::new(-vel.x, vel.y),
        Face::Horizontal => Vec2::new(vel.x, -vel.y),
    }
}

/// Pull a near-horizontal trajectory up onto the minimum incidence
/// angle, keeping the speed magnitude and the quadrant signs. Stops the
/// ball from settling into perpetual grazing paths.
pub fn enforce_min_angle(vel: Vec2, min_angle: f32) -> Vec2 {
    let speed = vel.length();
    if speed <= 0.0 {
        return vel;
    }
    let angle = vel.y.abs().atan2(vel.x.abs());
    if angle >= min_angle {
        return vel;
    }
    let sx = if vel.x > 0.0 { 1.0 } else { -1.0 };
    let sy = if vel.y > 0.0 { 1.0 } else { -1.0 };
    Vec2::new(sx * speed * min_angle.cos(), sy * speed * min_angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_6;

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let overlapping = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_ball_rect_overlap_is_inclusive() {
        let r = Rect::new(100.0, 100.0, 60.0, 25.0);
        // Touching exactly on the left edge counts
        assert!(ball_rect_overlap(Vec2::new(84.0, 110.0), 16.0, &r));
        assert!(!ball_rect_overlap(Vec2::new(83.0, 110.0), 16.0, &r));
    }

    #[test]
    fn test_struck_face_classification() {
        let r = Rect::new(0.0, 0.0, 60.0, 25.0);
        // Ball level with the rect but off to the left: a side face
        assert_eq!(struck_face(Vec2::new(-10.0, 12.0), &r), Face::Vertical);
        // Ball above the center: top face
        assert_eq!(struck_face(Vec2::new(30.0, -10.0), &r), Face::Horizontal);
    }

    #[test]
    fn test_deflect_flips_one_component() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(deflect_off_face(v, Face::Vertical), Vec2::new(-3.0, -4.0));
        assert_eq!(deflect_off_face(v, Face::Horizontal), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_min_angle_projection_is_exact() {
        // 10 degrees from horizontal, heading down-right
        let shallow = 10f32.to_radians();
        let v = Vec2::new(8.0 * shallow.cos(), 8.0 * shallow.sin());
        let out = enforce_min_angle(v, FRAC_PI_6);
        let angle = out.y.abs().atan2(out.x.abs());
        assert!((angle - FRAC_PI_6).abs() < 1e-5);
        assert!((out.length() - 8.0).abs() < 1e-4);
        assert!(out.x > 0.0 && out.y > 0.0);
    }

    #[test]
    fn test_min_angle_leaves_steep_paths_alone() {
        let v = Vec2::new(4.0, -7.0);
        assert_eq!(enforce_min_angle(v, FRAC_PI_6), v);
    }

    proptest! {
        #[test]
        fn prop_deflect_conserves_speed(
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let v = Vec2::new(vx, vy);
            for face in [Face::Vertical, Face::Horizontal] {
                let out = deflect_off_face(v, face);
                prop_assert!((out.length() - v.length()).abs() < 1e-3);
            }
        }

        #[test]
        fn prop_min_angle_conserves_speed_and_floors_angle(
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let v = Vec2::new(vx, vy);
            prop_assume!(v.length() > 0.1);
            let out = enforce_min_angle(v, FRAC_PI_6);
            prop_assert!((out.length() - v.length()).abs() < v.length() * 1e-3);
            let angle = out.y.abs().atan2(out.x.abs());
            prop_assert!(angle >= FRAC_PI_6 - 1e-4);
        }

        #[test]
        fn prop_struck_face_is_total(
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
        ) {
            let face = struck_face(Vec2::new(bx, by), &Rect::new(x, y, w, h));
            prop_assert!(matches!(face, Face::Vertical | Face::Horizontal));
        }
    }
}
