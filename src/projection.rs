//! View rotation and screen projection
//!
//! Maps 3D field samples to 2D pixel coordinates: two Euler rotations
//! followed by an orthographic scale and screen-center offset.

use glam::{Mat3, Vec2, Vec3};

/// Accumulated Euler view angles
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewRotation {
    /// Rotation about the x axis (up/down keys)
    pub angle_x: f32,
    /// Rotation about the y axis (left/right keys)
    pub angle_y: f32,
}

impl ViewRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate angles from input
    pub fn turn(&mut self, delta_x: f32, delta_y: f32) {
        self.angle_x += delta_x;
        self.angle_y += delta_y;
    }

    /// Rotate a point: about y first, then about x
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        Mat3::from_rotation_x(self.angle_x) * (Mat3::from_rotation_y(self.angle_y) * v)
    }
}

/// Orthographic mapping from world space to screen pixels
///
/// Screen y grows downward, so world +y maps above the center.
#[derive(Debug, Clone, Copy)]
pub struct ScreenProjector {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl ScreenProjector {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Project a rotated point to pixel coordinates
    pub fn project(&self, v: Vec3) -> Vec2 {
        Vec2::new(
            self.width * 0.5 + v.x * self.scale,
            self.height * 0.5 - v.y * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn zero_rotation_is_identity() {
        let view = ViewRotation::new();
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert!(approx(view.rotate(v), v));
    }

    #[test]
    fn rotation_about_x_sends_y_to_z() {
        let view = ViewRotation {
            angle_x: FRAC_PI_2,
            angle_y: 0.0,
        };
        assert!(approx(view.rotate(Vec3::Y), Vec3::Z));
    }

    #[test]
    fn rotation_applies_y_axis_first() {
        // R_x(90) * R_y(90) maps +x to +y; the reverse order would give -z.
        let view = ViewRotation {
            angle_x: FRAC_PI_2,
            angle_y: FRAC_PI_2,
        };
        assert!(approx(view.rotate(Vec3::X), Vec3::Y));
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let proj = ScreenProjector::new(800.0, 800.0, 80.0);
        let p = proj.project(Vec3::ZERO);
        assert!((p.x - 400.0).abs() < EPS);
        assert!((p.y - 400.0).abs() < EPS);
    }

    #[test]
    fn world_up_maps_above_center() {
        let proj = ScreenProjector::new(800.0, 600.0, 80.0);
        let p = proj.project(Vec3::Y);
        assert!((p.x - 400.0).abs() < EPS);
        assert!((p.y - 220.0).abs() < EPS);
    }

    #[test]
    fn projection_scales_by_eighty_pixels_per_unit() {
        let proj = ScreenProjector::new(800.0, 800.0, 80.0);
        let p = proj.project(Vec3::new(2.0, 0.0, 0.0));
        assert!((p.x - 560.0).abs() < EPS);
    }
}
