//! Orbital field simulation state
//!
//! Owns the selected orbital, the sample grid, and the molecular vibration
//! phase. Each step resamples and normalizes the whole field; nothing is
//! cached between frames.

use crate::constants::{
    GRID_EXTENT, GRID_SIZE, HEIGHT_SCALE, VIBRATION_AMPLITUDE, VIBRATION_SPEED,
};
use crate::field::{Orbital, ScalarField};
use glam::Vec3;

/// Sine phase accumulator oscillating the field's z argument
#[derive(Debug, Clone, Copy)]
pub struct Vibration {
    pub amplitude: f32,
    /// Angular speed in rad/s
    pub speed: f32,
    pub phase: f32,
}

impl Vibration {
    pub fn new(amplitude: f32, speed: f32) -> Self {
        Self {
            amplitude,
            speed,
            phase: 0.0,
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.phase += self.speed * dt;
    }

    /// Current z offset, bounded by the amplitude
    pub fn offset(&self) -> f32 {
        self.amplitude * self.phase.sin()
    }
}

/// Electron density field simulation
pub struct OrbitalSimulation {
    /// Selected orbital mode
    pub orbital: Orbital,
    /// Sampled and normalized field values
    pub field: ScalarField,
    /// Molecular vibration state
    pub vibration: Vibration,
}

impl OrbitalSimulation {
    pub fn new(orbital: Orbital) -> Self {
        let mut sim = Self {
            orbital,
            field: ScalarField::new(GRID_SIZE, GRID_EXTENT),
            vibration: Vibration::new(VIBRATION_AMPLITUDE, VIBRATION_SPEED),
        };
        sim.resample();
        sim
    }

    /// Advance the vibration and recompute the field
    pub fn step(&mut self, dt: f32) {
        self.vibration.step(dt);
        self.resample();
    }

    /// Switch orbital mode, resampling immediately so a paused view updates
    pub fn set_orbital(&mut self, orbital: Orbital) {
        if orbital != self.orbital {
            self.orbital = orbital;
            self.resample();
        }
    }

    fn resample(&mut self) {
        self.field.sample(self.orbital, self.vibration.offset());
        self.field.normalize();
    }

    /// Number of field samples
    pub fn num_points(&self) -> usize {
        let n = self.field.size();
        n * n
    }

    /// Render data: sample position lifted by the normalized value, plus
    /// the value itself for color mapping.
    pub fn render_data(&self) -> Vec<(Vec3, f32)> {
        self.field
            .samples()
            .map(|(x, y, t)| (Vec3::new(x, y, t * HEIGHT_SCALE), t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vibration_offset_is_bounded_by_amplitude() {
        let mut vib = Vibration::new(1.0, 6.0);
        for _ in 0..100 {
            vib.step(0.016);
            assert!(vib.offset().abs() <= 1.0 + f32::EPSILON);
        }
    }

    #[test]
    fn step_advances_the_phase() {
        let mut sim = OrbitalSimulation::new(Orbital::S);
        let before = sim.vibration.phase;
        sim.step(0.016);
        assert!(sim.vibration.phase > before);
    }

    #[test]
    fn set_orbital_resamples_the_field() {
        let mut sim = OrbitalSimulation::new(Orbital::S);
        let center = sim.field.value(100, 100);
        sim.set_orbital(Orbital::Px);
        assert!((sim.field.value(100, 100) - center).abs() > 1e-6);
    }

    #[test]
    fn render_data_covers_the_whole_grid() {
        let sim = OrbitalSimulation::new(Orbital::Dz2);
        let data = sim.render_data();
        assert_eq!(data.len(), sim.num_points());
    }

    #[test]
    fn heights_follow_the_normalized_value() {
        let sim = OrbitalSimulation::new(Orbital::Dx2y2);
        for (pos, t) in sim.render_data() {
            assert!((0.0..=1.0).contains(&t));
            assert!((pos.z - t * HEIGHT_SCALE).abs() < 1e-5);
        }
    }
}
