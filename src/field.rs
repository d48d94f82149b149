//! Orbital electron density fields
//!
//! Closed-form approximations of s, p, and d orbital shapes, sampled
//! over a square grid and min-max normalized for color/height mapping.

/// Orbital mode selecting the field function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orbital {
    /// Spherically symmetric cloud
    S,
    /// Dumbbell along x
    Px,
    /// Dumbbell along y
    Py,
    /// Four-lobed cloverleaf in the xy plane
    Dx2y2,
    /// Lobes along z with an equatorial ring
    Dz2,
}

impl Orbital {
    /// All modes in UI/key-binding order
    pub const ALL: [Orbital; 5] = [
        Orbital::S,
        Orbital::Px,
        Orbital::Py,
        Orbital::Dx2y2,
        Orbital::Dz2,
    ];

    /// Evaluate the field at a point
    pub fn evaluate(self, x: f32, y: f32, z: f32) -> f32 {
        let r = (x * x + y * y + z * z).sqrt();
        let envelope = (-r).exp();
        match self {
            Orbital::S => envelope,
            Orbital::Px => x * envelope,
            Orbital::Py => y * envelope,
            Orbital::Dx2y2 => (x * x - y * y) * envelope,
            Orbital::Dz2 => (2.0 * z * z - x * x - y * y) * envelope,
        }
    }

    /// Display name used in the status line
    pub fn name(&self) -> &'static str {
        match self {
            Orbital::S => "s",
            Orbital::Px => "px",
            Orbital::Py => "py",
            Orbital::Dx2y2 => "dx2-y2",
            Orbital::Dz2 => "dz2",
        }
    }
}

/// Scalar field sampled on a square grid
///
/// Both axes share the same uniformly spaced coordinates; values are stored
/// row-major with `values[i * size + j]` holding the sample at
/// `(coord(i), coord(j))`.
pub struct ScalarField {
    size: usize,
    coords: Vec<f32>,
    values: Vec<f32>,
}

impl ScalarField {
    pub fn new(size: usize, extent: f32) -> Self {
        let step = 2.0 * extent / (size - 1) as f32;
        let coords = (0..size).map(|i| -extent + i as f32 * step).collect();
        Self {
            size,
            coords,
            values: vec![0.0; size * size],
        }
    }

    /// Samples per axis
    pub fn size(&self) -> usize {
        self.size
    }

    /// Axis coordinate at index
    pub fn coord(&self, i: usize) -> f32 {
        self.coords[i]
    }

    /// Sample value at grid indices
    pub fn value(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.size + j]
    }

    /// Evaluate the orbital at every grid point, with a shared z argument
    /// (the vibration offset).
    pub fn sample(&mut self, orbital: Orbital, z: f32) {
        for i in 0..self.size {
            let x = self.coords[i];
            for j in 0..self.size {
                let y = self.coords[j];
                self.values[i * self.size + j] = orbital.evaluate(x, y, z);
            }
        }
    }

    /// Min-max normalize the sampled values to [0, 1]
    pub fn normalize(&mut self) {
        normalize(&mut self.values);
    }

    /// Iterate over `(x, y, value)` for every sample
    pub fn samples(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        (0..self.size).flat_map(move |i| {
            (0..self.size).map(move |j| (self.coords[i], self.coords[j], self.value(i, j)))
        })
    }
}

/// Rescale values to [0, 1] in place.
///
/// A constant field has zero range; it is filled with 0.0 rather than
/// dividing by zero.
pub fn normalize(values: &mut [f32]) {
    if values.is_empty() {
        return;
    }
    let (min, max) = values
        .iter()
        .fold((values[0], values[0]), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let range = max - min;
    if range <= f32::EPSILON {
        values.fill(0.0);
        return;
    }

    for v in values.iter_mut() {
        *v = (*v - min) / range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn s_orbital_depends_only_on_radius() {
        let a = Orbital::S.evaluate(1.0, 2.0, 0.5);
        let b = Orbital::S.evaluate(2.0, 0.5, 1.0);
        let c = Orbital::S.evaluate(-1.0, -2.0, 0.5);
        assert!((a - b).abs() < EPS);
        assert!((a - c).abs() < EPS);
    }

    #[test]
    fn p_orbitals_are_antisymmetric_along_their_axis() {
        let px = Orbital::Px.evaluate(1.3, 0.7, 0.2);
        assert!((px + Orbital::Px.evaluate(-1.3, 0.7, 0.2)).abs() < EPS);

        let py = Orbital::Py.evaluate(0.4, 2.1, -0.3);
        assert!((py + Orbital::Py.evaluate(0.4, -2.1, -0.3)).abs() < EPS);
    }

    #[test]
    fn d_x2y2_vanishes_on_diagonals() {
        assert!(Orbital::Dx2y2.evaluate(1.5, 1.5, 0.0).abs() < EPS);
        assert!(Orbital::Dx2y2.evaluate(-2.0, 2.0, 0.7).abs() < EPS);
    }

    #[test]
    fn d_z2_is_negative_in_the_equatorial_plane() {
        assert!(Orbital::Dz2.evaluate(1.0, 0.5, 0.0) < 0.0);
    }

    #[test]
    fn normalize_maps_to_unit_range() {
        let mut values = vec![-3.0, 0.0, 1.0, 5.0];
        normalize(&mut values);
        assert!((values[0] - 0.0).abs() < EPS);
        assert!((values[3] - 1.0).abs() < EPS);
        assert!(values.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn normalize_constant_field_does_not_divide_by_zero() {
        let mut values = vec![2.5; 16];
        normalize(&mut values);
        assert!(values.iter().all(|&v| v == 0.0));

        let mut empty: Vec<f32> = Vec::new();
        normalize(&mut empty);
    }

    #[test]
    fn every_orbital_normalizes_into_unit_range() {
        for orbital in Orbital::ALL {
            let mut field = ScalarField::new(32, 5.0);
            field.sample(orbital, 0.5);
            field.normalize();
            for (_, _, t) in field.samples() {
                assert!(t.is_finite());
                assert!((0.0..=1.0).contains(&t), "{} out of range", orbital.name());
            }
        }
    }

    #[test]
    fn grid_spans_the_full_extent() {
        let field = ScalarField::new(200, 5.0);
        assert_eq!(field.size(), 200);
        assert!((field.coord(0) + 5.0).abs() < EPS);
        assert!((field.coord(199) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn sample_evaluates_at_grid_coordinates() {
        let mut field = ScalarField::new(5, 2.0);
        field.sample(Orbital::Px, 0.3);
        let expected = Orbital::Px.evaluate(field.coord(3), field.coord(1), 0.3);
        assert!((field.value(3, 1) - expected).abs() < EPS);
    }

    #[test]
    fn vibration_offset_changes_the_field() {
        let mut field = ScalarField::new(8, 5.0);
        field.sample(Orbital::S, 0.0);
        let center = field.value(4, 4);
        field.sample(Orbital::S, 1.0);
        assert!((field.value(4, 4) - center).abs() > EPS);
    }
}
