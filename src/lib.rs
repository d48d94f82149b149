//! Atomic Orbital Electron Density Visualization
//!
//! This crate renders interactive 3D views of atomic orbital shapes:
//!
//! - **Field Evaluation**: closed-form s, p, and d electron density fields
//! - **Normalization**: min-max rescaling of the sampled field to [0, 1]
//! - **Projection**: Euler-angle view rotation and orthographic screen mapping
//! - **Rendering**: GPU point cloud over a vertical background gradient
//! - **Vibration**: a sine phase accumulator oscillating the sampling plane

pub mod field;
pub mod projection;
pub mod simulation;
pub mod graphics;
pub mod renderer;
pub mod equations_ui;

/// Visualization constants
pub mod constants {
    /// Samples per grid axis
    pub const GRID_SIZE: usize = 200;

    /// Half-extent of the sample domain, [-GRID_EXTENT, GRID_EXTENT]
    pub const GRID_EXTENT: f32 = 5.0;

    /// Orthographic projection scale in pixels per world unit
    pub const PROJECTION_SCALE: f32 = 80.0;

    /// Height lift applied to the normalized field value
    pub const HEIGHT_SCALE: f32 = 10.0;

    /// Rendered point radius in pixels
    pub const POINT_RADIUS: f32 = 2.0;

    /// Vibration amplitude in world units
    pub const VIBRATION_AMPLITUDE: f32 = 1.0;

    /// Vibration angular speed in rad/s
    pub const VIBRATION_SPEED: f32 = 6.0;

    /// View rotation step per frame while an arrow key is held
    pub const ROTATE_STEP: f32 = 2.0 * std::f32::consts::PI / 180.0;
}
