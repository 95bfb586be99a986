//! Pinhole camera and the projection screen it induces.
//!
//! The camera sits at the depth-axis origin and looks along +depth. Every ray
//! passes through the origin, so the visible cone is bounded by the lines
//! `y = m * x` and `y = -m * x` where `m` is the camera's slope.

use std::f64::consts::{FRAC_PI_4, PI};

use crate::error::{RenderError, RenderResult};

/// Depth of the reference plane all blocks are projected onto.
pub const PROJECTION_DEPTH: f64 = 2.0;

/// Field of view used when neither an angle nor a screen height is given.
pub const DEFAULT_THETA: f64 = FRAC_PI_4;

/// Fixed pinhole camera. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    theta: f64,
    slope: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            theta: DEFAULT_THETA,
            slope: (0.5 * DEFAULT_THETA).tan(),
        }
    }
}

impl Camera {
    /// Builds a camera from at most one of a field-of-view angle or a forced
    /// screen height at [`PROJECTION_DEPTH`].
    ///
    /// A forced height `H` yields `theta = 2 * atan(H / 4)`, which makes the
    /// projection screen exactly `H` tall.
    pub fn new(theta: Option<f64>, forced_screen_height: Option<f64>) -> RenderResult<Self> {
        match (theta, forced_screen_height) {
            (Some(_), Some(_)) => Err(RenderError::config(
                "theta and forced_screen_height can't both be set",
            )),
            (Some(theta), None) => Self::with_theta(theta),
            (None, Some(height)) => Self::with_forced_screen_height(height),
            (None, None) => Ok(Self::default()),
        }
    }

    pub fn with_theta(theta: f64) -> RenderResult<Self> {
        if !theta.is_finite() || theta <= 0.0 || theta >= PI {
            return Err(RenderError::config(format!(
                "theta must lie strictly between 0 and pi, got {theta}"
            )));
        }
        Ok(Self {
            theta,
            slope: (0.5 * theta).tan(),
        })
    }

    pub fn with_forced_screen_height(height: f64) -> RenderResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(RenderError::config(format!(
                "forced_screen_height must be positive, got {height}"
            )));
        }
        Self::with_theta(2.0 * (height / (2.0 * PROJECTION_DEPTH)).atan())
    }

    /// Full field-of-view angle in radians.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// `tan(theta / 2)`.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn projection_screen(&self) -> ProjectionScreen {
        ProjectionScreen::new(self)
    }
}

/// The plane at [`PROJECTION_DEPTH`], clipped to the camera's cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionScreen {
    pub depth: f64,
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

impl ProjectionScreen {
    pub fn new(camera: &Camera) -> Self {
        let depth = PROJECTION_DEPTH;
        let top = camera.slope() * depth;
        Self {
            depth,
            top,
            bottom: -top,
            height: 2.0 * top,
        }
    }

    /// Maps `[bottom, top]` onto `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        value / self.height + 0.5
    }
}
