//! Spherical coordinates for camera offsets.
//!
//! Conventions match a Y-up, right-handed world: `phi` is the polar angle
//! measured from `+Y`, `theta` the azimuth measured from `+Z` towards `+X`.

use crate::constants::EPS;
use crate::error::PlenumError;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from `+Y`.
    pub phi: f32,
    /// Azimuth around `+Y`.
    pub theta: f32,
}

impl Spherical {
    pub fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a Cartesian offset (camera position minus target).
    ///
    /// A zero-length offset has no direction; callers are expected to keep a
    /// minimum distance and recover from `DegenerateOffset` themselves.
    pub fn from_offset(offset: Vec3) -> Result<Self, PlenumError> {
        let radius = offset.length();
        if !radius.is_finite() || radius <= EPS {
            return Err(PlenumError::DegenerateOffset);
        }
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let theta = offset.x.atan2(offset.z);
        Ok(Self { radius, phi, theta })
    }

    /// Inverse of [`Spherical::from_offset`].
    pub fn to_offset(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let sin_phi_radius = sin_phi * self.radius;
        Vec3::new(
            sin_phi_radius * sin_theta,
            self.radius * cos_phi,
            sin_phi_radius * cos_theta,
        )
    }

    /// Clamp `phi` into `[EPS, PI - EPS]` so the azimuth stays defined and the
    /// camera's up vector never flips.
    pub fn make_safe(mut self) -> Self {
        self.phi = if self.phi.is_nan() {
            FRAC_PI_2
        } else {
            self.phi.clamp(EPS, PI - EPS)
        };
        self
    }
}
