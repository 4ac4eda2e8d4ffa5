//! Orbit camera controller.
//!
//! Input handlers only accumulate pending motion; [`OrbitController::update`]
//! is the single consumer and must run exactly once per animation frame.

use crate::constants::{
    CAMERA_FOV_Y_DEG, DAMPING_FACTOR, EPS, MAX_DISTANCE, MIN_DISTANCE, ZOOM_STEP,
};
use crate::error::PlenumError;
use crate::spherical::Spherical;
use crate::state::CameraState;
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Which pointer-move handler is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Rotating,
    Panning,
}

/// Viewport size in pixels, as reported by the input source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Angular motion accumulated since the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitDelta {
    pub theta: f32,
    pub phi: f32,
}

/// One-shot multiplicative radius change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRequest {
    pub scale_factor: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub zoom_step: f32,
    pub enable_pan: bool,
    /// Vertical field of view, used to scale pan speed with distance.
    pub fov_y_radians: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: DAMPING_FACTOR,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            zoom_step: ZOOM_STEP,
            enable_pan: true,
            fov_y_radians: CAMERA_FOV_Y_DEG.to_radians(),
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<(), PlenumError> {
        let bad = |msg: String| Err(PlenumError::InvalidConfig(msg));
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return bad(format!("min_distance must be > 0, got {}", self.min_distance));
        }
        if self.max_distance.is_nan() || self.max_distance < self.min_distance {
            return bad(format!(
                "max_distance {} is below min_distance {}",
                self.max_distance, self.min_distance
            ));
        }
        if !(0.0..=PI).contains(&self.min_polar_angle)
            || !(0.0..=PI).contains(&self.max_polar_angle)
            || self.min_polar_angle > self.max_polar_angle
        {
            return bad(format!(
                "polar range [{}, {}] must sit inside [0, PI]",
                self.min_polar_angle, self.max_polar_angle
            ));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return bad(format!(
                "damping_factor must be in (0, 1], got {}",
                self.damping_factor
            ));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return bad(format!("zoom_step must be > 1, got {}", self.zoom_step));
        }
        if !(self.fov_y_radians > 0.0 && self.fov_y_radians < PI) {
            return bad(format!("fov_y_radians out of range: {}", self.fov_y_radians));
        }
        Ok(())
    }
}

pub struct OrbitController {
    config: OrbitConfig,
    camera: CameraState,
    state: InteractionState,
    pointer: Vec2,
    delta: OrbitDelta,
    zoom: Option<ZoomRequest>,
    pan_offset: Vec3,
    last_azimuth: f32,
}

impl OrbitController {
    pub fn new(config: OrbitConfig, position: Vec3, target: Vec3) -> Result<Self, PlenumError> {
        config.validate()?;
        let last_azimuth = Spherical::from_offset(position - target)
            .map(|s| s.theta)
            .unwrap_or(0.0);
        Ok(Self {
            config,
            camera: CameraState::new(position, target),
            state: InteractionState::Idle,
            pointer: Vec2::ZERO,
            delta: OrbitDelta::default(),
            zoom: None,
            pan_offset: Vec3::ZERO,
            last_azimuth,
        })
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn pending_delta(&self) -> OrbitDelta {
        self.delta
    }

    pub fn pending_zoom(&self) -> Option<ZoomRequest> {
        self.zoom
    }

    pub fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }

    pub fn set_damping(&mut self, enabled: bool) {
        self.config.enable_damping = enabled;
    }

    // ---------------- Input ----------------

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.state = InteractionState::Rotating;
    }

    pub fn on_pan_down(&mut self, x: f32, y: f32) {
        if !self.config.enable_pan {
            return;
        }
        self.pointer = Vec2::new(x, y);
        self.state = InteractionState::Panning;
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, viewport: Viewport) {
        if self.state == InteractionState::Idle {
            return;
        }
        let end = Vec2::new(x, y);
        let d = end - self.pointer;
        let width = viewport.width.max(1.0);
        let height = viewport.height.max(1.0);
        match self.state {
            InteractionState::Rotating => {
                // drag right spins the view leftward around the target
                self.delta.theta -= TAU * d.x / width;
                self.delta.phi -= TAU * d.y / height;
            }
            InteractionState::Panning => self.accumulate_pan(d, height),
            InteractionState::Idle => {}
        }
        self.pointer = end;
    }

    pub fn on_pointer_up(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Negative `delta_y` (scroll up) zooms in. Only the latest request per
    /// frame is honoured.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if delta_y == 0.0 || delta_y.is_nan() {
            return;
        }
        let scale_factor = if delta_y < 0.0 {
            1.0 / self.config.zoom_step
        } else {
            self.config.zoom_step
        };
        self.zoom = Some(ZoomRequest { scale_factor });
    }

    fn accumulate_pan(&mut self, d: Vec2, height: f32) {
        let offset = self.camera.position - self.camera.target;
        let target_distance = offset.length() * (self.config.fov_y_radians * 0.5).tan();
        let forward = (-offset).normalize_or_zero();
        let right = forward.cross(self.camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let left_amount = 2.0 * d.x * target_distance / height;
        let up_amount = 2.0 * d.y * target_distance / height;
        self.pan_offset += right * -left_amount + up * up_amount;
    }

    // ---------------- Frame ----------------

    /// Apply pending motion to the camera. Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        let before = self.camera.position;
        let offset = self.camera.position - self.camera.target;
        let mut s = match Spherical::from_offset(offset) {
            Ok(s) => s,
            Err(_) => {
                log::warn!(
                    "[orbit] camera on target; restoring min distance along azimuth {:.3}",
                    self.last_azimuth
                );
                Spherical::new(self.config.min_distance, FRAC_PI_2, self.last_azimuth)
            }
        };

        s.theta += self.delta.theta;
        s.phi += self.delta.phi;
        s.phi = s
            .phi
            .clamp(self.config.min_polar_angle, self.config.max_polar_angle);
        s = s.make_safe();

        if let Some(zoom) = self.zoom.take() {
            s.radius *= zoom.scale_factor;
        }
        s.radius = s
            .radius
            .clamp(self.config.min_distance, self.config.max_distance);

        self.camera.target += self.pan_offset;

        if self.config.enable_damping {
            let keep = 1.0 - self.config.damping_factor;
            self.delta.theta *= keep;
            self.delta.phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.delta = OrbitDelta::default();
            self.pan_offset = Vec3::ZERO;
        }

        self.last_azimuth = s.theta;
        self.camera.position = self.camera.target + s.to_offset();
        (self.camera.position - before).length_squared() > EPS * EPS
    }

    /// Drop all pending motion without moving the camera.
    pub fn reset(&mut self) {
        self.delta = OrbitDelta::default();
        self.pan_offset = Vec3::ZERO;
        self.zoom = None;
        self.state = InteractionState::Idle;
    }

    // ---------------- Re-homing ----------------

    pub fn set_position(&mut self, position: Vec3) {
        self.camera.position = position;
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.camera.target = target;
    }

    pub fn home(&mut self, position: Vec3, target: Vec3) {
        self.reset();
        self.camera.position = position;
        self.camera.target = target;
        if let Ok(s) = Spherical::from_offset(position - target) {
            self.last_azimuth = s.theta;
        }
    }
}
