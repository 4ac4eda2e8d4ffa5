use glam::Vec3;

// Shared camera/geometry/pricing defaults used by both web and native frontends.

// Spherical math
pub const EPS: f32 = 1e-6; // keeps sin(phi) > 0 away from the poles

// Camera home
pub const CAMERA_HOME: [f32; 3] = [12.0, 10.0, 20.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit tuning
pub const DAMPING_FACTOR: f32 = 0.05;
pub const ZOOM_STEP: f32 = 1.1; // one wheel notch scales radius by this
pub const MIN_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 500.0;

// Box geometry (inches)
pub const WALL_THICKNESS: f32 = 0.125;
pub const MIN_DIMENSION: f32 = 1.0;
pub const MAX_DIMENSION: f32 = 120.0;
pub const MAX_LIP_SIZE: f32 = 6.0;
pub const DEFAULT_BOX: [f32; 3] = [14.0, 8.0, 20.0]; // width A, width B, height

// Palette
pub const PANEL_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0]; // 0x999999
pub const FLANGE_COLOR: [f32; 4] = [0.5, 0.5, 0.52, 1.0];
pub const OUTER_EDGE_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
pub const INNER_EDGE_COLOR: [f32; 4] = [0.2, 0.35, 0.7, 1.0];

// Pricing
pub const PER_INCH_RATE: f64 = 1.9;
pub const END_CAP_SURCHARGE: f64 = 12.5;
pub const DEFAULT_SHIPPING_FEE: f64 = 35.0;
pub const SHIPPING_ZONES: &[(&str, f64)] = &[
    ("1", 25.0),
    ("3", 45.0),
    ("4", 45.0),
    ("5", 35.0),
    ("6", 55.0),
    ("7", 60.0),
    ("8", 65.0),
    ("9", 70.0),
];
pub const DEFAULT_ZONE: &str = "5";

#[inline]
pub fn camera_home_vec3() -> Vec3 {
    Vec3::from(CAMERA_HOME)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}
