//! Parametric plenum box.
//!
//! Axes: `width_a` runs along X, `width_b` along Y and `height` along Z. The
//! `+Z` end is always open; the optional end cap closes `-Z`.

use crate::constants::{
    FLANGE_COLOR, INNER_EDGE_COLOR, MAX_DIMENSION, MAX_LIP_SIZE, MIN_DIMENSION,
    OUTER_EDGE_COLOR, PANEL_COLOR, WALL_THICKNESS,
};
use crate::error::PlenumError;
use crate::geometry::{box_corners, Geometry, Material, BOX_EDGES};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSpec {
    pub width_a: f32,
    pub width_b: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub end_cap: bool,
    pub lip_size: f32,
}

impl BoxSpec {
    pub fn new(width_a: f32, width_b: f32, height: f32) -> Self {
        Self {
            width_a,
            width_b,
            height,
            wall_thickness: WALL_THICKNESS,
            end_cap: false,
            lip_size: 0.0,
        }
    }

    pub fn with_end_cap(mut self, end_cap: bool) -> Self {
        self.end_cap = end_cap;
        self
    }

    pub fn with_lip_size(mut self, lip_size: f32) -> Self {
        self.lip_size = lip_size;
        self
    }

    pub fn with_wall_thickness(mut self, wall_thickness: f32) -> Self {
        self.wall_thickness = wall_thickness;
        self
    }

    /// Outer extents as `(width_a, width_b, height)`.
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.width_a, self.width_b, self.height)
    }

    pub fn validate(&self) -> Result<(), PlenumError> {
        for (name, value) in [
            ("width_a", self.width_a),
            ("width_b", self.width_b),
            ("height", self.height),
            ("wall_thickness", self.wall_thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlenumError::InvalidSpec(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let smallest = self.width_a.min(self.width_b).min(self.height);
        if self.wall_thickness >= smallest * 0.5 {
            return Err(PlenumError::InvalidSpec(format!(
                "wall thickness {} must be less than half the smallest dimension {}",
                self.wall_thickness, smallest
            )));
        }
        if !(self.lip_size.is_finite() && self.lip_size >= 0.0) {
            return Err(PlenumError::InvalidSpec(format!(
                "lip_size must be zero or positive, got {}",
                self.lip_size
            )));
        }
        Ok(())
    }

    /// Pull raw user input into the buildable range. Wall thickness is left
    /// alone; it is a product constant rather than a user input.
    pub fn clamped(self) -> Self {
        let dim = |v: f32| {
            if v.is_finite() {
                v.clamp(MIN_DIMENSION, MAX_DIMENSION)
            } else {
                MIN_DIMENSION
            }
        };
        Self {
            width_a: dim(self.width_a),
            width_b: dim(self.width_b),
            height: dim(self.height),
            lip_size: if self.lip_size.is_finite() {
                self.lip_size.clamp(0.0, MAX_LIP_SIZE)
            } else {
                0.0
            },
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    Top,
    Bottom,
    Left,
    Right,
    EndCap,
    Flange,
}

/// A solid axis-aligned slab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub center: Vec3,
    pub size: Vec3,
}

impl Panel {
    pub fn geometry(&self) -> Geometry {
        Geometry::cuboid(self.center, self.size)
    }
}

/// Wireframe outline of an axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSet {
    pub center: Vec3,
    pub extents: Vec3,
}

impl EdgeSet {
    pub fn segments(&self) -> [(Vec3, Vec3); 12] {
        let c = box_corners(self.center, self.extents);
        BOX_EDGES.map(|[a, b]| (c[a as usize], c[b as usize]))
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::wire_box(self.center, self.extents)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxMesh {
    pub spec: BoxSpec,
    pub panels: SmallVec<[Panel; 5]>,
    pub flanges: SmallVec<[Panel; 4]>,
    pub outer_edges: EdgeSet,
    pub inner_edges: EdgeSet,
}

impl BoxMesh {
    pub fn has_end_cap(&self) -> bool {
        self.panels.iter().any(|p| p.kind == PanelKind::EndCap)
    }

    /// Every drawable part with its material, walls first.
    pub fn parts(&self) -> Vec<(Geometry, Material)> {
        let mut parts = Vec::with_capacity(self.panels.len() + self.flanges.len() + 2);
        for p in &self.panels {
            parts.push((p.geometry(), Material::surface(PANEL_COLOR)));
        }
        for f in &self.flanges {
            parts.push((f.geometry(), Material::surface(FLANGE_COLOR)));
        }
        parts.push((self.outer_edges.geometry(), Material::wire(OUTER_EDGE_COLOR)));
        parts.push((self.inner_edges.geometry(), Material::wire(INNER_EDGE_COLOR)));
        parts
    }
}

/// Build a fresh mesh for `spec`. Identical specs give identical meshes.
pub fn build_box(spec: &BoxSpec) -> Result<BoxMesh, PlenumError> {
    spec.validate()?;
    let (a, b, h, t) = (spec.width_a, spec.width_b, spec.height, spec.wall_thickness);

    let mut panels: SmallVec<[Panel; 5]> = SmallVec::new();
    let y_wall = b * 0.5 - t * 0.5;
    let x_wall = a * 0.5 - t * 0.5;
    panels.push(Panel {
        kind: PanelKind::Top,
        center: Vec3::new(0.0, y_wall, 0.0),
        size: Vec3::new(a, t, h),
    });
    panels.push(Panel {
        kind: PanelKind::Bottom,
        center: Vec3::new(0.0, -y_wall, 0.0),
        size: Vec3::new(a, t, h),
    });
    // side walls sit between top and bottom so nothing overlaps
    panels.push(Panel {
        kind: PanelKind::Left,
        center: Vec3::new(-x_wall, 0.0, 0.0),
        size: Vec3::new(t, b - 2.0 * t, h),
    });
    panels.push(Panel {
        kind: PanelKind::Right,
        center: Vec3::new(x_wall, 0.0, 0.0),
        size: Vec3::new(t, b - 2.0 * t, h),
    });
    if spec.end_cap {
        panels.push(Panel {
            kind: PanelKind::EndCap,
            center: Vec3::new(0.0, 0.0, -(h * 0.5 - t * 0.5)),
            size: Vec3::new(a - 2.0 * t, b - 2.0 * t, t),
        });
    }

    let mut flanges: SmallVec<[Panel; 4]> = SmallVec::new();
    if spec.lip_size > 0.0 {
        let l = spec.lip_size;
        let z = h * 0.5 - t * 0.5;
        let y = b * 0.5 + l * 0.5;
        let x = a * 0.5 + l * 0.5;
        for sign in [1.0, -1.0] {
            flanges.push(Panel {
                kind: PanelKind::Flange,
                center: Vec3::new(0.0, sign * y, z),
                size: Vec3::new(a + 2.0 * l, l, t),
            });
        }
        for sign in [1.0, -1.0] {
            flanges.push(Panel {
                kind: PanelKind::Flange,
                center: Vec3::new(sign * x, 0.0, z),
                size: Vec3::new(l, b, t),
            });
        }
    }

    let outer_edges = EdgeSet {
        center: Vec3::ZERO,
        extents: spec.extents(),
    };
    // the open end's inner edge coincides with the outer one
    let inner_len = if spec.end_cap { h - 2.0 * t } else { h };
    let inner_edges = EdgeSet {
        center: Vec3::ZERO,
        extents: Vec3::new(a - 2.0 * t, b - 2.0 * t, inner_len),
    };

    Ok(BoxMesh {
        spec: *spec,
        panels,
        flanges,
        outer_edges,
        inner_edges,
    })
}

/// Owns the currently displayed mesh; every build replaces it outright.
#[derive(Default)]
pub struct BoxBuilder {
    current: Option<BoxMesh>,
}

impl BoxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// On error the previous mesh stays current.
    pub fn build(&mut self, spec: &BoxSpec) -> Result<&BoxMesh, PlenumError> {
        let mesh = build_box(spec)?;
        log::debug!(
            "[box] rebuilt {}x{}x{} panels={} flanges={}",
            spec.width_a,
            spec.width_b,
            spec.height,
            mesh.panels.len(),
            mesh.flanges.len()
        );
        Ok(self.current.insert(mesh))
    }

    pub fn current(&self) -> Option<&BoxMesh> {
        self.current.as_ref()
    }
}
