//! The owning context that ties input, geometry, pricing and a render surface
//! together. Frontends hold one of these instead of module-level globals.

use crate::error::{CheckoutError, PlenumError};
use crate::geometry::{Geometry, Material};
use crate::orbit::OrbitController;
use crate::plenum::{BoxBuilder, BoxMesh, BoxSpec};
use crate::pricing::{compute_cost, CheckoutService, PricingConfig, Quote, QuoteRequest};
use glam::Vec3;
use smallvec::SmallVec;

/// Opaque id for a mesh uploaded to a render surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Capabilities the core needs from a display backend.
pub trait RenderSurface {
    fn create_mesh(&mut self, geometry: &Geometry, material: &Material) -> MeshHandle;
    fn add_to_scene(&mut self, handle: MeshHandle);
    fn remove_from_scene(&mut self, handle: MeshHandle);
    /// Free backend resources for a mesh that will never be shown again.
    fn release_mesh(&mut self, handle: MeshHandle);
    fn set_camera_position(&mut self, position: Vec3);
    fn set_camera_look_at(&mut self, target: Vec3);
    fn present_frame(&mut self) -> anyhow::Result<()>;
}

pub struct PlenumScene<S: RenderSurface> {
    surface: S,
    controller: OrbitController,
    builder: BoxBuilder,
    pricing: PricingConfig,
    spec: BoxSpec,
    zone: String,
    cost: f64,
    handles: SmallVec<[MeshHandle; 12]>,
}

impl<S: RenderSurface> PlenumScene<S> {
    pub fn new(
        surface: S,
        controller: OrbitController,
        pricing: PricingConfig,
        spec: BoxSpec,
        zone: &str,
    ) -> Result<Self, PlenumError> {
        let mut scene = Self {
            surface,
            controller,
            builder: BoxBuilder::new(),
            pricing,
            spec,
            zone: zone.to_string(),
            cost: 0.0,
            handles: SmallVec::new(),
        };
        scene.rebuild(spec)?;
        scene.cost = compute_cost(&spec, zone, &scene.pricing);
        log::info!(
            "[scene] ready: {}x{}x{} cost={:.2}",
            spec.width_a,
            spec.width_b,
            spec.height,
            scene.cost
        );
        Ok(scene)
    }

    /// Rebuild the mesh and recompute the cost. An invalid spec leaves the
    /// current preview and cost untouched.
    pub fn on_dimension_changed(&mut self, spec: BoxSpec) -> Result<f64, PlenumError> {
        if let Err(e) = self.rebuild(spec) {
            log::warn!("[scene] rejected spec: {e}");
            return Err(e);
        }
        self.spec = spec;
        self.cost = compute_cost(&spec, &self.zone, &self.pricing);
        log::debug!("[scene] cost={:.2}", self.cost);
        Ok(self.cost)
    }

    pub fn on_zone_changed(&mut self, zone: &str) -> f64 {
        self.zone = zone.to_string();
        self.cost = compute_cost(&self.spec, zone, &self.pricing);
        log::debug!("[scene] zone={} cost={:.2}", zone, self.cost);
        self.cost
    }

    /// Advance the camera one frame and present it.
    pub fn frame(&mut self) -> anyhow::Result<()> {
        self.controller.update();
        let cam = self.controller.camera();
        self.surface.set_camera_position(cam.position);
        self.surface.set_camera_look_at(cam.target);
        self.surface.present_frame()
    }

    /// Ask the checkout backend for a quote. Failures never touch camera or mesh state.
    pub fn request_quote(&self, service: &dyn CheckoutService) -> Result<Quote, CheckoutError> {
        let request = QuoteRequest::from_spec(&self.spec, &self.zone, self.cost);
        service.quote(&request).map_err(|e| {
            log::error!("[checkout] {} failed: {e}", request.sku());
            e
        })
    }

    fn rebuild(&mut self, spec: BoxSpec) -> Result<(), PlenumError> {
        let mesh = self.builder.build(&spec)?;
        let parts = mesh.parts();
        for h in self.handles.drain(..) {
            self.surface.remove_from_scene(h);
            self.surface.release_mesh(h);
        }
        for (geometry, material) in &parts {
            let h = self.surface.create_mesh(geometry, material);
            self.surface.add_to_scene(h);
            self.handles.push(h);
        }
        Ok(())
    }

    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut OrbitController {
        &mut self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn mesh(&self) -> Option<&BoxMesh> {
        self.builder.current()
    }

    pub fn spec(&self) -> &BoxSpec {
        &self.spec
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn mesh_handles(&self) -> &[MeshHandle] {
        &self.handles
    }
}
