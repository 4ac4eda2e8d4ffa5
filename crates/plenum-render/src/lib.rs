//! wgpu-backed [`RenderSurface`] used by both the web and native front-ends.
//!
//! The caller creates the `wgpu::Surface` (canvas on web, window on native)
//! and hands it over; everything after adapter selection is shared.

pub mod helpers;
pub mod mesh;

use fnv::FnvHashMap;
use glam::Vec3;
use plenum_core::{Camera, CameraState, Geometry, Material, MeshHandle, RenderSurface, Topology};
use wgpu::util::DeviceExt;

pub use mesh::{bake_vertices, GpuVertex};

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

/// Light grey viewport background (#f0f0f0).
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.94,
    g: 0.94,
    b: 0.94,
    a: 1.0,
};
const LIGHT_DIR: [f32; 4] = [1.0, 1.0, 1.0, 0.0];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    topology: Topology,
}

pub struct GpuSurface<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    tri_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    #[allow(dead_code)]
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    meshes: FnvHashMap<MeshHandle, GpuMesh>,
    scene: Vec<MeshHandle>,
    next_id: u32,
    cam_eye: Vec3,
    cam_target: Vec3,
    width: u32,
    height: u32,
}

impl<'w> GpuSurface<'w> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let tri_pipeline = helpers::make_mesh_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "panel_pipeline",
            mesh::primitive_topology(Topology::Triangles),
            format,
        );
        let line_pipeline = helpers::make_mesh_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "edge_pipeline",
            mesh::primitive_topology(Topology::Lines),
            format,
        );
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        log::info!("[gpu] surface ready {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            tri_pipeline,
            line_pipeline,
            uniform_buffer,
            bind_group,
            depth_tex,
            depth_view,
            meshes: FnvHashMap::default(),
            scene: Vec::new(),
            next_id: 0,
            cam_eye: Vec3::new(0.0, 0.0, 10.0),
            cam_target: Vec3::ZERO,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, width, height);
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn uniforms(&self) -> Uniforms {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let state = CameraState::new(self.cam_eye, self.cam_target);
        let camera = Camera::from_state(&state, aspect);
        Uniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            light_dir: LIGHT_DIR,
        }
    }
}

impl RenderSurface for GpuSurface<'_> {
    fn create_mesh(&mut self, geometry: &Geometry, material: &Material) -> MeshHandle {
        let vertices = bake_vertices(geometry, material);
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_vb"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_ib"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let handle = MeshHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.meshes.insert(
            handle,
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: geometry.indices.len() as u32,
                topology: geometry.topology,
            },
        );
        handle
    }

    fn add_to_scene(&mut self, handle: MeshHandle) {
        if !self.meshes.contains_key(&handle) {
            log::warn!("[gpu] add_to_scene: unknown mesh {:?}", handle);
            return;
        }
        if !self.scene.contains(&handle) {
            self.scene.push(handle);
        }
    }

    fn remove_from_scene(&mut self, handle: MeshHandle) {
        self.scene.retain(|h| *h != handle);
    }

    fn release_mesh(&mut self, handle: MeshHandle) {
        self.remove_from_scene(handle);
        if let Some(mesh) = self.meshes.remove(&handle) {
            mesh.vertex_buffer.destroy();
            mesh.index_buffer.destroy();
        }
    }

    fn set_camera_position(&mut self, position: Vec3) {
        self.cam_eye = position;
    }

    fn set_camera_look_at(&mut self, target: Vec3) {
        self.cam_target = target;
    }

    fn present_frame(&mut self) -> anyhow::Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // skip this frame; the next one uses the fresh configuration
                self.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("[gpu] frame timeout");
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!("surface error: {e:?}")),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms()));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            for handle in &self.scene {
                let Some(mesh) = self.meshes.get(handle) else {
                    continue;
                };
                let pipeline = match mesh.topology {
                    Topology::Triangles => &self.tri_pipeline,
                    Topology::Lines => &self.line_pipeline,
                };
                rpass.set_pipeline(pipeline);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
