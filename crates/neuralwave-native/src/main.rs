//! Desktop harness: same scene engine and shader as the web build, driven by
//! a winit event loop instead of requestAnimationFrame.

use glam::Vec2;
use neuralwave_core::{
    geometry::Mesh, link_vertices, node_instances, shape_batches, DisplayProfile, LineVertex,
    MeshInstance, SceneState, ShapeKind, ACCENT_LIGHT_HUES, ACCENT_LIGHT_INTENSITY,
    ACCENT_LIGHT_POSITIONS, ACCENT_LIGHT_RANGE, AMBIENT_LIGHT_INTENSITY, CLEAR_COLOR, FOG_FAR,
    FOG_NEAR,
};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    accent_positions: [[f32; 4]; 2],
    accent_colors: [[f32; 4]; 2],
    scene_params: [f32; 4],
    fog_color: [f32; 4],
}

fn scene_globals(view_proj: [[f32; 4]; 4]) -> Globals {
    let accent_positions = ACCENT_LIGHT_POSITIONS
        .map(|p| [p[0], p[1], p[2], ACCENT_LIGHT_RANGE]);
    let accent_colors = ACCENT_LIGHT_HUES.map(|c| [c[0], c[1], c[2], ACCENT_LIGHT_INTENSITY]);
    Globals {
        view_proj,
        accent_positions,
        accent_colors,
        scene_params: [AMBIENT_LIGHT_INTENSITY, FOG_NEAR, FOG_FAR, 0.0],
        fog_color: [
            CLEAR_COLOR[0] as f32,
            CLEAR_COLOR[1] as f32,
            CLEAR_COLOR[2] as f32,
            1.0,
        ],
    }
}

const INSTANCE_STRIDE: u64 = std::mem::size_of::<MeshInstance>() as u64;
const LINE_VERTEX_STRIDE: u64 = std::mem::size_of::<LineVertex>() as u64;

struct MeshBuffers {
    vertex: wgpu::Buffer,
    tri_index: wgpu::Buffer,
    tri_count: u32,
    wire_index: wgpu::Buffer,
    wire_count: u32,
}

impl MeshBuffers {
    fn new(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let tri_index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let wire = mesh.wireframe_indices();
        let wire_index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&wire),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex,
            tri_index,
            tri_count: mesh.indices.len() as u32,
            wire_index,
            wire_count: wire.len() as u32,
        }
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    link_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    node_mesh: MeshBuffers,
    shape_meshes: [MeshBuffers; 5],
    instance_buffer: wgpu::Buffer,
    instance_capacity: u64,
    line_buffer: wgpu::Buffer,
    line_capacity: u64,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(neuralwave_core::SCENE_WGSL.into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pipeline_layout"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });

        let mesh_position_layout = wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3],
        };
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: INSTANCE_STRIDE,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                1 => Float32x4, 2 => Float32x4, 3 => Float32x4, 4 => Float32x4,
                5 => Float32x4, 6 => Float32x4,
            ],
        };
        let line_vertex_layout = wgpu::VertexBufferLayout {
            array_stride: LINE_VERTEX_STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4],
        };

        let make_mesh_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_mesh"),
                    buffers: &[mesh_position_layout.clone(), instance_layout.clone()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_mesh"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };
        let mesh_pipeline =
            make_mesh_pipeline("mesh_pipeline", wgpu::PrimitiveTopology::TriangleList);
        let wire_pipeline = make_mesh_pipeline("wire_pipeline", wgpu::PrimitiveTopology::LineList);

        // Additive blend so crossing links brighten instead of darkening.
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };
        let link_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("link_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_line"),
                buffers: &[line_vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let node_mesh = MeshBuffers::new(&device, "node_sphere", &Mesh::node_sphere());
        let shape_meshes =
            ShapeKind::ALL.map(|kind| MeshBuffers::new(&device, kind.label(), &Mesh::for_kind(kind)));

        let instance_capacity = 128 * INSTANCE_STRIDE;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: instance_capacity,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_capacity = 1024 * LINE_VERTEX_STRIDE;
        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("link_lines"),
            size: line_capacity,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            wire_pipeline,
            link_pipeline,
            globals_buffer,
            globals_bind_group,
            node_mesh,
            shape_meshes,
            instance_buffer,
            instance_capacity,
            line_buffer,
            line_capacity,
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn ensure_instance_capacity(&mut self, bytes: u64) {
        if bytes > self.instance_capacity {
            self.instance_capacity = bytes.next_power_of_two();
            self.instance_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("instances"),
                size: self.instance_capacity,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
    }

    fn ensure_line_capacity(&mut self, bytes: u64) {
        if bytes > self.line_capacity {
            self.line_capacity = bytes.next_power_of_two();
            self.line_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("link_lines"),
                size: self.line_capacity,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
    }

    fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&scene_globals(
                scene.camera(aspect).view_projection().to_cols_array_2d(),
            )),
        );

        // Nodes first, then per-kind solid and wireframe shape batches, all
        // in one instance upload with draw ranges recorded along the way.
        let mut instances = node_instances(&scene.graph);
        let node_range = 0..instances.len() as u32;
        let batches = shape_batches(&scene.shapes);
        let mut solid_ranges = Vec::with_capacity(5);
        let mut wire_ranges = Vec::with_capacity(5);
        for batch in &batches.solid {
            let start = instances.len() as u32;
            instances.extend_from_slice(batch);
            solid_ranges.push(start..instances.len() as u32);
        }
        for batch in &batches.wire {
            let start = instances.len() as u32;
            instances.extend_from_slice(batch);
            wire_ranges.push(start..instances.len() as u32);
        }
        self.ensure_instance_capacity(instances.len() as u64 * INSTANCE_STRIDE);
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        let lines = link_vertices(&scene.graph);
        self.ensure_line_capacity(lines.len() as u64 * LINE_VERTEX_STRIDE);
        self.queue
            .write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&lines));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_vertex_buffer(0, self.node_mesh.vertex.slice(..));
            rpass.set_index_buffer(self.node_mesh.tri_index.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.node_mesh.tri_count, 0, node_range);

            for (mesh, range) in self.shape_meshes.iter().zip(solid_ranges) {
                if range.is_empty() {
                    continue;
                }
                rpass.set_vertex_buffer(0, mesh.vertex.slice(..));
                rpass.set_index_buffer(mesh.tri_index.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.tri_count, 0, range);
            }

            rpass.set_pipeline(&self.wire_pipeline);
            for (mesh, range) in self.shape_meshes.iter().zip(wire_ranges) {
                if range.is_empty() {
                    continue;
                }
                rpass.set_vertex_buffer(0, mesh.vertex.slice(..));
                rpass.set_index_buffer(mesh.wire_index.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.wire_count, 0, range);
            }

            if !lines.is_empty() {
                rpass.set_pipeline(&self.link_pipeline);
                rpass.set_vertex_buffer(0, self.line_buffer.slice(..));
                rpass.draw(0..lines.len() as u32, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn display_profile(window: &winit::window::Window) -> DisplayProfile {
    let scale = window.scale_factor();
    let logical_width = (window.inner_size().width as f64 / scale) as u32;
    DisplayProfile {
        viewport_width_px: logical_width,
        high_density: scale >= 2.0,
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("NeuralWave")
        .build(&event_loop)
        .expect("window");

    let profile = display_profile(&window);
    log::info!(
        "[scene] viewport={}px high_density={} -> nodes={} shapes={}",
        profile.viewport_width_px,
        profile.high_density,
        profile.node_count(),
        profile.shape_count()
    );
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut scene = SceneState::new(&profile, seed);

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");
    let started = Instant::now();
    let mut pointer = Vec2::ZERO;
    let mut running = true;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                // Normalized to [-1, 1] relative to the window center.
                let half_w = state.width.max(1) as f64 / 2.0;
                let half_h = state.height.max(1) as f64 / 2.0;
                pointer.x = ((position.x - half_w) / half_w) as f32;
                pointer.y = ((position.y - half_h) / half_h) as f32;
            }
            Event::WindowEvent {
                event: WindowEvent::Occluded(occluded),
                ..
            } => {
                running = !occluded;
                if occluded {
                    log::info!("[frame] paused, window occluded");
                } else {
                    log::info!("[frame] resumed");
                    state.window.request_redraw();
                }
            }
            Event::AboutToWait => {
                if !running {
                    return;
                }
                let now_ms = started.elapsed().as_secs_f64() * 1000.0;
                scene.step(now_ms, Some(pointer));
                match state.render(&scene) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}
