//! Point cloud and background rendering
//!
//! Two screen-space pipelines: a fullscreen vertical gradient behind the
//! scene, and instanced billboard quads masked to circles for the field
//! samples. Both consume pixel coordinates via a shared screen uniform.

use crate::constants::POINT_RADIUS;
use crate::graphics::GraphicsContext;
use crate::projection::{ScreenProjector, ViewRotation};
use glam::Vec3;
use wgpu::util::DeviceExt;

/// Instance data for one rendered field sample
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    /// Center in screen pixels
    pub position: [f32; 2],
    /// Radius in pixels
    pub size: f32,
    pub color: [f32; 4],
}

impl PointInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x2,  // position
        3 => Float32,    // size
        4 => Float32x4,  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad corner for point billboards
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

/// Window size uniform for the pixel to NDC mapping
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ScreenUniform {
    size: [f32; 2],
    _pad: [f32; 2],
}

/// Renderer for the orbital field view
pub struct OrbitalRenderer {
    gradient_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    point_buffer: wgpu::Buffer,
    max_points: usize,
    screen_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
}

impl OrbitalRenderer {
    pub fn new(ctx: &GraphicsContext, max_points: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Orbital Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/orbital.wgsl").into()),
        });

        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Screen Buffer"),
            size: std::mem::size_of::<ScreenUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let screen_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Screen Bind Group Layout"),
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

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Screen Bind Group"),
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Orbital Pipeline Layout"),
            bind_group_layouts: &[&screen_bind_group_layout],
            push_constant_ranges: &[],
        });

        let blend_state = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        };

        let primitive = wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        };

        // Background gradient: fullscreen triangle, no vertex buffers
        let gradient_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Gradient Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_gradient",
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_gradient",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive,
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Point Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_point",
                buffers: &[QuadVertex::layout(), PointInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_point",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(blend_state),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive,
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let point_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Point Instance Buffer"),
            size: (std::mem::size_of::<PointInstance>() * max_points) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            gradient_pipeline,
            point_pipeline,
            quad_buffer,
            point_buffer,
            max_points,
            screen_buffer,
            screen_bind_group,
        }
    }

    pub fn update_screen(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let uniform = ScreenUniform {
            size: [width as f32, height as f32],
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn update_points(&self, queue: &wgpu::Queue, points: &[PointInstance]) {
        let data = &points[..points.len().min(self.max_points)];
        queue.write_buffer(&self.point_buffer, 0, bytemuck::cast_slice(data));
    }

    /// Draw the background gradient, clearing the frame
    pub fn render_background(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Gradient Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.gradient_pipeline);
        render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
        render_pass.draw(0..3, 0..1);
    }

    /// Draw the field points over the existing frame contents
    pub fn render_points(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        num_points: u32,
    ) {
        let num_points = num_points.min(self.max_points as u32);

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Point Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.point_pipeline);
        render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.point_buffer.slice(..));
        render_pass.draw(0..6, 0..num_points);
    }
}

/// Rotate, project, and color the field samples for rendering
pub fn field_to_points(
    data: &[(Vec3, f32)],
    rotation: &ViewRotation,
    projector: &ScreenProjector,
) -> Vec<PointInstance> {
    data.iter()
        .map(|&(pos, t)| {
            let screen = projector.project(rotation.rotate(pos));
            PointInstance {
                position: [screen.x, screen.y],
                size: POINT_RADIUS,
                color: intensity_color(t),
            }
        })
        .collect()
}

/// Intensity ramp: dim blue-violet at 0, bright magenta-white toward 1
fn intensity_color(t: f32) -> [f32; 4] {
    [t, (1.0 - t) * (100.0 / 255.0), t * (200.0 / 255.0), 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_color_matches_the_ramp_endpoints() {
        let low = intensity_color(0.0);
        assert!((low[0] - 0.0).abs() < 1e-6);
        assert!((low[1] - 100.0 / 255.0).abs() < 1e-6);
        assert!((low[2] - 0.0).abs() < 1e-6);

        let high = intensity_color(1.0);
        assert!((high[0] - 1.0).abs() < 1e-6);
        assert!((high[1] - 0.0).abs() < 1e-6);
        assert!((high[2] - 200.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn field_points_land_at_projected_pixels() {
        let rotation = ViewRotation::new();
        let projector = ScreenProjector::new(800.0, 800.0, 80.0);
        let data = vec![(Vec3::ZERO, 0.5)];
        let points = field_to_points(&data, &rotation, &projector);
        assert_eq!(points.len(), 1);
        assert!((points[0].position[0] - 400.0).abs() < 1e-5);
        assert!((points[0].position[1] - 400.0).abs() < 1e-5);
        assert!((points[0].size - POINT_RADIUS).abs() < 1e-6);
    }
}
