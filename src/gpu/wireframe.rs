//! Wireframe rendering for the floating shapes.
//!
//! The three shape meshes are concatenated into one segment buffer at init;
//! each segment carries the index of the shape it belongs to. Per frame only
//! a small per-shape parameter table (model matrix + color) is rewritten.
//! Each segment is expanded in the vertex shader into a thin camera-robust
//! quad, the same technique used for billboarded line rendering elsewhere.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::scene::Scene;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Line half-thickness in world units.
const LINE_THICKNESS: f32 = 0.02;

/// One mesh edge, tagged with its owning shape.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct SegmentGpu {
    a: [f32; 3],
    shape: u32,
    b: [f32; 3],
    _pad: u32,
}

/// Per-shape draw parameters, rewritten every frame.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct ShapeParamsGpu {
    model: [[f32; 4]; 4],
    /// RGB accent color plus opacity in the alpha channel.
    color: [f32; 4],
}

/// Fixed wireframe parameters.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct WireframeParams {
    line_thickness: f32,
    _pad: [f32; 3],
}

/// Expands tagged line segments into quads, transformed by the owning
/// shape's model matrix and faded by the shared depth fog.
pub const WIREFRAME_SHADER: &str = r#"struct Uniforms {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    model: mat4x4<f32>,
    fog_color: vec3<f32>,
    fog_near: f32,
    fog_far: f32,
    time: f32,
    opacity: f32,
    point_scale: f32,
};

struct Segment {
    a: vec3<f32>,
    shape: u32,
    b: vec3<f32>,
    _pad: u32,
};

struct ShapeParams {
    model: mat4x4<f32>,
    color: vec4<f32>,
};

struct WireframeParams {
    line_thickness: f32,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;
@group(0) @binding(1) var<storage, read> segments: array<Segment>;
@group(0) @binding(2) var<storage, read> shape_params: array<ShapeParams>;
@group(0) @binding(3) var<uniform> params: WireframeParams;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @builtin(instance_index) instance_index: u32,
) -> VertexOutput {
    var out: VertexOutput;

    let segment = segments[instance_index];
    let shape = shape_params[segment.shape];

    let world_a = (shape.model * vec4<f32>(segment.a, 1.0)).xyz;
    let world_b = (shape.model * vec4<f32>(segment.b, 1.0)).xyz;

    let line_dir = world_b - world_a;
    let line_len = length(line_dir);
    if line_len < 0.0001 {
        out.clip_position = vec4<f32>(0.0, 0.0, -1000.0, 1.0);
        out.color = vec4<f32>(0.0);
        return out;
    }
    let dir = line_dir / line_len;

    // Two perpendiculars so the quad stays visible from any angle.
    var perp = cross(dir, vec3<f32>(0.0, 1.0, 0.0));
    if length(perp) < 0.001 {
        perp = cross(dir, vec3<f32>(1.0, 0.0, 0.0));
    }
    perp = normalize(perp) * params.line_thickness;
    let perp2 = normalize(cross(dir, perp)) * params.line_thickness;

    var pos: vec3<f32>;
    switch vertex_index {
        case 0u: { pos = world_a - perp - perp2; }
        case 1u: { pos = world_a + perp + perp2; }
        case 2u: { pos = world_b - perp - perp2; }
        case 3u: { pos = world_a + perp + perp2; }
        case 4u: { pos = world_b - perp - perp2; }
        default: { pos = world_b + perp + perp2; }
    }

    let view_pos = uniforms.view * vec4<f32>(pos, 1.0);
    let dist = length(view_pos.xyz);
    let fog = clamp((dist - uniforms.fog_near) / (uniforms.fog_far - uniforms.fog_near), 0.0, 1.0);

    out.clip_position = uniforms.proj * view_pos;
    out.color = vec4<f32>(shape.color.rgb, shape.color.a * (1.0 - fog));
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

pub struct WireframeState {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    shape_params_buffer: wgpu::Buffer,
    num_segments: u32,
}

impl WireframeState {
    pub fn new(
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        scene: &Scene,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        // Concatenate every shape's edges, tagging each with its shape index.
        let segments: Vec<SegmentGpu> = scene
            .shapes
            .iter()
            .enumerate()
            .flat_map(|(shape_idx, shape)| {
                shape.mesh.lines.iter().map(move |(a, b)| SegmentGpu {
                    a: a.to_array(),
                    shape: shape_idx as u32,
                    b: b.to_array(),
                    _pad: 0,
                })
            })
            .collect();
        let num_segments = segments.len() as u32;

        let segment_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wireframe Segment Buffer"),
            contents: bytemuck::cast_slice(&segments),
            usage: wgpu::BufferUsages::STORAGE,
        });

        let shape_params = shape_params_from_scene(scene);
        let shape_params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Params Buffer"),
            contents: bytemuck::cast_slice(&shape_params),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });

        let params = WireframeParams {
            line_thickness: LINE_THICKNESS,
            _pad: [0.0; 3],
        };
        let params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wireframe Params Buffer"),
            contents: bytemuck::bytes_of(&params),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wireframe Shader"),
            source: wgpu::ShaderSource::Wgsl(WIREFRAME_SHADER.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Wireframe Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Wireframe Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: segment_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: shape_params_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: params_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wireframe Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let blend = crate::visuals::BlendMode::Alpha;

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Wireframe Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(blend.blend_state()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: blend.depth_write(),
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group,
            shape_params_buffer,
            num_segments,
        }
    }

    /// Rewrite the per-shape model matrices and colors for this frame.
    pub fn update(&self, queue: &wgpu::Queue, scene: &Scene) {
        let shape_params = shape_params_from_scene(scene);
        queue.write_buffer(
            &self.shape_params_buffer,
            0,
            bytemuck::cast_slice(&shape_params),
        );
    }

    /// Get the render pipeline.
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Get the bind group.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Total number of line instances to draw.
    pub fn segment_count(&self) -> u32 {
        self.num_segments
    }
}

fn shape_params_from_scene(scene: &Scene) -> Vec<ShapeParamsGpu> {
    let accent = scene.config.palette.accent();
    let opacity = scene.config.shape_opacity;

    scene
        .shapes
        .iter()
        .map(|shape| ShapeParamsGpu {
            model: shape.model_matrix().to_cols_array_2d(),
            color: [accent.x, accent.y, accent.z, opacity],
        })
        .collect()
}
