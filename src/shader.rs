use std::fmt;
use std::path::{Path, PathBuf};

pub const VERTEX_SHADER_FILE: &str = "complex_dynamics.vert.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "complex_dynamics.frag.wgsl";
pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const fn file_name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_SHADER_FILE,
            ShaderStage::Fragment => FRAGMENT_SHADER_FILE,
        }
    }

    pub const fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_ENTRY,
            ShaderStage::Fragment => FRAGMENT_ENTRY,
        }
    }

    /// Upper-case tag used in compile diagnostics
    pub const fn tag(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        }
    }
}

#[derive(Debug)]
pub enum ShaderError {
    /// A shader file could not be read
    Missing {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Missing { path, .. } => {
                write!(f, "Could not find file: \"{}\"", path.display())
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Missing { source, .. } => Some(source),
        }
    }
}

/// Vertex and fragment WGSL text, loaded once at startup
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Read both stages from `dir`
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let dir = dir.as_ref();
        let vertex = read_source(&dir.join(ShaderStage::Vertex.file_name()))?;
        let fragment = read_source(&dir.join(ShaderStage::Fragment.file_name()))?;

        log::debug!("vertex shader:\n{vertex}");
        log::debug!("fragment shader:\n{fragment}");

        Ok(Self { vertex, fragment })
    }

    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

pub fn read_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Missing {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of building the shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramReport {
    pub vertex_compiled: bool,
    pub fragment_compiled: bool,
    pub linked: bool,
}

impl ProgramReport {
    /// Whether draw calls may use the pipeline
    pub fn is_usable(&self) -> bool {
        self.linked
    }
}

/// Compiled modules linked into a render pipeline.
///
/// Compile and link failures are logged and recorded in the report; the
/// pipeline handle exists either way.
pub struct ShaderProgram {
    pub pipeline: wgpu::RenderPipeline,
    pub report: ProgramReport,
}

impl ShaderProgram {
    pub fn build(
        device: &wgpu::Device,
        sources: &ShaderSources,
        bind_group_layout: &wgpu::BindGroupLayout,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        let (vertex, vertex_compiled) = compile_stage(device, sources, ShaderStage::Vertex);
        let (fragment, fragment_compiled) = compile_stage(device, sources, ShaderStage::Fragment);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Fractal Pipeline Layout"),
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Fractal Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some(ShaderStage::Vertex.entry_point()),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some(ShaderStage::Fragment.entry_point()),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
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
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let linked = match pollster::block_on(device.pop_error_scope()) {
            None => true,
            Some(err) => {
                log::error!("ERROR::PROGRAM::LINKING_FAILED\n{err}");
                false
            }
        };

        let report = ProgramReport {
            vertex_compiled,
            fragment_compiled,
            linked,
        };
        log::debug!("shader program: {report:?}");

        Self { pipeline, report }
    }
}

/// Compile one stage, logging the compiler output on failure.
/// Returns the module and whether it compiled cleanly.
fn compile_stage(
    device: &wgpu::Device,
    sources: &ShaderSources,
    stage: ShaderStage,
) -> (wgpu::ShaderModule, bool) {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.file_name()),
        source: wgpu::ShaderSource::Wgsl(sources.source(stage).into()),
    });
    let info = pollster::block_on(module.get_compilation_info());
    let scope_error = pollster::block_on(device.pop_error_scope());

    let mut errors = Vec::new();
    for message in &info.messages {
        let location = message
            .location
            .as_ref()
            .map(|loc| (loc.line_number, loc.line_position));
        let line = format_log_line(location, &message.message);
        match message.message_type {
            wgpu::CompilationMessageType::Error => errors.push(line),
            wgpu::CompilationMessageType::Warning => {
                log::warn!("{} shader: {line}", stage.tag().to_lowercase())
            }
            _ => {
                log::info!("{} shader: {line}", stage.tag().to_lowercase())
            }
        }
    }
    if errors.is_empty() {
        if let Some(err) = scope_error {
            errors.push(err.to_string());
        }
    }

    if errors.is_empty() {
        return (module, true);
    }

    log::error!(
        "ERROR::SHADER::{}::COMPILATION_FAILED\n{}",
        stage.tag(),
        errors.join("\n")
    );
    (module, false)
}

/// One compiler log line, prefixed with `line:column` when known
pub fn format_log_line(location: Option<(u32, u32)>, message: &str) -> String {
    match location {
        Some((line, column)) => format!("{line}:{column}: {message}"),
        None => message.to_string(),
    }
}
