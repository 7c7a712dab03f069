// cli.rs - Command-line interface configuration
use std::path::PathBuf;
use clap::Parser;

pub const WINDOW_TITLE: &str = "ComplexDynamics";
pub const DEFAULT_SHADER_DIR: &str = "shaders";
pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

#[derive(Parser, Debug, Clone)]
#[command(name = "complex-dynamics")]
#[command(about = "Interactive complex dynamics fractal viewer", long_about = None)]
pub struct Cli {
    /// Directory holding the vertex and fragment shaders
    #[arg(long = "shader-dir", default_value = DEFAULT_SHADER_DIR)]
    pub shader_dir: PathBuf,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = INITIAL_WINDOW_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = INITIAL_WINDOW_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Present without waiting for vertical sync
    #[arg(long = "no-vsync", default_value = "false")]
    pub no_vsync: bool,
}

/// Resolved viewer settings
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub shader_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl ViewerConfig {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            shader_dir: PathBuf::from(DEFAULT_SHADER_DIR),
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
            vsync: true,
        }
    }
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            shader_dir: cli.shader_dir,
            width: cli.width,
            height: cli.height,
            vsync: !cli.no_vsync,
            ..Self::default()
        }
    }
}
