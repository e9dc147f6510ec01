//! depthcue CLI - offline host for the depthcue material shader
//!
//! # Commands
//!
//! - `depthcue render` - Shade a procedural sphere and write a PNG
//! - `depthcue shader` - Emit the WGSL source for a shader variant
//! - `depthcue presets` - List visualization presets
//!
//! # Usage
//!
//! ```bash
//! # Toon shading with hue-encoded depth
//! depthcue render --mode toon --preset chroma-depth -o sphere.png
//!
//! # Use a config file
//! depthcue render --config depthcue.toml
//!
//! # Write all shader variants
//! depthcue shader --all shaders/
//! ```
//!
//! # Config (depthcue.toml)
//!
//! ```toml
//! preset = "aerial"
//!
//! [variant]
//! mode = "phong"
//! channel = "saturation"
//!
//! [material]
//! camera_position = [0.0, 1.0, 4.0]
//! base_color = [1.0, 0.56, 0.72]
//! distance_shading_power = 0.6
//! distance_shading_constrict = 1.0
//!
//! [image]
//! width = 512
//! height = 512
//!
//! [light]
//! position = [0.45, 0.25, 0.6]
//! ```

mod config;
mod presets;
mod render;
mod scene;
mod shader;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// depthcue - material shading with distance-based depth cueing
#[derive(Parser)]
#[command(name = "depthcue")]
#[command(about = "Offline host for the depthcue material shader")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shade a procedural sphere and write a PNG
    Render(render::RenderArgs),

    /// Emit WGSL for a shader variant
    Shader(shader::ShaderArgs),

    /// List visualization presets
    Presets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render::execute(args),
        Commands::Shader(args) => shader::execute(args),
        Commands::Presets => {
            presets::execute();
            Ok(())
        }
    }
}
