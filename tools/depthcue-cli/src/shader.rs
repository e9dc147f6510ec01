//! `depthcue shader` - emit WGSL for shader variants

use anyhow::{Context, Result};
use clap::Args;
use depthcue::shader_gen::{generate_shader, shader_count, shader_label};
use depthcue::{DistanceShadingChannel, MaterialUniforms, Preset, ShaderVariant, ShadingMode};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct ShaderArgs {
    /// Lighting model (toon, phong)
    #[arg(short, long)]
    pub mode: Option<ShadingMode>,

    /// Distance shading channel (none, hue, saturation, value)
    #[arg(long)]
    pub channel: Option<DistanceShadingChannel>,

    /// Take the channel from a preset (plain, aerial, chroma-depth)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write every variant into this directory
    #[arg(long, conflicts_with_all = ["mode", "channel", "preset", "output"])]
    pub all: Option<PathBuf>,
}

pub fn execute(args: ShaderArgs) -> Result<()> {
    if let Some(dir) = &args.all {
        return write_all(dir);
    }

    let variant = selected_variant(&args);
    let source = generate_shader(variant);
    match &args.output {
        Some(path) => {
            std::fs::write(path, &source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} shader to {}", shader_label(variant), path.display());
        }
        None => print!("{source}"),
    }
    Ok(())
}

fn selected_variant(args: &ShaderArgs) -> ShaderVariant {
    let mut variant = ShaderVariant::default();
    if let Some(preset) = args.preset {
        (variant, _) = preset.apply(variant, MaterialUniforms::default());
    }
    if let Some(mode) = args.mode {
        variant.mode = mode;
    }
    if let Some(channel) = args.channel {
        variant.channel = channel;
    }
    variant
}

fn write_all(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    for variant in ShaderVariant::all() {
        let path = dir.join(format!("material_{}.wgsl", variant.label()));
        std::fs::write(&path, generate_shader(variant))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated {}", path.display());
    }

    println!("Generated {} shaders in {}", shader_count(), dir.display());
    Ok(())
}
