//! `depthcue render` - shade the procedural sphere into a PNG

use anyhow::{Context, Result, bail};
use clap::Args;
use depthcue::{
    DistanceShadingChannel, MaterialUniforms, PixelInput, Preset, ShaderVariant, ShadingMode,
    ShadingPipeline, to_rgba8,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::scene::SphereScene;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to a depthcue.toml config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "depthcue.png")]
    pub output: PathBuf,

    /// Visualization preset (plain, aerial, chroma-depth)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Lighting model (toon, phong)
    #[arg(short, long)]
    pub mode: Option<ShadingMode>,

    /// Distance shading channel (none, hue, saturation, value)
    #[arg(long)]
    pub channel: Option<DistanceShadingChannel>,

    /// Output width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(width) = args.width {
        config.image.width = width;
    }
    if let Some(height) = args.height {
        config.image.height = height;
    }
    if config.image.width == 0 || config.image.height == 0 {
        bail!("Image size must be non-zero");
    }

    let (variant, uniforms) = resolve_variant(&config, &args);
    if uniforms.camera_position.length_squared() < f32::EPSILON {
        bail!("Camera position must not coincide with the origin");
    }

    let scene = SphereScene {
        radius: config.scene.radius,
        camera_position: uniforms.camera_position,
        width: config.image.width,
        height: config.image.height,
    };
    let uniforms = if config.scene.auto_model_size {
        MaterialUniforms {
            model_size: scene.bounds()?.size(),
            ..uniforms
        }
    } else {
        uniforms
    };

    let pipeline = ShadingPipeline::new(variant, uniforms).context("Invalid material")?;
    info!(
        "Rendering {}x{} with {}",
        scene.width,
        scene.height,
        depthcue::shader_gen::shader_label(variant)
    );

    let start = Instant::now();
    let fragments = scene.rasterize(-config.light.position);
    let inputs: Vec<PixelInput> = fragments.iter().map(|f| f.input).collect();
    let colors = pipeline.shade(&inputs);
    debug!(
        fragments = fragments.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Shaded scene"
    );

    let background = to_rgba8(config.image.background.extend(1.0));
    let pixel_count = scene.pixel_count();
    let mut rgba = background.repeat(pixel_count);
    for (fragment, color) in fragments.iter().zip(&colors) {
        let offset = fragment.index * 4;
        rgba[offset..offset + 4].copy_from_slice(&to_rgba8(*color));
    }

    let image = image::RgbaImage::from_raw(scene.width, scene.height, rgba)
        .context("Pixel buffer does not match image size")?;
    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Wrote {}", args.output.display());
    println!("  Variant: {}", variant.label());
    println!("  Covered pixels: {}/{}", fragments.len(), pixel_count);
    Ok(())
}

/// Combine config, preset and command-line overrides, in that order.
fn resolve_variant(config: &RenderConfig, args: &RenderArgs) -> (ShaderVariant, MaterialUniforms) {
    let mut variant = config.variant;
    let mut uniforms = config.material;

    if let Some(preset) = args.preset.or(config.preset) {
        debug!("Applying preset: {}", preset);
        (variant, uniforms) = preset.apply(variant, uniforms);
    }
    if let Some(mode) = args.mode {
        variant.mode = mode;
    }
    if let Some(channel) = args.channel {
        variant.channel = channel;
    }
    (variant, uniforms)
}
