//! depthcue.toml parsing
//!
//! Every section is optional; missing values fall back to the defaults below.

use anyhow::{Context, Result, bail};
use depthcue::{MaterialUniforms, Preset, ShaderVariant};
use glam::Vec3;
use serde::Deserialize;
use std::path::Path;

/// depthcue.toml structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Applied after `variant` and `material`, before command-line overrides.
    pub preset: Option<Preset>,
    pub variant: ShaderVariant,
    pub material: MaterialUniforms,
    pub image: ImageSection,
    pub light: LightSection,
    pub scene: SceneSection,
}

/// Output image section
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ImageSection {
    pub width: u32,
    pub height: u32,
    /// Linear RGB for pixels the sphere does not cover.
    pub background: Vec3,
}

impl Default for ImageSection {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            background: Vec3::new(0.08, 0.08, 0.1),
        }
    }
}

/// Directional light section
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LightSection {
    /// Light position; the light shines from here toward the origin.
    pub position: Vec3,
}

impl Default for LightSection {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.45, 0.25, 0.6),
        }
    }
}

/// Procedural scene section
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SceneSection {
    pub radius: f32,
    /// Replace `material.model_size` with the scene's bounding-box diagonal.
    pub auto_model_size: bool,
}

impl Default for SceneSection {
    fn default() -> Self {
        Self {
            radius: 1.0,
            auto_model_size: true,
        }
    }
}

impl RenderConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse config text and check the values the shader does not validate.
    pub fn parse(content: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.image.width == 0 || self.image.height == 0 {
            bail!(
                "Image size must be non-zero, got {}x{}",
                self.image.width,
                self.image.height
            );
        }
        if !(self.scene.radius.is_finite() && self.scene.radius > 0.0) {
            bail!("Scene radius must be positive, got {}", self.scene.radius);
        }
        Ok(())
    }
}
