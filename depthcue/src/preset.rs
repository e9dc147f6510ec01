//! Visualization presets
//!
//! Presets pick a distance channel and cue strength for common depth-reading
//! styles. They only touch the variant's channel and the power uniform; the
//! lighting mode and other uniforms pass through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceShadingChannel;
use crate::error::ShadeError;
use crate::material::MaterialUniforms;
use crate::pipeline::ShaderVariant;

/// Cue strength used by the aerial and chroma-depth presets.
pub const PRESET_DISTANCE_POWER: f32 = 0.6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// No depth cue.
    #[default]
    Plain,
    /// Far surfaces wash out toward gray, like atmospheric perspective.
    Aerial,
    /// Hue encodes depth.
    ChromaDepth,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Plain, Preset::Aerial, Preset::ChromaDepth];

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Plain => "Plain",
            Preset::Aerial => "Aerial",
            Preset::ChromaDepth => "Colored depth",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Plain => "plain",
            Preset::Aerial => "aerial",
            Preset::ChromaDepth => "chroma_depth",
        }
    }

    /// Apply the preset to a variant and its uniforms.
    pub fn apply(
        &self,
        variant: ShaderVariant,
        uniforms: MaterialUniforms,
    ) -> (ShaderVariant, MaterialUniforms) {
        match self {
            Preset::Plain => (
                ShaderVariant {
                    channel: DistanceShadingChannel::None,
                    ..variant
                },
                uniforms,
            ),
            Preset::Aerial => (
                ShaderVariant {
                    channel: DistanceShadingChannel::Saturation,
                    ..variant
                },
                MaterialUniforms {
                    distance_shading_power: PRESET_DISTANCE_POWER,
                    ..uniforms
                },
            ),
            Preset::ChromaDepth => (
                ShaderVariant {
                    channel: DistanceShadingChannel::Hue,
                    ..variant
                },
                MaterialUniforms {
                    distance_shading_power: PRESET_DISTANCE_POWER,
                    ..uniforms
                },
            ),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Preset {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "plain" => Ok(Preset::Plain),
            "aerial" => Ok(Preset::Aerial),
            "chroma_depth" | "chromadepth" => Ok(Preset::ChromaDepth),
            _ => Err(ShadeError::UnknownPreset(s.to_string())),
        }
    }
}
