//! Batch shading pipeline
//!
//! A [`ShaderVariant`] names one of the eight lighting/channel permutations.
//! [`ShadingPipeline`] resolves it once per batch into a monomorphized kernel
//! and runs that kernel over every pixel in parallel. Pixels share nothing but
//! the read-only uniforms, so the output order matches the input order.

use glam::Vec4;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::{
    DistanceChannel, DistanceShadingChannel, HueChannel, NoChannel, SaturationChannel,
    ValueChannel,
};
use crate::error::ShadeError;
use crate::fragment::{PixelInput, shade_fragment};
use crate::lighting::{LightingModel, Phong, ShadingMode, Toon};
use crate::material::MaterialUniforms;

/// A fully specialized per-pixel kernel for one variant.
pub type FragmentKernel = fn(&MaterialUniforms, &PixelInput) -> Vec4;

/// Build-time shader configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderVariant {
    pub mode: ShadingMode,
    pub channel: DistanceShadingChannel,
}

impl ShaderVariant {
    pub const fn new(mode: ShadingMode, channel: DistanceShadingChannel) -> Self {
        Self { mode, channel }
    }

    /// Every supported permutation.
    pub fn all() -> impl Iterator<Item = ShaderVariant> {
        ShadingMode::ALL.into_iter().flat_map(|mode| {
            DistanceShadingChannel::ALL
                .into_iter()
                .map(move |channel| ShaderVariant { mode, channel })
        })
    }

    /// Stable identifier, e.g. `toon_hue`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.mode.name(), self.channel.name())
    }
}

/// Shades pixel batches for one draw: a fixed variant plus validated uniforms.
#[derive(Clone, Debug)]
pub struct ShadingPipeline {
    variant: ShaderVariant,
    uniforms: MaterialUniforms,
}

impl ShadingPipeline {
    /// Create a pipeline for a draw call.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`MaterialUniforms::validate`].
    pub fn new(variant: ShaderVariant, uniforms: MaterialUniforms) -> Result<Self, ShadeError> {
        uniforms.validate()?;
        debug!(
            variant = %variant.label(),
            model_size = uniforms.model_size,
            power = uniforms.distance_shading_power,
            "Built shading pipeline"
        );
        Ok(Self { variant, uniforms })
    }

    pub fn variant(&self) -> ShaderVariant {
        self.variant
    }

    pub fn uniforms(&self) -> &MaterialUniforms {
        &self.uniforms
    }

    /// Shade a batch of pixels in parallel. Output index `i` belongs to input `i`.
    pub fn shade(&self, pixels: &[PixelInput]) -> Vec<Vec4> {
        debug!(
            variant = %self.variant.label(),
            pixels = pixels.len(),
            "Shading batch"
        );
        match self.variant.mode {
            ShadingMode::Toon => self.shade_with_model::<Toon>(pixels),
            ShadingMode::Phong => self.shade_with_model::<Phong>(pixels),
        }
    }

    /// Resolve the monomorphized kernel for this pipeline's variant.
    ///
    /// Hosts that shade one pixel at a time should fetch the kernel once and
    /// call it per pixel, so no variant branch runs inside the pixel loop.
    pub fn kernel(&self) -> FragmentKernel {
        match self.variant.mode {
            ShadingMode::Toon => kernel_for_model::<Toon>(self.variant.channel),
            ShadingMode::Phong => kernel_for_model::<Phong>(self.variant.channel),
        }
    }

    /// Shade a single pixel. Resolves the kernel on every call; use
    /// [`ShadingPipeline::kernel`] in per-pixel loops.
    pub fn shade_one(&self, pixel: &PixelInput) -> Vec4 {
        (self.kernel())(&self.uniforms, pixel)
    }

    fn shade_with_model<L: LightingModel>(&self, pixels: &[PixelInput]) -> Vec<Vec4> {
        match self.variant.channel {
            DistanceShadingChannel::None => self.run::<L, NoChannel>(pixels),
            DistanceShadingChannel::Hue => self.run::<L, HueChannel>(pixels),
            DistanceShadingChannel::Saturation => self.run::<L, SaturationChannel>(pixels),
            DistanceShadingChannel::Value => self.run::<L, ValueChannel>(pixels),
        }
    }

    fn run<L: LightingModel, C: DistanceChannel>(&self, pixels: &[PixelInput]) -> Vec<Vec4> {
        let uniforms = &self.uniforms;
        pixels
            .par_iter()
            .map(|pixel| shade_fragment::<L, C>(uniforms, pixel))
            .collect()
    }
}

fn kernel_for_model<L: LightingModel>(channel: DistanceShadingChannel) -> FragmentKernel {
    match channel {
        DistanceShadingChannel::None => shade_fragment::<L, NoChannel>,
        DistanceShadingChannel::Hue => shade_fragment::<L, HueChannel>,
        DistanceShadingChannel::Saturation => shade_fragment::<L, SaturationChannel>,
        DistanceShadingChannel::Value => shade_fragment::<L, ValueChannel>,
    }
}

/// Quantize a shaded color to 8-bit RGBA, clamping each channel to [0, 1].
/// Non-finite channels become 0.
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    let quantize = |c: f32| {
        if c.is_finite() {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            0
        }
    };
    [
        quantize(color.x),
        quantize(color.y),
        quantize(color.z),
        quantize(color.w),
    ]
}

#[cfg(test)]
mod tests;
