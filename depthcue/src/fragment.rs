//! The per-pixel material kernel.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::distance::{DistanceChannel, DistancePlanes, FragDepth, blend_factor};
use crate::lighting::LightingModel;
use crate::material::MaterialUniforms;

/// Interpolated inputs for one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelInput {
    /// Surface normal, not necessarily unit length.
    pub normal: Vec3,
    pub light_vector: Vec3,
    pub depth: FragDepth,
}

/// Distance blend factor for one fragment.
#[inline]
pub fn distance_blend(uniforms: &MaterialUniforms, depth: FragDepth) -> f32 {
    let planes = DistancePlanes::new(
        uniforms.camera_position,
        uniforms.model_size,
        uniforms.distance_shading_constrict,
    );
    blend_factor(planes, depth.view_depth(), uniforms.distance_shading_power)
}

/// Shade one pixel: lighting model `L`, then distance shading on channel `C`.
///
/// Returns linear RGB with alpha 1.0. The color is not clamped.
#[inline]
pub fn shade_fragment<L: LightingModel, C: DistanceChannel>(
    uniforms: &MaterialUniforms,
    input: &PixelInput,
) -> Vec4 {
    let lit = L::light(uniforms, input);
    let d = distance_blend(uniforms, input.depth);
    C::apply(lit, d).extend(1.0)
}
