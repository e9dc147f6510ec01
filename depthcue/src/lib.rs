//! depthcue - material shading with distance-based depth cueing
//!
//! Shades pixels of a material given an interpolated normal, a light vector and
//! per-draw uniforms. Two stages run per pixel:
//!
//! 1. **Lighting** - [`lighting::Toon`] (five quantized bands with a hard
//!    shadow cutoff) or [`lighting::Phong`] (ambient/diffuse/specular with the
//!    light at the camera).
//! 2. **Distance shading** - a depth-derived factor applied to one HSV channel
//!    (hue, saturation or value), or to none.
//!
//! Both choices are fixed per [`ShaderVariant`] before shading starts. On the
//! CPU the kernel is generic over the two stages ([`shade_fragment`]); for the
//! GPU, [`shader_gen`] emits one WGSL shader per variant from a shared template.
//!
//! # Example
//!
//! ```
//! use depthcue::{
//!     DistanceShadingChannel, FragDepth, MaterialUniforms, PixelInput, ShaderVariant,
//!     ShadingMode, ShadingPipeline,
//! };
//! use glam::Vec3;
//!
//! let variant = ShaderVariant::new(ShadingMode::Toon, DistanceShadingChannel::Value);
//! let pipeline = ShadingPipeline::new(variant, MaterialUniforms::default()).unwrap();
//! let colors = pipeline.shade(&[PixelInput {
//!     normal: Vec3::Z,
//!     light_vector: Vec3::NEG_Z,
//!     depth: FragDepth::new(4.0, 1.0),
//! }]);
//! assert_eq!(colors[0].w, 1.0);
//! ```

pub mod color;
pub mod distance;
pub mod error;
pub mod fragment;
pub mod lighting;
pub mod material;
pub mod math;
pub mod pipeline;
pub mod preset;
pub mod shader_gen;

pub use color::{hsv_to_rgb, rgb_to_hsv};
pub use distance::{
    DistanceChannel, DistancePlanes, DistanceShadingChannel, FragDepth, HueChannel, NoChannel,
    SaturationChannel, ValueChannel, blend_factor,
};
pub use error::ShadeError;
pub use fragment::{PixelInput, distance_blend, shade_fragment};
pub use lighting::{LightingModel, Phong, PhongConstants, ShadingMode, Toon};
pub use material::{GpuMaterialUniforms, MaterialUniforms, ModelBounds};
pub use pipeline::{FragmentKernel, ShaderVariant, ShadingPipeline, to_rgba8};
pub use preset::Preset;
