//! RGB <-> HSV conversion (hexagonal model, all channels in [0, 1])
//!
//! Both directions follow the branch-light formulation used by the WGSL
//! template so the CPU kernel and the generated shaders agree. The `mix`/`step`
//! pairs from the GPU version become plain selects here.

use glam::{Vec3, Vec4};

use crate::math::fract;

/// Guards the hue and saturation divisions for achromatic and black inputs.
pub const HSV_EPSILON: f32 = 1.0e-10;

/// Convert linear RGB to HSV. Hue, saturation and value land in [0, 1] for
/// inputs in [0, 1]; value tracks the largest component for brighter inputs.
pub fn rgb_to_hsv(rgb: Vec3) -> Vec3 {
    const K: Vec4 = Vec4::new(0.0, -1.0 / 3.0, 2.0 / 3.0, -1.0);

    let p = if rgb.y >= rgb.z {
        Vec4::new(rgb.y, rgb.z, K.x, K.y)
    } else {
        Vec4::new(rgb.z, rgb.y, K.w, K.z)
    };
    let q = if rgb.x >= p.x {
        Vec4::new(rgb.x, p.y, p.z, p.x)
    } else {
        Vec4::new(p.x, p.y, p.w, rgb.x)
    };

    let chroma = q.x - q.w.min(q.y);
    let hue = (q.z + (q.w - q.y) / (6.0 * chroma + HSV_EPSILON)).abs();
    let saturation = chroma / (q.x + HSV_EPSILON);
    Vec3::new(hue, saturation, q.x)
}

/// Convert HSV back to linear RGB.
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let channel = |offset: f32| ((fract(hsv.x + offset) * 6.0 - 3.0).abs() - 1.0).clamp(0.0, 1.0);
    let pure = Vec3::new(channel(1.0), channel(2.0 / 3.0), channel(1.0 / 3.0));
    hsv.z * Vec3::ONE.lerp(pure, hsv.y)
}
