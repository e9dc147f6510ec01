//! Scalar and vector helpers mirroring the GPU builtins the shader relies on.

use glam::Vec3;

/// Fallback direction for zero-length or non-finite vectors.
pub const FALLBACK_AXIS: Vec3 = Vec3::Z;

/// Cubic Hermite interpolation between two edges, clamped to [0, 1].
///
/// When the edges coincide or are inverted the transition collapses to a hard
/// step at `edge0`: `0.0` below it, `1.0` at or above it. The GPU builtin is
/// undefined for that case; this keeps the result finite.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Normalize `v`, falling back to [`FALLBACK_AXIS`] when it has no direction.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(FALLBACK_AXIS)
}

/// Fractional part, matching the shader builtin (`x - floor(x)`).
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}
