//! Distance shading: a depth cue applied to one HSV channel.
//!
//! A blend factor `d` in `[1 - power, 1]` is derived from the fragment depth
//! relative to a band around the camera's distance from the origin. The
//! selected channel then receives `d`: hue is replaced by it, saturation or
//! value are scaled by it.

use std::fmt;
use std::str::FromStr;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::color::{hsv_to_rgb, rgb_to_hsv};
use crate::error::ShadeError;
use crate::math::smoothstep;

// =============================================================================
// Depth
// =============================================================================

/// Depth pair as seen by a fragment: window-space depth `z` and `w`, the
/// reciprocal of the clip-space w.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FragDepth {
    pub z: f32,
    pub w: f32,
}

impl Default for FragDepth {
    fn default() -> Self {
        Self { z: 0.0, w: 1.0 }
    }
}

impl FragDepth {
    pub const fn new(z: f32, w: f32) -> Self {
        Self { z, w }
    }

    /// Build the fragment depth pair from a clip-space position.
    pub fn from_clip(clip: Vec4) -> Self {
        if clip.w == 0.0 {
            return Self { z: 0.0, w: 0.0 };
        }
        let inv_w = clip.w.recip();
        Self {
            z: clip.z * inv_w,
            w: inv_w,
        }
    }

    /// Linear depth along the view axis, `|z / w|`. Infinite when `w` is zero.
    #[inline]
    pub fn view_depth(&self) -> f32 {
        if self.w == 0.0 {
            return f32::INFINITY;
        }
        (self.z / self.w).abs()
    }
}

// =============================================================================
// Blend factor
// =============================================================================

/// Transition band for the depth cue, centered on the camera's distance from
/// the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistancePlanes {
    pub near: f32,
    pub far: f32,
}

impl DistancePlanes {
    pub fn new(camera_position: Vec3, model_size: f32, constrict: f32) -> Self {
        let camera_dist = camera_position.length();
        let half_extent = model_size / 2.0 * constrict;
        Self {
            near: camera_dist - half_extent,
            far: camera_dist + half_extent,
        }
    }
}

/// Blend factor `1 - min(smoothstep(near, far, z), power)`.
///
/// Stays within `[1 - power, 1]` for `power` in `[0, 1]`. Equal planes make
/// the transition a hard step at the camera distance.
#[inline]
pub fn blend_factor(planes: DistancePlanes, view_depth: f32, power: f32) -> f32 {
    1.0 - smoothstep(planes.near, planes.far, view_depth).min(power)
}

// =============================================================================
// Channel selection
// =============================================================================

mod private {
    pub trait Sealed {}
}

/// HSV channel that receives the distance blend factor.
pub trait DistanceChannel: private::Sealed + Send + Sync + 'static {
    /// Runtime tag for this channel.
    const CHANNEL: DistanceShadingChannel;

    /// Apply `d` to an HSV triple.
    fn modulate(hsv: Vec3, d: f32) -> Vec3;

    /// Apply `d` to a linear RGB color via an HSV round trip.
    #[inline]
    fn apply(rgb: Vec3, d: f32) -> Vec3 {
        hsv_to_rgb(Self::modulate(rgb_to_hsv(rgb), d))
    }
}

/// Replaces hue with the blend factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct HueChannel;

/// Scales saturation by the blend factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct SaturationChannel;

/// Scales value by the blend factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueChannel;

/// Leaves the color untouched and skips the HSV round trip.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoChannel;

impl private::Sealed for HueChannel {}
impl private::Sealed for SaturationChannel {}
impl private::Sealed for ValueChannel {}
impl private::Sealed for NoChannel {}

impl DistanceChannel for HueChannel {
    const CHANNEL: DistanceShadingChannel = DistanceShadingChannel::Hue;

    #[inline]
    fn modulate(hsv: Vec3, d: f32) -> Vec3 {
        Vec3::new(d, hsv.y, hsv.z)
    }
}

impl DistanceChannel for SaturationChannel {
    const CHANNEL: DistanceShadingChannel = DistanceShadingChannel::Saturation;

    #[inline]
    fn modulate(hsv: Vec3, d: f32) -> Vec3 {
        Vec3::new(hsv.x, hsv.y * d, hsv.z)
    }
}

impl DistanceChannel for ValueChannel {
    const CHANNEL: DistanceShadingChannel = DistanceShadingChannel::Value;

    #[inline]
    fn modulate(hsv: Vec3, d: f32) -> Vec3 {
        Vec3::new(hsv.x, hsv.y, hsv.z * d)
    }
}

impl DistanceChannel for NoChannel {
    const CHANNEL: DistanceShadingChannel = DistanceShadingChannel::None;

    #[inline]
    fn modulate(hsv: Vec3, _d: f32) -> Vec3 {
        hsv
    }

    #[inline]
    fn apply(rgb: Vec3, _d: f32) -> Vec3 {
        rgb
    }
}

/// Which color channel the distance shading uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceShadingChannel {
    #[default]
    None,
    Hue,
    Saturation,
    Value,
}

impl DistanceShadingChannel {
    pub const ALL: [DistanceShadingChannel; 4] = [
        DistanceShadingChannel::None,
        DistanceShadingChannel::Hue,
        DistanceShadingChannel::Saturation,
        DistanceShadingChannel::Value,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DistanceShadingChannel::None => "none",
            DistanceShadingChannel::Hue => "hue",
            DistanceShadingChannel::Saturation => "saturation",
            DistanceShadingChannel::Value => "value",
        }
    }
}

impl fmt::Display for DistanceShadingChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceShadingChannel::None => write!(f, "None"),
            DistanceShadingChannel::Hue => write!(f, "Hue"),
            DistanceShadingChannel::Saturation => write!(f, "Saturation"),
            DistanceShadingChannel::Value => write!(f, "Value"),
        }
    }
}

impl FromStr for DistanceShadingChannel {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(DistanceShadingChannel::None),
            "hue" => Ok(DistanceShadingChannel::Hue),
            "saturation" | "sat" => Ok(DistanceShadingChannel::Saturation),
            "value" | "val" => Ok(DistanceShadingChannel::Value),
            _ => Err(ShadeError::UnknownChannel(s.to_string())),
        }
    }
}
