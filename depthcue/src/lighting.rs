//! Lighting models: quantized toon bands and headlamp Phong.
//!
//! Each model is a zero-sized type implementing [`LightingModel`]. The kernel
//! is generic over the model, so picking one happens when the pipeline is
//! built and the per-pixel code carries no mode branch.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ShadeError;
use crate::fragment::PixelInput;
use crate::material::MaterialUniforms;
use crate::math::safe_normalize;

mod private {
    pub trait Sealed {}
}

/// Lighting stage of the material shader. Produces an unclamped linear color.
pub trait LightingModel: private::Sealed + Send + Sync + 'static {
    /// Runtime tag for this model.
    const MODE: ShadingMode;

    fn light(uniforms: &MaterialUniforms, input: &PixelInput) -> Vec3;
}

/// Lighting model selector, resolved before any pixel is shaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    Toon,
    #[default]
    Phong,
}

impl ShadingMode {
    pub const ALL: [ShadingMode; 2] = [ShadingMode::Toon, ShadingMode::Phong];

    pub fn name(self) -> &'static str {
        match self {
            ShadingMode::Toon => "toon",
            ShadingMode::Phong => "phong",
        }
    }
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadingMode::Toon => write!(f, "Toon"),
            ShadingMode::Phong => write!(f, "Phong"),
        }
    }
}

impl FromStr for ShadingMode {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toon" => Ok(ShadingMode::Toon),
            "phong" => Ok(ShadingMode::Phong),
            _ => Err(ShadeError::UnknownShadingMode(s.to_string())),
        }
    }
}

// =============================================================================
// Toon
// =============================================================================

/// Number of discrete toon bands.
pub const TOON_BANDS: f32 = 5.0;

/// Facing term below which the toon model outputs black.
pub const TOON_SHADOW_CUTOFF: f32 = 0.3;

/// Cel-shaded model with five bands and a hard shadow threshold.
///
/// The facing term is the z component of the reversed light direction, not a
/// dot product with the normal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Toon;

impl private::Sealed for Toon {}

impl LightingModel for Toon {
    const MODE: ShadingMode = ShadingMode::Toon;

    #[inline]
    fn light(uniforms: &MaterialUniforms, input: &PixelInput) -> Vec3 {
        let vdn = toon_facing(input.light_vector);
        if vdn < TOON_SHADOW_CUTOFF {
            return Vec3::ZERO;
        }
        toon_band(vdn) * uniforms.base_color * vdn
    }
}

/// Facing term used by the toon model.
#[inline]
pub fn toon_facing(light_vector: Vec3) -> f32 {
    (-safe_normalize(light_vector)).z
}

/// Quantized band factor for a facing term: `round(vdn * 5) / 5`, or zero
/// below the shadow cutoff.
///
/// Ties round to even, matching the WGSL `round` builtin.
#[inline]
pub fn toon_band(vdn: f32) -> f32 {
    if vdn < TOON_SHADOW_CUTOFF {
        return 0.0;
    }
    (vdn * TOON_BANDS).round_ties_even() / TOON_BANDS
}

// =============================================================================
// Phong
// =============================================================================

/// Fixed reflection constants for the Phong model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongConstants {
    pub ambient_reflection: f32,
    pub ambient_intensity: f32,
    pub diffuse_reflection: f32,
    pub diffuse_intensity: f32,
    pub specular_reflection: f32,
    pub specular_intensity: f32,
    pub shininess: f32,
}

impl PhongConstants {
    pub const DEFAULT: Self = Self {
        ambient_reflection: 0.3,
        ambient_intensity: 1.0,
        diffuse_reflection: 0.3,
        diffuse_intensity: 1.0,
        specular_reflection: 0.5,
        specular_intensity: 1.0,
        shininess: 5.0,
    };

    /// Ambient contribution, present regardless of orientation.
    pub fn ambient(&self) -> f32 {
        self.ambient_reflection * self.ambient_intensity
    }

    /// Highest intensity reachable: normal, light and view all aligned.
    pub fn peak(&self) -> f32 {
        self.ambient()
            + self.diffuse_reflection * self.diffuse_intensity
            + self.specular_reflection * self.specular_intensity
    }
}

impl Default for PhongConstants {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Ambient/diffuse/specular model with the light at the camera.
///
/// The shaded point is taken to be the world origin, so the view and light
/// directions both equal the normalized camera position.
#[derive(Clone, Copy, Debug, Default)]
pub struct Phong;

impl private::Sealed for Phong {}

impl LightingModel for Phong {
    const MODE: ShadingMode = ShadingMode::Phong;

    #[inline]
    fn light(uniforms: &MaterialUniforms, input: &PixelInput) -> Vec3 {
        phong_intensity(&PhongConstants::DEFAULT, uniforms.camera_position, input.normal)
            * uniforms.base_color
    }
}

/// Scalar Phong intensity for a camera position and (unnormalized) normal.
///
/// Diffuse and specular vanish when the normal faces away from the light.
pub fn phong_intensity(constants: &PhongConstants, camera_position: Vec3, normal: Vec3) -> f32 {
    let normal = safe_normalize(normal);
    let view = safe_normalize(camera_position);
    let light = view;

    let n_dot_l = light.dot(normal);
    if n_dot_l <= 0.0 {
        return constants.ambient();
    }

    let reflection = safe_normalize(2.0 * safe_normalize(n_dot_l * normal) - light);
    let diffuse = constants.diffuse_reflection * constants.diffuse_intensity * n_dot_l;
    let specular = constants.specular_reflection
        * constants.specular_intensity
        * reflection.dot(view).clamp(0.0, 1.0).powf(constants.shininess);

    constants.ambient() + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::FragDepth;

    fn input(normal: Vec3, light_vector: Vec3) -> PixelInput {
        PixelInput {
            normal,
            light_vector,
            depth: FragDepth::default(),
        }
    }

    #[test]
    fn test_toon_band_levels() {
        let mut levels: Vec<f32> = Vec::new();
        for i in -100..=100 {
            let band = toon_band(i as f32 / 100.0);
            if !levels.iter().any(|l| (l - band).abs() < 1e-6) {
                levels.push(band);
            }
        }
        levels.sort_by(f32::total_cmp);
        assert_eq!(levels, vec![0.0, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_toon_below_cutoff_is_black() {
        let uniforms = MaterialUniforms::default();
        for z in [0.29, 0.1, 0.0, -0.5, -1.0] {
            // light = -normalize(light_vector), so flip z to get the facing term
            let light_vector = Vec3::new(0.0, (1.0_f32 - z * z).max(0.0).sqrt(), -z);
            let color = Toon::light(&uniforms, &input(Vec3::Z, light_vector));
            assert_eq!(color, Vec3::ZERO, "facing {z} should be black");
        }
    }

    #[test]
    fn test_toon_full_facing() {
        let uniforms = MaterialUniforms {
            base_color: Vec3::new(0.5, 1.0, 0.25),
            ..Default::default()
        };
        let color = Toon::light(&uniforms, &input(Vec3::Z, Vec3::new(0.0, 0.0, -3.0)));
        assert!((color - uniforms.base_color).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_toon_ignores_normal() {
        let uniforms = MaterialUniforms::default();
        let light_vector = Vec3::new(0.2, 0.1, -1.0);
        let a = Toon::light(&uniforms, &input(Vec3::Z, light_vector));
        let b = Toon::light(&uniforms, &input(Vec3::X, light_vector));
        assert_eq!(a, b);
    }

    #[test]
    fn test_phong_peak_when_facing_camera() {
        let constants = PhongConstants::DEFAULT;
        let ip = phong_intensity(&constants, Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!((ip - constants.peak()).abs() < 1e-6);
        assert!((ip - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_phong_facing_away_is_ambient_only() {
        let constants = PhongConstants::DEFAULT;
        let camera = Vec3::new(0.0, 0.0, 5.0);
        for normal in [-Vec3::Z, Vec3::new(0.0, 1.0, -0.2), Vec3::X] {
            let ip = phong_intensity(&constants, camera, normal);
            assert!((ip - constants.ambient()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_phong_decreases_as_normal_turns_away() {
        let constants = PhongConstants::DEFAULT;
        let camera = Vec3::new(0.0, 0.0, 5.0);
        let mut prev = f32::INFINITY;
        for i in 0..=9 {
            let angle = i as f32 * 10.0_f32.to_radians();
            let normal = Vec3::new(angle.sin(), 0.0, angle.cos());
            let ip = phong_intensity(&constants, camera, normal);
            assert!(ip <= prev + 1e-6);
            assert!(ip >= constants.ambient() - 1e-6);
            prev = ip;
        }
    }

    #[test]
    fn test_phong_red_scenario() {
        let uniforms = MaterialUniforms {
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            base_color: Vec3::new(1.0, 0.0, 0.0),
            ..Default::default()
        };
        let color = Phong::light(&uniforms, &input(Vec3::Z, Vec3::NEG_Z));
        assert!((color.x - 1.1).abs() < 1e-6);
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn test_phong_normalizes_interpolated_normal() {
        let constants = PhongConstants::DEFAULT;
        let camera = Vec3::new(1.0, 2.0, 3.0);
        let a = phong_intensity(&constants, camera, Vec3::new(0.2, 0.3, 0.9));
        let b = phong_intensity(&constants, camera, Vec3::new(0.2, 0.3, 0.9) * 7.5);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_shading_mode_parse() {
        assert_eq!("toon".parse::<ShadingMode>(), Ok(ShadingMode::Toon));
        assert_eq!(" Phong ".parse::<ShadingMode>(), Ok(ShadingMode::Phong));
        assert_eq!(
            "gouraud".parse::<ShadingMode>(),
            Err(ShadeError::UnknownShadingMode("gouraud".to_string()))
        );
        assert_eq!(ShadingMode::default(), ShadingMode::Phong);
    }
}
