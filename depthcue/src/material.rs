//! Per-draw material parameters
//!
//! [`MaterialUniforms`] is the read-only parameter block shared by every pixel
//! of a draw call. [`GpuMaterialUniforms`] is the same data laid out for the
//! WGSL uniform struct emitted by [`crate::shader_gen`].

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ShadeError;

/// Material parameters, constant across all pixels of a draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialUniforms {
    pub camera_position: Vec3,
    pub base_color: Vec3,
    /// Bounding-box diagonal of the drawn model.
    pub model_size: f32,
    /// Upper bound on the depth cue strength, expected in [0, 1].
    pub distance_shading_power: f32,
    /// Scales the transition band width; smaller is narrower.
    pub distance_shading_constrict: f32,
}

impl Default for MaterialUniforms {
    fn default() -> Self {
        Self {
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            base_color: Vec3::new(1.0, 0.56, 0.72),
            model_size: 1.0,
            distance_shading_power: 0.4,
            distance_shading_constrict: 1.0,
        }
    }
}

impl MaterialUniforms {
    /// Check the parameters before a draw.
    ///
    /// # Errors
    ///
    /// Returns the first offending field: power outside [0, 1], negative or
    /// non-finite size/constrict, or a non-finite vector component.
    pub fn validate(&self) -> Result<(), ShadeError> {
        if !self.camera_position.is_finite() {
            return Err(ShadeError::NonFiniteVector("camera_position"));
        }
        if !self.base_color.is_finite() {
            return Err(ShadeError::NonFiniteVector("base_color"));
        }
        if !(0.0..=1.0).contains(&self.distance_shading_power) {
            return Err(ShadeError::InvalidPower(self.distance_shading_power));
        }
        if !self.model_size.is_finite() || self.model_size < 0.0 {
            return Err(ShadeError::InvalidModelSize(self.model_size));
        }
        if !self.distance_shading_constrict.is_finite() || self.distance_shading_constrict < 0.0 {
            return Err(ShadeError::InvalidConstrict(self.distance_shading_constrict));
        }
        Ok(())
    }

    /// Pack for upload into the shader's uniform buffer.
    pub fn to_gpu(&self) -> GpuMaterialUniforms {
        GpuMaterialUniforms {
            camera_position: self.camera_position.to_array(),
            model_size: self.model_size,
            base_color: self.base_color.to_array(),
            distance_shading_power: self.distance_shading_power,
            distance_shading_constrict: self.distance_shading_constrict,
            _pad: [0.0; 3],
        }
    }
}

/// Uniform block matching `MaterialUniforms` in `shaders/material.wgsl`.
///
/// Memory layout (48 bytes):
/// - 0..16: camera_position (vec3) + model_size
/// - 16..32: base_color (vec3) + distance_shading_power
/// - 32..48: distance_shading_constrict + padding to the struct alignment
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GpuMaterialUniforms {
    pub camera_position: [f32; 3],
    pub model_size: f32,
    pub base_color: [f32; 3],
    pub distance_shading_power: f32,
    pub distance_shading_constrict: f32,
    pub _pad: [f32; 3],
}

/// Axis-aligned bounds of a model's vertex positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ModelBounds {
    /// Compute bounds over a set of positions.
    ///
    /// # Errors
    ///
    /// Returns `ShadeError::EmptyModel` when `positions` is empty.
    pub fn from_positions(positions: &[Vec3]) -> Result<Self, ShadeError> {
        let (first, rest) = positions.split_first().ok_or(ShadeError::EmptyModel)?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Ok(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        self.min + (self.max - self.min) / 2.0
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Diagonal length, used as the material's `model_size`.
    pub fn size(&self) -> f32 {
        self.extent().length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_layout_size() {
        assert_eq!(std::mem::size_of::<GpuMaterialUniforms>(), 48);
    }

    #[test]
    fn test_to_gpu_field_order() {
        let uniforms = MaterialUniforms {
            camera_position: Vec3::new(1.0, 2.0, 3.0),
            base_color: Vec3::new(0.1, 0.2, 0.3),
            model_size: 4.0,
            distance_shading_power: 0.5,
            distance_shading_constrict: 0.75,
        };
        let gpu = uniforms.to_gpu();
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&gpu));
        assert_eq!(
            floats,
            &[1.0, 2.0, 3.0, 4.0, 0.1, 0.2, 0.3, 0.5, 0.75, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MaterialUniforms::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range_power() {
        let uniforms = MaterialUniforms {
            distance_shading_power: 1.5,
            ..Default::default()
        };
        assert_eq!(uniforms.validate(), Err(ShadeError::InvalidPower(1.5)));

        let uniforms = MaterialUniforms {
            distance_shading_power: -0.1,
            ..Default::default()
        };
        assert_eq!(uniforms.validate(), Err(ShadeError::InvalidPower(-0.1)));
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let uniforms = MaterialUniforms {
            model_size: -1.0,
            ..Default::default()
        };
        assert_eq!(uniforms.validate(), Err(ShadeError::InvalidModelSize(-1.0)));

        let uniforms = MaterialUniforms {
            distance_shading_constrict: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            uniforms.validate(),
            Err(ShadeError::InvalidConstrict(_))
        ));
    }

    #[test]
    fn test_validate_accepts_degenerate_band() {
        let uniforms = MaterialUniforms {
            model_size: 0.0,
            distance_shading_constrict: 0.0,
            ..Default::default()
        };
        assert_eq!(uniforms.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_nan_vectors() {
        let uniforms = MaterialUniforms {
            base_color: Vec3::new(f32::NAN, 0.0, 0.0),
            ..Default::default()
        };
        assert_eq!(
            uniforms.validate(),
            Err(ShadeError::NonFiniteVector("base_color"))
        );
    }

    #[test]
    fn test_model_bounds() {
        let positions = [
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, -2.0, 2.0),
            Vec3::new(1.0, 2.0, 0.0),
        ];
        let bounds = ModelBounds::from_positions(&positions).unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 2.0, 2.0));
        assert_eq!(bounds.center(), Vec3::new(1.0, 0.0, 1.0));
        assert!((bounds.size() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_model_bounds_empty() {
        assert_eq!(ModelBounds::from_positions(&[]), Err(ShadeError::EmptyModel));
    }

    #[test]
    fn test_uniforms_deserialize_with_defaults() {
        let uniforms: MaterialUniforms = toml::from_str(
            r#"
            base_color = [0.0, 1.0, 0.0]
            distance_shading_power = 0.6
            "#,
        )
        .unwrap();
        assert_eq!(uniforms.base_color, Vec3::Y);
        assert_eq!(uniforms.distance_shading_power, 0.6);
        assert_eq!(uniforms.model_size, MaterialUniforms::default().model_size);
    }
}
