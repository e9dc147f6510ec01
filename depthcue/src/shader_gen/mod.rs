//! WGSL generation for the material shader
//!
//! One template (`shaders/material.wgsl`) covers every [`ShaderVariant`]. The
//! lighting model and distance channel are spliced in by replacing
//! placeholders, so each generated shader contains exactly one lighting path
//! and one channel path, the same specialization the CPU kernel gets from
//! generics.
//!
//! Total shader count: 8 (2 lighting modes x 4 distance channels)
//!
//! Numeric constants are emitted from the Rust definitions so the two
//! implementations cannot drift apart.

use crate::color::HSV_EPSILON;
use crate::distance::DistanceShadingChannel;
use crate::lighting::{PhongConstants, ShadingMode, TOON_BANDS, TOON_SHADOW_CUTOFF};
use crate::math::FALLBACK_AXIS;
use crate::pipeline::ShaderVariant;

/// Depth returned for fragments with `w == 0`; WGSL has no infinity literal.
pub const FAR_DEPTH: f32 = 1.0e30;

const TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/shaders/material.wgsl"
));

// ============================================================================
// Placeholder Snippets
// ============================================================================

const FS_TOON: &str = r#"let light_dir = -safe_normalize(in.light_vector);
    let vdn = light_dir.z;
    if (vdn >= TOON_SHADOW_CUTOFF) {
        let band = round(vdn * TOON_BANDS) / TOON_BANDS;
        color = band * material.base_color * vdn;
    }"#;

const FS_PHONG: &str = r#"let normal = safe_normalize(in.normal);
    let view_dir = safe_normalize(material.camera_position);
    let light_dir = view_dir;
    let n_dot_l = dot(light_dir, normal);
    var intensity = PHONG_AMBIENT_REFLECTION * PHONG_AMBIENT_INTENSITY;
    if (n_dot_l > 0.0) {
        let reflection = safe_normalize(2.0 * safe_normalize(n_dot_l * normal) - light_dir);
        let specular = pow(clamp(dot(reflection, view_dir), 0.0, 1.0), PHONG_SHININESS);
        intensity += PHONG_DIFFUSE_REFLECTION * PHONG_DIFFUSE_INTENSITY * n_dot_l;
        intensity += PHONG_SPECULAR_REFLECTION * PHONG_SPECULAR_INTENSITY * specular;
    }
    color = intensity * material.base_color;"#;

const FS_CHANNEL_HUE: &str = r#"var hsv = rgb_to_hsv(color);
    hsv.x = d;
    color = hsv_to_rgb(hsv);"#;

const FS_CHANNEL_SATURATION: &str = r#"var hsv = rgb_to_hsv(color);
    hsv.y *= d;
    color = hsv_to_rgb(hsv);"#;

const FS_CHANNEL_VALUE: &str = r#"var hsv = rgb_to_hsv(color);
    hsv.z *= d;
    color = hsv_to_rgb(hsv);"#;

// ============================================================================
// Shader Generation
// ============================================================================

/// Generate the WGSL source for a variant.
pub fn generate_shader(variant: ShaderVariant) -> String {
    let lighting = match variant.mode {
        ShadingMode::Toon => FS_TOON,
        ShadingMode::Phong => FS_PHONG,
    };
    let channel = match variant.channel {
        DistanceShadingChannel::None => "",
        DistanceShadingChannel::Hue => FS_CHANNEL_HUE,
        DistanceShadingChannel::Saturation => FS_CHANNEL_SATURATION,
        DistanceShadingChannel::Value => FS_CHANNEL_VALUE,
    };

    TEMPLATE
        .replace("//CONSTANTS", &constants_block())
        .replace("//FS_LIGHTING", lighting)
        .replace("//FS_DISTANCE_CHANNEL", channel)
}

/// Get the raw template (for debugging/inspection).
pub fn get_template() -> &'static str {
    TEMPLATE
}

/// Human-readable name for a variant, e.g. `Toon + Hue`.
pub fn shader_label(variant: ShaderVariant) -> String {
    format!("{} + {}", variant.mode, variant.channel)
}

/// Number of shader permutations.
pub fn shader_count() -> usize {
    ShadingMode::ALL.len() * DistanceShadingChannel::ALL.len()
}

fn constants_block() -> String {
    let phong = PhongConstants::DEFAULT;
    let scalars = [
        ("HSV_EPSILON", HSV_EPSILON),
        ("FAR_DEPTH", FAR_DEPTH),
        ("TOON_BANDS", TOON_BANDS),
        ("TOON_SHADOW_CUTOFF", TOON_SHADOW_CUTOFF),
        ("PHONG_AMBIENT_REFLECTION", phong.ambient_reflection),
        ("PHONG_AMBIENT_INTENSITY", phong.ambient_intensity),
        ("PHONG_DIFFUSE_REFLECTION", phong.diffuse_reflection),
        ("PHONG_DIFFUSE_INTENSITY", phong.diffuse_intensity),
        ("PHONG_SPECULAR_REFLECTION", phong.specular_reflection),
        ("PHONG_SPECULAR_INTENSITY", phong.specular_intensity),
        ("PHONG_SHININESS", phong.shininess),
    ];

    let mut block: String = scalars
        .iter()
        .map(|(name, value)| format!("const {name}: f32 = {value:?};\n"))
        .collect();
    block.push_str(&format!(
        "const FALLBACK_AXIS: vec3<f32> = vec3<f32>({:?}, {:?}, {:?});",
        FALLBACK_AXIS.x, FALLBACK_AXIS.y, FALLBACK_AXIS.z
    ));
    block
}
