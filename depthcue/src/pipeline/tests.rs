use super::*;
use crate::distance::FragDepth;
use glam::Vec3;

fn sample_pixels() -> Vec<PixelInput> {
    (0..64)
        .map(|i| {
            let t = i as f32 / 63.0;
            PixelInput {
                normal: Vec3::new(t - 0.5, 0.5 - t, 1.0),
                light_vector: Vec3::new(0.3 * t, -0.2, -1.0 + t),
                depth: FragDepth::new(3.0 + 4.0 * t, 1.0),
            }
        })
        .collect()
}

fn uniforms() -> MaterialUniforms {
    MaterialUniforms {
        camera_position: Vec3::new(0.0, 0.0, 5.0),
        model_size: 2.0,
        distance_shading_power: 0.8,
        ..Default::default()
    }
}

#[test]
fn test_variant_count() {
    let variants: Vec<_> = ShaderVariant::all().collect();
    assert_eq!(variants.len(), 8);
    for (i, a) in variants.iter().enumerate() {
        for b in &variants[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_variant_label() {
    let variant = ShaderVariant::new(ShadingMode::Toon, DistanceShadingChannel::Saturation);
    assert_eq!(variant.label(), "toon_saturation");
    assert_eq!(ShaderVariant::default().label(), "phong_none");
}

#[test]
fn test_new_rejects_invalid_uniforms() {
    let uniforms = MaterialUniforms {
        distance_shading_power: 2.0,
        ..Default::default()
    };
    let result = ShadingPipeline::new(ShaderVariant::default(), uniforms);
    assert_eq!(result.unwrap_err(), ShadeError::InvalidPower(2.0));
}

#[test]
fn test_batch_matches_single_pixel_for_every_variant() {
    let pixels = sample_pixels();
    for variant in ShaderVariant::all() {
        let pipeline = ShadingPipeline::new(variant, uniforms()).unwrap();
        let batch = pipeline.shade(&pixels);
        assert_eq!(batch.len(), pixels.len());
        for (pixel, color) in pixels.iter().zip(&batch) {
            assert_eq!(*color, pipeline.shade_one(pixel), "variant {}", variant.label());
        }
    }
}

#[test]
fn test_batch_dispatches_to_selected_kernel() {
    let pixels = sample_pixels();
    let u = uniforms();
    let pipeline = ShadingPipeline::new(
        ShaderVariant::new(ShadingMode::Toon, DistanceShadingChannel::Value),
        u,
    )
    .unwrap();
    let batch = pipeline.shade(&pixels);
    for (pixel, color) in pixels.iter().zip(&batch) {
        assert_eq!(*color, shade_fragment::<Toon, ValueChannel>(&u, pixel));
    }
}

#[test]
fn test_kernel_matches_batch_for_every_variant() {
    let pixels = sample_pixels();
    for variant in ShaderVariant::all() {
        let pipeline = ShadingPipeline::new(variant, uniforms()).unwrap();
        let kernel = pipeline.kernel();
        let batch = pipeline.shade(&pixels);
        for (pixel, color) in pixels.iter().zip(&batch) {
            assert_eq!(*color, kernel(pipeline.uniforms(), pixel), "variant {}", variant.label());
        }
    }
}

#[test]
fn test_kernel_is_the_specialized_function() {
    let pipeline = ShadingPipeline::new(
        ShaderVariant::new(ShadingMode::Phong, DistanceShadingChannel::Hue),
        uniforms(),
    )
    .unwrap();
    let expected: FragmentKernel = shade_fragment::<Phong, HueChannel>;
    let pixel = &sample_pixels()[10];
    assert_eq!(
        (pipeline.kernel())(pipeline.uniforms(), pixel),
        expected(pipeline.uniforms(), pixel)
    );
}

#[test]
fn test_accessors_return_build_inputs() {
    let variant = ShaderVariant::new(ShadingMode::Toon, DistanceShadingChannel::Value);
    let pipeline = ShadingPipeline::new(variant, uniforms()).unwrap();
    assert_eq!(pipeline.variant(), variant);
    assert_eq!(*pipeline.uniforms(), uniforms());
}

#[test]
fn test_empty_batch() {
    let pipeline = ShadingPipeline::new(ShaderVariant::default(), uniforms()).unwrap();
    assert!(pipeline.shade(&[]).is_empty());
}

#[test]
fn test_outputs_are_opaque() {
    let pixels = sample_pixels();
    for variant in ShaderVariant::all() {
        let pipeline = ShadingPipeline::new(variant, uniforms()).unwrap();
        assert!(pipeline.shade(&pixels).iter().all(|c| c.w == 1.0));
    }
}

#[test]
fn test_to_rgba8_clamps() {
    assert_eq!(to_rgba8(Vec4::new(1.1, 0.5, -0.2, 1.0)), [255, 128, 0, 255]);
    assert_eq!(to_rgba8(Vec4::new(f32::NAN, 0.0, 1.0, 1.0)), [0, 0, 255, 255]);
}
