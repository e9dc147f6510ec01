//! `depthcue presets` - list visualization presets

use depthcue::{MaterialUniforms, Preset, ShaderVariant};

pub fn execute() {
    println!("Available presets:");
    for preset in Preset::ALL {
        let (variant, uniforms) = preset.apply(ShaderVariant::default(), MaterialUniforms::default());
        println!(
            "  {:<14} {:<14} channel={:<10} power={}",
            preset.name(),
            preset.description(),
            variant.channel.name(),
            uniforms.distance_shading_power
        );
    }
}
