/// Error type for material validation and configuration parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShadeError {
    #[error("Distance shading power must be within [0, 1], got {0}")]
    InvalidPower(f32),

    #[error("Model size must be finite and non-negative, got {0}")]
    InvalidModelSize(f32),

    #[error("Distance shading constrict must be finite and non-negative, got {0}")]
    InvalidConstrict(f32),

    #[error("Material vector '{0}' contains a non-finite component")]
    NonFiniteVector(&'static str),

    #[error("Cannot compute bounds of a model with no vertices")]
    EmptyModel,

    #[error("Unknown shading mode: {0} (expected 'toon' or 'phong')")]
    UnknownShadingMode(String),

    #[error("Unknown distance shading channel: {0} (expected 'none', 'hue', 'saturation' or 'value')")]
    UnknownChannel(String),

    #[error("Unknown preset: {0} (expected 'plain', 'aerial' or 'chroma_depth')")]
    UnknownPreset(String),
}
