use crate::render::unit::is_hex_color;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration for how lattice triangles are colored when they're handed
/// to a mesh. There's one color per (scale, orientation) pair, written as a
/// hex color code (`#rrggbb`, the `#` is optional).
///
/// These options have no bearing on lattice geometry; they only affect the
/// [Materials](crate::Materials) built from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MaterialConfig {
    #[validate(custom = "validate_hex_color")]
    pub tile_pointy: String,
    #[validate(custom = "validate_hex_color")]
    pub tile_flat: String,
    #[validate(custom = "validate_hex_color")]
    pub chunk_pointy: String,
    #[validate(custom = "validate_hex_color")]
    pub chunk_flat: String,
    #[validate(custom = "validate_hex_color")]
    pub region_pointy: String,
    #[validate(custom = "validate_hex_color")]
    pub region_flat: String,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            tile_pointy: "#474747".into(),
            tile_flat: "#C4C4C4".into(),
            chunk_pointy: "#000000".into(),
            chunk_flat: "#808080".into(),
            region_pointy: "#1F1F1F".into(),
            region_flat: "#5C5C5C".into(),
        }
    }
}

fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if is_hex_color(color) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}
