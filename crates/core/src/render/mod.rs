//! Everything a mesh layer needs from the lattice that isn't geometry: which
//! material a triangle should use, and what color that material is. Building
//! and drawing meshes happens outside this crate.

pub mod config;
pub mod unit;

use crate::{
    lattice::{Orientation, Scale, Triangle},
    render::{config::MaterialConfig, unit::Color},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The classification a renderer picks a material by. Every triangle drawn at
/// a given scale gets exactly one key.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct MaterialKey {
    pub scale: Scale,
    pub orientation: Orientation,
}

impl Triangle {
    /// The material key for drawing this triangle at the given scale
    pub fn material_key(&self, scale: Scale) -> MaterialKey {
        MaterialKey {
            scale,
            orientation: self.orientation(),
        }
    }
}

/// The colors for every [MaterialKey], parsed out of a [MaterialConfig].
///
/// Config options cannot be changed after creating this, but it's very cheap
/// to create so if you need to change the config, just create a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Materials {
    tile_pointy: Color,
    tile_flat: Color,
    chunk_pointy: Color,
    chunk_flat: Color,
    region_pointy: Color,
    region_flat: Color,
}

impl Materials {
    /// Parse the colors out of the given config. Returns an error if the
    /// config is invalid.
    pub fn new(config: &MaterialConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::parse(config))
    }

    /// Skips validation, so malformed colors come out however
    /// [Color::from_hex] reads them
    fn parse(config: &MaterialConfig) -> Self {
        Self {
            tile_pointy: Color::from_hex(&config.tile_pointy),
            tile_flat: Color::from_hex(&config.tile_flat),
            chunk_pointy: Color::from_hex(&config.chunk_pointy),
            chunk_flat: Color::from_hex(&config.chunk_flat),
            region_pointy: Color::from_hex(&config.region_pointy),
            region_flat: Color::from_hex(&config.region_flat),
        }
    }

    pub fn color(&self, key: MaterialKey) -> Color {
        match (key.scale, key.orientation) {
            (Scale::Tile, Orientation::Pointy) => self.tile_pointy,
            (Scale::Tile, Orientation::Flat) => self.tile_flat,
            (Scale::Chunk, Orientation::Pointy) => self.chunk_pointy,
            (Scale::Chunk, Orientation::Flat) => self.chunk_flat,
            (Scale::Region, Orientation::Pointy) => self.region_pointy,
            (Scale::Region, Orientation::Flat) => self.region_flat,
        }
    }

    /// Shorthand for looking up a triangle's [MaterialKey] and its color
    pub fn triangle_color(&self, triangle: &Triangle, scale: Scale) -> Color {
        self.color(triangle.material_key(scale))
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::parse(&MaterialConfig::default())
    }
}

/// Four colors that go together, from most to least prominent. A palette
/// carries no rules about where each color is used; that's up to whoever
/// draws with it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub quaternary: Color,
}

impl ColorPalette {
    pub fn new(
        primary: Color,
        secondary: Color,
        tertiary: Color,
        quaternary: Color,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            quaternary,
        }
    }

    /// All four colors, primary first
    pub fn colors(&self) -> [Color; 4] {
        [self.primary, self.secondary, self.tertiary, self.quaternary]
    }
}
