//! Terrain kinds and classification

use serde::{Deserialize, Serialize};

/// Terrain of a single hex, classified from normalized elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    Water,
    Plains,
    Forest,
    Mountain,
    Tundra,
}

impl TerrainKind {
    /// Classify a normalized elevation value in [0, 1].
    pub fn from_elevation(value: f32) -> Self {
        if value < 0.2 {
            TerrainKind::Water
        } else if value < 0.4 {
            TerrainKind::Plains
        } else if value < 0.6 {
            TerrainKind::Forest
        } else if value < 0.8 {
            TerrainKind::Mountain
        } else {
            TerrainKind::Tundra
        }
    }

    /// Base map color.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            TerrainKind::Water => (0, 0, 255),
            TerrainKind::Plains => (34, 139, 34),
            TerrainKind::Forest => (0, 100, 0),
            TerrainKind::Mountain => (139, 137, 137),
            TerrainKind::Tundra => (238, 233, 233),
        }
    }

    /// Glyph drawn on map cells of this terrain.
    pub fn glyph(self) -> char {
        match self {
            TerrainKind::Water => '≈',
            TerrainKind::Plains => '.',
            TerrainKind::Forest => '♣',
            TerrainKind::Mountain => '^',
            TerrainKind::Tundra => '*',
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            TerrainKind::Water => "Water",
            TerrainKind::Plains => "Plains",
            TerrainKind::Forest => "Forest",
            TerrainKind::Mountain => "Mountain",
            TerrainKind::Tundra => "Tundra",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_thresholds() {
        assert_eq!(TerrainKind::from_elevation(0.0), TerrainKind::Water);
        assert_eq!(TerrainKind::from_elevation(0.19), TerrainKind::Water);
        assert_eq!(TerrainKind::from_elevation(0.2), TerrainKind::Plains);
        assert_eq!(TerrainKind::from_elevation(0.39), TerrainKind::Plains);
        assert_eq!(TerrainKind::from_elevation(0.4), TerrainKind::Forest);
        assert_eq!(TerrainKind::from_elevation(0.6), TerrainKind::Mountain);
        assert_eq!(TerrainKind::from_elevation(0.8), TerrainKind::Tundra);
        assert_eq!(TerrainKind::from_elevation(1.0), TerrainKind::Tundra);
    }

    #[test]
    fn test_colors_match_palette() {
        assert_eq!(TerrainKind::Water.color(), (0, 0, 255));
        assert_eq!(TerrainKind::Tundra.color(), (238, 233, 233));
    }
}
