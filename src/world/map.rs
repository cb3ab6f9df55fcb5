//! World map
//!
//! The elevation grid plus the toroidal topology every lookup goes
//! through. The grid is regenerated from its seed, so saves only carry
//! the seed and dimensions.

use serde::{Deserialize, Serialize};

use super::generation::generate_elevation;
use super::hex::{hex_distance, HexCoord};
use super::terrain::TerrainKind;

/// Selectable world sizes for a new match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldSize {
    Small,
    Standard,
    Large,
}

impl WorldSize {
    /// Grid dimensions (columns, rows).
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            WorldSize::Small => (60, 48),
            WorldSize::Standard => (100, 80),
            WorldSize::Large => (140, 112),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            WorldSize::Small => "Small",
            WorldSize::Standard => "Standard",
            WorldSize::Large => "Large",
        }
    }

    pub fn all() -> [WorldSize; 3] {
        [WorldSize::Small, WorldSize::Standard, WorldSize::Large]
    }
}

/// The generated world: an elevation grid wrapped into a torus.
#[derive(Debug, Clone)]
pub struct WorldMap {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    elevation: Vec<f32>,
}

impl WorldMap {
    /// Generate a new world from a seed.
    ///
    /// Dimensions must be even: odd columns lean on their even neighbor,
    /// and an odd count would leave a half-row seam where the grid wraps.
    pub fn generate(seed: u64, width: u32, height: u32) -> Self {
        debug_assert!(
            width % 2 == 0 && height % 2 == 0,
            "world dimensions must be even"
        );
        let elevation = generate_elevation(seed, width, height);
        Self {
            width,
            height,
            seed,
            elevation,
        }
    }

    /// Canonical coordinates for a hex, wrapping both axes.
    #[inline]
    pub fn wrap(&self, hex: HexCoord) -> HexCoord {
        HexCoord::new(
            hex.col.rem_euclid(self.width as i32),
            hex.row.rem_euclid(self.height as i32),
        )
    }

    /// Normalized elevation at a hex (any coordinates accepted).
    pub fn elevation_at(&self, hex: HexCoord) -> f32 {
        let h = self.wrap(hex);
        self.elevation[(h.row as u32 * self.width + h.col as u32) as usize]
    }

    /// Terrain kind at a hex.
    pub fn terrain_at(&self, hex: HexCoord) -> TerrainKind {
        TerrainKind::from_elevation(self.elevation_at(hex))
    }

    /// Hex distance on the torus: the shortest route over any seam.
    pub fn distance(&self, a: HexCoord, b: HexCoord) -> u32 {
        let a = self.wrap(a);
        let b = self.wrap(b);
        let w = self.width as i32;
        let h = self.height as i32;
        let mut best = u32::MAX;
        for dc in [-w, 0, w] {
            for dr in [-h, 0, h] {
                let image = HexCoord::new(b.col + dc, b.row + dr);
                best = best.min(hex_distance(a, image));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_sizes() {
        assert_eq!(WorldSize::Small.dimensions(), (60, 48));
        assert_eq!(WorldSize::Standard.dimensions(), (100, 80));
        assert_eq!(WorldSize::Large.dimensions(), (140, 112));
        // All presets keep both dimensions even
        for size in WorldSize::all() {
            let (w, h) = size.dimensions();
            assert_eq!(w % 2, 0);
            assert_eq!(h % 2, 0);
        }
    }

    #[test]
    fn test_wrap_canonicalizes() {
        let map = WorldMap::generate(3, 20, 16);
        assert_eq!(map.wrap(HexCoord::new(5, 7)), HexCoord::new(5, 7));
        assert_eq!(map.wrap(HexCoord::new(20, 16)), HexCoord::new(0, 0));
        assert_eq!(map.wrap(HexCoord::new(-1, -1)), HexCoord::new(19, 15));
        assert_eq!(map.wrap(HexCoord::new(45, -20)), HexCoord::new(5, 12));
    }

    #[test]
    fn test_lookups_agree_across_seam() {
        let map = WorldMap::generate(11, 20, 16);
        for row in 0..16 {
            assert_eq!(
                map.elevation_at(HexCoord::new(-1, row)),
                map.elevation_at(HexCoord::new(19, row))
            );
        }
        for col in 0..20 {
            assert_eq!(
                map.terrain_at(HexCoord::new(col, 16)),
                map.terrain_at(HexCoord::new(col, 0))
            );
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = WorldMap::generate(99, 20, 16);
        let b = WorldMap::generate(99, 20, 16);
        for col in 0..20 {
            for row in 0..16 {
                let hex = HexCoord::new(col, row);
                assert_eq!(a.elevation_at(hex), b.elevation_at(hex));
            }
        }
    }

    #[test]
    fn test_toroidal_distance_at_seam() {
        let map = WorldMap::generate(5, 20, 16);
        // Opposite edges are one step apart through the seam
        assert_eq!(
            map.distance(HexCoord::new(0, 5), HexCoord::new(19, 5)),
            1
        );
        assert_eq!(
            map.distance(HexCoord::new(4, 0), HexCoord::new(4, 15)),
            1
        );
        // Symmetric
        let a = HexCoord::new(2, 3);
        let b = HexCoord::new(18, 14);
        assert_eq!(map.distance(a, b), map.distance(b, a));
        // Never longer than the unwrapped distance
        assert!(map.distance(a, b) <= hex_distance(a, b));
    }

    #[test]
    fn test_distance_zero_on_self_and_images() {
        let map = WorldMap::generate(5, 20, 16);
        let hex = HexCoord::new(7, 9);
        assert_eq!(map.distance(hex, hex), 0);
        assert_eq!(map.distance(hex, HexCoord::new(27, 9)), 0);
        assert_eq!(map.distance(hex, HexCoord::new(7, -7)), 0);
    }
}
