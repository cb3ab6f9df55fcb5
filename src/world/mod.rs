//! World module
//!
//! Hex geometry, terrain, and procedural world generation.

pub mod generation;
pub mod hex;
pub mod map;
pub mod terrain;

pub use hex::{hex_distance, hex_to_pixel, pixel_to_hex, HexCoord, HEX_SIZE};
pub use map::{WorldMap, WorldSize};
pub use terrain::TerrainKind;
