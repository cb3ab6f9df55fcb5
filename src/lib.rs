//! Younger Dryas - a turn-based hex strategy survival game
//!
//! Two tribes settle a thawing world at the end of the last ice age,
//! claiming hexes and raising improvements until one of them prevails.

pub mod data;
pub mod game;
pub mod save;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use game::{Game, GameState, Session};
pub use world::{WorldMap, WorldSize};
