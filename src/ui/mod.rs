//! User Interface module
//!
//! Terminal UI using ratatui, with a pannable camera over the world map.

pub mod app;
pub mod camera;
pub mod map_view;

pub use app::App;
pub use camera::Camera;
