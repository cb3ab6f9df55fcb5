//! Save/load system
//!
//! Handles match saving, loading, and the player profile.

pub mod profile;
pub mod save_game;

pub use save_game::{
    delete_save, list_saves, load_game, restore_session, save_exists, save_game, save_path,
    SaveData, SaveError, SaveSummary,
};

pub use profile::{load_profile, save_profile, PlayerProfile, ProfileStats};
