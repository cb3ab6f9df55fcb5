//! Player profile and persistent match statistics
//!
//! Tracks lifetime results across matches. Lives next to the save
//! slots but outlives any one of them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::game::{MatchOutcome, PlayerId};

/// Current profile version for compatibility
const PROFILE_VERSION: u32 = 1;

/// Persistent player profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Version for compatibility checking
    pub version: u32,
    /// Lifetime match statistics
    pub stats: ProfileStats,
}

/// Profile statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Matches started
    pub matches_started: u32,
    /// Matches played to a result
    pub matches_completed: u32,
    /// Red victories
    pub red_wins: u32,
    /// Blue victories
    pub blue_wins: u32,
    /// Tied matches
    pub ties: u32,
    /// Rounds played across completed matches
    pub rounds_played: u32,
    /// Highest score reached in any completed match
    pub best_score: u32,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            stats: ProfileStats::default(),
        }
    }
}

impl PlayerProfile {
    /// Create a new profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a new match
    pub fn record_match_start(&mut self) {
        self.stats.matches_started += 1;
    }

    /// Record a finished match
    pub fn record_match_end(&mut self, outcome: MatchOutcome, turns: u32, best_score: u32) {
        self.stats.matches_completed += 1;
        self.stats.rounds_played += turns;
        match outcome {
            MatchOutcome::Winner(PlayerId::Red) => self.stats.red_wins += 1,
            MatchOutcome::Winner(PlayerId::Blue) => self.stats.blue_wins += 1,
            MatchOutcome::Tie => self.stats.ties += 1,
        }
        if best_score > self.stats.best_score {
            self.stats.best_score = best_score;
        }
    }
}

// ============================================================================
// Profile Storage
// ============================================================================

/// Get the profile file path
fn profile_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "dryas", "Dryas") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("profile.json");
        path
    } else {
        PathBuf::from("./profile.json")
    }
}

/// Load the player profile (or create default)
pub fn load_profile() -> PlayerProfile {
    let path = profile_path();

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(profile) => {
                    log::info!("Profile loaded from {:?}", path);
                    return profile;
                }
                Err(e) => {
                    log::warn!("Failed to parse profile: {}, creating new", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read profile: {}, creating new", e);
            }
        }
    }

    log::info!("Creating new profile");
    PlayerProfile::new()
}

/// Save the player profile
pub fn save_profile(profile: &PlayerProfile) -> Result<(), String> {
    let path = profile_path();

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    let json = serde_json::to_string_pretty(profile).map_err(|e| e.to_string())?;

    fs::write(&path, json).map_err(|e| e.to_string())?;

    log::info!("Profile saved to {:?}", path);
    Ok(())
}
