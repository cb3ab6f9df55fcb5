//! RON rules loader
//!
//! Loads `assets/data/rules.ron`, with fallback to the hardcoded
//! defaults when the file is missing or broken.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::game::GameRules;

/// Directory the rules file lives in.
const DATA_DIR: &str = "assets/data";
/// Rules file name.
const RULES_FILE: &str = "rules.ron";

/// Errors from exporting data files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to create {0}: {1}")]
    CreateDir(String, String),
    #[error("failed to serialize rules: {0}")]
    Serialize(String),
    #[error("failed to write {0}: {1}")]
    Write(String, String),
}

/// Load the rules, falling back to defaults on any problem.
pub fn load_rules() -> GameRules {
    let path = Path::new(DATA_DIR).join(RULES_FILE);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(rules) => return rules,
                Err(e) => eprintln!("Warning: Failed to parse {}: {}", RULES_FILE, e),
            },
            Err(e) => eprintln!("Warning: Failed to read {}: {}", RULES_FILE, e),
        }
    }
    GameRules::default()
}

/// Write the default rules out to `assets/data/rules.ron` for editing.
pub fn export_default_rules() -> Result<(), DataError> {
    let base_path = Path::new(DATA_DIR);
    if !base_path.exists() {
        fs::create_dir_all(base_path)
            .map_err(|e| DataError::CreateDir(DATA_DIR.to_string(), e.to_string()))?;
    }

    let rules = GameRules::default();
    let text = ron::ser::to_string_pretty(&rules, ron::ser::PrettyConfig::default())
        .map_err(|e| DataError::Serialize(e.to_string()))?;
    fs::write(base_path.join(RULES_FILE), text)
        .map_err(|e| DataError::Write(RULES_FILE.to_string(), e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_then_load_round_trip() {
        let result = export_default_rules();
        assert!(result.is_ok(), "export failed: {:?}", result.err());
        assert!(Path::new(DATA_DIR).join(RULES_FILE).exists());

        let rules = load_rules();
        assert_eq!(rules, GameRules::default());
    }
}
