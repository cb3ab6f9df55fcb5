//! Match save/load system
//!
//! Saves carry the world seed rather than the terrain itself; the grid
//! is regenerated on load. Everything else (board, players, ledger) is
//! stored as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::game::{
    ActionLedger, ActionRecord, Board, GameMessage, GameRules, HexState, ImprovementType,
    MatchOutcome, MessageLog, Player, PlayerId, ResourceType, Session,
};
use crate::world::{HexCoord, WorldMap};

/// Save file version for compatibility checking
const SAVE_VERSION: u32 = 1;

/// Complete save data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub world: WorldSaveData,
    pub rules: GameRules,
    pub players: Vec<PlayerSaveData>,
    pub board: Vec<HexSaveData>,
    pub turn: u32,
    pub current: PlayerId,
    pub outcome: Option<MatchOutcome>,
    pub messages: Vec<GameMessage>,
    pub ledger: Vec<ActionRecord>,
}

/// World save data; the terrain regenerates from the seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSaveData {
    pub seed: u64,
    pub width: u32,
    pub height: u32,
}

/// Per-player save data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSaveData {
    pub id: PlayerId,
    pub resources: Vec<(ResourceType, u32)>,
    pub owned: Vec<HexCoord>,
    pub claims_this_turn: u32,
}

/// One board record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexSaveData {
    pub hex: HexCoord,
    pub owner: Option<PlayerId>,
    pub improvement: Option<ImprovementType>,
}

impl SaveData {
    /// Capture a running session into serializable form.
    pub fn from_session(session: &Session) -> Self {
        let players = PlayerId::all()
            .iter()
            .map(|&id| {
                let player = session.player(id);
                PlayerSaveData {
                    id,
                    resources: player.resources().to_vec(),
                    owned: player.owned().iter().copied().collect(),
                    claims_this_turn: player.claims_this_turn(),
                }
            })
            .collect();

        let board = session
            .board()
            .entries()
            .map(|(hex, state)| HexSaveData {
                hex,
                owner: state.owner,
                improvement: state.improvement,
            })
            .collect();

        Self {
            version: SAVE_VERSION,
            world: WorldSaveData {
                seed: session.map().seed,
                width: session.map().width,
                height: session.map().height,
            },
            rules: session.rules().clone(),
            players,
            board,
            turn: session.turn(),
            current: session.current_player_id(),
            outcome: session.outcome(),
            messages: session.log().messages().to_vec(),
            ledger: session.ledger().records().to_vec(),
        }
    }
}

/// Save error types
#[derive(Debug, Clone, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Invalid save data: {0}")]
    InvalidData(String),
}

/// Get the save directory path
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "dryas", "Dryas") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}

/// Get the path for a specific save slot
pub fn save_path(slot: u8) -> PathBuf {
    let mut path = save_directory();
    path.push(format!("save_{}.json", slot));
    path
}

/// Check if a save exists in the given slot
pub fn save_exists(slot: u8) -> bool {
    save_path(slot).exists()
}

/// Brief summary of a save for the slot screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSummary {
    pub turn: u32,
    pub red_points: u32,
    pub blue_points: u32,
}

/// List all available save slots (0-2)
pub fn list_saves() -> Vec<(u8, Option<SaveSummary>)> {
    (0..3)
        .map(|slot| {
            let summary = if save_exists(slot) {
                load_save_summary(slot).ok()
            } else {
                None
            };
            (slot, summary)
        })
        .collect()
}

/// Load just the summary from a save file
pub fn load_save_summary(slot: u8) -> Result<SaveSummary, SaveError> {
    let path = save_path(slot);
    let data = fs::read_to_string(&path).map_err(|e| SaveError::Io(e.to_string()))?;
    let save: SaveData =
        serde_json::from_str(&data).map_err(|e| SaveError::Parse(e.to_string()))?;

    Ok(SaveSummary {
        turn: save.turn,
        red_points: score_from_save(&save, PlayerId::Red),
        blue_points: score_from_save(&save, PlayerId::Blue),
    })
}

/// Save the running match to a slot
pub fn save_game(session: &Session, slot: u8) -> Result<(), SaveError> {
    let save_data = SaveData::from_session(session);

    // Ensure directory exists
    let dir = save_directory();
    fs::create_dir_all(&dir).map_err(|e| SaveError::Io(e.to_string()))?;

    // Write save file
    let path = save_path(slot);
    let json = serde_json::to_string_pretty(&save_data)
        .map_err(|e| SaveError::Parse(e.to_string()))?;
    fs::write(&path, json).map_err(|e| SaveError::Io(e.to_string()))?;

    log::info!("Game saved to slot {}", slot);
    Ok(())
}

/// Load a save from a slot
pub fn load_game(slot: u8) -> Result<SaveData, SaveError> {
    let path = save_path(slot);
    let data = fs::read_to_string(&path).map_err(|e| SaveError::Io(e.to_string()))?;
    let save = parse_save(&data)?;

    log::info!("Game loaded from slot {}", slot);
    Ok(save)
}

/// Delete a save slot
pub fn delete_save(slot: u8) -> Result<(), SaveError> {
    let path = save_path(slot);
    if path.exists() {
        fs::remove_file(&path).map_err(|e| SaveError::Io(e.to_string()))?;
        log::info!("Deleted save slot {}", slot);
    }
    Ok(())
}

/// Parse and version-check save JSON.
fn parse_save(json: &str) -> Result<SaveData, SaveError> {
    let save: SaveData =
        serde_json::from_str(json).map_err(|e| SaveError::Parse(e.to_string()))?;

    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save.version,
        });
    }
    Ok(save)
}

/// Rebuild a session from save data.
///
/// All hex coordinates are canonicalized through the regenerated map,
/// so saves written near the wrap seam restore onto the same records.
pub fn restore_session(data: SaveData) -> Result<Session, SaveError> {
    if data.world.width == 0
        || data.world.height == 0
        || data.world.width % 2 != 0
        || data.world.height % 2 != 0
    {
        return Err(SaveError::InvalidData(format!(
            "bad world dimensions {}x{}",
            data.world.width, data.world.height
        )));
    }
    if data.turn == 0 {
        return Err(SaveError::InvalidData("turn number is zero".to_string()));
    }

    let map = WorldMap::generate(data.world.seed, data.world.width, data.world.height);

    let red = restore_player(&data, PlayerId::Red, &map)?;
    let blue = restore_player(&data, PlayerId::Blue, &map)?;

    let mut board = Board::new();
    for entry in &data.board {
        board.insert(
            map.wrap(entry.hex),
            HexState {
                owner: entry.owner,
                improvement: entry.improvement,
            },
        );
    }

    Ok(Session {
        map,
        board,
        players: [red, blue],
        current: data.current,
        turn: data.turn,
        rules: data.rules,
        outcome: data.outcome,
        log: MessageLog::from_messages(data.messages),
        ledger: ActionLedger::from_records(data.ledger),
    })
}

fn restore_player(data: &SaveData, id: PlayerId, map: &WorldMap) -> Result<Player, SaveError> {
    let saved = match data.players.iter().find(|p| p.id == id) {
        Some(saved) => saved,
        None => {
            return Err(SaveError::InvalidData(format!(
                "missing player {}",
                id.name()
            )))
        }
    };

    let mut resources = [0u32; 3];
    for &(kind, amount) in &saved.resources {
        resources[kind.index()] = amount;
    }
    let owned: BTreeSet<HexCoord> = saved.owned.iter().map(|&hex| map.wrap(hex)).collect();

    Ok(Player::restore(id, resources, owned, saved.claims_this_turn))
}

fn score_from_save(save: &SaveData, id: PlayerId) -> u32 {
    let player = match save.players.iter().find(|p| p.id == id) {
        Some(player) => player,
        None => return 0,
    };

    let mut points = player.owned.len() as u32 * save.rules.points_per_hex;
    for entry in &save.board {
        if entry.owner == Some(id) {
            if let Some(improvement) = entry.improvement {
                points += save.rules.points(improvement);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_session() -> Session {
        let mut session = Session::new(21, 20, 16, GameRules::default());
        assert!(session.claim(HexCoord::new(3, 3)));
        assert!(session.build(HexCoord::new(3, 3), ImprovementType::Settlement));
        session.end_turn();
        assert!(session.claim(HexCoord::new(12, 9)));
        session.end_turn();
        assert!(session.claim(HexCoord::new(4, 3)));
        assert!(session.build(HexCoord::new(4, 3), ImprovementType::Farm));
        session
    }

    #[test]
    fn test_save_round_trip_preserves_match() {
        let session = played_session();
        let data = SaveData::from_session(&session);
        let json = serde_json::to_string_pretty(&data).unwrap();
        let restored = restore_session(parse_save(&json).unwrap()).unwrap();

        assert_eq!(restored.turn(), session.turn());
        assert_eq!(restored.current_player_id(), session.current_player_id());
        assert_eq!(restored.outcome(), session.outcome());
        for id in PlayerId::all() {
            assert_eq!(restored.score(id), session.score(id));
            for kind in ResourceType::all() {
                assert_eq!(
                    restored.player(id).resource(kind),
                    session.player(id).resource(kind)
                );
            }
            assert_eq!(restored.player(id).owned(), session.player(id).owned());
            assert_eq!(
                restored.player(id).claims_this_turn(),
                session.player(id).claims_this_turn()
            );
        }
        let hex = HexCoord::new(3, 3);
        assert_eq!(restored.board().owner(hex), Some(PlayerId::Red));
        assert_eq!(
            restored.board().improvement(hex),
            Some(ImprovementType::Settlement)
        );
        // The regenerated world matches the original
        assert_eq!(
            restored.map().terrain_at(HexCoord::new(9, 9)),
            session.map().terrain_at(HexCoord::new(9, 9))
        );
        assert_eq!(restored.log().messages(), session.log().messages());
        assert_eq!(restored.ledger().records(), session.ledger().records());
    }

    #[test]
    fn test_restored_session_keeps_playing() {
        let session = played_session();
        let data = SaveData::from_session(&session);
        let mut restored = restore_session(data).unwrap();

        // Red spent this turn's claim before the save
        assert_eq!(restored.current_player_id(), PlayerId::Red);
        assert_eq!(restored.claims_left(), 0);
        assert!(!restored.can_claim(HexCoord::new(3, 5)));
        restored.end_turn();
        assert_eq!(restored.current_player_id(), PlayerId::Blue);
        assert!(restored.can_claim(HexCoord::new(12, 10)));
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let session = played_session();
        let mut data = SaveData::from_session(&session);
        data.version = 99;
        let json = serde_json::to_string(&data).unwrap();
        match parse_save(&json) {
            Err(SaveError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, SAVE_VERSION);
                assert_eq!(found, 99);
            }
            other => panic!("expected version mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_restore_rejects_bad_dimensions() {
        let session = played_session();
        let mut data = SaveData::from_session(&session);
        data.world.width = 15;
        assert!(matches!(
            restore_session(data),
            Err(SaveError::InvalidData(_))
        ));
    }

    #[test]
    fn test_summary_scores() {
        let session = played_session();
        let data = SaveData::from_session(&session);
        // Red: 2 hexes + settlement 5 + farm 2 = 9; Blue: 1 hex
        assert_eq!(score_from_save(&data, PlayerId::Red), 9);
        assert_eq!(score_from_save(&data, PlayerId::Blue), 1);
    }

    #[test]
    fn test_seam_hexes_restore_canonically() {
        let mut session = Session::new(5, 20, 16, GameRules::default());
        assert!(session.claim(HexCoord::new(-1, 5)));
        let data = SaveData::from_session(&session);
        let restored = restore_session(data).unwrap();
        assert_eq!(
            restored.board().owner(HexCoord::new(19, 5)),
            Some(PlayerId::Red)
        );
        assert!(restored.player(PlayerId::Red).owns(HexCoord::new(19, 5)));
    }
}
