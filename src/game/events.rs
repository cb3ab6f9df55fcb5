//! Message log and action ledger
//!
//! Every action is recorded twice: a human-readable message for the log
//! panel and a machine-readable record for replay and saves.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::game::player::PlayerId;
use crate::game::rules::{ImprovementType, ResourceType};
use crate::world::HexCoord;

/// Messages kept in the log before the oldest are dropped.
const MESSAGE_CAP: usize = 100;

/// Messages shown by default in the log panel.
pub const RECENT_MESSAGES: usize = 5;

/// Category of a log message, used for display coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageCategory {
    /// Claims, builds, and other deliberate moves.
    Action,
    /// Resource income.
    Resource,
    /// Match flow: turn changes, game over.
    System,
    /// Failed or rejected actions.
    Warning,
}

/// One entry of the on-screen log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMessage {
    pub text: String,
    /// Unix timestamp, seconds.
    pub timestamp: f64,
    pub category: MessageCategory,
}

/// The on-screen message log, capped at a fixed length.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<GameMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from saved messages, re-applying the cap.
    pub fn from_messages(messages: Vec<GameMessage>) -> Self {
        let mut log = Self { messages };
        while log.messages.len() > MESSAGE_CAP {
            log.messages.remove(0);
        }
        log
    }

    pub fn push(&mut self, text: String, category: MessageCategory) {
        self.messages.push(GameMessage {
            text,
            timestamp: unix_now(),
            category,
        });
        if self.messages.len() > MESSAGE_CAP {
            self.messages.remove(0);
        }
    }

    /// The most recent `count` messages, oldest first.
    pub fn recent(&self, count: usize) -> &[GameMessage] {
        let start = self.messages.len().saturating_sub(count);
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }
}

/// What an action record describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    Claim {
        hex: HexCoord,
        success: bool,
    },
    Build {
        hex: HexCoord,
        improvement: ImprovementType,
        success: bool,
    },
    EndTurn {
        gained: Vec<(ResourceType, u32)>,
    },
    MatchOver {
        winner: Option<PlayerId>,
        points: u32,
    },
}

/// One machine-readable entry of the replay ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Monotonic sequence number within the match.
    pub seq: u64,
    pub turn: u32,
    pub player: PlayerId,
    /// Unix timestamp, seconds.
    pub timestamp: f64,
    pub action: ActionKind,
}

/// Every action of the match, in order.
#[derive(Debug, Clone, Default)]
pub struct ActionLedger {
    records: Vec<ActionRecord>,
    next_seq: u64,
}

impl ActionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from saved records.
    pub fn from_records(records: Vec<ActionRecord>) -> Self {
        let next_seq = records.last().map(|r| r.seq + 1).unwrap_or(0);
        Self { records, next_seq }
    }

    pub fn record(&mut self, turn: u32, player: PlayerId, action: ActionKind) {
        self.records.push(ActionRecord {
            seq: self.next_seq,
            turn,
            player,
            timestamp: unix_now(),
            action,
        });
        self.next_seq += 1;
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
