//! Game module - rules, match state, and the state machine

mod board;
mod events;
mod player;
mod rules;
mod session;
mod state;

pub use board::{Board, HexState};
pub use events::{
    ActionKind, ActionLedger, ActionRecord, GameMessage, MessageCategory, MessageLog,
    RECENT_MESSAGES,
};
pub use player::{Player, PlayerId};
pub use rules::{GameRules, ImprovementSpec, ImprovementType, ResourceType};
pub use session::{MatchOutcome, Session};
pub use state::{Game, GameState, PlayingState};
