//! Game state machine
//!
//! Owns the active session and the transitions between menus, play,
//! and the end-of-match screen.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::load_rules;
use crate::game::events::MessageCategory;
use crate::game::player::PlayerId;
use crate::game::rules::GameRules;
use crate::game::session::{MatchOutcome, Session};
use crate::save::{load_profile, save_profile, PlayerProfile};
use crate::world::{HexCoord, WorldSize};

/// All top-level game states.
#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    /// Main menu screen
    MainMenu,
    /// Actively playing
    Playing(PlayingState),
    /// In-game menu (ESC)
    Paused,
    /// Selecting save slot
    SaveSlots { selected: u8 },
    /// Selecting load slot
    LoadSlots { selected: u8 },
    /// Viewing lifetime statistics
    Stats,
    /// Match finished
    GameOver { outcome: MatchOutcome },
    /// Exit the game
    Quit,
}

/// Sub-states while playing.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayingState {
    /// Looking around the map, claiming and building
    Surveying,
    /// Choosing an improvement for a hex
    BuildMenu { target: HexCoord },
    /// Help overlay
    Help,
}

/// The main game struct: current state, active match, persistent data.
pub struct Game {
    /// Current game state
    state: GameState,
    /// The running match, if any
    session: Option<Session>,
    /// Rules applied to new matches
    rules: GameRules,
    /// Seed source for new worlds
    rng: StdRng,
    /// Persistent player profile
    profile: PlayerProfile,
}

impl Game {
    /// Create a new game instance at the main menu.
    pub fn new() -> Self {
        let profile = load_profile();
        let rules = load_rules();
        Self {
            state: GameState::MainMenu,
            session: None,
            rules,
            rng: StdRng::from_entropy(),
            profile,
        }
    }

    /// Get the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Transition to a new state
    pub fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Start a new match on a fresh world.
    pub fn start_new_match(&mut self, seed: Option<u64>, size: WorldSize) {
        self.profile.record_match_start();
        if let Err(e) = save_profile(&self.profile) {
            log::warn!("Failed to save profile: {}", e);
        }

        let seed = seed.unwrap_or_else(|| self.rng.gen());
        let (width, height) = size.dimensions();
        log::info!(
            "Starting new match: seed {}, world {}x{}",
            seed,
            width,
            height
        );

        self.session = Some(Session::new(seed, width, height, self.rules.clone()));
        self.set_state(GameState::Playing(PlayingState::Surveying));
    }

    /// End the current player's turn and handle a finished match.
    pub fn end_turn(&mut self) {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return,
        };
        session.end_turn();

        if let Some(outcome) = session.outcome() {
            let turns = session.turn();
            let best = session
                .score(PlayerId::Red)
                .max(session.score(PlayerId::Blue));
            self.profile.record_match_end(outcome, turns, best);
            if let Err(e) = save_profile(&self.profile) {
                log::warn!("Failed to save profile: {}", e);
            }
            self.set_state(GameState::GameOver { outcome });
        }
    }

    /// Install a session restored from a save and enter play.
    pub fn restore_session(&mut self, session: Session) {
        let state = match session.outcome() {
            Some(outcome) => GameState::GameOver { outcome },
            None => GameState::Playing(PlayingState::Surveying),
        };
        self.session = Some(session);
        self.set_state(state);
    }

    /// Append a message to the running match's log.
    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        if let Some(session) = self.session.as_mut() {
            session.push_message(text.into(), category);
        }
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.set_state(GameState::Quit);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
