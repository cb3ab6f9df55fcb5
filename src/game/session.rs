//! A single match: board, players, and the turn loop
//!
//! All rules live here. Coordinates are canonicalized through the map's
//! wrap before they touch the board, so any alias of a hex reaches the
//! same record.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::game::board::Board;
use crate::game::events::{ActionKind, ActionLedger, MessageCategory, MessageLog};
use crate::game::player::{Player, PlayerId};
use crate::game::rules::{GameRules, ImprovementType, ResourceType};
use crate::world::{HexCoord, WorldMap};

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(PlayerId),
    Tie,
}

/// A running or finished match.
#[derive(Debug, Clone)]
pub struct Session {
    /// The generated world.
    pub(crate) map: WorldMap,
    /// Ownership and improvements, keyed by canonical coordinates.
    pub(crate) board: Board,
    /// Both players, indexed by `PlayerId::index`.
    pub(crate) players: [Player; 2],
    /// Whose turn it is.
    pub(crate) current: PlayerId,
    /// Turn number, starting at 1. Increments when play returns to Red.
    pub(crate) turn: u32,
    /// Rules in effect for this match.
    pub(crate) rules: GameRules,
    /// Set once the match has ended.
    pub(crate) outcome: Option<MatchOutcome>,
    /// On-screen message log.
    pub(crate) log: MessageLog,
    /// Machine-readable replay ledger.
    pub(crate) ledger: ActionLedger,
}

impl Session {
    /// Start a fresh match on a newly generated world.
    pub fn new(seed: u64, width: u32, height: u32, rules: GameRules) -> Self {
        let starting = rules.starting_resources;
        let mut session = Self {
            map: WorldMap::generate(seed, width, height),
            board: Board::new(),
            players: [
                Player::new(PlayerId::Red, starting),
                Player::new(PlayerId::Blue, starting),
            ],
            current: PlayerId::Red,
            turn: 1,
            rules,
            outcome: None,
            log: MessageLog::new(),
            ledger: ActionLedger::new(),
        };
        session.push_message(
            "The ice retreats from a new world. Red moves first.".to_string(),
            MessageCategory::System,
        );
        session
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn ledger(&self) -> &ActionLedger {
        &self.ledger
    }

    /// Canonical (wrapped) coordinates of a hex.
    pub fn canon(&self, hex: HexCoord) -> HexCoord {
        self.map.wrap(hex)
    }

    /// Claims the current player has left this turn.
    pub fn claims_left(&self) -> u32 {
        self.rules
            .max_claims_per_turn
            .saturating_sub(self.current_player().claims_this_turn())
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Whether the current player may claim this hex right now.
    pub fn can_claim(&self, hex: HexCoord) -> bool {
        let hex = self.canon(hex);
        if self.current_player().claims_this_turn() >= self.rules.max_claims_per_turn {
            return false;
        }
        if self.board.owner(hex).is_some() {
            return false;
        }
        // Before the first settlement a claim may go anywhere
        if !self.has_settlement(self.current) {
            return true;
        }
        self.settlement_in_reach(hex)
    }

    /// Claim a hex for the current player. Logs either way.
    pub fn claim(&mut self, hex: HexCoord) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let hex = self.canon(hex);
        if !self.can_claim(hex) {
            let reason = if self.current_player().claims_this_turn()
                >= self.rules.max_claims_per_turn
            {
                " - No claims remaining this turn"
            } else if self.board.owner(hex).is_some() {
                " - already claimed"
            } else {
                " - no settlement in reach"
            };
            self.log_action(
                format!("Failed to claim hex at {}{}", hex, reason),
                MessageCategory::Warning,
                ActionKind::Claim {
                    hex,
                    success: false,
                },
            );
            return false;
        }

        self.board.set_owner(hex, self.current);
        let idx = self.current.index();
        self.players[idx].add_hex(hex);
        self.players[idx].record_claim();
        self.log_action(
            format!("Claimed hex at {}", hex),
            MessageCategory::Action,
            ActionKind::Claim { hex, success: true },
        );
        true
    }

    /// Whether the current player may build this improvement here.
    pub fn can_build(&self, hex: HexCoord, improvement: ImprovementType) -> bool {
        let hex = self.canon(hex);
        if self.board.owner(hex) != Some(self.current) {
            return false;
        }
        if self.board.improvement(hex).is_some() {
            return false;
        }
        if !self.current_player().can_afford(self.rules.cost(improvement)) {
            return false;
        }
        // The first settlement is placed freely; later ones keep their
        // distance from each other
        if improvement == ImprovementType::Settlement
            && self.has_settlement(self.current)
            && !self.settlement_spacing_ok(hex)
        {
            return false;
        }
        true
    }

    /// Build an improvement on a hex. Logs either way.
    pub fn build(&mut self, hex: HexCoord, improvement: ImprovementType) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let hex = self.canon(hex);
        if !self.can_build(hex, improvement) {
            let reason = self.build_failure_reason(hex, improvement);
            self.log_action(
                format!(
                    "Failed to build {} at {} - {}",
                    improvement.name(),
                    hex,
                    reason
                ),
                MessageCategory::Warning,
                ActionKind::Build {
                    hex,
                    improvement,
                    success: false,
                },
            );
            return false;
        }

        let cost = self.rules.cost(improvement).to_vec();
        if !self.players[self.current.index()].spend(&cost) {
            return false;
        }
        self.board.set_improvement(hex, improvement);
        self.log_action(
            format!("Built {} at {}", improvement.name(), hex),
            MessageCategory::Action,
            ActionKind::Build {
                hex,
                improvement,
                success: true,
            },
        );
        true
    }

    /// End the current player's turn: collect income, pass play, and
    /// evaluate victory when the round closes.
    pub fn end_turn(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        // Income from every improvement on owned hexes
        let idx = self.current.index();
        let owned: Vec<HexCoord> = self.players[idx].owned().iter().copied().collect();
        let mut gained: Vec<(ResourceType, u32)> = Vec::new();
        for hex in owned {
            if let Some(improvement) = self.board.improvement(hex) {
                let yields = self.rules.yields(improvement).to_vec();
                self.players[idx].earn(&yields);
                for (kind, amount) in yields {
                    match gained.iter_mut().find(|(k, _)| *k == kind) {
                        Some((_, total)) => *total += amount,
                        None => gained.push((kind, amount)),
                    }
                }
            }
        }
        gained.sort_by_key(|&(kind, _)| kind.index());

        let summary = if gained.is_empty() {
            "none".to_string()
        } else {
            gained
                .iter()
                .map(|&(kind, amount)| format!("{} {}", amount, kind.name()))
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.log_action(
            format!("Ended turn, gained resources: {}", summary),
            MessageCategory::Resource,
            ActionKind::EndTurn { gained },
        );

        // Pass play; a full round closes when play returns to Red
        self.players[idx].reset_claims();
        self.current = self.current.opponent();
        if self.current != PlayerId::Red {
            return;
        }
        self.turn += 1;

        if let Some(outcome) = self.check_victory() {
            self.outcome = Some(outcome);
            match outcome {
                MatchOutcome::Winner(winner) => {
                    let points = self.score(winner);
                    self.log_action(
                        format!("Game Over! {} wins with {} points!", winner.name(), points),
                        MessageCategory::System,
                        ActionKind::MatchOver {
                            winner: Some(winner),
                            points,
                        },
                    );
                }
                MatchOutcome::Tie => {
                    let points = self.score(PlayerId::Red);
                    self.log_action(
                        "Game Over! It's a tie!".to_string(),
                        MessageCategory::System,
                        ActionKind::MatchOver {
                            winner: None,
                            points,
                        },
                    );
                }
            }
        }
    }

    /// Victory points of a player: owned hexes plus improvements.
    pub fn score(&self, id: PlayerId) -> u32 {
        let player = &self.players[id.index()];
        let mut points = player.owned().len() as u32 * self.rules.points_per_hex;
        for &hex in player.owned() {
            if let Some(improvement) = self.board.improvement(hex) {
                points += self.rules.points(improvement);
            }
        }
        points
    }

    /// Append a message that is not tied to a player action.
    pub fn push_message(&mut self, text: String, category: MessageCategory) {
        self.log.push(text, category);
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn has_settlement(&self, id: PlayerId) -> bool {
        self.players[id.index()]
            .owned()
            .iter()
            .any(|&hex| self.board.improvement(hex) == Some(ImprovementType::Settlement))
    }

    fn settlement_in_reach(&self, hex: HexCoord) -> bool {
        self.current_player().owned().iter().any(|&owned| {
            self.board.improvement(owned) == Some(ImprovementType::Settlement)
                && self.map.distance(hex, owned) <= self.rules.claim_reach
        })
    }

    fn settlement_spacing_ok(&self, hex: HexCoord) -> bool {
        self.current_player().owned().iter().all(|&owned| {
            self.board.improvement(owned) != Some(ImprovementType::Settlement)
                || self.map.distance(hex, owned) >= self.rules.settlement_spacing
        })
    }

    fn build_failure_reason(
        &self,
        hex: HexCoord,
        improvement: ImprovementType,
    ) -> &'static str {
        if self.board.owner(hex) != Some(self.current) {
            "must own the hex"
        } else if self.board.improvement(hex).is_some() {
            "hex already has an improvement"
        } else if !self.current_player().can_afford(self.rules.cost(improvement)) {
            "insufficient resources"
        } else {
            "too close to another settlement"
        }
    }

    fn check_victory(&self) -> Option<MatchOutcome> {
        // Threshold victory; Red is checked first and wins a dead heat
        for id in PlayerId::all() {
            if self.score(id) >= self.rules.points_to_win {
                return Some(MatchOutcome::Winner(id));
            }
        }
        if self.turn >= self.rules.max_turns {
            let red = self.score(PlayerId::Red);
            let blue = self.score(PlayerId::Blue);
            return Some(match red.cmp(&blue) {
                Ordering::Greater => MatchOutcome::Winner(PlayerId::Red),
                Ordering::Less => MatchOutcome::Winner(PlayerId::Blue),
                Ordering::Equal => MatchOutcome::Tie,
            });
        }
        None
    }

    fn log_action(&mut self, text: String, category: MessageCategory, action: ActionKind) {
        let line = format!("Turn {} - {}: {}", self.turn, self.current.name(), text);
        self.log.push(line, category);
        self.ledger.record(self.turn, self.current, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rules() -> GameRules {
        GameRules::default()
    }

    fn new_session() -> Session {
        Session::new(7, 20, 16, test_rules())
    }

    fn last_message(session: &Session) -> &str {
        &session.log.messages().last().unwrap().text
    }

    #[test]
    fn test_new_session_defaults() {
        let session = new_session();
        assert_eq!(session.turn(), 1);
        assert_eq!(session.current_player_id(), PlayerId::Red);
        assert!(session.board().is_empty());
        assert!(session.outcome().is_none());
        for id in PlayerId::all() {
            for kind in ResourceType::all() {
                assert_eq!(session.player(id).resource(kind), 10);
            }
            assert_eq!(session.score(id), 0);
        }
    }

    #[test]
    fn test_first_claim_goes_anywhere() {
        let mut session = new_session();
        let hex = HexCoord::new(15, 3);
        assert!(session.can_claim(hex));
        assert!(session.claim(hex));
        assert_eq!(session.board().owner(hex), Some(PlayerId::Red));
        assert!(session.player(PlayerId::Red).owns(hex));
        assert_eq!(session.score(PlayerId::Red), 1);
        assert_eq!(last_message(&session), "Turn 1 - Red: Claimed hex at (15, 3)");
    }

    #[test]
    fn test_claim_limit_per_turn() {
        let mut session = new_session();
        assert!(session.claim(HexCoord::new(1, 1)));
        assert_eq!(session.claims_left(), 0);

        let second = HexCoord::new(2, 2);
        assert!(!session.can_claim(second));
        assert!(!session.claim(second));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Failed to claim hex at (2, 2) - No claims remaining this turn"
        );

        // The limit resets with the next turn
        session.end_turn();
        session.end_turn();
        assert_eq!(session.turn(), 2);
        assert!(session.claim(second));
    }

    #[test]
    fn test_cannot_claim_owned_hex() {
        let mut session = new_session();
        let hex = HexCoord::new(4, 4);
        assert!(session.claim(hex));
        session.end_turn();

        // Blue cannot take what Red holds
        assert_eq!(session.current_player_id(), PlayerId::Blue);
        assert!(!session.claim(hex));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Blue: Failed to claim hex at (4, 4) - already claimed"
        );
    }

    #[test]
    fn test_claim_wraps_to_canonical_hex() {
        let mut session = new_session();
        // (-1, 5) on a 20-wide world is (19, 5)
        assert!(session.claim(HexCoord::new(-1, 5)));
        assert_eq!(session.board().owner(HexCoord::new(19, 5)), Some(PlayerId::Red));
        assert!(session.player(PlayerId::Red).owns(HexCoord::new(19, 5)));
    }

    /// Claim a hex for the current player regardless of the per-turn
    /// limit, without touching the turn cycle.
    fn force_claim(session: &mut Session, hex: HexCoord) {
        let hex = session.canon(hex);
        let idx = session.current.index();
        session.board.set_owner(hex, session.current);
        session.players[idx].add_hex(hex);
    }

    fn force_build(session: &mut Session, hex: HexCoord, improvement: ImprovementType) {
        let hex = session.canon(hex);
        session.board.set_improvement(hex, improvement);
    }

    #[test]
    fn test_claim_reach_requires_settlement_nearby() {
        let mut session = new_session();
        force_claim(&mut session, HexCoord::new(5, 5));
        force_build(&mut session, HexCoord::new(5, 5), ImprovementType::Settlement);

        // Distance 2 from the settlement: fine
        assert!(session.can_claim(HexCoord::new(7, 5)));
        // Distance 4: out of reach
        assert!(!session.can_claim(HexCoord::new(9, 5)));
        assert!(!session.claim(HexCoord::new(9, 5)));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Failed to claim hex at (9, 5) - no settlement in reach"
        );
    }

    #[test]
    fn test_claim_reach_works_through_seam() {
        let mut session = new_session();
        force_claim(&mut session, HexCoord::new(0, 5));
        force_build(&mut session, HexCoord::new(0, 5), ImprovementType::Settlement);
        // (19, 5) touches (0, 5) through the vertical seam
        assert!(session.can_claim(HexCoord::new(19, 5)));
    }

    #[test]
    fn test_build_requires_ownership() {
        let mut session = new_session();
        assert!(!session.build(HexCoord::new(3, 3), ImprovementType::Farm));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Failed to build Farm at (3, 3) - must own the hex"
        );
    }

    #[test]
    fn test_build_spends_resources() {
        let mut session = new_session();
        let hex = HexCoord::new(3, 3);
        assert!(session.claim(hex));
        assert!(session.build(hex, ImprovementType::Quarry));
        // Quarry costs 2 wood and 1 stone
        assert_eq!(session.player(PlayerId::Red).resource(ResourceType::Wood), 8);
        assert_eq!(session.player(PlayerId::Red).resource(ResourceType::Stone), 9);
        assert_eq!(session.board().improvement(hex), Some(ImprovementType::Quarry));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Built Quarry at (3, 3)"
        );
        // Hex point plus quarry points
        assert_eq!(session.score(PlayerId::Red), 4);
    }

    #[test]
    fn test_build_rejects_occupied_hex() {
        let mut session = new_session();
        let hex = HexCoord::new(3, 3);
        assert!(session.claim(hex));
        assert!(session.build(hex, ImprovementType::Farm));
        assert!(!session.build(hex, ImprovementType::Quarry));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Failed to build Quarry at (3, 3) - hex already has an improvement"
        );
    }

    #[test]
    fn test_build_rejects_unaffordable() {
        let mut session = new_session();
        force_claim(&mut session, HexCoord::new(1, 1));
        force_claim(&mut session, HexCoord::new(2, 1));
        force_claim(&mut session, HexCoord::new(3, 1));
        // Farms cost 2 wood each; 10 wood covers five, not six
        for col in 1..=3 {
            assert!(session.build(HexCoord::new(col, 1), ImprovementType::Farm));
        }
        force_claim(&mut session, HexCoord::new(4, 1));
        force_claim(&mut session, HexCoord::new(5, 1));
        assert!(session.build(HexCoord::new(4, 1), ImprovementType::Farm));
        assert!(session.build(HexCoord::new(5, 1), ImprovementType::Farm));

        force_claim(&mut session, HexCoord::new(6, 1));
        assert!(!session.build(HexCoord::new(6, 1), ImprovementType::Farm));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Failed to build Farm at (6, 1) - insufficient resources"
        );
    }

    #[test]
    fn test_settlement_spacing() {
        let mut session = new_session();
        force_claim(&mut session, HexCoord::new(5, 5));
        force_claim(&mut session, HexCoord::new(8, 5));
        force_claim(&mut session, HexCoord::new(10, 5));

        // First settlement is free-placed
        assert!(session.build(HexCoord::new(5, 5), ImprovementType::Settlement));

        // Give Red the resources for two more
        let idx = PlayerId::Red.index();
        session.players[idx].earn(&[
            (ResourceType::Wood, 20),
            (ResourceType::Stone, 20),
            (ResourceType::Food, 20),
        ]);

        // Distance 3: too close
        assert!(!session.build(HexCoord::new(8, 5), ImprovementType::Settlement));
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Failed to build Settlement at (8, 5) - too close to another settlement"
        );

        // Distance 5: fine
        assert!(session.build(HexCoord::new(10, 5), ImprovementType::Settlement));
    }

    #[test]
    fn test_end_turn_grants_yields() {
        let mut session = new_session();
        let farm = HexCoord::new(2, 2);
        assert!(session.claim(farm));
        assert!(session.build(farm, ImprovementType::Farm));
        assert_eq!(session.player(PlayerId::Red).resource(ResourceType::Food), 10);

        session.end_turn();
        // Farm pays 2 food to Red at the end of Red's turn
        assert_eq!(session.player(PlayerId::Red).resource(ResourceType::Food), 12);
        assert_eq!(session.current_player_id(), PlayerId::Blue);
        assert_eq!(session.turn(), 1);

        let red_messages: Vec<&str> = session
            .log
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert!(red_messages
            .contains(&"Turn 1 - Red: Ended turn, gained resources: 2 food"));
    }

    #[test]
    fn test_end_turn_without_income() {
        let mut session = new_session();
        session.end_turn();
        assert_eq!(
            last_message(&session),
            "Turn 1 - Red: Ended turn, gained resources: none"
        );
    }

    #[test]
    fn test_round_closes_when_play_returns_to_red() {
        let mut session = new_session();
        session.end_turn();
        assert_eq!(session.current_player_id(), PlayerId::Blue);
        assert_eq!(session.turn(), 1);
        session.end_turn();
        assert_eq!(session.current_player_id(), PlayerId::Red);
        assert_eq!(session.turn(), 2);
    }

    #[test]
    fn test_threshold_victory() {
        let mut rules = test_rules();
        rules.points_to_win = 3;
        let mut session = Session::new(7, 20, 16, rules);

        assert!(session.claim(HexCoord::new(1, 1)));
        session.end_turn();
        assert!(session.claim(HexCoord::new(10, 10)));
        session.end_turn();
        // 1 point each, nobody is there yet
        assert!(session.outcome().is_none());

        assert!(session.claim(HexCoord::new(2, 1)));
        assert!(session.build(HexCoord::new(1, 1), ImprovementType::Farm));
        session.end_turn();
        session.end_turn();

        // Red holds 2 hexes and a farm: 4 points
        assert_eq!(session.outcome(), Some(MatchOutcome::Winner(PlayerId::Red)));
        assert!(session.is_over());
        assert_eq!(
            last_message(&session),
            "Turn 3 - Red: Game Over! Red wins with 4 points!"
        );
    }

    #[test]
    fn test_turn_limit_picks_higher_score() {
        let mut rules = test_rules();
        rules.max_turns = 2;
        let mut session = Session::new(7, 20, 16, rules);

        assert!(session.claim(HexCoord::new(1, 1)));
        session.end_turn();
        session.end_turn();
        assert_eq!(session.turn(), 2);
        assert_eq!(session.outcome(), Some(MatchOutcome::Winner(PlayerId::Red)));
    }

    #[test]
    fn test_turn_limit_tie() {
        let mut rules = test_rules();
        rules.max_turns = 2;
        let mut session = Session::new(7, 20, 16, rules);

        session.end_turn();
        session.end_turn();
        assert_eq!(session.outcome(), Some(MatchOutcome::Tie));
        assert_eq!(last_message(&session), "Turn 2 - Red: Game Over! It's a tie!");
    }

    #[test]
    fn test_finished_match_ignores_actions() {
        let mut rules = test_rules();
        rules.max_turns = 1;
        let mut session = Session::new(7, 20, 16, rules);
        session.end_turn();
        session.end_turn();
        assert!(session.is_over());

        let messages_before = session.log.messages().len();
        let records_before = session.ledger.records().len();
        assert!(!session.claim(HexCoord::new(1, 1)));
        assert!(!session.build(HexCoord::new(1, 1), ImprovementType::Farm));
        session.end_turn();
        // Nothing moved and nothing was logged
        assert_eq!(session.log.messages().len(), messages_before);
        assert_eq!(session.ledger.records().len(), records_before);
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_ledger_records_actions() {
        let mut session = new_session();
        assert!(session.claim(HexCoord::new(1, 1)));
        assert!(session.build(HexCoord::new(1, 1), ImprovementType::Farm));
        session.end_turn();

        let records = session.ledger().records();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].action,
            ActionKind::Claim {
                hex: HexCoord::new(1, 1),
                success: true
            }
        );
        assert_eq!(
            records[1].action,
            ActionKind::Build {
                hex: HexCoord::new(1, 1),
                improvement: ImprovementType::Farm,
                success: true
            }
        );
        assert_eq!(
            records[2].action,
            ActionKind::EndTurn {
                gained: vec![(ResourceType::Food, 2)]
            }
        );
        assert!(records.windows(2).all(|w| w[0].seq < w[1].seq));
    }

    #[test]
    fn test_score_counts_hexes_and_improvements() {
        let mut session = new_session();
        force_claim(&mut session, HexCoord::new(1, 1));
        force_claim(&mut session, HexCoord::new(2, 1));
        force_claim(&mut session, HexCoord::new(3, 1));
        force_build(&mut session, HexCoord::new(1, 1), ImprovementType::Settlement);
        force_build(&mut session, HexCoord::new(2, 1), ImprovementType::Quarry);
        // 3 hexes + settlement 5 + quarry 3
        assert_eq!(session.score(PlayerId::Red), 11);
        assert_eq!(session.score(PlayerId::Blue), 0);
    }
}
