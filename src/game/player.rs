//! Players and their stockpiles

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::game::rules::ResourceType;
use crate::world::HexCoord;

/// The two seats of a hotseat match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Red,
    Blue,
}

impl PlayerId {
    /// Display color.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            PlayerId::Red => (200, 0, 0),
            PlayerId::Blue => (0, 0, 200),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PlayerId::Red => "Red",
            PlayerId::Blue => "Blue",
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Red => PlayerId::Blue,
            PlayerId::Blue => PlayerId::Red,
        }
    }

    /// Stable index into the session's player array.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::Red => 0,
            PlayerId::Blue => 1,
        }
    }

    /// Turn order: Red moves first.
    pub fn all() -> [PlayerId; 2] {
        [PlayerId::Red, PlayerId::Blue]
    }
}

/// One player's state within a match.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    resources: [u32; 3],
    owned: BTreeSet<HexCoord>,
    claims_this_turn: u32,
}

impl Player {
    /// New player with the starting stockpile of every resource.
    pub fn new(id: PlayerId, starting_resources: u32) -> Self {
        Self {
            id,
            resources: [starting_resources; 3],
            owned: BTreeSet::new(),
            claims_this_turn: 0,
        }
    }

    /// Rebuild a player from saved state.
    pub fn restore(
        id: PlayerId,
        resources: [u32; 3],
        owned: BTreeSet<HexCoord>,
        claims_this_turn: u32,
    ) -> Self {
        Self {
            id,
            resources,
            owned,
            claims_this_turn,
        }
    }

    /// Current amount of one resource.
    pub fn resource(&self, kind: ResourceType) -> u32 {
        self.resources[kind.index()]
    }

    /// All stockpiles, in resource order.
    pub fn resources(&self) -> [(ResourceType, u32); 3] {
        ResourceType::all().map(|kind| (kind, self.resources[kind.index()]))
    }

    /// True if every listed cost is covered.
    pub fn can_afford(&self, costs: &[(ResourceType, u32)]) -> bool {
        costs
            .iter()
            .all(|&(kind, amount)| self.resources[kind.index()] >= amount)
    }

    /// Spend the listed costs, all or nothing.
    pub fn spend(&mut self, costs: &[(ResourceType, u32)]) -> bool {
        if !self.can_afford(costs) {
            return false;
        }
        for &(kind, amount) in costs {
            self.resources[kind.index()] -= amount;
        }
        true
    }

    /// Add the listed gains to the stockpile.
    pub fn earn(&mut self, gains: &[(ResourceType, u32)]) {
        for &(kind, amount) in gains {
            self.resources[kind.index()] += amount;
        }
    }

    /// Hexes this player owns, in canonical order.
    pub fn owned(&self) -> &BTreeSet<HexCoord> {
        &self.owned
    }

    pub fn owns(&self, hex: HexCoord) -> bool {
        self.owned.contains(&hex)
    }

    pub fn add_hex(&mut self, hex: HexCoord) {
        self.owned.insert(hex);
    }

    /// Claims spent so far this turn.
    pub fn claims_this_turn(&self) -> u32 {
        self.claims_this_turn
    }

    pub fn record_claim(&mut self) {
        self.claims_this_turn += 1;
    }

    pub fn reset_claims(&mut self) {
        self.claims_this_turn = 0;
    }
}
