//! Ownership and improvements on the hex grid
//!
//! Sparse: only touched hexes get a record. Keys must be canonical
//! (wrapped) coordinates; the session wraps before every access so a
//! hex addressed through the seam lands on the same record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::game::player::PlayerId;
use crate::game::rules::ImprovementType;
use crate::world::HexCoord;

/// Per-hex game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexState {
    pub owner: Option<PlayerId>,
    pub improvement: Option<ImprovementType>,
}

/// All claimed or improved hexes of a match.
#[derive(Debug, Clone, Default)]
pub struct Board {
    states: BTreeMap<HexCoord, HexState>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a hex; untouched hexes read as unowned and empty.
    pub fn state(&self, hex: HexCoord) -> HexState {
        self.states.get(&hex).copied().unwrap_or_default()
    }

    pub fn owner(&self, hex: HexCoord) -> Option<PlayerId> {
        self.state(hex).owner
    }

    pub fn improvement(&self, hex: HexCoord) -> Option<ImprovementType> {
        self.state(hex).improvement
    }

    pub fn set_owner(&mut self, hex: HexCoord, owner: PlayerId) {
        self.states.entry(hex).or_default().owner = Some(owner);
    }

    pub fn set_improvement(&mut self, hex: HexCoord, improvement: ImprovementType) {
        self.states.entry(hex).or_default().improvement = Some(improvement);
    }

    /// Insert a full record, used when restoring a save.
    pub fn insert(&mut self, hex: HexCoord, state: HexState) {
        self.states.insert(hex, state);
    }

    /// All records in canonical key order.
    pub fn entries(&self) -> impl Iterator<Item = (HexCoord, HexState)> + '_ {
        self.states.iter().map(|(&hex, &state)| (hex, state))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
