//! Rules and balance tables
//!
//! Costs, yields, scoring, and the match knobs. Everything here is
//! serde-able so `assets/data/rules.ron` can override the defaults.

use serde::{Deserialize, Serialize};

/// The three stockpiled resources.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ResourceType {
    Food,
    Wood,
    Stone,
}

impl ResourceType {
    /// Stable index into per-player resource arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ResourceType::Food => 0,
            ResourceType::Wood => 1,
            ResourceType::Stone => 2,
        }
    }

    /// Lowercase name, as used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Food => "food",
            ResourceType::Wood => "wood",
            ResourceType::Stone => "stone",
        }
    }

    pub fn all() -> [ResourceType; 3] {
        [ResourceType::Food, ResourceType::Wood, ResourceType::Stone]
    }
}

/// Buildable improvements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImprovementType {
    Farm,
    LumberCamp,
    Quarry,
    Settlement,
}

impl ImprovementType {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ImprovementType::Farm => "Farm",
            ImprovementType::LumberCamp => "Lumber Camp",
            ImprovementType::Quarry => "Quarry",
            ImprovementType::Settlement => "Settlement",
        }
    }

    /// Glyph drawn at the hex center on the map.
    pub fn glyph(self) -> char {
        match self {
            ImprovementType::Farm => '▤',
            ImprovementType::LumberCamp => '♠',
            ImprovementType::Quarry => '●',
            ImprovementType::Settlement => '⌂',
        }
    }

    /// Marker color on the map.
    pub fn icon_color(self) -> (u8, u8, u8) {
        match self {
            ImprovementType::Farm => (255, 255, 0),
            ImprovementType::LumberCamp => (139, 69, 19),
            ImprovementType::Quarry => (169, 169, 169),
            ImprovementType::Settlement => (255, 255, 255),
        }
    }

    pub fn all() -> [ImprovementType; 4] {
        [
            ImprovementType::Farm,
            ImprovementType::LumberCamp,
            ImprovementType::Quarry,
            ImprovementType::Settlement,
        ]
    }
}

/// Cost, yield, and scoring of one improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSpec {
    /// Resources spent to build.
    pub cost: Vec<(ResourceType, u32)>,
    /// Resources granted at each end of turn.
    pub yield_per_turn: Vec<(ResourceType, u32)>,
    /// Victory points while standing.
    pub points: u32,
}

/// Tunable rules for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    /// Points that end the match immediately.
    pub points_to_win: u32,
    /// Rounds before the match is scored as it stands.
    pub max_turns: u32,
    /// Hex claims allowed per player per turn.
    pub max_claims_per_turn: u32,
    /// Claims must be within this range of an own settlement,
    /// once the player has one.
    pub claim_reach: u32,
    /// Minimum distance between a player's own settlements.
    pub settlement_spacing: u32,
    /// Points per owned hex.
    pub points_per_hex: u32,
    /// Starting amount of every resource.
    pub starting_resources: u32,
    pub farm: ImprovementSpec,
    pub lumber_camp: ImprovementSpec,
    pub quarry: ImprovementSpec,
    pub settlement: ImprovementSpec,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            points_to_win: 30,
            max_turns: 20,
            max_claims_per_turn: 1,
            claim_reach: 2,
            settlement_spacing: 4,
            points_per_hex: 1,
            starting_resources: 10,
            farm: ImprovementSpec {
                cost: vec![(ResourceType::Wood, 2)],
                yield_per_turn: vec![(ResourceType::Food, 2)],
                points: 2,
            },
            lumber_camp: ImprovementSpec {
                cost: vec![(ResourceType::Wood, 3)],
                yield_per_turn: vec![(ResourceType::Wood, 2)],
                points: 2,
            },
            quarry: ImprovementSpec {
                cost: vec![(ResourceType::Wood, 2), (ResourceType::Stone, 1)],
                yield_per_turn: vec![(ResourceType::Stone, 1)],
                points: 3,
            },
            settlement: ImprovementSpec {
                cost: vec![
                    (ResourceType::Wood, 5),
                    (ResourceType::Stone, 3),
                    (ResourceType::Food, 2),
                ],
                yield_per_turn: Vec::new(),
                points: 5,
            },
        }
    }
}

impl GameRules {
    /// Table entry for an improvement.
    pub fn improvement(&self, kind: ImprovementType) -> &ImprovementSpec {
        match kind {
            ImprovementType::Farm => &self.farm,
            ImprovementType::LumberCamp => &self.lumber_camp,
            ImprovementType::Quarry => &self.quarry,
            ImprovementType::Settlement => &self.settlement,
        }
    }

    pub fn cost(&self, kind: ImprovementType) -> &[(ResourceType, u32)] {
        &self.improvement(kind).cost
    }

    pub fn yields(&self, kind: ImprovementType) -> &[(ResourceType, u32)] {
        &self.improvement(kind).yield_per_turn
    }

    pub fn points(&self, kind: ImprovementType) -> u32 {
        self.improvement(kind).points
    }
}
