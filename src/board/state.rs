//! Board state representation.
//!
//! Holds the mutable snapshot of a game: which side holds each territory
//! and with how many troops. Names and board order are static metadata and
//! live in the territory table.

use super::territory::{Side, TerritoryId, ALL_TERRITORIES, TERRITORY_COUNT};

/// The mutable state of a single territory: holder and garrison size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Garrison {
    pub side: Side,
    pub troops: u32,
}

/// Complete board state at a point in time.
///
/// Uses a fixed-size array indexed by `TerritoryId as usize` for O(1)
/// lookup. This avoids heap allocation and makes the state trivially
/// copyable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Garrison at each territory, in board order.
    pub garrisons: [Garrison; TERRITORY_COUNT],
}

impl Board {
    /// Creates the board in its starting deployment.
    pub fn start() -> Self {
        let mut garrisons = [Garrison { side: Side::Blue, troops: 0 }; TERRITORY_COUNT];
        for t in ALL_TERRITORIES {
            garrisons[t as usize] = Garrison {
                side: t.initial_side(),
                troops: t.initial_troops(),
            };
        }
        Board { garrisons }
    }

    /// Returns a copy of the garrison at a territory.
    pub fn garrison(&self, territory: TerritoryId) -> Garrison {
        self.garrisons[territory as usize]
    }

    /// Returns the side currently holding a territory.
    pub fn side(&self, territory: TerritoryId) -> Side {
        self.garrisons[territory as usize].side
    }

    /// Returns the troop count currently garrisoned at a territory.
    pub fn troops(&self, territory: TerritoryId) -> u32 {
        self.garrisons[territory as usize].troops
    }
}
