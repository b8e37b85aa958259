//! Territory definitions and starting deployment for the world map.
//!
//! All 10 territories are enumerated in fixed board order. Territory
//! metadata (display name, starting side, starting troops) is stored in a
//! compile-time lookup table indexed by the `TerritoryId` enum discriminant.

/// The number of territories on the map.
pub const TERRITORY_COUNT: usize = 10;

/// One of the two armies contesting the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    /// Returns the display name of this side.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Blue => "Blue",
            Side::Red => "Red",
        }
    }

    /// Returns the opposing side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

/// A territory on the map.
///
/// Variants are in fixed board order. The `#[repr(u8)]` attribute enables
/// use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TerritoryId {
    Brazil = 0,
    Argentina = 1,
    Chile = 2,
    Peru = 3,
    Colombia = 4,
    Spain = 5,
    France = 6,
    Germany = 7,
    Italy = 8,
    England = 9,
}

/// All territory variants in index order.
pub const ALL_TERRITORIES: [TerritoryId; TERRITORY_COUNT] = [
    TerritoryId::Brazil,
    TerritoryId::Argentina,
    TerritoryId::Chile,
    TerritoryId::Peru,
    TerritoryId::Colombia,
    TerritoryId::Spain,
    TerritoryId::France,
    TerritoryId::Germany,
    TerritoryId::Italy,
    TerritoryId::England,
];

impl TerritoryId {
    /// Returns the full display name for this territory.
    pub const fn name(self) -> &'static str {
        TERRITORY_INFO[self as usize].name
    }

    /// Returns the side holding this territory at game start.
    pub const fn initial_side(self) -> Side {
        TERRITORY_INFO[self as usize].initial_side
    }

    /// Returns the garrison size of this territory at game start.
    pub const fn initial_troops(self) -> u32 {
        TERRITORY_INFO[self as usize].initial_troops
    }

    /// Looks up a territory by its 0-based board index.
    pub fn from_index(index: usize) -> Option<TerritoryId> {
        ALL_TERRITORIES.get(index).copied()
    }
}

/// Static metadata for a territory.
pub struct TerritoryInfo {
    pub name: &'static str,
    pub initial_side: Side,
    pub initial_troops: u32,
}

/// Compile-time lookup table: index by `TerritoryId as usize`.
pub static TERRITORY_INFO: [TerritoryInfo; TERRITORY_COUNT] = [
    // 0: Brazil
    TerritoryInfo { name: "Brazil", initial_side: Side::Blue, initial_troops: 3 },
    // 1: Argentina
    TerritoryInfo { name: "Argentina", initial_side: Side::Blue, initial_troops: 2 },
    // 2: Chile
    TerritoryInfo { name: "Chile", initial_side: Side::Blue, initial_troops: 1 },
    // 3: Peru
    TerritoryInfo { name: "Peru", initial_side: Side::Blue, initial_troops: 2 },
    // 4: Colombia
    TerritoryInfo { name: "Colombia", initial_side: Side::Blue, initial_troops: 2 },
    // 5: Spain
    TerritoryInfo { name: "Spain", initial_side: Side::Red, initial_troops: 3 },
    // 6: France
    TerritoryInfo { name: "France", initial_side: Side::Red, initial_troops: 2 },
    // 7: Germany
    TerritoryInfo { name: "Germany", initial_side: Side::Red, initial_troops: 3 },
    // 8: Italy
    TerritoryInfo { name: "Italy", initial_side: Side::Red, initial_troops: 1 },
    // 9: England
    TerritoryInfo { name: "England", initial_side: Side::Red, initial_troops: 2 },
];
