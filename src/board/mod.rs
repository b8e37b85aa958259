//! Board representation and game-state types.
//!
//! Contains the core data structures for territories, sides, and the
//! overall board state.

pub mod state;
pub mod territory;

pub use state::{Board, Garrison};
pub use territory::{
    Side, TerritoryId, TerritoryInfo, ALL_TERRITORIES, TERRITORY_COUNT, TERRITORY_INFO,
};
