//! Console surface.
//!
//! This module implements the line-oriented player interface: parsing menu
//! and territory input, and rendering the map, menus, prompts, and battle
//! reports the game loop writes to stdout.

pub mod display;
pub mod input;

pub use input::{parse_menu_choice, parse_territory_choice, MenuChoice};
