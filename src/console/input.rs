//! Menu input parser.
//!
//! Parses raw lines from the player into structured choices that the game
//! loop can dispatch on. Parsing is silent; the loop prints the retry
//! messages so they land next to the prompts.

use crate::board::TerritoryId;

/// A parsed main-menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Launch an attack (menu option 1).
    Attack,
    /// Check whether the mission is complete (menu option 2).
    CheckVictory,
    /// Leave the game (menu option 0).
    Quit,
}

/// Parses a single line of input into a `MenuChoice`.
///
/// Returns `None` for anything that is not exactly one of the menu codes
/// after trimming whitespace.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Attack),
        "2" => Some(MenuChoice::CheckVictory),
        "0" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Parses a single line of input into a territory.
///
/// The player addresses territories by the 1-based numbers shown on the
/// map; anything non-numeric or outside 1..=10 returns `None`.
pub fn parse_territory_choice(line: &str) -> Option<TerritoryId> {
    let number: usize = line.trim().parse().ok()?;
    TerritoryId::from_index(number.checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_attack_choice() {
        assert_eq!(parse_menu_choice("1"), Some(MenuChoice::Attack));
    }

    #[test]
    fn parse_check_victory_choice() {
        assert_eq!(parse_menu_choice("2"), Some(MenuChoice::CheckVictory));
    }

    #[test]
    fn parse_quit_choice() {
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Quit));
    }

    #[test]
    fn parse_choice_with_surrounding_whitespace() {
        assert_eq!(parse_menu_choice("  1  \n"), Some(MenuChoice::Attack));
        assert_eq!(parse_menu_choice("\t0\n"), Some(MenuChoice::Quit));
    }

    #[test]
    fn parse_unknown_choice_returns_none() {
        assert_eq!(parse_menu_choice("3"), None);
        assert_eq!(parse_menu_choice("9"), None);
        assert_eq!(parse_menu_choice("attack"), None);
        assert_eq!(parse_menu_choice(""), None);
        assert_eq!(parse_menu_choice("  "), None);
        assert_eq!(parse_menu_choice("1 2"), None);
    }

    #[test]
    fn parse_territory_by_map_number() {
        assert_eq!(parse_territory_choice("1"), Some(TerritoryId::Brazil));
        assert_eq!(parse_territory_choice("6"), Some(TerritoryId::Spain));
        assert_eq!(parse_territory_choice("10"), Some(TerritoryId::England));
    }

    #[test]
    fn parse_territory_with_surrounding_whitespace() {
        assert_eq!(parse_territory_choice(" 7 \n"), Some(TerritoryId::France));
    }

    #[test]
    fn parse_territory_out_of_range_returns_none() {
        assert_eq!(parse_territory_choice("0"), None);
        assert_eq!(parse_territory_choice("11"), None);
        assert_eq!(parse_territory_choice("100"), None);
    }

    #[test]
    fn parse_territory_malformed_returns_none() {
        assert_eq!(parse_territory_choice(""), None);
        assert_eq!(parse_territory_choice("brazil"), None);
        assert_eq!(parse_territory_choice("-3"), None);
        assert_eq!(parse_territory_choice("1.5"), None);
    }
}
