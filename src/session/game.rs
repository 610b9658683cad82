// Supported game titles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Games a voting session can be held for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    #[serde(rename = "valorant")]
    Valorant,
    #[serde(rename = "lol")]
    LeagueOfLegends,
}

impl Game {
    /// Parse a game name as it appears in snapshots and admin input.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "valorant" => Some(Game::Valorant),
            "lol" | "league" | "league of legends" => Some(Game::LeagueOfLegends),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Game::Valorant => write!(f, "Valorant"),
            Game::LeagueOfLegends => write!(f, "League of Legends"),
        }
    }
}
