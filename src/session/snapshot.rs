// Session snapshot: the JSON input shape consumed by the CLI.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::game::Game;
use super::state::{GameSession, SessionError};
use crate::balance::scoring::RatingSheet;
use crate::config::Config;

/// A session's input state as captured by the surrounding system: the
/// registered players plus every voter's rating sheet.
///
/// ```json
/// {
///   "game": "valorant",
///   "players": ["ana", "bia"],
///   "ballots": { "caio": { "ana": 7, "bia": 4 } }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSnapshot {
    pub game: Game,
    pub players: Vec<String>,
    #[serde(default)]
    pub ballots: BTreeMap<String, RatingSheet>,
}

impl SessionSnapshot {
    /// Replay the snapshot through a fresh session, leaving it open and
    /// ready for [`GameSession::close_voting`].
    ///
    /// Every registration and ballot passes through the normal validation,
    /// so a malformed snapshot surfaces the same errors live input would.
    pub fn into_session(self, config: &Config) -> Result<GameSession, SessionError> {
        let mut session = GameSession::new(self.game, config);
        for name in &self.players {
            session.register_player(name)?;
        }
        session.open_voting()?;
        for (voter, sheet) in &self.ballots {
            session.submit_ballot(voter, sheet)?;
        }
        Ok(session)
    }
}
