// Session lifecycle: player registration, ballot collection, voting close.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::game::Game;
use crate::balance::scoring::{score_roster, RatingSheet};
use crate::balance::{balance, TeamPartition};
use crate::config::Config;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("player name cannot be empty")]
    EmptyPlayerName,

    #[error("voter name cannot be empty")]
    EmptyVoterName,

    #[error("player `{name}` is already registered")]
    DuplicatePlayer { name: String },

    #[error("roster already holds {capacity} players")]
    RosterFull { capacity: usize },

    #[error("no player named `{name}` is registered")]
    UnknownPlayer { name: String },

    #[error("the roster cannot change while voting is open")]
    RosterLocked,

    #[error("voting is already open")]
    VotingAlreadyOpen,

    #[error("voting is not open")]
    VotingNotOpen,

    #[error("voting requires a full roster ({have} of {need} players registered)")]
    RosterIncomplete { have: usize, need: usize },

    #[error("rating {value} for `{player}` is outside the {min}-{max} scale")]
    RatingOutOfRange {
        player: String,
        value: u8,
        min: u8,
        max: u8,
    },
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// The outcome of a closed voting round, retained until the next close or a
/// reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub partition: TeamPartition,
    pub closed_at: DateTime<Utc>,
}

/// One game's registration and voting state.
///
/// All transitions are synchronous method calls on an explicit value; there
/// is no shared ambient state. Callers serialize access.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    config: Config,
    /// Registered players in registration order. Names are stored as given
    /// (trimmed) and treated as case-insensitive identifiers.
    players: Vec<String>,
    /// One rating sheet per voter, keyed by voter name. Re-submitting
    /// replaces the voter's previous sheet.
    ballots: BTreeMap<String, RatingSheet>,
    voting_open: bool,
    result: Option<SessionResult>,
}

impl GameSession {
    pub fn new(game: Game, config: &Config) -> Self {
        GameSession {
            game,
            config: config.clone(),
            players: Vec::new(),
            ballots: BTreeMap::new(),
            voting_open: false,
            result: None,
        }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn ballot_count(&self) -> usize {
        self.ballots.len()
    }

    pub fn voting_open(&self) -> bool {
        self.voting_open
    }

    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    /// Register a player. Names are unique case-insensitively and the
    /// roster is capped at the configured size; the roster is frozen while
    /// voting is open.
    pub fn register_player(&mut self, name: &str) -> Result<(), SessionError> {
        if self.voting_open {
            return Err(SessionError::RosterLocked);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }
        let capacity = self.config.session.roster_size;
        if self.players.len() >= capacity {
            return Err(SessionError::RosterFull { capacity });
        }
        if self.find_player(name).is_some() {
            return Err(SessionError::DuplicatePlayer {
                name: name.to_string(),
            });
        }

        self.players.push(name.to_string());
        info!(
            game = %self.game,
            player = name,
            registered = self.players.len(),
            "player registered"
        );
        Ok(())
    }

    /// Remove a registered player (case-insensitive lookup).
    pub fn remove_player(&mut self, name: &str) -> Result<(), SessionError> {
        if self.voting_open {
            return Err(SessionError::RosterLocked);
        }
        let folded = name.trim().to_lowercase();
        match self.players.iter().position(|p| p.to_lowercase() == folded) {
            Some(idx) => {
                let removed = self.players.remove(idx);
                info!(
                    game = %self.game,
                    player = %removed,
                    remaining = self.players.len(),
                    "player removed"
                );
                Ok(())
            }
            None => Err(SessionError::UnknownPlayer {
                name: name.trim().to_string(),
            }),
        }
    }

    /// Open voting. Requires the roster to be exactly full; any ballots
    /// from a previous round are discarded.
    pub fn open_voting(&mut self) -> Result<(), SessionError> {
        if self.voting_open {
            return Err(SessionError::VotingAlreadyOpen);
        }
        let need = self.config.session.roster_size;
        if self.players.len() != need {
            return Err(SessionError::RosterIncomplete {
                have: self.players.len(),
                need,
            });
        }

        self.ballots.clear();
        self.voting_open = true;
        info!(game = %self.game, players = need, "voting opened");
        Ok(())
    }

    /// Record a voter's rating sheet, replacing any sheet the voter
    /// submitted earlier this round.
    ///
    /// Every rated name must resolve (case-insensitively) to a registered
    /// player and every rating must lie within the configured scale; the
    /// sheet is stored under the players' registered spellings.
    pub fn submit_ballot(
        &mut self,
        voter: &str,
        ratings: &RatingSheet,
    ) -> Result<(), SessionError> {
        if !self.voting_open {
            return Err(SessionError::VotingNotOpen);
        }
        let voter = voter.trim();
        if voter.is_empty() {
            return Err(SessionError::EmptyVoterName);
        }

        let scale = &self.config.ratings;
        let mut sheet = RatingSheet::new();
        for (name, &value) in ratings {
            let Some(canonical) = self.find_player(name) else {
                return Err(SessionError::UnknownPlayer { name: name.clone() });
            };
            if value < scale.min || value > scale.max {
                return Err(SessionError::RatingOutOfRange {
                    player: canonical.to_string(),
                    value,
                    min: scale.min,
                    max: scale.max,
                });
            }
            sheet.insert(canonical.to_string(), value);
        }

        let rated = sheet.len();
        self.ballots.insert(voter.to_string(), sheet);
        info!(game = %self.game, voter, rated, "ballot recorded");
        Ok(())
    }

    /// Close voting: score the roster from the collected ballots, balance
    /// it into two teams, and retain the result until the next close or a
    /// reset.
    pub fn close_voting(&mut self) -> Result<SessionResult, SessionError> {
        if !self.voting_open {
            return Err(SessionError::VotingNotOpen);
        }

        let sheets: Vec<&RatingSheet> = self.ballots.values().collect();
        let mut scored = score_roster(&self.players, &sheets, self.config.ratings.default_score);
        // Highest-rated first; the stable sort keeps registration order
        // between equal scores, so the close is deterministic.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let partition = balance(&scored);
        let result = SessionResult {
            partition,
            closed_at: Utc::now(),
        };
        info!(
            game = %self.game,
            ballots = self.ballots.len(),
            first_avg = result.partition.teams[0].average_score,
            second_avg = result.partition.teams[1].average_score,
            "voting closed, teams computed"
        );

        self.voting_open = false;
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Clear players, ballots, the voting flag, and any retained result.
    pub fn reset(&mut self) {
        self.players.clear();
        self.ballots.clear();
        self.voting_open = false;
        self.result = None;
        info!(game = %self.game, "session reset");
    }

    /// Registered spelling of a player, looked up case-insensitively.
    fn find_player(&self, name: &str) -> Option<&str> {
        let folded = name.trim().to_lowercase();
        self.players
            .iter()
            .find(|p| p.to_lowercase() == folded)
            .map(String::as_str)
    }
}
