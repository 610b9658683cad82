// Game session lifecycle: registration, ballots, voting open/close.

pub mod game;
pub mod snapshot;
pub mod state;
