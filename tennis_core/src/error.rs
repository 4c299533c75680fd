use thiserror::Error;

use crate::components::GameScore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("No player named {name:?} in this game")]
    PlayerNotFound { name: String },

    #[error("Cannot score a point from {current} against {opponent}")]
    InvalidScoreState {
        current: GameScore,
        opponent: GameScore,
    },

    #[error("Both players are named {name:?}")]
    DuplicatePlayerName { name: String },

    #[error("No player with id {id} in this game")]
    MissingPlayer { id: u8 },
}
