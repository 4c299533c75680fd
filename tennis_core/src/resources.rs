use std::fmt;

use crate::components::Player;

/// What a single awarded point did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// The scorer won the game; both scores are back at 0
    GameWon { winner_id: u8 },
    /// The scorer now holds advantage
    Advantage { player_id: u8 },
    /// Both players are at 40
    Deuce,
    /// Ordinary point, game continues
    InPlay,
}

impl PointOutcome {
    pub fn is_game_won(&self) -> bool {
        matches!(self, PointOutcome::GameWon { .. })
    }
}

/// Snapshot of both players after a point, in construction order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub first: Player,
    pub second: Player,
    pub outcome: PointOutcome,
}

impl Scoreboard {
    pub fn new(first: Player, second: Player, outcome: PointOutcome) -> Self {
        Self {
            first,
            second,
            outcome,
        }
    }

    /// Running set score, e.g. "1-0"
    pub fn set_score(&self) -> String {
        format!("{}-{}", self.first.sets_won, self.second.sets_won)
    }

    fn name_of(&self, player_id: u8) -> &str {
        if self.first.id == player_id {
            &self.first.name
        } else {
            &self.second.name
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set_score())?;
        match self.outcome {
            PointOutcome::GameWon { .. } => Ok(()),
            PointOutcome::Advantage { player_id } => {
                write!(f, ", Advantage {}", self.name_of(player_id))
            }
            PointOutcome::Deuce => write!(f, ", Deuce"),
            PointOutcome::InPlay => write!(
                f,
                ", {}-{}",
                self.first.game_score, self.second.game_score
            ),
        }
    }
}

/// Random number generator for simulated rallies
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
