use std::fmt;

use crate::params::Params;

/// Point score of one player inside the current game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameScore {
    #[default]
    Zero,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
}

impl GameScore {
    /// Next value on the 0/15/30/40 ladder.
    ///
    /// Returns `None` at `Forty` (the top of the ladder) and at `Advantage`,
    /// which is not on the ladder at all.
    pub fn next(self) -> Option<GameScore> {
        let idx = Params::SCORE_LADDER.iter().position(|s| *s == self)?;
        Params::SCORE_LADDER.get(idx + 1).copied()
    }

    pub fn is_ladder(self) -> bool {
        Params::SCORE_LADDER.contains(&self)
    }

    /// Highest value on the ladder
    pub fn top() -> GameScore {
        Params::SCORE_LADDER[Params::SCORE_LADDER.len() - 1]
    }
}

impl fmt::Display for GameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameScore::Zero => "0",
            GameScore::Fifteen => "15",
            GameScore::Thirty => "30",
            GameScore::Forty => "40",
            GameScore::Advantage => "ADV",
        };
        f.write_str(label)
    }
}

/// Player component - one of the two players in a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u8, // 1 = first named, 2 = second named
    pub name: String,
    pub game_score: GameScore,
    pub sets_won: u32, // Games won so far
}

impl Player {
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            game_score: GameScore::Zero,
            sets_won: 0,
        }
    }

    /// Case-insensitive name match
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
