use crate::components::GameScore;

/// Scoring constants for a single tennis game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Points, in the order a player climbs them
    pub const SCORE_LADDER: [GameScore; 4] = [
        GameScore::Zero,
        GameScore::Fifteen,
        GameScore::Thirty,
        GameScore::Forty,
    ];

    // Players
    pub const PLAYER_COUNT: usize = 2;
    pub const FIRST_PLAYER_ID: u8 = 1;
    pub const SECOND_PLAYER_ID: u8 = 2;

    // Names
    pub const ALLOW_DUPLICATE_NAMES: bool = true;
}
