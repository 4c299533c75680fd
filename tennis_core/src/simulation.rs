//! Random rallies for demos and soak tests

use log::debug;
use rand::Rng;

use crate::engine::ScoringEngine;
use crate::error::ScoringError;
use crate::params::Params;
use crate::resources::GameRng;

/// Play `points` random rallies on the engine.
///
/// Each rally goes to the first player with probability
/// `first_player_win_chance` (clamped into 0..=1, NaN counts as an even
/// rally). Returns the summary after every point.
pub fn simulate_points(
    engine: &mut ScoringEngine,
    rng: &mut GameRng,
    points: usize,
    first_player_win_chance: f64,
) -> Result<Vec<String>, ScoringError> {
    let chance = if first_player_win_chance.is_nan() {
        0.5
    } else {
        first_player_win_chance.clamp(0.0, 1.0)
    };

    let mut summaries = Vec::with_capacity(points);
    for _ in 0..points {
        // By id, so two players sharing a name still each win rallies
        let winner = if rng.0.gen_bool(chance) {
            Params::FIRST_PLAYER_ID
        } else {
            Params::SECOND_PLAYER_ID
        };
        engine.score_point_for(winner)?;
        summaries.push(engine.summary()?);
    }

    debug!("Simulated {points} points: {}", engine.summary()?);
    Ok(summaries)
}
