use hecs::{Entity, World};
use log::{debug, info, warn};

use crate::components::{GameScore, Player};
use crate::error::ScoringError;
use crate::params::Params;
use crate::resources::PointOutcome;
use crate::systems::lookup::{find_opponent, find_player, find_player_by_id, player_snapshot};

/// State change produced by one point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Scorer takes the game
    GameWon,
    /// Scorer goes from 40 to advantage
    Advantage,
    /// Opponent loses advantage, both back to 40
    Deuce,
    /// Scorer climbs the ladder
    Advance(GameScore),
}

/// Decide what a point won from `current` against `opponent` does.
///
/// Rules are checked in priority order: win from advantage, win from 40,
/// move to advantage, back to deuce, then a plain advance.
pub fn evaluate(current: GameScore, opponent: GameScore) -> Result<Transition, ScoringError> {
    let top = GameScore::top();

    if current == GameScore::Advantage && opponent.is_ladder() {
        return Ok(Transition::GameWon);
    }
    if current == top && opponent.is_ladder() && opponent != top {
        return Ok(Transition::GameWon);
    }
    if current == top && opponent == top {
        return Ok(Transition::Advantage);
    }
    if current == top && opponent == GameScore::Advantage {
        return Ok(Transition::Deuce);
    }

    current
        .next()
        .map(Transition::Advance)
        .ok_or(ScoringError::InvalidScoreState { current, opponent })
}

/// Award one point to the named player.
///
/// Nothing is written until the transition has been worked out, so an error
/// leaves both players untouched.
pub fn apply_point(world: &mut World, name: &str) -> Result<PointOutcome, ScoringError> {
    let not_found = || ScoringError::PlayerNotFound {
        name: name.to_string(),
    };

    let Some(scorer_entity) = find_player(world, name) else {
        warn!("Point for unknown player {name:?} rejected");
        return Err(not_found());
    };
    let scorer = player_snapshot(world, scorer_entity).ok_or_else(not_found)?;

    award(world, scorer_entity, scorer)
}

/// Award one point to the player with the given id.
///
/// Unlike [`apply_point`] this never confuses two players sharing a name.
pub fn apply_point_by_id(world: &mut World, id: u8) -> Result<PointOutcome, ScoringError> {
    let missing = || ScoringError::MissingPlayer { id };

    let Some(scorer_entity) = find_player_by_id(world, id) else {
        warn!("Point for unknown player id {id} rejected");
        return Err(missing());
    };
    let scorer = player_snapshot(world, scorer_entity).ok_or_else(missing)?;

    award(world, scorer_entity, scorer)
}

/// Id of the other player in a two-player game
fn opponent_id(id: u8) -> u8 {
    if id == Params::FIRST_PLAYER_ID {
        Params::SECOND_PLAYER_ID
    } else {
        Params::FIRST_PLAYER_ID
    }
}

fn award(
    world: &mut World,
    scorer_entity: Entity,
    scorer: Player,
) -> Result<PointOutcome, ScoringError> {
    let missing_opponent = || ScoringError::MissingPlayer {
        id: opponent_id(scorer.id),
    };
    let opponent_entity = find_opponent(world, Some(scorer.id)).ok_or_else(missing_opponent)?;
    let opponent = player_snapshot(world, opponent_entity).ok_or_else(missing_opponent)?;

    let transition = evaluate(scorer.game_score, opponent.game_score).inspect_err(|e| {
        warn!("Point for {} rejected: {e}", scorer.name);
    })?;

    debug!(
        "{} scores at {}-{}: {:?}",
        scorer.name, scorer.game_score, opponent.game_score, transition
    );

    let outcome = match transition {
        Transition::GameWon => {
            update(world, scorer_entity, |p| {
                p.sets_won += 1;
                p.game_score = GameScore::Zero;
            });
            update(world, opponent_entity, |p| p.game_score = GameScore::Zero);
            info!(
                "{} wins the game ({} games won)",
                scorer.name,
                scorer.sets_won + 1
            );
            PointOutcome::GameWon {
                winner_id: scorer.id,
            }
        }
        Transition::Advantage => {
            update(world, scorer_entity, |p| p.game_score = GameScore::Advantage);
            PointOutcome::Advantage {
                player_id: scorer.id,
            }
        }
        Transition::Deuce => {
            let top = GameScore::top();
            update(world, scorer_entity, |p| p.game_score = top);
            update(world, opponent_entity, |p| p.game_score = top);
            PointOutcome::Deuce
        }
        Transition::Advance(next) => {
            update(world, scorer_entity, |p| p.game_score = next);
            if next == GameScore::top() && opponent.game_score == GameScore::top() {
                PointOutcome::Deuce
            } else {
                PointOutcome::InPlay
            }
        }
    };

    Ok(outcome)
}

fn update(world: &mut World, entity: Entity, f: impl FnOnce(&mut Player)) {
    match world.query_one_mut::<&mut Player>(entity) {
        Ok(player) => f(player),
        Err(e) => warn!("Score write skipped, {entity:?} has no player: {e}"),
    }
}
