use hecs::World;
use log::debug;

use crate::components::Player;
use crate::config::Config;
use crate::create_player;
use crate::error::ScoringError;
use crate::params::Params;
use crate::resources::{PointOutcome, Scoreboard};
use crate::systems::lookup::{find_opponent, find_player, find_player_by_id, player_snapshot};
use crate::systems::scoring::{apply_point, apply_point_by_id};

/// Scoring engine for one game between two players.
///
/// Players are created once, with ids 1 and 2 in the order the names were
/// given, and live as long as the engine. A won game resets both point scores
/// and the engine keeps scoring the next game.
///
/// The engine is `Send`. Callers sharing one engine across threads must hold
/// a single lock around each `award_point`.
pub struct ScoringEngine {
    world: World,
    config: Config,
    last_outcome: PointOutcome,
}

impl ScoringEngine {
    /// Create an engine with the default config (duplicate names allowed)
    pub fn new(first: &str, second: &str) -> Self {
        Self::spawn(first, second, Config::default())
    }

    pub fn with_config(first: &str, second: &str, config: Config) -> Result<Self, ScoringError> {
        if !config.allow_duplicate_names && first.to_lowercase() == second.to_lowercase() {
            return Err(ScoringError::DuplicatePlayerName {
                name: second.to_string(),
            });
        }
        Ok(Self::spawn(first, second, config))
    }

    fn spawn(first: &str, second: &str, config: Config) -> Self {
        let mut world = World::new();
        create_player(&mut world, Params::FIRST_PLAYER_ID, first);
        create_player(&mut world, Params::SECOND_PLAYER_ID, second);
        debug!("New game: {first} vs {second}");

        Self {
            world,
            config,
            last_outcome: PointOutcome::InPlay,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Award a point to the named player and return the score summary,
    /// e.g. `"0-0, 15-0"`, `"0-0, Deuce"`, `"0-0, Advantage Bob"` or `"1-0"`.
    pub fn award_point(&mut self, name: &str) -> Result<String, ScoringError> {
        self.score_point(name)?;
        self.summary()
    }

    /// Award a point to the named player and return what it did to the game
    pub fn score_point(&mut self, name: &str) -> Result<PointOutcome, ScoringError> {
        let outcome = apply_point(&mut self.world, name)?;
        self.last_outcome = outcome;
        Ok(outcome)
    }

    /// Award a point to the player with the given id (1 or 2).
    ///
    /// Use this when both players may share a name.
    pub fn score_point_for(&mut self, id: u8) -> Result<PointOutcome, ScoringError> {
        let outcome = apply_point_by_id(&mut self.world, id)?;
        self.last_outcome = outcome;
        Ok(outcome)
    }

    /// Outcome of the most recent point (`InPlay` before any point)
    pub fn last_outcome(&self) -> PointOutcome {
        self.last_outcome
    }

    pub fn scoreboard(&self) -> Result<Scoreboard, ScoringError> {
        let first = self.player_by_id(Params::FIRST_PLAYER_ID)?;
        let second = self.player_by_id(Params::SECOND_PLAYER_ID)?;
        Ok(Scoreboard::new(first, second, self.last_outcome))
    }

    pub fn summary(&self) -> Result<String, ScoringError> {
        Ok(self.scoreboard()?.to_string())
    }

    /// Player with the given name (case-insensitive); first player on duplicates
    pub fn resolve(&self, name: &str) -> Option<Player> {
        let entity = find_player(&self.world, name)?;
        player_snapshot(&self.world, entity)
    }

    /// The other player; `None` for a missing or unknown id
    pub fn opponent_of(&self, id: Option<u8>) -> Option<Player> {
        let entity = find_opponent(&self.world, id)?;
        player_snapshot(&self.world, entity)
    }

    /// Both players in construction order
    pub fn players(&self) -> Vec<Player> {
        [Params::FIRST_PLAYER_ID, Params::SECOND_PLAYER_ID]
            .into_iter()
            .filter_map(|id| self.player_by_id(id).ok())
            .collect()
    }

    fn player_by_id(&self, id: u8) -> Result<Player, ScoringError> {
        find_player_by_id(&self.world, id)
            .and_then(|entity| player_snapshot(&self.world, entity))
            .ok_or(ScoringError::MissingPlayer { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::GameScore;

    fn score_many(engine: &mut ScoringEngine, name: &str, points: usize) -> String {
        let mut summary = String::new();
        for _ in 0..points {
            summary = engine.award_point(name).expect("point should apply");
        }
        summary
    }

    #[test]
    fn test_new_engine_assigns_ids_in_order() {
        let engine = ScoringEngine::new("Alice", "Bob");
        let players = engine.players();
        assert_eq!(players.len(), Params::PLAYER_COUNT);
        assert_eq!(players[0].id, 1);
        assert_eq!(players[0].name, "Alice");
        assert_eq!(players[1].id, 2);
        assert_eq!(players[1].name, "Bob");
        assert!(players
            .iter()
            .all(|p| p.game_score == GameScore::Zero && p.sets_won == 0));
    }

    #[test]
    fn test_initial_summary() {
        let engine = ScoringEngine::new("Alice", "Bob");
        assert_eq!(engine.summary(), Ok("0-0, 0-0".to_string()));
    }

    #[test]
    fn test_summary_uses_construction_order() {
        let mut engine = ScoringEngine::new("Alice", "Bob");
        assert_eq!(engine.award_point("Bob"), Ok("0-0, 0-15".to_string()));
        assert_eq!(engine.award_point("bob"), Ok("0-0, 0-30".to_string()));
        assert_eq!(engine.award_point("alice"), Ok("0-0, 15-30".to_string()));
    }

    #[test]
    fn test_four_straight_points_win_the_game() {
        let mut engine = ScoringEngine::new("Alice", "Bob");
        let summary = score_many(&mut engine, "Alice", 4);

        assert_eq!(summary, "1-0");
        assert_eq!(
            engine.last_outcome(),
            PointOutcome::GameWon { winner_id: 1 }
        );
        let alice = engine.resolve("Alice").expect("Alice exists");
        assert_eq!(alice.sets_won, 1);
        assert!(engine
            .players()
            .iter()
            .all(|p| p.game_score == GameScore::Zero));
    }

    #[test]
    fn test_next_game_starts_fresh() {
        let mut engine = ScoringEngine::new("Alice", "Bob");
        score_many(&mut engine, "Alice", 4);
        assert_eq!(engine.award_point("Bob"), Ok("1-0, 0-15".to_string()));
        assert_eq!(engine.last_outcome(), PointOutcome::InPlay);
    }

    #[test]
    fn test_deuce_and_advantage_sequence() {
        let mut engine = ScoringEngine::new("Alice", "Bob");
        score_many(&mut engine, "Alice", 3);
        assert_eq!(score_many(&mut engine, "Bob", 3), "0-0, Deuce");
        assert_eq!(
            engine.award_point("Alice"),
            Ok("0-0, Advantage Alice".to_string())
        );
        assert_eq!(engine.award_point("Bob"), Ok("0-0, Deuce".to_string()));
        assert_eq!(
            engine.award_point("Bob"),
            Ok("0-0, Advantage Bob".to_string())
        );
        assert_eq!(engine.award_point("Bob"), Ok("0-1".to_string()));
    }

    #[test]
    fn test_unknown_player_is_rejected_without_change() {
        let mut engine = ScoringEngine::new("Alice", "Bob");
        engine.award_point("Alice").expect("point should apply");
        let before = engine.players();

        let err = engine.award_point("nobody").unwrap_err();

        assert!(matches!(err, ScoringError::PlayerNotFound { .. }));
        assert_eq!(engine.players(), before);
        assert_eq!(engine.last_outcome(), PointOutcome::InPlay);
    }

    #[test]
    fn test_score_point_for_reaches_second_player_with_shared_name() {
        let mut engine = ScoringEngine::new("Sam", "sam");
        engine.score_point_for(2).expect("point should apply");
        assert_eq!(engine.summary(), Ok("0-0, 0-15".to_string()));

        let err = engine.score_point_for(3).unwrap_err();
        assert_eq!(err, ScoringError::MissingPlayer { id: 3 });
        assert_eq!(engine.summary(), Ok("0-0, 0-15".to_string()));
    }

    #[test]
    fn test_resolve_and_opponent_of() {
        let engine = ScoringEngine::new("Alice", "Bob");
        let alice = engine.resolve("ALICE").expect("Alice exists");
        let bob = engine.opponent_of(Some(alice.id)).expect("Bob exists");
        assert_eq!(bob.name, "Bob");
        assert!(engine.resolve("Carol").is_none());
        assert!(engine.opponent_of(None).is_none());
        assert!(engine.opponent_of(Some(9)).is_none());
    }

    #[test]
    fn test_duplicate_names_allowed_by_default() {
        let mut engine = ScoringEngine::new("Sam", "sam");
        engine.award_point("SAM").expect("point should apply");
        assert_eq!(engine.summary(), Ok("0-0, 15-0".to_string()));
        assert_eq!(engine.resolve("sam").map(|p| p.id), Some(1));
    }

    #[test]
    fn test_strict_config_rejects_duplicate_names() {
        let result = ScoringEngine::with_config("Sam", "SAM", Config::strict());
        assert!(matches!(
            result,
            Err(ScoringError::DuplicatePlayerName { .. })
        ));

        let engine = ScoringEngine::with_config("Sam", "Max", Config::strict())
            .expect("distinct names are fine");
        assert!(!engine.config().allow_duplicate_names);
    }
}
