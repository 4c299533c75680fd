use hecs::{Entity, World};

use crate::components::Player;

/// Find the player entity with the given name (case-insensitive).
///
/// With duplicate names the player with the lowest id wins, so the result
/// follows construction order rather than ECS storage order.
pub fn find_player(world: &World, name: &str) -> Option<Entity> {
    let mut query = world.query::<&Player>();
    let found = query
        .iter()
        .filter(|(_, player)| player.is_named(name))
        .min_by_key(|(_, player)| player.id)
        .map(|(entity, _)| entity);
    found
}

/// Find the entity of the player with the given id
pub fn find_player_by_id(world: &World, id: u8) -> Option<Entity> {
    let mut query = world.query::<&Player>();
    let found = query
        .iter()
        .find(|(_, player)| player.id == id)
        .map(|(entity, _)| entity);
    found
}

/// Find the opponent of the player with the given id.
///
/// Returns `None` when no id is given or the id belongs to neither player.
pub fn find_opponent(world: &World, id: Option<u8>) -> Option<Entity> {
    let id = id?;
    find_player_by_id(world, id)?;

    let mut query = world.query::<&Player>();
    let found = query
        .iter()
        .filter(|(_, player)| player.id != id)
        .min_by_key(|(_, player)| player.id)
        .map(|(entity, _)| entity);
    found
}

/// Copy of the player component on an entity
pub fn player_snapshot(world: &World, entity: Entity) -> Option<Player> {
    world
        .get::<&Player>(entity)
        .ok()
        .map(|player| (*player).clone())
}
