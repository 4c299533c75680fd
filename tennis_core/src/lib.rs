pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;

/// Helper to create a player entity
pub fn create_player(world: &mut World, id: u8, name: &str) -> hecs::Entity {
    world.spawn((Player::new(id, name),))
}
