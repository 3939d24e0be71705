pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{GameConfig, Simulation};
pub use api::types::{EntityId, GameEvent};
pub use components::avatar::{Avatar, AVATAR_SIZE};
pub use components::entity::{Entity, EntityKind, Spawn, COLLECTIBLE_SIZE, VICTORY_FLAG_SIZE};
pub use components::trigger::{Collectible, Spikes, Trigger, VictoryFlag, COLLECTIBLE_BONUS};
pub use crate::core::collision::Aabb;
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use input::queue::{Command, InputEvent, InputQueue};
pub use assets::level::{parse_level, parse_line, LevelLoad};
pub use error::{DescriptorError, LevelError, LevelResult, LineError};
pub use systems::movement::step_avatar;
