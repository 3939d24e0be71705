use serde::{Deserialize, Serialize};

use crate::api::types::GameEvent;
use crate::components::avatar::Avatar;
use crate::components::entity::{Entity, Spawn};
use crate::core::scene::Scene;
use crate::input::queue::Command;
use crate::systems::movement::step_avatar;

/// Tuning for the simulation. Every field falls back to its default when
/// missing from a JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed tick length in milliseconds (default: 20).
    pub tick_ms: f32,
    /// Level width in pixels. Horizontal moves keep the avatar inside it.
    pub level_width: i32,
    /// Level height in pixels.
    pub level_height: i32,
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Velocity change applied by a jump in px/s. Negative is up.
    pub jump_force: f32,
    /// Horizontal distance covered per tick while a direction is held.
    pub move_rate: i32,
    /// Lives at the start of a session.
    pub starting_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: 20.0,
            level_width: 800,
            level_height: 600,
            gravity: 200.0,
            jump_force: -100.0,
            move_rate: 5,
            starting_lives: 3,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The simulation core: one level's entities plus the tuning they run under.
/// The driver calls `update` once per fixed tick.
pub struct Simulation {
    pub scene: Scene,
    config: GameConfig,
    events: Vec<GameEvent>,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            config,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Clear the scene and install a fresh entity set.
    pub fn reset(&mut self, spawns: impl IntoIterator<Item = Spawn>) {
        self.scene.clear();
        self.events.clear();
        for spawn in spawns {
            self.scene.add(spawn);
        }
        if self.scene.avatar().is_none() {
            log::warn!("Simulation: level has no avatar ({} entities)", self.scene.len());
        }
    }

    /// Forward a command to the avatar. Ignored when there is none.
    pub fn handle_input(&mut self, command: Command, pressed: bool) {
        if let Some(avatar) = self.scene.avatar_mut() {
            avatar.handle_input(command, pressed);
        }
    }

    /// Advance one tick of `delta_ms` milliseconds. Events from the previous
    /// tick are discarded first.
    pub fn update(&mut self, delta_ms: f32) {
        self.events.clear();
        let Scene { entities, avatar, .. } = &mut self.scene;
        let Some(avatar) = avatar.as_mut() else {
            return;
        };

        let (score, dead, reached) = (avatar.score(), avatar.is_dead(), avatar.has_reached_flag());
        step_avatar(avatar, entities, &self.config, delta_ms);

        if avatar.score() != score {
            self.events.push(GameEvent::ScoreChanged { score: avatar.score() });
        }
        if avatar.is_dead() && !dead {
            self.events.push(GameEvent::AvatarDied);
        }
        if avatar.has_reached_flag() && !reached {
            self.events.push(GameEvent::FlagReached);
        }
    }

    /// Events produced by the most recent `update`.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn avatar(&self) -> Option<&Avatar> {
        self.scene.avatar()
    }

    /// Static entities, for rendering.
    pub fn entities(&self) -> &[Entity] {
        self.scene.entities()
    }

    pub fn is_avatar_dead(&self) -> bool {
        self.avatar().is_some_and(Avatar::is_dead)
    }

    pub fn has_reached_flag(&self) -> bool {
        self.avatar().is_some_and(Avatar::has_reached_flag)
    }

    pub fn score(&self) -> i32 {
        self.avatar().map_or(0, Avatar::score)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
