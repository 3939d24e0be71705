/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A game event emitted by the simulation during a tick.
/// The driver reads these after `Simulation::update` to drive HUD text, sounds, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The avatar's score changed. Carries the new total.
    ScoreChanged { score: i32 },
    /// The avatar touched something lethal this tick.
    AvatarDied,
    /// The avatar touched the victory flag this tick.
    FlagReached,
}
