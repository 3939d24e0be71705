use platformer_engine::{
    parse_level, FixedTimestep, GameConfig, InputEvent, InputQueue, LevelResult, Simulation,
};

use crate::session::{Outcome, Session};
use crate::source::LevelSource;

/// Drives the simulation loop for one player session.
///
/// Owns the level source, the input queue, the fixed timestep and the
/// session state (lives, game over). The platform layer pushes input and
/// calls `tick` once per frame.
pub struct GameRunner<S: LevelSource> {
    source: S,
    sim: Simulation,
    input: InputQueue,
    timestep: FixedTimestep,
    session: Session,
    initialized: bool,
}

impl<S: LevelSource> GameRunner<S> {
    pub fn new(source: S, config: GameConfig) -> Self {
        let timestep = FixedTimestep::new(config.tick_ms);
        let session = Session::new(config.starting_lives);
        Self {
            source,
            sim: Simulation::new(config),
            input: InputQueue::new(),
            timestep,
            session,
            initialized: false,
        }
    }

    /// Load the level and begin the session. Call once after construction.
    pub fn start(&mut self) -> LevelResult<()> {
        self.initialized = true;
        self.session.refill_lives();
        self.restart()
    }

    /// Push an input event into the queue. Applied at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, then as many fixed ticks as the
    /// elapsed frame time allows.
    pub fn tick(&mut self, frame_ms: f32) {
        if !self.initialized {
            return;
        }

        for event in self.input.drain() {
            self.apply_input(event);
        }

        let steps = self.timestep.accumulate(frame_ms);
        for _ in 0..steps {
            self.step();
        }
    }

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Restart => {
                self.session.refill_lives();
                if let Err(err) = self.restart() {
                    // Scene stays empty until the next restart
                    log::debug!("Runner: restart left an empty scene: {}", err);
                }
            }
            InputEvent::Command { command, pressed } => {
                if !self.session.is_game_over() {
                    self.sim.handle_input(command, pressed);
                }
            }
        }
    }

    /// One fixed tick, then the session rules: death costs a life and
    /// restarts the level, running out of lives or reaching the flag ends the game.
    fn step(&mut self) {
        if self.session.is_game_over() {
            return;
        }

        self.sim.update(self.timestep.dt());

        if self.sim.is_avatar_dead() {
            if self.session.lose_life() {
                log::info!("Runner: avatar died, {} lives left", self.session.lives());
                if let Err(err) = self.restart() {
                    log::debug!("Runner: respawn left an empty scene: {}", err);
                }
            } else {
                self.finish(Outcome::Lost);
            }
        } else if self.sim.has_reached_flag() {
            self.finish(Outcome::Won);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!("Runner: {} (score {})", outcome.message(), self.sim.score());
        self.session.finish(outcome);
    }

    /// Clear game over and reload the level from the source. When the source
    /// is unavailable the scene is left empty and the error returned.
    pub fn restart(&mut self) -> LevelResult<()> {
        self.session.resume();
        self.timestep.reset();

        let text = match self.source.load() {
            Ok(text) => text,
            Err(err) => {
                log::error!("Runner: failed to load level: {}", err);
                self.sim.reset(Vec::new());
                return Err(err);
            }
        };

        let load = parse_level(&text);
        log::info!(
            "Runner: loaded `{}` ({} entities, {} rejected lines)",
            self.source.name(),
            load.spawns.len(),
            load.errors.len()
        );
        self.sim.reset(load.spawns);
        Ok(())
    }

    // ---- Read accessors ----

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn lives(&self) -> u32 {
        self.session.lives()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }
}
