/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Banner text shown over the final frame.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "You won! Flag reached! R to Restart.",
            Outcome::Lost => "Game Over! No more lives. R to Restart.",
        }
    }
}

/// Session-level state that outlives a single level load: lives and the
/// game-over outcome. Owned by the driver, never by the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    starting_lives: u32,
    lives: u32,
    outcome: Option<Outcome>,
}

impl Session {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            starting_lives,
            lives: starting_lives,
            outcome: None,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Take a life. Returns `true` when lives remain.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }

    pub fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    /// Clear the game-over state (the level is about to be reloaded).
    pub fn resume(&mut self) {
        self.outcome = None;
    }

    /// Back to full lives.
    pub fn refill_lives(&mut self) {
        self.lives = self.starting_lives;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lose_life_reports_remaining() {
        let mut s = Session::new(2);
        assert!(s.lose_life());
        assert!(!s.lose_life());
        assert!(!s.lose_life());
        assert_eq!(s.lives(), 0);
    }

    #[test]
    fn finish_and_resume() {
        let mut s = Session::new(3);
        s.finish(Outcome::Won);
        assert!(s.is_game_over());
        assert_eq!(s.outcome().map(Outcome::message), Some("You won! Flag reached! R to Restart."));
        s.resume();
        assert!(!s.is_game_over());
    }
}
