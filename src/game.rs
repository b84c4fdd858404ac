use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::border::Bounds;
use crate::config::GameConfig;
use crate::food::AppleField;
use crate::geometry::Direction;
use crate::snake::{Snake, TurnOutcome};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameOverReason {
    LeftField,
    SelfCollision,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    Running,
    Stopped(GameOverReason),
}

/// Everything that may change game state. Input and the timer both go
/// through [`Game::handle`], so they are applied strictly in arrival order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Turn(Direction),
    Tick,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// The snake moved and the frame should be redrawn.
    Advanced { eaten: u32 },
    /// This tick ended the game.
    Ended(GameOverReason),
    /// The game was already stopped; nothing happened.
    Idle,
}

/// Score display and game-over notification.
pub trait Reporter {
    fn score_changed(&mut self, score: u32);
    /// Called exactly once per game.
    fn game_over(&mut self, reason: GameOverReason, score: u32);
}

impl Reporter for () {
    fn score_changed(&mut self, _score: u32) {}
    fn game_over(&mut self, _reason: GameOverReason, _score: u32) {}
}

pub struct Game {
    snake: Snake,
    apples: AppleField,
    bounds: Bounds,
    capture_radius: f32,
    score: u32,
    status: Status,
    rng: StdRng,
}

impl Game {
    /// Seeds from `config.seed` when set, otherwise from OS entropy.
    pub fn new(config: &GameConfig) -> Game {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game::with_rng(config, rng)
    }

    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Game {
        Game {
            snake: Snake::new(
                config.initial_head,
                config.initial_tail,
                config.initial_direction,
                config.motion(),
            ),
            apples: AppleField::new(config.apple_cap, config.spawn_inset),
            bounds: config.bounds(),
            capture_radius: config.capture_radius,
            score: 0,
            status: Status::Running,
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apples(&self) -> &AppleField {
        &self.apples
    }

    pub fn apples_mut(&mut self) -> &mut AppleField {
        &mut self.apples
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn handle(&mut self, command: Command, reporter: &mut dyn Reporter) -> Status {
        match command {
            Command::Turn(dir) => {
                self.turn(dir);
            }
            Command::Tick => {
                self.tick(reporter);
            }
        }
        self.status
    }

    /// Applied immediately; takes effect on the next step. Ignored once stopped.
    pub fn turn(&mut self, dir: Direction) -> TurnOutcome {
        if !self.is_running() {
            return TurnOutcome::Rejected;
        }
        let outcome = self.snake.turn(dir);
        debug!(?dir, ?outcome, "turn");
        outcome
    }

    /// One frame: step, termination checks, apple consumption, apple spawn.
    pub fn tick(&mut self, reporter: &mut dyn Reporter) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        self.snake.step();
        let failure = if !self.snake.inside(&self.bounds) {
            Some(GameOverReason::LeftField)
        } else if self.snake.self_intersects() {
            Some(GameOverReason::SelfCollision)
        } else {
            None
        };
        if let Some(reason) = failure {
            self.status = Status::Stopped(reason);
            warn!(?reason, score = self.score, "game over");
            reporter.game_over(reason, self.score);
            return TickOutcome::Ended(reason);
        }

        let eaten = self.apples.consume_near(self.snake.head(), self.capture_radius);
        for apple in &eaten {
            self.snake.extend();
            self.score += 1;
            debug!(x = apple.position.x, y = apple.position.y, "apple eaten");
            info!(score = self.score, "score");
            reporter.score_changed(self.score);
        }

        if let Some(apple) = self.apples.spawn(&self.bounds, &mut self.rng) {
            debug!(x = apple.position.x, y = apple.position.y, live = self.apples.len(), "apple spawned");
        }

        TickOutcome::Advanced {
            eaten: eaten.len() as u32,
        }
    }
}
