//! Snake arcade game where the body is a chain of line segments rather than
//! grid cells. The head grows along its heading, the tail retracts along
//! its own, and turning starts a new segment at the head point.

pub mod border;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod food;
pub mod game;
pub mod game_input;
pub mod geometry;
pub mod log;
pub mod render;
pub mod snake;

pub use border::Bounds;
pub use config::{Color, GameConfig};
pub use error::{Error, Result};
pub use food::{Apple, AppleField};
pub use game::{Command, Game, GameOverReason, Reporter, Status, TickOutcome};
pub use geometry::{Direction, Point, Segment};
pub use snake::{Motion, Snake, SnakeState, TurnOutcome};
