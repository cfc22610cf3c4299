//! Two paddles, one ball and a computer opponent.

pub mod config;
pub mod state;
pub mod input;
pub mod opponent;
pub mod physics;
pub mod render;
mod pong;

pub use self::config::{Config, Params};
pub use self::state::{Arena, Ball, Paddle, Side, State};
pub use self::physics::Tick;
pub use self::pong::{Pong, NAME, BACKGROUND};

pub fn create_game(config: Config) -> Pong {
    Pong::new(config)
}
