//! Turns key events into paddle movement and start/restart.
//!
//! Events arrive between ticks, on the same thread as them,
//! so they change the arena directly.

use crate::config::Config;
use crate::physics::reset_ball;
use crate::state::{Arena, State};

use interface::game::Key;
use log::info;
use rand::Rng;

pub fn key_press<R: Rng + ?Sized>(arena: &mut Arena,  key: Key,  config: &Config,  rng: &mut R) {
    match key {
        Key::ArrowUp => arena.player.dy = -config.paddle_step,
        Key::ArrowDown => arena.player.dy = config.paddle_step,
        Key::Space => action(arena, config, rng),
        Key::Other => {}
    }
}

/// Releasing any key stops the player paddle, even if another is still held.
pub fn key_release(arena: &mut Arena,  _: Key) {
    arena.player.dy = 0.0;
}

fn action<R: Rng + ?Sized>(arena: &mut Arena,  config: &Config,  rng: &mut R) {
    match arena.state {
        State::GameOver => {
            arena.player.score = 0;
            arena.computer.score = 0;
            reset_ball(&mut arena.ball, config, rng);
            arena.state = State::Idle;
            info!("new game");
        }
        State::Idle => {
            arena.state = State::Playing;
            info!("serving at {}-{}", arena.player.score, arena.computer.score);
        }
        State::Playing => {}
    }
}
