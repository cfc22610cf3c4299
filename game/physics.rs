//! Moving things and applying the rules, one tick at a time.

use crate::config::Config;
use crate::opponent;
use crate::state::{Arena, Ball, Paddle, Side, State};

use rand::Rng;

/// What a call to `tick()` did.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Tick {
    /// Idle or game over, nothing changed.
    Paused,
    Rally,
    /// The side got a point and the ball was served again.
    Scored(Side),
    /// The point made the side reach the win score.
    Won(Side),
}

/// Center the ball and give it a new random velocity:
/// horizontal speed is fixed, vertical speed is in `[ball_dy_min, ball_dy_max)`,
/// and both directions are a coin toss.
pub fn reset_ball<R: Rng + ?Sized>(ball: &mut Ball,  config: &Config,  rng: &mut R) {
    let [x, y] = config.center();
    ball.x = x;
    ball.y = y;
    ball.dx = if rng.gen_bool(0.5) {config.ball_speed} else {-config.ball_speed};
    let dy = if config.ball_dy_min < config.ball_dy_max {
        rng.gen_range(config.ball_dy_min..config.ball_dy_max)
    } else {
        config.ball_dy_min
    };
    ball.dy = if rng.gen_bool(0.5) {dy} else {-dy};
}

fn overlaps_vertically(ball: &Ball,  paddle: &Paddle,  config: &Config) -> bool {
    ball.y + config.ball_size > paddle.y  &&  ball.y < paddle.y + config.paddle_height
}

/// Advance the game by one tick.
///
/// Does nothing unless playing.
/// The order of the steps matters and is the same for every tick:
/// player, opponent, ball, walls, paddles, scoring and finally the win check.
pub fn tick<R: Rng + ?Sized>(arena: &mut Arena,  config: &Config,  rng: &mut R) -> Tick {
    if arena.state != State::Playing {
        return Tick::Paused;
    }

    let player = &mut arena.player;
    player.y = config.clamp_paddle_y(player.y + player.dy);

    opponent::track(&mut arena.computer, arena.ball.y, config);

    let ball = &mut arena.ball;
    ball.x += ball.dx;
    ball.y += ball.dy;

    // can overshoot by up to one tick; the next tick brings it back
    if ball.y < 0.0  ||  ball.y + config.ball_size > config.surface_height {
        ball.dy = -ball.dy;
    }

    let player = &arena.player;
    if ball.x < player.x + config.paddle_width  &&  overlaps_vertically(ball, player, config) {
        ball.dx = -ball.dx;
        ball.x = player.x + config.paddle_width;
    }
    let computer = &arena.computer;
    if ball.x + config.ball_size > computer.x  &&  overlaps_vertically(ball, computer, config) {
        ball.dx = -ball.dx;
        ball.x = computer.x - config.ball_size;
    }

    let scorer = if ball.x < 0.0 {
        Some(Side::Computer)
    } else if ball.x > config.surface_width {
        Some(Side::Player)
    } else {
        None
    };
    let mut outcome = Tick::Rally;
    if let Some(side) = scorer {
        arena.paddle_mut(side).score += 1;
        reset_ball(&mut arena.ball, config, rng);
        arena.state = State::Idle;
        outcome = Tick::Scored(side);
    }

    if let Some(winner) = arena.winner(config) {
        arena.state = State::GameOver;
        outcome = Tick::Won(winner);
    }
    outcome
}
