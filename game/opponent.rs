use crate::config::Config;
use crate::state::Paddle;

/// Move the paddle a fixed fraction of the way towards centering on `ball_y`.
///
/// The velocity is stored in `paddle.dy` only until the next tick overwrites it.
pub fn track(paddle: &mut Paddle,  ball_y: f32,  config: &Config) {
    let target = ball_y - (paddle.y + config.paddle_height / 2.0);
    paddle.dy = target * config.opponent_gain;
    paddle.y += paddle.dy;
    if config.clamp_opponent {
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
