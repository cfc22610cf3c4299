//! Everything that changes while playing.
//! Owned by `Pong`, and passed by reference to input, physics and rendering.

use crate::config::Config;

#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Paddle {
    /// Left edge, never changes.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Set by key presses for the player, and each tick by the opponent controller.
    pub dy: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(x: f32,  y: f32) -> Self {
        Paddle { x, y, dy: 0.0, score: 0 }
    }
}

/// `x` and `y` are the top-left corner of a `ball_size` square,
/// which is what collisions are checked against.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Side {Player, Computer}

/// Waiting for space, between points or before the first one.
/// Scores are kept when a point pauses the game.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum State {Idle, Playing, GameOver}

#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
    pub state: State,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        let [center_x, center_y] = config.center();
        Arena {
            player: Paddle::new(config.player_x(), config.paddle_start_y()),
            computer: Paddle::new(config.computer_x(), config.paddle_start_y()),
            // the first serve always goes down and to the right
            ball: Ball { x: center_x, y: center_y, dx: config.ball_speed, dy: config.ball_speed },
            state: State::Idle,
        }
    }

    pub fn started(&self) -> bool {
        self.state == State::Playing
    }

    pub fn over(&self) -> bool {
        self.state == State::GameOver
    }

    pub fn paddle_mut(&mut self,  side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// The player is checked first, like when both reach it at once.
    pub fn winner(&self,  config: &Config) -> Option<Side> {
        if self.player.score >= config.win_score {
            Some(Side::Player)
        } else if self.computer.score >= config.win_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_arena_is_idle_and_centered() {
        let config = Config::new();
        let arena = Arena::new(&config);
        assert_eq!(arena.state, State::Idle);
        assert!(!arena.started());
        assert!(!arena.over());
        assert_eq!([arena.ball.x, arena.ball.y], config.center());
        assert_eq!(arena.player.x, 0.0);
        assert_eq!(arena.computer.x, config.surface_width - config.paddle_width);
        assert_eq!(arena.player.score + arena.computer.score, 0);
    }

    #[test]
    fn winner_needs_threshold() {
        let config = Config::new();
        let mut arena = Arena::new(&config);
        arena.computer.score = config.win_score - 1;
        assert_eq!(arena.winner(&config), None);
        arena.paddle_mut(Side::Computer).score += 1;
        assert_eq!(arena.winner(&config), Some(Side::Computer));
        arena.player.score = config.win_score;
        assert_eq!(arena.winner(&config), Some(Side::Player));
    }
}
