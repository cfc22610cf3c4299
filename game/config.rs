/// Default tuning, in surface units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_STEP: f32 = 6.0;
    pub const OPPONENT_GAIN: f32 = 0.08;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0;
    pub const BALL_DY_MIN: f32 = 2.0;
    pub const BALL_DY_MAX: f32 = 6.0; // exclusive

    // Score
    pub const WIN_SCORE: u32 = 5;
}

/// Clamp that never panics, even if `min > max`,
/// and puts NaN in the middle.
pub(crate) fn clamp(p: f32,  (min,max): (f32,f32)) -> f32 {
         if p <= min   {min}
    else if p >= max   {max}
    else if p.is_nan() {(min+max)/2.0}
    else               {p}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub opponent_gain: f32,
    /// Keep the computer paddle inside the surface too.
    /// Off by default: the opponent is allowed to overshoot.
    pub clamp_opponent: bool,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_dy_min: f32,
    pub ball_dy_max: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            opponent_gain: Params::OPPONENT_GAIN,
            clamp_opponent: false,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_dy_min: Params::BALL_DY_MIN,
            ball_dy_max: Params::BALL_DY_MAX,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// A config for a surface of another size, with default tuning.
    pub fn with_surface(width: f32,  height: f32) -> Self {
        Self { surface_width: width, surface_height: height, ..Self::default() }
    }

    pub fn surface_size(&self) -> [f32; 2] {
        [self.surface_width, self.surface_height]
    }

    pub fn center(&self) -> [f32; 2] {
        [self.surface_width / 2.0, self.surface_height / 2.0]
    }

    pub fn player_x(&self) -> f32 {
        0.0
    }

    pub fn computer_x(&self) -> f32 {
        self.surface_width - self.paddle_width
    }

    /// Paddle y (top edge) where the paddle is vertically centered.
    pub fn paddle_start_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top edge so the whole paddle stays on the surface.
    pub fn clamp_paddle_y(&self,  y: f32) -> f32 {
        clamp(y, (0.0, self.surface_height - self.paddle_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_nan_and_inverted_range() {
        assert_eq!(clamp(f32::NAN, (0.0, 10.0)), 5.0);
        assert_eq!(clamp(3.0, (5.0, 1.0)), 5.0);
        assert_eq!(clamp(-1.0, (0.0, 10.0)), 0.0);
        assert_eq!(clamp(11.0, (0.0, 10.0)), 10.0);
        assert_eq!(clamp(4.5, (0.0, 10.0)), 4.5);
    }

    #[test]
    fn paddle_positions() {
        let config = Config::new();
        assert_eq!(config.player_x(), 0.0);
        assert_eq!(config.computer_x(), 790.0);
        assert_eq!(config.paddle_start_y(), 200.0);
    }

    #[test]
    fn clamp_paddle_y_keeps_paddle_on_surface() {
        let config = Config::with_surface(300.0, 200.0);
        assert_eq!(config.clamp_paddle_y(-6.0), 0.0);
        assert_eq!(config.clamp_paddle_y(150.0), 100.0);
        assert_eq!(config.clamp_paddle_y(42.0), 42.0);
        assert_eq!(config.clamp_paddle_y(f32::INFINITY), 100.0);
    }
}
