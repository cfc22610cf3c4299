//! Drawing the arena. Reads state, never changes it.

use crate::config::Config;
use crate::pong::BACKGROUND;
use crate::state::{Arena, Side, State};

use interface::game::{Align, Graphics, hex};

const PADDLE_COLOR: &str = "6f42c1";
const BALL_COLOR: &str = "ffffff";
const DIVIDER_COLOR: &str = "444444";
const SCORE_COLOR: &str = "ffffff";
const PROMPT_COLOR: &str = "cccccc";
const GAME_OVER_COLOR: &str = "f8f9fa";

const DIVIDER_INTERVAL: f32 = 20.0;
const DIVIDER_LENGTH: f32 = 10.0;
const DIVIDER_WIDTH: f32 = 2.0;
const SCORE_SIZE: f32 = 24.0;
const SCORE_Y: f32 = 50.0;
const PROMPT_SIZE: f32 = 24.0;
const GAME_OVER_SIZE: f32 = 36.0;
const RESTART_SIZE: f32 = 20.0;

pub const START_PROMPT: &str = "Press Space to Start";
pub const RESTART_PROMPT: &str = "Press Space to Restart";
pub const PLAYER_WON: &str = "NO HACKING ALLOWED! REEEEEEEEE!!!";
pub const COMPUTER_WON: &str = "Skill issue.";

pub fn render(arena: &Arena,  config: &Config,  gfx: &mut Graphics) {
    let [width, height] = config.surface_size();
    gfx.image(BACKGROUND, [0.0, 0.0, width, height]);

    let paddle_color = hex(PADDLE_COLOR);
    for paddle in [&arena.player, &arena.computer] {
        gfx.rectangle(paddle_color, [paddle.x, paddle.y, config.paddle_width, config.paddle_height]);
    }

    // centered on the collision box, but twice as wide as it
    let half = config.ball_size / 2.0;
    gfx.circle(hex(BALL_COLOR), [arena.ball.x + half, arena.ball.y + half], config.ball_size);

    let divider_color = hex(DIVIDER_COLOR);
    let mut y = 0.0;
    while y < height {
        gfx.rectangle(divider_color, [width/2.0 - DIVIDER_WIDTH/2.0, y, DIVIDER_WIDTH, DIVIDER_LENGTH]);
        y += DIVIDER_INTERVAL;
    }

    // y is the baseline
    let score_color = hex(SCORE_COLOR);
    gfx.text(
            score_color,
            [width / 4.0, SCORE_Y],
            [Align::Left, Align::Right],
            SCORE_SIZE,
            arena.player.score.to_string(),
    );
    gfx.text(
            score_color,
            [3.0 * width / 4.0, SCORE_Y],
            [Align::Left, Align::Right],
            SCORE_SIZE,
            arena.computer.score.to_string(),
    );

    match arena.state {
        State::Idle => {
            gfx.text(
                    hex(PROMPT_COLOR),
                    [width / 2.0, height / 2.0],
                    [Align::Center, Align::Center],
                    PROMPT_SIZE,
                    START_PROMPT,
            );
        }
        State::GameOver => {
            let headline = match arena.winner(config) {
                Some(Side::Player) => PLAYER_WON,
                _ => COMPUTER_WON,
            };
            gfx.text(
                    hex(GAME_OVER_COLOR),
                    [width / 2.0, height / 2.0 - 20.0],
                    [Align::Center, Align::Center],
                    GAME_OVER_SIZE,
                    headline,
            );
            gfx.text(
                    hex(PROMPT_COLOR),
                    [width / 2.0, height / 2.0 + 30.0],
                    [Align::Center, Align::Center],
                    RESTART_SIZE,
                    RESTART_PROMPT,
            );
        }
        State::Playing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interface::game::Shape;

    fn static_texts(gfx: &Graphics) -> Vec<&'static str> {
        gfx.shapes().iter().filter_map(|shape| match shape {
            Shape::StaticText { text, .. } => Some(*text),
            _ => None,
        }).collect()
    }

    #[test]
    fn layers_are_drawn_in_order() {
        let config = Config::new();
        let arena = Arena::new(&config);
        let mut gfx = Graphics::default();
        render(&arena, &config, &mut gfx);
        let shapes = gfx.shapes();
        assert_eq!(shapes[0], Shape::Image { image: BACKGROUND, area: [0.0, 0.0, 800.0, 500.0] });
        let areas: Vec<[f32; 4]> = shapes[1..].iter()
            .map_while(|shape| match shape {
                Shape::Rectangle { area, .. } => Some(*area),
                _ => None,
            })
            .collect();
        assert_eq!(areas[0], [0.0, 200.0, 10.0, 100.0]);
        assert_eq!(areas[1], [790.0, 200.0, 10.0, 100.0]);
        assert_eq!(shapes[3], Shape::Circle { color: hex(BALL_COLOR), center: [405.0, 255.0], radius: 10.0 });
        // 500 / 20 segments
        let divider = shapes[4..].iter()
            .take_while(|shape| matches!(shape, Shape::Rectangle { .. }))
            .count();
        assert_eq!(divider, 25);
        match &shapes[4 + divider..] {
            [Shape::DynamicText { text: player, position: player_at, .. },
             Shape::DynamicText { text: computer, position: computer_at, .. },
             Shape::StaticText { text: START_PROMPT, .. }] => {
                assert_eq!((player.as_str(), computer.as_str()), ("0", "0"));
                assert_eq!((*player_at, *computer_at), ([200.0, 50.0], [600.0, 50.0]));
            }
            other => panic!("unexpected overlay {:?}", other),
        }
    }

    #[test]
    fn no_overlay_while_playing() {
        let config = Config::new();
        let mut arena = Arena::new(&config);
        arena.state = State::Playing;
        let mut gfx = Graphics::default();
        render(&arena, &config, &mut gfx);
        assert!(static_texts(&gfx).is_empty());
    }

    #[test]
    fn game_over_names_the_loser_or_winner() {
        let config = Config::new();
        let mut arena = Arena::new(&config);
        arena.state = State::GameOver;
        arena.computer.score = 5;
        let mut gfx = Graphics::default();
        render(&arena, &config, &mut gfx);
        assert_eq!(static_texts(&gfx), [COMPUTER_WON, RESTART_PROMPT]);

        arena.computer.score = 3;
        arena.player.score = 5;
        let mut gfx = Graphics::default();
        render(&arena, &config, &mut gfx);
        assert_eq!(static_texts(&gfx), [PLAYER_WON, RESTART_PROMPT]);
    }

    #[test]
    fn rendering_leaves_state_alone() {
        let config = Config::new();
        let arena = Arena::new(&config);
        let before = arena.clone();
        render(&arena, &config, &mut Graphics::default());
        assert_eq!(arena, before);
    }
}
