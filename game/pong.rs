use crate::config::Config;
use crate::input;
use crate::physics::{self, Tick};
use crate::render;
use crate::state::Arena;

use interface::game::{Game, Graphics, ImageId, Key};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const NAME: &str = "pong";
/// Must be the first image the engine is given.
pub const BACKGROUND: ImageId = ImageId(0);

/// The single session: owns the arena and hands it to input, physics and rendering.
pub struct Pong {
    arena: Arena,
    config: Config,
    rng: StdRng,
}

impl Pong {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// For reproducible serves.
    pub fn with_rng(config: Config,  rng: StdRng) -> Self {
        Pong { arena: Arena::new(&config), config, rng }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Like `update()`, but says what happened.
    pub fn step(&mut self) -> Tick {
        let tick = physics::tick(&mut self.arena, &self.config, &mut self.rng);
        match tick {
            Tick::Scored(side) => info!(
                "{:?} scored, {}-{}",
                side, self.arena.player.score, self.arena.computer.score
            ),
            Tick::Won(side) => info!(
                "{:?} won, {}-{}",
                side, self.arena.player.score, self.arena.computer.score
            ),
            Tick::Paused | Tick::Rally => {}
        }
        tick
    }
}

impl Game for Pong {
    fn render(&self,  gfx: &mut Graphics) {
        render::render(&self.arena, &self.config, gfx);
    }

    fn update(&mut self) {
        self.step();
    }

    fn key_press(&mut self,  key: Key) {
        input::key_press(&mut self.arena, key, &self.config, &mut self.rng);
    }

    fn key_release(&mut self,  key: Key) {
        input::key_release(&mut self.arena, key);
    }
}
