use std::path::PathBuf;

pub mod ticker;
pub mod view;
#[cfg(not(target_arch="wasm32"))]
pub mod assets;
#[cfg(feature="speedy2d")]
mod speedy2d;

#[cfg(feature="speedy2d")]
pub use self::speedy2d::start;

use self::ticker::TickRate;

/// How to run a game, as opposed to what the game is.
#[derive(Debug, Clone)]
pub struct Settings {
    pub tick_rate: TickRate,
    /// Loaded in the background after the window opens.
    /// `ImageId(n)` refers to the nth path.
    pub images: Vec<PathBuf>,
    /// Font file to use instead of the built-in one.
    /// Ignored in the browser.
    pub font: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tick_rate: TickRate::NOMINAL,
            images: Vec::new(),
            font: None,
        }
    }
}

/// Asset problems are only logged, so this is all that can stop a game.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("cannot create window: {0}")]
    Window(String),
}
