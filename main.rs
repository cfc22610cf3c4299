/* Copyright 2018 Torbjørn Birch Moltu
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

#![cfg_attr(windows, windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process;

use engine::Settings;
use engine::ticker::TickRate;
use game::Config;

// relative to the working directory; the game runs without it.
// index 0 is game::BACKGROUND
const BACKGROUND_IMAGE: &str = "static/images/bg-pong.png";

fn init_logging() {
    #[cfg(target_arch="wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
    }
    #[cfg(not(target_arch="wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() {
    init_logging();

    let config = Config::default();
    let settings = Settings {
        tick_rate: TickRate::NOMINAL,
        images: vec![PathBuf::from(BACKGROUND_IMAGE)],
        font: None,
    };
    let surface = config.surface_size();
    let game = game::create_game(config);
    if let Err(e) = engine::start(game, game::NAME, surface, settings) {
        log::error!("{}", e);
        process::exit(1);
    }
}
