use crate::Settings;
use crate::EngineError;
use crate::view::{letterbox, to_window};
use interface::game::*;

use std::collections::HashMap;
#[cfg(not(target_arch="wasm32"))]
use std::path::Path;
use std::rc::Rc;

extern crate speedy2d;
use speedy2d::Graphics2D;
use speedy2d::color::Color as spColor;
use speedy2d::dimen::Vector2;
use speedy2d::font::{Font, TextLayout, TextOptions, FormattedTextBlock};
use speedy2d::image::ImageHandle;
use speedy2d::shape::Rectangle;
use speedy2d::window::{
    VirtualKeyCode,
    WindowHandler,
    WindowHelper,
};
#[cfg(target_arch="wasm32")]
use speedy2d::WebCanvas;
#[cfg(not(target_arch = "wasm32"))]
use speedy2d::Window;
#[cfg(not(target_arch="wasm32"))]
use speedy2d::image::{ImageDataType, ImageSmoothingMode};
#[cfg(not(target_arch="wasm32"))]
use speedy2d::window::{WindowCreationOptions, WindowSize};

#[cfg(not(target_arch="wasm32"))]
use crate::assets::{self, Rgba};

extern crate fxhash;
use fxhash::FxBuildHasher;

use log::warn;

#[cfg(target_arch="wasm32")]
const CANVAS_ID: &str = "pong_canvas";

enum EngineEvent {
    Tick,
    #[cfg(not(target_arch="wasm32"))]
    Image(ImageId, Rgba),
}

fn map_key(key: Option<VirtualKeyCode>) -> Key {
    match key {
        Some(VirtualKeyCode::Up) => Key::ArrowUp,
        Some(VirtualKeyCode::Down) => Key::ArrowDown,
        Some(VirtualKeyCode::Space) => Key::Space,
        _ => Key::Other,
    }
}

fn map_color([r, g, b, a]: [f32; 4]) -> spColor {
    spColor::from_rgba(r, g, b, a)
}

fn vector([x, y]: [f32; 2]) -> Vector2<f32> {
    Vector2 { x, y }
}

/// Where to draw text so that `position` ends up at the aligned part of it.
fn align(position: [f32; 2],  center: [Align; 2],  text: &FormattedTextBlock) -> Vector2<f32> {
    let x = match center[0] {
        Align::Left => position[0],
        Align::Center => position[0] - text.width()/2.0,
        Align::Right => position[0] - text.width(),
    };
    let y = match center[1] {
        Align::Left => position[1],
        Align::Center => position[1] - text.height()/2.0,
        Align::Right => position[1] - text.height(),
    };
    Vector2 { x, y }
}

struct TextCache {
    font: Font,
    statics: HashMap<(&'static str, i32), Rc<FormattedTextBlock>, FxBuildHasher>,
}

impl TextCache {
    fn new(font: Font) -> Self {
        TextCache {
            font,
            statics: HashMap::default(),
        }
    }
    fn create(&self,  text: &str,  scaled_size: f32) -> Rc<FormattedTextBlock> {
        self.font.layout_text(text, scaled_size, TextOptions::new()).into()
    }
    fn get_static(&mut self,  text: &'static str,  scaled_size: f32) -> Rc<FormattedTextBlock> {
        let key = (text, scaled_size as i32);
        self.statics.entry(key).or_insert_with(|| {
            self.font.layout_text(text, scaled_size, TextOptions::new()).into()
        }).clone()
    }
}

/// Used unless `Settings::font` names a font that can be loaded.
const DEFAULT_FONT: &[u8] = include_bytes!("../../font/font.ttf");

#[cfg(not(target_arch="wasm32"))]
fn load_font_file(path: &Path) -> Option<Font> {
    let bytes = match assets::read_font(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("{} - using the built-in font", e);
            return None;
        }
    };
    match Font::new(&bytes) {
        Ok(font) => Some(font),
        Err(e) => {
            let error = assets::AssetError::Font(path.to_owned());
            warn!("{} ({:?}) - using the built-in font", error, e);
            None
        }
    }
}

fn load_text(settings: &Settings) -> Option<TextCache> {
    #[cfg(not(target_arch="wasm32"))]
    {
        if let Some(font) = settings.font.as_deref().and_then(load_font_file) {
            return Some(TextCache::new(font));
        }
    }
    #[cfg(target_arch="wasm32")]
    let _ = settings;
    match Font::new(DEFAULT_FONT) {
        Ok(font) => Some(TextCache::new(font)),
        Err(e) => {
            warn!("cannot parse the built-in font ({:?}) - text will not be drawn", e);
            None
        }
    }
}

struct GameWrapper<G: Game> {
    game: G,
    surface: [f32; 2],
    window_size: [f32; 2], // changes if window is resized
    #[cfg(not(target_arch="wasm32"))]
    settings: Settings,
    shapes: Graphics,
    text: Option<TextCache>,
    images: HashMap<ImageId, ImageHandle, FxBuildHasher>,
    #[cfg(not(target_arch="wasm32"))]
    pending_images: Vec<(ImageId, Rgba)>,
}

impl<G: Game> GameWrapper<G> {
    #[cfg(not(target_arch="wasm32"))]
    fn upload_images(&mut self,  g: &mut Graphics2D) {
        for (id, image) in self.pending_images.drain(..) {
            let size = Vector2::new(image.width, image.height);
            match g.create_image_from_raw_pixels(
                    ImageDataType::RGBA,
                    ImageSmoothingMode::Linear,
                    size,
                    &image.pixels,
            ) {
                Ok(handle) => {
                    self.images.insert(id, handle);
                }
                Err(e) => warn!("cannot upload image {:?}: {:?}", id, e),
            }
        }
    }
}

impl<G: Game> WindowHandler<EngineEvent> for GameWrapper<G> {
    fn on_start(&mut self,
            h: &mut WindowHelper<EngineEvent>,
            info: speedy2d::window::WindowStartupInfo
    ) {
        let size = info.viewport_size_pixels().into_f32();
        self.window_size = [size.x, size.y];
        h.set_cursor_visible(true);

        // threads don't work in wasm, so it ticks on every frame there.
        #[cfg(not(target_arch="wasm32"))]
        {
            let ticks = h.create_user_event_sender();
            self.settings.tick_rate.spawn(move || {
                ticks.send_event(EngineEvent::Tick).is_ok()
            });

            let images = h.create_user_event_sender();
            assets::load_in_background(self.settings.images.clone(), move |id, image| {
                images.send_event(EngineEvent::Image(id, image)).is_ok()
            });
        }
    }

    fn on_user_event(&mut self,  _: &mut WindowHelper<EngineEvent>,  event: EngineEvent) {
        match event {
            EngineEvent::Tick => self.game.update(),
            #[cfg(not(target_arch="wasm32"))]
            EngineEvent::Image(id, image) => self.pending_images.push((id, image)),
        }
    }

    fn on_draw(&mut self,  h: &mut WindowHelper<EngineEvent>,  g: &mut Graphics2D) {
        #[cfg(target_arch="wasm32")]
        self.on_user_event(h, EngineEvent::Tick);
        #[cfg(not(target_arch="wasm32"))]
        self.upload_images(g);

        g.clear_screen(spColor::BLACK);
        self.game.render(&mut self.shapes);

        let view = letterbox(self.window_size, self.surface);
        let scale = view.1;
        for shape in self.shapes.drain() {
            match shape {
                Shape::Rectangle { color, area } => {
                    let rect = Rectangle::new(
                        vector(to_window([area[0], area[1]], view)),
                        vector(to_window([area[0]+area[2], area[1]+area[3]], view)),
                    );
                    g.draw_rectangle(rect, map_color(color));
                }
                Shape::Circle { color, center, radius } => {
                    let center = vector(to_window(center, view));
                    g.draw_circle(center, radius * scale, map_color(color));
                }
                Shape::StaticText { color, size, position, center, text } => {
                    if let Some(cache) = &mut self.text {
                        let text = cache.get_static(text, size * scale);
                        let position = align(to_window(position, view), center, &text);
                        g.draw_text(position, map_color(color), &text);
                    }
                }
                Shape::DynamicText { color, size, position, center, text } => {
                    if let Some(cache) = &self.text {
                        let text = cache.create(&text, size * scale);
                        let position = align(to_window(position, view), center, &text);
                        g.draw_text(position, map_color(color), &text);
                    }
                }
                Shape::Image { image, area } => {
                    // not loaded yet, or failed to
                    if let Some(handle) = self.images.get(&image) {
                        let rect = Rectangle::new(
                            vector(to_window([area[0], area[1]], view)),
                            vector(to_window([area[0]+area[2], area[1]+area[3]], view)),
                        );
                        g.draw_rectangle_image(rect, handle);
                    }
                }
            }
        }

        // Required to make the screen update.
        // Surprisingly doesn't cause 100% CPU usage.
        h.request_redraw();
    }

    fn on_resize(&mut self,  _: &mut WindowHelper<EngineEvent>,  size: speedy2d::dimen::UVec2) {
        self.window_size[0] = size.into_f32().x;
        self.window_size[1] = size.into_f32().y;
    }

    fn on_key_down(
            &mut self,
            _: &mut WindowHelper<EngineEvent>,
            key: Option<VirtualKeyCode>,
            _: speedy2d::window::KeyScancode
    ) {
        self.game.key_press(map_key(key));
    }

    fn on_key_up(
            &mut self,
            _: &mut WindowHelper<EngineEvent>,
            key: Option<VirtualKeyCode>,
            _: speedy2d::window::KeyScancode
    ) {
        self.game.key_release(map_key(key));
    }
}

/// Open a window (or bind to the canvas) and run the game until it's closed.
///
/// `surface` is the size of the game's coordinate system,
/// and also the initial window size.
#[inline(never)]
pub fn start<G:Game+'static>(
        game: G,
        name: &'static str,
        surface: [f32; 2],
        settings: Settings,
) -> Result<(), EngineError> {
    let wrapper = GameWrapper {
        game,
        surface,
        window_size: surface,
        text: load_text(&settings),
        #[cfg(not(target_arch="wasm32"))]
        settings,
        shapes: Graphics::default(),
        images: HashMap::default(),
        #[cfg(not(target_arch="wasm32"))]
        pending_images: Vec::new(),
    };
    run(wrapper, name, surface)
}

#[cfg(target_arch="wasm32")]
fn run<G:Game+'static>(wrapper: GameWrapper<G>,  _: &'static str,  _: [f32; 2])
-> Result<(), EngineError> {
    // .unregister_when_dropped() would make the game end immediately.
    WebCanvas::new_for_id_with_user_events(CANVAS_ID, wrapper)
        .map_err(|e| EngineError::Window(format!("{:?}", e)))?;
    Ok(())
}

#[cfg(not(target_arch="wasm32"))]
fn run<G:Game+'static>(wrapper: GameWrapper<G>,  name: &'static str,  surface: [f32; 2])
-> Result<(), EngineError> {
    let window_size = WindowSize::ScaledPixels(vector(surface));
    let options = WindowCreationOptions::new_windowed(window_size, None)
            .with_always_on_top(false)
            .with_decorations(true)
            .with_resizable(true)
            .with_transparent(false)
            .with_vsync(true);
    let window = Window::<EngineEvent>::new_with_user_events(name, options)
        .map_err(|e| EngineError::Window(format!("{:?}", e)))?;
    window.run_loop(wrapper)
}
