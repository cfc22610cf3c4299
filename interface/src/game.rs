use std::borrow::Cow;
use std::vec::Drain;

pub type Color = [f32;4];

/// Parse a hex string of 6 or 8 bytes into a color.
/// Format is rrggbbaa, where the aa is optional.
#[track_caller]
pub fn hex(color: &str) -> Color {
    let a = match color.len() {
        8 => u8::from_str_radix(&color[6..], 16).unwrap(),
        6 => 255,
        _ => panic!("color string must be 6 or 8 characters")
    };
    let r = u8::from_str_radix(&color[..2], 16).unwrap();
    let g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let b = u8::from_str_radix(&color[4..6], 16).unwrap();
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Space,
    /// Any key the game has no binding for.
    /// Still delivered so that releases are seen.
    Other,
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Align {Left, Center, Right}

/// Index into the image list the engine was started with.
#[derive(Debug, Clone,Copy, PartialEq,Eq, Hash)]
pub struct ImageId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle { color: Color,  area: [f32; 4] },
    Circle { color: Color,  center: [f32; 2],  radius: f32 },
    StaticText {
        color: Color,
        size: f32,
        position: [f32; 2],
        center: [Align; 2],
        text: &'static str,
    },
    DynamicText {
        color: Color,
        size: f32,
        position: [f32; 2],
        center: [Align; 2],
        text: String,
    },
    Image { image: ImageId,  area: [f32; 4] },
}

/// Draw calls for one frame, in the order they were made.
///
/// All coordinates are in the units of the game's surface;
/// the engine scales them to the window.
#[derive(Debug, Default)]
pub struct Graphics {
    shapes: Vec<Shape>,
}

impl Graphics {
    /// `area` is `[x, y, width, height]`.
    pub fn rectangle(&mut self,  color: Color,  area: [f32; 4]) {
        self.shapes.push(Shape::Rectangle { color, area });
    }
    pub fn circle(&mut self,  color: Color,  center: [f32; 2],  radius: f32) {
        self.shapes.push(Shape::Circle { color, center, radius });
    }
    /// `center` says which part of the text `position` refers to, per axis.
    pub fn text(&mut self,
            color: Color,
            position: [f32; 2],
            center: [Align; 2],
            size: f32,
            text: impl Into<Cow<'static, str>>,
    ) {
        let shape = match text.into() {
            Cow::Borrowed(text) => Shape::StaticText { color, size, position, center, text },
            Cow::Owned(text) => Shape::DynamicText { color, size, position, center, text },
        };
        self.shapes.push(shape);
    }
    /// Stretch an image over `area`.
    /// Backends draw nothing if the image isn't loaded (yet).
    pub fn image(&mut self,  image: ImageId,  area: [f32; 4]) {
        self.shapes.push(Shape::Image { image, area });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    pub fn drain(&mut self) -> Drain<'_, Shape> {
        self.shapes.drain(..)
    }
}

pub trait Game {
    fn render(&self,  gfx: &mut Graphics);
    fn update(&mut self);
    fn key_press(&mut self,  key: Key);
    fn key_release(&mut self,  key: Key);
}
