//! Fitting the game's fixed size surface inside a window of any size.

/// Scale the surface to fill as much of the window as possible
/// without distorting it, and center it.
///
/// Returns the offset in window pixels and the pixels per surface unit.
pub fn letterbox(window: [f32; 2],  surface: [f32; 2]) -> ([f32; 2], f32) {
    let scale = f32::min(window[0] / surface[0], window[1] / surface[1]);
    let scale = if scale.is_finite() && scale > 0.0 {scale} else {1.0};
    let offset = [
        (window[0] - surface[0]*scale) / 2.0,
        (window[1] - surface[1]*scale) / 2.0,
    ];
    (offset, scale)
}

/// Surface `[x, y]` to window pixels.
pub fn to_window([x, y]: [f32; 2],  (offset, scale): ([f32; 2], f32)) -> [f32; 2] {
    [x*scale + offset[0],  y*scale + offset[1]]
}
