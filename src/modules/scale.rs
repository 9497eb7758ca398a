/*
Draw everything at a fixed virtual resolution and let the window be any size.

Call use_virtual_resolution() at the top of every frame.  The picture keeps
its aspect ratio and is centered with bars on the sides that do not fit.
Mouse positions have to go through screen_to_virtual() (or
mouse_position_virtual()) so they land in the same coordinates the shapes
use.

Turning off the "scale" feature draws straight in window pixels.
*/

use macroquad::prelude::*;
use std::cell::Cell;

thread_local! {
    static VIRTUAL_SIZE: Cell<Option<Vec2>> = const { Cell::new(None) };
}

/// Sets up the camera for this frame
pub fn use_virtual_resolution(virtual_width: f32, virtual_height: f32) {
    #[cfg(feature = "scale")]
    {
        let screen = vec2(screen_width(), screen_height());
        let virtual_size = vec2(virtual_width, virtual_height);
        let scale = fit_scale(screen, virtual_size);
        set_camera(&Camera2D {
            zoom: vec2(2.0 * scale / screen.x, 2.0 * scale / screen.y),
            target: virtual_size / 2.0,
            ..Default::default()
        });
        VIRTUAL_SIZE.with(|size| size.set(Some(virtual_size)));
    }

    #[cfg(not(feature = "scale"))]
    {
        let _ = (virtual_width, virtual_height);
        set_default_camera();
    }
}

/// Largest scale that fits the virtual area inside the screen
pub fn fit_scale(screen: Vec2, virtual_size: Vec2) -> f32 {
    (screen.x / virtual_size.x).min(screen.y / virtual_size.y)
}

/// Maps a window position to virtual coordinates
pub fn screen_to_virtual(point: Vec2, screen: Vec2, virtual_size: Vec2) -> Vec2 {
    let scale = fit_scale(screen, virtual_size);
    if scale <= 0.0 {
        return point;
    }
    (point - screen / 2.0) / scale + virtual_size / 2.0
}

/// Current mouse position in virtual coordinates
pub fn mouse_position_virtual() -> Vec2 {
    let mouse = Vec2::from(mouse_position());
    match VIRTUAL_SIZE.with(Cell::get) {
        Some(virtual_size) => screen_to_virtual(mouse, vec2(screen_width(), screen_height()), virtual_size),
        None => mouse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_is_identity() {
        let size = vec2(1024.0, 768.0);
        let p = vec2(100.0, 200.0);
        assert_eq!(screen_to_virtual(p, size, size), p);
    }

    #[test]
    fn double_size_window_halves_coordinates() {
        let p = screen_to_virtual(vec2(200.0, 400.0), vec2(2048.0, 1536.0), vec2(1024.0, 768.0));
        assert_eq!(p, vec2(100.0, 200.0));
    }

    #[test]
    fn wide_window_is_letterboxed_on_the_sides() {
        // Height decides the scale, 128 px bars left and right
        let screen = vec2(1280.0, 768.0);
        let virtual_size = vec2(1024.0, 768.0);
        assert_eq!(fit_scale(screen, virtual_size), 1.0);
        assert_eq!(screen_to_virtual(vec2(128.0, 0.0), screen, virtual_size), vec2(0.0, 0.0));
    }
}
