/*
By: <Draydon Levesque>
Date: 2026-10-19
Program Details: <Falling shapes - click to remove, click empty space to add>
*/

use falling_shapes::modules::app::ShapeApp;
use falling_shapes::modules::config::AppConfig;
use falling_shapes::modules::controls::{ControlPanel, PanelLayout};
use falling_shapes::modules::render::{draw_hud, draw_shapes};
use falling_shapes::modules::scale::{mouse_position_virtual, use_virtual_resolution};
use log::{error, info};
use macroquad::miniquad::date;
use macroquad::prelude::*;

/// Set up window settings before the app runs
fn window_conf() -> Conf {
    Conf {
        window_title: "falling-shapes".to_string(),
        window_width: 1024,
        window_height: 768,
        fullscreen: false,
        high_dpi: true,
        window_resizable: true,
        sample_count: 4, // MSAA
        ..Default::default()
    }
}

// Milliseconds since the app started
fn now_ms() -> f64 {
    get_time() * 1000.0
}

#[macroquad::main(window_conf)]
async fn main() {
    // Native builds log through env_logger, RUST_LOG picks the level
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    rand::srand(date::now() as u64);

    // -------- Setup ----------------------------------------------------------
    let config = AppConfig::default();

    // The panel has to be complete before anything starts
    let panel = match ControlPanel::mount(&PanelLayout::standard(config.viewport_width)) {
        Ok(panel) => panel,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    let mut app = match ShapeApp::new(config) {
        Ok(app) => app,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    let (virtual_width, virtual_height) = (app.config().viewport_width, app.config().viewport_height);
    let background = app.config().background;

    // First shape and the periodic spawn loop
    app.init(now_ms());
    info!("falling shapes running at {virtual_width}x{virtual_height}");

    loop {
        use_virtual_resolution(virtual_width, virtual_height);
        clear_background(background);
        let now = now_ms();

        // Panel buttons first, clicks elsewhere on the panel do nothing,
        // everything else is the canvas
        if is_mouse_button_pressed(MouseButton::Left) {
            let point = mouse_position_virtual();
            if let Some(action) = panel.action_at(point) {
                app.apply(action, now);
            } else if !panel.contains(point) {
                app.click(point);
            }
        }

        // Spawn, fall and cull
        app.frame(now);

        // ---- Draw ----
        draw_shapes(app.registry());
        draw_hud(app.readouts());

        panel.draw(app.readouts());

        next_frame().await;
    }
}
