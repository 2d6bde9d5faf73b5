//! ROOMCRAFT: an interactive authoring tool for parametric rooms
//!
//! Author a rectangular room by width/length/height and HSV color, place a
//! door on one of its four walls, preview it in the 3D viewport, and save
//! the result as a space definition under `spaces/`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod camera;
mod config;
mod geometry;
mod input;
mod math;
mod room;
mod session;
mod store;
mod viewport;

use macroquad::prelude::*;

use app::App;
use config::{AppConfig, CONFIG_FILE};

fn window_conf() -> Conf {
    let config = AppConfig::load_or_default(CONFIG_FILE);
    Conf {
        window_title: format!("ROOMCRAFT v{}", VERSION),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = AppConfig::load_or_default(CONFIG_FILE);
    println!("ROOMCRAFT v{} - spaces dir: {}", VERSION, config.spaces_dir);

    let mut app = App::new(&config);
    loop {
        app.frame();
        next_frame().await;
    }
}
