use std::path::Path;
use std::process;

use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod assets;
mod gpu;
mod input;
mod renderer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let assets = match assets::SketchAssets::load(Path::new("assets")) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Asset preload failed: {e}");
            process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Event loop creation failed: {e}");
            process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::SketchApp::new(assets);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
        process::exit(1);
    }
}
