use anyhow::Result;
use log::{debug, error, info, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetManager;
use engine::game_loop::GameLoop;
use engine::renderer::{Canvas, Renderer};
use game::characters::{kenji, samurai_mack};
use game::{Hud, MatchLoop, MatchSetup, Scenery, Stage};

/// Environment variable overriding the art directory
const ASSET_DIR_VAR: &str = "BLADE_DUEL_ASSETS";
const DEFAULT_ASSET_DIR: &str = "assets/img";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Blade Duel...");

    let stage = Stage::default();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Blade Duel")
            .with_inner_size(winit::dpi::LogicalSize::new(stage.width, stage.height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        stage.width as u32,
        stage.height as u32,
    ))?;

    let asset_dir = std::env::var(ASSET_DIR_VAR).unwrap_or_else(|_| DEFAULT_ASSET_DIR.to_string());
    let mut assets = AssetManager::new(&asset_dir);
    if !assets.asset_exists("background.png") {
        warn!("No art found under {}; drawing placeholders", asset_dir);
    }

    let presets = [samurai_mack(&mut assets), kenji(&mut assets)];
    let scenery = Scenery::load(&mut assets, &stage);
    let stats = assets.stats();
    info!(
        "Loaded {} images ({} pixels)",
        stats.image_count, stats.total_pixels
    );

    let mut duel = MatchLoop::new(MatchSetup::new(stage, presets, scenery), Hud::default());
    let mut canvas = Canvas::new(stage.width as u32, stage.height as u32);
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    duel.input_mut().process_keyboard_event(&event);
                    duel.handle_global_actions();
                }
                WindowEvent::RedrawRequested => {
                    let timing = game_loop.begin_frame();
                    duel.advance_clock(timing.frame_time);

                    for _ in 0..timing.ticks {
                        let mut frame = canvas.frame(&assets);
                        duel.tick(&mut frame);
                    }

                    if game_loop.frame_count() % 300 == 0 {
                        debug!(
                            "{:.1} fps, {} ticks run",
                            game_loop.fps(),
                            game_loop.tick_count()
                        );
                    }

                    window.set_title(&duel.display().title());

                    match renderer.present(&canvas) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("GPU out of memory, shutting down");
                            elwt.exit();
                        }
                        Err(e) => warn!("Dropped frame: {:?}", e),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
