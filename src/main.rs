//! hyper4d - 4D geometry visualizer
//!
//! Loads the configured shape, runs the animation clock for the configured
//! number of frames, logs a summary and optionally exports the last frame
//! as RON. An optional first argument overrides the configured shape by
//! registry identifier.

use std::fs;

use hyper4d::{AppConfig, AppError, Visualizer};

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting hyper4d");

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let mut vis = Visualizer::from_config(config);

    if let Some(name) = std::env::args().nth(1) {
        vis.load_model(&name)?;
    }

    let dt = config.animation.frame_dt;
    for _ in 0..config.animation.frames {
        vis.tick(dt);
    }

    let angles = vis.rotation().angles();
    let time = vis.animation().time();
    let shape = vis.template().name();
    let frame = vis.frame();
    log::info!(
        "{}: {} points, {} segments, {} triangles (t = {:.3}, rotation = [{:.3}, {:.3}, {:.3}, {:.3}])",
        shape,
        frame.points.len(),
        frame.segments.len(),
        frame.triangles.len(),
        time,
        angles.x,
        angles.y,
        angles.z,
        angles.w
    );

    let path = &config.output.frame_path;
    if !path.is_empty() {
        let ron = if config.output.pretty {
            ron::ser::to_string_pretty(frame, ron::ser::PrettyConfig::default())?
        } else {
            ron::to_string(frame)?
        };
        fs::write(path, ron)?;
        log::info!("Wrote frame to {}", path);
    }

    Ok(())
}
