//! Cobot Runtime
//!
//! Opens a window and runs the animated arm until it is closed.
//! Usage: `cobot [settings.json]`

mod app;

use anyhow::{Context, Result};
use cobot_render::winit::event_loop::ControlFlow;
use cobot_services::Settings;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Cobot v{}", cobot_core::VERSION);

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())
        .context("failed to load settings")?;

    let rng = match settings.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let event_loop = cobot_render::window::create_event_loop()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new(settings, rng).context("failed to set up simulation")?;
    event_loop.run_app(&mut app)?;

    tracing::info!("Shutting down");
    Ok(())
}
