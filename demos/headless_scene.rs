//! Headless run of the car scene
//!
//! Steps the particle system and animation at a fixed 60 Hz without a
//! window and logs what the render stage would receive.
//!
//! ```text
//! RUST_LOG=info cargo run --example headless_scene -- [scene.toml] [frames]
//! ```

use anyhow::{Context, Result};
use particled_car::particles::{color_bytes, position_bytes};
use particled_car::{create_scene_state, load_scene_config, step_scene, FrameClock, SceneConfig};
use std::path::PathBuf;

const FRAME_DELTA: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_scene_config(&PathBuf::from(&path))
            .with_context(|| format!("loading scene config from {}", path))?,
        None => SceneConfig::default(),
    };
    let frames: u64 = match args.next() {
        Some(count) => count.parse().context("frame count must be a number")?,
        None => 600,
    };

    let mut state = create_scene_state(&config);
    let mut clock = FrameClock::new();

    for _ in 0..frames {
        let delta = clock.tick_fixed(FRAME_DELTA);
        let report = step_scene(&mut state, delta);

        if report.frame_index % 60 == 0 {
            let smoke = &state.particles.smoke.buffers;
            log::info!(
                "[headless_scene] t={:.2}s smoke={} rain={} splash={} bytes={}+{} light={:?}",
                clock.elapsed,
                report.particle_counts.smoke,
                report.particle_counts.rain,
                report.particle_counts.splash,
                position_bytes(smoke).len(),
                color_bytes(smoke).len(),
                report.transforms.light_position
            );
        }
    }

    let last = step_scene(&mut state, 0.0);
    let stats = state.particles.smoke.pool.stats;
    println!(
        "{} frames, {} particles live, smoke spawned={} retired={} overwritten={}",
        frames,
        last.particle_counts.total(),
        stats.spawned,
        stats.retired,
        stats.stomped
    );
    Ok(())
}
