//! Collision demo application
//!
//! Loads a scene of named bodies, tests every pair once and prints the ones
//! that touch.
//!
//! ```text
//! collide_demo <scene.ron|scene.toml> [tolerances.ron|tolerances.toml]
//! ```
//!
//! Set `RUST_LOG=debug` to see every pair, `RUST_LOG=trace` for the layer
//! filtering decisions as well.

mod scene;

use collide2d::config::{Config, ConfigError, Tolerances};
use collide2d::foundation::logging;
use scene::{Scene, SceneError};

/// Demo errors
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("usage: collide_demo <scene.ron|scene.toml> [tolerances.ron|tolerances.toml]")]
    Usage,

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("failed to load tolerances: {0}")]
    Tolerances(#[from] ConfigError),
}

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);
    let scene_path = args.next().ok_or(DemoError::Usage)?;

    let mut scene = Scene::load(&scene_path)?;
    if let Some(tolerance_path) = args.next() {
        scene.tolerances = Tolerances::load_from_file(&tolerance_path)?;
        log::info!("Using tolerances from {}: {:?}", tolerance_path, scene.tolerances);
    }

    let contacts = scene.contacts();
    for contact in &contacts {
        log::info!("Contact: {} <-> {}", contact.a, contact.b);
        println!("{} <-> {}", contact.a, contact.b);
    }

    let bodies = scene.bodies.len();
    let pairs = bodies * bodies.saturating_sub(1) / 2;
    println!("{} contact(s) among {} pair(s)", contacts.len(), pairs);
    Ok(())
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
