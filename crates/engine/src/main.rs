//! HeroForge Engine - Main entry point.

use heroforge_engine::{EngineConfig, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heroforge_engine=info,heroforge_domain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HeroForge Engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        scenarios = config.scenarios.len(),
        roster_path = ?config.roster_path,
        stop_on_failure = config.stop_on_failure,
        "Configuration loaded"
    );

    let runner = Runner::new(config);
    let report = runner.run();

    tracing::info!(
        scenarios = report.scenarios_run.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        heroes = report.roster.len(),
        "Demonstration complete"
    );

    runner.write_roster(&report)?;
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
