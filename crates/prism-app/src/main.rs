mod cli;
mod page;
mod signals;

use std::path::PathBuf;
use std::process::ExitCode;

use prism_config::PrismConfig;
use prism_scene::Surface;
use tracing_subscriber::EnvFilter;

use crate::page::script::Script;
use crate::page::{Layout, PageOptions};

const VIEWPORT_WIDTH: f32 = 1280.0;
const VIEWPORT_HEIGHT: f32 = 800.0;

fn load_config(args: &cli::Args) -> PrismConfig {
    let loaded = match &args.config {
        Some(path) => prism_config::load_config_from(path),
        None => prism_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("prism: failed to load config, using defaults: {e}");
        PrismConfig::default()
    })
}

fn main() -> ExitCode {
    let args = cli::parse();
    let config = load_config(&args);

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "prism=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("prism starting");
    tracing::info!(
        frame_rate = config.performance.frame_rate,
        preset = ?config.performance.preset,
        seed = %config.palette.seed,
        "config loaded"
    );

    let surface = match Surface::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, 1.0) {
        Ok(surface) => surface,
        Err(e) => {
            tracing::error!(error = %e, "invalid viewport");
            return ExitCode::FAILURE;
        }
    };
    let options = PageOptions {
        content_dir: args
            .content
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.showcase.content_dir)),
        seed: args.seed,
        signals: signals::from_args(&args),
        surface,
    };
    let script = Script::tour(
        VIEWPORT_HEIGHT as f64,
        &Layout::new(surface),
        VIEWPORT_WIDTH,
    );

    let report = match page::run(&config, &options, script, args.frames) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        frames = report.frames,
        seconds = %format!("{:.2}", report.seconds),
        fps = %format!("{:.1}", report.fps),
        tier = %report.tier,
        offline = report.offline,
        backdrop_redraws = report.backdrop_redraws,
        final_state = ?report.final_state,
        tweens_released = report.released.tweens,
        resources_released = report.released.resources,
        "session finished"
    );
    if !report.leaks.is_clean() {
        tracing::error!(leaks = ?report.leaks, "teardown left live objects");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
