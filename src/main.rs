//! Entry point for the OverFunction desktop site.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (start page, optional config path).
//! - Load user configuration and the remembered theme.
//! - Install logging and the Ctrl+C hook, then launch the GUI.

mod app;
mod audio;
mod cache;
mod carousel;
mod config;
mod gallery_loader;
mod oklch;
mod routes;
mod theme;

use crate::app::run_app;
use crate::cache::{load_theme_preference, preferences_path};
use crate::config::load_config;
use crate::routes::Route;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let (start_route, config_path) = parse_args();
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    install_sigint_handler();

    let prefs_path = preferences_path();
    let stored_theme = load_theme_preference(&prefs_path);
    info!(
        route = %start_route,
        config = %config_path.display(),
        level = %config.log_level,
        stored_theme = ?stored_theme,
        "Starting OverFunction"
    );
    run_app(config, start_route, stored_theme, prefs_path).context("Failed to start the GUI")?;
    Ok(())
}

/// `overfunction [route] [config]`. Unknown routes fall back to home.
fn parse_args() -> (Route, PathBuf) {
    let mut args = env::args().skip(1);
    let route = args
        .next()
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home);
    let config_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    (route, config_path)
}

fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        info!("Received Ctrl+C; requesting safe shutdown");
        SIGINT_REQUESTED.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }
}

/// Consume a pending Ctrl+C request. Polled from the GUI loop.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
