#![allow(non_snake_case)]

mod actions;
mod app;
mod components;
pub mod context;
mod host;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gamertags_core::ThemeMode;
use tracing_subscriber::EnvFilter;

use crate::context::LaunchConfig;

/// Global launch configuration, set from command line
static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();

/// Get the launch configuration (set from command line or default)
pub fn launch_config() -> LaunchConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_else(|| LaunchConfig {
        data_dir: default_data_dir(),
        initial_theme: ThemeMode::default(),
        share_url: None,
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gamertags")
}

/// Gamer Tags - collect your gaming handles on one shareable card
#[derive(Parser, Debug)]
#[command(name = "gamertags-desktop")]
#[command(about = "Gamer Tags - create and share your gaming profile")]
struct Args {
    /// Data directory for storage (use different dirs for separate profiles)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Theme to start in (dark or light); not remembered between runs
    #[arg(short, long, default_value = "dark")]
    theme: ThemeMode,

    /// Link included when sharing the profile
    #[arg(long)]
    share_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = LaunchConfig {
        data_dir: args.data_dir.unwrap_or_else(default_data_dir),
        initial_theme: args.theme,
        share_url: args.share_url,
    };

    tracing::info!(
        "Starting Gamer Tags with data dir: {:?} (theme: {})",
        config.data_dir,
        config.initial_theme
    );

    let _ = LAUNCH_CONFIG.set(config);

    let window_width = 1100.0;
    let window_height = 820.0;

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Gamer Tags")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);
}
