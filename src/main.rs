#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod playback;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use linkpage_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Everything the UI needs from the command line, set once before launch
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: SiteConfig,
    pub autoplay: bool,
}

static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Get the launch options (set from command line)
pub fn launch_options() -> Option<LaunchOptions> {
    LAUNCH.get().cloned()
}

/// linkpage - personal link-in-bio profile
#[derive(Parser, Debug)]
#[command(name = "linkpage-desktop")]
#[command(about = "Link-in-bio profile with service galleries and background music")]
struct Args {
    /// Site seed (JSON). Defaults to <config dir>/linkpage/site.json, then the built-in seed
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the automatic music start
    #[arg(short, long)]
    muted: bool,

    /// Window title (defaults to the profile name)
    #[arg(short, long)]
    title: Option<String>,
}

/// User-level seed location, if one exists
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("linkpage").join("site.json"))
        .filter(|path| path.exists())
}

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<SiteConfig> {
    match explicit.or_else(default_config_path) {
        Some(path) => SiteConfig::load(&path)
            .with_context(|| format!("Failed to load site config {:?}", path)),
        None => {
            tracing::info!("No site config found, using built-in seed");
            SiteConfig::builtin().context("Built-in site config is invalid")
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let site_config = load_config(args.config)?;

    let title = args
        .title
        .unwrap_or_else(|| site_config.profile.name.clone());

    tracing::info!(
        services = site_config.services.len(),
        autoplay = !args.muted,
        "Starting '{}'",
        title
    );

    let _ = LAUNCH.set(LaunchOptions {
        config: site_config,
        autoplay: !args.muted,
    });

    // Phone-like portrait window
    let window_width = 480.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
