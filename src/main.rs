#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use finsurvey_core::{AppConfig, Backend};

/// Global backend, opened from command line args before launch
static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Get the backend opened at startup (in-memory if startup was bypassed)
pub fn get_backend() -> Backend {
    BACKEND.get().cloned().unwrap_or_else(Backend::in_memory)
}

/// Personal Finance Survey
#[derive(Parser, Debug)]
#[command(name = "finsurvey-desktop")]
#[command(about = "Personal Finance Survey - find out how much you could save")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: finsurvey-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Keep accounts and records in memory only
    #[arg(long)]
    ephemeral: bool,
}

impl Args {
    fn into_config(self) -> AppConfig {
        let config = if let Some(dir) = self.data_dir {
            AppConfig::new(dir)
        } else if let Some(ref name) = self.name {
            AppConfig::for_instance(name)
        } else {
            AppConfig::default()
        };
        config.ephemeral(self.ephemeral)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();

    tracing::info!(data_dir = ?config.data_dir, ephemeral = config.ephemeral, "Starting");

    let backend = Backend::open(&config)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;
    let _ = BACKEND.set(backend);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Personal Finance Survey")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
