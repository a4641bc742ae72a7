#![allow(non_snake_case)]

mod app;
pub mod context;
mod feed;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use huddle_core::{default_data_dir, load_transcript, HuddleConfig, HuddleResult};

use crate::context::{set_room_settings, RoomSettings};

/// Huddle - chat transcript beside a call
#[derive(Parser, Debug)]
#[command(name = "huddle-desktop")]
#[command(about = "Huddle - animated chat transcript for a video room")]
struct Args {
    /// Data directory holding huddle.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Preload a transcript from a JSON array of messages
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Start with the transcript hidden
    #[arg(long)]
    hidden: bool,

    /// Milliseconds between scripted messages
    #[arg(long)]
    feed_interval_ms: Option<u64>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Apply command line overrides on top of the file config.
    fn merge_into(self, mut config: HuddleConfig) -> HuddleResult<HuddleConfig> {
        if let Some(transcript) = self.transcript {
            config.transcript = Some(transcript);
        }
        if self.hidden {
            config.start_hidden = true;
        }
        if let Some(interval) = self.feed_interval_ms {
            config.feed_interval_ms = interval;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        config.validate()?;
        Ok(config)
    }
}

fn load_settings(data_dir: &std::path::Path, args: Args) -> HuddleResult<RoomSettings> {
    let config = args.merge_into(HuddleConfig::load_from_dir(data_dir)?)?;
    let initial = match config.transcript {
        Some(ref path) => load_transcript(path)?,
        None => Vec::new(),
    };
    Ok(RoomSettings { config, initial })
}

fn main() {
    let args = Args::parse();
    let log = match huddle_core::logging::init(args.log_level.as_deref().unwrap_or("info")) {
        Ok(log) => Some(log),
        Err(e) => {
            // No subscriber is installed, so tracing would drop this
            eprintln!("{e}");
            None
        }
    };

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let settings = match load_settings(&data_dir, args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings from {:?}: {}", data_dir, e);
            std::process::exit(1);
        }
    };
    if let Some(log) = log {
        if let Err(e) = log.set_level(&settings.config.log_level) {
            tracing::warn!("Failed to apply log level {:?}: {}", settings.config.log_level, e);
        }
    }
    tracing::info!(
        ?data_dir,
        preloaded = settings.initial.len(),
        "room settings resolved"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Huddle")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                settings.config.window_width,
                settings.config.window_height,
            ))
            .with_resizable(true),
    );
    set_room_settings(settings);

    tracing::info!("Starting Huddle");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
