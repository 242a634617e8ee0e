use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

pub const APP_TITLE: &str = "Axis Launcher";
pub const BUILD_LABEL: &str = "Alpha 0.0.1 - Development build";
pub const DEFAULT_LOG_FILTER: &str = "axis_launcher=info";

pub const GAME_JAR: &str = "axis.jar";

pub const INSTALL_STEP_PERCENT: u8 = 5;
pub const INSTALL_STEP_INTERVAL: Duration = Duration::from_millis(100);
pub const DOWNLOAD_SPEEDS: [&str; 5] = ["12.3 MB/s", "15.7 MB/s", "18.2 MB/s", "14.5 MB/s", "16.8 MB/s"];

pub const SETTINGS_SAVE_DELAY: Duration = Duration::from_secs(1);

pub const RAM_RANGE_MB: RangeInclusive<u32> = 1024..=16384;
pub const RAM_STEP_MB: u32 = 512;
pub const RENDER_DISTANCE_RANGE: RangeInclusive<u32> = 2..=32;
pub const VOLUME_RANGE: RangeInclusive<f32> = 0.0..=1.0;

pub const MOCK_ONLINE_PLAYERS: u32 = 127;

/// Command line flags.
#[derive(Debug, Parser)]
#[command(name = "axis-launcher", version, about = "Desktop launcher for Axis")]
pub struct Cli {
    /// Tracing filter directive, overridden by RUST_LOG
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Start with the client already installed
    #[arg(long)]
    pub installed: bool,

    /// Show the game server as unreachable
    #[arg(long)]
    pub offline: bool,

    #[arg(long, default_value_t = 1100.0)]
    pub width: f32,

    #[arg(long, default_value_t = 680.0)]
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub allocated_ram_mb: u32,
    pub java_path: String,
    pub resolution_width: u32,
    pub resolution_height: u32,
    pub fullscreen: bool,
    pub render_distance: u32,
    pub master_volume: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            allocated_ram_mb: 4096,
            java_path: "/usr/bin/java".to_string(),
            resolution_width: 1920,
            resolution_height: 1080,
            fullscreen: false,
            render_distance: 12,
            master_volume: 0.8,
        }
    }
}
