mod catalog;
mod character;
mod character_ui;
mod config;
mod content;
mod error;
mod install;
mod launcher;
mod play;
mod server;
mod settings;
mod view;
use crate::config::{APP_TITLE, Cli};
use crate::launcher::Launcher as App;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(installed = cli.installed, offline = cli.offline, "starting {APP_TITLE}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([800.0, 520.0]),
        ..Default::default()
    };
    let (installed, offline) = (cli.installed, cli.offline);
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(installed, offline)))),
    )
}
