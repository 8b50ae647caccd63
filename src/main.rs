//! Main application entry point.
//!
//! Parses the command line, loads configuration, builds the application
//! context and hands it to eframe.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use log::{error, info};

use ava::config::AppConfig;
use ava::context::AppContext;
use ava::ui::AvaApp;

#[derive(Debug, Parser)]
#[command(name = "ava", version, about = "Game footage analysis tool")]
struct Args {
    /// RON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for reproducible confetti
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = AppConfig::load_or_default(args.config.as_deref()).map_err(|e| {
        error!("{}", e);
        e
    })?;
    let context = AppContext::new(config, args.seed);

    let window = &context.config.window;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width, window.height])
            .with_drag_and_drop(true),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    info!("Starting {}", window.title);
    let title = window.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Box::new(AvaApp::new(cc, &context))),
    )?;

    Ok(())
}
