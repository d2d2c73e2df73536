use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use dof_viewer::app::{ViewerApp, ViewerOptions};
use dof_viewer::cli::Cli;
use dof_viewer::config::PanelConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PanelConfig::load(path)?,
        None => PanelConfig::default(),
    };
    let stack = config
        .build_stack()
        .context("invalid slider panel configuration")?;

    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(ViewerOptions::from(&cli), stack);

    log::info!("DoF viewer - drag the sliders to refocus, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
