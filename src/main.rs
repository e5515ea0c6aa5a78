use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::{Args, DEFAULT_CONFIG};
use logger::init_logger;
use raydemos::config::DemoConfig;
use raydemos::demo::{build_demo, Demo};
use raydemos::frame::FrameDriver;
use raydemos::host::{HeadlessHost, Host};
use raydemos::input::InputEvent;

/// Load `--config`, or the default file when it exists, then apply flags.
fn load_config(args: &Args) -> Result<DemoConfig> {
    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => DemoConfig::load(Path::new(DEFAULT_CONFIG))?,
        None => DemoConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn run_headless(args: &Args, config: &DemoConfig, demo: &mut dyn Demo) -> Result<()> {
    let (width, height) = demo.size();
    let mut host = HeadlessHost::new(args.frames, args.frame_interval_ms).with_progress();
    if let Some((x, y)) = args.pointer {
        host = host.with_event(0, InputEvent::PointerDown { x, y });
    }

    let mut driver = FrameDriver::new(width, height, &mut host)
        .context("failed to create headless surface")?
        .with_fps_window(config.fps_window_ms);
    let generation_start = std::time::Instant::now();
    driver.run(demo, &mut host)?;
    info!(
        "{} frames generated in {:.2?}",
        driver.frames_drawn(),
        generation_start.elapsed()
    );

    if let Some(status) = host.status("debug") {
        info!("Last frame: {}", status);
    }
    host.save_last_frame(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    Ok(())
}

#[cfg(feature = "window")]
fn open_window(title: &str) -> Result<Box<dyn Host>> {
    Ok(Box::new(raydemos::host::WindowHost::new(title)))
}

#[cfg(not(feature = "window"))]
fn open_window(_title: &str) -> Result<Box<dyn Host>> {
    Err(raydemos::error::HostError::WindowUnavailable.into())
}

fn run_windowed(config: &DemoConfig, demo: &mut dyn Demo) -> Result<()> {
    let title = format!("raydemos - {}", demo.name());
    let (width, height) = demo.size();
    let mut host = open_window(&title)?;
    let mut driver = FrameDriver::new(width, height, host.as_mut())
        .context("failed to open window")?
        .with_fps_window(config.fps_window_ms);
    driver.run(demo, host.as_mut())?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let mut demo = build_demo(&config);

    let (width, height) = demo.size();
    info!("Demo: {}, resolution: {}x{}", demo.name(), width, height);

    if args.headless {
        run_headless(&args, &config, demo.as_mut())
    } else {
        run_windowed(&config, demo.as_mut())
    }
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("raydemos - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
