//! Splineview - terminal viewer for Catmull-Rom spline samples and control points.

use anyhow::{Context, Result};
use clap::Parser;
use splineview::app::{App, DEFAULT_CONTROL_FILE, DEFAULT_SPLINE_FILE};
use splineview::surface::{HeadlessSurface, Presenter, TerminalSurface};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "splineview")]
#[command(about = "Compare a sampled Catmull-Rom spline against its control points", long_about = None)]
struct Args {
    /// CSV file with the control points (columns x, y)
    #[arg(long, default_value = DEFAULT_CONTROL_FILE)]
    control: PathBuf,

    /// CSV file with the spline samples (columns x, y)
    #[arg(long, default_value = DEFAULT_SPLINE_FILE)]
    spline: PathBuf,

    /// Render off-screen and print the figure instead of opening the terminal view
    #[arg(long)]
    headless: bool,

    /// Size of the off-screen surface as COLSxROWS
    #[arg(long, default_value = "100x36", value_parser = parse_size)]
    size: (u16, u16),

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting splineview");
    }

    let app = App::new(args.control, args.spline);

    if args.headless {
        let (width, height) = args.size;
        let mut surface = HeadlessSurface::new(width, height)?;
        app.run(&mut surface)?;
        println!("{}", surface.to_text());
    } else {
        // Load before taking over the terminal so errors print to a normal screen
        let figure = app.prepare()?;
        let mut surface = TerminalSurface::open()?;
        surface.present(&figure)?;
    }

    tracing::info!("splineview exited");
    Ok(())
}

fn parse_size(s: &str) -> std::result::Result<(u16, u16), String> {
    let (cols, rows) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected COLSxROWS, got `{}`", s))?;
    let parse = |v: &str| -> std::result::Result<u16, String> {
        match v.trim().parse::<u16>() {
            Ok(0) => Err("size must be non-zero".to_string()),
            Ok(n) => Ok(n),
            Err(e) => Err(format!("invalid size `{}`: {}", v, e)),
        }
    };
    Ok((parse(cols)?, parse(rows)?))
}
