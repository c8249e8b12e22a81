// File: crates/graph-demo/src/main.rs
// Summary: Demo plots a named function on a PlotSurface and exports the scene to CSV.

mod export;
mod functions;

use anyhow::{Context, Result};
use clap::Parser;
use graph_core::{theme, PlotSurface, SurfaceOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::functions::NamedFunction;

#[derive(Parser, Debug)]
#[command(name = "graph-demo")]
#[command(about = "Sample a function of x and export the 3D scene as CSV", long_about = None)]
struct Args {
    /// Function to plot
    #[arg(short, long, value_enum, default_value_t = NamedFunction::Square)]
    function: NamedFunction,

    /// Start of the x sweep
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    min_x: f64,

    /// End of the x sweep (may be below --min-x for a reversed sweep)
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    max_x: f64,

    /// Number of intervals; one more sample than this is taken
    #[arg(short = 'n', long, default_value_t = 200)]
    points: usize,

    /// Color preset (classic, dark, high-contrast)
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Axis indicator length
    #[arg(long, default_value_t = graph_core::types::AXIS_LENGTH)]
    axis_length: f64,

    /// Output CSV path
    #[arg(short, long, default_value = "target/out/scene.csv")]
    out: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_logging(log: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_ref())?;

    let options = SurfaceOptions { axis_length: args.axis_length, ..SurfaceOptions::default() };
    let mut surface = PlotSurface::with_options(options).context("invalid surface options")?;
    let f = args.function;

    let kept = surface
        .plot(|x| f.eval(x), args.min_x, args.max_x, args.points)
        .with_context(|| format!("plotting {} over [{}, {}]", f.formula(), args.min_x, args.max_x))?
        .len();
    let requested = args.points.saturating_add(1);
    tracing::info!(
        function = f.formula(),
        kept,
        dropped = requested - kept,
        "plotted {} of {} samples",
        kept,
        requested
    );
    if kept == 0 {
        tracing::warn!("no finite samples in range; scene holds only the axes");
    }

    let theme = theme::find(&args.theme);
    if !theme.name.eq_ignore_ascii_case(&args.theme) {
        tracing::warn!(requested = %args.theme, "unknown theme, using {}", theme.name);
    }

    export::write_scene_csv(&surface.scene(), &theme, &args.out)?;
    tracing::info!(path = %args.out.display(), elements = surface.scene().len(), "wrote scene");
    println!("Wrote {}", args.out.display());
    Ok(())
}
