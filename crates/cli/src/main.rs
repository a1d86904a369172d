use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use polydist::{find_nearest_vertex_traced, find_nearest_vertex_with_cfg, Refine, SearchCfg};
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod params;
mod plot;
mod provenance;
mod report;

use params::Params;
use plot::PlotData;

#[derive(Debug, Parser)]
#[command(name = "polydist")]
#[command(
    about = "Distance between a convex polygon and a non-intersecting line in logarithmic time"
)]
struct Cmd {
    /// Path to the YAML file with `polygon` and `line`
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Export polygon, line and search trace as JSON for plotting
    #[arg(long)]
    plot: bool,

    /// Where `--plot` writes its JSON (a provenance sidecar lands next to it)
    #[arg(long, default_value = "plot.json")]
    plot_out: PathBuf,

    /// Refinement after the jump phase
    #[arg(long, value_enum, default_value_t = RefineArg::Window)]
    refine: RefineArg,

    /// Log every visited vertex
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RefineArg {
    /// Fixed 5-vertex window (reference behavior)
    Window,
    /// Walk downhill from the window until no neighbour is closer
    Descend,
}

impl From<RefineArg> for Refine {
    fn from(r: RefineArg) -> Self {
        match r {
            RefineArg::Window => Refine::Window,
            RefineArg::Descend => Refine::Descend,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    run(&cmd, &mut std::io::stdout().lock())
}

fn run(cmd: &Cmd, out: &mut impl Write) -> Result<()> {
    tracing::info!(
        file = %cmd.file.display(),
        plot = cmd.plot,
        refine = ?cmd.refine,
        "run"
    );
    let params = Params::load(&cmd.file)
        .with_context(|| format!("loading parameters from {}", cmd.file.display()))?;
    tracing::info!(vertices = params.polygon.len(), line = ?params.line.coeffs(), "params_loaded");

    let cfg = SearchCfg {
        refine: cmd.refine.into(),
    };
    // Only pay for the trace when something consumes it.
    let best = if cmd.plot || cmd.verbose {
        let (best, trace) = find_nearest_vertex_traced(&params.polygon, &params.line, cfg);
        for (k, v) in trace.visits.iter().enumerate() {
            tracing::debug!(
                step = k + 1,
                phase = ?v.phase,
                index = v.index,
                x = v.point.x,
                y = v.point.y,
                "visit"
            );
        }
        if cmd.plot {
            PlotData::new(&params.polygon, &params.line, &best, &trace).write(&cmd.plot_out)?;
            let run_params = serde_json::json!({
                "refine": format!("{:?}", cmd.refine).to_lowercase(),
                "vertices": params.polygon.len(),
                "line": params.line.coeffs(),
            });
            let sidecar = provenance::write_sidecar(&cmd.plot_out, &cmd.file, &run_params)?;
            tracing::info!(
                out = %cmd.plot_out.display(),
                provenance = %sidecar.display(),
                "plot_written"
            );
        }
        best
    } else {
        find_nearest_vertex_with_cfg(&params.polygon, &params.line, cfg)
    };
    tracing::info!(index = best.index, distance = best.distance, "search_done");

    writeln!(out, "{}", report::format_min_distance(best.distance))?;
    Ok(())
}
