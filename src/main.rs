use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{info, warn};

use fermi_surface::config::{
    DEFAULT_BRANCH_INDEX, DEFAULT_GRID_RANGE, DEFAULT_GRID_SIZE, DEFAULT_VALENCE_ELECTRONS, GridSpec,
};
use fermi_surface::fermi::render_ascii;
use fermi_surface::{FermiSurface, FermiSurfaceReport, fermi_radius_from_valence};

#[derive(Parser)]
#[command(name = "fermi-surface")]
#[command(about = "Free-electron Fermi surfaces of a 2D square lattice (Harrison construction)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one Fermi-surface branch on a k-space grid
    Classify {
        #[command(flatten)]
        radius: RadiusArgs,

        #[command(flatten)]
        grid: GridArgs,

        /// Branch index n: points covered by at least n disks
        #[arg(short, long, default_value_t = DEFAULT_BRANCH_INDEX)]
        branch: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Tabulate the filled area of every non-empty branch
    Branches {
        #[command(flatten)]
        radius: RadiusArgs,

        #[command(flatten)]
        grid: GridArgs,
    },
    /// Show the lattice points selected for a Fermi radius
    Range {
        #[command(flatten)]
        radius: RadiusArgs,
    },
}

#[derive(Args)]
struct RadiusArgs {
    /// Valence electrons per unit cell; sets r = sqrt(Z / 2π)
    #[arg(short = 'z', long, default_value_t = DEFAULT_VALENCE_ELECTRONS)]
    valence_electrons: f64,

    /// Fermi radius, overriding the valence electron count
    #[arg(short, long)]
    radius: Option<f64>,
}

impl RadiusArgs {
    /// Fermi radius and, when it was derived from it, the electron count
    fn resolve(&self) -> anyhow::Result<(f64, Option<f64>)> {
        match self.radius {
            Some(radius) => Ok((radius, None)),
            None => {
                let radius = fermi_radius_from_valence(self.valence_electrons)
                    .context("Failed to derive the Fermi radius")?;
                Ok((radius, Some(self.valence_electrons)))
            }
        }
    }
}

#[derive(Args)]
struct GridArgs {
    /// Samples per axis
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Half width of the sampled square [-range, range]²
    #[arg(short = 'g', long, default_value_t = DEFAULT_GRID_RANGE)]
    grid_range: f64,
}

impl GridArgs {
    fn spec(&self) -> GridSpec {
        GridSpec::new(self.grid_size, self.grid_range)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One-line summary
    Summary,
    /// Character preview of the branch
    Ascii,
    /// Axes and indicator grid as JSON for an external renderer
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting fermi-surface v{}", fermi_surface::VERSION);

    match cli.command {
        Commands::Classify {
            radius,
            grid,
            branch,
            format,
            output,
        } => classify(&radius, &grid, branch, format, output),
        Commands::Branches { radius, grid } => tabulate_branches(&radius, &grid),
        Commands::Range { radius } => show_range(&radius),
    }
}

fn classify(
    radius_args: &RadiusArgs,
    grid_args: &GridArgs,
    branch: i64,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let (radius, valence_electrons) = radius_args.resolve()?;
    let spec = grid_args.spec();
    info!("Classifying branch {} for r = {:.4}", branch, radius);

    let surface = FermiSurface::covering(radius, &spec)?;
    let grid = surface.classification_grid(branch, &spec)?;
    let report = FermiSurfaceReport::new(&surface, &grid, valence_electrons);

    if grid.filled_count() == 0 {
        warn!("Branch {} is empty on this grid", branch);
    }

    let rendered = match format {
        OutputFormat::Summary => format!("{}\n", report.summary()),
        OutputFormat::Ascii => format!("{}\n{}", report.summary(), render_ascii(&grid, 80)),
        OutputFormat::Json => {
            serde_json::to_string(&report).context("Failed to serialize the report")? + "\n"
        }
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote branch {} to {}", branch, path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn tabulate_branches(radius_args: &RadiusArgs, grid_args: &GridArgs) -> anyhow::Result<()> {
    let (radius, _) = radius_args.resolve()?;
    let spec = grid_args.spec();

    let surface = FermiSurface::covering(radius, &spec)?;
    let overlaps = surface.overlap_grid(&spec)?;
    info!(
        "r = {:.4}: branches 1..={} are populated",
        radius,
        overlaps.max_overlap()
    );

    println!("{:>6}  {:>10}  {:>10}", "branch", "fraction", "area");
    for n in 1..=overlaps.max_overlap() {
        let branch = overlaps.branch(n as i64)?;
        println!(
            "{:>6}  {:>10.6}  {:>10.6}",
            n,
            branch.filled_fraction(),
            branch.filled_area()
        );
    }
    Ok(())
}

fn show_range(radius_args: &RadiusArgs) -> anyhow::Result<()> {
    let (radius, _) = radius_args.resolve()?;
    let lattice = fermi_surface::select_lattice_range(radius)?;
    let k = lattice.half_extent().unwrap_or(0);
    println!(
        "r = {:.4}: {} lattice points in [-{k}, {k}]²",
        radius,
        lattice.len(),
        k = k
    );
    Ok(())
}
