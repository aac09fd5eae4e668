use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixelator::models::AppConfig;
use pixelator::rendering::{read_png, render_ramp, write_png, SWATCH_GAP};
use pixelator::services::FilterPipeline;
use pixelator_engine::gradient::DEFAULT_STEPS;
use pixelator_engine::{
    generate_gradient, DistanceFormula, FilterKind, Gradient, PaletteStrategy, PerceptionLevel,
    Pixel,
};

#[derive(Parser)]
#[command(name = "pixelator")]
#[command(about = "Pixelator - perceptual color quantization and pixel-art filters")]
struct Cli {
    /// YAML configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a filter to a PNG image
    Filter {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Filter name (see `pixelator filters`)
        #[arg(short, long, default_value = "grid-weight")]
        filter: FilterKind,

        /// Color distance formula: cie76, cie94 or ciede2000
        #[arg(short, long)]
        distance: Option<DistanceFormula>,

        /// Palette for the linear-difference scans: linear or gradient
        #[arg(long)]
        palette: Option<PaletteStrategy>,

        /// Saturation factor applied before filtering (1.0 = unchanged)
        #[arg(long)]
        saturation: Option<f32>,

        /// Contrast amount applied before filtering (0 = unchanged)
        #[arg(long, allow_hyphen_values = true)]
        contrast: Option<i32>,

        /// Number of colors for the cluster filter
        #[arg(short = 'k', long)]
        clusters: Option<usize>,
    },
    /// Print the k-means palette of a PNG image as hex colors
    Palette {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of colors
        #[arg(short = 'k', long)]
        clusters: Option<usize>,

        /// Seed for k-means++ initialization
        #[arg(long)]
        seed: Option<u64>,

        /// Stop refining after this many milliseconds
        #[arg(long)]
        time_budget_ms: Option<u64>,
    },
    /// Write a gradient as a strip of color swatches
    Ramp {
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Start color as hex (e.g. "#FF0000")
        #[arg(long)]
        start: Option<Pixel>,

        /// End color as hex (e.g. "#0000FF")
        #[arg(long)]
        end: Option<Pixel>,

        /// Number of swatches
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: usize,

        /// Swatch edge length in pixels
        #[arg(long, default_value_t = pixelator::rendering::SWATCH_SIZE)]
        swatch: usize,
    },
    /// Compare two colors under every distance formula
    Compare {
        /// First color as hex
        first: Pixel,

        /// Second color as hex
        second: Pixel,
    },
    /// List available filters
    Filters,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelator=info,pixelator_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Filter {
            input,
            output,
            filter,
            distance,
            palette,
            saturation,
            contrast,
            clusters,
        } => {
            let mut config = config;
            if let Some(distance) = distance {
                config.distance = distance.to_string();
            }
            if let Some(palette) = palette {
                config.linear_palette = palette.to_string();
            }
            if saturation.is_some() {
                config.adjust.saturation = saturation;
            }
            if contrast.is_some() {
                config.adjust.contrast = contrast;
            }
            if let Some(k) = clusters {
                config.cluster.size = k;
            }
            run_filter_command(&config, filter, &input, &output)
        }
        Commands::Palette {
            input,
            clusters,
            seed,
            time_budget_ms,
        } => {
            let mut config = config;
            if let Some(k) = clusters {
                config.cluster.size = k;
            }
            if let Some(seed) = seed {
                config.cluster.seed = seed;
            }
            if time_budget_ms.is_some() {
                config.cluster.time_budget_ms = time_budget_ms;
            }
            run_palette_command(&config, &input)
        }
        Commands::Ramp {
            output,
            start,
            end,
            steps,
            swatch,
        } => run_ramp_command(&output, start, end, steps, swatch),
        Commands::Compare { first, second } => {
            run_compare_command(first, second);
            Ok(())
        }
        Commands::Filters => {
            run_filters_command();
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::default()),
    }
}

fn run_filter_command(
    config: &AppConfig,
    filter: FilterKind,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let pipeline = FilterPipeline::new(config)?;
    pipeline.process_file(filter, input, output)?;
    println!("Filtered {} with {} -> {}", input.display(), filter, output.display());
    Ok(())
}

fn run_palette_command(config: &AppConfig, input: &Path) -> anyhow::Result<()> {
    let pipeline = FilterPipeline::new(config)?;
    let image = read_png(input)?;
    let palette = pipeline.cluster_palette(&image)?;

    for color in palette.colors() {
        println!("{}", color.to_hex());
    }
    if !palette.converged() {
        eprintln!("Stopped before converging; centroids may still move");
    }
    Ok(())
}

fn run_ramp_command(
    output: &Path,
    start: Option<Pixel>,
    end: Option<Pixel>,
    steps: usize,
    swatch: usize,
) -> anyhow::Result<()> {
    let defaults = Gradient::default();
    let start = start.unwrap_or(defaults.start());
    let end = end.unwrap_or(defaults.end());

    let colors = generate_gradient(start, end, steps);
    if colors.is_empty() {
        anyhow::bail!("a ramp needs at least one step");
    }
    let ramp = render_ramp(&colors, swatch.max(1), SWATCH_GAP)?;
    write_png(output, &ramp)?;

    let hex: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
    println!("{}", hex.join(" "));
    println!("Rendered {}", output.display());
    Ok(())
}

fn run_compare_command(first: Pixel, second: Pixel) {
    println!("{} vs {}", first.to_hex(), second.to_hex());
    for formula in DistanceFormula::ALL {
        let d = first.difference(second, formula);
        let level = PerceptionLevel::from_distance(d);
        println!(
            "  {:<10} {:>8.3}  level {} ({:?})",
            formula.as_str(),
            d,
            level.rank(),
            level
        );
    }
    let level = PerceptionLevel::between(first, second);
    println!(
        "  similar: {}",
        if level.is_similar() { "yes" } else { "no" }
    );
}

fn run_filters_command() {
    println!("Available filters:\n");
    for kind in FilterKind::ALL {
        println!("  {:<20} {}", kind.as_str(), kind.description());
    }
}
