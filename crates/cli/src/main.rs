//! Brickfield CLI - brick mosaic model pipeline

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use brickfield_algorithms::normalize::{normalize, ClipBounds, NormalizeParams, Offset3};
use brickfield_algorithms::rasterize::rasterize;
use brickfield_core::io::{read_grid_table, read_table, write_block_set, write_raster_csv};
use brickfield_core::BlockSet;
use brickfield_palette::{resolve, ColorCatalog, ColorGuide, ColorMap};
use brickfield_render::write_layer_png;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "brickfield")]
#[command(author, version, about = "Brick mosaic model pipeline", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a grid table
    Info {
        /// Input grid table (headerless CSV)
        input: PathBuf,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Normalize a grid table and write the block set as CSV
    Normalize {
        /// Input grid table (headerless CSV)
        input: PathBuf,
        /// Output block-set CSV
        output: PathBuf,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Rasterize layers and write per-layer previews
    Build {
        /// Input grid table (headerless CSV)
        input: PathBuf,
        /// Output directory for per-layer files
        outdir: PathBuf,

        /// Layers to rasterize (default: all)
        #[arg(short, long)]
        layer: Vec<i64>,

        /// Also write elevation matrices as CSV
        #[arg(long)]
        elevation: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

/// Normalization options shared by every subcommand.
#[derive(Args)]
struct PipelineArgs {
    /// Color guide CSV with `value,name` columns
    #[arg(short, long)]
    guide: Option<PathBuf>,

    /// Use layer markers literally instead of re-leveling
    #[arg(long)]
    no_relevel: bool,

    /// Color codes to exclude (repeatable)
    #[arg(long = "exclude-color")]
    exclude_colors: Vec<u32>,

    /// Raw layer values to exclude (repeatable)
    #[arg(long = "exclude-layer")]
    exclude_layers: Vec<i64>,

    /// Offset added to every layer
    #[arg(long, default_value_t = 0)]
    offset_layer: i64,

    /// Offset added to every x position
    #[arg(long, default_value_t = 0)]
    offset_x: i64,

    /// Offset added to every y position
    #[arg(long, default_value_t = 0)]
    offset_y: i64,

    /// Clip layers above this level
    #[arg(long)]
    max_level: Option<i64>,

    /// Clip x positions above this bound
    #[arg(long)]
    max_x: Option<i64>,

    /// Clip y positions above this bound
    #[arg(long)]
    max_y: Option<i64>,
}

impl PipelineArgs {
    fn params(&self) -> NormalizeParams {
        NormalizeParams {
            relevel: !self.no_relevel,
            offset: Offset3 {
                layer: self.offset_layer,
                x: self.offset_x,
                y: self.offset_y,
            },
            clip: ClipBounds {
                max_level: self.max_level,
                max_x: self.max_x,
                max_y: self.max_y,
            },
            exclude_colors: self.exclude_colors.clone(),
            exclude_layers: self.exclude_layers.clone(),
        }
    }

    fn colors(&self) -> Result<ColorMap> {
        let catalog = ColorCatalog::builtin();
        let guide = match &self.guide {
            Some(path) => {
                let rows = read_table(path)
                    .with_context(|| format!("failed to read color guide {}", path.display()))?;
                Some(ColorGuide::parse(&rows)?)
            }
            None => None,
        };
        resolve(&catalog, guide.as_ref()).context("color guide rejected")
    }
}

// ─── Entry point ────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Info { input, pipeline } => run_info(&input, &pipeline),
        Commands::Normalize {
            input,
            output,
            pipeline,
        } => run_normalize(&input, &output, &pipeline),
        Commands::Build {
            input,
            outdir,
            layer,
            elevation,
            pipeline,
        } => run_build(&input, &outdir, &layer, elevation, &pipeline),
    }
}

fn load_block_set(input: &PathBuf, pipeline: &PipelineArgs) -> Result<BlockSet> {
    let table = read_grid_table(input)
        .with_context(|| format!("failed to read grid table {}", input.display()))?;
    let colors = pipeline.colors()?;

    let start = Instant::now();
    let set = normalize(&table, &colors, &pipeline.params())?;
    info!(
        "normalized {} rows into {} records in {:.1?}",
        table.rows.len(),
        set.len(),
        start.elapsed()
    );
    Ok(set)
}

// ─── Subcommands ────────────────────────────────────────────────────────

fn run_info(input: &PathBuf, pipeline: &PipelineArgs) -> Result<()> {
    let set = load_block_set(input, pipeline)?;

    println!("Records: {}", set.len());
    println!("Layers:  {:?}", set.layers());
    if let Some(b) = set.bounds() {
        println!(
            "Bounds:  layer {}..{}, x {}..{}, y {}..{}",
            b.min_layer, b.max_layer, b.min_x, b.max_x, b.min_y, b.max_y
        );
    }

    let mut usage: BTreeMap<&str, usize> = BTreeMap::new();
    for record in set.records() {
        if let Some(color) = &record.color {
            *usage.entry(color.name.as_str()).or_insert(0) += 1;
        }
    }
    println!("Colors:");
    for (name, count) in usage {
        println!("  {name:<24} {count}");
    }

    Ok(())
}

fn run_normalize(input: &PathBuf, output: &PathBuf, pipeline: &PipelineArgs) -> Result<()> {
    let set = load_block_set(input, pipeline)?;
    write_block_set(output, &set)
        .with_context(|| format!("failed to write block set {}", output.display()))?;
    info!("wrote {} records to {}", set.len(), output.display());
    Ok(())
}

fn run_build(
    input: &PathBuf,
    outdir: &PathBuf,
    layers: &[i64],
    elevation: bool,
    pipeline: &PipelineArgs,
) -> Result<()> {
    let set = load_block_set(input, pipeline)?;
    let layers: Vec<i64> = if layers.is_empty() {
        set.layers()
    } else {
        layers.to_vec()
    };

    std::fs::create_dir_all(outdir)
        .with_context(|| format!("failed to create {}", outdir.display()))?;

    let bar = ProgressBar::new(layers.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("static template"),
    );

    let start = Instant::now();
    for layer in &layers {
        bar.set_message(format!("layer {layer}"));
        let raster = rasterize(&set, *layer);

        let png = outdir.join(format!("layer_{layer:03}.png"));
        write_layer_png(&png, &raster)
            .with_context(|| format!("failed to write {}", png.display()))?;

        if elevation {
            let csv = outdir.join(format!("layer_{layer:03}_elevation.csv"));
            write_raster_csv(&csv, &raster.elevation)
                .with_context(|| format!("failed to write {}", csv.display()))?;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    info!(
        "rasterized {} layer(s) into {} in {:.1?}",
        layers.len(),
        outdir.display(),
        start.elapsed()
    );
    Ok(())
}
