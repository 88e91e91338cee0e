//! Command-line interface for generating and exporting tile patterns

use crate::algorithm::executor::{GenerationSettings, GrowthEngine};
use crate::analysis::census::PatternCensus;
use crate::io::configuration::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_QUANTIZATION_STEP, DEFAULT_SEED, DEFAULT_TILE_SCALE,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, REPORT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::GenerationProgress;
use crate::io::report::export_tile_report;
use crate::spatial::prototile::Decoration;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pentile")]
#[command(
    author,
    version,
    about = "Grow aperiodic kite/dart tile patterns over a viewport"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Viewport width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub height: f64,

    /// Tile edge length in pixels
    #[arg(short = 'c', long, default_value_t = DEFAULT_TILE_SCALE)]
    pub scale: f64,

    /// Initial rotation of the seed tile in degrees
    #[arg(short, long, default_value_t = 0)]
    pub rotation: i32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum iterations before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: usize,

    /// Decoration to record per tile: none, amman or arcs
    #[arg(short, long, default_value = "none")]
    pub decoration: String,

    /// Output file for the tile report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a pattern census after generation
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the decoration argument
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for any value other than `none`,
    /// `amman` or `arcs`.
    pub fn parse_decoration(&self) -> Result<Decoration> {
        match self.decoration.as_str() {
            "none" => Ok(Decoration::None),
            "amman" => Ok(Decoration::Amman),
            "arcs" => Ok(Decoration::Arcs),
            other => Err(invalid_parameter(
                "decoration",
                &other,
                &"expected one of: none, amman, arcs",
            )),
        }
    }

    /// Settings assembled from the parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error when the decoration argument does
    /// not parse. Numeric arguments are validated by the engine itself.
    pub fn settings(&self) -> Result<GenerationSettings> {
        Ok(GenerationSettings {
            width: self.width,
            height: self.height,
            scale: self.scale,
            rotation: self.rotation,
            decoration: self.parse_decoration()?,
            seed: self.seed,
            max_iterations: self.iterations,
            quantization_step: DEFAULT_QUANTIZATION_STEP,
        })
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("pentile{REPORT_SUFFIX}.txt")))
    }
}

/// Orchestrates one generation run with progress and export
pub struct GenerationRunner {
    cli: Cli,
    progress: GenerationProgress,
}

impl GenerationRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = GenerationProgress::new(!cli.should_show_progress());
        Self { cli, progress }
    }

    /// Generate the pattern and write the tile report
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation, the growth loop
    /// hits a logic defect or the report cannot be written.
    pub fn run(&self) -> Result<()> {
        let mut engine = GrowthEngine::new(self.cli.settings()?)?;

        // The progress display needs per-iteration access, so the loop is
        // driven here instead of through GrowthEngine::generate.
        loop {
            if engine.stats().iterations >= engine.settings().max_iterations {
                break;
            }
            if !engine.run_iteration()? {
                break;
            }
            self.progress
                .update(engine.stats().iterations, engine.visible_count());
        }
        self.progress
            .finish(engine.stats().iterations, engine.visible_count());

        export_tile_report(&engine, &self.cli.output_path())?;

        if self.cli.stats {
            let census = PatternCensus::collect(&engine);
            // Census output is the point of the --stats flag
            #[allow(clippy::print_stdout)]
            {
                println!("{census}");
            }
        }

        Ok(())
    }
}
