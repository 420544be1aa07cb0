//! Command-line interface for batch processing, generation and scripts

use crate::generation::{Board, Country, Direction, Flag, PatternGenerator, Rainbow};
use crate::io::configuration::{DEFAULT_MOSAIC_SEEDS, DEFAULT_SEED, OUTPUT_SEPARATOR};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{is_supported_image, load_raster, save_raster};
use crate::io::progress::ProgressManager;
use crate::io::script::run_script_file;
use crate::pipeline::{Operation, Pattern};
use crate::transform::Mosaic;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "rasterops")]
#[command(
    author,
    version,
    about = "Transform and generate 24-bit raster images"
)]
/// Command-line arguments for the raster tool
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: CliCommand,

    /// Random seed for reproducible mosaics
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Top-level subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Apply operations to an image file or every image in a directory
    Process {
        /// Input image file or directory to process
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Operation to apply; repeat to chain several in order
        #[arg(short, long = "op", value_enum, required = true)]
        ops: Vec<OperationKind>,

        /// Requested seed count for the mosaic operation
        #[arg(long, default_value_t = DEFAULT_MOSAIC_SEEDS)]
        seeds: usize,

        /// Process files even if output exists
        #[arg(short, long)]
        no_skip: bool,
    },

    /// Generate a pattern image
    Generate {
        /// Where to write the generated image
        #[arg(short, long)]
        output: PathBuf,

        /// Pattern to generate
        #[command(subcommand)]
        pattern: PatternCommand,
    },

    /// Run a command script
    Script {
        /// Script file, one command per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Operations available to `process`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Gaussian blur
    Blur,
    /// Sharpen
    Sharpen,
    /// Luma greyscale
    Greyscale,
    /// Sepia tone
    Sepiatone,
    /// Black and white error diffusion
    Dither,
    /// Nearest-seed region averaging
    Mosaic,
}

impl OperationKind {
    /// Word used in output filenames and scripts
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
            Self::Greyscale => "greyscale",
            Self::Sepiatone => "sepiatone",
            Self::Dither => "dither",
            Self::Mosaic => "mosaic",
        }
    }

    /// Build the operation, using `seeds` and `rng_seed` for mosaics
    ///
    /// # Errors
    ///
    /// Returns an error if a mosaic is requested with zero seeds
    pub fn build(self, seeds: usize, rng_seed: u64) -> Result<Operation> {
        match self {
            Self::Mosaic => {
                let count =
                    i64::try_from(seeds).map_err(|e| invalid_parameter("seeds", &seeds, &e))?;
                Ok(Operation::Mosaic(Mosaic::new(count)?.with_rng_seed(rng_seed)))
            }
            other => other.label().parse(),
        }
    }
}

/// Patterns available to `generate`
#[derive(Subcommand, Debug, Clone)]
pub enum PatternCommand {
    /// 8x8 checkerboard with squares of the given size
    Checkerboard {
        /// Side length of one square
        size: i64,
    },
    /// Board of arbitrary size
    Board {
        /// Image height
        height: i64,
        /// Image width
        width: i64,
        /// Side length of one square
        size: i64,
    },
    /// National flag (FR, GR or CH); width is corrected to the flag's ratio
    Flag {
        /// Country code
        country: Country,
        /// Image height
        height: i64,
        /// Requested image width
        width: i64,
    },
    /// Seven rainbow stripes
    Rainbow {
        /// Image height
        height: i64,
        /// Image width
        width: i64,
        /// Stripe orientation (h or v)
        direction: Direction,
    },
}

impl PatternCommand {
    /// Validate the arguments into a generator
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension or size is invalid
    pub fn build(&self) -> Result<Pattern> {
        Ok(match *self {
            Self::Checkerboard { size } => Pattern::Board(Board::checkerboard(size)?),
            Self::Board {
                height,
                width,
                size,
            } => Pattern::Board(Board::new(height, width, size)?),
            Self::Flag {
                country,
                height,
                width,
            } => Pattern::Flag(Flag::new(country, height, width)?),
            Self::Rainbow {
                height,
                width,
                direction,
            } => Pattern::Rainbow(Rainbow::new(height, width, direction)?),
        })
    }
}

/// Dispatches CLI commands, with progress tracking for batches
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, decoding, processing or encoding fails
    pub fn run(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            CliCommand::Process {
                target,
                ops,
                seeds,
                no_skip,
            } => self.process(&target, &ops, seeds, no_skip),
            CliCommand::Generate { output, pattern } => {
                let raster = pattern.build()?.generate();
                save_raster(&raster, &output)
            }
            CliCommand::Script { file } => run_script_file(&file, self.cli.seed).map(|_| ()),
        }
    }

    fn process(
        &mut self,
        target: &Path,
        ops: &[OperationKind],
        seeds: usize,
        no_skip: bool,
    ) -> Result<()> {
        let operations = ops
            .iter()
            .map(|kind| kind.build(seeds, self.cli.seed))
            .collect::<Result<Vec<_>>>()?;
        let suffix = ops
            .iter()
            .map(|kind| kind.label())
            .collect::<Vec<_>>()
            .join(OUTPUT_SEPARATOR);

        let files = Self::collect_files(target, &suffix, !no_skip)?;
        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            let start_time = Instant::now();
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let mut raster = load_raster(file)?;
            for operation in &operations {
                raster = operation.apply(Some(&raster))?;
            }
            save_raster(&raster, Self::get_output_path(file, &suffix))?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(file, start_time.elapsed());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Images to process under `target`, sorted, optionally skipping existing outputs
    ///
    /// Directory entries that are themselves outputs of the same operation
    /// chain are never picked up as inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a supported image nor a directory
    pub fn collect_files(target: &Path, suffix: &str, skip_existing: bool) -> Result<Vec<PathBuf>> {
        let candidates = if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a jpg, png, bmp or gif image",
                ));
            }
            vec![target.to_path_buf()]
        } else if target.is_dir() {
            let output_tail = format!("{OUTPUT_SEPARATOR}{suffix}");
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                let is_output = path
                    .file_stem()
                    .is_some_and(|stem| stem.to_string_lossy().ends_with(&output_tail));
                if path.is_file() && is_supported_image(&path) && !is_output {
                    files.push(path);
                }
            }
            files.sort();
            files
        } else {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ));
        };

        Ok(candidates
            .into_iter()
            .filter(|path| {
                let keep = !skip_existing || !Self::get_output_path(path, suffix).exists();
                if !keep {
                    info!(path = %path.display(), "Skipping (output exists)");
                }
                keep
            })
            .collect())
    }

    /// Output path `<stem>_<suffix>.<ext>` next to the input
    pub fn get_output_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SEPARATOR}{suffix}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
