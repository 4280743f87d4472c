//! Command-line interface for batch fractal dimension estimation of crack images

use crate::algorithm::estimator::DegeneratePolicy;
use crate::algorithm::scales::BoxSizeSet;
use crate::analysis::{Analysis, analyze};
use crate::io::configuration::{
    DEFAULT_BOX_SIZES, DEFAULT_LOG_FILTER, DEFAULT_THRESHOLD, MASK_SUFFIX, PLOT_SUFFIX,
    REPORT_SUFFIX, SUPPORTED_EXTENSIONS, VERBOSE_LOG_FILTER,
};
use crate::io::error::{FractalError, Result, file_system, invalid_parameter};
use crate::io::image::{export_raster_as_png, load_binary};
use crate::io::progress::{FileStage, ProgressManager};
use crate::io::report::DimensionReport;
use crate::io::visualization::export_log_log_plot;
use crate::spatial::BinaryRaster;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "crackdim")]
#[command(
    author,
    version,
    about = "Estimate the box-counting fractal dimension of binary crack images"
)]
/// Command-line arguments for the estimation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Box edge lengths in pixels, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_BOX_SIZES.to_vec())]
    pub sizes: Vec<usize>,

    /// Intensity above which a pixel is crack foreground
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Treat dark pixels as foreground
    #[arg(short, long)]
    pub invert: bool,

    /// Drop box sizes with no occupied tiles instead of failing
    #[arg(short, long)]
    pub drop_empty: bool,

    /// Write a JSON report next to each image
    #[arg(short, long)]
    pub report: bool,

    /// Write a log-log plot PNG next to each image
    #[arg(short, long)]
    pub plot: bool,

    /// Write the binarized mask PNG next to each image
    #[arg(short, long)]
    pub mask: bool,

    /// Process files even if their report exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log progress information
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Zero-count policy selected by the flags
    pub const fn degenerate_policy(&self) -> DegeneratePolicy {
        if self.drop_empty {
            DegeneratePolicy::Drop
        } else {
            DegeneratePolicy::Reject
        }
    }

    /// Validated box sizes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the list is empty or contains a zero
    pub fn box_sizes(&self) -> Result<BoxSizeSet> {
        BoxSizeSet::new(self.sizes.clone()).map_err(|e| {
            invalid_parameter("sizes", &format!("{:?}", self.sizes), &e.to_string())
        })
    }

    /// Log filter used when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// Orchestrates batch estimation of image files with progress tracking
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

    /// Process files according to CLI arguments
    ///
    /// Images whose samples cannot be fitted are reported and skipped; I/O
    /// failures abort the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target collection, image loading
    /// or output writing fails
    pub fn process(&mut self) -> Result<Vec<DimensionReport>> {
        let sizes = self.cli.box_sizes()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            if let Some(report) = self.process_file(file, index, &sizes)? {
                reports.push(report);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"file is not a supported image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(&self.cli.target)
                .map_err(|e| file_system(&self.cli.target, "read directory", e))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system(&self.cli.target, "read directory entry", e))?
                    .path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.report || !self.cli.skip_existing() {
            return true;
        }

        let report_path = Self::get_report_path(input_path);
        if report_path.exists() {
            tracing::warn!("Skipping {} (report exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        sizes: &BoxSizeSet,
    ) -> Result<Option<DimensionReport>> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let raster = load_binary(input_path, self.cli.threshold, self.cli.invert)?;
        tracing::info!(
            "Loaded {} ({}x{}, {} foreground pixels)",
            input_path.display(),
            raster.height(),
            raster.width(),
            raster.foreground_count()
        );

        self.set_stage(index, FileStage::Counting);
        let analysis = match analyze(&raster, sizes, self.cli.degenerate_policy()) {
            Ok(analysis) => analysis,
            Err(
                error @ (FractalError::DegenerateSample { .. }
                | FractalError::InsufficientSamples { .. }),
            ) => {
                tracing::warn!("Cannot estimate {}: {error}", input_path.display());
                self.emit(&format!("{}: {error}", input_path.display()));
                self.finish_file(index);
                return Ok(None);
            }
            Err(error) => return Err(error),
        };
        Self::log_samples(&analysis);

        self.set_stage(index, FileStage::Writing);
        let report = DimensionReport::new(display_name(input_path), &analysis);
        self.write_outputs(input_path, &raster, &analysis, &report)?;

        tracing::info!(
            "Estimated {}: D = {:.4}, R² = {:.4} in {:?}",
            input_path.display(),
            analysis.dimension(),
            analysis.fit.r_squared,
            start_time.elapsed()
        );
        self.emit(&format!(
            "{}: D = {:.4}",
            input_path.display(),
            analysis.dimension()
        ));
        self.finish_file(index);

        Ok(Some(report))
    }

    fn write_outputs(
        &self,
        input_path: &Path,
        raster: &BinaryRaster,
        analysis: &Analysis,
        report: &DimensionReport,
    ) -> Result<()> {
        if self.cli.report {
            let path = Self::get_report_path(input_path);
            report.write(&path)?;
            tracing::info!("Report written to {}", path.display());
        }

        if self.cli.plot {
            let path = Self::get_plot_path(input_path);
            export_log_log_plot(&analysis.fit, &path)?;
            tracing::info!("Plot written to {}", path.display());
        }

        if self.cli.mask {
            let path = Self::get_mask_path(input_path);
            export_raster_as_png(raster, &path)?;
            tracing::info!("Mask written to {}", path.display());
        }

        Ok(())
    }

    fn log_samples(analysis: &Analysis) {
        for sample in &analysis.samples {
            tracing::debug!(size = sample.size, count = sample.count, "box count");
        }
        if !analysis.fit.dropped_sizes.is_empty() {
            tracing::warn!(
                "Dropped empty box sizes {:?} from the fit",
                analysis.fit.dropped_sizes
            );
        }
    }

    fn set_stage(&mut self, index: usize, stage: FileStage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }

    fn finish_file(&mut self, index: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }
    }

    // Allow print for the per-file result line, the tool's primary output
    #[allow(clippy::print_stdout)]
    fn emit(&self, line: &str) {
        match self.progress_manager {
            Some(ref pm) => pm.println(line),
            None => println!("{line}"),
        }
    }

    fn get_report_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, REPORT_SUFFIX, "json")
    }

    fn get_plot_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, PLOT_SUFFIX, "png")
    }

    fn get_mask_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, MASK_SUFFIX, "png")
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

// Masks and plots written by a previous run are not new inputs
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(MASK_SUFFIX) || stem.ends_with(PLOT_SUFFIX))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
