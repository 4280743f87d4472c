//! Estimation constants and runtime configuration defaults

// Box sizes
/// Default box sizes, successive powers of two
pub const DEFAULT_BOX_SIZES: [usize; 6] = [2, 4, 8, 16, 32, 64];

// Binarization
/// Intensity above which a pixel counts as foreground
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Image extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix of the JSON report file stem
pub const REPORT_SUFFIX: &str = "_fractal";
/// Suffix of the log-log plot file stem
pub const PLOT_SUFFIX: &str = "_loglog";
/// Suffix of the binarized mask file stem
pub const MASK_SUFFIX: &str = "_binary";

// Plot rendering
/// Log-log plot width in pixels
pub const PLOT_WIDTH: u32 = 640;
/// Log-log plot height in pixels
pub const PLOT_HEIGHT: u32 = 480;
/// Blank border around the plotting area in pixels
pub const PLOT_MARGIN: u32 = 40;
/// Half edge length of a sample marker in pixels
pub const PLOT_MARKER_RADIUS: u32 = 3;

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "info";
