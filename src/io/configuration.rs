//! Generation constants and runtime configuration defaults

// Viewport defaults
/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

// Tile geometry defaults
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SCALE: f64 = 40.0;
/// Smallest usable tile edge length
///
/// Below this the quantization grid cannot separate the closest legal
/// vertex pair and distinct vertices start merging.
pub const MIN_TILE_SCALE: f64 = 4.0;

/// Default grid step for vertex identity, in pixels
pub const DEFAULT_QUANTIZATION_STEP: f64 = 1.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum iterations before stopping
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

// Progress bar display settings
/// Iterations between spinner refreshes
pub const PROGRESS_TICK_INTERVAL: usize = 64;

// Output settings
/// Suffix added to output filenames
pub const REPORT_SUFFIX: &str = "_tiles";
