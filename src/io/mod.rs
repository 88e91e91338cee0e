//! Input/output operations and error handling

/// Command-line interface and generation runner
pub mod cli;
/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// Iteration progress display
pub mod progress;
/// Plain-text export of the visible tile set
pub mod report;
