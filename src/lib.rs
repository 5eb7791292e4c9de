//! # Trueno-Raster
//!
//! Integer rasterization primitives and polygon fill strategies, with a
//! harness that times interchangeable algorithms against each other.
//!
//! Every algorithm works on an integer cell grid and returns the ordered
//! trace of cells it emits. Plotting is a separate step through the
//! [`PixelSink`](render::PixelSink) trait, so the same trace can be counted,
//! compared, animated or written to a PNG.
//!
//! ## Features
//!
//! - **Lines**: DDA and Bresenham
//! - **Circles**: midpoint and Bresenham, 8-way symmetric
//! - **Fills**: scanline, 4- and 8-connected flood, boundary
//! - **Benchmarking**: per-strategy timing with SIMD statistics via trueno
//! - **Output**: PNG export with configurable cell size
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let square = Polygon::closed([(0, 0), (4, 0), (4, 4), (0, 4)]);
//! let bounds = GridBounds::new(16, 16);
//!
//! let scanline = FillAlgorithm::Scanline.fill(&square, None, bounds);
//! assert_eq!(scanline.len(), 25);
//!
//! let seed = interior_seed(&square);
//! let flood = FillAlgorithm::Flood4.fill(&square, seed, bounds);
//! assert!(flood.to_set().is_subset(&scanline.to_set()));
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `raster-bench` command line runner
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., van Dam, A., et al. (1990). *Computer Graphics: Principles and Practice*.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Grid coordinates move between i32, i64, u32 and f64 constantly
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type carried through to the sink.
pub mod color;

/// Grid points, segments, circles, polygons and grid extents.
pub mod geometry;

/// Row-aligned RGBA pixel buffer.
pub mod framebuffer;

/// Cooperative cancellation.
pub mod cancel;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Line and circle rasterization, sinks and playback.
pub mod render;

/// Point classification and polygon fill strategies.
pub mod fill;

/// Comparative timing harness.
pub mod benchmark;

// ============================================================================
// Output and Configuration
// ============================================================================

/// Output encoders (PNG).
pub mod output;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::benchmark::{Benchmark, BenchmarkResult, Repetitions};
    pub use crate::cancel::CancelToken;
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::fill::{interior_seed, is_inside, FillAlgorithm, FillOutcome};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, GridBounds, GridPoint, PixelSet, Polygon, Segment};
    pub use crate::output::PngEncoder;
    pub use crate::render::{CircleAlgorithm, LineAlgorithm, PixelSink, Playback, Rasterizer};
}
