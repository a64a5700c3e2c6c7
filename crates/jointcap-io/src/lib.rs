#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Per-pass export context.
///
/// Carries the owning actor's display name and the output root explicitly, instead of
/// reading them from ambient scene state.
pub mod context;

/// Error types for export operations.
pub mod error;

/// Captured RGBA frames and their PNG encoding.
pub mod frame;

/// Per-artifact outcome of an export.
pub mod report;

/// Structured output locations, resolved to paths only at the file-system boundary.
pub mod target;

/// Text and JSON file writers.
pub mod writer;

pub use context::ExportContext;
pub use error::ExportError;
pub use frame::RgbaFrame;
pub use report::{ExportReport, FailedArtifact};
pub use target::ExportTarget;
