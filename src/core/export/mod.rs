//! Export orchestration
//!
//! This module provides the export run for Shiplabel:
//! - Export coordination and orchestration
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::{is_possibly_truncated, ExportCoordinator};
pub use summary::ExportSummary;
