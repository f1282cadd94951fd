//! Export orchestration
//!
//! The coordinator owns the run lifecycle; batch accounting and the run
//! summary live in their own submodules.

pub mod batch;
pub mod coordinator;
pub mod summary;

pub use batch::IconOutcome;
pub use coordinator::Exporter;
pub use summary::{ExportSummary, RunReport};
