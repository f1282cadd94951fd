//! External integration adapters
//!
//! Adapters keep I/O and third-party rendering behind traits so the export
//! core stays testable with in-memory fakes.

pub mod provider;
pub mod raster;
