//! Core engine: naming, rendering, and export orchestration

pub mod export;
pub mod naming;
pub mod render;
