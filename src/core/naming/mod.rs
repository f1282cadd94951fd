//! Naming engine: case conversion, sanitization, templates, and paths
//!
//! Everything here is pure and synchronous. The export coordinator calls
//! [`PathBuilder`] once per variant attempt; the submodules are exposed for
//! direct use and testing.

pub mod case;
pub mod path;
pub mod sanitize;
pub mod template;

pub use case::apply_case;
pub use path::PathBuilder;
pub use sanitize::sanitize;
pub use template::{resolve, PlaceholderValues};
