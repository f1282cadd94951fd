//! Icon data providers

pub mod iconify;
pub mod traits;

pub use iconify::IconifyDirProvider;
pub use traits::IconDataProvider;
