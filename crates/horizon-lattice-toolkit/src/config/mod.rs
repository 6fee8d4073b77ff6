//! Toolkit configuration.

mod handle;
mod options;

pub use handle::ConfigHandle;
pub use options::{BASE_PX_OPTION, DEFAULT_BASE_PX, ToolkitConfig};
