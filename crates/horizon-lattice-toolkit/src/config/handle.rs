//! Shared configuration handle.

use std::sync::Arc;

use parking_lot::RwLock;

use super::ToolkitConfig;

/// A cloneable handle to a configuration shared by several callers.
///
/// Writers reconfigure the base size at setup time; evaluators take a
/// [`snapshot`](Self::snapshot) once per batch so that every call in the batch
/// sees the same base, even if the handle is updated concurrently.
///
/// # Example
///
/// ```
/// use horizon_lattice_toolkit::prelude::ConfigHandle;
///
/// let handle = ConfigHandle::default();
/// let before = handle.snapshot();
///
/// handle.set_base_px(10.0);
/// assert_eq!(before.base_px(), 16.0);
/// assert_eq!(handle.base_px(), 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<ToolkitConfig>>,
}

impl ConfigHandle {
    /// Create a handle holding the given configuration.
    pub fn new(config: ToolkitConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy out the current configuration.
    pub fn snapshot(&self) -> ToolkitConfig {
        *self.inner.read()
    }

    /// The current base pixel size.
    pub fn base_px(&self) -> f64 {
        self.inner.read().base_px()
    }

    /// Set the base pixel size used by subsequent snapshots.
    pub fn set_base_px(&self, base_px: f64) {
        let mut config = self.inner.write();
        tracing::debug!(from = config.base_px(), to = base_px, "base pixel size changed");
        *config = config.with_base_px(base_px);
    }

    /// Replace the whole configuration.
    pub fn replace(&self, config: ToolkitConfig) {
        *self.inner.write() = config;
    }
}

impl From<ToolkitConfig> for ConfigHandle {
    fn from(config: ToolkitConfig) -> Self {
        Self::new(config)
    }
}
