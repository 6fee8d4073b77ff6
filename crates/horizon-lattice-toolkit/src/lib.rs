//! Stylesheet value functions for Horizon Lattice.
//!
//! This crate provides the functions a stylesheet preprocessor can expose
//! through its function-extension mechanism:
//!
//! - **`rem(value, base?)` / `em(value, base?)`**: convert pixel or unitless
//!   values (including space-separated shorthand) into relative units
//! - **`tint(color, percentage)` / `shade(color, percentage)`**: mix a color
//!   toward white or black, channel by channel
//! - **Configuration**: a base pixel size set once (`base-px=<integer>`) and
//!   shared through a [`ConfigHandle`](config::ConfigHandle)
//! - **Registry**: name/arity lookup and installation into a host function
//!   table, with host node construction through a
//!   [`NodeFactory`](registry::NodeFactory)
//!
//! # Example
//!
//! ```
//! use cssparser::ToCss;
//! use horizon_lattice_toolkit::prelude::*;
//!
//! let registry = FunctionRegistry::new(ConfigHandle::default());
//!
//! let margin = ValueNode::Composite(CompositeValue::new(vec![
//!     Dimension::number(32.0).into(),
//!     ValueNode::keyword("auto"),
//!     Dimension::number(16.0).into(),
//!     Dimension::percent(100.0).into(),
//! ]));
//! let out = registry.invoke("rem", &[margin]).unwrap();
//! assert_eq!(out.to_css_string(), "2rem auto 1rem 100%");
//! ```

pub mod blend;
pub mod config;
pub mod convert;
pub mod registry;
pub mod serialize;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::blend::BlendTarget;
    pub use crate::config::{ConfigHandle, ToolkitConfig};
    pub use crate::registry::{
        Batch, FunctionRegistry, HostFunctions, NodeFactory, ToolkitFunction, ValueTreeFactory,
    };
    pub use crate::types::{
        Color, CompositeValue, Dimension, Magnitude, Percentage, TargetUnit, Unit, ValueNode,
    };
    pub use crate::{Error, Result};
}
