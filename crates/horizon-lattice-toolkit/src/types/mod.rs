//! Value node types.

mod value;

pub use value::{
    AUTO, Color, CompositeValue, Dimension, Magnitude, Percentage, TargetUnit, Unit, ValueNode,
};
