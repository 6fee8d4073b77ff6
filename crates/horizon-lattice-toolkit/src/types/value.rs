//! Stylesheet value node types.
//!
//! These are the node shapes the toolkit functions read and produce:
//! dimensions, keywords, space-separated composites and colors.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_toolkit::prelude::*;
//!
//! let px = Dimension::px(16.0);
//! assert_eq!(px.as_number(), Some(16.0));
//! assert_eq!(px.unit_token(), Some("px"));
//!
//! let margin: CompositeValue = vec![
//!     ValueNode::from(Dimension::number(32.0)),
//!     ValueNode::keyword("auto"),
//!     ValueNode::from(Dimension::percent(100.0)),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(margin.len(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The `auto` keyword.
pub const AUTO: &str = "auto";

/// A unit descriptor in numerator/denominator form.
///
/// Only the first numerator token is consulted when converting; the
/// denominator is carried for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Unit {
    /// Numerator unit tokens (e.g. `["px"]`).
    pub numerator: Vec<String>,
    /// Denominator unit tokens.
    pub denominator: Vec<String>,
}

impl Unit {
    /// A unitless descriptor.
    pub fn none() -> Self {
        Self::default()
    }

    /// A unit with a single numerator token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            numerator: vec![token.into()],
            denominator: vec![],
        }
    }

    /// The first numerator token, if any.
    pub fn first_numerator(&self) -> Option<&str> {
        self.numerator.first().map(String::as_str)
    }

    /// Check if this descriptor carries no units at all.
    pub fn is_empty(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }
}

/// The magnitude of a dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    /// A numeric value.
    Number(f64),
    /// The `auto` sentinel.
    Auto,
    /// Anything else the host left unresolved (e.g. a variable reference).
    Reference(String),
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Number(v) => write!(f, "{v}"),
            Magnitude::Auto => f.write_str(AUTO),
            Magnitude::Reference(r) => f.write_str(r),
        }
    }
}

/// A magnitude paired with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// The magnitude.
    pub value: Magnitude,
    /// The unit descriptor.
    pub unit: Unit,
}

impl Dimension {
    /// Create a numeric dimension with the given unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value: Magnitude::Number(value),
            unit,
        }
    }

    /// Create a numeric dimension with a single unit token.
    pub fn with_unit(value: f64, token: impl Into<String>) -> Self {
        Self::new(value, Unit::new(token))
    }

    /// Create a unitless number.
    pub fn number(value: f64) -> Self {
        Self::new(value, Unit::none())
    }

    /// Create a pixel value.
    pub fn px(value: f64) -> Self {
        Self::with_unit(value, "px")
    }

    /// Create a percentage value.
    pub fn percent(value: f64) -> Self {
        Self::with_unit(value, "%")
    }

    /// Create an `auto` dimension.
    pub fn auto() -> Self {
        Self {
            value: Magnitude::Auto,
            unit: Unit::none(),
        }
    }

    /// Create a dimension whose magnitude is an unresolved reference.
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            value: Magnitude::Reference(name.into()),
            unit: Unit::none(),
        }
    }

    /// The numeric magnitude, if this dimension has one.
    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            Magnitude::Number(v) => Some(v),
            _ => None,
        }
    }

    /// The first numerator unit token.
    pub fn unit_token(&self) -> Option<&str> {
        self.unit.first_numerator()
    }
}

/// An ordered, space-separated list of values (CSS shorthand).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeValue(pub Vec<ValueNode>);

impl CompositeValue {
    /// Create a composite from its elements.
    pub fn new(values: Vec<ValueNode>) -> Self {
        Self(values)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValueNode> {
        self.0.iter()
    }
}

impl FromIterator<ValueNode> for CompositeValue {
    fn from_iter<I: IntoIterator<Item = ValueNode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An RGB color with channels nominally in `0..=255`.
///
/// Channels are kept as `f64` and are not clamped; blending may leave them
/// fractional or out of gamut.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red, green, blue.
    pub rgb: [f64; 3],
}

impl Color {
    /// Create a color from its channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Red channel.
    pub fn red(&self) -> f64 {
        self.rgb[0]
    }

    /// Green channel.
    pub fn green(&self) -> f64 {
        self.rgb[1]
    }

    /// Blue channel.
    pub fn blue(&self) -> f64 {
        self.rgb[2]
    }
}

/// Blend strength in percent. Only the numeric value is read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Percentage {
    /// Value in percent (nominally `0..=100`).
    pub value: f64,
}

impl Percentage {
    /// Create a percentage.
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Read a percentage from a numeric dimension, ignoring its unit.
    pub fn from_node(node: &ValueNode) -> Option<Self> {
        match node {
            ValueNode::Dimension(dim) => dim.as_number().map(Self::new),
            _ => None,
        }
    }

    /// The percentage as a fraction (`50%` is `0.5`). Not clamped.
    pub fn fraction(&self) -> f64 {
        self.value / 100.0
    }
}

/// Relative units a pixel value can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetUnit {
    /// Relative to the root font size.
    Rem,
    /// Relative to the current font size.
    Em,
}

impl TargetUnit {
    /// The unit token.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetUnit::Rem => "rem",
            TargetUnit::Em => "em",
        }
    }
}

impl fmt::Display for TargetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rem" => Ok(Self::Rem),
            "em" => Ok(Self::Em),
            _ => Err(Error::invalid_value(s, "expected 'rem' or 'em'")),
        }
    }
}

/// A stylesheet value node.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    /// A magnitude with unit.
    Dimension(Dimension),
    /// A bare identifier such as `auto`.
    Keyword(String),
    /// A space-separated list.
    Composite(CompositeValue),
    /// An RGB color.
    Color(Color),
}

impl ValueNode {
    /// Create a keyword node.
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::Keyword(name.into())
    }

    /// Check if this node is the `auto` sentinel, either as a keyword or a
    /// dimension magnitude.
    pub fn is_auto(&self) -> bool {
        match self {
            ValueNode::Keyword(k) => k.eq_ignore_ascii_case(AUTO),
            ValueNode::Dimension(d) => d.value == Magnitude::Auto,
            _ => false,
        }
    }

    /// Short description of the node shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueNode::Dimension(_) => "dimension",
            ValueNode::Keyword(_) => "keyword",
            ValueNode::Composite(_) => "composite value",
            ValueNode::Color(_) => "color",
        }
    }
}

impl From<Dimension> for ValueNode {
    fn from(value: Dimension) -> Self {
        Self::Dimension(value)
    }
}

impl From<CompositeValue> for ValueNode {
    fn from(value: CompositeValue) -> Self {
        Self::Composite(value)
    }
}

impl From<Color> for ValueNode {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}
