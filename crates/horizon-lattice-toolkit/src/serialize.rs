//! Writing value nodes back out as stylesheet text.
//!
//! # Example
//!
//! ```
//! use cssparser::ToCss;
//! use horizon_lattice_toolkit::prelude::*;
//!
//! let node = ValueNode::Composite(CompositeValue::new(vec![
//!     Dimension::with_unit(2.0, "rem").into(),
//!     ValueNode::keyword("auto"),
//!     Dimension::percent(100.0).into(),
//! ]));
//! assert_eq!(node.to_css_string(), "2rem auto 100%");
//!
//! let color = ValueNode::from(Color::rgb(127.5, 127.5, 255.0));
//! assert_eq!(color.to_css_string(), "#8080ff");
//! ```

use std::fmt::{self, Write};

use cssparser::{ToCss, serialize_identifier};

use crate::blend::CHANNEL_MAX;
use crate::types::{Color, CompositeValue, Dimension, Magnitude, Unit, ValueNode};

impl ToCss for Unit {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(&self.numerator.join("*"))?;
        if !self.denominator.is_empty() {
            dest.write_char('/')?;
            dest.write_str(&self.denominator.join("*"))?;
        }
        Ok(())
    }
}

impl ToCss for Magnitude {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Magnitude::Number(v) => write!(dest, "{v}"),
            Magnitude::Auto => dest.write_str(crate::types::AUTO),
            // Unresolved references are written verbatim (e.g. `@gutter`).
            Magnitude::Reference(r) => dest.write_str(r),
        }
    }
}

impl ToCss for Dimension {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        self.value.to_css(dest)?;
        if matches!(self.value, Magnitude::Number(_)) {
            self.unit.to_css(dest)?;
        }
        Ok(())
    }
}

impl ToCss for CompositeValue {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                dest.write_char(' ')?;
            }
            value.to_css(dest)?;
        }
        Ok(())
    }
}

impl ToCss for Color {
    /// Channels are rounded and clamped to `0..=255` here; the node itself
    /// keeps the unclamped values.
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        let [r, g, b] = self.rgb.map(channel_byte);
        write!(dest, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl ToCss for ValueNode {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            ValueNode::Dimension(dim) => dim.to_css(dest),
            ValueNode::Keyword(keyword) => serialize_identifier(keyword, dest),
            ValueNode::Composite(values) => values.to_css(dest),
            ValueNode::Color(color) => color.to_css(dest),
        }
    }
}

fn channel_byte(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    channel.round().clamp(0.0, CHANNEL_MAX) as u8
}
