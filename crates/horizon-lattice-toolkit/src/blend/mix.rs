//! Tint and shade: linear per-channel mixing toward white or black.
//!
//! Unlike lightening or darkening in a hue/lightness space, tinting and
//! shading move every RGB channel toward the endpoint by the same fraction,
//! so saturation changes gradually along with lightness.
//!
//! ```text
//! color: tint(blue, 50%);
//! background: shade(red, 50%);
//! ```

use crate::types::{Color, Percentage, ValueNode};
use crate::{Error, Result};

/// Highest channel value; the white endpoint.
pub const CHANNEL_MAX: f64 = 255.0;

/// The color a blend moves toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendTarget {
    /// Mix toward white (tint).
    White,
    /// Mix toward black (shade).
    Black,
}

impl BlendTarget {
    /// Channel value of the endpoint.
    pub fn channel(&self) -> f64 {
        match self {
            BlendTarget::White => CHANNEL_MAX,
            BlendTarget::Black => 0.0,
        }
    }
}

/// Mix `color` toward `target` by `amount`.
///
/// Each channel moves `amount` of the way from its value to the endpoint.
/// Results are neither rounded nor clamped, and out-of-range percentages
/// extrapolate.
pub fn blend(color: &Color, amount: &Percentage, target: BlendTarget) -> Color {
    let perc = amount.fraction();
    let end = target.channel();
    Color {
        rgb: color.rgb.map(|c| c + perc * (end - c)),
    }
}

/// Mix `color` with white.
///
/// # Example
///
/// ```
/// use horizon_lattice_toolkit::prelude::*;
/// use horizon_lattice_toolkit::blend::tint;
///
/// let color = Color::rgb(100.0, 150.0, 200.0);
/// assert_eq!(tint(&color, &Percentage::new(100.0)), Color::rgb(255.0, 255.0, 255.0));
/// assert_eq!(tint(&color, &Percentage::new(0.0)), color);
/// ```
pub fn tint(color: &Color, amount: &Percentage) -> Color {
    blend(color, amount, BlendTarget::White)
}

/// Mix `color` with black.
pub fn shade(color: &Color, amount: &Percentage) -> Color {
    blend(color, amount, BlendTarget::Black)
}

/// `tint(color, percentage)` over value nodes.
pub fn tint_node(color: &ValueNode, amount: &ValueNode) -> Result<ValueNode> {
    let (color, amount) = blend_args("tint", color, amount)?;
    Ok(tint(&color, &amount).into())
}

/// `shade(color, percentage)` over value nodes.
pub fn shade_node(color: &ValueNode, amount: &ValueNode) -> Result<ValueNode> {
    let (color, amount) = blend_args("shade", color, amount)?;
    Ok(shade(&color, &amount).into())
}

fn blend_args(
    function: &str,
    color: &ValueNode,
    amount: &ValueNode,
) -> Result<(Color, Percentage)> {
    let ValueNode::Color(color) = color else {
        return Err(Error::invalid_argument(
            function,
            format!("expected a color, found a {}", color.kind()),
        ));
    };
    let amount = Percentage::from_node(amount).ok_or_else(|| {
        Error::invalid_argument(
            function,
            format!("expected a percentage, found a {}", amount.kind()),
        )
    })?;
    tracing::trace!(function, amount = amount.value, "blending color");
    Ok((*color, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    const SAMPLE: Color = Color::rgb(100.0, 150.0, 200.0);

    #[test]
    fn tint_boundaries() {
        assert_eq!(tint(&SAMPLE, &Percentage::new(0.0)), SAMPLE);
        assert_eq!(tint(&SAMPLE, &Percentage::new(100.0)), Color::rgb(255.0, 255.0, 255.0));
    }

    #[test]
    fn shade_boundaries() {
        assert_eq!(shade(&SAMPLE, &Percentage::new(0.0)), SAMPLE);
        assert_eq!(shade(&SAMPLE, &Percentage::new(100.0)), Color::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn half_blend() {
        let tinted = tint(&Color::rgb(0.0, 0.0, 255.0), &Percentage::new(50.0));
        assert_eq!(tinted, Color::rgb(127.5, 127.5, 255.0));

        let shaded = shade(&Color::rgb(255.0, 0.0, 0.0), &Percentage::new(50.0));
        assert_eq!(shaded, Color::rgb(127.5, 0.0, 0.0));
    }

    #[test]
    fn channels_are_independent() {
        let tinted = tint(&Color::rgb(255.0, 0.0, 55.0), &Percentage::new(20.0));
        assert_eq!(tinted.red(), 255.0);
        assert_eq!(tinted.green(), 51.0);
        assert_eq!(tinted.blue(), 95.0);
    }

    #[test]
    fn blend_is_monotonic() {
        let mut last_tint = SAMPLE;
        let mut last_shade = SAMPLE;
        for p in (10..=100).step_by(10) {
            let amount = Percentage::new(p as f64);
            let t = tint(&SAMPLE, &amount);
            let s = shade(&SAMPLE, &amount);
            for i in 0..3 {
                assert!(t.rgb[i] > last_tint.rgb[i]);
                assert!(s.rgb[i] < last_shade.rgb[i]);
            }
            last_tint = t;
            last_shade = s;
        }
    }

    #[test]
    fn out_of_range_extrapolates() {
        let over = tint(&SAMPLE, &Percentage::new(200.0));
        assert_eq!(over, Color::rgb(410.0, 360.0, 310.0));

        let under = shade(&SAMPLE, &Percentage::new(-100.0));
        assert_eq!(under, Color::rgb(200.0, 300.0, 400.0));
    }

    #[test]
    fn node_arguments() {
        let color = ValueNode::from(SAMPLE);
        let unitless = ValueNode::from(Dimension::number(100.0));
        assert_eq!(
            tint_node(&color, &unitless).unwrap(),
            ValueNode::Color(Color::rgb(255.0, 255.0, 255.0))
        );

        let percent = ValueNode::from(Dimension::percent(100.0));
        assert_eq!(
            shade_node(&color, &percent).unwrap(),
            ValueNode::Color(Color::rgb(0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn node_argument_errors() {
        let amount = ValueNode::from(Dimension::percent(10.0));
        let err = tint_node(&ValueNode::keyword("blue"), &amount).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref function, .. } if function == "tint"));

        let err = shade_node(&ValueNode::from(SAMPLE), &ValueNode::keyword("lots")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref function, .. } if function == "shade"));
    }
}
