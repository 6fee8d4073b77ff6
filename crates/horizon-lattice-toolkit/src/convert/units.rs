//! Pixel to relative unit conversion.
//!
//! Converts a dimension, or every element of a space-separated value, from
//! pixels (or unitless numbers) into `rem` or `em`:
//!
//! ```text
//! margin: rem(32 auto 16 100%);   =>   margin: 2rem auto 1rem 100%;
//! font-size: rem(12);             =>   font-size: 0.75rem;
//! width: rem(16, 8);              =>   width: 2rem;
//! ```
//!
//! `auto`, zero, percentages and values already in the target unit pass
//! through unchanged.

use crate::config::ToolkitConfig;
use crate::types::{CompositeValue, Dimension, Magnitude, TargetUnit, ValueNode};
use crate::{Error, Result};

/// Resolve the base pixel size for a single call.
///
/// An explicit base must be a numeric dimension; its magnitude is truncated
/// to an integer and its unit ignored. Without one, the configured base is
/// used.
pub fn effective_base(explicit_base: Option<&ValueNode>, config: &ToolkitConfig) -> Result<f64> {
    let Some(base) = explicit_base else {
        return Ok(config.base_px());
    };

    match base {
        ValueNode::Dimension(Dimension {
            value: Magnitude::Number(v),
            ..
        }) => {
            let px = v.trunc();
            tracing::debug!(base_px = px, "using explicit base pixel size");
            Ok(px)
        }
        other => Err(Error::invalid_value(
            describe(other),
            "base pixel size must be a number",
        )),
    }
}

/// Convert `node` into `target` units.
///
/// Composite values are converted element by element, preserving order, with
/// the same base applied to every element. The input is never modified; on
/// error nothing is returned, so a shorthand is never left half converted.
///
/// # Example
///
/// ```
/// use horizon_lattice_toolkit::prelude::*;
/// use horizon_lattice_toolkit::convert::convert;
///
/// let config = ToolkitConfig::default();
/// let out = convert(&Dimension::px(24.0).into(), None, TargetUnit::Rem, &config).unwrap();
/// assert_eq!(out, Dimension::with_unit(1.5, "rem").into());
/// ```
pub fn convert(
    node: &ValueNode,
    explicit_base: Option<&ValueNode>,
    target: TargetUnit,
    config: &ToolkitConfig,
) -> Result<ValueNode> {
    let base = effective_base(explicit_base, config)?;
    convert_node(node, base, target)
}

/// Convert `node` into `rem`.
pub fn rem(
    node: &ValueNode,
    explicit_base: Option<&ValueNode>,
    config: &ToolkitConfig,
) -> Result<ValueNode> {
    convert(node, explicit_base, TargetUnit::Rem, config)
}

/// Convert `node` into `em`.
pub fn em(
    node: &ValueNode,
    explicit_base: Option<&ValueNode>,
    config: &ToolkitConfig,
) -> Result<ValueNode> {
    convert(node, explicit_base, TargetUnit::Em, config)
}

fn convert_node(node: &ValueNode, base: f64, target: TargetUnit) -> Result<ValueNode> {
    match node {
        ValueNode::Composite(values) => values
            .iter()
            .map(|value| convert_node(value, base, target))
            .collect::<Result<CompositeValue>>()
            .map(ValueNode::Composite),
        ValueNode::Keyword(_) if node.is_auto() => Ok(node.clone()),
        ValueNode::Dimension(dim) => convert_dimension(dim, base, target).map(ValueNode::Dimension),
        ValueNode::Keyword(_) | ValueNode::Color(_) => Err(Error::invalid_value(
            describe(node),
            format!("cannot convert a {} to {target}", node.kind()),
        )),
    }
}

fn convert_dimension(dim: &Dimension, base: f64, target: TargetUnit) -> Result<Dimension> {
    let value = match &dim.value {
        Magnitude::Auto => return Ok(dim.clone()),
        Magnitude::Reference(name) => {
            return Err(Error::invalid_value(name.as_str(), "magnitude is not numeric"));
        }
        Magnitude::Number(v) => *v,
    };

    if value == 0.0 || is_exempt_unit(dim, target) {
        return Ok(dim.clone());
    }

    if base == 0.0 {
        tracing::warn!(value, unit = %target, "refusing to convert with a zero base pixel size");
        return Err(Error::DivisionByZero);
    }

    let converted = value / base;
    tracing::trace!(from = value, to = converted, unit = %target, "converted dimension");
    Ok(Dimension::with_unit(converted, target.as_str()))
}

/// Percentages, and values already in the target unit, are left alone.
fn is_exempt_unit(dim: &Dimension, target: TargetUnit) -> bool {
    match dim.unit_token() {
        Some("%") => true,
        Some(token) => token.eq_ignore_ascii_case(target.as_str()),
        None => false,
    }
}

fn describe(node: &ValueNode) -> String {
    match node {
        ValueNode::Dimension(dim) => match dim.unit_token() {
            Some(unit) => format!("{}{unit}", dim.value),
            None => dim.value.to_string(),
        },
        ValueNode::Keyword(k) => k.clone(),
        other => other.kind().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Unit};

    fn rem_default(node: ValueNode) -> Result<ValueNode> {
        rem(&node, None, &ToolkitConfig::default())
    }

    fn dim(node: &ValueNode) -> &Dimension {
        match node {
            ValueNode::Dimension(d) => d,
            other => panic!("expected a dimension, got {other:?}"),
        }
    }

    #[test]
    fn px_to_rem_default_base() {
        let out = rem_default(Dimension::px(12.0).into()).unwrap();
        assert_eq!(dim(&out).as_number(), Some(0.75));
        assert_eq!(dim(&out).unit.numerator, vec!["rem".to_string()]);
    }

    #[test]
    fn unitless_to_em() {
        let out = em(&Dimension::number(32.0).into(), None, &ToolkitConfig::default()).unwrap();
        assert_eq!(out, Dimension::with_unit(2.0, "em").into());
    }

    #[test]
    fn configured_base() {
        let config = ToolkitConfig::new(10.0);
        let out = rem(&Dimension::px(15.0).into(), None, &config).unwrap();
        assert_eq!(dim(&out).as_number(), Some(1.5));
    }

    #[test]
    fn explicit_base_overrides_config() {
        let config = ToolkitConfig::new(10.0);
        let base = ValueNode::from(Dimension::number(8.0));
        let out = rem(&Dimension::px(32.0).into(), Some(&base), &config).unwrap();
        assert_eq!(dim(&out).as_number(), Some(4.0));
        assert_eq!(config.base_px(), 10.0);
    }

    #[test]
    fn explicit_base_is_truncated() {
        let base = ValueNode::from(Dimension::px(8.9));
        let out = rem(&Dimension::px(16.0).into(), Some(&base), &ToolkitConfig::default()).unwrap();
        assert_eq!(dim(&out).as_number(), Some(2.0));
    }

    #[test]
    fn pass_through_values() {
        let auto_kw = ValueNode::keyword("auto");
        assert_eq!(rem_default(auto_kw.clone()).unwrap(), auto_kw);

        let auto_dim = ValueNode::from(Dimension::auto());
        assert_eq!(rem_default(auto_dim.clone()).unwrap(), auto_dim);

        let zero = ValueNode::from(Dimension::px(0.0));
        assert_eq!(rem_default(zero.clone()).unwrap(), zero);

        let percent = ValueNode::from(Dimension::percent(100.0));
        assert_eq!(rem_default(percent.clone()).unwrap(), percent);
    }

    #[test]
    fn already_target_unit_is_noop() {
        let once = rem_default(Dimension::px(24.0).into()).unwrap();
        let twice = rem_default(once.clone()).unwrap();
        assert_eq!(once, twice);

        // unit match ignores case
        let upper = ValueNode::from(Dimension::with_unit(32.0, "REM"));
        assert_eq!(rem_default(upper.clone()).unwrap(), upper);
        let upper_em = ValueNode::from(Dimension::with_unit(2.0, "Em"));
        let out = em(&upper_em, None, &ToolkitConfig::default()).unwrap();
        assert_eq!(out, upper_em);

        // em is not rem, so it is divided again
        let em_value = ValueNode::from(Dimension::with_unit(32.0, "em"));
        assert_eq!(rem_default(em_value).unwrap(), Dimension::with_unit(2.0, "rem").into());
    }

    #[test]
    fn composite_preserves_order() {
        let input: CompositeValue = vec![
            ValueNode::from(Dimension::number(32.0)),
            ValueNode::keyword("auto"),
            Dimension::number(16.0).into(),
            Dimension::percent(100.0).into(),
        ]
        .into_iter()
        .collect();

        let out = rem_default(input.clone().into()).unwrap();
        let expected: CompositeValue = vec![
            ValueNode::from(Dimension::with_unit(2.0, "rem")),
            ValueNode::keyword("auto"),
            Dimension::with_unit(1.0, "rem").into(),
            Dimension::percent(100.0).into(),
        ]
        .into_iter()
        .collect();

        assert_eq!(out, ValueNode::Composite(expected));
        assert_eq!(input.len(), 4);
    }

    #[test]
    fn nested_composite() {
        let inner = CompositeValue::new(vec![ValueNode::from(Dimension::px(8.0))]);
        let outer = CompositeValue::new(vec![
            ValueNode::from(inner),
            ValueNode::from(Dimension::px(4.0)),
        ]);
        let base = ValueNode::from(Dimension::number(4.0));

        let out = rem(&ValueNode::from(outer), Some(&base), &ToolkitConfig::default()).unwrap();
        let ValueNode::Composite(values) = out else {
            panic!("expected a composite");
        };
        assert_eq!(
            values.0[0],
            ValueNode::Composite(CompositeValue::new(vec![ValueNode::from(
                Dimension::with_unit(2.0, "rem")
            )]))
        );
        assert_eq!(values.0[1], ValueNode::from(Dimension::with_unit(1.0, "rem")));
    }

    #[test]
    fn denominator_is_dropped() {
        let mut unit = Unit::new("px");
        unit.denominator.push("s".to_string());
        let out = rem_default(Dimension::new(32.0, unit).into()).unwrap();
        assert_eq!(dim(&out).unit, Unit::new("rem"));
    }

    #[test]
    fn negative_values_keep_sign() {
        let out = rem_default(Dimension::px(-8.0).into()).unwrap();
        assert_eq!(dim(&out).as_number(), Some(-0.5));
    }

    #[test]
    fn reference_is_invalid() {
        let err = rem_default(Dimension::reference("@gutter").into()).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));

        let err = rem_default(ValueNode::keyword("inherit")).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));

        let err = rem_default(Color::rgb(0.0, 0.0, 0.0).into()).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn zero_base_is_an_error() {
        let config = ToolkitConfig::default();
        let base = ValueNode::from(Dimension::number(0.5));
        let err = rem(&Dimension::px(10.0).into(), Some(&base), &config).unwrap_err();
        assert_eq!(err, Error::DivisionByZero);

        // nothing to divide, nothing to fail
        let out = rem(&ValueNode::keyword("auto"), Some(&base), &config).unwrap();
        assert!(out.is_auto());

        let zero = ValueNode::from(Dimension::number(0.0));
        let exempt = ValueNode::from(CompositeValue::new(vec![
            ValueNode::keyword("auto"),
            ValueNode::from(Dimension::px(0.0)),
            ValueNode::from(Dimension::percent(50.0)),
        ]));
        assert_eq!(rem(&exempt, Some(&zero), &config).unwrap(), exempt);
    }

    #[test]
    fn composite_failure_is_atomic() {
        let input = CompositeValue::new(vec![
            ValueNode::from(Dimension::px(16.0)),
            ValueNode::from(Dimension::reference("@x")),
        ]);
        let node = ValueNode::from(input);
        let snapshot = node.clone();

        assert!(rem_default(node.clone()).is_err());
        assert_eq!(node, snapshot);
    }

    #[test]
    fn non_numeric_base_is_invalid() {
        let base = ValueNode::keyword("auto");
        let err = rem(&Dimension::px(16.0).into(), Some(&base), &ToolkitConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }
}
