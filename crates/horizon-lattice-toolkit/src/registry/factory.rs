//! Host node construction.
//!
//! The toolkit computes results as [`ValueNode`] trees. A host with its own
//! tree representation implements [`NodeFactory`] and uses [`lower`] to
//! rebuild each result with its own constructors.

use crate::types::{Color, CompositeValue, Dimension, ValueNode};

/// Constructors for a host's value nodes.
pub trait NodeFactory {
    /// The host node type.
    type Node;

    /// Build a dimension node.
    fn dimension(&self, dimension: Dimension) -> Self::Node;

    /// Build a space-separated list from already built elements.
    fn composite(&self, values: Vec<Self::Node>) -> Self::Node;

    /// Build a color node. Any clamping or rounding is up to the host.
    fn color(&self, color: Color) -> Self::Node;

    /// Build a keyword node.
    fn keyword(&self, keyword: String) -> Self::Node;
}

/// Rebuild `node` with `factory`, children first.
pub fn lower<F: NodeFactory + ?Sized>(factory: &F, node: ValueNode) -> F::Node {
    match node {
        ValueNode::Dimension(dim) => factory.dimension(dim),
        ValueNode::Keyword(keyword) => factory.keyword(keyword),
        ValueNode::Color(color) => factory.color(color),
        ValueNode::Composite(CompositeValue(values)) => {
            let children = values.into_iter().map(|v| lower(factory, v)).collect();
            factory.composite(children)
        }
    }
}

/// Factory that produces [`ValueNode`]s unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueTreeFactory;

impl NodeFactory for ValueTreeFactory {
    type Node = ValueNode;

    fn dimension(&self, dimension: Dimension) -> ValueNode {
        ValueNode::Dimension(dimension)
    }

    fn composite(&self, values: Vec<ValueNode>) -> ValueNode {
        ValueNode::Composite(CompositeValue(values))
    }

    fn color(&self, color: Color) -> ValueNode {
        ValueNode::Color(color)
    }

    fn keyword(&self, keyword: String) -> ValueNode {
        ValueNode::Keyword(keyword)
    }
}
