// Equation array element handler

use crate::formula::omml::elements::{EqArrayNode, MathTree, NodeId, NodeKind};

/// Handler for equation arrays (`m:eqArr`)
pub struct EqArrHandler;

impl EqArrHandler {
    pub fn handle_start() -> NodeKind {
        NodeKind::EqArray(EqArrayNode::default())
    }

    /// Each non-empty `m:e` is one row.
    pub fn handle_end(node: &mut EqArrayNode, tree: &MathTree, id: NodeId) {
        node.rows = tree
            .node(id)
            .children()
            .iter()
            .copied()
            .filter(|&child| tree.node(child).is_omml_tag("e") && tree.has_content(child))
            .collect();
    }
}
