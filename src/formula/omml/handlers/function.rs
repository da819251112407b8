// Function element handler

use crate::formula::omml::elements::{FunctionNode, MathTree, NodeId, NodeKind};

/// Handler for function applications (`m:func`)
pub struct FunctionHandler;

impl FunctionHandler {
    pub fn handle_start() -> NodeKind {
        NodeKind::Function(FunctionNode::default())
    }

    pub fn handle_end(node: &mut FunctionNode, tree: &MathTree, id: NodeId) {
        node.name = tree.content_child(id, "fName");
        node.arguments = tree
            .node(id)
            .children()
            .iter()
            .copied()
            .filter(|&child| tree.node(child).is_omml_tag("e") && tree.has_content(child))
            .collect();
    }
}
