// Matrix element handlers

use crate::formula::omml::elements::{MathTree, MatrixNode, MatrixRowNode, NodeId, NodeKind};

/// Handler for matrices (`m:m`)
pub struct MatrixHandler;

impl MatrixHandler {
    pub fn handle_start() -> NodeKind {
        NodeKind::Matrix(MatrixNode::default())
    }

    pub fn handle_end(node: &mut MatrixNode, tree: &MathTree, id: NodeId) {
        node.rows = children_tagged(tree, id, "mr");
    }
}

/// Handler for matrix rows (`m:mr`)
pub struct MatrixRowHandler;

impl MatrixRowHandler {
    pub fn handle_start() -> NodeKind {
        NodeKind::MatrixRow(MatrixRowNode::default())
    }

    /// Empty cells are kept so columns stay aligned.
    pub fn handle_end(node: &mut MatrixRowNode, tree: &MathTree, id: NodeId) {
        node.cells = children_tagged(tree, id, "e");
    }
}

fn children_tagged(tree: &MathTree, id: NodeId, tag: &str) -> smallvec::SmallVec<[NodeId; 4]> {
    tree.node(id)
        .children()
        .iter()
        .copied()
        .filter(|&child| tree.node(child).is_omml_tag(tag))
        .collect()
}
