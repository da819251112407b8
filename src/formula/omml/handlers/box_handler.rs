// Box and border box element handler

use crate::formula::omml::elements::{BoxNode, MathTree, NodeId, NodeKind};

/// Handler for `m:box` and `m:borderBox`
pub struct BoxHandler;

impl BoxHandler {
    pub fn handle_start(bordered: bool) -> NodeKind {
        NodeKind::Box(BoxNode {
            bordered,
            base: None,
        })
    }

    pub fn handle_end(node: &mut BoxNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
    }
}
