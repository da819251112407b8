// Lower and upper limit element handlers

use crate::formula::omml::elements::{LimitNode, MathTree, NodeId, NodeKind};

/// Handler for `m:limLow` and `m:limUpp`
pub struct LimitHandler;

impl LimitHandler {
    pub fn handle_start(upper: bool) -> NodeKind {
        if upper {
            NodeKind::LimUpp(LimitNode::default())
        } else {
            NodeKind::LimLow(LimitNode::default())
        }
    }

    pub fn handle_end(node: &mut LimitNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
        node.limit = tree.content_child(id, "lim");
    }
}
