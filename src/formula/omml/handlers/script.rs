// Script element handlers

use crate::formula::omml::elements::{MathTree, NodeId, NodeKind, ScriptNode};

/// Handler for `sSub`, `sSup` and `sSubSup`
///
/// The three tags differ only in which containers they carry, so they share
/// one node shape and one renderer.
pub struct ScriptHandler;

impl ScriptHandler {
    pub fn handle_start() -> NodeKind {
        NodeKind::Script(ScriptNode::default())
    }

    pub fn handle_end(node: &mut ScriptNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
        node.sub = tree.content_child(id, "sub");
        node.sup = tree.content_child(id, "sup");
    }
}

/// Handler for pre-scripts (`sPre`)
pub struct PreScriptHandler;

impl PreScriptHandler {
    pub fn handle_start() -> NodeKind {
        NodeKind::PreScript(ScriptNode::default())
    }

    pub fn handle_end(node: &mut ScriptNode, tree: &MathTree, id: NodeId) {
        ScriptHandler::handle_end(node, tree, id);
    }
}
