// Phantom element handler

use crate::formula::omml::elements::{MathTree, NodeId, NodeKind, PhantomNode};
use crate::formula::omml::properties::parse_on_off;
use crate::formula::omml::xml::XmlElement;

/// Handler for phantoms (`m:phant`)
pub struct PhantomHandler;

impl PhantomHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        // `show` defaults to on when not specified
        let show = match elem.child("phantPr").and_then(|pr| pr.child("show")) {
            Some(flag) => parse_on_off(Some(flag)),
            None => true,
        };
        NodeKind::Phantom(PhantomNode { show, base: None })
    }

    pub fn handle_end(node: &mut PhantomNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
    }
}
