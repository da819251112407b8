// Radical element handler

use crate::formula::omml::elements::{MathTree, NodeId, NodeKind, RadicalNode};
use crate::formula::omml::properties::property_flag;
use crate::formula::omml::xml::XmlElement;

/// Handler for radical elements
pub struct RadicalHandler;

impl RadicalHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        NodeKind::Radical(RadicalNode {
            hide_degree: property_flag(elem, "radPr", "degHide"),
            ..Default::default()
        })
    }

    pub fn handle_end(node: &mut RadicalNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
        node.degree = tree.content_child(id, "deg");
    }
}
