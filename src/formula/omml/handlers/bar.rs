// Bar element handler

use crate::formula::omml::elements::{BarNode, MathTree, NodeId, NodeKind, VerticalPosition};
use crate::formula::omml::properties::{parse_position, property_val};
use crate::formula::omml::xml::XmlElement;

/// Handler for over- and underbars (`m:bar`)
pub struct BarHandler;

impl BarHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        NodeKind::Bar(BarNode {
            position: parse_position(property_val(elem, "barPr", "pos"))
                .unwrap_or(VerticalPosition::Top),
            base: None,
        })
    }

    pub fn handle_end(node: &mut BarNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
    }
}
