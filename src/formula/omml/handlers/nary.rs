// N-ary operator element handler

use crate::formula::omml::elements::{MathTree, NaryNode, NodeId, NodeKind};
use crate::formula::omml::properties::{parse_limit_location, property_flag, property_val};
use crate::formula::omml::xml::XmlElement;

/// Handler for n-ary operators (sums, products, integrals)
pub struct NaryHandler;

impl NaryHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        NodeKind::Nary(NaryNode {
            chr: property_val(elem, "naryPr", "chr").map(str::to_owned),
            limit_location: parse_limit_location(property_val(elem, "naryPr", "limLoc")),
            hide_sub: property_flag(elem, "naryPr", "subHide"),
            hide_sup: property_flag(elem, "naryPr", "supHide"),
            ..Default::default()
        })
    }

    pub fn handle_end(node: &mut NaryNode, tree: &MathTree, id: NodeId) {
        node.sub = tree.content_child(id, "sub");
        node.sup = tree.content_child(id, "sup");
        node.base = tree.content_child(id, "e");
    }
}
