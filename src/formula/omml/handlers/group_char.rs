// Group character element handler

use crate::formula::omml::elements::{GroupCharNode, MathTree, NodeId, NodeKind};
use crate::formula::omml::properties::{parse_position, property_val};
use crate::formula::omml::xml::XmlElement;

/// Handler for grouping characters (`m:groupChr`), e.g. under-braces
pub struct GroupCharHandler;

impl GroupCharHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        NodeKind::GroupChar(GroupCharNode {
            chr: property_val(elem, "groupChrPr", "chr").map(str::to_owned),
            position: parse_position(property_val(elem, "groupChrPr", "pos")),
            base: None,
        })
    }

    pub fn handle_end(node: &mut GroupCharNode, tree: &MathTree, id: NodeId) {
        node.base = tree.content_child(id, "e");
    }
}
