// OMML (Office Math Markup Language) Parser
//
// This module parses Microsoft Office Math Markup Language (OMML) into an
// arena-backed equation tree. OMML is what Word stores inside `<m:oMath>`
// elements of `document.xml`.
//
// Parsing happens in two stages:
// - quick-xml events are folded into a namespace-aware element tree (`xml`)
// - each element is built into a node through the tag registry (`lookup`)
//   and the per-kind handlers (`handlers`)
//
// Reference: https://devblogs.microsoft.com/math-in-office/officemath/

mod elements;
mod error;
mod handlers;
mod lookup;
mod parser;
mod properties;
mod xml;

pub use elements::{
    AccentNode, BarNode, BoxNode, DelimiterNode, ElementType, EqArrayNode, FractionNode,
    FractionType, FunctionNode, GroupCharNode, LimitLocation, LimitNode, MathAlphabet, MathTree,
    MatrixNode, MatrixRowNode, NaryNode, Node, NodeId, NodeKind, PhantomNode, RadicalNode,
    RunNode, RunStyle, ScriptNode, VerticalPosition,
};
pub use error::{CONVERSION_ERROR, NOT_OMATH_ERROR, OmmlError, PARSE_ERROR, sentinel};
pub use lookup::get_element_type;
pub use parser::OmmlParser;
pub use xml::{OMML_NAMESPACE, QName, XmlElement, XmlNode};
