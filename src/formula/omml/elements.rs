use smallvec::SmallVec;

/// Registered OMML element types
///
/// Every variant maps to exactly one `NodeKind`; containers such as `e`,
/// `num` or `sub` are deliberately absent and build as generic nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Run,
    Fraction,
    Radical,
    Subscript,
    Superscript,
    SubSup,
    PreScript,
    Delimiter,
    Function,
    Nary,
    Matrix,
    MatrixRow,
    LimLow,
    LimUpp,
    EqArr,
    Accent,
    Bar,
    Box,
    BorderBox,
    GroupChar,
    Phantom,
}

/// Index of a node inside a [`MathTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Mathematical alphabet selected by `m:scr`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathAlphabet {
    Script,
    Fraktur,
    DoubleStruck,
    SansSerif,
    Monospace,
}

/// Formatting of a run, resolved from `m:rPr`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub plain: bool,
    pub bold: bool,
    pub italic: bool,
    pub alphabet: Option<MathAlphabet>,
}

#[derive(Debug, Clone, Default)]
pub struct RunNode {
    /// Raw text of all `m:t` children
    pub source: String,
    /// Text after symbol substitution and escaping
    pub latex: String,
    pub style: RunStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FractionType {
    #[default]
    Bar,
    NoBar,
    Linear,
    Skewed,
}

#[derive(Debug, Clone, Default)]
pub struct FractionNode {
    pub fraction_type: FractionType,
    pub numerator: Option<NodeId>,
    pub denominator: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct RadicalNode {
    pub hide_degree: bool,
    pub base: Option<NodeId>,
    pub degree: Option<NodeId>,
}

/// Shared by the three post-script tags and `sPre`.
#[derive(Debug, Clone, Default)]
pub struct ScriptNode {
    pub base: Option<NodeId>,
    pub sub: Option<NodeId>,
    pub sup: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct DelimiterNode {
    /// Opening character, `(` when not given
    pub begin: String,
    /// Closing character, `)` when not given
    pub end: String,
    /// The closing character exactly as written, if it was
    pub explicit_end: Option<String>,
    pub separator: Option<String>,
    pub grow: bool,
    /// Content segments; each renders as the concatenation of its nodes
    pub segments: Vec<SmallVec<[NodeId; 2]>>,
}

impl DelimiterNode {
    /// The single node this delimiter wraps, if there is exactly one.
    pub fn sole_content(&self) -> Option<NodeId> {
        match self.segments.as_slice() {
            [segment] if segment.len() == 1 => Some(segment[0]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FunctionNode {
    /// The `fName` container
    pub name: Option<NodeId>,
    /// One `e` container per argument
    pub arguments: SmallVec<[NodeId; 2]>,
}

/// Placement of n-ary limits (`m:limLoc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitLocation {
    UnderOver,
    SubSup,
}

#[derive(Debug, Clone, Default)]
pub struct NaryNode {
    pub chr: Option<String>,
    pub limit_location: Option<LimitLocation>,
    pub hide_sub: bool,
    pub hide_sup: bool,
    pub sub: Option<NodeId>,
    pub sup: Option<NodeId>,
    pub base: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct MatrixNode {
    /// `mr` children in order
    pub rows: SmallVec<[NodeId; 4]>,
}

#[derive(Debug, Clone, Default)]
pub struct MatrixRowNode {
    /// `e` children in order, empty cells included
    pub cells: SmallVec<[NodeId; 4]>,
}

/// `limLow` and `limUpp`
#[derive(Debug, Clone, Default)]
pub struct LimitNode {
    pub base: Option<NodeId>,
    pub limit: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct EqArrayNode {
    /// Non-empty `e` rows
    pub rows: SmallVec<[NodeId; 4]>,
}

#[derive(Debug, Clone, Default)]
pub struct AccentNode {
    pub chr: Option<String>,
    pub base: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, Default)]
pub struct BarNode {
    pub position: VerticalPosition,
    pub base: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct BoxNode {
    pub bordered: bool,
    pub base: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct GroupCharNode {
    pub chr: Option<String>,
    pub position: Option<VerticalPosition>,
    pub base: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct PhantomNode {
    pub show: bool,
    pub base: Option<NodeId>,
}

/// Kind-specific data of a node.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    /// Unregistered tag, foreign namespace or container; renders its children
    #[default]
    Generic,
    Run(RunNode),
    Fraction(FractionNode),
    Radical(RadicalNode),
    Script(ScriptNode),
    PreScript(ScriptNode),
    Delimiter(DelimiterNode),
    Function(FunctionNode),
    Nary(NaryNode),
    Matrix(MatrixNode),
    MatrixRow(MatrixRowNode),
    LimLow(LimitNode),
    LimUpp(LimitNode),
    EqArray(EqArrayNode),
    Accent(AccentNode),
    Bar(BarNode),
    Box(BoxNode),
    GroupChar(GroupCharNode),
    Phantom(PhantomNode),
}

impl NodeKind {
    #[inline]
    pub fn is_generic(&self) -> bool {
        matches!(self, NodeKind::Generic)
    }
}

/// One node of the equation tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) tag: String,
    pub(crate) in_omml_namespace: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) kind: NodeKind,
}

impl Node {
    /// Local name of the source element.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn is_omml(&self) -> bool {
        self.in_omml_namespace
    }

    /// Whether this is the OMML element `tag`.
    #[inline]
    pub fn is_omml_tag(&self, tag: &str) -> bool {
        self.in_omml_namespace && self.tag == tag
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Property elements (`rPr`, `fPr`, `dPr`, ...) never contribute content.
    #[inline]
    pub fn is_property(&self) -> bool {
        self.in_omml_namespace && is_property_tag(&self.tag)
    }
}

/// Whether `tag` names an OMML property element.
#[inline]
pub fn is_property_tag(tag: &str) -> bool {
    tag.len() > 2 && tag.ends_with("Pr")
}

/// Arena holding a built equation tree.
///
/// Nodes are stored in creation order, so a parent always precedes its
/// children. The tree is immutable once the parser returns it.
#[derive(Debug, Clone, Default)]
pub struct MathTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: SmallVec<[NodeId; 2]>,
}

impl MathTree {
    /// Top-level nodes in document order.
    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Access a node. Ids always come from this tree, so indexing cannot fail.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First child of `id` that is the OMML element `tag`.
    pub fn child_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).is_omml_tag(tag))
    }

    /// Like [`child_by_tag`](Self::child_by_tag) but skips empty containers.
    pub fn content_child(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.child_by_tag(id, tag)
            .filter(|&child| self.has_content(child))
    }

    /// Whether a node has any child other than a property element.
    pub fn has_content(&self, id: NodeId) -> bool {
        self.node(id)
            .children
            .iter()
            .any(|&child| !self.node(child).is_property())
    }

    /// Children of `id` that are not property elements.
    pub fn content_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id)
            .children
            .iter()
            .copied()
            .filter(|&child| !self.node(child).is_property())
    }

    /// Raw run text of a container made only of runs, e.g. `fName` holding
    /// `sin`. Returns `None` if anything other than a run contributes content.
    pub fn plain_text(&self, id: NodeId) -> Option<String> {
        if let NodeKind::Run(run) = &self.node(id).kind {
            return Some(run.source.clone());
        }
        let mut text = String::new();
        let mut any = false;
        for child in self.content_children(id) {
            match &self.node(child).kind {
                NodeKind::Run(run) => text.push_str(&run.source),
                _ => return None,
            }
            any = true;
        }
        any.then_some(text)
    }

    /// Element names that were not recognised and fell back to pass-through.
    ///
    /// Containers and property elements are expected to be generic and are
    /// not reported. Each name appears once, in document order.
    pub fn unrecognized_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for node in &self.nodes {
            if !node.kind.is_generic() || node.is_property() {
                continue;
            }
            if node.in_omml_namespace && super::lookup::is_known_container(&node.tag) {
                continue;
            }
            if node.parent.is_some_and(|p| self.node(p).is_property()) {
                continue;
            }
            if !tags.contains(&node.tag.as_str()) {
                tags.push(&node.tag);
            }
        }
        tags
    }
}
