//! Elements: renderable units built from plot descriptors.
//!
//! Elements live in an arena owned by the viewer and reference each other by
//! [`ElementId`] handle. A simple element (a point, a sphere) is its own
//! single leaf; composite elements (GL point sets, text blocks) expose one
//! leaf element per sub-item. Leaves are what selection and the authoritative
//! element list operate on.

use mapscope_core::plot::{PlotKind, PlotObject};
use mapscope_core::scene::{Node, NodeId, Scene};
use mapscope_core::Material;

/// Handle to an element in the viewer's element arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

impl ElementId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A constructed renderable unit.
#[derive(Debug)]
pub struct Element {
    kind: PlotKind,
    node: NodeId,
    /// Leaf elements of this element, itself included for simple kinds.
    leaves: Vec<ElementId>,
    /// External 0-based identifier, set on leaves during composition.
    pub id: Option<u32>,
    /// Display label attached during composition.
    pub label: Option<String>,
    /// 0-based references into the authoritative element list, held between
    /// construction and the group-resolution pass.
    pub group_indices: Option<Vec<usize>>,
    /// Resolved group membership.
    pub group: Option<Vec<ElementId>>,
    /// Companion element shown while this one is selected.
    pub highlight: Option<ElementId>,
}

impl Element {
    fn new(kind: PlotKind, node: NodeId) -> Self {
        Self {
            kind,
            node,
            leaves: Vec::new(),
            id: None,
            label: None,
            group_indices: None,
            group: None,
            highlight: None,
        }
    }

    /// The plot-object kind this element was built from.
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    /// The element's root scene node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The element's leaves, in construction order.
    pub fn leaves(&self) -> &[ElementId] {
        &self.leaves
    }

    /// Hides the element's node tree.
    pub fn hide(&self, scene: &mut Scene) {
        scene.node_mut(self.node).visible = false;
    }

    /// Shows the element's node tree.
    pub fn show(&self, scene: &mut Scene) {
        scene.node_mut(self.node).visible = true;
    }

    /// Sets the draw order of the element's root node.
    pub fn set_render_order(&self, scene: &mut Scene, order: i32) {
        scene.node_mut(self.node).render_order = order;
    }

    /// Splits the root mesh into independently rendered sub-meshes.
    ///
    /// Each piece becomes a child node with its own copy of the root
    /// material, so downstream clipping and draw ordering can act per piece.
    pub fn breakup_mesh(&self, scene: &mut Scene, pieces: usize) {
        let Some(material) = scene.node_mut(self.node).material.take() else {
            return;
        };
        let mut children = Vec::with_capacity(pieces.max(1));
        for _ in 0..pieces.max(1) {
            children.push(scene.insert(Node::with_material(material.clone())));
        }
        scene.node_mut(self.node).children = children;
    }
}

/// Arena of all elements built for one viewer.
#[derive(Debug, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
}

impl ElementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element and returns its handle.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        id
    }

    /// Returns an element by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this store.
    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Returns a mutable element by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this store.
    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Number of stored elements, leaves included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if nothing has been built yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Builds an element graph from a plot descriptor.
///
/// Construction allocates scene nodes but never touches scene membership;
/// attaching the result to the scene is the composer's last step. The
/// descriptor's `renderOrder` is applied as a post-construction side effect.
pub fn build(plotobj: &PlotObject, scene: &mut Scene, store: &mut ElementStore) -> ElementId {
    let id = match plotobj.kind {
        PlotKind::GlPoints => build_gl_points(plotobj, scene, store),
        PlotKind::Text => build_text(plotobj, scene, store),
        PlotKind::Point
        | PlotKind::Line
        | PlotKind::GlLine
        | PlotKind::Sphere
        | PlotKind::Surface
        | PlotKind::Grid
        | PlotKind::Triangle
        | PlotKind::Shape => build_simple(plotobj, scene, store),
    };

    if let Some(order) = plotobj.properties.render_order {
        store.get(id).set_render_order(scene, order);
    }

    id
}

/// A single-leaf element drawing with one material on its root node.
fn build_simple(plotobj: &PlotObject, scene: &mut Scene, store: &mut ElementStore) -> ElementId {
    let material = Material::from_properties(&plotobj.properties);
    let node = scene.insert(Node::with_material(material));
    let id = store.insert(Element::new(plotobj.kind, node));
    store.get_mut(id).leaves.push(id);
    id
}

/// One shared buffer node, one leaf element per coordinate.
fn build_gl_points(plotobj: &PlotObject, scene: &mut Scene, store: &mut ElementStore) -> ElementId {
    let material = Material::from_properties(&plotobj.properties);
    let node = scene.insert(Node::with_material(material));
    let root = store.insert(Element::new(plotobj.kind, node));

    let mut leaves = Vec::with_capacity(plotobj.coords.len());
    for _ in &plotobj.coords {
        let leaf = store.insert(Element::new(plotobj.kind, node));
        store.get_mut(leaf).leaves.push(leaf);
        leaves.push(leaf);
    }
    store.get_mut(root).leaves = leaves;
    root
}

/// A container root whose children each carry their own glyph material.
fn build_text(plotobj: &PlotObject, scene: &mut Scene, store: &mut ElementStore) -> ElementId {
    let node = scene.insert(Node::container());
    let root = store.insert(Element::new(plotobj.kind, node));

    let mut leaves = Vec::with_capacity(plotobj.text.len());
    for _ in &plotobj.text {
        let material = Material::from_properties(&plotobj.properties);
        let child = scene.insert(Node::with_material(material));
        scene.node_mut(node).children.push(child);
        let leaf = store.insert(Element::new(plotobj.kind, child));
        store.get_mut(leaf).leaves.push(leaf);
        leaves.push(leaf);
    }
    store.get_mut(root).leaves = leaves;
    root
}
