//! Arena view of an element tree with parent links.

use std::collections::HashMap;

use crate::element::{Content, Element};

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    element_id: String,
    tag: String,
    text: Option<String>,
    attrs: HashMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A flattened, read-only element tree.
///
/// Owned [`Element`] trees only link downwards. `Document` walks one once
/// and stores every node in an arena together with its parent, so lookups
/// can go upwards as well.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    by_id: HashMap<String, NodeId>,
}

impl Document {
    pub fn from_root(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
        };
        doc.insert(root, None);
        log::trace!("[document] built with {} nodes", doc.nodes.len());
        doc
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let Element {
            id: element_id,
            tag,
            content,
            attrs,
        } = element;

        let (text, children) = match content {
            Content::None => (None, Vec::new()),
            Content::Text(text) => (Some(text), Vec::new()),
            Content::Children(children) => (None, children),
        };

        // First id wins on duplicates, matching document order lookups.
        self.by_id.entry(element_id.clone()).or_insert(id);
        self.nodes.push(NodeData {
            element_id,
            tag,
            text,
            attrs,
            parent,
            children: Vec::with_capacity(children.len()),
        });

        for child in children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }

        id
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: NodeId(0),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { doc: self, id })
    }

    /// Look up a node by its element id.
    pub fn find_by_id(&self, element_id: &str) -> Option<NodeRef<'_>> {
        self.by_id
            .get(element_id)
            .map(|&id| NodeRef { doc: self, id })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Borrowed handle to one node of a [`Document`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn element_id(&self) -> &'a str {
        &self.data().element_id
    }

    pub fn tag_name(&self) -> &'a str {
        &self.data().tag
    }

    pub fn text(&self) -> Option<&'a str> {
        self.data().text.as_deref()
    }

    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.data().attrs.get(key).map(String::as_str)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| NodeRef { doc: self.doc, id })
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| NodeRef { doc, id })
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{} id={:?}>", self.tag_name(), self.element_id())
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
