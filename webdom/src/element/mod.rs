mod content;
mod node;

use std::fmt;

pub use content::Content;
pub use node::Element;

/// Position of an element in a tree, as child indices from the root.
///
/// References stay valid across re-renders as long as the structure above
/// the element is unchanged, which is what native-state reconciliation
/// relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(Vec<usize>);

impl NodeRef {
    /// Reference to the root element.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Reference to the `index`th child of this element.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Append a reference that is relative to this one.
    pub fn join(&self, relative: &NodeRef) -> Self {
        let mut indices = self.0.clone();
        indices.extend_from_slice(&relative.0);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Whether `self` is `ancestor` or lies below it.
    pub fn starts_with(&self, ancestor: &NodeRef) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    /// First index below the root, i.e. the top-level slot this node lives in.
    pub fn slot(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Where this node ends up once top-level child `slot` is removed.
    ///
    /// None when the node was inside the removed child. Nodes in later
    /// slots move down by one; the root and earlier slots are unchanged.
    pub fn after_removal(&self, slot: usize) -> Option<Self> {
        match self.slot() {
            Some(s) if s == slot => None,
            Some(s) if s > slot => {
                let mut indices = self.0.clone();
                indices[0] = s - 1;
                Some(Self(indices))
            }
            _ => Some(self.clone()),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

/// Resolve a reference against a tree.
pub fn get<'a>(root: &'a Element, node: &NodeRef) -> Option<&'a Element> {
    let mut current = root;
    for &index in node.indices() {
        current = current.content.children().get(index)?;
    }
    Some(current)
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let node = find_by_id(root, id)?;
    get(root, &node)
}

/// Find the reference of the first element (document order) with the given ID.
pub fn find_by_id(root: &Element, id: &str) -> Option<NodeRef> {
    descendants(root)
        .into_iter()
        .find(|(_, element)| element.id.as_deref() == Some(id))
        .map(|(node, _)| node)
}

/// All elements of the tree in document order, root first.
pub fn descendants(root: &Element) -> Vec<(NodeRef, &Element)> {
    let mut out = Vec::new();
    collect(root, NodeRef::root(), &mut out);
    out
}

fn collect<'a>(element: &'a Element, node: NodeRef, out: &mut Vec<(NodeRef, &'a Element)>) {
    let children = element.content.children();
    out.push((node.clone(), element));
    for (index, child) in children.iter().enumerate() {
        collect(child, node.child(index), out);
    }
}
