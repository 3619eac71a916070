//! Arena-based element tree.
//!
//! All nodes of a [`Document`] live in one [`indextree::Arena`] and are
//! addressed by stable [`NodeId`]s. A "tree" is whatever is reachable from a
//! node; several independent roots may coexist in the same document while it
//! is being assembled.
//!
//! The ids stay valid across every mutation, including the transparent
//! re-parenting done by [`Document::promote`]: callers holding the id of a
//! promoted node keep observing the node at its correct place in the final
//! tree.

use indextree::Arena;
pub use indextree::NodeId;

use crate::debug;
use crate::elements::{Element, Item};
use crate::error::Error;
use crate::schema;

/// One node: the typed element payload, optional text contents, and the
/// logical-root link used by item-wrapper promotion.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub(crate) element: Element,
    pub(crate) text: String,
    /// Wrapper created by [`Document::promote`]. `None` means the node is
    /// its own logical root.
    pub(crate) logical_root: Option<NodeId>,
}

impl NodeData {
    /// The typed element payload of this node.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Text contents of this node ("" when none).
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Document = arena of nodes. Element constructors, validated insertion and
/// rendering all go through this type.
#[derive(Debug, Default, Clone)]
pub struct Document {
    pub(crate) arena: Arena<NodeData>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node with the given payload.
    pub(crate) fn node(&mut self, element: Element) -> NodeId {
        self.arena.new_node(NodeData {
            element,
            text: String::new(),
            logical_root: None,
        })
    }

    /// Create a detached node with payload and text contents.
    pub(crate) fn node_with_text(&mut self, element: Element, text: impl Into<String>) -> NodeId {
        self.arena.new_node(NodeData {
            element,
            text: text.into(),
            logical_root: None,
        })
    }

    /// Immutable access to a node's data.
    ///
    /// Panics when `id` does not belong to this document; ids are only ever
    /// handed out by the constructors on this type.
    pub fn get(&self, id: NodeId) -> &NodeData {
        self.arena[id].get()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.arena[id].get_mut()
    }

    /// Validate that an id belongs to this document's arena.
    pub(crate) fn check(&self, id: NodeId) -> Result<(), Error> {
        match self.arena.get(id) {
            Some(node) if !node.is_removed() => Ok(()),
            _ => Err(Error::InvalidArgument(
                "node id does not belong to this document".into(),
            )),
        }
    }

    /// Parent of a node, if it has been attached somewhere.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    /// Iterate a node's children in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Number of children of a node.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// A node is empty iff it has no text contents and no children. Empty
    /// nodes serialize as self-closing tags.
    pub fn is_empty(&self, id: NodeId) -> bool {
        self.get(id).text.is_empty() && self.child_count(id) == 0
    }

    /// Text contents of a node.
    pub fn text(&self, id: NodeId) -> &str {
        &self.get(id).text
    }

    /// Replace the text contents of a node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.get_mut(id).text = text.into();
    }

    /// The node that actually receives children meant "for" this node: the
    /// item wrapper once the node has been promoted, the node itself before.
    pub fn logical_root(&self, id: NodeId) -> NodeId {
        self.get(id).logical_root.unwrap_or(id)
    }

    /// Create a simple text leaf (`<Tag>contents</Tag>`) and append it.
    /// Used by the element constructors for fixed children like `Title` and
    /// `Label`; not subject to schema validation.
    pub(crate) fn leaf(
        &mut self,
        parent: NodeId,
        tag: impl Into<String>,
        contents: impl ToString,
    ) -> NodeId {
        let child = self.node_with_text(Element::Leaf(tag.into()), contents.to_string());
        parent.append(child, &mut self.arena);
        child
    }

    /// Raw append without schema validation. Constructors use this for
    /// children whose shape they guarantee themselves.
    pub(crate) fn append_node(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    /// Schema-validated insertion. Checks the rule for
    /// (parent kind, child kind), updates the parent's counters, and returns
    /// the node that was actually attached: the child's logical root where
    /// the rule calls for it (form items that were promoted earlier).
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, Error> {
        schema::validate_and_add(self, parent, child)
    }

    /// Validated insertion targeting the node's logical root instead of the
    /// node itself. Equivalent to [`Document::attach`] for nodes that were
    /// never promoted; after a promotion, the child lands on the wrapper.
    pub fn logical_attach(&mut self, node: NodeId, child: NodeId) -> Result<NodeId, Error> {
        self.check(node)?;
        let root = self.logical_root(node);
        self.attach(root, child)
    }

    /// Associate a command with a node.
    ///
    /// Screens and item wrappers take commands directly. Form items cannot
    /// hold commands themselves: the item is promoted into an `IppItem`
    /// wrapper (once; promotion is idempotent) and the command lands on the
    /// wrapper. Any other kind is rejected.
    pub fn attach_command(&mut self, target: NodeId, command: NodeId) -> Result<NodeId, Error> {
        self.check(target)?;
        self.check(command)?;
        if !matches!(self.get(command).element, Element::Command(_)) {
            return Err(Error::InvalidArgument(
                "attach_command expects an IppCommand node".into(),
            ));
        }
        if matches!(
            self.get(target).element,
            Element::Screen(_) | Element::Item(_)
        ) {
            return self.attach(target, command);
        }
        if !self.get(target).element.is_form_item() {
            return Err(Error::StructuralConstraintViolation(format!(
                "an {} cannot hold an IppCommand",
                self.get(target).element.tag()
            )));
        }
        self.promote(target)?;
        self.logical_attach(target, command)
    }

    /// Wrap a node in a new `IppItem` container and return the wrapper.
    ///
    /// Idempotent: a node that is already promoted returns its existing
    /// wrapper. A node whose logical root is anything other than an item
    /// wrapper is rejected. When the node is attached somewhere, the wrapper
    /// takes over the node's position among its former siblings; the whole
    /// splice is a single operation as far as callers can observe.
    pub fn promote(&mut self, node: NodeId) -> Result<NodeId, Error> {
        self.check(node)?;
        if let Some(root) = self.get(node).logical_root {
            if matches!(self.get(root).element, Element::Item(_)) {
                return Ok(root);
            }
            return Err(Error::InvalidArgument(
                "this node is already wrapped in something else".into(),
            ));
        }
        let wrapper = self.node(Element::Item(Item::default()));
        if self.parent(node).is_some() {
            node.insert_before(wrapper, &mut self.arena);
            node.detach(&mut self.arena);
        }
        wrapper.append(node, &mut self.arena);
        self.get_mut(node).logical_root = Some(wrapper);
        debug!(?node, ?wrapper, "promoted node into an item wrapper");
        Ok(wrapper)
    }
}

// =============================================================================
// Tests
// =============================================================================
