//! The tree's cells: a [`Node`] holds a value and its three relationships
//! (left child, right child, parent). Child edges own their target; the
//! parent edge is a non-owning back-reference.

use std::fmt;
use std::ptr::NonNull;

/// An edge to a `Node`, or nothing. This is a bare pointer instead of an
/// `Option<Box<Node>>` so that the same type can express both owning child
/// edges and the non-owning parent back-reference without forming an
/// ownership cycle. Which edges own their target is a discipline of the
/// tree: every node is freed exactly once, through the child edge (or root)
/// that points at it.
pub(crate) struct Link<T>(pub(crate) Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    /// The node this edge points at, if any.
    pub(crate) fn node(&self) -> Option<&Node<T>> {
        // SAFETY: If the link is not `None` then it points at a live `Node`.
        // Because we take `&self` here, there can be no aliasing with
        // `self.node_mut()`. There can only be aliasing with
        // `self.0.unwrap().as_mut()`, and that code would be unsafe itself,
        // so it's the caller's responsibility to ensure there is no existing
        // borrow of the inner pointer.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    /// Mutable access to the node this edge points at, if any.
    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        // SAFETY: See `Link::node`. Taking `&mut self` rules out aliasing
        // through this link; raw dereferences elsewhere are the caller's
        // responsibility.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

/// A tree cell: one value and its left/right/parent relationships. `Node`
/// holds no behavior beyond construction; descent, rewiring, and deletion
/// live on the tree, which upholds the invariant that a set child's `parent`
/// points back at the node holding that child edge.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) parent: Link<T>,
}

impl<T> Node<T> {
    /// A fresh parentless, childless node on the heap.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: Link(None),
            right: Link(None),
            parent: Link(None),
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.node_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.node_mut()
    }

    /// Points the left child's `parent` back at `self`. Used after structural
    /// rewiring that changes who holds the child edge.
    pub(crate) fn fix_left_child_parent(&mut self) {
        let self_ptr = NonNull::from(&*self);
        if let Some(left) = self.left_mut() {
            left.parent = Link(Some(self_ptr));
        }
    }

    /// Points the right child's `parent` back at `self`.
    pub(crate) fn fix_right_child_parent(&mut self) {
        let self_ptr = NonNull::from(&*self);
        if let Some(right) = self.right_mut() {
            right.parent = Link(Some(self_ptr));
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
