//! A DOM-like tree whose nodes are allocated in a `typed_arena::Arena` and
//! point at each other through shared references.
//!
//! Links are held in `Cell`s so that the shape of the tree can change through
//! `&Node`: a node can be detached and re-inserted while other references to
//! it (and to its neighbours) stay valid for the lifetime of the arena.
//!
//! Modelled on rust-forest's arena-tree (MIT).

use std::cell::Cell;
use std::fmt;

/// A node inside a DOM-like tree.
pub struct Node<'a, T: 'a> {
    parent: Cell<Option<&'a Node<'a, T>>>,
    previous_sibling: Cell<Option<&'a Node<'a, T>>>,
    next_sibling: Cell<Option<&'a Node<'a, T>>>,
    first_child: Cell<Option<&'a Node<'a, T>>>,
    last_child: Cell<Option<&'a Node<'a, T>>>,

    /// The data held by the node.
    pub data: T,
}

/// Prints the node's data only; the links form cycles.
impl<'a, T: 'a> fmt::Debug for Node<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node").field("data", &self.data).finish()
    }
}

impl<'a, T> Node<'a, T> {
    /// Create a new, unlinked node holding `data`.
    ///
    /// Move it into an arena before linking it into a tree.
    pub fn new(data: T) -> Node<'a, T> {
        Node {
            parent: Cell::new(None),
            previous_sibling: Cell::new(None),
            next_sibling: Cell::new(None),
            first_child: Cell::new(None),
            last_child: Cell::new(None),
            data,
        }
    }

    /// The parent node, unless this node is a root.
    pub fn parent(&self) -> Option<&'a Node<'a, T>> {
        self.parent.get()
    }

    /// The first child, unless this node has no children.
    pub fn first_child(&self) -> Option<&'a Node<'a, T>> {
        self.first_child.get()
    }

    /// The last child, unless this node has no children.
    pub fn last_child(&self) -> Option<&'a Node<'a, T>> {
        self.last_child.get()
    }

    /// The previous sibling, unless this node is a first child.
    pub fn previous_sibling(&self) -> Option<&'a Node<'a, T>> {
        self.previous_sibling.get()
    }

    /// The next sibling, unless this node is a last child.
    pub fn next_sibling(&self) -> Option<&'a Node<'a, T>> {
        self.next_sibling.get()
    }

    /// Whether two references point at the same node.
    pub fn same_node(&self, other: &Node<'a, T>) -> bool {
        std::ptr::eq(self, other)
    }

    /// Iterate over this node's children, in order.
    pub fn children(&'a self) -> Children<'a, T> {
        Children(self.first_child.get())
    }

    /// Iterate over this node and its descendants, in tree order.
    ///
    /// The node itself comes first.
    pub fn descendants(&'a self) -> Descendants<'a, T> {
        Descendants {
            root: self,
            next: Some(self),
        }
    }

    /// Detach this node from its parent and siblings. Children stay attached.
    pub fn detach(&self) {
        let parent = self.parent.take();
        let previous_sibling = self.previous_sibling.take();
        let next_sibling = self.next_sibling.take();

        if let Some(next_sibling) = next_sibling {
            next_sibling.previous_sibling.set(previous_sibling);
        } else if let Some(parent) = parent {
            parent.last_child.set(previous_sibling);
        }

        if let Some(previous_sibling) = previous_sibling {
            previous_sibling.next_sibling.set(next_sibling);
        } else if let Some(parent) = parent {
            parent.first_child.set(next_sibling);
        }
    }

    /// Append `new_child` after this node's existing children.
    pub fn append(&'a self, new_child: &'a Node<'a, T>) {
        new_child.detach();
        new_child.parent.set(Some(self));
        if let Some(last_child) = self.last_child.take() {
            new_child.previous_sibling.set(Some(last_child));
            debug_assert!(last_child.next_sibling.get().is_none());
            last_child.next_sibling.set(Some(new_child));
        } else {
            debug_assert!(self.first_child.get().is_none());
            self.first_child.set(Some(new_child));
        }
        self.last_child.set(Some(new_child));
    }

    /// Insert `new_sibling` immediately before this node.
    pub fn insert_before(&'a self, new_sibling: &'a Node<'a, T>) {
        new_sibling.detach();
        new_sibling.parent.set(self.parent.get());
        new_sibling.next_sibling.set(Some(self));
        if let Some(previous_sibling) = self.previous_sibling.take() {
            new_sibling.previous_sibling.set(Some(previous_sibling));
            previous_sibling.next_sibling.set(Some(new_sibling));
        } else if let Some(parent) = self.parent.get() {
            debug_assert!(parent
                .first_child
                .get()
                .map_or(false, |first| first.same_node(self)));
            parent.first_child.set(Some(new_sibling));
        }
        self.previous_sibling.set(Some(new_sibling));
    }
}

/// An iterator over the children of a node.
#[derive(Debug)]
pub struct Children<'a, T: 'a>(Option<&'a Node<'a, T>>);

impl<'a, T> Iterator for Children<'a, T> {
    type Item = &'a Node<'a, T>;

    fn next(&mut self) -> Option<&'a Node<'a, T>> {
        let node = self.0.take()?;
        self.0 = node.next_sibling.get();
        Some(node)
    }
}

/// An iterator over a node and its descendants, in tree order.
#[derive(Debug)]
pub struct Descendants<'a, T: 'a> {
    root: &'a Node<'a, T>,
    next: Option<&'a Node<'a, T>>,
}

impl<'a, T> Iterator for Descendants<'a, T> {
    type Item = &'a Node<'a, T>;

    fn next(&mut self) -> Option<&'a Node<'a, T>> {
        let node = self.next.take()?;

        self.next = match node.first_child.get() {
            Some(child) => Some(child),
            None => {
                let mut current = node;
                loop {
                    if current.same_node(self.root) {
                        break None;
                    }
                    if let Some(sibling) = current.next_sibling.get() {
                        break Some(sibling);
                    }
                    match current.parent.get() {
                        Some(parent) => current = parent,
                        None => panic!("tree modified during iteration"),
                    }
                }
            }
        };

        Some(node)
    }
}
