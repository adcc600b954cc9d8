//! Link Cut Tree implementation, with path sums.

use crate::splay::{PrettyIdx as I, Splays, EMPTY};
use crate::Scalar;

pub type Node = usize;

/// Interface of a Link Cut Tree.
/// It maintains a collection of trees dynamically, each node holding a value. Trees are
/// unrooted for the caller, but each one has a current root which some operations change.
/// All operations panic if a node doesn't exist.
pub trait LinkCutTree<T: Scalar> {
    /// Create a new LinkCutTree with no vertices, with space for n vertices.
    fn with_capacity(n: usize) -> Self;
    /// Create a new LinkCutTree with one isolated vertex per value, numbered from 0.
    fn from_values(values: impl IntoIterator<Item = T>) -> Self
    where
        Self: Sized,
    {
        let values = values.into_iter();
        let mut t = Self::with_capacity(values.size_hint().0);
        for value in values {
            t.create(value);
        }
        t
    }
    /// Adds an isolated vertex. Returns its index, which increases from 0.
    fn create(&mut self, value: T) -> Node;
    /// Number of vertices.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Value of vertex u.
    fn value(&self, u: Node) -> T;
    /// Makes u the root of its current tree.
    fn make_root(&mut self, u: Node);
    /// Returns the root of the tree containing u.
    fn find_root(&mut self, u: Node) -> Node;
    /// Are u and v on the same tree?
    fn connected(&mut self, u: Node, v: Node) -> bool {
        u == v || self.find_root(u) == self.find_root(v)
    }
    /// Adds an edge between u and v, hanging the tree of u from v. Returns false, without adding
    /// the edge, if they were already in the same tree.
    /// Reroots u, and keeps the root of the tree containing v the same.
    fn link(&mut self, u: Node, v: Node) -> bool;
    /// Removes the edge between u and v. Returns false, without changing any edge, if there is
    /// no such edge.
    /// Reroots u. On success v becomes the root of the other tree.
    fn cut(&mut self, u: Node, v: Node) -> bool;
    /// Changes the value of u.
    fn update_value(&mut self, u: Node, value: T);
    /// Sum of values on the path between u and v, both included. None if they are in different
    /// trees.
    /// Reroots u.
    fn path_sum(&mut self, u: Node, v: Node) -> Option<T>;
    /// The lowest common ancestor of u and v for the current root. None if they are in different
    /// trees.
    fn lca(&mut self, u: Node, v: Node) -> Option<Node>;
}

#[derive(Debug)]
pub struct LCT<T> {
    // Path-parents are stored as the parent of the root of each auxiliary tree.
    s: Splays<T>,
}

impl<T: Scalar> LCT<T> {
    /// Makes the path from the root to u a single auxiliary tree, with u at its root and as its
    /// last node.
    /// Returns the point where the access operation entered the topmost preferred path.
    /// That is, returns the LCA of u with the last node that called access.
    fn access(&mut self, u: Node) -> Node {
        let mut last = EMPTY;
        let mut cur = u;
        while cur != EMPTY {
            self.s.splay(cur);
            // The old right child now hangs from cur as a separate path.
            self.s.set_child(cur, 1, last);
            last = cur;
            cur = self.s.parent(cur);
        }
        self.s.splay(u);
        log::trace!("access({u}) entered the root path at {}", I(last));
        last
    }
}

impl<T: Scalar> LinkCutTree<T> for LCT<T> {
    fn with_capacity(n: usize) -> Self {
        Self {
            s: Splays::new(n),
        }
    }

    fn create(&mut self, value: T) -> Node {
        self.s.create(value)
    }

    fn len(&self) -> usize {
        self.s.len()
    }

    fn value(&self, u: Node) -> T {
        self.s.value(u)
    }

    fn make_root(&mut self, u: Node) {
        log::trace!("make_root({u})");
        self.access(u);
        // u is the last node of the root path, reversing it makes u the first.
        self.s.reverse(u);
        self.s.push_down(u);
    }

    fn find_root(&mut self, u: Node) -> Node {
        self.access(u);
        let mut cur = u;
        loop {
            let [l, _] = self.s.children(cur);
            if l == EMPTY {
                break;
            }
            cur = l;
        }
        self.s.splay(cur);
        cur
    }

    fn link(&mut self, u: Node, v: Node) -> bool {
        self.make_root(u);
        if self.find_root(v) == u {
            log::debug!("link({u}, {v}) skipped, already connected");
            return false;
        }
        log::trace!("link({u}, {v})");
        self.s.set_parent(u, v);
        true
    }

    fn cut(&mut self, u: Node, v: Node) -> bool {
        self.make_root(u);
        self.access(v);
        // The path is now u..v. The edge exists iff it is exactly [u, v].
        let [l, _] = self.s.children(v);
        if l != u || self.s.children(u)[1] != EMPTY {
            log::debug!("cut({u}, {v}) skipped, not an edge");
            return false;
        }
        log::trace!("cut({u}, {v})");
        self.s.set_child(v, 0, EMPTY);
        self.s.set_parent(u, EMPTY);
        true
    }

    fn update_value(&mut self, u: Node, value: T) {
        self.s.splay(u);
        self.s.set_value(u, value);
    }

    fn path_sum(&mut self, u: Node, v: Node) -> Option<T> {
        self.make_root(u);
        if self.find_root(v) != u {
            return None;
        }
        self.access(v);
        Some(self.s.sum(v))
    }

    fn lca(&mut self, u: Node, v: Node) -> Option<Node> {
        let ru = self.find_root(u);
        let lca = self.access(v);
        let rv = self.find_root(v);
        (ru == rv).then_some(lca)
    }
}
