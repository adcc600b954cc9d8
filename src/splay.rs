//! Arena of splay trees with lazy subtree reversal and cached sums.
//!
//! Every tree here is an auxiliary tree of a link cut tree: its in-order traversal is one path
//! of the represented forest, from the shallowest to the deepest node. The `parent` of the root
//! of an auxiliary tree is its path-parent, the node the path hangs from in the forest.

use std::fmt::{Debug, Display, Formatter};

use debug_tree::{add_branch_to, add_leaf_to, AsTree, TreeBuilder};
use derivative::Derivative;

use crate::Scalar;

pub type Idx = usize;

/// Marks an absent child or parent.
pub const EMPTY: Idx = usize::MAX;

fn node_fmt(u: &Idx, f: &mut Formatter) -> std::fmt::Result {
    if *u == EMPTY {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}
fn node2_fmt([u, v]: &[Idx; 2], f: &mut Formatter) -> std::fmt::Result {
    write!(f, "[")?;
    node_fmt(u, f)?;
    write!(f, ", ")?;
    node_fmt(v, f)?;
    write!(f, "]")
}

/// Used to pretty print a Idx, outputting ∅ if it is EMPTY.
pub struct PrettyIdx(pub Idx);

impl Display for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        node_fmt(&self.0, f)
    }
}

impl Debug for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
struct Node<T> {
    /// Parent in the auxiliary tree, or the path-parent if this node is the auxiliary root.
    #[derivative(Debug(format_with = "node_fmt"))]
    parent: Idx,
    /// Left and right child
    #[derivative(Debug(format_with = "node2_fmt"))]
    child: [Idx; 2],
    /// This node's children, and recursively their subtrees, must be swapped before being read.
    flip_subtree: bool,
    value: T,
    /// Sum of the values in this node's subtree
    sum: T,
}

impl<T: Scalar> Node<T> {
    fn new(value: T) -> Self {
        Self {
            parent: EMPTY,
            child: [EMPTY; 2],
            flip_subtree: false,
            value,
            sum: value,
        }
    }
}

impl<T> Node<T> {
    fn flip(&self, flipped: bool) -> bool {
        self.flip_subtree ^ flipped
    }
}

pub struct Splays<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Debug> Debug for Splays<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch("Splays");
        for u in 0..self.nodes.len() {
            if self.is_aux_root(u) {
                self.tree_preorder_dbg(u, false, &builder);
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl<T: Debug> Splays<T> {
    /// Honours pending flips without pushing them down.
    fn tree_preorder_dbg<A: AsTree>(&self, u: Idx, flipped: bool, tree: &A) {
        let nu = &self.nodes[u];
        add_branch_to!(*tree, "[{u}] {nu:?}");
        let flipped = nu.flip(flipped);
        let child = if flipped {
            [nu.child[1], nu.child[0]]
        } else {
            nu.child
        };
        if child == [EMPTY, EMPTY] {
            return;
        }
        for c in child {
            if c != EMPTY {
                self.tree_preorder_dbg(c, flipped, tree);
            } else {
                add_leaf_to!(*tree, "<no child>");
            }
        }
    }
}

impl<T> Splays<T> {
    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Auxiliary parent of u, or its path-parent if u is the root of its auxiliary tree.
    pub fn parent(&self, u: Idx) -> Idx {
        self.nodes[u].parent
    }

    /// Whether u is the root of its auxiliary tree, that is, its `parent` is either EMPTY or a
    /// path-parent that doesn't have u as a child. Pending flips only swap children, so the
    /// answer doesn't depend on them.
    pub fn is_aux_root(&self, u: Idx) -> bool {
        let p = self.nodes[u].parent;
        p == EMPTY || !self.nodes[p].child.contains(&u)
    }

    /// 0 if u is the left child of its parent, 1 if the right. Parent must be pushed down.
    fn dir(&self, u: Idx) -> usize {
        let p = self.nodes[u].parent;
        debug_assert!(!self.is_aux_root(u));
        (self.nodes[p].child[1] == u) as usize
    }

    fn n(&self, u: Idx) -> Option<&Node<T>> {
        if u == EMPTY {
            None
        } else {
            Some(&self.nodes[u])
        }
    }

    pub(crate) fn set_parent(&mut self, u: Idx, p: Idx) {
        self.nodes[u].parent = p;
    }

    /// Schedules the reversal of the whole subtree of u.
    pub(crate) fn reverse(&mut self, u: Idx) {
        self.nodes[u].flip_subtree ^= true;
    }

    pub(crate) fn push_down(&mut self, u: Idx) {
        let n = &mut self.nodes[u];
        if n.flip_subtree {
            n.flip_subtree = false;
            n.child.swap(0, 1);
            let child = n.child;
            for c in child {
                if c != EMPTY {
                    self.nodes[c].flip_subtree ^= true;
                }
            }
        }
    }

    /// Children of u. Always pushes down u first, so they are never read stale.
    pub(crate) fn children(&mut self, u: Idx) -> [Idx; 2] {
        self.push_down(u);
        self.nodes[u].child
    }
}

impl<T: Scalar> Splays<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new single node tree. Returns its index, which increases from 0.
    pub fn create(&mut self, value: T) -> Idx {
        let idx = self.nodes.len();
        self.nodes.push(Node::new(value));
        idx
    }

    pub fn value(&self, u: Idx) -> T {
        self.nodes[u].value
    }

    /// Sum of the values in the subtree of u. Zero for EMPTY.
    pub fn sum(&self, u: Idx) -> T {
        self.n(u).map_or_else(T::default, |n| n.sum)
    }

    /// Call when children or value of u are changed.
    pub(crate) fn push_up(&mut self, u: Idx) {
        let [l, r] = self.nodes[u].child;
        self.nodes[u].sum = self.sum(l) + self.nodes[u].value + self.sum(r);
    }

    pub(crate) fn set_value(&mut self, u: Idx, value: T) {
        self.nodes[u].value = value;
        self.push_up(u);
    }

    /// Replaces child d of u with c and returns the old child. The old child keeps u as its
    /// parent, which makes u its path-parent. Recalculates u.
    pub(crate) fn set_child(&mut self, u: Idx, d: usize, c: Idx) -> Idx {
        self.push_down(u);
        let old = std::mem::replace(&mut self.nodes[u].child[d], c);
        if c != EMPTY {
            self.nodes[c].parent = u;
        }
        self.push_up(u);
        old
    }

    /// Moves x above its parent p, keeping in-order. If p was the auxiliary root, x inherits its
    /// path-parent. Both x and p must be pushed down.
    fn rotate(&mut self, x: Idx) {
        let p = self.nodes[x].parent;
        let g = self.nodes[p].parent;
        let d = self.dir(x);
        if !self.is_aux_root(p) {
            let pd = self.dir(p);
            self.nodes[g].child[pd] = x;
        }
        self.nodes[x].parent = g;
        let b = self.nodes[x].child[1 - d];
        self.nodes[p].child[d] = b;
        if b != EMPTY {
            self.nodes[b].parent = p;
        }
        self.nodes[x].child[1 - d] = p;
        self.nodes[p].parent = x;
        self.push_up(p);
        self.push_up(x);
    }

    /// Makes x the root of its auxiliary tree.
    pub(crate) fn splay(&mut self, x: Idx) {
        let mut path = vec![x];
        let mut u = x;
        while !self.is_aux_root(u) {
            u = self.nodes[u].parent;
            path.push(u);
        }
        for &u in path.iter().rev() {
            self.push_down(u);
        }
        while !self.is_aux_root(x) {
            let p = self.nodes[x].parent;
            if !self.is_aux_root(p) {
                if self.dir(x) == self.dir(p) {
                    // zig-zig
                    self.rotate(p);
                } else {
                    // zig-zag
                    self.rotate(x);
                }
            }
            self.rotate(x);
        }
        self.push_up(x);
    }
}
