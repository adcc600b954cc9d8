use link_cut_forest::{link_cut_tree::*, Scalar};

/// Dummy implementation with explicit parent pointers, most of the operations take linear time.
/// Roots change exactly as in LCT, so find_root and lca can be compared directly.
#[derive(Debug)]
pub struct SlowLCT<T> {
    parent: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> SlowLCT<T> {
    fn root(&self, u: Node) -> Node {
        if self.parent[u] == u {
            u
        } else {
            self.root(self.parent[u])
        }
    }

    /// u, parent of u, ..., root.
    fn path_to_root(&self, u: Node) -> Vec<Node> {
        let mut path = vec![u];
        let mut last = u;
        while self.parent[last] != last {
            last = self.parent[last];
            path.push(last);
        }
        path
    }

    #[allow(dead_code)]
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        u != v && (self.parent[u] == v || self.parent[v] == u)
    }
}

impl<T: Scalar> LinkCutTree<T> for SlowLCT<T> {
    fn with_capacity(n: usize) -> Self {
        Self {
            parent: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }

    fn create(&mut self, value: T) -> Node {
        let u = self.values.len();
        self.parent.push(u);
        self.values.push(value);
        u
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn value(&self, u: Node) -> T {
        self.values[u]
    }

    fn make_root(&mut self, u: Node) {
        let p = self.parent[u];
        if p != u {
            self.make_root(p);
            self.parent[p] = u;
            self.parent[u] = u;
        }
    }

    fn find_root(&mut self, u: Node) -> Node {
        self.root(u)
    }

    fn link(&mut self, u: Node, v: Node) -> bool {
        self.make_root(u);
        if self.root(v) == u {
            return false;
        }
        self.parent[u] = v;
        true
    }

    fn cut(&mut self, u: Node, v: Node) -> bool {
        self.make_root(u);
        if u == v || self.parent[v] != u {
            return false;
        }
        self.parent[v] = v;
        true
    }

    fn update_value(&mut self, u: Node, value: T) {
        self.values[u] = value;
    }

    fn path_sum(&mut self, u: Node, v: Node) -> Option<T> {
        self.make_root(u);
        if self.root(v) != u {
            return None;
        }
        Some(
            self.path_to_root(v)
                .into_iter()
                .fold(T::default(), |acc, w| acc + self.values[w]),
        )
    }

    fn lca(&mut self, u: Node, v: Node) -> Option<Node> {
        let pu = self.path_to_root(u);
        self.path_to_root(v).into_iter().find(|w| pu.contains(w))
    }
}
