//! Dynamic forests with path sums, using link cut trees.

use std::fmt::Debug;
use std::ops::Add;

pub mod link_cut_tree;
pub mod splay;
pub use link_cut_tree::{LinkCutTree, Node, LCT};

/// Values stored on the nodes. They are combined with `+`, and `Default` must be the zero.
pub trait Scalar: Copy + Default + Add<Output = Self> + Debug {}

impl<T> Scalar for T where T: Copy + Default + Add<Output = T> + Debug {}

/// Link cut tree over integer values.
pub type SumLinkCutTree = LCT<i64>;
