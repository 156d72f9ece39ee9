mod display;
pub(crate) mod iter;
mod serialize;

use crate::tree::Tree;
use crate::{SegmentTree, TreeError};
use std::fmt;

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds a tree over `values`, combining aggregates with `merge`.
    ///
    /// `merge` must be associative and total; the tree never checks this.
    /// For a non-commutative `merge` the left operand is always the
    /// lower-index partial result. Fails with [`TreeError::InvalidInput`]
    /// for an empty slice and cannot fail otherwise.
    pub fn new(values: &[T], merge: F) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::InvalidInput);
        }
        let mut seg = Self {
            tree: Tree::with_leaf_count(values.len()),
            merge,
        };
        let root = seg.tree.root();
        seg.build_node(values, root, 0, values.len() - 1);
        Ok(seg)
    }

    fn build_node(&mut self, values: &[T], node: usize, node_lo: usize, node_hi: usize) {
        if node_lo == node_hi {
            self.tree.set_value(node, values[node_lo].clone());
            return;
        }
        let mid = node_lo + (node_hi - node_lo) / 2;
        let (left, right) = (self.tree.left_child(node), self.tree.right_child(node));
        self.build_node(values, left, node_lo, mid);
        self.build_node(values, right, mid + 1, node_hi);
        let merged = (self.merge)(self.tree.value(left), self.tree.value(right));
        self.tree.set_value(node, merged);
    }

    /// Aggregate of the inclusive range `[lo, hi]`, in `O(log n)`.
    ///
    /// Fails with [`TreeError::InvalidRange`] if `lo > hi` or `hi` is out
    /// of bounds, before any traversal starts.
    pub fn query(&self, lo: usize, hi: usize) -> Result<T, TreeError> {
        let len = self.len();
        if lo > hi || hi >= len {
            return Err(TreeError::InvalidRange { lo, hi, len });
        }
        Ok(self.query_node(self.tree.root(), 0, len - 1, lo, hi))
    }

    fn query_node(&self, node: usize, node_lo: usize, node_hi: usize, lo: usize, hi: usize) -> T {
        if lo == node_lo && hi == node_hi {
            // exact cover: the stored aggregate already is the answer
            return self.tree.value(node).clone();
        }
        let mid = node_lo + (node_hi - node_lo) / 2;
        if lo > mid {
            return self.query_node(self.tree.right_child(node), mid + 1, node_hi, lo, hi);
        }
        if hi <= mid {
            return self.query_node(self.tree.left_child(node), node_lo, mid, lo, hi);
        }
        let left = self.query_node(self.tree.left_child(node), node_lo, mid, lo, mid);
        let right = self.query_node(self.tree.right_child(node), mid + 1, node_hi, mid + 1, hi);
        // lower-index partial stays on the left so a non-commutative
        // merge sees the elements in array order
        (self.merge)(&left, &right)
    }

    /// Replaces the element at `index`, restoring every ancestor aggregate.
    pub fn update(&mut self, index: usize, value: T) -> Result<(), TreeError> {
        self.update_with(index, |slot| *slot = value)
    }

    /// Applies `op` to the element at `index` in place, then restores every
    /// ancestor aggregate. Fails with [`TreeError::InvalidIndex`] before
    /// touching anything if `index` is out of bounds.
    pub fn update_with(&mut self, index: usize, op: impl FnOnce(&mut T)) -> Result<(), TreeError> {
        let len = self.len();
        if index >= len {
            return Err(TreeError::InvalidIndex { index, len });
        }
        let leaf = self.leaf_for(index);
        op(self.tree.value_mut(leaf));
        self.update_ancestors(leaf);
        Ok(())
    }

    fn update_ancestors(&mut self, mut node: usize) {
        while let Some(parent) = self.tree.parent(node) {
            let merged = (self.merge)(
                self.tree.value(self.tree.left_child(parent)),
                self.tree.value(self.tree.right_child(parent)),
            );
            self.tree.set_value(parent, merged);
            node = parent;
        }
    }
}

impl<T, F> SegmentTree<T, F> {
    /// Number of elements the tree covers.
    pub fn len(&self) -> usize {
        self.tree.leaf_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate of the whole array, in `O(1)`.
    pub fn root(&self) -> &T {
        self.tree.value(self.tree.root())
    }

    /// Current value of the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, TreeError> {
        let len = self.len();
        if index >= len {
            return Err(TreeError::InvalidIndex { index, len });
        }
        Ok(self.tree.value(self.leaf_for(index)))
    }

    // walks the unique root-to-leaf path; index must be in bounds
    fn leaf_for(&self, index: usize) -> usize {
        let mut node = self.tree.root();
        let (mut node_lo, mut node_hi) = (0, self.len() - 1);
        while node_lo < node_hi {
            let mid = node_lo + (node_hi - node_lo) / 2;
            if index <= mid {
                node = self.tree.left_child(node);
                node_hi = mid;
            } else {
                node = self.tree.right_child(node);
                node_lo = mid + 1;
            }
        }
        node
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len())
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}
