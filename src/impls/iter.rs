use crate::tree::Tree;
use crate::SegmentTree;

/// In-order walk over the current element values, lowest index first.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    // (node, node_lo, node_hi) frames still to visit, rightmost deepest
    stack: Vec<(usize, usize, usize)>,
    remaining: usize,
}

impl<T, F> SegmentTree<T, F> {
    /// Iterates over the current element values in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: &self.tree,
            stack: vec![(self.tree.root(), 0, self.len() - 1)],
            remaining: self.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (mut node, mut node_lo, mut node_hi) = self.stack.pop()?;
        while node_lo < node_hi {
            let mid = node_lo + (node_hi - node_lo) / 2;
            self.stack
                .push((self.tree.right_child(node), mid + 1, node_hi));
            node = self.tree.left_child(node);
            node_hi = mid;
        }
        self.remaining -= 1;
        Some(self.tree.value(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T, F> IntoIterator for &'a SegmentTree<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
