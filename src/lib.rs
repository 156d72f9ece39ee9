//! An array-backed segment tree with a caller-supplied merge operation.
//!
//! [`SegmentTree`] answers an associative aggregate over any contiguous
//! range of an array in `O(log n)` and replaces single elements in
//! `O(log n)`, keeping every stored aggregate consistent. The merge
//! operation is an arbitrary `Fn(&T, &T) -> T` supplied at construction;
//! it must be associative, but it does not have to be commutative and no
//! identity element is required.
//!
//! ```
//! use segment_tree::SegmentTree;
//!
//! let mut tree = SegmentTree::new(&[1i64, 2, 3, 4], |a, b| a + b)?;
//! assert_eq!(tree.query(1, 3)?, 9);
//! tree.update(2, 10)?;
//! assert_eq!(tree.query(1, 3)?, 16);
//! # Ok::<(), segment_tree::TreeError>(())
//! ```

mod impls;
mod tree;

use std::fmt;
use tree::Tree;

pub use impls::iter::Iter;

/// Segment tree over a fixed number of elements, merging with `F`.
///
/// The tree is an implicit binary tree stored in one flat buffer; the
/// buffer never grows or reallocates after construction.
pub struct SegmentTree<T, F> {
    tree: Tree<T>,
    merge: F,
}

/// Error cases reported by the tree API.
///
/// Every case is detected at the call boundary before any traversal, so a
/// failed call never mutates the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Construction from an empty slice.
    InvalidInput,
    /// Query bounds inverted or outside `0..len`.
    InvalidRange { lo: usize, hi: usize, len: usize },
    /// Element index outside `0..len`.
    InvalidIndex { index: usize, len: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TreeError::InvalidInput => {
                write!(f, "cannot build a segment tree over zero elements")
            }
            TreeError::InvalidRange { lo, hi, len } => write!(
                f,
                "invalid query range: the len is {} but the range is [{}, {}]",
                len, lo, hi
            ),
            TreeError::InvalidIndex { index, len } => write!(
                f,
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl std::error::Error for TreeError {}
