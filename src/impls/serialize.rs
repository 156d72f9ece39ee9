use crate::SegmentTree;
use serde::{Serialize, Serializer};

// the merge capability is an arbitrary closure and cannot round-trip, so
// snapshots carry the node store alone
impl<T: Serialize, F> Serialize for SegmentTree<T, F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tree.serialize(serializer)
    }
}
