use serde::{Deserialize, Serialize};

/// Flat arena for an implicit binary tree: root at index 0, children of
/// node `n` at `2n + 1` and `2n + 2`. Slots the build recursion never
/// visits stay `None`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Tree<V> {
    nodes: Vec<Option<V>>,
    leaf_count: usize,
}

impl<V> Tree<V> {
    pub fn with_leaf_count(leaf_count: usize) -> Self {
        // 2^(ceil(log2 N) + 1) - 1 slots hold every midpoint split of N leaves
        let node_count = 2 * leaf_count.next_power_of_two() - 1;
        let mut nodes = Vec::new();
        nodes.resize_with(node_count, || None);
        Self { nodes, leaf_count }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> usize {
        0
    }

    pub fn left_child(&self, node: usize) -> usize {
        2 * node + 1
    }

    pub fn right_child(&self, node: usize) -> usize {
        2 * node + 2
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node == self.root() {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    // assumes the node was assigned during build
    pub fn value(&self, node: usize) -> &V {
        self.nodes[node].as_ref().expect("unassigned tree node")
    }

    pub fn value_mut(&mut self, node: usize) -> &mut V {
        self.nodes[node].as_mut().expect("unassigned tree node")
    }

    pub fn set_value(&mut self, node: usize, value: V) {
        self.nodes[node] = Some(value);
    }

    pub fn slot(&self, node: usize) -> Option<&V> {
        self.nodes[node].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;

    #[test]
    fn capacity_covers_every_split_pattern() {
        for (leaves, nodes) in [(1, 1), (2, 3), (3, 7), (4, 7), (5, 15), (8, 15), (9, 31)] {
            let tree = Tree::<i64>::with_leaf_count(leaves);
            assert_eq!(tree.node_count(), nodes);
            assert_eq!(tree.leaf_count(), leaves);
        }
    }

    #[test]
    fn navigation_is_plain_index_arithmetic() {
        let tree = Tree::<u8>::with_leaf_count(4);
        assert_eq!(tree.root(), 0);
        assert_eq!(tree.left_child(0), 1);
        assert_eq!(tree.right_child(0), 2);
        assert_eq!(tree.left_child(2), 5);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(0));
        assert_eq!(tree.parent(5), Some(2));
    }

    #[test]
    fn slots_round_trip_through_bincode() {
        let mut tree = Tree::with_leaf_count(3);
        tree.set_value(0, 6i64);
        tree.set_value(1, 3);
        tree.set_value(2, 3);
        let bytes = bincode::serialize(&tree).unwrap();
        let back: Tree<i64> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back.leaf_count(), 3);
        assert_eq!(back.node_count(), 7);
        assert_eq!(back.value(0), &6);
        assert_eq!(back.slot(5), None);
    }
}
