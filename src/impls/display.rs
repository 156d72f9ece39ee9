use crate::SegmentTree;
use std::fmt;

impl<T: fmt::Debug, F> SegmentTree<T, F> {
    /// Renders the node store one level per line, root first. Slots the
    /// build never visited print as `_`.
    pub fn to_display_string(&self) -> String {
        let node_count = self.tree.node_count();
        let mut out = String::new();
        let mut level_start = 0;
        let mut level_len = 1;
        while level_start < node_count {
            let level_end = node_count.min(level_start + level_len);
            let row: Vec<String> = (level_start..level_end)
                .map(|node| match self.tree.slot(node) {
                    Some(value) => format!("{:?}", value),
                    None => "_".to_string(),
                })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
            level_start = level_end;
            level_len *= 2;
        }
        out
    }
}
