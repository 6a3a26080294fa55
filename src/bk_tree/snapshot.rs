use serde::{Deserialize, Serialize};

use super::node::Node;

/// Read-only export of the tree shape for renderers.
///
/// `distance` is the key the node hangs under in its parent (0 for the root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub word: String,
    pub distance: u32,
    pub deleted: bool,
    pub children: Vec<NodeSnapshot>,
}

// A node whose children are exported up to `children.len()`.
struct Frame<'a> {
    node: &'a Node,
    distance: u32,
    children: Vec<NodeSnapshot>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a Node, distance: u32) -> Self {
        Self {
            node,
            distance,
            children: Vec::with_capacity(node.children().len()),
        }
    }

    fn finish(self) -> NodeSnapshot {
        NodeSnapshot {
            word: self.node.entry().word().to_string(),
            distance: self.distance,
            deleted: self.node.entry().is_deleted(),
            children: self.children,
        }
    }
}

impl NodeSnapshot {
    /// Post-order export with an explicit stack; chains of single-character
    /// words make trees as deep as they are large.
    pub(crate) fn from_root(root: Option<&Node>) -> Option<Self> {
        let mut stack: Vec<Frame<'_>> = root
            .into_iter()
            .map(|node| Frame::new(node, 0))
            .collect();
        let mut exported = None;

        while let Some(frame) = stack.pop() {
            let node = frame.node;
            if let Some((key, child)) = node.children().get(frame.children.len()) {
                stack.push(frame);
                stack.push(Frame::new(child, *key));
                continue;
            }

            let snapshot = frame.finish();
            match stack.last_mut() {
                Some(parent) => parent.children.push(snapshot),
                None => exported = Some(snapshot),
            }
        }
        exported
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(snapshot) = stack.pop() {
            count += 1;
            stack.extend(snapshot.children.iter());
        }
        count
    }
}

impl Drop for NodeSnapshot {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut snapshot) = pending.pop() {
            pending.append(&mut snapshot.children);
        }
    }
}
