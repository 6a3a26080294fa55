/// A stored word and its tombstone flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    deleted: bool,
}

impl Entry {
    pub fn new(word: String) -> Self {
        Self {
            word,
            deleted: false,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub(crate) fn set_deleted(&mut self, deleted: bool) {
        self.deleted = deleted;
    }
}

/// One tree node. Children are kept sorted by their distance key, one child per key.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) entry: Entry,
    pub(crate) children: Vec<(u32, Node)>,
}

impl Node {
    pub fn new(word: String) -> Self {
        Self {
            entry: Entry::new(word),
            children: Vec::new(),
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn children(&self) -> &[(u32, Node)] {
        &self.children
    }

    pub(crate) fn child_index(&self, distance: u32) -> Result<usize, usize> {
        self.children.binary_search_by_key(&distance, |(key, _)| *key)
    }

    pub(crate) fn child(&self, distance: u32) -> Option<&Node> {
        self.child_index(distance)
            .ok()
            .map(|index| &self.children[index].1)
    }

    /// Children whose key lies in `low..=high`, in ascending key order.
    pub(crate) fn children_in_range(&self, low: u32, high: u32) -> &[(u32, Node)] {
        let start = self.children.partition_point(|(key, _)| *key < low);
        let end = self.children.partition_point(|(key, _)| *key <= high);
        if start >= end {
            return &[];
        }
        &self.children[start..end]
    }
}

// Unlinks descendants one at a time so deep chains don't recurse in drop glue.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Node> = self.children.drain(..).map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with_keys(keys: &[u32]) -> Node {
        let mut node = Node::new("root".to_string());
        for key in keys {
            node.children.push((*key, Node::new(format!("child{key}"))));
        }
        node
    }

    #[test]
    fn test_new_entry_is_active() {
        let entry = Entry::new("word".to_string());
        assert_eq!(entry.word(), "word");
        assert!(!entry.is_deleted());
    }

    #[test]
    fn test_child_lookup() {
        let node = node_with_keys(&[1, 3, 4]);
        assert_eq!(node.child(3).unwrap().entry().word(), "child3");
        assert!(node.child(2).is_none());
        assert_eq!(node.child_index(2), Err(1));
        assert_eq!(node.child_index(9), Err(3));
    }

    #[test]
    fn test_children_in_range() {
        let node = node_with_keys(&[1, 3, 4, 7]);
        let keys = |low, high| {
            node.children_in_range(low, high)
                .iter()
                .map(|(key, _)| *key)
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(1, 4), vec![1, 3, 4]);
        assert_eq!(keys(2, 2), Vec::<u32>::new());
        assert_eq!(keys(4, u32::MAX), vec![4, 7]);
        assert_eq!(keys(8, 10), Vec::<u32>::new());
        assert_eq!(keys(5, 3), Vec::<u32>::new());
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node = Node::new("leaf".to_string());
        for i in 0..200_000 {
            let mut parent = Node::new(format!("w{i}"));
            parent.children.push((1, node));
            node = parent;
        }
        drop(node);
    }
}
