use super::node::{Entry, Node};

/// Pre-order walk over every entry, tombstoned ones included.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|(_, child)| child));
        Some(node.entry())
    }
}
