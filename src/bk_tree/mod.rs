//! Burkhard-Keller tree over strings.
//!
//! Every node holds one word; its children are keyed by their exact distance
//! from that word. Because the metric obeys the triangle inequality, a search
//! for `word` within `max_distance` only has to descend into children keyed
//! in `d - max_distance ..= d + max_distance`, where `d` is the distance from
//! `word` to the current node.
//!
//! Removal tombstones a node instead of unlinking it, so the shape of the
//! tree never changes except through insertion and [`BkTree::compact`].
//!
//! All operations take the tree by reference (`&self` for reads, `&mut self`
//! for `insert`/`remove`), so sharing one index between threads needs an
//! outer lock such as `RwLock<BkTree>`.

mod iter;
mod node;
mod snapshot;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::metric::{Levenshtein, Metric};

pub use iter::Iter;
pub use node::{Entry, Node};
pub use snapshot::NodeSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub word: String,
    pub distance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Created,
    /// The word was stored but tombstoned; it is active again.
    Reactivated,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Tombstoned,
    AlreadyTombstoned,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct BkTree<M = Levenshtein> {
    root: Option<Node>,
    metric: M,
    node_count: usize,
    tombstoned: usize,
}

impl BkTree<Levenshtein> {
    pub fn new() -> Self {
        Self::with_metric(Levenshtein)
    }
}

impl Default for BkTree<Levenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric> BkTree<M> {
    /// Builds an empty tree over any metric.
    pub fn with_metric(metric: M) -> Self {
        Self {
            root: None,
            metric,
            node_count: 0,
            tombstoned: 0,
        }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Adds `word`, or reactivates it if it was removed earlier.
    ///
    /// Never creates a second node for a word already in the tree.
    pub fn insert(&mut self, word: impl Into<String>) -> Insertion {
        let word = word.into();

        let Some(mut node) = self.root.as_mut() else {
            trace!(word = %word, "bk-tree root created");
            self.root = Some(Node::new(word));
            self.node_count = 1;
            return Insertion::Created;
        };

        loop {
            let distance = self.metric.distance(&word, node.entry.word());
            if distance == 0 {
                if node.entry.is_deleted() {
                    node.entry.set_deleted(false);
                    self.tombstoned -= 1;
                    trace!(word = %word, "bk-tree entry reactivated");
                    return Insertion::Reactivated;
                }
                return Insertion::AlreadyPresent;
            }

            match node.child_index(distance) {
                Ok(index) => node = &mut node.children[index].1,
                Err(index) => {
                    trace!(
                        word = %word,
                        parent = node.entry.word(),
                        distance,
                        "bk-tree node created"
                    );
                    node.children.insert(index, (distance, Node::new(word)));
                    self.node_count += 1;
                    return Insertion::Created;
                }
            }
        }
    }

    /// Every active word within `max_distance` of `word`.
    ///
    /// Results come in pre-order, children visited by ascending key. They are
    /// not sorted by distance.
    pub fn search(&self, word: &str, max_distance: u32) -> Vec<SearchMatch> {
        let mut results = Vec::new();
        let Some(root) = self.root.as_ref() else {
            return results;
        };

        let mut visited = 0usize;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            visited += 1;
            let distance = self.metric.distance(word, node.entry.word());
            if distance <= max_distance && !node.entry.is_deleted() {
                results.push(SearchMatch {
                    word: node.entry.word().to_string(),
                    distance,
                });
            }

            // keys are never 0, so the lower bound starts at 1
            let low = distance.saturating_sub(max_distance).max(1);
            let high = distance.saturating_add(max_distance);
            stack.extend(
                node.children_in_range(low, high)
                    .iter()
                    .rev()
                    .map(|(_, child)| child),
            );
        }

        debug!(
            word,
            max_distance,
            visited,
            matches = results.len(),
            "bk-tree search"
        );
        results
    }

    /// Tombstones `word`. The node stays in place and keeps routing searches
    /// to its descendants.
    pub fn remove(&mut self, word: &str) -> Removal {
        let metric = &self.metric;
        let Some(mut node) = self.root.as_mut() else {
            return Removal::NotFound;
        };

        loop {
            let distance = metric.distance(word, node.entry.word());
            if distance == 0 {
                if node.entry.is_deleted() {
                    return Removal::AlreadyTombstoned;
                }
                node.entry.set_deleted(true);
                self.tombstoned += 1;
                trace!(word, "bk-tree entry tombstoned");
                return Removal::Tombstoned;
            }

            match node.child_index(distance) {
                Ok(index) => node = &mut node.children[index].1,
                Err(_) => return Removal::NotFound,
            }
        }
    }

    /// Exact membership of an active word.
    pub fn contains(&self, word: &str) -> bool {
        let Some(mut node) = self.root.as_ref() else {
            return false;
        };

        loop {
            let distance = self.metric.distance(word, node.entry.word());
            if distance == 0 {
                return !node.entry.is_deleted();
            }
            match node.child(distance) {
                Some(child) => node = child,
                None => return false,
            }
        }
    }

    /// Number of active words.
    pub fn len(&self) -> usize {
        self.node_count - self.tombstoned
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes, tombstoned ones included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn tombstoned_count(&self) -> usize {
        self.tombstoned
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_ref())
    }

    /// Active words in pre-order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|entry| !entry.is_deleted())
            .map(Entry::word)
    }

    pub fn snapshot(&self) -> Option<NodeSnapshot> {
        NodeSnapshot::from_root(self.root.as_ref())
    }

    /// Rebuilds the tree from its active words, dropping every tombstoned
    /// node. Returns how many nodes were reclaimed.
    pub fn compact(&mut self) -> usize {
        let reclaimed = self.tombstoned;
        if reclaimed == 0 {
            return 0;
        }

        let words: Vec<String> = self.words().map(str::to_string).collect();
        self.root = None;
        self.node_count = 0;
        self.tombstoned = 0;
        for word in words {
            self.insert(word);
        }

        debug!(reclaimed, remaining = self.node_count, "bk-tree compacted");
        reclaimed
    }
}

impl<'a, M: Metric> IntoIterator for &'a BkTree<M> {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M: Metric, S: Into<String>> Extend<S> for BkTree<M> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for BkTree<Levenshtein> {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut tree = BkTree::new();
        tree.extend(words);
        tree
    }
}
