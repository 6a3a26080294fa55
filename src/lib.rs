//! Approximate string lookup backed by a BK-tree.
//!
//! ```
//! use bk_index::BkTree;
//!
//! let mut tree = BkTree::new();
//! for word in ["cat", "cats", "bat", "bad"] {
//!     tree.insert(word);
//! }
//!
//! let mut found: Vec<_> = tree.search("cat", 1).into_iter().map(|m| m.word).collect();
//! found.sort();
//! assert_eq!(found, ["bat", "cat", "cats"]);
//!
//! tree.remove("cat");
//! assert!(tree.search("cat", 0).is_empty());
//! ```

pub mod bk_tree;
pub mod error;
pub mod metric;
pub mod query_parser;
pub mod word_list;

pub use bk_tree::{BkTree, Entry, Insertion, NodeSnapshot, Removal, SearchMatch};
pub use error::{Error, QueryError, Result, WordListError};
pub use metric::{Levenshtein, Metric};
