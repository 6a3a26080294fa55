//! Turns raw user input into index calls: word and tolerance normalization,
//! plus the line-oriented command syntax of the `bk-index` binary.

pub mod command;
pub mod normalize;

pub use command::Command;
pub use normalize::{normalize_word, parse_max_distance};
