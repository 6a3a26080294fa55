use crate::error::QueryError;

use super::normalize::{normalize_word, parse_max_distance};

/// One line of input to the interactive binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Search { word: String, max_distance: u32 },
    Export,
    Stats,
    Compact,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <word>                 index a word (reactivates a removed one)
  remove <word>              tombstone a word
  search [<word>] <max>      words within <max> edits of <word> (empty if omitted)
  export                     print the tree as JSON
  stats                      node and tombstone counts
  compact                    rebuild the tree without tombstoned nodes
  help                       this text
  quit                       exit";

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// The word of `add`/`remove` is the rest of the line, so it may contain
    /// spaces. For `search` the tolerance is the last token and the word is
    /// everything before it; a lone tolerance searches for the empty word.
    pub fn parse(line: &str) -> Result<Option<Command>, QueryError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "add" | "insert" => Command::Add(normalize_word(rest).ok_or(QueryError::EmptyWord)?),
            "remove" | "rm" => {
                Command::Remove(normalize_word(rest).ok_or(QueryError::EmptyWord)?)
            }
            "search" | "find" => parse_search(rest)?,
            "export" => Command::Export,
            "stats" => Command::Stats,
            "compact" => Command::Compact,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(QueryError::UnknownCommand(name.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_search(rest: &str) -> Result<Command, QueryError> {
    match rest.rsplit_once(char::is_whitespace) {
        Some((word, max_distance)) => Ok(Command::Search {
            word: normalize_word(word).unwrap_or_default(),
            max_distance: parse_max_distance(max_distance)?,
        }),
        None => match parse_max_distance(rest) {
            Ok(max_distance) => Ok(Command::Search {
                word: String::new(),
                max_distance,
            }),
            // a lone word with no tolerance after it
            Err(QueryError::InvalidMaxDistance(_)) => {
                Err(QueryError::MissingArgument("max distance"))
            }
            Err(e) => Err(e),
        },
    }
}
