//! Bulk loading of words into an index.
//!
//! A word list is UTF-8 text, optionally bzip2-compressed (`.bz2`). Words are
//! separated by whitespace or commas; lines starting with `#` are comments.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::LazyLock,
};

use bzip2::read::BzDecoder;
use regex::Regex;
use tracing::info;

use crate::error::WordListError;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s,]+").expect("word pattern is a valid regex"));

pub fn parse(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        words.extend(WORD.find_iter(line).map(|m| m.as_str().to_string()));
    }
    words
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let io_error = |source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut bytes = Vec::new();
    if path.extension().is_some_and(|ext| ext == "bz2") {
        BzDecoder::new(BufReader::new(file))
            .read_to_end(&mut bytes)
            .map_err(io_error)?;
    } else {
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(io_error)?;
    }

    let text = String::from_utf8(bytes).map_err(|_| WordListError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    let words = parse(&text);
    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}
