//! Word normalisation and word-list parsing.
//!
//! Word files are free-form: tokens are separated by commas, semicolons, or
//! any run of whitespace, and may be given in any case.

use crate::{PuzzleError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A validated word: one or more ASCII letters, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Uppercase `raw` and check it is letters only.
    pub fn parse(raw: &str) -> Result<Self> {
        let token = raw.to_ascii_uppercase();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PuzzleError::InvalidWord { token });
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl std::str::FromStr for Word {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = PuzzleError;

    fn try_from(s: String) -> Result<Self> {
        Word::parse(&s)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of words; order decides placement order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<Word>,
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

impl WordList {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse every token in `text`. The first bad token fails the whole parse.
    pub fn parse(text: &str) -> Result<Self> {
        let mut list = Self::default();
        for line in text.lines() {
            list.extend_from_line(line)?;
        }
        Ok(list)
    }

    /// Read and parse a word source line by line
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = Self::default();
        for line in reader.lines() {
            list.extend_from_line(&line?)?;
        }
        Ok(list)
    }

    /// Load a word file from disk
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let list = Self::from_reader(BufReader::new(file))?;
        log::debug!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    fn extend_from_line(&mut self, line: &str) -> Result<()> {
        for token in line.split(is_separator).filter(|t| !t.is_empty()) {
            self.words.push(Word::parse(token)?);
        }
        Ok(())
    }

    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Length of the longest word, or 0 for an empty list
    pub fn longest(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }

    /// Words joined by `;` in lowercase, as written to save files
    pub fn to_save_line(&self) -> String {
        self.words
            .iter()
            .map(|w| w.as_str().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(list: &WordList) -> Vec<&str> {
        list.iter().map(Word::as_str).collect()
    }

    #[test]
    fn test_word_is_uppercased() {
        assert_eq!(Word::parse("cAt").unwrap().as_str(), "CAT");
    }

    #[test]
    fn test_word_rejects_non_letters() {
        for bad in ["cat3", "o'neil", "é", "a-b"] {
            assert!(
                matches!(Word::parse(bad), Err(PuzzleError::InvalidWord { .. })),
                "{bad} should be rejected"
            );
        }
        assert!(matches!(Word::parse(""), Err(PuzzleError::InvalidWord { .. })));
    }

    #[test]
    fn test_parse_splits_on_all_separators() {
        let list = WordList::parse("cat, dog;bird  fish\n\n  \tmouse;;,owl\n").unwrap();
        assert_eq!(strs(&list), vec!["CAT", "DOG", "BIRD", "FISH", "MOUSE", "OWL"]);
    }

    #[test]
    fn test_invalid_token_aborts_load() {
        let err = WordList::parse("dog\ncat3 bird").unwrap_err();
        match err {
            PuzzleError::InvalidWord { token } => assert_eq!(token, "CAT3"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reader_matches_parse() {
        let text = "alpha beta\ngamma;delta";
        let from_text = WordList::parse(text).unwrap();
        let from_reader = WordList::from_reader(text.as_bytes()).unwrap();
        assert_eq!(from_text, from_reader);
    }

    #[test]
    fn test_save_line_and_longest() {
        let list = WordList::parse("Ab CDE").unwrap();
        assert_eq!(list.to_save_line(), "ab;cde");
        assert_eq!(list.longest(), 3);
        assert_eq!(WordList::default().longest(), 0);
    }
}
