use log::debug;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use trie_rs::{Trie, TrieBuilder};

use crate::MIN_WORD_LEN;

/// Word set with prefix lookup, normalized to uppercase A-Z.
///
/// Built once per session from a raw word list; the grid and blacklist can
/// change without touching it.
pub struct Dictionary {
    // None when no usable words survived normalization
    trie: Option<Trie<u8>>,
    n_words: usize,
}

impl Dictionary {
    /// Builds a dictionary from raw word-list lines.
    ///
    /// Each line is trimmed and uppercased; anything shorter than
    /// [`MIN_WORD_LEN`] or containing a non-letter character is dropped.
    /// Duplicate lines collapse to a single entry.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut builder = TrieBuilder::<u8>::new();
        let mut n_lines: u32 = 0;
        let mut longest_word = 0;

        for line in lines {
            n_lines += 1;
            let word = line.as_ref().trim().to_ascii_uppercase();
            if word.len() < MIN_WORD_LEN || !word.bytes().all(|b| b.is_ascii_uppercase()) {
                continue;
            }
            if word.len() > longest_word {
                longest_word = word.len();
            }
            if seen.insert(word.clone()) {
                builder.push(word);
            }
        }

        let n_words = seen.len();
        debug!(
            "Kept {}/{} words (longest {}). Building trie...",
            n_words, n_lines, longest_word
        );
        let trie = if n_words > 0 {
            Some(builder.build())
        } else {
            None
        };
        debug!("Trie built.");

        Dictionary { trie, n_words }
    }

    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Loads a newline-delimited word list, e.g. `words_alpha.txt`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        debug!("Loading dictionary from {}...", path.as_ref().display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// exact membership, against the normalized word set
    pub fn contains(&self, word: &str) -> bool {
        match &self.trie {
            Some(trie) => trie.exact_match(word),
            None => false,
        }
    }

    /// true iff some dictionary word starts with `prefix`.
    /// A word counts as a prefix of itself.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match &self.trie {
            Some(trie) => trie.is_prefix(prefix) || trie.exact_match(prefix),
            None => false,
        }
    }

    /// number of distinct words kept
    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;

    #[test]
    fn test_normalization() {
        let dict = Dictionary::from_lines(["  cats \n", "DOGS", "cat", "it's", "héron", "dogs"]);

        // "cat" is too short, "it's" and "héron" carry non-letters,
        // and the repeated "dogs" collapses
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("CATS"));
        assert!(dict.contains("DOGS"));
        assert!(!dict.contains("CAT"));
        assert!(!dict.contains("cats"));
    }

    #[test]
    fn test_has_prefix() {
        let dict = Dictionary::from_lines(["cats", "catalog"]);

        assert!(dict.has_prefix("C"));
        assert!(dict.has_prefix("CATA"));
        // a full word is a prefix of itself, extendable or not
        assert!(dict.has_prefix("CATS"));
        assert!(dict.has_prefix("CATALOG"));
        assert!(!dict.has_prefix("CATS?"));
        assert!(!dict.has_prefix("D"));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::from_lines(Vec::<String>::new());

        assert!(dict.is_empty());
        assert!(!dict.contains("CATS"));
        assert!(!dict.has_prefix("C"));

        // nothing survives normalization either
        let dict = Dictionary::from_lines(["cat", "a1bc"]);
        assert!(dict.is_empty());
    }
}
