//! Word frequency tables.

use crate::errors::PathError;
use crate::tokenizer;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Occurrence counts of words, together with the total number of words counted.
///
/// Every stored count is at least 1, and `total` is always the sum of all counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<Vec<u8>, u64>,
    total: u64,
}

impl WordCounts {
    pub fn new() -> WordCounts {
        WordCounts::default()
    }

    /// Count one more occurrence of `word`.
    pub fn add_word(&mut self, word: &[u8]) {
        self.add_count(word, 1);
    }

    fn add_count(&mut self, word: &[u8], count: u64) {
        debug_assert!(count > 0);
        match self.counts.get_mut(word) {
            Some(c) => *c += count,
            None => {
                self.counts.insert(word.to_vec(), count);
            }
        }
        self.total += count;
    }

    /// Add every count of `other` to this table.
    pub fn merge(&mut self, other: &WordCounts) {
        for (word, &count) in &other.counts {
            self.add_count(word, count);
        }
    }

    /// Occurrences of `word`, or 0 if it was never seen.
    pub fn get(&self, word: &[u8]) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total number of words counted (not distinct words).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All words and their counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_slice(), c))
    }
}

impl<W: AsRef<[u8]>> FromIterator<W> for WordCounts {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut counts = WordCounts::new();
        for w in iter {
            counts.add_word(w.as_ref());
        }
        counts
    }
}

/// One processed file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub words: WordCounts,
}

impl FileRecord {
    /// Count the words read from `reader`.
    pub fn from_reader<R: Read>(path: String, reader: R) -> io::Result<FileRecord> {
        let mut words = WordCounts::new();
        tokenizer::scan_words(reader, |w| words.add_word(w))?;
        Ok(FileRecord { path, words })
    }
}

/// Open `path` and count its words.
///
/// The file handle is closed before returning, whether or not reading succeeded.
pub fn count_file(path: &Path) -> Result<FileRecord, PathError> {
    let file = File::open(path).map_err(|e| PathError::new(path, e))?;
    FileRecord::from_reader(path.display().to_string(), file).map_err(|e| PathError::new(path, e))
}
