//! Picking the most over-represented word of a file.

use crate::counter::WordCounts;

/// The word of a file whose relative frequency is most elevated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outlier<'a> {
    pub word: &'a [u8],
    pub ratio: f64,
}

/// Frequency of a word within a file divided by its frequency within the corpus.
///
/// Returns `None` if any of the counts is zero, as the ratio is then undefined.
pub fn ratio(count: u64, total: u64, corpus_count: u64, corpus_total: u64) -> Option<f64> {
    if count == 0 || total == 0 || corpus_count == 0 || corpus_total == 0 {
        return None;
    }
    let file_freq = count as f64 / total as f64;
    let corpus_freq = corpus_count as f64 / corpus_total as f64;
    Some(file_freq / corpus_freq)
}

/// Select the outlier word of `file` relative to `corpus`.
///
/// Among words with equal maximal ratio, the byte-wise smallest one wins,
/// so the result does not depend on iteration order.
/// Returns `None` for a file without words.
pub fn select<'a>(file: &'a WordCounts, corpus: &WordCounts) -> Option<Outlier<'a>> {
    let mut best: Option<Outlier> = None;
    for (word, count) in file.iter() {
        let Some(r) = ratio(count, file.total(), corpus.get(word), corpus.total()) else {
            continue;
        };
        let better = match best {
            None => r > 0.0,
            Some(b) => r > b.ratio || (r == b.ratio && word < b.word),
        };
        if better {
            best = Some(Outlier { word, ratio: r });
        }
    }
    best
}
