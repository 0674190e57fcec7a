use crate::counter::{FileRecord, WordCounts};

/// Merge the word counts of all files into one corpus-wide table.
///
/// The result does not depend on the order of `records`.
pub fn aggregate(records: &[FileRecord]) -> WordCounts {
    let mut corpus = WordCounts::new();
    for record in records {
        corpus.merge(&record.words);
    }
    corpus
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(path: &str, text: &str) -> FileRecord {
        FileRecord::from_reader(path.to_owned(), text.as_bytes()).unwrap()
    }

    #[test]
    fn no_records() {
        let corpus = aggregate(&[]);
        assert!(corpus.is_empty());
        assert_eq!(corpus.distinct(), 0);
    }

    #[test]
    fn totals_are_conserved() {
        let records = vec![
            record("a.txt", "the cat sat on the mat"),
            record("b.txt", "the dog ran in the park"),
            record("c.txt", ""),
        ];
        let corpus = aggregate(&records);
        let total: u64 = records.iter().map(|r| r.words.total()).sum();
        assert_eq!(corpus.total(), total);
        assert_eq!(corpus.total(), 12);
        assert_eq!(corpus.get(b"the"), 4);
        assert_eq!(corpus.get(b"cat"), 1);
        assert_eq!(corpus.distinct(), 9);
        for r in &records {
            for (word, count) in r.words.iter() {
                assert!(corpus.get(word) >= count);
            }
        }
    }

    #[test]
    fn order_does_not_matter() {
        let mut records = vec![
            record("a.txt", "one two two"),
            record("b.txt", "two three"),
        ];
        let forward = aggregate(&records);
        records.reverse();
        assert_eq!(aggregate(&records), forward);
    }
}
