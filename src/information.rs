use crate::counter::{FileRecord, WordCounts};
use log::info;

pub fn statistics(records: &[FileRecord], corpus: &WordCounts, skipped: usize) {
    let empty = records.iter().filter(|r| r.words.is_empty()).count();
    info!("files processed: {}", records.len());
    info!("files without words: {}", empty);
    info!("paths skipped: {}", skipped);
    info!("tokens: {}", corpus.total());
    info!("distinct words: {}", corpus.distinct());
}
