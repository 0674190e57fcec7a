//! Main entry point for calculating everything.

use crate::corpus;
use crate::counter::{self, FileRecord};
use crate::errors::PathError;
use crate::information;
use crate::outlier;
use crate::output::{OFile, Output};
use crate::walker;
use itertools::Itertools;
use log::{debug, error};
use std::path::Path;

/// Everything gathered from the command-line paths.
#[derive(Debug, Default)]
pub struct Collection {
    /// Processed files, in discovery order.
    pub records: Vec<FileRecord>,
    /// Paths that could not be processed.
    pub errors: Vec<PathError>,
}

impl Collection {
    pub fn new() -> Collection {
        Collection::default()
    }

    /// Walk one command-line path and count the words of every file found.
    /// Failures are logged and remembered, never fatal.
    pub fn add_path(&mut self, path: &Path) {
        walker::walk(path, |found| {
            let record = found.and_then(|p| counter::count_file(&p));
            match record {
                Ok(record) => {
                    debug!(
                        "{}: {} tokens, {} distinct words",
                        record.path,
                        record.words.total(),
                        record.words.distinct()
                    );
                    self.records.push(record);
                }
                Err(e) => {
                    error!("{e}");
                    self.errors.push(e);
                }
            }
        });
    }
}

/// Find the outlier word of every file in the collection.
pub fn select_outliers(collection: &Collection) -> Output {
    let corpus = corpus::aggregate(&collection.records);
    information::statistics(&collection.records, &corpus, collection.errors.len());
    let files = collection
        .records
        .iter()
        .filter_map(|record| {
            outlier::select(&record.words, &corpus).map(|o| OFile {
                path: record.path.clone(),
                word: String::from_utf8_lossy(o.word).into_owned(),
                ratio: o.ratio,
            })
        })
        .collect_vec();
    Output { files }
}

/// Calculate everything.
///
/// This is the main entry point for the library.
pub fn calc<P: AsRef<Path>>(paths: &[P]) -> Output {
    let mut collection = Collection::new();
    for path in paths {
        collection.add_path(path.as_ref());
    }
    select_outliers(&collection)
}
