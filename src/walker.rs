//! Finding the files to process.

use crate::errors::PathError;
use log::{debug, trace};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extension of the files picked up when recursing into directories.
pub const EXTENSION: &str = "txt";

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Does a file found inside a directory qualify for processing?
pub fn is_text_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(EXTENSION))
}

/// Visit the files named by one command-line argument.
///
/// A regular file is visited as is, whatever its name. A directory is
/// traversed recursively in file-name order, skipping hidden entries and
/// visiting only regular files with the `.txt` extension. Symbolic links are
/// followed. Any path that cannot be inspected is passed to `visit` as an error
/// and the traversal carries on.
pub fn walk<F>(path: &Path, mut visit: F)
where
    F: FnMut(Result<PathBuf, PathError>),
{
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            visit(Err(PathError::new(path, e)));
            return;
        }
    };
    if metadata.is_file() {
        visit(Ok(path.to_owned()));
        return;
    }
    if !metadata.is_dir() {
        debug!("{}: not a regular file or directory, skipped", path.display());
        return;
    }
    let walker = WalkDir::new(path)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                visit(Err(e.into()));
                continue;
            }
        };
        let file_type = entry.file_type();
        if file_type.is_dir() {
            trace!("{}: directory", entry.path().display());
        } else if file_type.is_file() && is_text_file(entry.path()) {
            visit(Ok(entry.into_path()));
        } else {
            trace!("{}: skipped", entry.path().display());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    fn collect(path: &Path) -> (Vec<PathBuf>, Vec<PathError>) {
        let mut files = vec![];
        let mut errors = vec![];
        walk(path, |r| match r {
            Ok(p) => files.push(p),
            Err(e) => errors.push(e),
        });
        (files, errors)
    }

    #[test]
    fn text_file_extension() {
        assert!(is_text_file(Path::new("notes.txt")));
        assert!(is_text_file(Path::new("dir/a.b.txt")));
        assert!(!is_text_file(Path::new("notes.TXT")));
        assert!(!is_text_file(Path::new("notes.txt.bak")));
        assert!(!is_text_file(Path::new("txt")));
        assert!(!is_text_file(Path::new("image.png")));
    }

    #[test]
    fn filters_directory_entries() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("notes.txt"), "hello").unwrap();
        fs::write(root.join("image.png"), "png").unwrap();
        fs::write(root.join(".secret.txt"), "hidden").unwrap();
        fs::write(root.join("UPPER.TXT"), "upper").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git").join("config.txt"), "hidden").unwrap();
        fs::create_dir_all(root.join("sub").join("deeper")).unwrap();
        fs::write(root.join("sub").join("b.txt"), "b").unwrap();
        fs::write(root.join("sub").join("deeper").join("c.txt"), "c").unwrap();
        let (files, errors) = collect(root);
        assert!(errors.is_empty());
        assert_eq!(
            files,
            vec![
                root.join("notes.txt"),
                root.join("sub").join("b.txt"),
                root.join("sub").join("deeper").join("c.txt"),
            ]
        );
    }

    #[test]
    fn direct_file_ignores_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("image.png");
        fs::write(&path, "png").unwrap();
        let (files, errors) = collect(&path);
        assert!(errors.is_empty());
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn hidden_root_is_traversed() {
        let temp = tempdir().unwrap();
        let root = temp.path().join(".hidden");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        let (files, errors) = collect(&root);
        assert!(errors.is_empty());
        assert_eq!(files, vec![root.join("a.txt")]);
    }

    #[test]
    fn missing_path_is_reported() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nope");
        let (files, errors) = collect(&path);
        assert!(files.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, path);
    }

    #[test]
    fn empty_directory() {
        let temp = tempdir().unwrap();
        let (files, errors) = collect(temp.path());
        assert!(files.is_empty());
        assert!(errors.is_empty());
    }
}
