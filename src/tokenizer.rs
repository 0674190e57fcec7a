//! Splitting raw bytes into tokens and normalizing tokens into words.

use std::io::{self, ErrorKind, Read};

/// Size of the read buffer.
/// Tokens may be longer than this; they are accumulated in a growable buffer.
pub const BUFFER_SIZE: usize = 4096;

const LEADING_JUNK: &[u8] = b"([{\"'";
const TRAILING_JUNK: &[u8] = b")]}\"',.!?";

/// ASCII whitespace as understood by C's `isspace`, including vertical tab.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Turn a raw token into a word.
///
/// Strips one leading run of `( [ { " '` and one trailing run of
/// `) ] } " ' , . ! ?`, rejects what has no ASCII letter left, and
/// lower-cases the rest.
pub fn normalize(token: &[u8]) -> Option<Vec<u8>> {
    let start = token
        .iter()
        .position(|b| !LEADING_JUNK.contains(b))
        .unwrap_or(token.len());
    let token = &token[start..];
    let end = token
        .iter()
        .rposition(|b| !TRAILING_JUNK.contains(b))
        .map_or(0, |i| i + 1);
    let token = &token[..end];
    if !token.iter().any(u8::is_ascii_alphabetic) {
        return None;
    }
    Some(token.to_ascii_lowercase())
}

/// Streams tokens out of a reader.
///
/// The reader is consumed in chunks of [BUFFER_SIZE] bytes; `emit` is called
/// once for every maximal run of non-whitespace bytes, in order.
pub fn scan<R, F>(mut reader: R, mut emit: F) -> io::Result<()>
where
    R: Read,
    F: FnMut(&[u8]),
{
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut token = Vec::new();
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        for &b in &buffer[..n] {
            if !is_space(b) {
                token.push(b);
            } else if !token.is_empty() {
                emit(&token);
                token.clear();
            }
        }
    }
    if !token.is_empty() {
        emit(&token);
    }
    Ok(())
}

/// Streams normalized words out of a reader.
pub fn scan_words<R, F>(reader: R, mut emit: F) -> io::Result<()>
where
    R: Read,
    F: FnMut(&[u8]),
{
    scan(reader, |token| {
        if let Some(word) = normalize(token) {
            emit(&word);
        }
    })
}
