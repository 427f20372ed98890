use std::collections::HashSet;
use std::io::BufRead;

/// Reads `reader` line by line and collects every distinct word.
///
/// A word is a maximal run of bytes that are not a space, comma, or
/// period. Each line is scanned independently, so a run split across a
/// line boundary counts as two words. The file is never buffered whole.
pub fn scan_words<R: BufRead>(reader: R) -> std::io::Result<HashSet<String>> {
    let mut words = HashSet::new();
    for line in reader.lines() {
        scan_line(&line?, &mut words);
    }
    Ok(words)
}

/// Scans one line byte by byte, inserting each completed word into `words`.
/// Consecutive terminators produce no empty words; a pending word at end
/// of line is flushed.
pub fn scan_line(line: &str, words: &mut HashSet<String>) {
    let bytes = line.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if is_terminator(byte) {
            if i > start {
                words.insert(line[start..i].to_string());
            }
            start = i + 1;
        }
    }
    if bytes.len() > start {
        words.insert(line[start..].to_string());
    }
}

fn is_terminator(byte: u8) -> bool {
    byte == b' ' || byte == b',' || byte == b'.'
}
