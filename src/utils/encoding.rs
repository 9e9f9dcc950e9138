//! Lossy text reading.
//!
//! Pack inputs are always treated as UTF-8. Invalid byte sequences become
//! U+FFFD instead of failing the read, so binary files still load as
//! best-effort text. Line endings are normalized to `\n` the way a text-mode
//! read would.

use encoding_rs::UTF_8;
use std::io;
use std::path::Path;

/// Read the whole file and decode it as UTF-8 with replacement characters.
///
/// `\r\n` and lone `\r` become `\n`. A leading byte order mark is kept as a
/// `\u{feff}` character.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(normalize_newlines(decode_lossy(&bytes)))
}

pub fn decode_lossy(bytes: &[u8]) -> String {
    let (decoded, _had_errors) = UTF_8.decode_without_bom_handling(bytes);
    decoded.into_owned()
}

pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Test content 🚀".as_bytes()).unwrap();
        file.flush().unwrap();

        let content = read_text_lossy(file.path()).unwrap();
        assert_eq!(content, "Test content 🚀");
    }

    #[test]
    fn test_invalid_bytes_are_replaced() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xff, 0xfe, b'!']).unwrap();
        file.flush().unwrap();

        let content = read_text_lossy(file.path()).unwrap();
        assert!(content.starts_with("ok"));
        assert!(content.ends_with('!'));
        assert!(content.contains('\u{fffd}'));
    }

    #[test]
    fn test_bom_is_preserved() {
        let content = decode_lossy(&[0xef, 0xbb, 0xbf, b'h', b'i']);
        assert_eq!(content, "\u{feff}hi");
    }

    #[test]
    fn test_crlf_and_lone_cr_become_lf() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"one\r\ntwo\rthree\n").unwrap();
        file.flush().unwrap();

        let content = read_text_lossy(file.path()).unwrap();
        assert_eq!(content, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(read_text_lossy(&tmp.path().join("nope.txt")).is_err());
    }
}
