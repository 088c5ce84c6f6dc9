use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;

use crate::error::Result;

/// A word collected into a character buffer.
///
/// Most words fit inline, so collecting one does not allocate.
pub type Word = SmallVec<[char; 32]>;

/// Trait for types that can be used as a word.
///
/// Implemented for common string and character-sequence types so that
/// [`TrieRegEx::add`](super::TrieRegEx::add) and friends accept them directly
/// without manual conversion.
pub trait IntoWord {
    /// Collects this word into a character buffer.
    fn collect_word(self) -> Word;
}

/// Text: each `char` of the string is one letter.
macro_rules! text_words {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoWord for $ty {
            fn collect_word(self) -> Word {
                self.chars().collect()
            }
        }
    )*};
}

/// Letters already split into `char`s, copied as one slice.
macro_rules! char_words {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoWord for $ty {
            fn collect_word(self) -> Word {
                let letters: &[char] = &self[..];
                Word::from_slice(letters)
            }
        }
    )*};
}

text_words!(&str, &&str, String, &String, Box<str>, Cow<'_, str>);
char_words!(&[char], Vec<char>, &Vec<char>, &Word);

impl<const N: usize> IntoWord for [char; N] {
    fn collect_word(self) -> Word {
        Word::from_slice(&self)
    }
}

impl<const N: usize> IntoWord for &[char; N] {
    fn collect_word(self) -> Word {
        Word::from_slice(self)
    }
}

impl IntoWord for Word {
    fn collect_word(self) -> Word {
        self
    }
}

/// Reads a word list from a text file, one word per line.
///
/// Trailing whitespace is trimmed. Empty lines and lines starting with '#'
/// are skipped. Words may appear in any order.
///
/// # Examples
///
/// ```no_run
/// use trieregex::trie::word::read_words;
///
/// let words = read_words("dictionary.txt").unwrap();
/// ```
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut words = Vec::new();

    // read_line into one reused buffer instead of lines(), which allocates per line.
    let mut buf = String::with_capacity(80);
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            words.push(word.to_owned());
        }
        buf.clear();
    }
    log::debug!("read {} words from word list", words.len());
    Ok(words)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn string_types_collect_chars() {
        let expected: Word = "CAFÉ".chars().collect();
        let owned = String::from("CAFÉ");
        assert_eq!(Box::<str>::from("CAFÉ").collect_word(), expected);
        assert_eq!(Cow::Borrowed("CAFÉ").collect_word(), expected);
        assert_eq!("CAFÉ".collect_word(), expected);
        assert_eq!((&"CAFÉ").collect_word(), expected);
        assert_eq!((&owned).collect_word(), expected);
        assert_eq!(owned.collect_word(), expected);
    }

    #[test]
    fn char_sequences_collect_chars() {
        let expected: Word = "ABC".chars().collect();
        let v = vec!['A', 'B', 'C'];
        assert_eq!(['A', 'B', 'C'].collect_word(), expected);
        assert_eq!((&['A', 'B', 'C']).collect_word(), expected);
        assert_eq!(v.as_slice().collect_word(), expected);
        assert_eq!((&v).collect_word(), expected);
        assert_eq!((&expected).collect_word(), expected);
        assert_eq!(v.collect_word(), expected);
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
        assert!(!is_comment(" REVERBERATE"));
    }

    #[test]
    fn read_words_skips_comments_and_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# fruit").unwrap();
        writeln!(file, "cherry").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "apple  ").unwrap();
        writeln!(file, "   # indented comment").unwrap();
        write!(file, "banana").unwrap();
        file.flush().unwrap();

        let words = read_words(file.path()).unwrap();
        assert_eq!(words, ["cherry", "apple", "banana"]);
    }

    #[test]
    fn read_words_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_words(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, crate::error::TrieRegexError::Io(_)));
    }
}
