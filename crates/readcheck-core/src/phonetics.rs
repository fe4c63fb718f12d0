//! Phonetic comparison.
//!
//! Two signals live here:
//!
//! - a coarse sound-alike key ([`sound_key`]) that needs no data at all, and
//! - positional phoneme agreement ([`phoneme_agreement`]) for callers that
//!   supply a pronunciation dictionary through [`PhonemeLookup`].
//!
//! The similarity scorer uses phoneme agreement when both words are in the
//! dictionary and falls back to the sound-alike key otherwise.

use std::collections::HashMap;
use std::sync::LazyLock;

use camino::Utf8Path;

use crate::error::{PhonemeError, PhonemeResult};

/// Substitutions accepted as correct for young readers.
///
/// Keyed by the target phoneme; values are phonemes a child may produce
/// instead (lisps, r/w gliding, accent variation).
pub static PHONEME_EQUIVALENCES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        HashMap::from([
            ("TH", &["F", "V", "S"][..]),
            ("R", &["W"][..]),
            ("S", &["TH"][..]),
            ("SH", &["S"][..]),
        ])
    });

/// Source of phoneme sequences for words.
///
/// Implementations must be in-memory: the evaluator calls this inside its
/// alignment loop and never expects it to block.
pub trait PhonemeLookup: Send + Sync {
    /// Phonemes for `word`, or `None` if the word is unknown.
    fn phonemes(&self, word: &str) -> Option<&[String]>;
}

/// In-memory pronunciation dictionary in CMU format.
#[derive(Debug, Clone, Default)]
pub struct PhonemeDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl PhonemeDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CMU pronouncing-dictionary text.
    ///
    /// Each non-comment line is `WORD  PH1 PH2 ...`. Lines starting with
    /// `;;;` are comments. Alternate pronunciations (`WORD(2)`) are skipped;
    /// the first pronunciation listed wins.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn parse(text: &str) -> PhonemeResult<Self> {
        let mut dict = Self::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let phonemes: Vec<String> = parts.map(str::to_string).collect();
            if phonemes.is_empty() {
                return Err(PhonemeError::MalformedEntry {
                    line: idx + 1,
                    content: raw.to_string(),
                });
            }

            if word.ends_with(')') && word.contains('(') {
                continue;
            }
            dict.entries
                .entry(word.to_uppercase())
                .or_insert(phonemes);
        }

        tracing::debug!(entries = dict.len(), "parsed phoneme dictionary");
        Ok(dict)
    }

    /// Read and parse a dictionary file.
    pub fn load(path: &Utf8Path) -> PhonemeResult<Self> {
        let text =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| PhonemeError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&text)
    }

    /// Add or replace a pronunciation.
    pub fn insert<I, S>(&mut self, word: &str, phonemes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            word.to_uppercase(),
            phonemes.into_iter().map(Into::into).collect(),
        );
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PhonemeLookup for PhonemeDictionary {
    /// Looks the word up case-insensitively. Attached punctuation is part of
    /// the word, so `"help!"` is unknown even when `HELP` is listed.
    fn phonemes(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&word.to_uppercase()).map(Vec::as_slice)
    }
}

/// Whether `actual` is an acceptable production of `target`.
pub fn is_phoneme_match(target: &str, actual: &str) -> bool {
    target == actual
        || PHONEME_EQUIVALENCES
            .get(target)
            .is_some_and(|alts| alts.contains(&actual))
}

/// Fraction of target phonemes matched position-by-position in the attempt.
///
/// Returns 0.0 when either sequence is empty.
pub fn phoneme_agreement(target: &[String], attempt: &[String]) -> f64 {
    if target.is_empty() || attempt.is_empty() {
        return 0.0;
    }

    let matched = target
        .iter()
        .zip(attempt)
        .filter(|(t, a)| is_phoneme_match(t, a))
        .count();
    matched as f64 / target.len() as f64
}

/// Consonant class for a lower-case character, `None` if it is dropped.
///
/// Accented vowels are dropped like their plain forms. Other letters outside
/// ASCII keep their own identity so that non-English words are not all
/// reduced to the same key.
fn consonant_class(c: char) -> Option<char> {
    match c {
        'b' | 'f' | 'p' | 'v' => Some('B'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some('G'),
        'd' | 't' => Some('D'),
        'l' | 'r' => Some('L'),
        'm' | 'n' => Some('N'),
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'h' | 'w' => None,
        c if is_accented_vowel(c) => None,
        c if c.is_alphabetic() && !c.is_ascii() => Some(c),
        _ => None,
    }
}

/// Lower-case Latin vowels carrying a diacritic.
fn is_accented_vowel(c: char) -> bool {
    matches!(
        c,
        'à'..='æ'
            | 'è'..='ï'
            | 'ò'..='ö'
            | 'ø'..='ü'
            | 'ý'
            | 'ÿ'
            | 'ā'
            | 'ă'
            | 'ą'
            | 'ē'
            | 'ĕ'
            | 'ė'
            | 'ę'
            | 'ě'
            | 'ĩ'
            | 'ī'
            | 'ĭ'
            | 'į'
            | 'ō'
            | 'ŏ'
            | 'ő'
            | 'œ'
            | 'ũ'
            | 'ū'
            | 'ŭ'
            | 'ů'
            | 'ű'
            | 'ų'
    )
}

/// Reduce a word to its coarse consonant skeleton.
///
/// Vowels, `y`, `h`, `w` and non-letters are dropped, consonants are mapped
/// to their class, and adjacent repeats of a class collapse to one.
pub fn sound_key(word: &str) -> String {
    let mut key = String::with_capacity(word.len());
    let mut last = None;

    for c in word.chars().flat_map(char::to_lowercase) {
        let Some(class) = consonant_class(c) else {
            continue;
        };
        if last != Some(class) {
            key.push(class);
        }
        last = Some(class);
    }

    key
}

/// Whether two words share a non-empty sound-alike key.
pub fn sounds_alike(a: &str, b: &str) -> bool {
    let key_a = sound_key(a);
    !key_a.is_empty() && key_a == sound_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phonemes(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn sound_key_classes() {
        assert_eq!(sound_key("cat"), "GD");
        assert_eq!(sound_key("kat"), "GD");
        assert_eq!(sound_key("help"), "LB");
        assert_eq!(sound_key("win"), "N");
    }

    #[test]
    fn sound_key_collapses_repeats() {
        assert_eq!(sound_key("rabbit"), sound_key("rabit"));
        assert_eq!(sound_key("back"), "BG");
    }

    #[test]
    fn sound_key_drops_accented_vowels() {
        assert_eq!(sound_key("café"), sound_key("cafe"));
        assert_eq!(sound_key("naïve"), sound_key("naive"));
        assert_eq!(sound_key("Über"), "BL");
        assert!(sounds_alike("crème", "creme"));
    }

    #[test]
    fn sound_key_keeps_other_non_ascii_letters() {
        assert_eq!(sound_key("ñu"), "ñ");
        assert_ne!(sound_key("ñu"), sound_key("nu"));
    }

    #[test]
    fn sound_key_drops_punctuation() {
        assert_eq!(sound_key("stop!"), sound_key("stop"));
    }

    #[test]
    fn vowel_only_words_never_sound_alike() {
        assert_eq!(sound_key("a"), "");
        assert!(!sounds_alike("a", "i"));
        assert!(!sounds_alike("", ""));
    }

    #[test]
    fn sounds_alike_pairs() {
        assert!(sounds_alike("cat", "kat"));
        assert!(sounds_alike("win", "wun"));
        assert!(!sounds_alike("stop", "and"));
    }

    #[test]
    fn equivalences_accept_lisp() {
        assert!(is_phoneme_match("TH", "F"));
        assert!(is_phoneme_match("R", "W"));
        assert!(is_phoneme_match("K", "K"));
        assert!(!is_phoneme_match("F", "TH"));
    }

    #[test]
    fn agreement_is_positional() {
        let three = phonemes("TH R IY1");
        let free = phonemes("F R IY1");
        assert!((phoneme_agreement(&three, &free) - 1.0).abs() < f64::EPSILON);

        let short = phonemes("TH");
        let agreement = phoneme_agreement(&three, &short);
        assert!((agreement - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn agreement_empty_is_zero() {
        assert_eq!(phoneme_agreement(&[], &phonemes("K AE1 T")), 0.0);
        assert_eq!(phoneme_agreement(&phonemes("K AE1 T"), &[]), 0.0);
    }

    #[test]
    fn parse_cmu_text() {
        let text = ";;; comment line\n\
                    CAT  K AE1 T\n\
                    THREE  TH R IY1\n\
                    THREE(2)  T R IY1\n\
                    \n";
        let dict = PhonemeDictionary::parse(text).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.phonemes("cat").unwrap(), phonemes("K AE1 T").as_slice());
        assert_eq!(dict.phonemes("Three").unwrap(), phonemes("TH R IY1").as_slice());
    }

    #[test]
    fn parse_rejects_word_without_phonemes() {
        let err = PhonemeDictionary::parse("CAT K AE1 T\nDOG\n").unwrap_err();
        assert!(matches!(err, PhonemeError::MalformedEntry { line: 2, .. }));
    }

    #[test]
    fn lookup_keeps_attached_punctuation() {
        let mut dict = PhonemeDictionary::new();
        dict.insert("help", ["HH", "EH1", "L", "P"]);
        dict.insert("don't", ["D", "OW1", "N", "T"]);
        assert!(dict.phonemes("Help").is_some());
        assert!(dict.phonemes("don't").is_some());
        assert!(dict.phonemes("help!").is_none());
        assert!(dict.phonemes("\"don't\"").is_none());
        assert!(dict.phonemes("...").is_none());
    }

    #[test]
    fn load_missing_file_errors() {
        let err = PhonemeDictionary::load(Utf8Path::new("/nonexistent/cmudict.txt")).unwrap_err();
        assert!(matches!(err, PhonemeError::Io { .. }));
    }
}
