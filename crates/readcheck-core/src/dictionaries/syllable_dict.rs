//! Syllable counts for early-reader vocabulary.
//!
//! Known counts for words the vowel-group estimate gets wrong, plus an
//! estimation fallback for everything else. Used to turn an attempt's
//! duration into a speaking rate.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Words whose syllable count the estimate misses.
pub static SYLLABLE_DICT: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Adjacent vowels that are separate syllables
    map.extend([
        ("being", 2),
        ("doing", 2),
        ("going", 2),
        ("seeing", 2),
        ("lion", 2),
        ("giant", 2),
        ("quiet", 2),
        ("poem", 2),
        ("poet", 2),
        ("diet", 2),
        ("science", 2),
        ("create", 2),
        ("idea", 3),
        ("area", 3),
        ("piano", 3),
        ("radio", 3),
        ("video", 3),
    ]);

    // Compounds with a silent e in the middle
    map.extend([
        ("someone", 2),
        ("something", 2),
        ("sometimes", 2),
        ("everyone", 3),
        ("everything", 3),
        ("maybe", 2),
        ("homework", 2),
        ("lovely", 2),
    ]);

    // Other irregulars
    map.extend([
        ("every", 2),
        ("evening", 2),
        ("business", 2),
        ("recipe", 3),
        ("people", 2),
        ("fire", 1),
        ("hour", 1),
    ]);

    map
});

/// Look up a word's syllable count.
pub fn lookup_syllables(word: &str) -> Option<usize> {
    SYLLABLE_DICT.get(word.to_lowercase().as_str()).copied()
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate syllables by counting vowel groups, then adjusting for silent
/// endings (`-e`, `-es`, `-ed`) and consonant `-le`.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut count = letters
        .iter()
        .enumerate()
        .filter(|&(i, &c)| is_vowel(c) && (i == 0 || !is_vowel(letters[i - 1])))
        .count();

    let n = letters.len();
    let before = |offset: usize| n.checked_sub(offset).map(|i| letters[i]);

    let consonant_le = n >= 3
        && letters.ends_with(&['l', 'e'])
        && before(3).is_some_and(|c| !is_vowel(c));

    if count > 1 && letters.ends_with(&['e']) && !consonant_le && before(2) != Some('e') {
        count -= 1;
    } else if count > 1
        && letters.ends_with(&['e', 's'])
        && before(3).is_some_and(|c| !matches!(c, 's' | 'x' | 'z' | 'c' | 'g' | 'h'))
        && !before(3).is_some_and(is_vowel)
    {
        count -= 1;
    } else if count > 1
        && letters.ends_with(&['e', 'd'])
        && before(3).is_some_and(|c| !matches!(c, 't' | 'd'))
    {
        count -= 1;
    }

    count.max(1)
}

/// Count syllables: dictionary lookup with estimation fallback.
pub fn count_syllables(word: &str) -> usize {
    lookup_syllables(word).unwrap_or_else(|| estimate_syllables(word))
}

/// Total syllables across the whitespace-separated words of `text`.
pub fn count_text_syllables(text: &str) -> usize {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()))
        .filter(|w| !w.is_empty())
        .map(count_syllables)
        .sum()
}
