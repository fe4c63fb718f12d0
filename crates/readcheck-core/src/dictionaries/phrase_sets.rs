//! Built-in practice phrases, ordered by phonetic progression.

use std::sync::LazyLock;

use crate::phrase::{Difficulty, Phrase, PhraseSet, TargetPhrase};

fn phrase(
    id: &str,
    text: &str,
    sight_words: &[&str],
    patterns: &[&str],
    difficulty: Difficulty,
) -> Phrase {
    Phrase {
        id: id.to_string(),
        target: TargetPhrase::new(text)
            .with_sight_words(sight_words.iter().copied())
            .with_phonetic_patterns(patterns.iter().copied()),
        difficulty: Some(difficulty),
    }
}

/// Phrase sets shipped with readcheck.
pub static BUILTIN_PHRASE_SETS: LazyLock<Vec<PhraseSet>> = LazyLock::new(|| {
    use Difficulty::{Easy, Medium};

    vec![
        PhraseSet {
            id: "set-1".to_string(),
            focus: "CVC Words & Basic Sight Words".to_string(),
            phrases: vec![
                phrase("p1-1", "I am strong", &["I", "am"], &["I", "a-m", "s-t-r-aw-ng"], Easy),
                phrase("p1-2", "We can win", &["we", "can"], &["w-ee", "k-ah-n", "w-ih-n"], Easy),
                phrase("p1-3", "You are kind", &["you", "are"], &["y-oo", "ar", "k-ie-n-d"], Easy),
                phrase("p1-4", "My joy grows", &["my"], &["m-y", "j-oi", "g-r-ow-s"], Easy),
                phrase("p1-5", "Be your best", &["be", "your"], &["b-ee", "y-or", "b-eh-s-t"], Easy),
                phrase("p1-6", "Love yourself", &["love"], &["l-uh-v", "y-or-s-eh-l-f"], Easy),
                phrase("p1-7", "We help others", &["we"], &["w-ee", "h-eh-l-p", "uh-th-er-z"], Easy),
                phrase("p1-8", "Try new things", &["try"], &["t-r-ie", "n-oo", "th-ih-ng-z"], Easy),
                phrase("p1-9", "Dream big dreams", &["dream"], &["d-r-ee-m", "b-ih-g", "d-r-ee-m-z"], Easy),
                phrase("p1-10", "Hope shines bright", &["hope"], &["h-ow-p", "sh-ie-n-z", "b-r-ie-t"], Easy),
            ],
        },
        PhraseSet {
            id: "set-2".to_string(),
            focus: "Digraphs & Blends".to_string(),
            phrases: vec![
                phrase("p2-1", "Share with friends", &["share", "with"], &["sh-air", "w-ih-th", "f-r-eh-n-d-z"], Medium),
                phrase("p2-2", "Think happy thoughts", &["think"], &["th-ih-ng-k", "h-ae-p-ee", "th-aw-t-s"], Medium),
                phrase("p2-3", "When the sun shines", &["when", "the"], &["w-eh-n", "th-ee", "s-uh-n", "sh-ie-n-z"], Medium),
                phrase("p2-4", "Which path to choose", &["which", "to"], &["w-ih-ch", "p-ae-th", "t-oo", "ch-oo-z"], Medium),
                phrase("p2-5", "Through thick and thin", &["and"], &["th-r-oo", "th-ih-k", "ae-n-d", "th-ih-n"], Medium),
            ],
        },
    ]
});
