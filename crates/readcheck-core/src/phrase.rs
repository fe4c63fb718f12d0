//! Practice phrase types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// The phrase a student is asked to read.
///
/// Accepts both `sightWords` and `sight_words` spellings when deserialized, so
/// phrase data exported by the browser app and hand-written config files
/// both load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetPhrase {
    /// The phrase text.
    pub text: String,
    /// Sight words the phrase exercises.
    #[serde(alias = "sight_words")]
    pub sight_words: Vec<String>,
    /// Phonetic pattern per word position; may be shorter than the word count.
    #[serde(alias = "phonetic_patterns")]
    pub phonetic_patterns: Vec<String>,
}

impl TargetPhrase {
    /// A phrase with no sight words or patterns.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the sight words.
    pub fn with_sight_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sight_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the phonetic patterns, one per word position.
    pub fn with_phonetic_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phonetic_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// The normalized words of the phrase text.
    pub fn words(&self) -> Vec<String> {
        text::normalize(&self.text)
    }

    /// Pattern for word position `index`, ignoring empty entries.
    pub fn pattern_at(&self, index: usize) -> Option<&str> {
        self.phonetic_patterns
            .get(index)
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}

/// Reading level of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Difficulty {
    /// Short CVC words and basic sight words.
    Easy,
    /// Digraphs, blends, longer words.
    Medium,
    /// Multi-syllable words and longer phrases.
    Hard,
}

impl Difficulty {
    /// Lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry: an identified target phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Phrase {
    /// Stable identifier, e.g. `p1-2`.
    pub id: String,
    /// What the student reads.
    #[serde(flatten)]
    pub target: TargetPhrase,
    /// Reading level, if graded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// A group of phrases sharing a phonics focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PhraseSet {
    /// Stable identifier, e.g. `set-1`.
    pub id: String,
    /// What the set practices.
    pub focus: String,
    /// Phrases in presentation order.
    pub phrases: Vec<Phrase>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let phrase = TargetPhrase::new("We can win")
            .with_sight_words(["we", "can"])
            .with_phonetic_patterns(["w-ee", "k-ah-n", "w-ih-n"]);
        assert_eq!(phrase.words(), vec!["we", "can", "win"]);
        assert_eq!(phrase.sight_words, vec!["we", "can"]);
        assert_eq!(phrase.pattern_at(2), Some("w-ih-n"));
        assert_eq!(phrase.pattern_at(3), None);
    }

    #[test]
    fn empty_pattern_is_absent() {
        let phrase = TargetPhrase::new("a cat").with_phonetic_patterns(["", "k-a-t"]);
        assert_eq!(phrase.pattern_at(0), None);
        assert_eq!(phrase.pattern_at(1), Some("k-a-t"));
    }

    #[test]
    fn deserializes_camel_and_snake_case() {
        let camel: TargetPhrase =
            serde_json::from_str(r#"{"text":"I am","sightWords":["I"],"phoneticPatterns":["I"]}"#)
                .unwrap();
        let snake: TargetPhrase = serde_yaml::from_str(
            "text: I am\nsight_words: [I]\nphonetic_patterns: [I]\n",
        )
        .unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let phrase: TargetPhrase = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert!(phrase.sight_words.is_empty());
        assert!(phrase.phonetic_patterns.is_empty());
    }

    #[test]
    fn phrase_flattens_target() {
        let phrase: Phrase = serde_json::from_str(
            r#"{"id":"p1-1","text":"I am strong","sightWords":["I","am"],"difficulty":"easy"}"#,
        )
        .unwrap();
        assert_eq!(phrase.id, "p1-1");
        assert_eq!(phrase.target.text, "I am strong");
        assert_eq!(phrase.difficulty, Some(Difficulty::Easy));

        let json = serde_json::to_value(&phrase).unwrap();
        assert_eq!(json["sightWords"][1], "am");
    }
}
