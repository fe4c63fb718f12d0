//! Phrases command: list the practice catalog.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readcheck_core::config::Config;
use readcheck_core::{Difficulty, Phrase, PhraseCatalog};

/// Arguments for the `phrases` subcommand.
#[derive(Args, Debug, Default)]
pub struct PhrasesArgs {
    /// Only list phrases from this set.
    #[arg(long, value_name = "ID")]
    pub set: Option<String>,

    /// Only list phrases at this reading level.
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Only list phrases whose text contains this (case-insensitive).
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
}

impl PhrasesArgs {
    const fn is_filtered(&self) -> bool {
        self.difficulty.is_some() || self.search.is_some()
    }
}

#[derive(Serialize)]
struct PhraseRow<'a> {
    set: &'a str,
    #[serde(flatten)]
    phrase: &'a Phrase,
}

/// List phrase sets, or the phrases matching a filter.
#[instrument(name = "cmd_phrases", skip_all, fields(set = ?args.set))]
pub fn cmd_phrases(args: PhrasesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(difficulty = ?args.difficulty, search = ?args.search, "executing phrases command");

    let full = config.catalog();
    let catalog = match args.set {
        Some(ref id) => PhraseCatalog::default().with_sets([full.find_set(id)?.clone()]),
        None => full,
    };

    if !args.is_filtered() {
        if global_json {
            println!("{}", serde_json::to_string_pretty(catalog.sets())?);
        } else {
            for set in catalog.sets() {
                println!("{} {}", set.id.bold(), set.focus.dimmed());
                for phrase in &set.phrases {
                    print_phrase(phrase);
                }
                println!();
            }
        }
        return Ok(());
    }

    let rows = filtered_rows(&catalog, &args);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("{}", "no matching phrases".yellow());
    } else {
        for row in &rows {
            print_phrase(row.phrase);
        }
    }

    Ok(())
}

fn filtered_rows<'a>(catalog: &'a PhraseCatalog, args: &PhrasesArgs) -> Vec<PhraseRow<'a>> {
    let mut matches: Vec<&Phrase> = match args.search {
        Some(ref needle) => catalog.phrases_containing(needle),
        None => catalog.phrases().collect(),
    };
    if let Some(difficulty) = args.difficulty {
        let graded = catalog.phrases_at(difficulty);
        matches.retain(|p| graded.iter().any(|g| g.id == p.id));
    }

    matches
        .into_iter()
        .filter_map(|phrase| {
            let set = catalog
                .sets()
                .iter()
                .find(|s| s.phrases.iter().any(|p| p.id == phrase.id))?;
            Some(PhraseRow {
                set: &set.id,
                phrase,
            })
        })
        .collect()
}

fn print_phrase(phrase: &Phrase) {
    let level = phrase
        .difficulty
        .map(|d| format!(" ({d})"))
        .unwrap_or_default();
    println!(
        "  {:<6} {}{}",
        phrase.id.cyan(),
        phrase.target.text,
        level.dimmed()
    );
    if !phrase.target.sight_words.is_empty() {
        println!(
            "         {} {}",
            "sight words:".dimmed(),
            phrase.target.sight_words.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_everything() {
        assert!(cmd_phrases(PhrasesArgs::default(), false, &Config::default()).is_ok());
        assert!(cmd_phrases(PhrasesArgs::default(), true, &Config::default()).is_ok());
    }

    #[test]
    fn unknown_set_fails() {
        let args = PhrasesArgs {
            set: Some("set-9".to_string()),
            ..PhrasesArgs::default()
        };
        let err = cmd_phrases(args, false, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("set-1, set-2"));
    }

    #[test]
    fn filters_combine() {
        let catalog = PhraseCatalog::builtin();
        let args = PhrasesArgs {
            search: Some("shines".to_string()),
            difficulty: Some(Difficulty::Medium),
            ..PhrasesArgs::default()
        };
        let rows = filtered_rows(&catalog, &args);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].phrase.id, "p2-3");
        assert_eq!(rows[0].set, "set-2");
    }
}
