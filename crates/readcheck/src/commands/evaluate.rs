//! Evaluate command: score one attempt against a target phrase.

use std::time::Duration;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::{ArgGroup, Args};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readcheck_core::alignment::MatchQuality;
use readcheck_core::config::Config;
use readcheck_core::speech_rate::MAX_SYLLABLES_PER_SECOND;
use readcheck_core::{
    EvaluationResult, Evaluator, PhonemeDictionary, SpeechSample, TargetPhrase, Thresholds,
};

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("target").required(true).args(["phrase", "text"])))]
pub struct EvaluateArgs {
    /// What the reader said, as transcribed text.
    pub attempt: String,

    /// Catalog phrase to read (see `readcheck phrases`).
    #[arg(long, value_name = "ID")]
    pub phrase: Option<String>,

    /// Target phrase text, instead of a catalog phrase.
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Sight word in the target text (repeatable).
    #[arg(long = "sight-word", value_name = "WORD", requires = "text")]
    pub sight_words: Vec<String>,

    /// Phonetic pattern for the next word position (repeatable).
    #[arg(long = "pattern", value_name = "PATTERN", requires = "text")]
    pub patterns: Vec<String>,

    /// How long the attempt took, for the speaking-rate hint.
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// CMU-format pronunciation dictionary.
    #[arg(long, value_name = "FILE")]
    pub phonemes: Option<Utf8PathBuf>,

    /// Fail when the overall score is below this.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Score an attempt and print feedback.
#[instrument(name = "cmd_evaluate", skip_all, fields(phrase = ?args.phrase))]
pub fn cmd_evaluate(
    args: EvaluateArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(attempt = %args.attempt, duration_ms = ?args.duration_ms, "executing evaluate command");

    let thresholds = config
        .thresholds()
        .context("invalid thresholds in configuration")?;
    let target = resolve_target(&args, config)?;

    let dictionary = args
        .phonemes
        .clone()
        .or_else(|| config.phoneme_dictionary_path())
        .map(|path| {
            PhonemeDictionary::load(&path)
                .with_context(|| format!("failed to load phoneme dictionary {path}"))
        })
        .transpose()?;

    let mut evaluator = Evaluator::new()
        .with_thresholds(thresholds)
        .with_max_syllables_per_second(
            config
                .max_syllables_per_second
                .unwrap_or(MAX_SYLLABLES_PER_SECOND),
        );
    if let Some(ref dict) = dictionary {
        evaluator = evaluator.with_phonemes(dict);
    }

    let speech = args
        .duration_ms
        .map(|ms| SpeechSample::for_text(&args.attempt, Duration::from_millis(ms)));
    let result = evaluator.evaluate(&target, &args.attempt, speech.as_ref());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, &thresholds);
    }

    if let Some(min) = args.min_score.or(config.min_score)
        && result.score.overall < min
    {
        bail!(
            "overall score {}% is below the minimum of {min}%",
            result.score.overall
        );
    }

    Ok(())
}

fn resolve_target(args: &EvaluateArgs, config: &Config) -> anyhow::Result<TargetPhrase> {
    if let Some(ref id) = args.phrase {
        let catalog = config.catalog();
        let phrase = catalog.find_phrase(id)?;
        return Ok(phrase.target.clone());
    }
    let Some(ref text) = args.text else {
        bail!("either --phrase or --text is required");
    };
    Ok(TargetPhrase::new(text.as_str())
        .with_sight_words(args.sight_words.iter().cloned())
        .with_phonetic_patterns(args.patterns.iter().cloned()))
}

fn print_report(result: &EvaluationResult, thresholds: &Thresholds) {
    println!("{}", result.feedback);
    println!();

    for word_match in &result.details.word_matches {
        match word_match.quality(thresholds) {
            MatchQuality::Clean => println!("  {} {}", "ok".green(), word_match.target_word),
            MatchQuality::Mispronounced => println!(
                "  {} {} ({:.2})",
                "~~".yellow(),
                word_match.target_word,
                word_match.similarity
            ),
            MatchQuality::Missing => {
                println!("  {} {}", "--".red(), word_match.target_word);
            }
        }
    }
    for extra in &result.details.extra_words {
        println!("  {} {}", "++".dimmed(), extra.dimmed());
    }

    println!();
    print_score("Overall", result.score.overall);
    print_score("Sight words", result.score.sight_words);
    print_score("Phonetic patterns", result.score.phonetic_patterns);
}

fn print_score(label: &str, value: u8) {
    let shown = format!("{value}%");
    let shown = match value {
        90..=100 => shown.green().to_string(),
        60..=89 => shown.yellow().to_string(),
        _ => shown.red().to_string(),
    };
    println!("{}: {}", label.dimmed(), shown);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_args(text: &str, attempt: &str) -> EvaluateArgs {
        EvaluateArgs {
            attempt: attempt.to_string(),
            text: Some(text.to_string()),
            ..EvaluateArgs::default()
        }
    }

    #[test]
    fn evaluates_text_target() {
        let args = text_args("We can win", "we can wun");
        assert!(cmd_evaluate(args, false, &Config::default()).is_ok());
    }

    #[test]
    fn evaluates_catalog_phrase_as_json() {
        let args = EvaluateArgs {
            attempt: "I am strong".to_string(),
            phrase: Some("p1-1".to_string()),
            ..EvaluateArgs::default()
        };
        assert!(cmd_evaluate(args, true, &Config::default()).is_ok());
    }

    #[test]
    fn unknown_phrase_fails() {
        let args = EvaluateArgs {
            attempt: "hello".to_string(),
            phrase: Some("p9-9".to_string()),
            ..EvaluateArgs::default()
        };
        let err = cmd_evaluate(args, false, &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("p9-9"));
    }

    #[test]
    fn min_score_from_config_applies() {
        let config = Config {
            min_score: Some(80),
            ..Config::default()
        };
        let args = text_args("Stop and help", "and help");
        let err = cmd_evaluate(args, false, &config).unwrap_err();
        assert!(err.to_string().contains("below the minimum of 80%"));
    }

    #[test]
    fn flag_min_score_overrides_config() {
        let config = Config {
            min_score: Some(80),
            ..Config::default()
        };
        let args = EvaluateArgs {
            min_score: Some(50),
            ..text_args("Stop and help", "and help")
        };
        assert!(cmd_evaluate(args, false, &config).is_ok());
    }

    #[test]
    fn invalid_thresholds_fail() {
        let mut config = Config::default();
        config.thresholds.acceptance = 0.95;
        let args = text_args("We can win", "we can win");
        assert!(cmd_evaluate(args, false, &config).is_err());
    }

    #[test]
    fn missing_dictionary_fails() {
        let args = EvaluateArgs {
            phonemes: Some(Utf8PathBuf::from("/nonexistent/cmudict.txt")),
            ..text_args("We can win", "we can win")
        };
        let err = cmd_evaluate(args, false, &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("phoneme dictionary"));
    }
}
