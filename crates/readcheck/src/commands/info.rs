//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use readcheck_core::Thresholds;
use readcheck_core::config::{Config, ConfigSources};
use readcheck_core::speech_rate::MAX_SYLLABLES_PER_SECOND;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    thresholds: Thresholds,
    max_syllables_per_second: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phoneme_dictionary: Option<String>,
    phrase_sets: Vec<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            thresholds: config.thresholds,
            max_syllables_per_second: config
                .max_syllables_per_second
                .unwrap_or(MAX_SYLLABLES_PER_SECOND),
            min_score: config.min_score,
            phoneme_dictionary: config.phoneme_dictionary_path().map(|p| p.to_string()),
            phrase_sets: config
                .catalog()
                .sets()
                .iter()
                .map(|s| s.id.clone())
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Scoring".bold().underline());
    println!(
        "{}: > {:.2}",
        "Acceptance".dimmed(),
        cfg.thresholds.acceptance
    );
    println!("{}: >= {:.2}", "Clean match".dimmed(), cfg.thresholds.clean);
    println!(
        "{}: {:.2}",
        "Sound-alike credit".dimmed(),
        cfg.thresholds.sound_alike
    );
    println!(
        "{}: {:.1}",
        "Max syllables/sec".dimmed(),
        cfg.max_syllables_per_second
    );
    print_opt("Min score", &cfg.min_score);
    print_opt("Phoneme dictionary", &cfg.phoneme_dictionary);
    println!("{}: {}", "Phrase sets".dimmed(), cfg.phrase_sets.join(", "));

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
