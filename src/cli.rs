// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option has a sensible default so the tool can run from a CI job with
// no arguments at all. Most options can also come from an environment
// variable (the `env = ...` attributes), which is how a workflow usually
// passes GITHUB_TOKEN along.
//
// The parsed `Cli` is NOT what the rest of the program uses: it is validated
// and turned into a `config::Config` first (see src/config.rs).
// =============================================================================

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "readme-stats",
    version,
    about = "Tally a GitHub user's repositories by language and refresh a README block",
    long_about = "readme-stats lists every public repository of a GitHub account, counts them \
                  per primary language and rewrites the <!-- INFO-START --> ... <!-- INFO-END --> \
                  block of a README, together with a JSON settings file."
)]
pub struct Cli {
    /// GitHub account whose repositories are listed
    #[arg(long, env = "README_STATS_USER", default_value = "RafaelaSommer")]
    pub user: String,

    /// README file holding the generated block
    #[arg(long, default_value = "README.md")]
    pub readme: String,

    /// JSON settings file that is merged and re-saved on every run
    #[arg(long, default_value = ".github/settings.json")]
    pub settings: String,

    /// Bearer token for the GitHub API (unauthenticated when absent)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com/")]
    pub api_url: String,

    /// How the "next update" line is computed
    #[arg(long, value_enum, default_value_t = ScheduleKind::Window)]
    pub schedule: ScheduleKind,

    /// Clock hours used by `--schedule slots`
    ///
    /// Example: --slot-hours 8,12,16,20
    #[arg(long, value_delimiter = ',', default_values_t = [12u32, 19])]
    pub slot_hours: Vec<u32>,

    /// Fixed UTC offset (in hours) used for every displayed timestamp
    #[arg(long, default_value_t = -3, allow_negative_numbers = true)]
    pub utc_offset: i32,

    /// Label printed next to every timestamp
    #[arg(long, default_value = "Horário de Brasília")]
    pub tz_label: String,

    /// What started this run, recorded as `updated_by` in the settings file
    #[arg(long, value_enum, env = "README_STATS_TRIGGER", default_value_t = Trigger::Manual)]
    pub trigger: Trigger,

    /// Leave forked repositories out of every count
    #[arg(long)]
    pub skip_forks: bool,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Kill switch: print a notice and exit without touching anything
    ///
    /// The env var takes the usual CI spellings: 1/0, yes/no, on/off, true/false
    #[arg(
        long,
        env = "README_STATS_DISABLED",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub disabled: bool,
}

/// Next-update strategies selectable from the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Automatic updates are paused; no next-update line
    Paused,
    /// Next update somewhere between now+25min and now+45min
    Window,
    /// Next update at the nearest upcoming configured clock hour
    Slots,
}

/// Who (or what) triggered the run
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Manual,
    Scheduled,
}

impl Trigger {
    /// The attribution string stored in the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Manual => "manual-run",
            Trigger::Scheduled => "scheduled-run",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["readme-stats"]).unwrap();
        assert_eq!(cli.readme, "README.md");
        assert_eq!(cli.settings, ".github/settings.json");
        assert_eq!(cli.schedule, ScheduleKind::Window);
        assert_eq!(cli.slot_hours, vec![12, 19]);
        assert_eq!(cli.utc_offset, -3);
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn test_slot_hours_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "readme-stats",
            "--schedule",
            "slots",
            "--slot-hours",
            "8,12,16,20",
        ])
        .unwrap();
        assert_eq!(cli.schedule, ScheduleKind::Slots);
        assert_eq!(cli.slot_hours, vec![8, 12, 16, 20]);
    }

    #[test]
    fn test_negative_offset_and_flags() {
        let cli = Cli::try_parse_from([
            "readme-stats",
            "--utc-offset",
            "-5",
            "--trigger",
            "scheduled",
            "--skip-forks",
            "--disabled",
        ])
        .unwrap();
        assert_eq!(cli.utc_offset, -5);
        assert_eq!(cli.trigger, Trigger::Scheduled);
        assert!(cli.skip_forks);
        assert!(cli.disabled);
    }

    #[test]
    fn test_disabled_env_accepts_boolish_values() {
        // Only this test sets the variable; other tests either pass
        // --disabled themselves or don't look at the flag
        std::env::set_var("README_STATS_DISABLED", "1");
        let cli = Cli::try_parse_from(["readme-stats"]).unwrap();
        assert!(cli.disabled);

        let parser = BoolishValueParser::new();
        let cmd = clap::Command::new("readme-stats");
        for (raw, expected) in [("yes", true), ("on", true), ("0", false), ("no", false)] {
            let value = clap::builder::TypedValueParser::parse_ref(
                &parser,
                &cmd,
                None,
                std::ffi::OsStr::new(raw),
            )
            .unwrap();
            assert_eq!(value, expected, "value {:?}", raw);
        }
    }

    #[test]
    fn test_trigger_labels() {
        assert_eq!(Trigger::Manual.as_str(), "manual-run");
        assert_eq!(Trigger::Scheduled.as_str(), "scheduled-run");
    }
}
