use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "recurrence")]
#[command(about = "Describe and expand recurring arrangement manifests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a human-readable description of each stored manifest
    Describe {
        /// Locale code, e.g. `nb-no` (default: configured locale)
        #[arg(long)]
        locale: Option<String>,

        /// JSON file holding one manifest or an array of them (default: stdin)
        file: Option<PathBuf>,
    },

    /// Print the dates each stored manifest recurs on
    Expand {
        /// Series start date (default: today in the selected timezone)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Maximum number of dates per manifest (default: configured limit)
        #[arg(long)]
        limit: Option<u16>,

        /// IANA timezone, e.g. `Europe/Oslo` (default: configured timezone)
        #[arg(long)]
        timezone: Option<String>,

        /// JSON file holding one manifest or an array of them (default: stdin)
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_describe() {
        let cli = Cli::try_parse_from(["recurrence", "describe", "--locale", "nb-no", "a.json"])
            .expect("valid arguments");
        let Command::Describe { locale, file } = cli.command else {
            panic!("expected describe");
        };
        assert_eq!(locale.as_deref(), Some("nb-no"));
        assert_eq!(file, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn parse_expand_defaults() {
        let cli = Cli::try_parse_from(["recurrence", "expand"]).expect("valid arguments");
        let Command::Expand {
            start,
            limit,
            timezone,
            file,
        } = cli.command
        else {
            panic!("expected expand");
        };
        assert!(start.is_none());
        assert!(limit.is_none());
        assert!(timezone.is_none());
        assert!(file.is_none());
    }

    #[test]
    fn parse_expand_start_date() {
        let cli = Cli::try_parse_from([
            "recurrence",
            "expand",
            "--start",
            "2024-01-01",
            "--limit",
            "5",
        ])
        .expect("valid arguments");
        let Command::Expand { start, limit, .. } = cli.command else {
            panic!("expected expand");
        };
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(limit, Some(5));
    }

    #[test]
    fn rejects_bad_start_date() {
        assert!(Cli::try_parse_from(["recurrence", "expand", "--start", "01/01/2024"]).is_err());
    }
}
