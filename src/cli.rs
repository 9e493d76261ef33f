use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mailtar")]
#[command(version)]
#[command(about = "Print date, sender and subject of mails stored in .tar.gz archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  mailtar backup.tar.gz                 summarize every mail in backup.tar.gz\n  \
  mailtar -q 2019/*.tgz > summary.txt   only report errors on stderr\n  \
  RUST_LOG=debug mailtar archive.tgz    show per-entry diagnostics")]
pub struct Cli {
    /// Gzip-compressed tar archives to read
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// More diagnostics (-vv => trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Quiet mode (-qq => no diagnostics at all)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Abort the whole run on the first archive that cannot be read
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// Log level used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (0, 0) => "info",
            (0, 1) => "debug",
            (0, _) => "trace",
            (1, _) => "error",
            _ => "off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_files() {
        let cli = Cli::parse_from(["mailtar", "a.tar.gz", "b.tgz"]);
        assert_eq!(cli.files, vec!["a.tar.gz", "b.tgz"]);
        assert!(!cli.fail_fast);
        assert_eq!(cli.default_log_level(), "info");
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::parse_from(["mailtar"]);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn verbosity_flags_map_to_levels() {
        assert_eq!(Cli::parse_from(["mailtar", "-v"]).default_log_level(), "debug");
        assert_eq!(Cli::parse_from(["mailtar", "-vv"]).default_log_level(), "trace");
        assert_eq!(Cli::parse_from(["mailtar", "-q"]).default_log_level(), "error");
        assert_eq!(Cli::parse_from(["mailtar", "-qq"]).default_log_level(), "off");
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["mailtar", "-v", "-q"]).is_err());
    }

    #[test]
    fn fail_fast_flag() {
        let cli = Cli::parse_from(["mailtar", "--fail-fast", "x.tgz"]);
        assert!(cli.fail_fast);
    }
}
