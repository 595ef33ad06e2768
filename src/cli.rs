use crate::formatting::ColorMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lighthouse-summary")]
#[command(about = "Summarize a Lighthouse report as category scores and key metrics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Lighthouse JSON report (defaults to lighthouse-report.json)
    pub report: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Plain output, no colors (same as --color never)
    #[arg(long, conflicts_with = "color")]
    pub plain: bool,

    /// Config file (defaults to the nearest .lighthouse-summary.toml)
    #[arg(long, env = "LIGHTHOUSE_SUMMARY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Debug logging on stderr
    /// -vv: Trace logging on stderr
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Color mode requested on the command line, if any.
    pub fn color_override(&self) -> Option<ColorMode> {
        if self.plain {
            Some(ColorMode::Never)
        } else {
            self.color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["lighthouse-summary"]).unwrap();
        assert_eq!(cli.report, None);
        assert_eq!(cli.color_override(), None);
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn test_plain_and_verbosity() {
        let cli =
            Cli::try_parse_from(["lighthouse-summary", "--plain", "-vv", "report.json"]).unwrap();
        assert_eq!(cli.report, Some(PathBuf::from("report.json")));
        assert_eq!(cli.color_override(), Some(ColorMode::Never));
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn test_plain_conflicts_with_color() {
        assert!(Cli::try_parse_from(["lighthouse-summary", "--plain", "--color", "always"]).is_err());
    }
}
