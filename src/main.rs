use anyhow::Result;
use clap::Parser;
use lighthouse_summary::cli::Cli;
use lighthouse_summary::config::{self, SummaryConfig};
use lighthouse_summary::formatting::FormattingConfig;
use lighthouse_summary::observability;
use lighthouse_summary::{summarize, OutputWriter, TerminalWriter};
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    observability::init_tracing(cli.verbosity);

    let config = config::load_config(cli.config.as_deref())?;
    let report_path = config.resolve_report_path(cli.report.clone());
    let formatting_config = create_formatting_config(&cli, &config);

    let mut writer = TerminalWriter::new(io::stdout().lock(), formatting_config);
    match summarize(&report_path) {
        Ok(summary) => {
            writer.write_summary(&summary)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(?error, "summary failed");
            writer.write_error(&error)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn create_formatting_config(cli: &Cli, config: &SummaryConfig) -> FormattingConfig {
    FormattingConfig::resolve(cli.color_override(), config.color())
}
