use super::{OutputWriter, ERROR_PREFIX, METRICS_HEADER, SCORES_HEADER};
use crate::errors::SummaryError;
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::summary::{Summary, SummaryLine};
use std::io::Write;

/// Line-oriented writer for stdout or any other `io::Write`.
pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting_config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatting_config.formatter(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_section(&mut self, header: &str, lines: &[SummaryLine]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(header))?;
        for line in lines {
            writeln!(self.writer, "- {}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_summary(&mut self, summary: &Summary) -> anyhow::Result<()> {
        self.write_section(SCORES_HEADER, &summary.category_lines())?;
        writeln!(self.writer)?;
        self.write_section(METRICS_HEADER, &summary.metric_lines())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_error(&mut self, error: &SummaryError) -> anyhow::Result<()> {
        let line = format!("{ERROR_PREFIX} {error}");
        writeln!(self.writer, "{}", self.formatter.error(&line))?;
        self.writer.flush()?;
        Ok(())
    }
}
