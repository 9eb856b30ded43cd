use super::templates::{audit_sql, confirmation_email, sms_notification};
use crate::domain::result::ClassificationResult;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line, trace included.
    #[default]
    Json,
    Email,
    Sms,
    Sql,
}

/// Writes classification results to any `Write` sink in the chosen format.
pub struct ResultWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_result(&mut self, result: &ClassificationResult) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, result)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Email => writeln!(self.writer, "{}\n", confirmation_email(result))?,
            OutputFormat::Sms => writeln!(self.writer, "{}", sms_notification(result))?,
            OutputFormat::Sql => writeln!(self.writer, "{}", audit_sql(result))?,
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
