use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paymatch::application::processor::PaymentProcessor;
use paymatch::config::ProcessorConfig;
use paymatch::domain::ports::ClassificationHistoryBox;
use paymatch::infrastructure::in_memory::InMemoryHistory;
use paymatch::interfaces::csv::request_reader::RequestReader;
use paymatch::interfaces::output::{OutputFormat, ResultWriter};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// How each classification result is rendered on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Number of recent results kept for the summary (overrides PAYMATCH_HISTORY_CAPACITY).
    #[arg(long)]
    history_capacity: Option<usize>,
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ProcessorConfig::from_env().into_diagnostic()?;
    if let Some(capacity) = cli.history_capacity {
        config = config.with_history_capacity(capacity).into_diagnostic()?;
    }
    init_tracing(&config.log_filter)?;

    let history: ClassificationHistoryBox =
        Box::new(InMemoryHistory::new(config.history_capacity).into_diagnostic()?);
    let processor = PaymentProcessor::new(history);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock(), cli.format);

    for request in reader.requests() {
        match request {
            Ok(request) => match processor.process(&request).await {
                Ok(result) => writer.write_result(&result).into_diagnostic()?,
                Err(e) => eprintln!("Error classifying request: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    processor.summary().await.into_diagnostic()?;
    Ok(())
}
