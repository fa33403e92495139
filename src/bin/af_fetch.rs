use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use af_struct_fetch::alphafold::AlphafoldHttpClient;
use af_struct_fetch::batch::BatchFetcher;
use af_struct_fetch::input::read_id_list;
use af_struct_fetch::output::JsonOutput;

#[derive(Parser)]
#[command(name = "af-fetch")]
#[command(about = "Download AlphaFold2 predicted structures for a list of UniProt accessions")]
#[command(version, author)]
struct Cli {
    /// Directory the .pdb files are written into (created if missing)
    #[arg(long, default_value = "../data/af_structs")]
    output_dir: PathBuf,

    /// Text file with one UniProt accession per line
    #[arg(long, default_value = "../data/uniprot_ids_of_interest.txt")]
    ids_file: PathBuf,

    /// Number of parallel download workers
    #[arg(long, default_value_t = 1)]
    jobs: usize,

    /// Print the batch summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let ids = read_id_list(&cli.ids_file).into_diagnostic()?;
    let client = AlphafoldHttpClient::new().into_diagnostic()?;
    let fetcher = BatchFetcher::new(client);

    // Per-accession failures are already logged and summarized; they do not
    // affect the exit code.
    let summary = fetcher
        .run(&ids, &cli.output_dir, cli.jobs)
        .into_diagnostic()?;

    if cli.json {
        JsonOutput::print_summary(&summary).into_diagnostic()?;
    }
    Ok(())
}
