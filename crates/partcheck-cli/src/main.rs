use clap::{Parser, ValueEnum};
use partcheck_core::report::{self, Outcome};
use partcheck_core::{validate_path, DocumentType, ValidatorSettings};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "partcheck")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(
    about = "Validate OOXML package structure and XML integrity",
    long_about = "Checks that an .xlsx/.docx/.pptx file is a readable zip container, that its \
                  required parts are present, that every XML part is well-formed and that every \
                  internal relationship target exists.\n\n\
                  Exit status: 0 no issues, 1 issues found, 2 package could not be opened."
)]
struct Cli {
    /// Path to the package file
    package: PathBuf,

    /// Print every checked XML part and relationship
    #[arg(long)]
    verbose: bool,

    /// Document type whose main part must be present
    #[arg(short = 't', long = "type", value_enum, default_value_t = DocTypeArg::Xlsx)]
    doc_type: DocTypeArg,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DocTypeArg {
    Xlsx,
    Docx,
    Pptx,
}

impl From<DocTypeArg> for DocumentType {
    fn from(arg: DocTypeArg) -> Self {
        match arg {
            DocTypeArg::Xlsx => DocumentType::Excel,
            DocTypeArg::Docx => DocumentType::Word,
            DocTypeArg::Pptx => DocumentType::PowerPoint,
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("PARTCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the report; logs go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = ValidatorSettings::new()
        .with_document_type(cli.doc_type.into())
        .with_verbose(cli.verbose);

    let result = validate_path(&cli.package, &settings);
    let outcome = Outcome::of(&result);

    let mut stdout = std::io::stdout().lock();
    if stdout
        .write_all(report::render(&result, cli.json).as_bytes())
        .and_then(|()| stdout.flush())
        .is_err()
    {
        // Broken pipe: the outcome still decides the exit status.
        tracing::debug!("stdout closed before the report was written");
    }

    ExitCode::from(outcome.code())
}
