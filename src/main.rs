//! leaves - split a book export into an index and page chunks

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use leaves::{BookBuilder, BuildReport, Loader};

#[derive(Parser)]
#[command(name = "leaves")]
#[command(version, about = "Split a book export into an index and page chunks", long_about = None)]
#[command(after_help = "EXAMPLES:
    leaves                        Build with the conventional paths under .
    leaves --root /srv/library    Resolve paths against another root
    leaves -c book.toml           Layer a config file over the defaults")]
struct Cli {
    /// Directory that relative paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// TOML file layered over the defaults and <ROOT>/leaves.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pages per chunk file
    #[arg(long, value_name = "N")]
    chunk_size: Option<u32>,

    /// Output directory (overrides paths.output_dir)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Only print warnings and errors (ignores RUST_LOG)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match build(&cli) {
        Ok(report) => {
            if !cli.quiet {
                print_summary(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build(cli: &Cli) -> leaves::Result<BuildReport> {
    let mut loader = Loader::new().with_root_file(&cli.root);
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Some(size) = cli.chunk_size {
        loader = loader.set_override("chunk_size", i64::from(size))?;
    }
    if let Some(out) = &cli.out {
        loader = loader.set_override("paths.output_dir", out.to_string_lossy().into_owned())?;
    }

    let config = loader.build()?.resolve(&cli.root);
    BookBuilder::new(config)?.run()
}

fn print_summary(report: &BuildReport) {
    println!("Index: {} ({:.1} KB)", report.index.path.display(), report.index.kib());
    println!("Chunks: {}", report.chunks.len());
    println!("Total: {:.1} KB", report.total_bytes() as f64 / 1024.0);
}
