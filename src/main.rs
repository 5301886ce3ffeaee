use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixeldetail::models::{DetailConfig, DetailPath, CONFIG_ENV};
use pixeldetail::services::DetailPipeline;

#[derive(Parser)]
#[command(name = "pixeldetail")]
#[command(about = "Create a detailed version of a BMP/PNG/JPG file")]
struct Cli {
    /// Width of each detailed pixel box (default 48, minimum 23)
    #[arg(long, allow_negative_numbers = true)]
    wide: Option<i64>,

    /// Height of each detailed pixel box (default 48, minimum 33)
    #[arg(long, allow_negative_numbers = true)]
    tall: Option<i64>,

    /// Refuse detail images needing more than this many bytes of RGB data
    /// (default 8589934592, i.e. 8 GiB)
    #[arg(long, value_name = "BYTES")]
    max_canvas_bytes: Option<u64>,

    /// YAML configuration file (also read from PIXELDETAIL_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// File name of the BMP/PNG/JPG file
    filename: String,
}

fn main() -> ExitCode {
    let progname = program_name();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixeldetail=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{progname}: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_file = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let mut config = DetailConfig::load(config_file.as_deref())?;
    if let Some(max) = cli.max_canvas_bytes {
        config.max_canvas_bytes = max;
    }

    let block = config.block_size(cli.wide.map(block_arg), cli.tall.map(block_arg))?;
    let path = DetailPath::parse(&cli.filename)?;

    tracing::debug!(
        input = path.input_name(),
        output = path.output_name(),
        kind = %path.kind(),
        wide = block.wide(),
        tall = block.tall(),
        "Validated arguments"
    );

    let outcome = DetailPipeline::new(config, block).run(&path)?;
    tracing::debug!(
        output = %outcome.output.display(),
        width = outcome.width,
        height = outcome.height,
        bytes = outcome.bytes_written,
        "Detail run complete"
    );

    Ok(())
}

/// Saturate a block size flag into `u32`. Negative values become 0 and so
/// fail the minimum check with the usual diagnostic.
fn block_arg(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

/// Basename of argv[0], used to prefix diagnostics.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "pixeldetail".to_string())
}
