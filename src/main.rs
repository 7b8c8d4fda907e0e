use clap::Parser;
use face_obj_converter::{convert_file, ConvertOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// OBJ file with per-vertex coloring (`v x y z r g b` records)
    #[arg(value_name = "OBJ_FILE")]
    input: PathBuf,
    /// Defaults to the input path with ".dae" appended
    #[arg(short, long, value_name = "DAE_FILE")]
    output: Option<PathBuf>,
    /// -v for info, -vv for debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// RUST_LOG sets the filter, -v and -vv raise the global level on top of it
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    match verbose {
        0 => filter,
        1 => filter.add_directive(Level::INFO.into()),
        _ => filter.add_directive(Level::DEBUG.into()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let options = ConvertOptions {
        output: args.output,
    };
    match convert_file(&args.input, &options) {
        Ok(output) => {
            println!("{}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
