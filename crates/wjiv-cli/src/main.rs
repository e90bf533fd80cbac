mod cli;
mod layout_cmd;
mod lines_cmd;
mod parse_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Parse {
            ref files,
            ref format,
            ref options,
        } => parse_cmd::run(files, format, options),
        cli::Commands::Lines { ref file } => lines_cmd::run(file),
        cli::Commands::Layout {
            ref file,
            ref format,
        } => layout_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
