use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use font_preview_client::{
    adapters::cli::{self, CliError},
    domain::config::converter::ConverterConfig,
};

#[derive(Parser)]
#[command(version, about = "Upload OTF fonts for conversion and compare them with the TTF result")]
struct Cli {
    /// Conversion endpoint (overrides CONVERTER_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the converter UI (default)
    Serve {
        /// Address to listen on (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
    },
    /// Convert one file, write the TTF and print the verification report
    Convert {
        /// OTF file to convert
        file: PathBuf,

        /// Directory the converted font is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<(), CliError> {
    let mut config = ConverterConfig::from_env()?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    match args.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            cli::serve(&config).await
        }
        Command::Convert { file, output_dir } => {
            let output = cli::convert_file(&config, &file, &output_dir).await?;
            print!("{}", output.report);
            println!("\nSaved to {}", output.output_path.display());
            Ok(())
        }
    }
}
