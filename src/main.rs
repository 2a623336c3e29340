use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use path_context::{ExtractConfig, PathContextExtractor};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Path-context extraction for Python snippets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract path contexts from one snippet
    Extract {
        /// Snippet file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Turn a `[{code_id, code, label}]` dataset into shuffled training records
    Transform {
        /// Input dataset (JSON array)
        #[arg(short, long, default_value = "./data.json")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "./training_data.json")]
        output: PathBuf,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// JSON array of {start_token, path, end_token}
    Json,
    /// One `start,path,end` line per context
    Lines,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Optional .env in the working directory.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,path_context=info,training_data=info"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = ExtractConfig::from_env()?;
    info!(
        max_path_length = config.max_path_length,
        max_path_width = config.max_path_width,
        max_contexts = config.max_contexts,
        "Extraction limits"
    );
    let extractor = PathContextExtractor::new(config);

    match cli.command {
        Command::Extract { input, format } => run_extract(&extractor, input, format),
        Command::Transform {
            input,
            output,
            seed,
        } => {
            let summary = training_data::transform_file(&extractor, &input, &output, seed)
                .with_context(|| format!("transforming {}", input.display()))?;
            info!(
                examples = summary.examples,
                contexts = summary.contexts,
                "Training data written to {}",
                output.display()
            );
            Ok(())
        }
    }
}

fn run_extract(
    extractor: &PathContextExtractor,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let source = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    match format {
        OutputFormat::Json => {
            let records = extractor.extract_records(&source)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Lines => {
            for ctx in extractor.extract(&source)? {
                println!("{ctx}");
            }
        }
    }
    Ok(())
}
