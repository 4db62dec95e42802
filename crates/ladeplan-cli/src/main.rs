mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ladeplan",
    version,
    about = "Evaluate loading plans: components, carriers and weights"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads a loading plan.
#[derive(Args)]
struct InputArgs {
    /// Path to a PDF loading plan, or extracted text with form-feed page breaks
    input_file: PathBuf,

    /// Custom vocabulary JSON file (default: built-in Verladeplan vocabulary)
    #[arg(long, value_name = "FILE")]
    vocabulary: Option<PathBuf>,

    /// Require both row index and side marker (L/R) on data rows
    #[arg(long)]
    strict_rows: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a loading plan into extraction records (without aggregating)
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Filter, sort and total a loading plan per carrier
    Summarize {
        #[command(flatten)]
        input: InputArgs,

        /// Carrier type(s) to include, e.g. PB (default: all observed types)
        #[arg(short = 't', long = "carrier-type", value_name = "TYPE")]
        carrier_types: Vec<String>,

        /// Insert type(s) to leave out, e.g. "Einlage 80" (default: all observed inserts)
        #[arg(short = 'x', long = "exclude-insert", value_name = "INSERT")]
        exclude_inserts: Vec<String>,

        /// Keep every insert in the component list
        #[arg(long, conflicts_with = "exclude_inserts")]
        keep_inserts: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate keyword vocabularies
    Vocabulary {
        #[command(subcommand)]
        action: VocabularyAction,
    },
}

#[derive(Subcommand)]
enum VocabularyAction {
    /// Print the built-in vocabulary
    Show,
    /// Print the vocabulary JSON schema with field descriptions
    Schema,
    /// Validate a custom vocabulary file
    Validate {
        /// Path to JSON vocabulary file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, output, out } => commands::parse::run(&input, &output, out),
        Commands::Summarize {
            input,
            carrier_types,
            exclude_inserts,
            keep_inserts,
            output,
        } => commands::summarize::run(
            &input,
            carrier_types,
            exclude_inserts,
            keep_inserts,
            &output,
        ),
        Commands::Vocabulary { action } => match action {
            VocabularyAction::Show => commands::vocabulary::show(),
            VocabularyAction::Schema => commands::vocabulary::schema(),
            VocabularyAction::Validate { file } => commands::vocabulary::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
