mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "solex",
    version,
    about = "Parameter extraction tool for PV system design reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the parameter record from a single PDF report
    Extract {
        /// Path to the PDF report
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract a batch of PDF reports into one CSV artifact
    Batch {
        /// Paths to the PDF reports
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Write the CSV artifact to this exact path
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Directory for the generated batch artifact
        #[arg(short = 'd', long = "out-dir", value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Batch {
            input_files,
            out,
            out_dir,
        } => commands::batch::run(input_files, out, out_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
