use std::fs;

use clap::{Parser, ValueEnum};
use summa::{Operation, calculate};
use tracing_subscriber::EnvFilter;

/// summa is an easy to use calculator over delimited strings of numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells summa to look at a file instead of an inline input string.
    #[arg(short, long)]
    file: bool,

    /// The aggregate computed over the parsed numbers.
    #[arg(short, long, value_enum, default_value = "add")]
    operation: OperationArg,

    /// Increases log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OperationArg {
    Add,
    Multiply,
    Subtract,
    Divide,
}

impl From<OperationArg> for Operation {
    fn from(operation: OperationArg) -> Self {
        match operation {
            OperationArg::Add => Self::Add,
            OperationArg::Multiply => Self::Multiply,
            OperationArg::Subtract => Self::Subtract,
            OperationArg::Divide => Self::Divide,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "summa=warn",
        1 => "summa=debug",
        _ => "summa=trace",
    };

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new(level)))
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let input = if args.file {
        let contents = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        });

        // Editors and shells terminate files with a newline, which would
        // otherwise always trip the trailing-separator rule.
        contents.trim_end_matches(['\r', '\n']).to_string()
    } else {
        args.contents
    };

    match calculate(&input, args.operation.into()) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
