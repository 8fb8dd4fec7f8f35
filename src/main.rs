use std::fs;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use web_calc::interpreter::{evaluator::evaluate, parser::parse_source};

/// web-calc evaluates an arithmetic expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells web-calc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression tree before the result.
    #[arg(short, long)]
    ast: bool,

    /// The expression, or a path when `--file` is given.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let result = parse_source(&expression).and_then(|expr| {
                                               if args.ast {
                                                   print!("{}", expr.tree());
                                               }
                                               Ok(evaluate(&expr)?)
                                           });

    match result {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
