use std::fs;

use clap::Parser;
use numex::evaluate;

/// numex evaluates arithmetic expressions over `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numex to read the expression from a file instead of the
    /// argument itself.
    #[arg(short, long)]
    file: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    println!("{}", evaluate(&expression));
}
