use std::{fs, io};

use clap::Parser;
use pyrite::run;

/// pyrite is an interpreter for a small, indentation-structured scripting
/// language with classes, methods, and single inheritance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pyrite to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&script, &mut stdout) {
        eprintln!("{e}");
    }
}
