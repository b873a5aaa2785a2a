use std::{fs, io};

use clap::Parser;
use monkey::{get_result, logging, repl};

/// monkey runs programs written in the Monkey programming language.
///
/// Without any contents it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the value of the
    /// last statement of a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script, or a path with `--file`. Omit to start the REPL.
    contents: Option<String>,
}

fn main() {
    logging::init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl::start(io::stdin().lock(), io::stdout().lock()) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. \
                                                    Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
