use clap::Parser;

use shared_utils::cli::Args;
use shared_utils::commands;

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match commands::run(&args) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
