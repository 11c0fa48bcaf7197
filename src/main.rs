//! Tako CLI entry point.

use clap::Parser;
use tako::cli::{self, Cli, Commands, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Symbols(args) => cli::run_symbols(args),
        Commands::Grep(args) => cli::run_grep(args),
        Commands::Tree(args) => cli::run_tree(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
