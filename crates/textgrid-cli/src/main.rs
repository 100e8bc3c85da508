mod cli;
mod columns_cmd;
mod grid_cmd;
mod input;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Grid {
            ref file,
            page,
            ref format,
            percent_decode,
        } => grid_cmd::run(file, page, format, percent_decode),
        cli::Commands::Columns {
            ref file,
            page,
            ref format,
            percent_decode,
        } => columns_cmd::run(file, page, format, percent_decode),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
