mod cli;
mod report_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    if let Err(code) = report_cmd::run(&cli) {
        std::process::exit(code);
    }
}
