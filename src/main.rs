use clap::Parser;
use downtidy::cli::{Cli, run_cli};

fn main() {
    let cli = Cli::parse();
    run_cli(&cli);
}
