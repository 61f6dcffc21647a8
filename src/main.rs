use std::io::{stdin, stdout, BufWriter};

use clap::Parser;
use expense_tracker::app::{self, Cli};

fn main() {
    let cli = Cli::parse();
    expense_tracker::init_tracing(cli.verbose);

    let stdin = stdin();
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    if let Err(e) = app::run(&cli, stdin.lock(), writer) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
