mod config;
mod logging;

use bank_ledger::run::{run, Error};
use clap::Parser;
use config::Args;
use std::fs::File;
use std::io::{self, Read};

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::set_up(args.verbose);

    let input: Box<dyn Read> = match &args.roster {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::Cursor::new(bank_ledger::input::DEMO_ROSTER)),
    };

    run(input, io::stdout().lock(), &args.scenario())
}
