use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use prism_cli::{logging, run, Cli, Io, Status};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    match run(&cli, Io { out: &mut out, err: &mut err }) {
        Ok(Status::Success) => ExitCode::SUCCESS,
        Ok(Status::Failure) => ExitCode::FAILURE,
        Err(e) => {
            let _ = writeln!(err, "Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
