use std::{io, process::ExitCode};

use embedcheck::{compare::report, config::ComparePaths};

fn main() -> ExitCode {
    // stdout carries the verdict line only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    report(&ComparePaths::default(), &mut io::stdout().lock())
}
