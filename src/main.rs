// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io, process::ExitCode};

use clap::Parser;

use codestat::{app, args::Args, logging};
use codestat_ports::CancellationToken;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.global.verbose, args.global.quiet);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    if let Err(err) = ctrlc::set_handler(move || on_interrupt.cancel()) {
        log::warn!("Ctrl-C handler unavailable: {err}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match app::run(&args, &cancel, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = anyhow::Error::new(err);
            log::debug!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
