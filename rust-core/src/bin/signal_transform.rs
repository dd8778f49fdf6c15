//! Command-line front end for the transform engine.
//!
//! Usage: signal-transform <fft|convolve|stft|health> [request.json]

use clap::Parser;
use signal_transform::cli::{run, Args};

fn main() {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", err.to_json());
            std::process::exit(err.exit_code());
        }
    }
}
