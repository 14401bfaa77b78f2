use clap::Parser;
use color_eyre::eyre::Result;
use rand::prelude::*;

use snowman_rs::{
    cli::Cli,
    constants::snowman::CODE_LENGTH,
    snowman,
    utils::{initialize_logging, initialize_panic_handler},
};

fn run() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = Cli::parse();
    let codes = if args.codes.is_empty() { vec![random_code()] } else { args.codes };

    for code in codes {
        tracing::info!("Drawing snowman {code}");
        println!("{}\n", snowman::render(code)?);
    }

    Ok(())
}

// Eight digits sampled from 1..=4, always a valid code
fn random_code() -> i64 {
    let mut rng = thread_rng();
    (0..CODE_LENGTH).fold(0i64, |code, _| code * 10 + rng.gen_range(1..=4))
}

fn main() -> Result<()> {
    if let Err(e) = run() {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
