use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Snowman codes to draw: eight digits, each 1-4, e.g. 11114411
    #[arg(allow_negative_numbers = true)]
    pub codes: Vec<i64>,
}
