pub mod cli;
pub mod constants;
pub mod snowman;
pub mod utils;

pub use snowman::{render, validate, InvalidCodeError};
