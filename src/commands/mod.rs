//! Commands run by the CLI

pub mod generate;
